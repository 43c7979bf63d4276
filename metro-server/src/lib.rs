//! Metro route planner server.
//!
//! Models a metro network as a weighted graph, finds minimum-distance
//! routes between stations and issues signed bookings for them.

pub mod booking;
pub mod cache;
pub mod config;
pub mod domain;
pub mod network;
pub mod planner;
pub mod web;
