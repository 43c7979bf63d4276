//! Askama templates for the HTML views.

use askama::Template;

use crate::booking::Booking;
use crate::domain::Station;
use crate::network::StationDirectory;

use super::dto::station_names;

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Metro information sheet listing every station.
#[derive(Template)]
#[template(path = "sheet.html")]
pub struct StationSheetTemplate {
    pub stations: Vec<StationView>,
}

// ============================================================================
// Fragment Templates (no base.html)
// ============================================================================

/// Ticket fragment for an issued booking.
#[derive(Template)]
#[template(path = "booking.html")]
pub struct BookingTemplate {
    pub booking: BookingView,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// Station row for the information sheet.
#[derive(Debug, Clone)]
pub struct StationView {
    pub id: u32,
    pub name: String,
    pub line: String,
    pub is_interchange: bool,
    pub nearby_place: String,
    pub walking_time_mins: u32,
}

impl StationView {
    /// Create from a domain Station.
    pub fn from_station(station: &Station) -> Self {
        Self {
            id: station.id.get(),
            name: station.name.clone(),
            line: station.line.clone(),
            is_interchange: station.is_interchange,
            nearby_place: station.nearby_place.clone(),
            walking_time_mins: station.walking_time_mins,
        }
    }

    /// "Yes"/"No" label for the interchange column.
    pub fn interchange_label(&self) -> &'static str {
        if self.is_interchange { "Yes" } else { "No" }
    }
}

/// Booking view model for templates.
#[derive(Debug, Clone)]
pub struct BookingView {
    pub booking_id: String,
    pub traveler_id: String,
    pub stations: Vec<String>,
    pub total_distance: u64,
    pub total_time: u64,
    pub token: String,
    pub issued_at: String,
}

impl BookingView {
    /// Create from a domain Booking.
    pub fn from_booking(booking: &Booking, directory: &StationDirectory) -> Self {
        Self {
            booking_id: booking.id.to_string(),
            traveler_id: booking.traveler_id.to_string(),
            stations: station_names(&booking.path, directory),
            total_distance: booking.total_distance,
            total_time: booking.total_time,
            token: booking.token.clone(),
            issued_at: booking.issued_at.format("%Y-%m-%d %H:%M UTC").to_string(),
        }
    }

    /// Route summary, e.g. "SEC-51 → SEC-50 → SEC-101".
    pub fn route_summary(&self) -> String {
        self.stations.join(" → ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StationId;

    #[test]
    fn interchange_label() {
        let plain = StationView::from_station(&Station::new(StationId::new(1), "SEC-51", "Blue"));
        assert_eq!(plain.interchange_label(), "No");

        let hub = StationView::from_station(
            &Station::new(StationId::new(3), "SEC-101", "Blue").interchange(),
        );
        assert_eq!(hub.interchange_label(), "Yes");
    }

    #[test]
    fn sheet_renders_every_station() {
        let template = StationSheetTemplate {
            stations: vec![
                StationView::from_station(
                    &Station::new(StationId::new(1), "SEC-51", "Blue").near("Mall Area", 5),
                ),
                StationView::from_station(
                    &Station::new(StationId::new(5), "PARI CHOWK", "Red")
                        .interchange()
                        .near("University", 6),
                ),
            ],
        };

        let html = template.render().unwrap();
        assert!(html.contains("SEC-51"));
        assert!(html.contains("Mall Area"));
        assert!(html.contains("PARI CHOWK"));
        assert!(html.contains("6 mins"));
    }

    #[test]
    fn booking_fragment_renders_token_and_route() {
        let view = BookingView {
            booking_id: "b-1".to_string(),
            traveler_id: "alice".to_string(),
            stations: vec!["SEC-51".to_string(), "SEC-50".to_string()],
            total_distance: 5,
            total_time: 5,
            token: "b-1.c2ln".to_string(),
            issued_at: "2026-10-19 08:00 UTC".to_string(),
        };
        assert_eq!(view.route_summary(), "SEC-51 → SEC-50");

        let html = BookingTemplate { booking: view }.render().unwrap();
        assert!(html.contains("b-1.c2ln"));
        assert!(html.contains("SEC-51 → SEC-50"));
        assert!(html.contains("5 km"));
    }
}
