//! HTTP route handlers.

use askama::Template;
use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use serde::de::DeserializeOwned;
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::booking::BookingError;
use crate::domain::{StationId, TravelerId};
use crate::network::StationDirectory;
use crate::planner::RouteError;

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/stations", get(list_stations))
        .route("/stations/lookup", get(lookup_station))
        .route("/routes", post(plan_route))
        .route("/bookings", post(create_booking))
        .route("/bookings/verify", post(verify_booking))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Parse a JSON body, turning failures into a 400 with the parser message.
fn parse_json<T: DeserializeOwned>(body: &Bytes) -> Result<T, AppError> {
    serde_json::from_slice(body).map_err(|e| AppError::BadRequest {
        message: format!("Invalid JSON: {e}"),
    })
}

/// Resolve a station reference against the directory.
///
/// Unknown names and ids are the caller's mistake, so they surface as 400s
/// before the planner is involved.
fn resolve_station(directory: &StationDirectory, station: &StationRef) -> Result<StationId, AppError> {
    match station {
        StationRef::Id(id) if directory.contains(*id) => Ok(*id),
        StationRef::Id(id) => Err(AppError::BadRequest {
            message: format!("Unknown station id: {id}"),
        }),
        StationRef::Name(name) => directory.find_by_name(name).ok_or_else(|| AppError::BadRequest {
            message: format!("Unknown station name: {name}"),
        }),
    }
}

/// Metro information sheet: every station with its metadata.
async fn list_stations(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    if accepts_html(&headers) {
        let template = StationSheetTemplate {
            stations: state
                .directory
                .stations()
                .map(StationView::from_station)
                .collect(),
        };
        let html = template.render().map_err(|e| AppError::Internal {
            message: format!("Template error: {e}"),
        })?;

        Ok(Html(html).into_response())
    } else {
        let stations = state.directory.stations().cloned().collect();
        Ok(Json(StationListResponse { stations }).into_response())
    }
}

/// Look a station up by name.
async fn lookup_station(
    State(state): State<AppState>,
    Query(req): Query<StationLookupRequest>,
) -> Result<Json<StationLookupResponse>, AppError> {
    let id = state
        .directory
        .find_by_name(&req.name)
        .ok_or_else(|| AppError::NotFound {
            message: format!("Unknown station name: {}", req.name),
        })?;

    Ok(Json(StationLookupResponse {
        id,
        name: state.directory.display_name(id),
    }))
}

/// Plan a route without booking it.
async fn plan_route(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<RouteResponse>, AppError> {
    let req: RouteRequest = parse_json(&body)?;
    let from = resolve_station(&state.directory, &req.from)?;
    let to = resolve_station(&state.directory, &req.to)?;

    let route = state.planner.find_route(from, to).await?;

    Ok(Json(RouteResponse::from_route(&route, &state.directory)))
}

/// Plan a route and issue a signed booking for it.
async fn create_booking(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, AppError> {
    let req: BookingRequest = parse_json(&body)?;
    let traveler = TravelerId::new(req.traveler_id).map_err(|e| AppError::BadRequest {
        message: e.to_string(),
    })?;
    let from = resolve_station(&state.directory, &req.from)?;
    let to = resolve_station(&state.directory, &req.to)?;

    let route = state.planner.find_route(from, to).await?;
    let booking = state.issuer.issue(traveler, &route)?;

    if accepts_html(&headers) {
        let template = BookingTemplate {
            booking: BookingView::from_booking(&booking, &state.directory),
        };
        let html = template.render().map_err(|e| AppError::Internal {
            message: format!("Template error: {e}"),
        })?;

        Ok(Html(html).into_response())
    } else {
        Ok(Json(BookingResponse::from_booking(&booking, &state.directory)).into_response())
    }
}

/// Check a booking token.
///
/// An invalid token is a normal answer (`valid: false`), not an error.
async fn verify_booking(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<VerifyResponse>, AppError> {
    let req: VerifyRequest = parse_json(&body)?;

    let response = match state.issuer.verify(&req.token) {
        Ok(booking_id) => VerifyResponse {
            valid: true,
            booking_id: Some(booking_id.to_string()),
            reason: None,
        },
        Err(e) => VerifyResponse {
            valid: false,
            booking_id: None,
            reason: Some(e.to_string()),
        },
    };

    Ok(Json(response))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<RouteError> for AppError {
    fn from(e: RouteError) -> Self {
        match e {
            RouteError::NoPathFound { .. } => AppError::NotFound {
                message: e.to_string(),
            },
        }
    }
}

impl From<BookingError> for AppError {
    fn from(e: BookingError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, "{message}");
        } else {
            warn!(%status, "{message}");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::{BookingIssuer, TokenSigner};
    use crate::cache::CacheConfig;
    use crate::domain::Station;
    use crate::network::{MetroNetwork, NetworkDescription};

    fn state_for(description: NetworkDescription) -> AppState {
        let network = MetroNetwork::build(description).unwrap();
        let issuer = BookingIssuer::new(TokenSigner::new("test secret").unwrap());
        AppState::new(network, issuer, &CacheConfig::default())
    }

    fn state() -> AppState {
        state_for(NetworkDescription::default_seed())
    }

    fn html_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, "text/html".parse().unwrap());
        headers
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn health_is_ok() {
        assert_eq!(health().await, "ok");
    }

    #[test]
    fn accepts_html_detection() {
        assert!(accepts_html(&html_headers()));
        assert!(!accepts_html(&HeaderMap::new()));
    }

    #[tokio::test]
    async fn plan_route_by_name() {
        let body = Bytes::from(r#"{"from": "sec-51", "to": "PARI CHOWK"}"#);
        let Json(route) = plan_route(State(state()), body).await.unwrap();

        assert_eq!(route.path.iter().map(|id| id.get()).collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
        assert_eq!(
            route.stations,
            vec!["SEC-51", "SEC-50", "SEC-101", "SEC-81", "PARI CHOWK"]
        );
        assert_eq!(route.total_distance, 20);
        assert_eq!(route.total_time, 23);
    }

    #[tokio::test]
    async fn plan_route_by_id() {
        let body = Bytes::from(r#"{"from": 3, "to": 4}"#);
        let Json(route) = plan_route(State(state()), body).await.unwrap();

        assert_eq!(route.stations, vec!["SEC-101", "SEC-81"]);
        assert_eq!(route.total_time, 9);
    }

    #[tokio::test]
    async fn plan_route_rejects_unknown_stations() {
        let err = plan_route(State(state()), Bytes::from(r#"{"from": "Nowhere", "to": 1}"#))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest { ref message } if message.contains("Nowhere")));

        let err = plan_route(State(state()), Bytes::from(r#"{"from": 1, "to": 42}"#))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest { ref message } if message.contains("42")));
    }

    #[tokio::test]
    async fn plan_route_rejects_bad_json() {
        let err = plan_route(State(state()), Bytes::from("{not json"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest { .. }));
    }

    #[tokio::test]
    async fn plan_route_without_path_is_not_found() {
        let mut description = NetworkDescription::default_seed();
        description
            .stations
            .push(Station::new(StationId::new(6), "Depot", "Grey"));

        let err = plan_route(State(state_for(description)), Bytes::from(r#"{"from": 1, "to": 6}"#))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn create_booking_returns_verifiable_token() {
        let state = state();
        let body = Bytes::from(r#"{"traveler_id": "alice", "from": 1, "to": "pari chowk"}"#);

        let response = create_booking(State(state.clone()), HeaderMap::new(), body)
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["traveler_id"], "alice");
        assert_eq!(json["total_distance"], 20);
        assert_eq!(json["total_time"], 23);

        let token = json["token"].as_str().unwrap();
        let booking_id = state.issuer.verify(token).unwrap();
        assert_eq!(json["booking_id"], booking_id.as_str());
    }

    #[tokio::test]
    async fn create_booking_renders_html() {
        let body = Bytes::from(r#"{"traveler_id": "alice", "from": 1, "to": 2}"#);

        let response = create_booking(State(state()), html_headers(), body)
            .await
            .unwrap();
        let content_type = response.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .to_string();
        assert!(content_type.starts_with("text/html"));

        let html = body_text(response).await;
        assert!(html.contains("SEC-51 → SEC-50"));
        assert!(html.contains("5 km"));
    }

    #[tokio::test]
    async fn create_booking_requires_traveler() {
        let body = Bytes::from(r#"{"traveler_id": "", "from": 1, "to": 2}"#);
        let err = create_booking(State(state()), HeaderMap::new(), body)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest { .. }));
    }

    #[tokio::test]
    async fn verify_booking_reports_validity() {
        let state = state();
        let booking = state
            .issuer
            .issue(
                TravelerId::new("bob".to_string()).unwrap(),
                &crate::planner::find_route(StationId::new(1), StationId::new(2), state.planner.graph())
                    .unwrap(),
            )
            .unwrap();

        let body = Bytes::from(serde_json::json!({ "token": booking.token }).to_string());
        let Json(valid) = verify_booking(State(state.clone()), body).await.unwrap();
        assert!(valid.valid);
        assert_eq!(valid.booking_id.as_deref(), Some(booking.id.as_str()));

        let tampered = booking.token.replacen(&booking.id.as_str()[..1], "x", 1);
        let body = Bytes::from(serde_json::json!({ "token": tampered }).to_string());
        let Json(invalid) = verify_booking(State(state), body).await.unwrap();
        assert!(!invalid.valid);
        assert!(invalid.booking_id.is_none());
        assert!(invalid.reason.is_some());
    }

    #[tokio::test]
    async fn list_stations_json_and_html() {
        let response = list_stations(State(state()), HeaderMap::new()).await.unwrap();
        let json = body_json(response).await;
        let stations = json["stations"].as_array().unwrap();
        assert_eq!(stations.len(), 5);
        assert_eq!(stations[2]["name"], "SEC-101");
        assert_eq!(stations[2]["is_interchange"], true);

        let response = list_stations(State(state()), html_headers()).await.unwrap();
        let html = body_text(response).await;
        assert!(html.contains("Metro Information Sheet"));
        assert!(html.contains("Residential Hub"));
    }

    #[tokio::test]
    async fn lookup_station_ignores_case() {
        let Json(found) = lookup_station(
            State(state()),
            Query(StationLookupRequest {
                name: "sec-51".to_string(),
            }),
        )
        .await
        .unwrap();
        assert_eq!(found.id, StationId::new(1));
        assert_eq!(found.name, "SEC-51");

        let err = lookup_station(
            State(state()),
            Query(StationLookupRequest {
                name: "SEC-99".to_string(),
            }),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn app_error_status_codes() {
        let response = AppError::BadRequest {
            message: "bad".into(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "bad");

        let response = AppError::from(RouteError::NoPathFound {
            from: StationId::new(1),
            to: StationId::new(6),
        })
        .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = AppError::Internal {
            message: "boom".into(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
