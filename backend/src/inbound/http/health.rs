//! Health endpoints for the relay.
//!
//! Readiness flips on in `create_server` after both store pools have
//! connected, the replication worker has been spawned and the listener is
//! bound. Liveness flips off once the HTTP server stops, while the worker is
//! still draining delayed replica copies, so orchestrators stop routing
//! writes that could no longer be replicated.

use std::sync::atomic::{AtomicBool, Ordering};

use actix_web::{HttpResponse, get, http::header, web};

/// Readiness and liveness flags shared between `main` and the probes.
pub struct HealthState {
    ready: AtomicBool,
    live: AtomicBool,
}

impl Default for HealthState {
    fn default() -> Self {
        Self {
            ready: AtomicBool::new(false),
            live: AtomicBool::new(true),
        }
    }
}

impl HealthState {
    /// Live but not ready: nothing is accepted until startup completes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Called once the primary and replica pools are up, the replication
    /// worker is running and the socket is bound.
    pub fn mark_ready(&self) {
        self.ready.store(true, Ordering::Release);
    }

    /// Called after the server stops, before waiting on the replication
    /// drain.
    pub fn mark_unhealthy(&self) {
        self.live.store(false, Ordering::Release);
    }

    /// Whether startup has completed.
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    /// Whether the relay is still serving rather than draining.
    pub fn is_alive(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }

    fn probe_response(up: bool) -> HttpResponse {
        let mut response = if up {
            HttpResponse::Ok()
        } else {
            HttpResponse::ServiceUnavailable()
        };

        response
            .insert_header((header::CACHE_CONTROL, "no-store"))
            .finish()
    }
}

/// Readiness probe: 200 once both stores are connected and the replication
/// worker is running, 503 before that.
#[utoipa::path(
    get,
    path = "/health/ready",
    tags = ["health"],
    responses(
        (status = 200, description = "Primary and replica pools connected; replication worker running"),
        (status = 503, description = "Still starting up")
    )
)]
#[get("/health/ready")]
pub async fn ready(state: web::Data<HealthState>) -> HttpResponse {
    HealthState::probe_response(state.is_ready())
}

/// Liveness probe: 200 while serving, 503 while pending replica copies drain.
#[utoipa::path(
    get,
    path = "/health/live",
    tags = ["health"],
    responses(
        (status = 200, description = "Serving requests"),
        (status = 503, description = "Stopped; draining replication")
    )
)]
#[get("/health/live")]
pub async fn live(state: web::Data<HealthState>) -> HttpResponse {
    HealthState::probe_response(state.is_alive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use rstest::rstest;

    async fn probe(state: web::Data<HealthState>, uri: &str) -> (StatusCode, Option<String>) {
        let app = actix_test::init_service(
            App::new().app_data(state).service(ready).service(live),
        )
        .await;
        let response =
            actix_test::call_service(&app, actix_test::TestRequest::get().uri(uri).to_request())
                .await;
        let cache = response
            .headers()
            .get(header::CACHE_CONTROL)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        (response.status(), cache)
    }

    #[rstest]
    #[actix_web::test]
    async fn ready_reports_unavailable_until_marked() {
        let state = web::Data::new(HealthState::new());

        let (status, cache) = probe(state.clone(), "/health/ready").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(cache.as_deref(), Some("no-store"));

        state.mark_ready();
        let (status, _) = probe(state, "/health/ready").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[rstest]
    #[actix_web::test]
    async fn live_fails_once_draining() {
        let state = web::Data::new(HealthState::new());

        let (status, _) = probe(state.clone(), "/health/live").await;
        assert_eq!(status, StatusCode::OK);

        state.mark_unhealthy();
        let (status, _) = probe(state, "/health/live").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }

    #[rstest]
    #[actix_web::test]
    async fn draining_fails_liveness_but_keeps_readiness() {
        let state = web::Data::new(HealthState::new());
        state.mark_ready();
        state.mark_unhealthy();

        let (ready_status, _) = probe(state.clone(), "/health/ready").await;
        let (live_status, cache) = probe(state, "/health/live").await;

        assert_eq!(ready_status, StatusCode::OK);
        assert_eq!(live_status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(cache.as_deref(), Some("no-store"));
    }
}
