use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    response::Response,
    Router,
};
use isutrain_api::{app, AppState};
use isutrain_core::{injector, IsutrainMock, Operation, OperationDelays};
use isutrain_shared::{ReservationResponse, SeatReservation, Station, Train, TrainSeat};
use isutrain_store::PaymentMock;
use tower::ServiceExt;

struct Harness {
    mock: Arc<IsutrainMock>,
    payments: Arc<PaymentMock>,
}

impl Harness {
    fn new() -> Self {
        Self::with_delays(OperationDelays::default())
    }

    fn with_delays(delays: OperationDelays) -> Self {
        let payments = Arc::new(PaymentMock::new());
        let mock = Arc::new(IsutrainMock::with_delays(payments.clone(), delays));
        Self { mock, payments }
    }

    fn router(&self) -> Router {
        app(AppState::new(self.mock.clone()))
    }

    async fn send(&self, req: Request<Body>) -> Response {
        self.router().oneshot(req).await.unwrap()
    }

    async fn get(&self, uri: &str) -> Response {
        self.send(Request::get(uri).body(Body::empty()).unwrap()).await
    }

    async fn post_form(&self, uri: &str, form: &str) -> Response {
        let req = Request::post(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(form.to_string()))
            .unwrap();
        self.send(req).await
    }

    async fn call(&self, method: Method, uri: &str) -> Response {
        let req = Request::builder().method(method).uri(uri).body(Body::empty()).unwrap();
        self.send(req).await
    }
}

async fn body_bytes(res: Response) -> Vec<u8> {
    to_bytes(res.into_body(), usize::MAX).await.unwrap().to_vec()
}

async fn body_text(res: Response) -> String {
    String::from_utf8(body_bytes(res).await).unwrap()
}

const SEARCH: &str = "/train/search?use_at=2020-12-19T10%3A00%3A00%2B09%3A00&from=Tokyo&to=Osaka";

// ============================================================================
// End-to-end scenarios
// ============================================================================

#[tokio::test]
async fn test_register_accepts_credentials() {
    let h = Harness::new();
    let res = h.post_form("/register", "username=alice&password=pw").await;

    assert_eq!(res.status(), StatusCode::ACCEPTED);
    assert_eq!(body_text(res).await, "Accepted");
}

#[tokio::test]
async fn test_search_returns_multiple_tiers() {
    let h = Harness::new();
    let res = h.get(SEARCH).await;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.headers()[header::CONTENT_TYPE], "application/json");

    let trains: Vec<Train> = serde_json::from_slice(&body_bytes(res).await).unwrap();
    assert!(trains.iter().any(|t| t.class == "のぞみ"));
    assert!(trains.iter().any(|t| t.class == "こだま"));
}

#[tokio::test]
async fn test_commit_records_one_payment() {
    let h = Harness::new();
    let res = h.call(Method::POST, "/reservation/42/commit").await;

    assert_eq!(res.status(), StatusCode::ACCEPTED);
    assert_eq!(body_text(res).await, "Accepted");
    assert_eq!(h.payments.payment_count(), 1);
}

#[tokio::test]
async fn test_cancel_with_non_numeric_id_is_rejected() {
    let h = Harness::new();

    for method in [Method::DELETE, Method::POST] {
        let res = h.call(method, "/reservation/abc/cancel").await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }
    assert_eq!(h.payments.payment_count(), 0);
}

#[tokio::test]
async fn test_list_reservations_is_pending() {
    let h = Harness::new();
    let res = h.get("/reservation").await;
    assert_eq!(res.status(), StatusCode::OK);

    let body = body_bytes(res).await;
    let raw: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(raw[0]["status"], "pending");

    let history: Vec<SeatReservation> = serde_json::from_slice(&body).unwrap();
    assert!(!history.is_empty());
    assert_ne!(history[0].id, 0);
}

// ============================================================================
// Remaining operations
// ============================================================================

#[tokio::test]
async fn test_initialize_and_login() {
    let h = Harness::new();

    let res = h.call(Method::POST, "/initialize").await;
    assert_eq!(res.status(), StatusCode::ACCEPTED);

    let res = h.post_form("/login", "username=alice&password=pw").await;
    assert_eq!(res.status(), StatusCode::ACCEPTED);
}

#[tokio::test]
async fn test_login_requires_both_fields() {
    let h = Harness::new();

    for form in ["username=alice", "password=pw", "username=&password=pw", ""] {
        let res = h.post_form("/login", form).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "form {:?}", form);
    }
}

#[tokio::test]
async fn test_register_without_form_encoding_is_rejected() {
    let h = Harness::new();
    let req = Request::post("/register")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"username":"alice","password":"pw"}"#))
        .unwrap();

    let res = h.send(req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(res).await, "Bad Request");
}

#[tokio::test]
async fn test_list_stations() {
    let h = Harness::new();
    let res = h.get("/stations").await;
    assert_eq!(res.status(), StatusCode::OK);

    let stations: Vec<Station> = serde_json::from_slice(&body_bytes(res).await).unwrap();
    assert!(!stations.is_empty());
}

#[tokio::test]
async fn test_list_train_seats_with_repeated_keys() {
    let h = Harness::new();
    let res = h
        .get("/train/seats?train_class=nozomi&train_class=kodama&train_name=96")
        .await;
    assert_eq!(res.status(), StatusCode::OK);

    let seats: Vec<TrainSeat> = serde_json::from_slice(&body_bytes(res).await).unwrap();
    assert!(!seats.is_empty());
}

#[tokio::test]
async fn test_reserve_ignores_payload() {
    let h = Harness::new();
    let req = Request::post("/reserve")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("not even json"))
        .unwrap();

    let res = h.send(req).await;
    assert_eq!(res.status(), StatusCode::ACCEPTED);

    let result: ReservationResponse = serde_json::from_slice(&body_bytes(res).await).unwrap();
    assert!(result.is_ok);
    assert!(!result.reservation_id.is_empty());
}

#[tokio::test]
async fn test_cancel_answers_no_content() {
    let h = Harness::new();
    let res = h.call(Method::DELETE, "/reservation/42/cancel").await;

    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(res).await.is_empty());
}

// ============================================================================
// Properties
// ============================================================================

#[tokio::test]
async fn test_search_rejects_bad_use_at() {
    let h = Harness::new();

    for uri in [
        "/train/search?from=Tokyo&to=Osaka",
        "/train/search?use_at=&from=Tokyo&to=Osaka",
        "/train/search?use_at=yesterday&from=Tokyo&to=Osaka",
        "/train/search?use_at=1970-01-01T00%3A00%3A00Z&from=Tokyo&to=Osaka",
        "/train/search?use_at=2020-12-19T10%3A00%3A00%2B09%3A00&to=Osaka",
    ] {
        let res = h.get(uri).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "uri {}", uri);
    }
}

#[tokio::test]
async fn test_seats_require_class_and_name() {
    let h = Harness::new();

    for uri in [
        "/train/seats",
        "/train/seats?train_class=nozomi",
        "/train/seats?train_name=96",
    ] {
        let res = h.get(uri).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "uri {}", uri);
    }
}

#[tokio::test]
async fn test_non_numeric_commit_records_no_payment() {
    let h = Harness::new();

    for id in ["abc", "0", "-5", "4.2"] {
        let res = h.call(Method::POST, &format!("/reservation/{}/commit", id)).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "id {}", id);
    }
    assert_eq!(h.payments.payment_count(), 0);
}

#[tokio::test]
async fn test_failing_hook_overrides_valid_input() {
    let h = Harness::new();
    h.mock.inject(injector::fail_paths(["/register", "/reservation/42/commit", "/train/search"]));

    let res = h.post_form("/register", "username=alice&password=pw").await;
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_text(res).await, "Internal Server Error");

    let res = h.call(Method::POST, "/reservation/42/commit").await;
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(h.payments.payment_count(), 0);

    let res = h.get(SEARCH).await;
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);

    // Other paths are untouched
    let res = h.get("/stations").await;
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_hook_runs_before_validation() {
    let h = Harness::new();
    h.mock.inject(|_| Err("backend down".into()));

    let res = h.get("/train/search").await;
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let res = h.call(Method::DELETE, "/reservation/abc/cancel").await;
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_hook_can_be_restored() {
    let h = Harness::new();

    h.mock.inject(|_| Err("backend down".into()));
    assert_eq!(h.get("/stations").await.status(), StatusCode::INTERNAL_SERVER_ERROR);

    h.mock.inject(|_| Ok(()));
    assert_eq!(h.get("/stations").await.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_configured_delay_is_applied() {
    let mut delays = OperationDelays::default();
    delays.set(Operation::ListReservations, Duration::from_millis(80));
    let h = Harness::with_delays(delays);

    let started = Instant::now();
    let res = h.get("/reservation").await;
    assert_eq!(res.status(), StatusCode::OK);
    assert!(started.elapsed() >= Duration::from_millis(80));
}

#[tokio::test]
async fn test_delay_does_not_block_other_calls() {
    let mut delays = OperationDelays::default();
    delays.set(Operation::Reserve, Duration::from_millis(300));
    let h = Arc::new(Harness::with_delays(delays));

    let slow = {
        let h = h.clone();
        tokio::spawn(async move { h.call(Method::POST, "/reserve").await.status() })
    };

    let started = Instant::now();
    let res = h.get("/stations").await;
    assert_eq!(res.status(), StatusCode::OK);
    assert!(started.elapsed() < Duration::from_millis(300));

    assert_eq!(slow.await.unwrap(), StatusCode::ACCEPTED);
}

#[tokio::test]
async fn test_undecodable_reservation_id_still_hits_the_hook() {
    let h = Harness::new();

    let res = h.call(Method::POST, "/reservation/%FF/commit").await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    h.mock.inject(|_| Err("backend down".into()));
    let res = h.call(Method::POST, "/reservation/%FF/commit").await;
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let res = h.call(Method::DELETE, "/reservation/%FF/cancel").await;
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);

    assert_eq!(h.payments.payment_count(), 0);
}

#[tokio::test]
async fn test_hook_sees_decoded_path() {
    let h = Harness::new();
    h.mock.inject(injector::fail_paths(["/reservation/42/commit"]));

    let res = h.call(Method::POST, "/reservation/%34%32/commit").await;
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(h.payments.payment_count(), 0);
}
