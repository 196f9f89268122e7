use super::*;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::Value;
use std::sync::{Arc, Mutex};

// =========================================================================
// local endpoint
// =========================================================================

#[derive(Clone)]
struct Endpoint {
    status: StatusCode,
    delay: Duration,
    bodies: Arc<Mutex<Vec<Value>>>,
}

async fn capture(State(ep): State<Endpoint>, Json(body): Json<Value>) -> StatusCode {
    ep.bodies.lock().unwrap().push(body);
    if !ep.delay.is_zero() {
        tokio::time::sleep(ep.delay).await;
    }
    ep.status
}

async fn spawn_endpoint(status: StatusCode, delay: Duration) -> (Url, Arc<Mutex<Vec<Value>>>) {
    let bodies = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new()
        .route("/api/contact", post(capture))
        .with_state(Endpoint { status, delay, bodies: bodies.clone() });
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    let url = Url::parse(&format!("http://{addr}/api/contact")).unwrap();
    (url, bodies)
}

fn sink(url: Url, request_secs: u64) -> HttpSink {
    HttpSink::new(url, SubmitTimeouts { request_secs, connect_secs: 2 }).unwrap()
}

fn inquiry() -> ContactInquiry {
    ContactInquiry {
        first_name: "Ana".into(),
        last_name: "Lee".into(),
        email: "ana@example.com".into(),
        job_title: "CTO".into(),
        company_name: "Acme".into(),
        ..ContactInquiry::default()
    }
}

// =========================================================================
// HttpSink
// =========================================================================

#[tokio::test]
async fn posts_inquiry_as_json() {
    let (url, bodies) = spawn_endpoint(StatusCode::OK, Duration::ZERO).await;
    sink(url, 5).submit(&inquiry()).await.unwrap();

    let bodies = bodies.lock().unwrap();
    assert_eq!(bodies.len(), 1);
    assert_eq!(bodies[0], serde_json::to_value(inquiry()).unwrap());
}

#[tokio::test]
async fn any_2xx_is_success() {
    for status in [StatusCode::CREATED, StatusCode::ACCEPTED, StatusCode::NO_CONTENT] {
        let (url, _) = spawn_endpoint(status, Duration::ZERO).await;
        assert_eq!(sink(url, 5).submit(&inquiry()).await, Ok(()), "{status}");
    }
}

#[tokio::test]
async fn non_2xx_is_rejected_with_status() {
    for status in [StatusCode::BAD_REQUEST, StatusCode::TOO_MANY_REQUESTS, StatusCode::BAD_GATEWAY] {
        let (url, bodies) = spawn_endpoint(status, Duration::ZERO).await;
        let err = sink(url, 5).submit(&inquiry()).await.unwrap_err();
        assert_eq!(err, SubmissionError::Rejected { status: status.as_u16() });
        assert_eq!(bodies.lock().unwrap().len(), 1);
    }
}

#[tokio::test]
async fn unknown_path_is_rejected() {
    let (mut url, _) = spawn_endpoint(StatusCode::OK, Duration::ZERO).await;
    url.set_path("/api/missing");
    let err = sink(url, 5).submit(&inquiry()).await.unwrap_err();
    assert_eq!(err, SubmissionError::Rejected { status: 404 });
}

#[tokio::test]
async fn slow_endpoint_times_out() {
    let (url, _) = spawn_endpoint(StatusCode::OK, Duration::from_secs(3)).await;
    let err = sink(url, 1).submit(&inquiry()).await.unwrap_err();
    assert_eq!(err, SubmissionError::Timeout);
}

#[tokio::test]
async fn closed_port_is_transport_failure() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let url = Url::parse(&format!("http://{addr}/api/contact")).unwrap();
    let err = sink(url, 5).submit(&inquiry()).await.unwrap_err();
    assert!(matches!(err, SubmissionError::Transport(_)), "got {err:?}");
}

#[test]
fn from_config_uses_configured_endpoint() {
    let config = ContactConfig::from_lookup(|key| {
        (key == "CONTACT_ENDPOINT").then(|| "https://forms.example.com/api/contact".to_owned())
    })
    .unwrap();
    let sink = HttpSink::from_config(&config).unwrap();
    assert_eq!(sink.endpoint().as_str(), "https://forms.example.com/api/contact");
}
