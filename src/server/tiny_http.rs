//! tiny_http server adapter
//!
//! Handles routing, body reading, CORS headers and response conversion.
//! Requests are served one at a time, so each message is fully parsed,
//! validated and screened before the next one is read.

use std::io::Cursor;

use serde::Serialize;
use tiny_http::{Header, Method, Request, Response, Server, StatusCode};

use swiftguard::api::{self, ApiError, ApiErrorData, SIMULATED_TIME_HEADER};
use swiftguard::service::ValidationService;

const DASHBOARD_HTML: &str = include_str!("dashboard.html");

type HttpResponse = Response<Cursor<Vec<u8>>>;

/// Bind `addr` and serve until the process exits
pub fn run(service: &ValidationService, addr: &str) -> anyhow::Result<()> {
    let server = Server::http(addr).map_err(|e| anyhow::anyhow!("Failed to start server: {e}"))?;
    log::info!("swiftguard listening on http://{addr}");

    for mut request in server.incoming_requests() {
        let response = handle_request(service, &mut request);
        log::debug!(
            "{} {} -> {}",
            request.method(),
            request.url(),
            response.status_code().0
        );
        if let Err(e) = request.respond(response) {
            log::warn!("failed to send response: {e}");
        }
    }

    Ok(())
}

// =============================================================================
// REQUEST HANDLING
// =============================================================================

/// Route a request to its handler
pub fn handle_request(service: &ValidationService, request: &mut Request) -> HttpResponse {
    let method = request.method().clone();
    let path = request.url().split('?').next().unwrap_or_default().to_string();

    let response = match (&method, path.as_str()) {
        (&Method::Options, _) => Response::from_data(Vec::new()).with_status_code(StatusCode(204)),
        (&Method::Post, "/swift") => submit(service, request),
        (&Method::Get, "/swift") => json_response(&api::last_message(service), 200),
        (&Method::Get, "/" | "/index.html") => {
            text_response(DASHBOARD_HTML, "text/html; charset=utf-8", 200)
        },
        _ => error_response(&ApiError::not_found(format!("No route for {method} {path}"))),
    };

    with_cors(response)
}

fn submit(service: &ValidationService, request: &mut Request) -> HttpResponse {
    let mut body = Vec::new();
    if let Err(e) = request.as_reader().read_to_end(&mut body) {
        return error_response(&ApiError::bad_request(format!(
            "Failed to read request body: {e}"
        )));
    }

    let simulated_time = request
        .headers()
        .iter()
        .find(|h| h.field.equiv(SIMULATED_TIME_HEADER))
        .map(|h| h.value.as_str().to_string());

    match api::submit_message(service, &body, simulated_time.as_deref()) {
        Ok(submission) => json_response(&submission.verdict, submission.status_code),
        Err(e) => error_response(&e),
    }
}

// =============================================================================
// RESPONSE CONVERSION
// =============================================================================

fn header(name: &str, value: &str) -> Option<Header> {
    Header::from_bytes(name.as_bytes(), value.as_bytes()).ok()
}

fn with_cors(response: HttpResponse) -> HttpResponse {
    [
        ("Access-Control-Allow-Origin", "*"),
        ("Access-Control-Allow-Methods", "GET, POST, OPTIONS"),
        ("Access-Control-Allow-Headers", "Content-Type, X-Simulated-Time"),
    ]
    .into_iter()
    .filter_map(|(name, value)| header(name, value))
    .fold(response, |response, h| response.with_header(h))
}

/// Create an error JSON response with appropriate status code
fn error_response(error: &ApiError) -> HttpResponse {
    json_response(&ApiErrorData::from(error), error.status_code())
}

/// Serialize data to JSON response with status code
fn json_response<T: Serialize>(data: &T, status: u16) -> HttpResponse {
    let json = serde_json::to_string(data)
        .unwrap_or_else(|_| r#"{"status":"error","message":"serialization failed"}"#.to_string());
    text_response(&json, "application/json", status)
}

fn text_response(body: &str, content_type: &str, status: u16) -> HttpResponse {
    let response = Response::from_data(body.as_bytes().to_vec()).with_status_code(StatusCode(status));
    match header("Content-Type", content_type) {
        Some(h) => response.with_header(h),
        None => response,
    }
}
