//! HTTP request/response surface for the classifier
//!
//! Routes:
//! - `POST /classify`   `{ "text": "..." }` -> classification result
//! - `POST /is-task`    `{ "text": "..." }` -> task-request decision
//! - `GET  /categories` category table with keywords
//! - `GET  /health`     liveness status
//! - `GET  /metrics`    counters snapshot
//! - `GET  /`           endpoint listing

use crate::classifier::{ClassificationResult, TaskCategory, CATEGORY_KEYWORDS};
use crate::error::{ClassifierError, ClassifierResult};
use crate::observability::metrics::metrics;
use crate::service::ClassifierService;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::convert::Infallible;
use std::future::Future;
use std::net::{SocketAddr, ToSocketAddrs};
use tracing::{error, info};
use warp::http::StatusCode;
use warp::{Filter, Rejection, Reply};

/// Maximum accepted request body size in bytes
pub const MAX_BODY_BYTES: u64 = 64 * 1024;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyRequest {
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IsTaskResponse {
    pub is_task: bool,
    pub category: TaskCategory,
    pub confidence: f64,
}

impl From<&ClassificationResult> for IsTaskResponse {
    fn from(result: &ClassificationResult) -> Self {
        Self {
            is_task: result.is_task_request(),
            category: result.category,
            confidence: result.confidence,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryInfo {
    pub category: TaskCategory,
    pub keywords: &'static [&'static str],
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    timestamp: String,
    version: &'static str,
}

/// Category table as served by `GET /categories`
pub fn category_listing() -> Vec<CategoryInfo> {
    CATEGORY_KEYWORDS
        .iter()
        .map(|(category, keywords)| CategoryInfo {
            category: *category,
            keywords: *keywords,
        })
        .collect()
}

/// Build the complete route tree, including rejection handling
pub fn routes(
    service: ClassifierService,
) -> impl Filter<Extract = (impl Reply,), Error = Infallible> + Clone {
    let with_service = warp::any().map(move || service);

    let json_body = warp::body::content_length_limit(MAX_BODY_BYTES).and(warp::body::json());

    let classify_route = warp::path("classify")
        .and(warp::path::end())
        .and(warp::post())
        .and(json_body.clone())
        .and(with_service.clone())
        .and_then(handle_classify);

    let is_task_route = warp::path("is-task")
        .and(warp::path::end())
        .and(warp::post())
        .and(json_body)
        .and(with_service)
        .and_then(handle_is_task);

    let categories_route = warp::path("categories")
        .and(warp::path::end())
        .and(warp::get())
        .map(|| warp::reply::json(&category_listing()));

    let health_route = warp::path("health")
        .and(warp::path::end())
        .and(warp::get())
        .map(|| {
            warp::reply::json(&HealthResponse {
                status: "healthy",
                timestamp: chrono::Utc::now().to_rfc3339(),
                version: env!("CARGO_PKG_VERSION"),
            })
        });

    let metrics_route = warp::path("metrics")
        .and(warp::path::end())
        .and(warp::get())
        .map(|| warp::reply::json(&metrics().get_metrics()));

    let root_route = warp::path::end().and(warp::get()).map(|| {
        let mut endpoints = BTreeMap::new();
        endpoints.insert("POST /classify", "Classify text into a task category");
        endpoints.insert("POST /is-task", "Decide whether text is a task request");
        endpoints.insert("GET /categories", "Category table with keywords");
        endpoints.insert("GET /health", "Service health status");
        endpoints.insert("GET /metrics", "Classification counters");
        warp::reply::json(&endpoints)
    });

    classify_route
        .or(is_task_route)
        .or(categories_route)
        .or(health_route)
        .or(metrics_route)
        .or(root_route)
        .recover(handle_rejection)
        .with(warp::trace::request())
}

async fn handle_classify(
    request: ClassifyRequest,
    service: ClassifierService,
) -> Result<impl Reply, Infallible> {
    Ok(match service.classify(&request.text) {
        Ok(result) => warp::reply::with_status(warp::reply::json(&result), StatusCode::OK),
        Err(e) => error_reply(&e),
    })
}

async fn handle_is_task(
    request: ClassifyRequest,
    service: ClassifierService,
) -> Result<impl Reply, Infallible> {
    Ok(match service.classify(&request.text) {
        Ok(result) => warp::reply::with_status(
            warp::reply::json(&IsTaskResponse::from(&result)),
            StatusCode::OK,
        ),
        Err(e) => error_reply(&e),
    })
}

fn error_reply(e: &ClassifierError) -> warp::reply::WithStatus<warp::reply::Json> {
    let status = match e {
        ClassifierError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    warp::reply::with_status(warp::reply::json(&e.to_error_body()), status)
}

async fn handle_rejection(err: Rejection) -> Result<impl Reply, Infallible> {
    let (status, error) = if err.is_not_found() {
        (
            StatusCode::NOT_FOUND,
            ClassifierError::invalid_input("route not found"),
        )
    } else if let Some(e) = err.find::<warp::filters::body::BodyDeserializeError>() {
        (
            StatusCode::BAD_REQUEST,
            ClassifierError::invalid_input(format!("malformed request body: {e}")),
        )
    } else if err.find::<warp::reject::PayloadTooLarge>().is_some() {
        (
            StatusCode::PAYLOAD_TOO_LARGE,
            ClassifierError::invalid_input(format!(
                "request body exceeds {MAX_BODY_BYTES} bytes"
            )),
        )
    } else if err.find::<warp::reject::LengthRequired>().is_some() {
        (
            StatusCode::LENGTH_REQUIRED,
            ClassifierError::invalid_input("content-length header required"),
        )
    } else if err.find::<warp::reject::UnsupportedMediaType>().is_some() {
        (
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ClassifierError::invalid_input("expected application/json body"),
        )
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        (
            StatusCode::METHOD_NOT_ALLOWED,
            ClassifierError::invalid_input("method not allowed"),
        )
    } else {
        error!("Unhandled rejection: {:?}", err);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            ClassifierError::server_error("unhandled request rejection"),
        )
    };

    Ok(warp::reply::with_status(
        warp::reply::json(&error.to_error_body()),
        status,
    ))
}

/// Resolve a host/port pair into a bindable socket address
pub fn resolve_addr(host: &str, port: u16) -> ClassifierResult<SocketAddr> {
    (host, port)
        .to_socket_addrs()?
        .next()
        .ok_or_else(|| ClassifierError::server_error(format!("cannot resolve {host}:{port}")))
}

/// Serve until `shutdown` resolves
pub async fn serve<F>(service: ClassifierService, addr: SocketAddr, shutdown: F) -> ClassifierResult<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let (bound, server) = warp::serve(routes(service))
        .try_bind_with_graceful_shutdown(addr, shutdown)
        .map_err(|e| ClassifierError::server_error(format!("failed to bind {addr}: {e}")))?;

    info!("Classifier service listening on {}", bound);
    server.await;
    info!("Classifier service stopped");
    Ok(())
}
