use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::State,
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use coinbank_core::DomainError;

use crate::app::{errors::ApiError, services::AppServices};
use crate::context::CustomerContext;

/// Header carrying the caller's external key.
pub const CPF_HEADER: &str = "cpf";

/// Resolve the caller from the `cpf` header before the handler runs.
///
/// A missing, non-UTF-8 or unregistered value short-circuits with
/// "Customer not found"; nothing downstream runs.
pub async fn resolve_customer(
    State(services): State<Arc<AppServices>>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let cpf = extract_cpf(req.headers())?.to_owned();

    if let Err(e) = services.read(|store| store.find(&cpf).map(|_| ())) {
        tracing::debug!("caller resolution failed: {e}");
        return Err(e);
    }

    req.extensions_mut().insert(CustomerContext::new(cpf));

    Ok(next.run(req).await)
}

/// Log one line per request with its outcome and latency.
pub async fn trace_request(req: axum::http::Request<axum::body::Body>, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let started = Instant::now();

    let res = next.run(req).await;

    let status = res.status();
    let elapsed_ms = started.elapsed().as_millis() as u64;
    if status.is_server_error() {
        tracing::error!(%method, %path, status = status.as_u16(), elapsed_ms, "request failed");
    } else {
        tracing::info!(%method, %path, status = status.as_u16(), elapsed_ms, "request handled");
    }

    res
}

fn extract_cpf(headers: &HeaderMap) -> Result<&str, ApiError> {
    let not_found = || ApiError::from(DomainError::not_found());

    let header = headers.get(CPF_HEADER).ok_or_else(not_found)?;
    header.to_str().map_err(|_| not_found())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn extracts_header_value_verbatim() {
        let mut headers = HeaderMap::new();
        headers.insert(CPF_HEADER, HeaderValue::from_static("123.456.789-00"));
        assert_eq!(extract_cpf(&headers).unwrap(), "123.456.789-00");
    }

    #[test]
    fn missing_header_is_not_found() {
        let err = extract_cpf(&HeaderMap::new()).unwrap_err();
        assert!(matches!(err, ApiError::Domain(DomainError::NotFound)));
    }

    #[test]
    fn non_utf8_header_is_not_found() {
        let mut headers = HeaderMap::new();
        headers.insert(CPF_HEADER, HeaderValue::from_bytes(&[0xff, 0xfe]).unwrap());
        assert!(extract_cpf(&headers).is_err());
    }
}
