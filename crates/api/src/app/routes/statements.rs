use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    response::IntoResponse,
    Json,
};

use crate::app::errors::ApiError;
use crate::app::{dto, services::AppServices};
use crate::context::CustomerContext;

pub async fn get_statement(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(customer): Extension<CustomerContext>,
) -> Result<impl IntoResponse, ApiError> {
    let statement =
        services.read(|store| store.find(customer.cpf()).map(|a| a.statement().to_vec()))?;
    Ok(Json(statement))
}

/// Entries created on the requested UTC calendar day.
///
/// A missing or unparsable `date` names no day, so nothing matches.
pub async fn get_statement_by_date(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(customer): Extension<CustomerContext>,
    Query(query): Query<dto::StatementDateQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let entries = match query.day() {
        Some(day) => services.read(|store| store.statement_on(customer.cpf(), day))?,
        None => Vec::new(),
    };
    Ok(Json(entries))
}

pub async fn get_balance(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(customer): Extension<CustomerContext>,
) -> Result<impl IntoResponse, ApiError> {
    let balance = services.read(|store| store.balance(customer.cpf()))?;
    Ok(Json(balance))
}
