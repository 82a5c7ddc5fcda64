use std::sync::Arc;

use axum::{extract::Extension, http::StatusCode};
use chrono::Utc;

use coinbank_core::DomainError;

use crate::app::errors::ApiError;
use crate::app::{dto, services::AppServices};
use crate::context::CustomerContext;

pub async fn deposit(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(customer): Extension<CustomerContext>,
    dto::JsonBody(body): dto::JsonBody<dto::DepositRequest>,
) -> Result<StatusCode, ApiError> {
    let amount = body.amount;
    services.write(|store| store.deposit(customer.cpf(), amount, body.description, Utc::now()))?;

    tracing::info!(amount, "deposit recorded");
    Ok(StatusCode::CREATED)
}

pub async fn withdraw(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(customer): Extension<CustomerContext>,
    dto::JsonBody(body): dto::JsonBody<dto::WithdrawRequest>,
) -> Result<StatusCode, ApiError> {
    let amount = body.amount;
    match services.write(|store| store.withdraw(customer.cpf(), amount, Utc::now())) {
        Ok(balance) => {
            tracing::info!(amount, balance, "withdrawal recorded");
            Ok(StatusCode::CREATED)
        }
        Err(e @ ApiError::Domain(DomainError::InsufficientFunds)) => {
            tracing::warn!(amount, "withdrawal rejected: insufficient funds");
            Err(e)
        }
        Err(e) => Err(e),
    }
}
