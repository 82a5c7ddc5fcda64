use std::sync::Arc;

use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};

use coinbank_core::Entity;

use crate::app::errors::ApiError;
use crate::app::{dto, services::AppServices};
use crate::context::CustomerContext;

pub async fn create_account(
    Extension(services): Extension<Arc<AppServices>>,
    dto::JsonBody(body): dto::JsonBody<dto::CreateAccountRequest>,
) -> Result<StatusCode, ApiError> {
    let id = services.write(|store| {
        store
            .create_account(body.cpf, body.name)
            .map(|account| *account.id())
    })?;

    tracing::info!(account_id = %id, "account opened");
    Ok(StatusCode::CREATED)
}

pub async fn get_account(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(customer): Extension<CustomerContext>,
) -> Result<impl IntoResponse, ApiError> {
    let account = services.read(|store| store.find(customer.cpf()).cloned())?;
    Ok(Json(account))
}

pub async fn update_account(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(customer): Extension<CustomerContext>,
    dto::JsonBody(body): dto::JsonBody<dto::UpdateAccountRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let account = services.write(|store| store.rename(customer.cpf(), body.name).cloned())?;

    tracing::info!(account_id = %account.id(), "account renamed");
    Ok((StatusCode::CREATED, Json(account)))
}

/// Close the caller's account and return every account still open.
pub async fn delete_account(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(customer): Extension<CustomerContext>,
) -> Result<impl IntoResponse, ApiError> {
    let (removed, remaining) = services.write(|store| {
        let removed = store.remove_account(customer.cpf())?;
        Ok((removed, store.accounts().to_vec()))
    })?;

    tracing::info!(account_id = %removed.id(), remaining = remaining.len(), "account closed");
    Ok((StatusCode::OK, Json(remaining)))
}
