use axum::{
    routing::{get, post},
    Router,
};

pub mod accounts;
pub mod statements;
pub mod system;
pub mod transactions;

/// Routes reachable without a registered caller.
pub fn public_router() -> Router {
    Router::new().route("/account", post(accounts::create_account))
}

/// Routes that act on the caller resolved from the `cpf` header.
pub fn customer_router() -> Router {
    Router::new()
        .route(
            "/account",
            get(accounts::get_account)
                .put(accounts::update_account)
                .delete(accounts::delete_account),
        )
        .route("/statement", get(statements::get_statement))
        .route("/statement/date", get(statements::get_statement_by_date))
        .route("/balance", get(statements::get_balance))
        .route("/deposit", post(transactions::deposit))
        .route("/withdraw", post(transactions::withdraw))
}
