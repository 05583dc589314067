use std::collections::HashMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use primitives::api::ValidationError;

use crate::{ads::QueryError, db::StoreError};

/// Errors returned by the routes, as a `{ "error": "<message>" }` JSON body.
#[derive(Debug, PartialEq, Eq)]
pub enum ResponseError {
    BadRequest(String),
    FailedValidation(String),
    /// The details are logged, the caller only gets the message
    Internal(String),
}

impl ResponseError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ResponseError::BadRequest(_) | ResponseError::FailedValidation(_) => {
                StatusCode::BAD_REQUEST
            }
            ResponseError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ResponseError::BadRequest(message)
            | ResponseError::FailedValidation(message)
            | ResponseError::Internal(message) => message,
        }
    }
}

impl IntoResponse for ResponseError {
    fn into_response(self) -> Response {
        let error_response = [("error", self.message().to_string())]
            .into_iter()
            .collect::<HashMap<_, _>>();

        (self.status_code(), Json(error_response)).into_response()
    }
}

impl From<ValidationError> for ResponseError {
    fn from(error: ValidationError) -> Self {
        ResponseError::FailedValidation(error.to_string())
    }
}

impl From<StoreError> for ResponseError {
    fn from(error: StoreError) -> Self {
        ResponseError::Internal(error.to_string())
    }
}

impl From<QueryError> for ResponseError {
    fn from(error: QueryError) -> Self {
        match error {
            QueryError::OutOfRange(out_of_range) => {
                ResponseError::BadRequest(out_of_range.to_string())
            }
            QueryError::Store(store) => store.into(),
        }
    }
}
