use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use derive_more::Display;
use serde_json::json;

use crate::chain::ChainError;

#[derive(Debug, Display)]
pub enum ApiError {
    #[display(fmt = "contractAddress is required")]
    MissingParameter,

    #[display(fmt = "Invalid contractAddress provided")]
    InvalidAddress,

    #[display(fmt = "Contract call failed, possibly due to incorrect contractAddress.")]
    ContractCallFailed,

    #[display(fmt = "Internal Server Error. Please try again later.")]
    InternalError,
}

impl From<ChainError> for ApiError {
    fn from(error: ChainError) -> Self {
        match error {
            ChainError::ContractCall(_) => ApiError::ContractCallFailed,
            ChainError::Transport(_) => ApiError::InternalError,
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingParameter | ApiError::InvalidAddress => StatusCode::BAD_REQUEST,
            ApiError::ContractCallFailed | ApiError::InternalError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({
            "status": "error",
            "message": self.to_string(),
        }))
    }
}
