use axum::{http::StatusCode, response::IntoResponse};
use gmd_data::UnknownCountry;

#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),
    #[error("Internal error")]
    Other(#[from] anyhow::Error),
}

impl From<UnknownCountry> for ApiError {
    fn from(value: UnknownCountry) -> Self {
        Self::BadRequest(value.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            s @ Self::BadRequest(_) => (StatusCode::BAD_REQUEST, s.to_string()).into_response(),
            Self::Other(err) => {
                log::error!("[GMD] request failed: {:#}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Couldn't build response: {:#}", err),
                )
                    .into_response()
            }
        }
    }
}
