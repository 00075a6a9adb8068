use axum::extract::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use std::env;
use std::fmt::{self, Debug, Display};

pub const GENERATION_FAILED_MESSAGE: &str =
    "Failed to generate the travel guide. Check your API key and connection.";

pub const LOCATION_ADVISORY_MESSAGE: &str =
    "Could not get your location. Using a default location for recommendations.";

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    pub code: i32,
    pub message: String,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code {})", self.message, self.code)
    }
}

impl std::error::Error for Error {}

impl From<env::VarError> for Error {
    fn from(err: env::VarError) -> Self {
        env_var_error(err)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        reqwest_error(err)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, error_message) = match self.code {
            1..=99 => (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error"),
            _ => (StatusCode::BAD_REQUEST, self.message.as_str()),
        };

        let body = Json(json!({
            "code": self.code,
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

pub fn invalid_input_error() -> Error {
    Error {
        code: 101,
        message: "invalid input".into(),
    }
}

pub fn unknown_place_error() -> Error {
    Error {
        code: 102,
        message: "unknown place".into(),
    }
}

pub fn env_var_error(_: env::VarError) -> Error {
    Error {
        code: 1,
        message: "environment variable error".into(),
    }
}

pub fn reqwest_error(err: reqwest::Error) -> Error {
    Error {
        code: 3,
        message: format!("reqwest error: {}", err.without_url()),
    }
}

pub fn upstream_error() -> Error {
    Error {
        code: 4,
        message: "upstream error".into(),
    }
}

pub fn unexpected_error() -> Error {
    Error {
        code: 5,
        message: "unexpected error".into(),
    }
}

pub fn empty_response_error() -> Error {
    Error {
        code: 6,
        message: "API returned no content or grounding data.".into(),
    }
}

pub fn invalid_config_error(key: &str) -> Error {
    Error {
        code: 7,
        message: format!("invalid configuration value for {}", key),
    }
}

pub fn location_unavailable_error() -> Error {
    Error {
        code: 8,
        message: "location unavailable".into(),
    }
}

pub fn generation_failed_error() -> Error {
    Error {
        code: 9,
        message: GENERATION_FAILED_MESSAGE.into(),
    }
}

#[test]
fn client_errors_keep_their_message() {
    let response = unknown_place_error().into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = upstream_error().into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
