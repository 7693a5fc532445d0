//! Our custom error type.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use thiserror::Error;
use wasm_bindgen::JsValue;

pub type WebResult<T> = Result<T, WebError>;

/// Uniform failure descriptor for everything network-facing: the HTTP status
/// of the failed response, or 0 when the request never reached the server
/// (network failure, local validation), and a display message.
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct WebError {
    pub status: u16,
    pub message: String,
}

impl WebError {
    pub fn new(message: impl ToString) -> Self {
        Self {
            status: 0,
            message: message.to_string(),
        }
    }

    pub fn http(status: u16, message: impl ToString) -> Self {
        Self {
            status,
            message: message.to_string(),
        }
    }

    pub fn from<E: std::error::Error>(e: E) -> Self {
        Self {
            status: 0,
            message: e.to_string(),
        }
    }

    pub fn from_js(js: JsValue) -> Self {
        Self {
            status: 0,
            message: format!("{js:?}"),
        }
    }
}

impl From<JsValue> for WebError {
    fn from(value: JsValue) -> Self {
        Self {
            status: 0,
            message: format!("{value:#?}"),
        }
    }
}
