//! Error taxonomy of the filter engine.
//!
//! None of these are fatal: each component converts a failure into a
//! `last_error` field on its own state instead of propagating it upward.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::filter_field::ScalarField;

/// Shown when a failed response does not carry its own message.
pub const GENERIC_ERROR_MESSAGE: &str = "Произошла ошибка";

/// Error body returned by the university API: `{ "error": "..." }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ErrorPayload {
    pub error: Option<String>,
}

impl ErrorPayload {
    /// Extract the human readable message from a raw response body.
    pub fn message_from_body(body: &str) -> String {
        serde_json::from_str::<ErrorPayload>(body)
            .ok()
            .and_then(|payload| payload.error)
            .filter(|message| !message.trim().is_empty())
            .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CatalogLevel {
    TopLevel,
    Dependent,
}

impl CatalogLevel {
    /// Name of the option list loaded at this level, as shown in error messages.
    pub fn display_name(self) -> &'static str {
        match self {
            CatalogLevel::TopLevel => "список факультетов",
            CatalogLevel::Dependent => "список направлений",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[error("Не удалось загрузить {}: {message}", .level.display_name())]
pub struct CatalogLoadError {
    pub level: CatalogLevel,
    pub message: String,
}

impl CatalogLoadError {
    pub fn top_level(message: impl Into<String>) -> Self {
        Self { level: CatalogLevel::TopLevel, message: message.into() }
    }

    pub fn dependent(message: impl Into<String>) -> Self {
        Self { level: CatalogLevel::Dependent, message: message.into() }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationError {
    #[error("{}: ожидается дата в формате ГГГГ-ММ-ДД, получено «{value}»", .field.display_name())]
    MalformedDate { field: ScalarField, value: String },

    #[error("Период зачисления начинается {from}, позже своего конца {to}")]
    InvertedDateRange { from: String, to: String },

    #[error("Неизвестный статус студента «{0}»")]
    UnknownStatus(String),
}

/// Everything that can end a search submission without results.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SearchError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("{message}")]
    Request { message: String },
}

impl SearchError {
    pub fn request(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            return Self::Request { message: GENERIC_ERROR_MESSAGE.to_string() };
        }
        Self::Request { message }
    }

    /// Text shown above the result table.
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}
