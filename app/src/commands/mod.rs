//! Dashboard commands
//!
//! These commands bridge the front end to the inventory store. Each returns
//! a `CommandResult` whose `error_kind` tells the front end which message to
//! show; failures are never swallowed.

pub mod categories;
pub mod dashboard;
pub mod items;

use serde::Serialize;
use stockroom_core::{CoreError, Result};

#[derive(Debug, Serialize)]
pub struct CommandResult<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
    /// One of `validation`, `not_found`, `insufficient_stock`, `conflict`,
    /// `persistence` or `config`
    pub error_kind: Option<String>,
}

impl<T> CommandResult<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            error_kind: None,
        }
    }

    pub fn err(error: &CoreError) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.to_string()),
            error_kind: Some(error.kind().to_string()),
        }
    }

    pub fn from_result(result: Result<T>) -> Self {
        match result {
            Ok(data) => CommandResult::ok(data),
            Err(e) => {
                tracing::warn!(kind = e.kind(), error = %e, "Command failed");
                CommandResult::err(&e)
            }
        }
    }
}
