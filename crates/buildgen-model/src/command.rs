// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! External command contract
//!
//! The host invokes commands through a single entry point taking a document
//! capability and returning a tri-state result plus an optional message.

use crate::document::HostDocument;
use serde::{Deserialize, Serialize};

/// Tri-state outcome of an external command, per the host plugin contract
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum CommandOutcome {
    /// All steps completed and the change scope committed
    Succeeded,
    /// A step failed; the host's rollback left the document unmodified
    Failed,
    /// The invoking user cancelled the command
    Cancelled,
}

/// Result returned to the host: an outcome plus an optional message
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct CommandResult {
    /// Tri-state outcome
    pub outcome: CommandOutcome,
    /// Message surfaced to the invoking user, if any
    pub message: Option<String>,
}

impl CommandResult {
    /// Create a success result
    pub fn succeeded() -> Self {
        Self {
            outcome: CommandOutcome::Succeeded,
            message: None,
        }
    }

    /// Create a failure result with a message
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            outcome: CommandOutcome::Failed,
            message: Some(message.into()),
        }
    }

    /// Create a cancellation result
    pub fn cancelled() -> Self {
        Self {
            outcome: CommandOutcome::Cancelled,
            message: None,
        }
    }

    /// Check whether the command succeeded
    pub fn is_success(&self) -> bool {
        self.outcome == CommandOutcome::Succeeded
    }
}

/// A command object exposing one entry point
///
/// # Example
///
/// ```ignore
/// use buildgen_model::{CommandResult, ExternalCommand, HostDocument};
///
/// struct Noop;
///
/// impl ExternalCommand for Noop {
///     fn execute(&self, _document: &mut dyn HostDocument) -> CommandResult {
///         CommandResult::succeeded()
///     }
/// }
/// ```
pub trait ExternalCommand {
    /// Run the command against the supplied document
    ///
    /// # Arguments
    /// * `document` - The host document capability for this invocation
    fn execute(&self, document: &mut dyn HostDocument) -> CommandResult;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_result_constructors() {
        assert!(CommandResult::succeeded().is_success());
        assert!(CommandResult::succeeded().message.is_none());

        let failed = CommandResult::failed("no such level");
        assert_eq!(failed.outcome, CommandOutcome::Failed);
        assert_eq!(failed.message.as_deref(), Some("no such level"));

        assert_eq!(CommandResult::cancelled().outcome, CommandOutcome::Cancelled);
    }
}
