//! Error types for repository operations.
//!
//! Every variant carries an [`ErrorContext`] so a failed fetch can be traced
//! back to the collection and collaborator it came from.

use std::fmt;

use crate::error::InputKind;

/// Result type for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Where an error happened and whether trying again may help.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorContext {
    /// e.g. `fetch_router_pings`
    pub operation: Option<String>,
    /// Collection or setting the operation was working on
    pub subject: Option<String>,
    pub details: Option<String>,
    pub retryable: bool,
}

impl ErrorContext {
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: Some(operation.into()),
            ..Default::default()
        }
    }

    /// Context of a fetch of one input collection.
    pub fn fetching(kind: InputKind) -> Self {
        Self::new(format!("fetch_{}", kind)).about(kind.as_str())
    }

    pub fn about(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn retryable(mut self) -> Self {
        self.retryable = true;
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields = [
            ("operation", self.operation.as_deref()),
            ("subject", self.subject.as_deref()),
            ("details", self.details.as_deref()),
            ("retryable", self.retryable.then_some("true")),
        ];
        let parts: Vec<String> = fields
            .iter()
            .filter_map(|(name, value)| value.map(|v| format!("{}={}", name, v)))
            .collect();
        write!(f, "[{}]", parts.join(", "))
    }
}

/// Failure of an upstream collaborator or of the repository itself.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// The collaborator behind a collection did not answer. Transient.
    #[error("Source unreachable: {message} {context}")]
    Unreachable {
        message: String,
        context: ErrorContext,
    },

    /// Repository could not be set up from its settings.
    #[error("Configuration error: {message} {context}")]
    Configuration {
        message: String,
        context: ErrorContext,
    },
}

impl RepositoryError {
    /// The source of `kind` is down; always retryable.
    pub fn unreachable(kind: InputKind, message: impl Into<String>) -> Self {
        Self::Unreachable {
            message: message.into(),
            context: ErrorContext::fetching(kind).retryable(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
            context: ErrorContext::new("create_repository"),
        }
    }

    pub fn is_retryable(&self) -> bool {
        self.context().retryable
    }

    pub fn context(&self) -> &ErrorContext {
        match self {
            Self::Unreachable { context, .. }
            | Self::Configuration { context, .. } => context,
        }
    }
}
