use std::fmt;

/// An error surfaced by the mapping layer.
///
/// Failures carry enough structured context (operation kind, model,
/// offending name) for the caller to decide whether to retry, log, or
/// abort. This layer never retries and never recovers silently.
pub struct Error {
    kind: ErrorKind,
}

enum ErrorKind {
    /// An access-controlled operation was attempted with no resolvable
    /// subject. Raised before any backend call is issued.
    MissingSubject { model: String },

    /// The backend collaborator reported a failure. Code and message are
    /// surfaced verbatim.
    Backend { code: String, message: String },

    /// A driver-level signal that a requested row does not exist. The
    /// dispatcher converts this into an empty result for single-row
    /// lookups; absence is a normal outcome at the public surface.
    RecordNotFound { detail: String },

    /// A custom serialize/deserialize hook failed.
    Transform {
        model: String,
        name: String,
        cause: anyhow::Error,
    },

    /// Intent `index` of a batch failed. Earlier intents stay committed;
    /// later intents were not attempted.
    Batch { index: usize, cause: Box<Error> },

    /// Ad-hoc failure with no dedicated kind.
    Adhoc(anyhow::Error),
}

impl Error {
    pub fn missing_subject(model: impl Into<String>) -> Self {
        ErrorKind::MissingSubject {
            model: model.into(),
        }
        .into()
    }

    pub fn backend(code: impl Into<String>, message: impl Into<String>) -> Self {
        ErrorKind::Backend {
            code: code.into(),
            message: message.into(),
        }
        .into()
    }

    pub fn record_not_found(detail: impl Into<String>) -> Self {
        ErrorKind::RecordNotFound {
            detail: detail.into(),
        }
        .into()
    }

    pub fn transform(
        model: impl Into<String>,
        name: impl Into<String>,
        cause: anyhow::Error,
    ) -> Self {
        ErrorKind::Transform {
            model: model.into(),
            name: name.into(),
            cause,
        }
        .into()
    }

    pub fn batch(index: usize, cause: Error) -> Self {
        ErrorKind::Batch {
            index,
            cause: Box::new(cause),
        }
        .into()
    }

    pub fn is_missing_subject(&self) -> bool {
        matches!(self.root().kind, ErrorKind::MissingSubject { .. })
    }

    pub fn is_record_not_found(&self) -> bool {
        matches!(self.root().kind, ErrorKind::RecordNotFound { .. })
    }

    pub fn is_transform(&self) -> bool {
        matches!(self.root().kind, ErrorKind::Transform { .. })
    }

    /// The backend-reported error code, if this is a backend failure.
    pub fn backend_code(&self) -> Option<&str> {
        match &self.root().kind {
            ErrorKind::Backend { code, .. } => Some(code),
            _ => None,
        }
    }

    /// The index of the failing intent, if this error wraps a batch
    /// failure.
    pub fn batch_index(&self) -> Option<usize> {
        match &self.kind {
            ErrorKind::Batch { index, .. } => Some(*index),
            _ => None,
        }
    }

    /// Unwraps batch wrappers so predicates see the underlying failure.
    fn root(&self) -> &Error {
        match &self.kind {
            ErrorKind::Batch { cause, .. } => cause.root(),
            _ => self,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ErrorKind::MissingSubject { model } => {
                write!(f, "no subject resolvable for access-controlled model `{model}`")
            }
            ErrorKind::Backend { code, message } => {
                write!(f, "backend request failed ({code}): {message}")
            }
            ErrorKind::RecordNotFound { detail } => {
                write!(f, "record not found: {detail}")
            }
            ErrorKind::Transform { model, name, cause } => {
                write!(f, "transform failed for `{model}.{name}`: {cause}")
            }
            ErrorKind::Batch { index, cause } => {
                write!(f, "intent {index} failed: {cause}")
            }
            ErrorKind::Adhoc(cause) => fmt::Display::fmt(cause, f),
        }
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ErrorKind::Transform { cause, .. } => Some(cause.as_ref()),
            ErrorKind::Batch { cause, .. } => Some(cause.as_ref()),
            ErrorKind::Adhoc(cause) => Some(cause.as_ref()),
            _ => None,
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error { kind }
    }
}

impl From<anyhow::Error> for Error {
    fn from(cause: anyhow::Error) -> Self {
        ErrorKind::Adhoc(cause).into()
    }
}
