use serde_json::{json, Value};
use std::fmt;

// ============ Error Code ============

/// Code attached to a failure outcome.
///
/// Protocol faults and codes extracted from fault message text are strings
/// in the service's own vocabulary; transport failures carry the HTTP
/// status they were observed with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorCode {
    /// A code from the service's fault schema, or one extracted from fault
    /// message text (e.g. `"a:ServiceFaultFault"`, `"203"`).
    Service(String),
    /// An HTTP status observed at the transport level.
    Http(u16),
}

impl ErrorCode {
    /// JSON value for `to_record`; service codes stay strings, transport
    /// statuses stay integers.
    fn to_value(&self) -> Value {
        match self {
            ErrorCode::Service(code) => json!(code),
            ErrorCode::Http(status) => json!(status),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCode::Service(code) => write!(f, "{}", code),
            ErrorCode::Http(status) => write!(f, "{}", status),
        }
    }
}

impl From<String> for ErrorCode {
    fn from(code: String) -> Self {
        ErrorCode::Service(code)
    }
}

impl From<&str> for ErrorCode {
    fn from(code: &str) -> Self {
        ErrorCode::Service(code.to_string())
    }
}

impl From<u16> for ErrorCode {
    fn from(status: u16) -> Self {
        ErrorCode::Http(status)
    }
}

// ============ Outcome ============

/// Uniform result of one remote operation.
///
/// Exactly one of data/errors is populated; the variant makes a malformed
/// combination unrepresentable. The presence of a code is the sole success
/// discriminator: callers branch on `is_success()` or `code()`, never on
/// the contents of `data`.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The operation completed and the service returned a body.
    Success {
        /// Parsed response body, passed through uninterpreted. Whether it
        /// describes hits or no hits is the caller's concern.
        data: Value,
    },
    /// The operation failed at the protocol or transport level.
    Failure {
        /// Most specific code available for the failure.
        code: ErrorCode,
        /// Original error payload, preserved unmodified for inspection.
        errors: Value,
    },
}

impl Outcome {
    /// Wraps a successful response body.
    pub fn success(data: Value) -> Self {
        Outcome::Success { data }
    }

    /// Wraps a failure with its code and original error payload.
    pub fn failure(code: impl Into<ErrorCode>, errors: Value) -> Self {
        Outcome::Failure {
            code: code.into(),
            errors,
        }
    }

    /// True iff no failure code is present.
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }

    /// Response body; populated only on success.
    pub fn data(&self) -> Option<&Value> {
        match self {
            Outcome::Success { data } => Some(data),
            Outcome::Failure { .. } => None,
        }
    }

    /// Error payload; populated only on failure.
    pub fn errors(&self) -> Option<&Value> {
        match self {
            Outcome::Success { .. } => None,
            Outcome::Failure { errors, .. } => Some(errors),
        }
    }

    /// Failure code; populated only on failure.
    pub fn code(&self) -> Option<&ErrorCode> {
        match self {
            Outcome::Success { .. } => None,
            Outcome::Failure { code, .. } => Some(code),
        }
    }

    /// Record form: the raw data on success, `{code, errors}` on failure.
    pub fn to_record(&self) -> Value {
        match self {
            Outcome::Success { data } => data.clone(),
            Outcome::Failure { code, errors } => json!({
                "code": code.to_value(),
                "errors": errors,
            }),
        }
    }
}
