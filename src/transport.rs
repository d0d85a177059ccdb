use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Failure shapes a transport invocation can surface.
///
/// Both are consumed by the dispatcher and converted into failure
/// outcomes; neither escapes to callers as an error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvokeFault {
    /// The service answered with its own structured fault.
    #[error("protocol fault {fault_code}")]
    Protocol {
        /// Protocol-level fault code.
        fault_code: String,
        /// Nested exception payload: a single object or a list of them.
        exceptions: Value,
    },
    /// The call failed below the protocol, with no structured fault body.
    #[error("transport fault: status {status}")]
    Transport {
        /// HTTP status observed.
        status: u16,
        /// Raw response body.
        body: String,
    },
}

/// One remote invocation: hand an operation its message, get back the
/// parsed response body or a fault.
///
/// Implementations own everything below the message: envelope encoding,
/// endpoint dialing, wire-level authentication, timeouts, retries. This
/// library never constructs a transport; callers inject one.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Invokes `operation` with the given message payload.
    async fn invoke(&self, operation: &str, message: Value) -> Result<Value, InvokeFault>;
}
