use serde_json::Value;

use crate::fault::{decode, FaultCodePattern};
use crate::response::Outcome;
use crate::transport::{InvokeFault, Transport};

/// Invokes one remote operation and routes the result into an outcome.
///
/// A clean response body becomes a success outcome with its data passed
/// through uninterpreted. A protocol fault goes through the fault decoder
/// with the given extraction pattern. A transport fault becomes a failure
/// whose code is the HTTP status and whose errors are the raw body.
/// Nothing is retried and no failure is raised past this point.
pub async fn send_request<T>(
    transport: &T,
    operation: &str,
    message: Value,
    pattern: FaultCodePattern,
) -> Outcome
where
    T: Transport + ?Sized,
{
    tracing::debug!("invoking remote operation {}", operation);

    match transport.invoke(operation, message).await {
        Ok(body) => Outcome::success(body),
        Err(InvokeFault::Protocol {
            fault_code,
            exceptions,
        }) => decode(pattern, &fault_code, exceptions),
        Err(InvokeFault::Transport { status, body }) => {
            tracing::error!("transport failure on {}: status {}", operation, status);
            Outcome::failure(status, Value::String(body))
        }
    }
}
