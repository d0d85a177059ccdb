use thiserror::Error;

/// Errors raised by this library itself.
///
/// Failures reported by the remote service never surface here; the
/// dispatcher converts them into failure outcomes. An `Err` from this crate
/// means the call never reached the network.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A record carried an explicit type code outside its schema allow-list.
    #[error("{record} Type value {value} invalid. Type must be one of {allowed:?}.")]
    InvalidTypeCode {
        /// Wire name of the record kind, e.g. `InputAddress`.
        record: &'static str,
        /// The offending value as supplied by the caller.
        value: String,
        /// The allow-list for the record kind.
        allowed: &'static [&'static str],
    },

    /// The configured WSDL URL could not be parsed while deriving a service
    /// endpoint.
    #[error("invalid WSDL URL {url}: {source}")]
    InvalidWsdlUrl {
        /// The URL as configured.
        url: String,
        /// The underlying parse failure.
        #[source]
        source: url::ParseError,
    },
}
