use serde_json::{json, Map, Value};

use crate::attributes::format_input;
use crate::config::Config;
use crate::dispatch::send_request;
use crate::errors::Error;
use crate::fault::FaultCodePattern;
use crate::models::{EntityKind, SearchInput};
use crate::response::Outcome;
use crate::transport::Transport;

/// Remote operation invoked for watchlist searches.
pub const SEARCH_OPERATION: &str = "search";

/// Client for the watchlist search operation family.
///
/// Holds the injected transport and the deployment credentials. Each call
/// is independent; the service keeps no other state and is safe to share
/// across concurrent callers.
pub struct SearchService<T> {
    transport: T,
    config: Config,
}

impl<T: Transport> SearchService<T> {
    /// Creates a new `SearchService`.
    ///
    /// # Arguments
    ///
    /// * `transport` - Transport collaborator owning the SOAP wire.
    /// * `config` - Deployment credentials and WSDL location.
    pub fn new(transport: T, config: Config) -> Self {
        Self { transport, config }
    }

    /// Runs one search against a predefined search profile.
    ///
    /// A mapping failure (an explicit type code outside its allow-list)
    /// returns `Err` before any network call. Protocol and transport
    /// failures come back inside the outcome, never as `Err`.
    ///
    /// # Arguments
    ///
    /// * `predefined_search_name` - Search profile configured on the
    ///   provider's side.
    /// * `kind` - Whether the entity is an individual or a business.
    /// * `input` - Domain-shaped attributes of the entity.
    pub async fn search(
        &self,
        predefined_search_name: &str,
        kind: EntityKind,
        input: &SearchInput,
    ) -> Result<Outcome, Error> {
        let payload = format_input(kind, input)?;

        let mut message = payload.as_object().cloned().unwrap_or_default();
        message.insert("context".to_string(), self.context_block());
        message.insert(
            "config".to_string(),
            json!({ "PredefinedSearchName": predefined_search_name }),
        );

        tracing::info!(
            "searching profile {} for {} entity",
            predefined_search_name,
            kind.as_str()
        );

        Ok(send_request(
            &self.transport,
            SEARCH_OPERATION,
            Value::Object(message),
            FaultCodePattern::ServiceCode,
        )
        .await)
    }

    fn context_block(&self) -> Value {
        let mut context = Map::new();
        context.insert("ClientID".to_string(), json!(self.config.client_id));
        context.insert("Password".to_string(), json!(self.config.password));
        context.insert("UserID".to_string(), json!(self.config.user_id));
        Value::Object(context)
    }
}
