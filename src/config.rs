use url::Url;

use crate::errors::Error;

/// Runtime configuration for the screening client.
///
/// Values come from environment variables (a `.env` file is honored in
/// development). The WSDL URL locates the provider deployment; the three
/// credential fields are sent as the `context` block of every search.
#[derive(Debug, Clone)]
pub struct Config {
    /// WSDL URL of the provider deployment, including the `?wsdl` query.
    pub wsdl_url: String,
    /// Account identifier issued by the provider.
    pub client_id: String,
    /// User identifier within the account.
    pub user_id: String,
    /// Account password.
    pub password: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self {
            wsdl_url: std::env::var("SCREENING_WSDL_URL")
                .map_err(|_| {
                    anyhow::anyhow!("SCREENING_WSDL_URL environment variable required")
                })
                .and_then(|url| {
                    if url.trim().is_empty() {
                        anyhow::bail!("SCREENING_WSDL_URL cannot be empty");
                    }
                    if !url.starts_with("http://") && !url.starts_with("https://") {
                        anyhow::bail!("SCREENING_WSDL_URL must start with http:// or https://");
                    }
                    Ok(url)
                })?,
            client_id: std::env::var("SCREENING_CLIENT_ID")
                .map_err(|_| {
                    anyhow::anyhow!("SCREENING_CLIENT_ID environment variable required")
                })
                .and_then(|id| {
                    if id.trim().is_empty() {
                        anyhow::bail!("SCREENING_CLIENT_ID cannot be empty");
                    }
                    Ok(id)
                })?,
            user_id: std::env::var("SCREENING_USER_ID")
                .map_err(|_| anyhow::anyhow!("SCREENING_USER_ID environment variable required"))
                .and_then(|id| {
                    if id.trim().is_empty() {
                        anyhow::bail!("SCREENING_USER_ID cannot be empty");
                    }
                    Ok(id)
                })?,
            password: std::env::var("SCREENING_PASSWORD")
                .map_err(|_| anyhow::anyhow!("SCREENING_PASSWORD environment variable required"))
                .and_then(|pass| {
                    if pass.trim().is_empty() {
                        anyhow::bail!("SCREENING_PASSWORD cannot be empty");
                    }
                    Ok(pass)
                })?,
        };

        // Log successful configuration load (without sensitive values)
        tracing::info!("Configuration loaded successfully");
        tracing::debug!("WSDL URL: {}", config.wsdl_url);
        tracing::debug!("Client ID: {}", config.client_id);
        tracing::debug!("User ID: {}", config.user_id);

        Ok(config)
    }

    /// Derives the concrete service endpoint from the WSDL URL.
    ///
    /// The `?wsdl` query is dropped and the service name is appended as a
    /// path segment, so `https://host/WsIdentity?wsdl` with service
    /// `Search` becomes `https://host/WsIdentity/Search`.
    pub fn service_endpoint(&self, service: &str) -> Result<Url, Error> {
        let base = match self.wsdl_url.split_once('?') {
            Some((base, _)) => base,
            None => self.wsdl_url.as_str(),
        };
        let endpoint = format!("{}/{}", base.trim_end_matches('/'), service);

        Url::parse(&endpoint).map_err(|source| Error::InvalidWsdlUrl {
            url: endpoint,
            source,
        })
    }
}
