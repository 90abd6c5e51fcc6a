use async_trait::async_trait;
use wordbank_config::lookup::LookupConfig;
use wordbank_types::LookupResult;

use crate::response::{parse_not_found, parse_success};
use crate::transport::{ReqwestTransport, Transport};
use crate::{Lookup, LookupError};

/// Client for the public dictionary service
#[derive(Clone)]
pub struct LookupClient<T = ReqwestTransport> {
    transport: T,
    api_url: String,
    encode_term: bool,
}

impl LookupClient<ReqwestTransport> {
    pub fn from_config(config: &LookupConfig) -> Self {
        Self::new(
            ReqwestTransport::new(config.user_agent.clone()),
            config.api_url.clone(),
            config.encode_term,
        )
    }
}

impl<T: Transport> LookupClient<T> {
    pub fn new(transport: T, api_url: String, encode_term: bool) -> Self {
        Self {
            transport,
            api_url,
            encode_term,
        }
    }

    /// `<api_url>/<term>`, optionally percent-encoded
    pub fn request_url(&self, term: &str) -> String {
        let term = if self.encode_term {
            urlencoding::encode(term).into_owned()
        } else {
            term.to_string()
        };

        if self.api_url.ends_with('/') {
            format!("{}{}", self.api_url, term)
        } else {
            format!("{}/{}", self.api_url, term)
        }
    }
}

#[async_trait]
impl<T: Transport> Lookup for LookupClient<T> {
    async fn lookup(&self, term: &str) -> Result<LookupResult, LookupError> {
        if term.is_empty() {
            return Err(LookupError::EmptyInput);
        }

        let url = self.request_url(term);
        tracing::debug!("GET {}", url);

        let response = match self.transport.get(&url).await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!("Error fetching data: {}", e);
                return Err(e.into());
            }
        };

        if !response.is_success() {
            if response.status == 404 {
                let err = parse_not_found(term, &response.body)?;
                if let LookupError::NotFound { title, .. } = &err {
                    tracing::error!("{}: The word \"{}\" is not available on this API.", title, term);
                }
                return Err(err);
            }

            tracing::warn!("Lookup for '{}' failed with HTTP {}", term, response.status);
            return Err(LookupError::Http {
                status: response.status,
            });
        }

        match parse_success(&response.body) {
            Ok(result) => {
                tracing::info!(
                    "Found '{}' with {} categories",
                    result.word,
                    result.definitions_by_category.len()
                );
                Ok(result)
            }
            Err(LookupError::NoResults) => Err(LookupError::NoResults),
            Err(e) => {
                tracing::error!("Error fetching data: {}", e);
                Err(e)
            }
        }
    }
}
