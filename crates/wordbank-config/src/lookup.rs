use serde::{Deserialize, Serialize};

fn default_api_url() -> String {
    "https://api.dictionaryapi.dev/api/v2/entries/en/".to_string()
}

fn default_encode_term() -> bool {
    true
}

fn default_user_agent() -> String {
    concat!("wordbank/", env!("CARGO_PKG_VERSION")).to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LookupConfig {
    /// Dictionary endpoint, the search term is appended to it
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Percent-encode the term before appending it to the URL
    #[serde(default = "default_encode_term")]
    pub encode_term: bool,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            encode_term: default_encode_term(),
            user_agent: default_user_agent(),
        }
    }
}
