use serde::{Deserialize, Serialize};

fn default_prompt() -> String {
    "search> ".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct UiConfig {
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
        }
    }
}
