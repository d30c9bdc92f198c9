use url::Url;

use crate::gemini;

/// Startup configuration, read from the environment exactly once in `main`
/// and passed into the components that need it.
#[derive(Debug, Clone)]
pub struct Config {
    pub teloxide_token: String,
    pub gemini_api_key: String,
    pub gemini_api_url: Url,
}

impl Config {
    /// Panics when a required variable is missing so a misconfigured
    /// deployment fails at startup instead of on the first request.
    pub fn from_env() -> Self {
        let teloxide_token =
            std::env::var("TELOXIDE_TOKEN").expect("TELOXIDE_TOKEN should be set.");
        let gemini_api_key =
            std::env::var("GEMINI_API_KEY").expect("GEMINI_API_KEY should be set.");
        // Override point for tests and self-hosted proxies.
        let gemini_api_url = std::env::var("GEMINI_API_URL")
            .map(|raw| raw.parse::<Url>().expect("GEMINI_API_URL can't be parsed."))
            .unwrap_or_else(|_| {
                gemini::DEFAULT_API_URL
                    .parse()
                    .expect("default API URL is well-formed")
            });

        Self {
            teloxide_token,
            gemini_api_key,
            gemini_api_url,
        }
    }
}
