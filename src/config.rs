//! Endpoint configuration baked in at build time.
//!
//! A wasm bundle has no process environment, so the values are read with
//! `option_env!` when the crate is compiled:
//!
//! - `TUTOR_API_BASE_URL`: origin of the analysis service (default: same origin)
//! - `TUTOR_ANALYZE_PATH`: default `/api/analyze`
//! - `TUTOR_RECOMMEND_PATH`: default `/api/recommend`

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::net::types::Endpoint;

pub const DEFAULT_ANALYZE_PATH: &str = "/api/analyze";
pub const DEFAULT_RECOMMEND_PATH: &str = "/api/recommend";

/// Topics the recommendation service was trained on, in dropdown order.
pub const TOPIC_OPTIONS: [&str; 10] = [
    "Optimization",
    "Neural Networks",
    "NLP",
    "Computer Vision",
    "RL",
    "Backpropagation",
    "Gradient Descent",
    "Transformers",
    "CNN",
    "RNN",
];

/// Clickable example queries, one per intent the analyzer recognizes.
pub const EXAMPLE_QUERIES: [&str; 4] = [
    "What is Gradient Descent?",
    "Give me an example of CNN.",
    "Why do we use Backpropagation?",
    "Summary of Transformers.",
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub analyze_path: String,
    pub recommend_path: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_parts(None, None, None)
    }
}

impl ApiConfig {
    /// Build config from the compile-time environment.
    pub fn from_build_env() -> Self {
        Self::from_parts(
            option_env!("TUTOR_API_BASE_URL"),
            option_env!("TUTOR_ANALYZE_PATH"),
            option_env!("TUTOR_RECOMMEND_PATH"),
        )
    }

    fn from_parts(base_url: Option<&str>, analyze_path: Option<&str>, recommend_path: Option<&str>) -> Self {
        Self {
            base_url: base_url.unwrap_or_default().trim().trim_end_matches('/').to_owned(),
            analyze_path: normalize_path(analyze_path, DEFAULT_ANALYZE_PATH),
            recommend_path: normalize_path(recommend_path, DEFAULT_RECOMMEND_PATH),
        }
    }

    /// Full URL for `endpoint`.
    pub fn url(&self, endpoint: Endpoint) -> String {
        let path = match endpoint {
            Endpoint::Analyze => &self.analyze_path,
            Endpoint::Recommend => &self.recommend_path,
        };
        format!("{}{path}", self.base_url)
    }
}

fn normalize_path(raw: Option<&str>, default: &str) -> String {
    match raw.map(str::trim) {
        None | Some("") => default.to_owned(),
        Some(p) if p.starts_with('/') => p.to_owned(),
        Some(p) => format!("/{p}"),
    }
}
