//! Wire DTOs for the analysis service.
//!
//! DESIGN
//! ======
//! Field names mirror the service's JSON bodies exactly so serde can decode
//! replies without renames. Optional confidences stay `Option` here; the
//! presentation fallbacks are applied in `state::recommend`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::state::difficulty::Difficulty;

/// The two service endpoints this page talks to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Analyze,
    Recommend,
}

impl Endpoint {
    /// Generic notification shown when the exchange fails below the
    /// application layer.
    pub fn transport_message(self) -> &'static str {
        match self {
            Self::Analyze => "Failed to connect to server.",
            Self::Recommend => "Failed to get recommendation.",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Analyze => "analyze",
            Self::Recommend => "recommend",
        })
    }
}

/// Body of `POST /api/analyze`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AnalyzeRequest {
    pub query: String,
}

/// Successful reply of `POST /api/analyze`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AnalysisResult {
    pub intent: String,
    pub intent_conf: f64,
    pub topic: String,
    pub topic_conf: f64,
    /// Difficulty as classified by the service; display text only.
    pub difficulty: String,
    pub difficulty_conf: f64,
    /// Extracted keywords, in the order the service ranked them.
    pub keywords: Vec<String>,
    pub suggestion: String,
}

/// Body of `POST /api/recommend`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RecommendationRequest {
    pub topic: String,
    pub difficulty: Difficulty,
    pub score: f64,
    pub attempts: i64,
    pub time_spent: f64,
}

/// Successful reply of `POST /api/recommend`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RecommendationResult {
    pub next_topic: String,
    #[serde(default)]
    pub next_topic_conf: Option<f64>,
    pub action: String,
    #[serde(default)]
    pub action_conf: Option<f64>,
    pub difficulty_adjustment: DifficultyAdjustment,
    #[serde(default)]
    pub difficulty_adjustment_conf: Option<f64>,
    #[serde(default)]
    pub reasoning: Option<String>,
}

/// Direction the service suggests for the learner's difficulty level.
///
/// Anything other than `Increase`/`Decrease` (the service currently sends
/// `Same`) is kept verbatim for display and treated as "no change".
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum DifficultyAdjustment {
    Increase,
    Decrease,
    Other(String),
}

impl From<String> for DifficultyAdjustment {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "Increase" => Self::Increase,
            "Decrease" => Self::Decrease,
            _ => Self::Other(raw),
        }
    }
}

impl fmt::Display for DifficultyAdjustment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Increase => f.write_str("Increase"),
            Self::Decrease => f.write_str("Decrease"),
            Self::Other(raw) => f.write_str(raw),
        }
    }
}
