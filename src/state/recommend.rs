//! Adaptive learning form and recommendation state.
//!
//! DESIGN
//! ======
//! Form controls are held as the strings the inputs display, so resetting
//! them after an apply is a plain assignment. Numbers are parsed only when a
//! request is built.

#[cfg(test)]
#[path = "recommend_test.rs"]
mod recommend_test;

use super::difficulty::Difficulty;
use super::seq::{RequestSeq, Ticket};
use crate::config::TOPIC_OPTIONS;
use crate::error::ControllerError;
use crate::net::types::{DifficultyAdjustment, RecommendationRequest, RecommendationResult};
use crate::util::confidence::{
    ACTION_CONF_DEFAULT, ConfidenceField, DIFFICULTY_ADJUSTMENT_CONF_DEFAULT, NEXT_TOPIC_CONF_DEFAULT, or_default,
};

/// Shown when the service sends no reasoning.
pub const REASONING_DEFAULT: &str = "Based on score and attempts analysis.";

const RESET_SCORE: &str = "";
const RESET_ATTEMPTS: &str = "0";
const RESET_TIME: &str = "0";

/// Values the apply control acts on, captured when the reply arrived.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingApply {
    pub next_topic: String,
    pub adjustment: DifficultyAdjustment,
}

/// Rendered form of a recommendation reply.
#[derive(Clone, Debug, PartialEq)]
pub struct RecommendationView {
    pub next_topic: ConfidenceField,
    pub action: ConfidenceField,
    pub difficulty_adjustment: ConfidenceField,
    pub reasoning: String,
    pub apply: PendingApply,
}

impl From<RecommendationResult> for RecommendationView {
    fn from(r: RecommendationResult) -> Self {
        let reasoning = r
            .reasoning
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| REASONING_DEFAULT.to_owned());
        Self {
            next_topic: ConfidenceField::new(r.next_topic.clone(), or_default(r.next_topic_conf, NEXT_TOPIC_CONF_DEFAULT)),
            action: ConfidenceField::new(r.action, or_default(r.action_conf, ACTION_CONF_DEFAULT)),
            difficulty_adjustment: ConfidenceField::new(
                r.difficulty_adjustment.to_string(),
                or_default(r.difficulty_adjustment_conf, DIFFICULTY_ADJUSTMENT_CONF_DEFAULT),
            ),
            reasoning,
            apply: PendingApply { next_topic: r.next_topic, adjustment: r.difficulty_adjustment },
        }
    }
}

#[derive(Clone, Debug)]
pub struct AdaptiveState {
    /// Topic selector options, in display order.
    pub topic_options: Vec<String>,
    pub topic: String,
    pub difficulty: Difficulty,
    pub score: String,
    pub attempts: String,
    pub time_spent: String,
    pub result: Option<RecommendationView>,
    pub result_visible: bool,
    /// Bumped whenever the form container should be scrolled into view.
    pub scroll_to_form_seq: u64,
    seq: RequestSeq,
}

impl Default for AdaptiveState {
    fn default() -> Self {
        Self::with_topics(TOPIC_OPTIONS.iter().map(|t| (*t).to_owned()).collect())
    }
}

impl AdaptiveState {
    pub fn with_topics(topic_options: Vec<String>) -> Self {
        let topic = topic_options.first().cloned().unwrap_or_default();
        Self {
            topic_options,
            topic,
            difficulty: Difficulty::default(),
            score: RESET_SCORE.to_owned(),
            attempts: RESET_ATTEMPTS.to_owned(),
            time_spent: RESET_TIME.to_owned(),
            result: None,
            result_visible: false,
            scroll_to_form_seq: 0,
            seq: RequestSeq::default(),
        }
    }

    /// Gather the form into a request body.
    ///
    /// # Errors
    ///
    /// `InvalidNumber` when score, attempts or time spent does not parse.
    pub fn build_request(&self) -> Result<RecommendationRequest, ControllerError> {
        Ok(RecommendationRequest {
            topic: self.topic.clone(),
            difficulty: self.difficulty,
            score: parse_float("Score", &self.score)?,
            attempts: parse_int("Attempts", &self.attempts)?,
            time_spent: parse_float("Time spent", &self.time_spent)?,
        })
    }

    /// Build the request and issue a ticket for it.
    ///
    /// # Errors
    ///
    /// See [`AdaptiveState::build_request`]; no ticket is issued on error.
    pub fn begin_recommendation(&mut self) -> Result<(Ticket, RecommendationRequest), ControllerError> {
        let request = self.build_request()?;
        Ok((self.seq.issue(), request))
    }

    /// Apply the outcome of the exchange tagged `ticket`.
    ///
    /// On failure the result panel is left as it was.
    ///
    /// # Errors
    ///
    /// Passes the exchange's error back for notification.
    pub fn finish_recommendation(
        &mut self,
        ticket: Ticket,
        outcome: Result<RecommendationResult, ControllerError>,
    ) -> Result<(), ControllerError> {
        if !self.seq.is_current(ticket) {
            log::debug!("dropping stale recommend reply {ticket:?}");
            return Ok(());
        }
        match outcome {
            Ok(result) => {
                self.result = Some(result.into());
                self.result_visible = true;
                Ok(())
            }
            Err(err) => {
                if matches!(err, ControllerError::Transport { .. }) {
                    log::error!("recommend request failed: {}", err.detail());
                }
                Err(err)
            }
        }
    }

    /// Apply the recommendation currently on display, if any.
    ///
    /// # Errors
    ///
    /// See [`AdaptiveState::apply`].
    pub fn apply_current(&mut self) -> Result<(), ControllerError> {
        match self.result.as_ref().map(|view| view.apply.clone()) {
            Some(pending) => self.apply(&pending),
            None => Ok(()),
        }
    }

    /// Move the form to the recommended topic and difficulty, reset the
    /// attempt inputs, hide the result and request a scroll to the form.
    ///
    /// # Errors
    ///
    /// `TopicNotListed` when the topic is not an option. Every other step
    /// still runs and the current topic is kept.
    pub fn apply(&mut self, pending: &PendingApply) -> Result<(), ControllerError> {
        let found = self.topic_options.iter().find(|opt| **opt == pending.next_topic).cloned();
        if let Some(topic) = &found {
            self.topic.clone_from(topic);
        }

        self.difficulty = self.difficulty.step(&pending.adjustment);
        RESET_SCORE.clone_into(&mut self.score);
        RESET_ATTEMPTS.clone_into(&mut self.attempts);
        RESET_TIME.clone_into(&mut self.time_spent);
        self.result_visible = false;
        self.scroll_to_form_seq += 1;

        match found {
            Some(_) => Ok(()),
            None => Err(ControllerError::TopicNotListed { topic: pending.next_topic.clone() }),
        }
    }
}

fn parse_float(field: &'static str, raw: &str) -> Result<f64, ControllerError> {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(invalid(field, raw)),
    }
}

fn parse_int(field: &'static str, raw: &str) -> Result<i64, ControllerError> {
    raw.trim().parse::<i64>().map_err(|_| invalid(field, raw))
}

fn invalid(field: &'static str, raw: &str) -> ControllerError {
    ControllerError::InvalidNumber { field, value: raw.to_owned() }
}
