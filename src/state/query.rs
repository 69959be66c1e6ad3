//! Query understanding panel state.
//!
//! DESIGN
//! ======
//! Analysis is split into `begin_analysis` (validate, enter loading state,
//! issue a ticket) and `finish_analysis` (apply the outcome). The component
//! runs the HTTP call in between, so every exit path funnels through
//! `finish_analysis`, which is the one place the loading state is cleared.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use super::seq::{RequestSeq, Ticket};
use crate::error::ControllerError;
use crate::net::types::AnalysisResult;
use crate::util::confidence::ConfidenceField;

pub const ANALYZE_LABEL: &str = "Analyze Query";
pub const ANALYZING_LABEL: &str = "Analyzing...";

/// Rendered form of an analysis reply.
#[derive(Clone, Debug, PartialEq)]
pub struct AnalysisView {
    pub intent: ConfidenceField,
    pub topic: ConfidenceField,
    pub difficulty: ConfidenceField,
    pub keywords: Vec<String>,
    pub suggestion: String,
}

impl From<AnalysisResult> for AnalysisView {
    fn from(r: AnalysisResult) -> Self {
        Self {
            intent: ConfidenceField::new(r.intent, r.intent_conf),
            topic: ConfidenceField::new(r.topic, r.topic_conf),
            difficulty: ConfidenceField::new(r.difficulty, r.difficulty_conf),
            keywords: r.keywords,
            suggestion: r.suggestion,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct QueryState {
    pub input: String,
    /// Trigger button is disabled and shows `ANALYZING_LABEL`.
    pub loading: bool,
    pub result: Option<AnalysisView>,
    pub result_visible: bool,
    seq: RequestSeq,
}

impl QueryState {
    /// Copy an example query verbatim into the input.
    pub fn fill_example(&mut self, text: &str) {
        text.clone_into(&mut self.input);
    }

    pub fn button_label(&self) -> &'static str {
        if self.loading { ANALYZING_LABEL } else { ANALYZE_LABEL }
    }

    /// Validate the input and enter the loading state.
    ///
    /// Returns the ticket for the exchange and the query to send.
    ///
    /// # Errors
    ///
    /// `EmptyQuery` when the input is empty; state is left untouched and no
    /// request must be issued.
    pub fn begin_analysis(&mut self) -> Result<(Ticket, String), ControllerError> {
        if self.input.is_empty() {
            return Err(ControllerError::EmptyQuery);
        }
        self.loading = true;
        self.result_visible = false;
        Ok((self.seq.issue(), self.input.clone()))
    }

    /// Apply the outcome of the exchange tagged `ticket`.
    ///
    /// Stale outcomes are dropped silently and return `Ok`.
    ///
    /// # Errors
    ///
    /// Passes the exchange's error back for notification, after the loading
    /// state has been cleared.
    pub fn finish_analysis(
        &mut self,
        ticket: Ticket,
        outcome: Result<AnalysisResult, ControllerError>,
    ) -> Result<(), ControllerError> {
        if !self.seq.is_current(ticket) {
            log::debug!("dropping stale analyze reply {ticket:?}");
            return Ok(());
        }
        self.loading = false;
        match outcome {
            Ok(result) => {
                self.result = Some(result.into());
                self.result_visible = true;
                Ok(())
            }
            Err(err) => {
                if matches!(err, ControllerError::Transport { .. }) {
                    log::error!("analyze request failed: {}", err.detail());
                }
                Err(err)
            }
        }
    }
}
