//! Fixed three-level difficulty ladder.

#[cfg(test)]
#[path = "difficulty_test.rs"]
mod difficulty_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::net::types::DifficultyAdjustment;

/// Learner difficulty level, ordered bottom to top.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub const LADDER: [Self; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }

    /// Parse a select-option value. Unknown values yield `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::LADDER.into_iter().find(|level| level.as_str() == raw)
    }

    fn index(self) -> usize {
        match self {
            Self::Beginner => 0,
            Self::Intermediate => 1,
            Self::Advanced => 2,
        }
    }

    /// One step up or down the ladder; clamps silently at either end and
    /// ignores adjustments other than `Increase`/`Decrease`.
    #[must_use]
    pub fn step(self, adjustment: &DifficultyAdjustment) -> Self {
        let idx = self.index();
        match adjustment {
            DifficultyAdjustment::Increase if idx + 1 < Self::LADDER.len() => Self::LADDER[idx + 1],
            DifficultyAdjustment::Decrease if idx > 0 => Self::LADDER[idx - 1],
            _ => self,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
