use alloc::string::String;
use serde::{Deserialize, Serialize};

use crate::PLACEHOLDER;

/// How much of a clue the player has uncovered.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealState {
    Hidden,
    Question,
    Answer,
}

impl RevealState {
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Answer)
    }

    /// Next state of the lifecycle, `Answer` is terminal.
    pub const fn next(self) -> Self {
        use RevealState::*;
        match self {
            Hidden => Question,
            Question | Answer => Answer,
        }
    }
}

impl Default for RevealState {
    fn default() -> Self {
        Self::Hidden
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Question,
    Answer,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clue {
    question: String,
    answer: String,
    state: RevealState,
}

impl Clue {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            state: RevealState::Hidden,
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    /// Moves one step forward through the reveal lifecycle.
    pub fn advance(&mut self) -> RevealOutcome {
        let outcome = match self.state {
            RevealState::Hidden => RevealOutcome::Question,
            RevealState::Question => RevealOutcome::Answer,
            RevealState::Answer => RevealOutcome::NoChange,
        };
        self.state = self.state.next();
        outcome
    }

    /// Text the clue's cell currently displays.
    pub fn display_text(&self) -> &str {
        match self.state {
            RevealState::Hidden => PLACEHOLDER,
            RevealState::Question => &self.question,
            RevealState::Answer => &self.answer,
        }
    }
}
