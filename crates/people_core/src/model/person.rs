//! Person domain model.
//!
//! # Responsibility
//! - Define the stored `Person` record and its emotional-state codes.
//! - Render the record the way the startup line prints it.
//!
//! # Invariants
//! - `id` is assigned by storage on insert and never changes afterwards.
//! - `emotional_state` holds one of the codes in `EmotionalState`.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Storage-generated primary key of a person row.
pub type PersonId = i64;

/// Three-valued mood persisted as a signed integer code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmotionalState {
    /// Persisted as `-1`.
    Sad,
    /// Persisted as `0`.
    Neutral,
    /// Persisted as `1`.
    Happy,
}

impl EmotionalState {
    pub const ALL: [EmotionalState; 3] = [Self::Sad, Self::Neutral, Self::Happy];

    /// Returns the persistence code for this state.
    pub fn code(self) -> i32 {
        match self {
            Self::Sad => -1,
            Self::Neutral => 0,
            Self::Happy => 1,
        }
    }

    /// Decodes a persisted code. Unknown codes yield `None`.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            -1 => Some(Self::Sad),
            0 => Some(Self::Neutral),
            1 => Some(Self::Happy),
            _ => None,
        }
    }
}

/// A stored person row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    /// Raw persistence code; see [`EmotionalState::code`].
    pub emotional_state: i32,
}

impl Person {
    /// Builds a record from a stored row's values.
    pub fn new(id: PersonId, name: impl Into<String>, state: EmotionalState) -> Self {
        Self {
            id,
            name: name.into(),
            emotional_state: state.code(),
        }
    }

    /// Decoded emotional state, or `None` when the code is unknown.
    pub fn state(&self) -> Option<EmotionalState> {
        EmotionalState::from_code(i64::from(self.emotional_state))
    }
}

impl Display for Person {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Person[id={}, name='{}', emotionalState={}]",
            self.id, self.name, self.emotional_state
        )
    }
}
