//! Domain model for the people store.
//!
//! # Invariants
//! - A `Person` always carries the identifier storage assigned to it.
//! - Emotional states persist as signed integer codes.

pub mod person;
