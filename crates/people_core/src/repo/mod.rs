//! Repository layer contracts and SQLite implementation.
//!
//! # Responsibility
//! - Define data access contracts for `Person` rows.
//! - Keep SQL details out of the service layer.
//!
//! # Invariants
//! - Lookups return semantic errors (`EmptyResult`, `IncorrectResultSize`)
//!   in addition to DB transport errors.

pub mod person_repo;
