//! Startup exercise run once the process is ready.
//!
//! # Responsibility
//! - Create the demo person and print the stored record.
//!
//! # Invariants
//! - Exactly one line is written per successful run.
//! - Service failures end the run; nothing is retried.

use crate::model::person::{EmotionalState, Person};
use crate::repo::person_repo::{PersonRepository, RepoError};
use crate::service::people_service::PeopleService;
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::Write;

const DEMO_NAME: &str = "Elizabeth";
const DEMO_STATE: EmotionalState = EmotionalState::Sad;

pub type RunResult<T> = Result<T, RunError>;

#[derive(Debug)]
pub enum RunError {
    Repo(RepoError),
    Io(std::io::Error),
}

impl Display for RunError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "startup exercise failed: {err}"),
            Self::Io(err) => write!(f, "failed to print startup record: {err}"),
        }
    }
}

impl Error for RunError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

impl From<RepoError> for RunError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<std::io::Error> for RunError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// Owns the service and drives the one-shot startup exercise.
pub struct Runner<R: PersonRepository> {
    people: PeopleService<R>,
}

impl<R: PersonRepository> Runner<R> {
    pub fn new(people: PeopleService<R>) -> Self {
        Self { people }
    }

    /// Creates the demo person and writes its record line to `out`.
    pub fn exercise(&self, out: &mut impl Write) -> RunResult<Person> {
        info!("event=startup_exercise module=runner status=start");
        let person = self.people.create(DEMO_NAME, DEMO_STATE).map_err(|err| {
            error!(
                "event=startup_exercise module=runner status=error error_code={}",
                err.error_code()
            );
            err
        })?;

        writeln!(out, "{person}")?;
        info!(
            "event=startup_exercise module=runner status=ok id={}",
            person.id
        );
        Ok(person)
    }
}
