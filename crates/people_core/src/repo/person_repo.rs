//! Person repository contract and SQLite implementation.
//!
//! # Invariants
//! - Inserts are parameterized and report the generated key, if any.
//! - Lookups by id expect exactly one row.
//! - Rows with an unknown emotional-state code are rejected, not masked.

use crate::db::DbError;
use crate::model::person::{EmotionalState, Person, PersonId};
use log::{debug, error};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

const INSERT_PERSON_SQL: &str = "INSERT INTO people (name, emotional_state)
VALUES (?1, ?2)
RETURNING id;";

const FIND_PERSON_SQL: &str = "SELECT id, name, emotional_state
FROM people
WHERE id = ?1;";

pub type RepoResult<T> = Result<T, RepoError>;

/// Error for person persistence and lookup.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// The insert completed without handing back a generated key.
    MissingGeneratedKey { name: String },
    /// A lookup by id matched no row.
    EmptyResult { id: PersonId },
    /// A lookup by id matched more rows than expected.
    IncorrectResultSize { expected: usize, actual: usize },
    InvalidData(String),
}

impl RepoError {
    /// Stable code for log events. Never carries person data.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Db(_) => "db_error",
            Self::MissingGeneratedKey { .. } => "missing_generated_key",
            Self::EmptyResult { .. } => "empty_result",
            Self::IncorrectResultSize { .. } => "incorrect_result_size",
            Self::InvalidData(_) => "invalid_data",
        }
    }
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::MissingGeneratedKey { name } => write!(f, "we couldn't create the {name}!"),
            Self::EmptyResult { id } => {
                write!(f, "incorrect result size: expected 1, actual 0 (id={id})")
            }
            Self::IncorrectResultSize { expected, actual } => {
                write!(f, "incorrect result size: expected {expected}, actual {actual}")
            }
            Self::InvalidData(message) => write!(f, "invalid persisted person data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Data access contract for `Person` rows.
pub trait PersonRepository {
    /// Inserts one row and returns the storage-generated key, if the store
    /// handed one back.
    fn insert_person(&self, name: &str, state: EmotionalState) -> RepoResult<Option<PersonId>>;

    /// Loads exactly one row by primary key.
    fn find_person(&self, id: PersonId) -> RepoResult<Person>;
}

impl<T: PersonRepository + ?Sized> PersonRepository for &T {
    fn insert_person(&self, name: &str, state: EmotionalState) -> RepoResult<Option<PersonId>> {
        (**self).insert_person(name, state)
    }

    fn find_person(&self, id: PersonId) -> RepoResult<Person> {
        (**self).find_person(id)
    }
}

/// SQLite-backed person repository.
pub struct SqlitePersonRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePersonRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl PersonRepository for SqlitePersonRepository<'_> {
    fn insert_person(&self, name: &str, state: EmotionalState) -> RepoResult<Option<PersonId>> {
        let started_at = Instant::now();
        let generated = self
            .conn
            .query_row(INSERT_PERSON_SQL, params![name, state.code()], |row| {
                row.get::<_, PersonId>(0)
            })
            .optional()
            .map_err(|err| {
                error!(
                    "event=person_insert module=repo status=error duration_ms={} error={err}",
                    started_at.elapsed().as_millis()
                );
                err
            })?;

        debug!(
            "event=person_insert module=repo status=ok duration_ms={} generated_key={}",
            started_at.elapsed().as_millis(),
            generated.is_some()
        );
        Ok(generated)
    }

    fn find_person(&self, id: PersonId) -> RepoResult<Person> {
        let started_at = Instant::now();
        let result = self.query_one(id);
        match &result {
            Ok(_) => debug!(
                "event=person_find module=repo status=ok id={id} duration_ms={}",
                started_at.elapsed().as_millis()
            ),
            Err(err) => debug!(
                "event=person_find module=repo status=error id={id} error_code={} duration_ms={}",
                err.error_code(),
                started_at.elapsed().as_millis()
            ),
        }
        result
    }
}

impl SqlitePersonRepository<'_> {
    fn query_one(&self, id: PersonId) -> RepoResult<Person> {
        let mut stmt = self.conn.prepare(FIND_PERSON_SQL)?;
        let mut rows = stmt.query(params![id])?;

        let person = match rows.next()? {
            Some(row) => parse_person_row(row)?,
            None => return Err(RepoError::EmptyResult { id }),
        };

        let mut actual = 1;
        while rows.next()?.is_some() {
            actual += 1;
        }
        if actual != 1 {
            return Err(RepoError::IncorrectResultSize {
                expected: 1,
                actual,
            });
        }

        Ok(person)
    }
}

fn parse_person_row(row: &Row<'_>) -> RepoResult<Person> {
    let code: i64 = row.get("emotional_state")?;
    let state = EmotionalState::from_code(code).ok_or_else(|| {
        RepoError::InvalidData(format!(
            "invalid emotional state `{code}` in people.emotional_state"
        ))
    })?;

    Ok(Person::new(row.get("id")?, row.get::<_, String>("name")?, state))
}

#[cfg(test)]
mod tests {
    use super::{PersonRepository, RepoError, SqlitePersonRepository};
    use crate::db::open_db_in_memory;
    use crate::model::person::EmotionalState;

    #[test]
    fn insert_reports_generated_key() {
        let conn = open_db_in_memory().unwrap();
        let repo = SqlitePersonRepository::new(&conn);

        let first = repo.insert_person("Ada", EmotionalState::Happy).unwrap();
        let second = repo.insert_person("Grace", EmotionalState::Neutral).unwrap();

        assert_eq!(first, Some(1));
        assert_eq!(second, Some(2));
    }

    #[test]
    fn missing_generated_key_message_names_the_person() {
        let err = RepoError::MissingGeneratedKey {
            name: "Elizabeth".to_string(),
        };
        assert_eq!(err.to_string(), "we couldn't create the Elizabeth!");
        assert_eq!(err.error_code(), "missing_generated_key");
        assert!(!err.error_code().contains("Elizabeth"));
    }
}
