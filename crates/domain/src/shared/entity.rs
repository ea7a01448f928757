use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};
use thiserror::Error;

pub trait Entity<T: PartialEq> {
    fn id(&self) -> T;
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

/// Integer identifier assigned by a repository when a record is created.
/// Ids grow monotonically within a collection and are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ID(i64);

impl ID {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn inner(self) -> i64 {
        self.0
    }

    /// The id a repository hands out after this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl Display for ID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Error, Debug)]
pub enum InvalidIDError {
    #[error("ID: {0} is malformed")]
    Malformed(String),
}

impl FromStr for ID {
    type Err = InvalidIDError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>()
            .map(Self)
            .map_err(|_| InvalidIDError::Malformed(s.to_string()))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_integer_ids() {
        assert_eq!("42".parse::<ID>().unwrap(), ID::new(42));
        assert!("42abc".parse::<ID>().is_err());
        assert!("".parse::<ID>().is_err());
    }

    #[test]
    fn next_id_is_successor() {
        assert_eq!(ID::new(1).next(), ID::new(2));
        assert!(ID::new(7).next() > ID::new(7));
    }
}
