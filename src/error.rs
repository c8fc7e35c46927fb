//! Error taxonomy (spec §7). Grounded on the teacher's `main.rs::SolveError`
//! (`Unsat`/`Interrupted`/`Other(#[from] anyhow::Error)`), extended with the
//! record-format and grid-dispatch failure modes this crate adds.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SolveError {
    #[error("unsatisfiable")]
    Unsat,
    #[error("interrupted")]
    Interrupted,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Error, Debug)]
pub enum RecordParseError {
    #[error("unrecognized grid code '{0}'")]
    UnknownGridCode(char),
    #[error("malformed record: {0}")]
    Malformed(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
#[error("unrecognized grid code '{0}' (expected one of O, H, I, o, T, A, D, K, h)")]
pub struct GridCodeError(pub char);
