use std::fmt;

/* Failures while loading a transaction ledger export from disk. */
#[derive(Debug, Clone)]
pub enum LedgerError {
    ReadError(String),
    ParseError(String),
}

impl fmt::Display for LedgerError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LedgerError::ReadError(e) => write!(f, "Could not read ledger file: {e}"),
            LedgerError::ParseError(e) => write!(f, "Could not parse ledger row: {e}"),
        }
    }
}
