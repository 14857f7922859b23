use thiserror::Error;

/// Main error type for the PokeZone toolkit
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PokeZoneError {
    /// Error talking to the remote data source
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),
    /// Error related to the tournament bracket
    #[error("Tournament error: {0}")]
    Tournament(#[from] TournamentError),
    /// Error reading or writing persisted state
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}

/// Any transport, HTTP or decode failure against the remote API.
///
/// A missing resource and a dead network look the same to callers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Failed to {context}.")]
pub struct FetchError {
    pub context: String,
}

impl FetchError {
    pub fn new(context: impl Into<String>) -> Self {
        Self {
            context: context.into(),
        }
    }
}

/// Errors related to the single-elimination bracket
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TournamentError {
    /// The requested bracket size is not one of 16, 32, 64, 128, 256
    #[error("Invalid tournament size: {0}")]
    InvalidSize(u32),
    /// The participant list does not match the bracket size
    #[error("Expected {expected} participants, got {actual}")]
    ParticipantCount { expected: usize, actual: usize },
    /// No match is waiting for a decision (idle or finished)
    #[error("No match is in progress")]
    NoActiveMatch,
    /// The chosen entrant is not part of the current pair
    #[error("Entrant {0} is not in the current match")]
    NotInCurrentPair(u32),
    /// A pick by position named something other than side 1 or 2
    #[error("Invalid side {0}: pick 1 or 2")]
    InvalidSide(usize),
    /// Fetching the drawn entrants failed; the bracket was not started
    #[error("Failed to load participants: {0}")]
    Initialization(#[from] FetchError),
}

/// Errors related to persisted favorites and preferences
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed
    #[error("I/O error on '{key}': {details}")]
    Io { key: String, details: String },
    /// The value could not be serialized
    #[error("Failed to encode '{key}': {details}")]
    Encode { key: String, details: String },
}

/// Type alias for Results using PokeZoneError
pub type PokeZoneResult<T> = Result<T, PokeZoneError>;

/// Type alias for Results using FetchError
pub type FetchResult<T> = Result<T, FetchError>;

/// Type alias for Results using TournamentError
pub type TournamentResult<T> = Result<T, TournamentError>;

/// Type alias for Results using StoreError
pub type StoreResult<T> = Result<T, StoreError>;
