// In: src/lib.rs

//! PokeZone
//!
//! A Pokemon reference toolkit over the public PokeAPI: memoized lookups,
//! evolution chain resolution, a single-elimination "world cup" bracket,
//! localized display strings and persisted favorites and preferences.

// --- MODULE DECLARATIONS ---
// This declares the module hierarchy for the crate.
pub mod api;
pub mod compare;
pub mod config;
pub mod errors;
pub mod evolution;
pub mod favorites;
pub mod formatter;
pub mod generation;
pub mod interface;
pub mod moves;
pub mod preferences;
pub mod search;
pub mod storage;
pub mod tournament;
pub mod translations;

#[cfg(test)]
mod tests;

// --- PUBLIC API RE-EXPORTS ---
// This section defines the public-facing API of the `pokezone` crate,
// making it easy for users to import the most important types directly.

// --- From the `schema` crate ---
// Re-export the payload models and shared enums.
pub use schema::{
    // Evolution payloads
    ChainLink,
    EvolutionChain,
    EvolutionDetail,
    // Static tables
    Generation,
    // Shared enums
    Language,
    ListResponse,
    // Entity payloads
    Pokemon,
    PokemonDetail,
    PokemonSpecies,
    Theme,
    GENERATIONS,
    MAX_POKEMON_ID,
};

// --- From this crate's modules (`src/`) ---

// Remote data access.
pub use api::{HttpTransport, PokeApiClient, ResourceCache, Transport, DEFAULT_BASE_URL};

// Core engines.
pub use evolution::{resolve, EvolutionPokemon, EvolutionStages};
pub use tournament::{BracketState, MatchOutcome, Tournament, TournamentSize};

// Display and persistence.
pub use favorites::{FavoriteEntry, FavoritesStore};
pub use formatter::{Formatter, NameKind};
pub use preferences::Preferences;
pub use search::{Debouncer, SearchOutcome};
pub use storage::{FileStorage, MemoryStorage, Storage};

pub use config::AppConfig;

// Crate-specific error and result types.
pub use errors::{
    FetchError, FetchResult, PokeZoneError, PokeZoneResult, StoreError, StoreResult,
    TournamentError, TournamentResult,
};
