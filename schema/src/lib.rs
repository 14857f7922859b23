// PokeZone Schema - Shared payload definitions
// This crate contains the serde models for every PokeAPI payload the toolkit
// consumes, together with the small enums (language, theme) and static tables
// (generations) shared between the library, the CLI and the MCP server.

// Re-export the main types
pub use common::*;
pub use evolution::*;
pub use generation::*;
pub use preferences::*;
pub use pokemon::*;
pub use resources::*;

pub mod common;
pub mod evolution;
pub mod generation;
pub mod pokemon;
pub mod preferences;
pub mod resources;
