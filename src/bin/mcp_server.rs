//! PokeZone MCP Server
//!
//! A Model Context Protocol server using the official Rust SDK (rmcp) that
//! exposes PokeZone lookups, the world cup bracket and favorites for LLM
//! interaction over stdio.

use std::borrow::Cow;
use std::str::FromStr;
use std::sync::{Arc, Mutex, PoisonError};

use pokezone::interface::*;
use pokezone::{
    AppConfig, FavoriteEntry, FavoritesStore, FileStorage, Formatter, Language, PokeApiClient,
    Pokemon, Preferences, Tournament,
};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{ErrorData as McpError, *},
    schemars, tool, tool_handler, tool_router, ServerHandler, ServiceExt,
};
use serde::Deserialize;
use tokio::io::{stdin, stdout};
use tracing::info;

#[derive(Clone)]
pub struct PokeZoneService {
    tool_router: ToolRouter<PokeZoneService>,
    formatter: Arc<Formatter>,
    tournament: Arc<tokio::sync::Mutex<Tournament<Pokemon>>>,
    favorites: Arc<Mutex<FavoritesStore<FileStorage>>>,
    preferences: Arc<Mutex<Preferences<FileStorage>>>,
}

// Tool request structures
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct PokemonRequest {
    #[schemars(description = "Pokemon name or national dex number, e.g. 'pikachu' or '25'")]
    pub pokemon: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CompareRequest {
    #[schemars(description = "First Pokemon name or dex number")]
    pub first: String,
    #[schemars(description = "Second Pokemon name or dex number")]
    pub second: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ListGenerationRequest {
    #[schemars(description = "Generation 1-9, or 0 for all")]
    pub generation: u8,
    #[schemars(description = "Page size (default 20)")]
    pub limit: Option<u32>,
    #[schemars(description = "Offset into the generation (default 0)")]
    pub offset: Option<u32>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct StartTournamentRequest {
    #[schemars(description = "Bracket size: 16, 32, 64, 128 or 256")]
    pub size: u32,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct PickWinnerRequest {
    #[schemars(description = "Dex number of the winner of the current match")]
    pub pokemon_id: u32,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct RemoveFavoriteRequest {
    #[schemars(description = "Dex number of the favorite to remove")]
    pub pokemon_id: u32,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SetLanguageRequest {
    #[schemars(description = "Language code: en, ko or ja")]
    pub language: String,
}

fn internal_error(message: String) -> McpError {
    McpError {
        code: ErrorCode(-32603),
        message: Cow::from(message),
        data: None,
    }
}

fn text(output: String) -> Result<CallToolResult, McpError> {
    Ok(CallToolResult::success(vec![Content::text(output)]))
}

#[tool_router]
impl PokeZoneService {
    pub fn new(config: &AppConfig) -> Self {
        let client = Arc::new(PokeApiClient::http(&config.base_url, &config.user_agent));
        let data_dir = config.data_dir();
        Self {
            tool_router: Self::tool_router(),
            formatter: Arc::new(Formatter::new(client)),
            tournament: Arc::new(tokio::sync::Mutex::new(Tournament::new())),
            favorites: Arc::new(Mutex::new(FavoritesStore::load(FileStorage::new(&data_dir)))),
            preferences: Arc::new(Mutex::new(Preferences::load(FileStorage::new(&data_dir)))),
        }
    }

    fn language(&self) -> Language {
        self.preferences
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .language()
    }

    #[tool(description = "Look up a Pokemon: types, size, abilities, base stats, description and evolution line")]
    async fn lookup_pokemon(
        &self,
        Parameters(request): Parameters<PokemonRequest>,
    ) -> Result<CallToolResult, McpError> {
        text(handle_lookup_pokemon_command(self.formatter.as_ref(), &request.pokemon, self.language()).await)
    }

    #[tool(description = "Show the evolution chain of a Pokemon with evolution conditions")]
    async fn evolution_chain(
        &self,
        Parameters(request): Parameters<PokemonRequest>,
    ) -> Result<CallToolResult, McpError> {
        text(handle_evolution_command(self.formatter.as_ref(), &request.pokemon, self.language()).await)
    }

    #[tool(description = "Compare the base stats, height and weight of two Pokemon")]
    async fn compare_pokemon(
        &self,
        Parameters(request): Parameters<CompareRequest>,
    ) -> Result<CallToolResult, McpError> {
        text(
            handle_compare_command(
                self.formatter.as_ref(),
                &request.first,
                &request.second,
                self.language(),
            )
            .await,
        )
    }

    #[tool(description = "List one page of Pokemon in a generation")]
    async fn list_generation(
        &self,
        Parameters(request): Parameters<ListGenerationRequest>,
    ) -> Result<CallToolResult, McpError> {
        text(
            handle_list_command(
                self.formatter.as_ref(),
                request.generation,
                request.limit.unwrap_or(20),
                request.offset.unwrap_or(0),
                self.language(),
            )
            .await,
        )
    }

    #[tool(description = "Start a new world cup bracket with randomly drawn Pokemon")]
    async fn start_tournament(
        &self,
        Parameters(request): Parameters<StartTournamentRequest>,
    ) -> Result<CallToolResult, McpError> {
        let language = self.language();
        let mut tournament = self.tournament.lock().await;
        match start_tournament(&mut tournament, self.formatter.as_ref(), request.size, language).await {
            Ok(status) => text(status),
            Err(e) => Err(internal_error(format!("Error starting tournament: {}", e))),
        }
    }

    #[tool(description = "Show the current match, round and progress of the bracket")]
    async fn tournament_status(&self) -> Result<CallToolResult, McpError> {
        let tournament = self.tournament.lock().await;
        text(display_tournament_status(&tournament, self.language()))
    }

    #[tool(description = "Pick the winner of the current match by dex number")]
    async fn pick_winner(
        &self,
        Parameters(request): Parameters<PickWinnerRequest>,
    ) -> Result<CallToolResult, McpError> {
        let language = self.language();
        let mut tournament = self.tournament.lock().await;
        let output = match execute_pick(&mut tournament, request.pokemon_id, language) {
            Ok(result) => result,
            Err(e) => format!("Error: {}", e),
        };
        text(output)
    }

    #[tool(description = "Abandon the current bracket")]
    async fn reset_tournament(&self) -> Result<CallToolResult, McpError> {
        self.tournament.lock().await.reset();
        text("Tournament reset.".to_string())
    }

    #[tool(description = "List favorite Pokemon, newest first")]
    async fn list_favorites(&self) -> Result<CallToolResult, McpError> {
        let entries = self
            .favorites
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .list();
        text(display_favorites(&entries, self.language()))
    }

    #[tool(description = "Add a Pokemon to favorites")]
    async fn add_favorite(
        &self,
        Parameters(request): Parameters<PokemonRequest>,
    ) -> Result<CallToolResult, McpError> {
        let pokemon = match self.formatter.client().get_pokemon(request.pokemon.trim()).await {
            Ok(pokemon) => pokemon,
            Err(e) => return text(e.to_string()),
        };
        let added = self
            .favorites
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .add(FavoriteEntry::from_pokemon(&pokemon))
            .map_err(|e| internal_error(format!("Error saving favorites: {}", e)))?;
        if added {
            text(format!("Added {} to favorites.", pokemon.name))
        } else {
            text(format!("{} is already a favorite.", pokemon.name))
        }
    }

    #[tool(description = "Remove a Pokemon from favorites by dex number")]
    async fn remove_favorite(
        &self,
        Parameters(request): Parameters<RemoveFavoriteRequest>,
    ) -> Result<CallToolResult, McpError> {
        let removed = self
            .favorites
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(request.pokemon_id)
            .map_err(|e| internal_error(format!("Error saving favorites: {}", e)))?;
        if removed {
            text(format!("Removed #{} from favorites.", request.pokemon_id))
        } else {
            text(format!("#{} is not a favorite.", request.pokemon_id))
        }
    }

    #[tool(description = "Set the display language (en, ko, ja)")]
    async fn set_language(
        &self,
        Parameters(request): Parameters<SetLanguageRequest>,
    ) -> Result<CallToolResult, McpError> {
        let Ok(language) = Language::from_str(request.language.trim()) else {
            return text(format!(
                "Unknown language '{}'. Use en, ko or ja.",
                request.language
            ));
        };
        self.preferences
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .set_language(language)
            .map_err(|e| internal_error(format!("Error saving preferences: {}", e)))?;
        self.formatter.preload_types(language).await;
        text(format!("Language set to {}.", language))
    }
}

#[tool_handler]
impl ServerHandler for PokeZoneService {}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // stdout carries the protocol; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = AppConfig::load();
    info!(base_url = %config.base_url, "PokeZone MCP server starting");

    let service = PokeZoneService::new(&config);
    let transport = (stdin(), stdout());

    let server = service.serve(transport).await?;
    info!("server running, waiting for shutdown");
    let quit_reason = server.waiting().await?;

    info!(?quit_reason, "PokeZone MCP server exiting");
    Ok(())
}
