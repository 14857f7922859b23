use crate::api::{PokeApiClient, Transport};
use crate::errors::{FetchError, FetchResult};
use schema::{
    ApiUrl, ChainLink, EvolutionChain, EvolutionDetail, LanguageEntry, NamedResource, Pokemon,
    PokemonSpecies, PokemonSprites, PokemonStat, PokemonTypeSlot, TypeInfo,
};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

pub const BASE_URL: &str = "https://fixture.test/api/v2";

/// Serves canned bodies by exact URL and records every request.
///
/// URLs without a body fail the same way a 404 or a dead network would.
#[derive(Default)]
pub struct FixtureTransport {
    bodies: Mutex<HashMap<String, String>>,
    requests: Mutex<Vec<String>>,
    delay: Option<Duration>,
}

impl FixtureTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delays every response, to let tests overlap requests.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn serve(&self, url: impl Into<String>, body: impl Into<String>) {
        self.bodies.lock().unwrap().insert(url.into(), body.into());
    }

    /// Serves `value` as JSON at `BASE_URL` + `path`.
    pub fn serve_json<V: Serialize>(&self, path: &str, value: &V) {
        let body = serde_json::to_string(value).unwrap();
        self.serve(format!("{}{}", BASE_URL, path), body);
    }

    /// Serves an entity under both its id and its name.
    pub fn serve_pokemon(&self, pokemon: &Pokemon) {
        self.serve_json(&format!("/pokemon/{}", pokemon.id), pokemon);
        self.serve_json(&format!("/pokemon/{}", pokemon.name), pokemon);
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn requests_for(&self, url: &str) -> usize {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|requested| requested.as_str() == url)
            .count()
    }
}

impl Transport for FixtureTransport {
    async fn get_text(&self, url: &str) -> FetchResult<String> {
        self.requests.lock().unwrap().push(url.to_string());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        let body = self.bodies.lock().unwrap().get(url).cloned();
        body.ok_or_else(|| FetchError::new(format!("serve {}", url)))
    }
}

pub fn fixture_client(transport: FixtureTransport) -> PokeApiClient<FixtureTransport> {
    PokeApiClient::with_transport(BASE_URL, transport)
}

pub fn url(path: &str) -> String {
    format!("{}{}", BASE_URL, path)
}

/// A builder for test entity payloads with common defaults.
///
/// # Example
/// ```
/// let pikachu = TestPokemonBuilder::new(25, "pikachu")
///     .with_types(&["electric"])
///     .with_stats(&[("hp", 35), ("speed", 90)])
///     .build();
/// ```
pub struct TestPokemonBuilder {
    id: u32,
    name: String,
    height: u32,
    weight: u32,
    types: Vec<String>,
    stats: Vec<(String, u32)>,
}

impl TestPokemonBuilder {
    /// Creates a new builder for a given dex number and identifier.
    pub fn new(id: u32, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            height: 10,
            weight: 100,
            types: vec!["normal".to_string()],
            stats: Vec::new(),
        }
    }

    /// Sets the types in slot order.
    pub fn with_types(mut self, types: &[&str]) -> Self {
        self.types = types.iter().map(|t| t.to_string()).collect();
        self
    }

    /// Sets base stats by API stat name.
    pub fn with_stats(mut self, stats: &[(&str, u32)]) -> Self {
        self.stats = stats.iter().map(|(n, v)| (n.to_string(), *v)).collect();
        self
    }

    /// Sets height (decimetres) and weight (hectograms).
    pub fn with_size(mut self, height: u32, weight: u32) -> Self {
        self.height = height;
        self.weight = weight;
        self
    }

    pub fn build(self) -> Pokemon {
        Pokemon {
            id: self.id,
            name: self.name,
            height: self.height,
            weight: self.weight,
            base_experience: Some(64),
            sprites: PokemonSprites::default(),
            types: self
                .types
                .iter()
                .enumerate()
                .map(|(i, name)| PokemonTypeSlot {
                    slot: i as u8 + 1,
                    type_: NamedResource::new(name.as_str(), url(&format!("/type/{}/", name))),
                })
                .collect(),
            stats: self
                .stats
                .iter()
                .map(|(name, value)| PokemonStat {
                    base_stat: *value,
                    effort: 0,
                    stat: NamedResource::new(name.as_str(), ""),
                })
                .collect(),
            abilities: Vec::new(),
            moves: Vec::new(),
        }
    }
}

/// `count` distinct entrants with ids `1..=count`.
pub fn entrants(count: u32) -> Vec<Pokemon> {
    (1..=count)
        .map(|id| TestPokemonBuilder::new(id, &format!("mon-{}", id)).build())
        .collect()
}

pub fn names(entries: &[(&str, &str)]) -> Vec<LanguageEntry> {
    entries
        .iter()
        .map(|(code, name)| LanguageEntry {
            language: NamedResource::new(*code, ""),
            name: name.to_string(),
        })
        .collect()
}

pub fn species(id: u32, name: &str, chain_url: Option<&str>) -> PokemonSpecies {
    PokemonSpecies {
        id,
        name: name.to_string(),
        names: Vec::new(),
        flavor_text_entries: Vec::new(),
        evolution_chain: chain_url.map(|url| ApiUrl {
            url: url.to_string(),
        }),
    }
}

pub fn type_info(id: u32, name: &str, localized: &[(&str, &str)]) -> TypeInfo {
    TypeInfo {
        id,
        name: name.to_string(),
        names: names(localized),
        damage_relations: Default::default(),
    }
}

/// One node of an evolution tree; the species URL carries `id`.
pub fn chain_node(
    name: &str,
    id: u32,
    evolution_details: Vec<EvolutionDetail>,
    evolves_to: Vec<ChainLink>,
) -> ChainLink {
    ChainLink {
        species: NamedResource::new(name, format!("https://pokeapi.co/api/v2/pokemon-species/{}/", id)),
        evolution_details,
        evolves_to,
    }
}

pub fn chain(root: ChainLink) -> EvolutionChain {
    EvolutionChain {
        id: 1,
        chain: Some(root),
    }
}

pub fn level_up(level: u32) -> EvolutionDetail {
    EvolutionDetail {
        trigger: Some(NamedResource::new("level-up", "")),
        min_level: Some(level),
        ..Default::default()
    }
}

pub fn use_item(item: &str) -> EvolutionDetail {
    EvolutionDetail {
        trigger: Some(NamedResource::new("use-item", "")),
        item: Some(NamedResource::new(item, "")),
        ..Default::default()
    }
}

pub fn trade() -> EvolutionDetail {
    EvolutionDetail {
        trigger: Some(NamedResource::new("trade", "")),
        ..Default::default()
    }
}
