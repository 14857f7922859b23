use crate::api::cache::ResourceCache;
use crate::api::transport::{HttpTransport, Transport};
use crate::errors::{FetchError, FetchResult};
use crate::evolution::{self, EvolutionPokemon};
use futures_util::future::try_join_all;
use schema::{
    Ability, EvolutionChain, Generation, ListResponse, Move, NamedResource, Pokemon,
    PokemonDetail, PokemonSpecies, TypeInfo,
};
use serde::de::DeserializeOwned;
use std::fmt;
use tracing::{debug, warn};

pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Resources that carry both a numeric id and a canonical name, so a fetch by
/// one can also populate the cache under the other.
pub trait Identified {
    fn resource_id(&self) -> u32;
    fn resource_name(&self) -> &str;
}

macro_rules! identified {
    ($($ty:ty),*) => {
        $(impl Identified for $ty {
            fn resource_id(&self) -> u32 {
                self.id
            }
            fn resource_name(&self) -> &str {
                &self.name
            }
        })*
    };
}

identified!(Pokemon, PokemonSpecies, Move, Ability, TypeInfo);

/// Normalizes an id-or-name into the cache / URL key.
fn resource_key(id_or_name: impl fmt::Display) -> String {
    id_or_name.to_string().trim().to_lowercase()
}

/// Caching facade over the PokeAPI REST endpoints.
pub struct PokeApiClient<T: Transport = HttpTransport> {
    base_url: String,
    transport: T,
    pokemon: ResourceCache<Pokemon>,
    species: ResourceCache<PokemonSpecies>,
    chains: ResourceCache<EvolutionChain>,
    moves: ResourceCache<Move>,
    abilities: ResourceCache<Ability>,
    types: ResourceCache<TypeInfo>,
}

impl PokeApiClient<HttpTransport> {
    pub fn http(base_url: &str, user_agent: &str) -> Self {
        Self::with_transport(base_url, HttpTransport::new(user_agent))
    }
}

impl<T: Transport> PokeApiClient<T> {
    pub fn with_transport(base_url: &str, transport: T) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
            pokemon: ResourceCache::new(),
            species: ResourceCache::new(),
            chains: ResourceCache::new(),
            moves: ResourceCache::new(),
            abilities: ResourceCache::new(),
            types: ResourceCache::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    // --- Entity endpoints ---

    pub async fn get_pokemon(&self, id_or_name: impl fmt::Display) -> FetchResult<Pokemon> {
        let key = resource_key(id_or_name);
        let url = format!("{}/pokemon/{}", self.base_url, key);
        self.fetch_identified(&self.pokemon, &key, &url, "fetch Pokemon data")
            .await
    }

    pub async fn get_species(&self, id: u32) -> FetchResult<PokemonSpecies> {
        let key = id.to_string();
        let url = format!("{}/pokemon-species/{}", self.base_url, key);
        self.fetch_identified(&self.species, &key, &url, "fetch Pokemon species data")
            .await
    }

    pub async fn get_evolution_chain(&self, url: &str) -> FetchResult<EvolutionChain> {
        self.fetch_cached(&self.chains, url, url, "fetch evolution chain data")
            .await
    }

    pub async fn get_move(&self, id_or_name: impl fmt::Display) -> FetchResult<Move> {
        let key = resource_key(id_or_name);
        let url = format!("{}/move/{}", self.base_url, key);
        self.fetch_identified(&self.moves, &key, &url, "fetch move data")
            .await
    }

    pub async fn get_ability(&self, id_or_name: impl fmt::Display) -> FetchResult<Ability> {
        let key = resource_key(id_or_name);
        let url = format!("{}/ability/{}", self.base_url, key);
        self.fetch_identified(&self.abilities, &key, &url, "fetch ability data")
            .await
    }

    pub async fn get_type(&self, id_or_name: impl fmt::Display) -> FetchResult<TypeInfo> {
        let key = resource_key(id_or_name);
        let url = format!("{}/type/{}", self.base_url, key);
        self.fetch_identified(&self.types, &key, &url, "fetch type data")
            .await
    }

    /// Fetches every id concurrently. All-or-nothing: the first failure fails
    /// the whole batch.
    pub async fn get_pokemon_batch(&self, ids: &[u32]) -> FetchResult<Vec<Pokemon>> {
        try_join_all(ids.iter().map(|id| self.get_pokemon(*id))).await
    }

    // --- Listing ---

    pub async fn list_pokemon(&self, limit: u32, offset: u32) -> FetchResult<ListResponse> {
        let url = format!(
            "{}/pokemon?limit={}&offset={}",
            self.base_url, limit, offset
        );
        self.fetch_json(&url, "fetch Pokemon list").await
    }

    /// One page of a generation. Non-"all" generations are synthesized from
    /// the id range without a request.
    pub async fn list_by_generation(
        &self,
        generation: &Generation,
        limit: u32,
        offset: u32,
    ) -> FetchResult<ListResponse> {
        if generation.is_all() {
            return self.list_pokemon(limit, offset).await;
        }
        Ok(self.generation_page(generation, limit, offset))
    }

    fn generation_page(&self, generation: &Generation, limit: u32, offset: u32) -> ListResponse {
        // An offset past the range yields an empty page.
        let start_id = generation.start_id.saturating_add(offset);
        let after_id = start_id.saturating_add(limit);
        let end_id = generation.end_id.min(after_id.saturating_sub(1));

        let results = (start_id..=end_id)
            .map(|id| {
                NamedResource::new(
                    format!("pokemon-{}", id),
                    format!("{}/pokemon/{}/", self.base_url, id),
                )
            })
            .collect();

        ListResponse {
            count: generation.len(),
            next: (after_id <= generation.end_id).then(|| "next-page".to_string()),
            previous: (offset > 0).then(|| "prev-page".to_string()),
            results,
        }
    }

    // --- Composite lookups ---

    /// Entity + species + evolution chain. A failed chain fetch degrades to
    /// `None`; entity or species failures fail the whole lookup.
    pub async fn get_pokemon_detail(
        &self,
        id_or_name: impl fmt::Display,
    ) -> FetchResult<PokemonDetail> {
        let pokemon = self.get_pokemon(id_or_name).await?;
        let species = self.get_species(pokemon.id).await?;

        let evolution_chain = match &species.evolution_chain {
            Some(link) => match self.get_evolution_chain(&link.url).await {
                Ok(chain) => Some(chain),
                Err(e) => {
                    warn!(pokemon = %pokemon.name, error = %e, "evolution chain unavailable");
                    None
                }
            },
            None => None,
        };

        Ok(PokemonDetail {
            pokemon,
            species,
            evolution_chain,
        })
    }

    /// Looks an entity up by free-text query. Any failure is reported as
    /// "not found".
    pub async fn search(&self, query: &str) -> Option<Pokemon> {
        let normalized = query.trim().to_lowercase();
        if normalized.is_empty() {
            return None;
        }
        match self.get_pokemon(&normalized).await {
            Ok(pokemon) => Some(pokemon),
            Err(e) => {
                debug!(query = %normalized, error = %e, "search miss");
                None
            }
        }
    }

    /// Evolution stages for a species. Missing or failing data yields an
    /// empty list.
    pub async fn evolution_stages(&self, species: &PokemonSpecies) -> Vec<Vec<EvolutionPokemon>> {
        let Some(link) = &species.evolution_chain else {
            return Vec::new();
        };
        match self.get_evolution_chain(&link.url).await {
            Ok(chain) => evolution::resolve(&chain),
            Err(e) => {
                warn!(species = %species.name, error = %e, "no evolution data");
                Vec::new()
            }
        }
    }

    // --- Internal helpers ---

    async fn fetch_json<V: DeserializeOwned>(&self, url: &str, context: &str) -> FetchResult<V> {
        let body = self.transport.get_text(url).await.map_err(|e| {
            warn!(%url, error = %e, "request failed");
            FetchError::new(context)
        })?;

        serde_json::from_str(&body).map_err(|e| {
            warn!(%url, error = %e, "unexpected payload");
            FetchError::new(context)
        })
    }

    async fn fetch_cached<V>(
        &self,
        cache: &ResourceCache<V>,
        key: &str,
        url: &str,
        context: &str,
    ) -> FetchResult<V>
    where
        V: DeserializeOwned + Clone,
    {
        if let Some(hit) = cache.get(key) {
            debug!(%key, "cache hit");
            return Ok(hit);
        }

        let value: V = self.fetch_json(url, context).await?;
        cache.insert(key, value.clone());
        Ok(value)
    }

    /// Like `fetch_cached`, but also files the result under its canonical id
    /// and name.
    async fn fetch_identified<V>(
        &self,
        cache: &ResourceCache<V>,
        key: &str,
        url: &str,
        context: &str,
    ) -> FetchResult<V>
    where
        V: DeserializeOwned + Clone + Identified,
    {
        if let Some(hit) = cache.get(key) {
            debug!(%key, "cache hit");
            return Ok(hit);
        }

        let value: V = self.fetch_json(url, context).await?;
        cache.insert(value.resource_id().to_string(), value.clone());
        cache.insert(value.resource_name().to_string(), value.clone());
        cache.insert(key, value.clone());
        Ok(value)
    }
}
