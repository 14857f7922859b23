//! Localized display strings.
//!
//! Names bundled with a payload are resolved synchronously with an English
//! fallback. Names of resources that are not at hand (a type, move or ability
//! known only by its identifier) go through [`Formatter`], which fetches them
//! on demand and memoizes the result per (kind, identifier, language). The
//! synchronous accessors never fetch; they read the memo or fall back to a
//! mechanical rendering of the identifier.

use crate::api::{HttpTransport, PokeApiClient, ResourceCache, Transport};
use futures_util::future::join_all;
use schema::{FlavorTextEntry, LanguageEntry, Language, Localized, Move, Pokemon, PokemonSpecies};
use std::sync::Arc;
use tracing::{debug, info, warn};

pub const NO_DESCRIPTION: &str = "No description available.";

pub const COMMON_TYPES: [&str; 18] = [
    "normal", "fighting", "flying", "poison", "ground", "rock", "bug", "ghost", "steel", "fire",
    "water", "grass", "electric", "psychic", "ice", "dragon", "dark", "fairy",
];

pub const COMMON_MOVES: [&str; 30] = [
    "tackle", "scratch", "growl", "leer", "ember", "water-gun", "vine-whip", "pound",
    "karate-chop", "double-slap", "comet-punch", "mega-punch", "pay-day", "fire-punch",
    "ice-punch", "thunder-punch", "quick-attack", "rage", "teleport", "night-shade", "mimic",
    "screech", "double-team", "recover", "harden", "minimize", "smokescreen", "confuse-ray",
    "withdraw", "defense-curl",
];

pub const COMMON_ABILITIES: [&str; 27] = [
    "overgrow", "blaze", "torrent", "swarm", "keen-eye", "tangled-feet", "big-pecks", "pressure",
    "compoundeyes", "tinted-lens", "shield-dust", "run-away", "shed-skin", "guts", "marvel-scale",
    "wonder-skin", "synchronize", "inner-focus", "steadfast", "stench", "effect-spore", "dry-skin",
    "damp", "sand-veil", "static", "lightning-rod", "sand-rush",
];

// --- Plain text helpers ---

/// Upper-cases the first character: `pikachu` -> `Pikachu`.
pub fn capitalize(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Hyphen-separated identifier to title case: `water-gun` -> `Water Gun`.
pub fn title_case(raw: &str) -> String {
    raw.split('-')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// The entry for `language`, else the English entry.
pub fn localized_name(names: &[LanguageEntry], language: Language) -> Option<&str> {
    let find = |code: &str| {
        names
            .iter()
            .find(|entry| entry.language.name == code)
            .map(|entry| entry.name.as_str())
    };
    find(language.code()).or_else(|| find(Language::En.code()))
}

/// Localized flavor text with whitespace control characters flattened.
pub fn flavor_text(entries: &[FlavorTextEntry], language: Language) -> String {
    let find = |code: &str| entries.iter().find(|entry| entry.language.name == code);
    match find(language.code()).or_else(|| find(Language::En.code())) {
        Some(entry) => entry.flavor_text.replace(['\u{c}', '\n'], " "),
        None => NO_DESCRIPTION.to_string(),
    }
}

/// Display name of an entity: the species' localized (or English) name, else
/// the capitalized identifier.
pub fn pokemon_display_name(
    pokemon: &Pokemon,
    species: Option<&PokemonSpecies>,
    language: Language,
) -> String {
    species
        .and_then(|species| localized_name(&species.names, language))
        .map(str::to_string)
        .unwrap_or_else(|| capitalize(&pokemon.name))
}

/// Name of a bundled move in the requested language.
pub fn move_name(move_: &Move, language: Language) -> String {
    display_name(move_, NameKind::Move, language)
}

/// Name of any bundled resource, falling back per kind.
pub fn display_name<L: Localized>(resource: &L, kind: NameKind, language: Language) -> String {
    localized_name(resource.names(), language)
        .map(str::to_string)
        .unwrap_or_else(|| kind.fallback(resource.identifier()))
}

pub fn stat_name(stat: &str, language: Language) -> String {
    let translated = match (stat, language) {
        ("hp", _) => Some("HP"),
        ("attack", Language::En) => Some("Attack"),
        ("attack", Language::Ko) => Some("공격"),
        ("attack", Language::Ja) => Some("攻撃"),
        ("defense", Language::En) => Some("Defense"),
        ("defense", Language::Ko) => Some("방어"),
        ("defense", Language::Ja) => Some("防御"),
        ("special-attack", Language::En) => Some("Special Attack"),
        ("special-attack", Language::Ko) => Some("특수공격"),
        ("special-attack", Language::Ja) => Some("特攻"),
        ("special-defense", Language::En) => Some("Special Defense"),
        ("special-defense", Language::Ko) => Some("특수방어"),
        ("special-defense", Language::Ja) => Some("特防"),
        ("speed", Language::En) => Some("Speed"),
        ("speed", Language::Ko) => Some("스피드"),
        ("speed", Language::Ja) => Some("素早さ"),
        _ => None,
    };
    translated
        .map(str::to_string)
        .unwrap_or_else(|| title_case(stat))
}

/// Zero-padded dex number: `25` -> `025`.
pub fn format_pokemon_id(id: u32) -> String {
    format!("{:03}", id)
}

// --- On-demand resolution ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameKind {
    Type,
    Move,
    Ability,
}

impl NameKind {
    fn as_str(self) -> &'static str {
        match self {
            NameKind::Type => "type",
            NameKind::Move => "move",
            NameKind::Ability => "ability",
        }
    }

    /// Rendering used when no localized name is known.
    pub fn fallback(self, identifier: &str) -> String {
        match self {
            NameKind::Type => capitalize(identifier),
            NameKind::Move | NameKind::Ability => title_case(identifier),
        }
    }
}

fn memo_key(kind: NameKind, identifier: &str, language: Language) -> String {
    format!("{}/{}/{}", kind.as_str(), identifier, language.code())
}

/// Resolves and memoizes localized names of types, moves and abilities.
pub struct Formatter<T: Transport = HttpTransport> {
    client: Arc<PokeApiClient<T>>,
    names: ResourceCache<String>,
}

impl<T: Transport> Formatter<T> {
    pub fn new(client: Arc<PokeApiClient<T>>) -> Self {
        Self {
            client,
            names: ResourceCache::new(),
        }
    }

    pub fn client(&self) -> &PokeApiClient<T> {
        &self.client
    }

    /// Cached name or the mechanical fallback. Never issues a request.
    pub fn name_sync(&self, kind: NameKind, identifier: &str, language: Language) -> String {
        self.names
            .get(&memo_key(kind, identifier, language))
            .unwrap_or_else(|| kind.fallback(identifier))
    }

    /// Fetches the resource if needed and memoizes its localized (or English)
    /// name. Fetch failures fall back without memoizing.
    pub async fn name(&self, kind: NameKind, identifier: &str, language: Language) -> String {
        let key = memo_key(kind, identifier, language);
        if let Some(cached) = self.names.get(&key) {
            return cached;
        }

        let names = match kind {
            NameKind::Type => self.client.get_type(identifier).await.map(|info| info.names),
            NameKind::Move => self.client.get_move(identifier).await.map(|info| info.names),
            NameKind::Ability => self
                .client
                .get_ability(identifier)
                .await
                .map(|info| info.names),
        };

        match names {
            Ok(names) => match localized_name(&names, language) {
                Some(name) => {
                    debug!(%key, %name, "memoized display name");
                    self.names.insert(key, name.to_string());
                    name.to_string()
                }
                None => kind.fallback(identifier),
            },
            Err(e) => {
                warn!(%key, error = %e, "display name unavailable");
                kind.fallback(identifier)
            }
        }
    }

    pub async fn type_name(&self, type_name: &str, language: Language) -> String {
        self.name(NameKind::Type, type_name, language).await
    }

    pub fn type_name_sync(&self, type_name: &str, language: Language) -> String {
        self.name_sync(NameKind::Type, type_name, language)
    }

    pub async fn move_name(&self, move_name: &str, language: Language) -> String {
        self.name(NameKind::Move, move_name, language).await
    }

    pub fn move_name_sync(&self, move_name: &str, language: Language) -> String {
        self.name_sync(NameKind::Move, move_name, language)
    }

    pub async fn ability_name(&self, ability_name: &str, language: Language) -> String {
        self.name(NameKind::Ability, ability_name, language).await
    }

    pub fn ability_name_sync(&self, ability_name: &str, language: Language) -> String {
        self.name_sync(NameKind::Ability, ability_name, language)
    }

    pub async fn ability_description(&self, ability_name: &str, language: Language) -> String {
        match self.client.get_ability(ability_name).await {
            Ok(ability) => flavor_text(&ability.flavor_text_entries, language),
            Err(e) => {
                warn!(ability = %ability_name, error = %e, "ability description unavailable");
                NO_DESCRIPTION.to_string()
            }
        }
    }

    /// Resolves every identifier concurrently; individual failures are
    /// ignored.
    pub async fn preload(&self, kind: NameKind, identifiers: &[&str], language: Language) {
        info!(kind = kind.as_str(), count = identifiers.len(), %language, "preloading names");
        join_all(
            identifiers
                .iter()
                .map(|identifier| self.name(kind, identifier, language)),
        )
        .await;
    }

    pub async fn preload_types(&self, language: Language) {
        self.preload(NameKind::Type, &COMMON_TYPES, language).await
    }

    pub async fn preload_moves(&self, language: Language) {
        self.preload(NameKind::Move, &COMMON_MOVES, language).await
    }

    pub async fn preload_abilities(&self, language: Language) {
        self.preload(NameKind::Ability, &COMMON_ABILITIES, language)
            .await
    }
}
