//! Evolution chain resolution.
//!
//! Flattens the API's nested evolution tree into depth-grouped stages, each
//! entry carrying the conditions of the edge that leads to it.

use crate::formatter::title_case;
use crate::translations::{t, Phrase};
use phf::phf_map;
use schema::{ChainLink, EvolutionChain, EvolutionDetail, Language};
use serde::{Deserialize, Serialize};

/// One species in a resolved chain, with the conditions of its incoming edge.
/// The root entry never has any condition set.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EvolutionPokemon {
    pub name: String,
    pub id: u32,
    pub min_level: Option<u32>,
    pub trigger: Option<String>,
    pub item: Option<String>,
    pub time_of_day: Option<String>,
    pub location: Option<String>,
    pub friendship: bool,
    pub trade: bool,
}

impl EvolutionPokemon {
    pub fn has_conditions(&self) -> bool {
        self.min_level.is_some()
            || self.trigger.is_some()
            || self.item.is_some()
            || self.time_of_day.is_some()
            || self.location.is_some()
            || self.friendship
            || self.trade
    }
}

pub type EvolutionStages = Vec<Vec<EvolutionPokemon>>;

static STONE_NAMES: phf::Map<&'static str, Phrase> = phf_map! {
    "fire-stone" => Phrase { en: "Fire Stone", ko: "불꽃의돌", ja: "かえんのいし" },
    "water-stone" => Phrase { en: "Water Stone", ko: "물의돌", ja: "みずのいし" },
    "thunder-stone" => Phrase { en: "Thunder Stone", ko: "번개의돌", ja: "かみなりのいし" },
    "leaf-stone" => Phrase { en: "Leaf Stone", ko: "잎의돌", ja: "リーフのいし" },
    "moon-stone" => Phrase { en: "Moon Stone", ko: "달의돌", ja: "つきのいし" },
    "sun-stone" => Phrase { en: "Sun Stone", ko: "태양의돌", ja: "たいようのいし" },
    "shiny-stone" => Phrase { en: "Shiny Stone", ko: "빛의돌", ja: "ひかりのいし" },
    "dusk-stone" => Phrase { en: "Dusk Stone", ko: "어둠의돌", ja: "やみのいし" },
    "dawn-stone" => Phrase { en: "Dawn Stone", ko: "각성의돌", ja: "めざめのいし" },
    "ice-stone" => Phrase { en: "Ice Stone", ko: "얼음의돌", ja: "こおりのいし" },
};

static TIME_NAMES: phf::Map<&'static str, Phrase> = phf_map! {
    "day" => Phrase { en: "Day", ko: "낮 시간", ja: "昼" },
    "night" => Phrase { en: "Night", ko: "밤 시간", ja: "夜" },
};

/// Resolves a chain into stages grouped by tree depth.
///
/// Depth-first, children in API order, so sibling branches interleave within
/// a depth bucket. Only the first evolution detail of each edge is read.
/// A chain without a root yields no stages.
pub fn resolve(chain: &EvolutionChain) -> EvolutionStages {
    let mut stages = Vec::new();
    if let Some(root) = &chain.chain {
        traverse(root, 0, &mut stages);
    }
    stages
}

/// Resolves a raw evolution-chain payload. Anything that does not decode is
/// treated as "no evolution data".
pub fn resolve_json(raw: &str) -> EvolutionStages {
    match serde_json::from_str::<EvolutionChain>(raw) {
        Ok(chain) => resolve(&chain),
        Err(_) => Vec::new(),
    }
}

fn traverse(node: &ChainLink, depth: usize, stages: &mut EvolutionStages) {
    if stages.len() <= depth {
        stages.push(Vec::new());
    }

    let mut entry = EvolutionPokemon {
        name: node.species.name.clone(),
        id: species_id_from_url(&node.species.url),
        ..Default::default()
    };

    if depth > 0 {
        if let Some(detail) = node.evolution_details.first() {
            apply_conditions(&mut entry, detail);
        }
    }

    stages[depth].push(entry);

    for child in &node.evolves_to {
        traverse(child, depth + 1, stages);
    }
}

fn apply_conditions(entry: &mut EvolutionPokemon, detail: &EvolutionDetail) {
    entry.min_level = detail.min_level;
    entry.trigger = detail.trigger_name().map(str::to_string);
    entry.item = detail.item.as_ref().map(|item| item.name.clone());
    entry.time_of_day = detail
        .time_of_day
        .as_deref()
        .filter(|time| !time.is_empty())
        .map(str::to_string);
    entry.location = detail.location.as_ref().map(|location| location.name.clone());
    entry.friendship = detail.min_happiness.is_some_and(|happiness| happiness > 0);
    entry.trade = detail.trigger_name() == Some("trade");
}

/// Extracts the species id from a `/pokemon-species/<id>/` URL, defaulting
/// to 1 when the URL has no such segment.
pub fn species_id_from_url(url: &str) -> u32 {
    const MARKER: &str = "/pokemon-species/";
    url.find(MARKER)
        .map(|start| &url[start + MARKER.len()..])
        .and_then(|rest| rest.split_once('/'))
        .and_then(|(digits, _)| digits.parse().ok())
        .unwrap_or(1)
}

/// Plain species names per depth, without conditions.
pub fn species_names(chain: &EvolutionChain) -> Vec<Vec<String>> {
    resolve(chain)
        .into_iter()
        .map(|stage| stage.into_iter().map(|entry| entry.name).collect())
        .collect()
}

pub fn stage_label(stage_index: usize, language: Language) -> String {
    match stage_index {
        0 => t("basic", language),
        1 => t("stage_1", language),
        2 => t("stage_2", language),
        _ => t("stage_3", language),
    }
}

fn item_label(item: &str, language: Language) -> String {
    match STONE_NAMES.get(item) {
        Some(stone) => stone.get(language).to_string(),
        None => title_case(item),
    }
}

fn time_label(time: &str, language: Language) -> Option<String> {
    TIME_NAMES.get(time).map(|phrase| phrase.get(language).to_string())
}

/// Condition summary for a resolved entry, e.g. `Level 16` or
/// `Thunder Stone • Trade`. Entries without conditions read "Evolution".
pub fn format_conditions(entry: &EvolutionPokemon, language: Language) -> String {
    let mut conditions = Vec::new();

    if let Some(level) = entry.min_level.filter(|level| *level > 0) {
        conditions.push(format!("{} {}", t("level", language), level));
    }
    if let Some(item) = &entry.item {
        conditions.push(item_label(item, language));
    }
    if let Some(time) = entry.time_of_day.as_deref().and_then(|time| time_label(time, language)) {
        conditions.push(time);
    }
    if entry.friendship {
        conditions.push(t("friendship", language));
    }
    if entry.trade {
        conditions.push(t("trade", language));
    }
    if entry.location.is_some() {
        conditions.push(t("special_location", language));
    }

    if conditions.is_empty() {
        t("evolution", language)
    } else {
        conditions.join(" • ")
    }
}

/// Richer condition text straight from an edge's raw details (happiness
/// threshold, held item, known move, party species). Reads only the first
/// detail; an empty list yields an empty string.
pub fn detail_condition_text(details: &[EvolutionDetail], language: Language) -> String {
    let Some(detail) = details.first() else {
        return String::new();
    };
    let mut conditions = Vec::new();

    if let Some(level) = detail.min_level.filter(|level| *level > 0) {
        conditions.push(format!("{} {}", t("level", language), level));
    }
    if let Some(item) = &detail.item {
        conditions.push(item_label(&item.name, language));
    }
    if let Some(time) = detail.time_of_day.as_deref().and_then(|time| time_label(time, language)) {
        conditions.push(time);
    }
    if let Some(happiness) = detail.min_happiness.filter(|happiness| *happiness > 0) {
        conditions.push(format!("{} {}+", t("friendship", language), happiness));
    }
    if detail.trigger_name() == Some("trade") {
        conditions.push(t("trade", language));
        if let Some(held) = &detail.held_item {
            conditions.push(format!("+ {}", held.name));
        }
    }
    if detail.location.is_some() {
        conditions.push(t("special_location", language));
    }
    if let Some(known_move) = &detail.known_move {
        conditions.push(format!("{}: {}", t("learn_move", language), known_move.name));
    }
    if detail.party_species.is_some() {
        conditions.push(t("party_pokemon", language));
    }

    if conditions.is_empty() {
        t("special_condition", language)
    } else {
        conditions.join(" • ")
    }
}
