use crate::common::{EffectEntry, FlavorTextEntry, LanguageEntry, NamedResource};
use serde::{Deserialize, Serialize};

/// `/move/{id}` payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub names: Vec<LanguageEntry>,
    #[serde(default)]
    pub power: Option<u32>,
    #[serde(default)]
    pub pp: Option<u32>,
    #[serde(default)]
    pub accuracy: Option<u32>,
    #[serde(default)]
    pub priority: i8,
    #[serde(default)]
    pub damage_class: Option<NamedResource>,
    #[serde(rename = "type", default)]
    pub type_: Option<NamedResource>,
    #[serde(default)]
    pub effect_entries: Vec<EffectEntry>,
}

/// `/ability/{id}` payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ability {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub names: Vec<LanguageEntry>,
    #[serde(default)]
    pub is_main_series: bool,
    #[serde(default)]
    pub generation: Option<NamedResource>,
    #[serde(default)]
    pub effect_entries: Vec<EffectEntry>,
    #[serde(default)]
    pub flavor_text_entries: Vec<FlavorTextEntry>,
}

/// `/type/{id}` payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeInfo {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub names: Vec<LanguageEntry>,
    #[serde(default)]
    pub damage_relations: DamageRelations,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DamageRelations {
    #[serde(default)]
    pub no_damage_to: Vec<NamedResource>,
    #[serde(default)]
    pub half_damage_to: Vec<NamedResource>,
    #[serde(default)]
    pub double_damage_to: Vec<NamedResource>,
    #[serde(default)]
    pub no_damage_from: Vec<NamedResource>,
    #[serde(default)]
    pub half_damage_from: Vec<NamedResource>,
    #[serde(default)]
    pub double_damage_from: Vec<NamedResource>,
}

/// Anything carrying the API's per-language `names` list.
pub trait Localized {
    fn names(&self) -> &[LanguageEntry];
    fn identifier(&self) -> &str;
}

impl Localized for Move {
    fn names(&self) -> &[LanguageEntry] {
        &self.names
    }
    fn identifier(&self) -> &str {
        &self.name
    }
}

impl Localized for Ability {
    fn names(&self) -> &[LanguageEntry] {
        &self.names
    }
    fn identifier(&self) -> &str {
        &self.name
    }
}

impl Localized for TypeInfo {
    fn names(&self) -> &[LanguageEntry] {
        &self.names
    }
    fn identifier(&self) -> &str {
        &self.name
    }
}

impl Localized for crate::pokemon::PokemonSpecies {
    fn names(&self) -> &[LanguageEntry] {
        &self.names
    }
    fn identifier(&self) -> &str {
        &self.name
    }
}
