use crate::common::NamedResource;
use serde::{Deserialize, Serialize};

/// `/evolution-chain/{id}` payload.
///
/// `chain` is optional so that a payload missing its root still decodes; the
/// resolver treats that as "no evolution data".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionChain {
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub chain: Option<ChainLink>,
}

/// One node of the evolution tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainLink {
    pub species: NamedResource,
    #[serde(default)]
    pub evolution_details: Vec<EvolutionDetail>,
    #[serde(default)]
    pub evolves_to: Vec<ChainLink>,
}

/// The conditions under which the parent evolves into this node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct EvolutionDetail {
    #[serde(default)]
    pub trigger: Option<NamedResource>,
    #[serde(default)]
    pub min_level: Option<u32>,
    #[serde(default)]
    pub item: Option<NamedResource>,
    #[serde(default)]
    pub held_item: Option<NamedResource>,
    #[serde(default)]
    pub time_of_day: Option<String>, // the API sends "" when unset
    #[serde(default)]
    pub min_happiness: Option<u32>,
    #[serde(default)]
    pub min_affection: Option<u32>,
    #[serde(default)]
    pub min_beauty: Option<u32>,
    #[serde(default)]
    pub gender: Option<u8>,
    #[serde(default)]
    pub location: Option<NamedResource>,
    #[serde(default)]
    pub known_move: Option<NamedResource>,
    #[serde(default)]
    pub known_move_type: Option<NamedResource>,
    #[serde(default)]
    pub party_species: Option<NamedResource>,
    #[serde(default)]
    pub party_type: Option<NamedResource>,
    #[serde(default)]
    pub trade_species: Option<NamedResource>,
    #[serde(default)]
    pub relative_physical_stats: Option<i8>,
    #[serde(default)]
    pub needs_overworld_rain: bool,
    #[serde(default)]
    pub turn_upside_down: bool,
}

impl EvolutionDetail {
    pub fn trigger_name(&self) -> Option<&str> {
        self.trigger.as_ref().map(|trigger| trigger.name.as_str())
    }
}
