use crate::common::{FlavorTextEntry, LanguageEntry, NamedResource};
use serde::{Deserialize, Serialize};

/// Core `/pokemon/{id}` payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub height: u32, // decimetres
    #[serde(default)]
    pub weight: u32, // hectograms
    #[serde(default)]
    pub base_experience: Option<u32>,
    #[serde(default)]
    pub sprites: PokemonSprites,
    #[serde(default)]
    pub types: Vec<PokemonTypeSlot>,
    #[serde(default)]
    pub stats: Vec<PokemonStat>,
    #[serde(default)]
    pub abilities: Vec<PokemonAbilitySlot>,
    #[serde(default)]
    pub moves: Vec<PokemonMoveEntry>,
}

impl Pokemon {
    /// Type names in slot order.
    pub fn type_names(&self) -> Vec<String> {
        let mut slots: Vec<&PokemonTypeSlot> = self.types.iter().collect();
        slots.sort_by_key(|slot| slot.slot);
        slots.into_iter().map(|slot| slot.type_.name.clone()).collect()
    }

    /// Official artwork when available, the default front sprite otherwise.
    pub fn image_url(&self) -> Option<&str> {
        self.sprites
            .other
            .official_artwork
            .front_default
            .as_deref()
            .or(self.sprites.front_default.as_deref())
    }

    pub fn base_stat(&self, stat_name: &str) -> Option<u32> {
        self.stats
            .iter()
            .find(|stat| stat.stat.name == stat_name)
            .map(|stat| stat.base_stat)
    }

    pub fn base_stat_total(&self) -> u32 {
        self.stats.iter().map(|stat| stat.base_stat).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PokemonSprites {
    #[serde(default)]
    pub front_default: Option<String>,
    #[serde(default)]
    pub front_shiny: Option<String>,
    #[serde(default)]
    pub other: OtherSprites,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: ArtworkSprites,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ArtworkSprites {
    #[serde(default)]
    pub front_default: Option<String>,
    #[serde(default)]
    pub front_shiny: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonStat {
    pub base_stat: u32,
    #[serde(default)]
    pub effort: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonTypeSlot {
    pub slot: u8,
    #[serde(rename = "type")]
    pub type_: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonAbilitySlot {
    pub ability: NamedResource,
    #[serde(default)]
    pub is_hidden: bool,
    pub slot: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonMoveEntry {
    #[serde(rename = "move")]
    pub move_: NamedResource,
    #[serde(default)]
    pub version_group_details: Vec<MoveLearnDetail>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveLearnDetail {
    pub level_learned_at: u32,
    pub move_learn_method: NamedResource,
    #[serde(default)]
    pub version_group: Option<NamedResource>,
}

/// `/pokemon-species/{id}` payload: localization and evolution linkage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonSpecies {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub names: Vec<LanguageEntry>,
    #[serde(default)]
    pub flavor_text_entries: Vec<FlavorTextEntry>,
    #[serde(default)]
    pub evolution_chain: Option<ApiUrl>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiUrl {
    pub url: String,
}

/// Entity + species + (optional) evolution chain, as assembled for a detail view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonDetail {
    pub pokemon: Pokemon,
    pub species: PokemonSpecies,
    pub evolution_chain: Option<crate::evolution::EvolutionChain>,
}
