use schema::{Generation, Language, GENERATIONS};

pub fn all() -> &'static [Generation] {
    &GENERATIONS
}

pub fn by_id(id: u8) -> Option<&'static Generation> {
    GENERATIONS.iter().find(|generation| generation.id == id)
}

/// The release era an entity id belongs to. The "all" pseudo-generation is
/// never returned.
pub fn for_pokemon(pokemon_id: u32) -> Option<&'static Generation> {
    GENERATIONS
        .iter()
        .filter(|generation| !generation.is_all())
        .find(|generation| generation.contains(pokemon_id))
}

pub fn display_name(generation: &Generation, language: Language) -> &'static str {
    match language {
        Language::En => generation.english_name,
        Language::Ko => generation.korean_name,
        Language::Ja => generation.japanese_name,
    }
}
