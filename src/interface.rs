//! Text front end shared by the CLI and the MCP server.
//!
//! Every operation of the toolkit has a function here that performs it and
//! returns the human-readable text to show, so both binaries stay thin.

use crate::api::Transport;
use crate::compare::{compare, Comparison, Leader};
use crate::errors::TournamentError;
use crate::evolution::{self, format_conditions, stage_label, EvolutionStages};
use crate::favorites::FavoriteEntry;
use crate::formatter::{
    capitalize, flavor_text, format_pokemon_id, pokemon_display_name, stat_name, Formatter,
};
use crate::generation;
use crate::moves::{categorize, MoveCatalog};
use crate::tournament::{MatchOutcome, Tournament, TournamentSize};
use crate::translations::t;
use schema::{Generation, Language, ListResponse, Pokemon, PokemonDetail};

const NO_TOURNAMENT: &str = "No tournament is running. Use 'start_tournament' to begin.";

fn entrant_label(pokemon: &Pokemon) -> String {
    format!("#{} {}", format_pokemon_id(pokemon.id), capitalize(&pokemon.name))
}

async fn type_line<T: Transport>(
    formatter: &Formatter<T>,
    pokemon: &Pokemon,
    language: Language,
) -> String {
    let mut names = Vec::new();
    for type_name in pokemon.type_names() {
        names.push(formatter.type_name(&type_name, language).await);
    }
    names.join(" / ")
}

// --- Detail ---

/// Full detail card: names, types, size, abilities, stats, flavor text and
/// evolution line.
pub async fn display_pokemon_detail<T: Transport>(
    formatter: &Formatter<T>,
    detail: &PokemonDetail,
    language: Language,
) -> String {
    let pokemon = &detail.pokemon;
    let mut output = format!(
        "--- #{} {} ---\n",
        format_pokemon_id(pokemon.id),
        pokemon_display_name(pokemon, Some(&detail.species), language)
    );

    if let Some(era) = generation::for_pokemon(pokemon.id) {
        output.push_str(&format!("{}\n", generation::display_name(era, language)));
    }
    output.push_str(&format!(
        "{}: {}\n",
        t("type", language),
        type_line(formatter, pokemon, language).await
    ));
    output.push_str(&format!(
        "{}: {:.1}m   {}: {:.1}kg\n",
        t("height", language),
        pokemon.height as f64 / 10.0,
        t("weight", language),
        pokemon.weight as f64 / 10.0
    ));
    if let Some(experience) = pokemon.base_experience {
        output.push_str(&format!("{}: {}\n", t("base_experience", language), experience));
    }

    output.push_str(&format!("\n{}:\n", t("abilities", language)));
    for slot in &pokemon.abilities {
        let name = formatter.ability_name(&slot.ability.name, language).await;
        if slot.is_hidden {
            output.push_str(&format!("  {} ({})\n", name, t("hidden_ability", language)));
        } else {
            output.push_str(&format!("  {}\n", name));
        }
    }

    output.push_str(&format!("\n{}:\n", t("base_stats", language)));
    for stat in &pokemon.stats {
        output.push_str(&format!(
            "  {:<16} {:>3}\n",
            stat_name(&stat.stat.name, language),
            stat.base_stat
        ));
    }
    output.push_str(&format!(
        "  {:<16} {:>3}\n",
        t("total_stats", language),
        pokemon.base_stat_total()
    ));

    output.push_str(&format!(
        "\n{}\n",
        flavor_text(&detail.species.flavor_text_entries, language)
    ));

    let stages = detail
        .evolution_chain
        .as_ref()
        .map(evolution::resolve)
        .unwrap_or_default();
    output.push('\n');
    output.push_str(&display_evolution_stages(&stages, language));
    output
}

pub async fn handle_lookup_pokemon_command<T: Transport>(
    formatter: &Formatter<T>,
    query: &str,
    language: Language,
) -> String {
    if query.trim().is_empty() {
        return "What Pokemon do you want to look up? (e.g., 'pikachu' or '25')".to_string();
    }
    match formatter.client().get_pokemon_detail(query.trim()).await {
        Ok(detail) => display_pokemon_detail(formatter, &detail, language).await,
        Err(_) => format!("{} '{}'.", t("no_pokemon_found", language), query.trim()),
    }
}

// --- Evolution ---

pub fn display_evolution_stages(stages: &EvolutionStages, language: Language) -> String {
    let mut output = format!("{}:\n", t("evolution_chain", language));
    if stages.len() <= 1 {
        output.push_str(&format!("  {}\n", t("no_evolution", language)));
        return output;
    }

    for (index, stage) in stages.iter().enumerate() {
        output.push_str(&format!("  [{}]\n", stage_label(index, language)));
        for entry in stage {
            if index == 0 {
                output.push_str(&format!(
                    "    #{} {}\n",
                    format_pokemon_id(entry.id),
                    capitalize(&entry.name)
                ));
            } else {
                output.push_str(&format!(
                    "    #{} {} ({})\n",
                    format_pokemon_id(entry.id),
                    capitalize(&entry.name),
                    format_conditions(entry, language)
                ));
            }
        }
    }
    output
}

pub async fn handle_evolution_command<T: Transport>(
    formatter: &Formatter<T>,
    query: &str,
    language: Language,
) -> String {
    let client = formatter.client();
    let pokemon = match client.get_pokemon(query.trim()).await {
        Ok(pokemon) => pokemon,
        Err(_) => return format!("{} '{}'.", t("no_pokemon_found", language), query.trim()),
    };
    match client.get_species(pokemon.id).await {
        Ok(species) => {
            let stages = client.evolution_stages(&species).await;
            display_evolution_stages(&stages, language)
        }
        Err(e) => format!("{}: {}", t("error", language), e),
    }
}

// --- Comparison ---

fn mark(leader: Leader, side: Leader) -> &'static str {
    if leader == side {
        "*"
    } else {
        " "
    }
}

pub fn display_comparison(comparison: &Comparison, language: Language) -> String {
    let mut output = format!(
        "--- {} {} {} ---\n",
        capitalize(&comparison.first_name),
        t("vs", language),
        capitalize(&comparison.second_name)
    );

    for row in &comparison.stats {
        output.push_str(&format!(
            "  {:<16} {:>3}{} {:>3}{}\n",
            stat_name(&row.stat, language),
            row.first,
            mark(row.leader, Leader::First),
            row.second,
            mark(row.leader, Leader::Second)
        ));
    }
    let total = comparison.total_leader();
    output.push_str(&format!(
        "  {:<16} {:>3}{} {:>3}{}\n\n",
        t("total_stats", language),
        comparison.first_total,
        mark(total, Leader::First),
        comparison.second_total,
        mark(total, Leader::Second)
    ));

    output.push_str(&format!(
        "{}: {:.1}m vs {:.1}m ({})\n",
        t("height", language),
        comparison.first_height,
        comparison.second_height,
        comparison.height_verdict(language)
    ));
    output.push_str(&format!(
        "{}: {:.1}kg vs {:.1}kg ({})\n",
        t("weight", language),
        comparison.first_weight,
        comparison.second_weight,
        comparison.weight_verdict(language)
    ));
    output
}

pub async fn handle_compare_command<T: Transport>(
    formatter: &Formatter<T>,
    first: &str,
    second: &str,
    language: Language,
) -> String {
    let client = formatter.client();
    let (a, b) = tokio::join!(
        client.get_pokemon(first.trim()),
        client.get_pokemon(second.trim())
    );
    match (a, b) {
        (Ok(a), Ok(b)) => display_comparison(&compare(&a, &b), language),
        (Err(_), _) => format!("{} '{}'.", t("no_pokemon_found", language), first.trim()),
        (_, Err(_)) => format!("{} '{}'.", t("no_pokemon_found", language), second.trim()),
    }
}

// --- Moves ---

pub fn display_move_catalog<T: Transport>(
    formatter: &Formatter<T>,
    catalog: &MoveCatalog,
    language: Language,
) -> String {
    let stats = catalog.stats();
    let mut output = format!(
        "{} ({})\n",
        t("level_up_moves", language),
        stats.level_up
    );
    for learnable in &catalog.level_up {
        output.push_str(&format!(
            "  Lv.{:<3} {}\n",
            learnable.level.unwrap_or(0),
            formatter.move_name_sync(&learnable.name, language)
        ));
    }
    output.push_str(&format!("{} ({})\n", t("tm_tr_moves", language), stats.machine));
    for learnable in &catalog.machine {
        output.push_str(&format!(
            "  {}\n",
            formatter.move_name_sync(&learnable.name, language)
        ));
    }
    output.push_str(&format!("{} ({})\n", t("special_moves", language), stats.other));
    for learnable in &catalog.other {
        output.push_str(&format!(
            "  {} [{}]\n",
            formatter.move_name_sync(&learnable.name, language),
            learnable.method.as_deref().unwrap_or_default()
        ));
    }
    output
}

pub async fn handle_moves_command<T: Transport>(
    formatter: &Formatter<T>,
    query: &str,
    language: Language,
) -> String {
    match formatter.client().get_pokemon(query.trim()).await {
        Ok(pokemon) => {
            formatter.preload_moves(language).await;
            display_move_catalog(formatter, &categorize(&pokemon.moves), language)
        }
        Err(_) => format!("{} '{}'.", t("no_pokemon_found", language), query.trim()),
    }
}

// --- Listing ---

/// One catalog page. Synthesized generation pages only carry ids, so their
/// names are fetched; a failed fetch keeps the placeholder names.
pub async fn handle_list_command<T: Transport>(
    formatter: &Formatter<T>,
    generation_id: u8,
    limit: u32,
    offset: u32,
    language: Language,
) -> String {
    let Some(era) = generation::by_id(generation_id) else {
        return format!("Unknown generation {}. Use 0-9.", generation_id);
    };
    let client = formatter.client();
    match client.list_by_generation(era, limit, offset).await {
        Ok(page) => {
            let names = if era.is_all() {
                None
            } else {
                let ids: Vec<u32> = page.results.iter().filter_map(|r| r.trailing_id()).collect();
                client
                    .get_pokemon_batch(&ids)
                    .await
                    .ok()
                    .map(|entities| entities.into_iter().map(|p| p.name).collect::<Vec<_>>())
            };
            display_list_page(era, &page, names.as_deref(), offset, language)
        }
        Err(e) => format!("{}: {}", t("error", language), e),
    }
}

pub fn display_list_page(
    era: &Generation,
    page: &ListResponse,
    names: Option<&[String]>,
    offset: u32,
    language: Language,
) -> String {
    let mut output = format!(
        "--- {} ({}) ---\n",
        generation::display_name(era, language),
        page.count
    );
    for (index, resource) in page.results.iter().enumerate() {
        let id = resource.trailing_id().unwrap_or(offset + index as u32 + 1);
        let name = names
            .and_then(|names| names.get(index))
            .unwrap_or(&resource.name);
        output.push_str(&format!("  #{} {}\n", format_pokemon_id(id), capitalize(name)));
    }
    if page.next.is_some() {
        output.push_str("  ...\n");
    }
    output
}

// --- Tournament ---

pub fn display_tournament_status(tournament: &Tournament<Pokemon>, language: Language) -> String {
    let Some(size) = tournament.size() else {
        return NO_TOURNAMENT.to_string();
    };

    if let Some(champion) = tournament.champion() {
        return format!(
            "🏆 {}: {} 🏆\n{} - {}: 100%\n",
            t("champion", language),
            entrant_label(champion),
            size.label(language),
            t("overall_progress", language)
        );
    }

    let mut output = format!("--- {} ---\n", tournament.round_name(language));
    output.push_str(&format!(
        "{}: {}\n",
        t("current_round", language),
        tournament.current_round()
    ));
    output.push_str(&format!(
        "{}: {} / {}\n",
        t("current_match", language),
        tournament.current_match_index() + 1,
        tournament.participants().len() / 2
    ));
    output.push_str(&format!(
        "{}: {}\n",
        t("remaining_participants", language),
        tournament.participants().len()
    ));
    output.push_str(&format!(
        "{}: {:.0}%\n",
        t("overall_progress", language),
        tournament.progress()
    ));
    if let Some((first, second)) = tournament.current_pair() {
        output.push_str(&format!(
            "\n  1. {}\n  {}\n  2. {}\n",
            entrant_label(first),
            t("vs", language),
            entrant_label(second)
        ));
    }
    output
}

pub async fn start_tournament<T: Transport>(
    tournament: &mut Tournament<Pokemon>,
    formatter: &Formatter<T>,
    size: u32,
    language: Language,
) -> Result<String, TournamentError> {
    let size = TournamentSize::try_from(size)?;
    tournament.initialize(size, formatter.client()).await?;
    Ok(display_tournament_status(tournament, language))
}

/// Picks the winner of the current match by entity id and reports what
/// happened next.
pub fn execute_pick(
    tournament: &mut Tournament<Pokemon>,
    choice_id: u32,
    language: Language,
) -> Result<String, TournamentError> {
    let outcome = tournament.select_winner_by_id(choice_id)?;
    let mut output = match outcome {
        MatchOutcome::NextMatch => String::new(),
        MatchOutcome::NextRound { round } => {
            format!(
                "➡️  {} {} ({})\n\n",
                t("current_round", language),
                round,
                tournament.round_name(language)
            )
        }
        MatchOutcome::Champion => String::new(),
    };
    output.push_str(&display_tournament_status(tournament, language));
    Ok(output)
}

/// Picks by position in the current pair (1 or 2).
pub fn execute_pick_side(
    tournament: &mut Tournament<Pokemon>,
    side: usize,
    language: Language,
) -> Result<String, TournamentError> {
    let choice_id = {
        let (first, second) = tournament
            .current_pair()
            .ok_or(TournamentError::NoActiveMatch)?;
        match side {
            1 => first.id,
            2 => second.id,
            other => return Err(TournamentError::InvalidSide(other)),
        }
    };
    execute_pick(tournament, choice_id, language)
}

// --- Favorites ---

pub fn display_favorites(entries: &[FavoriteEntry], language: Language) -> String {
    if entries.is_empty() {
        return format!("{}\n", t("no_favorites", language));
    }
    let mut output = format!("--- {} ({}) ---\n", t("favorites", language), entries.len());
    for entry in entries {
        let added = chrono::DateTime::from_timestamp_millis(entry.added_at)
            .map(|at| at.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_default();
        output.push_str(&format!(
            "  #{} {} [{}] {}\n",
            format_pokemon_id(entry.id),
            capitalize(&entry.name),
            entry.types.join(", "),
            added
        ));
    }
    output
}
