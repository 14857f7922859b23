//! Grouping of an entity's learnable moves by how they are learned.

use schema::{MoveLearnDetail, NamedResource, PokemonMoveEntry};
use serde::Serialize;

const LEVEL_UP: &str = "level-up";
const MACHINE: &str = "machine";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LearnableMove {
    pub name: String,
    /// Level for level-up moves.
    pub level: Option<u32>,
    /// Learn method for moves that are neither level-up nor machine.
    pub method: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct MoveCatalog {
    pub level_up: Vec<LearnableMove>,
    pub machine: Vec<LearnableMove>,
    pub other: Vec<LearnableMove>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct MoveStats {
    pub level_up: usize,
    pub machine: usize,
    pub other: usize,
    pub total: usize,
}

fn find_method<'a>(
    details: &'a [MoveLearnDetail],
    matches: impl Fn(&str) -> bool,
) -> Option<&'a MoveLearnDetail> {
    details
        .iter()
        .find(|detail| matches(detail.move_learn_method.name.as_str()))
}

fn learnable(resource: &NamedResource) -> LearnableMove {
    LearnableMove {
        name: resource.name.clone(),
        level: None,
        method: None,
    }
}

/// Sorts each move into exactly one bucket. Level-up wins over machine,
/// which wins over any other method; a move with no learn details at all is
/// left out. Level-up moves are ordered by level, ties keep source order.
pub fn categorize(moves: &[PokemonMoveEntry]) -> MoveCatalog {
    let mut catalog = MoveCatalog::default();

    for entry in moves {
        let details = &entry.version_group_details;

        if let Some(detail) = find_method(details, |method| method == LEVEL_UP) {
            catalog.level_up.push(LearnableMove {
                level: Some(detail.level_learned_at),
                ..learnable(&entry.move_)
            });
        } else if find_method(details, |method| method == MACHINE).is_some() {
            catalog.machine.push(learnable(&entry.move_));
        } else if let Some(detail) =
            find_method(details, |method| method != LEVEL_UP && method != MACHINE)
        {
            catalog.other.push(LearnableMove {
                method: Some(detail.move_learn_method.name.clone()),
                ..learnable(&entry.move_)
            });
        }
    }

    catalog
        .level_up
        .sort_by_key(|learnable| learnable.level.unwrap_or(0));
    catalog
}

impl MoveCatalog {
    pub fn stats(&self) -> MoveStats {
        MoveStats {
            level_up: self.level_up.len(),
            machine: self.machine.len(),
            other: self.other.len(),
            total: self.level_up.len() + self.machine.len() + self.other.len(),
        }
    }
}
