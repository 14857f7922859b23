//! Side-by-side comparison of two entities.

use crate::formatter::stat_name;
use crate::translations::t;
use schema::{Language, Pokemon};
use serde::Serialize;
use std::cmp::Ordering;

pub const STAT_ORDER: [&str; 6] = [
    "hp",
    "attack",
    "defense",
    "special-attack",
    "special-defense",
    "speed",
];

/// Which side of the comparison is ahead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Leader {
    First,
    Second,
    Tie,
}

impl From<Ordering> for Leader {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Greater => Leader::First,
            Ordering::Less => Leader::Second,
            Ordering::Equal => Leader::Tie,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatRow {
    pub stat: String,
    pub first: u32,
    pub second: u32,
    pub leader: Leader,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub first_name: String,
    pub second_name: String,
    pub stats: Vec<StatRow>,
    pub first_total: u32,
    pub second_total: u32,
    /// Metres.
    pub first_height: f64,
    pub second_height: f64,
    /// Kilograms.
    pub first_weight: f64,
    pub second_weight: f64,
    pub height: Leader,
    pub weight: Leader,
}

/// Stat rows follow the canonical stat order; stats missing on one side
/// count as zero.
pub fn compare(first: &Pokemon, second: &Pokemon) -> Comparison {
    let stats = STAT_ORDER
        .iter()
        .map(|stat| {
            let a = first.base_stat(stat).unwrap_or(0);
            let b = second.base_stat(stat).unwrap_or(0);
            StatRow {
                stat: stat.to_string(),
                first: a,
                second: b,
                leader: a.cmp(&b).into(),
            }
        })
        .collect();

    Comparison {
        first_name: first.name.clone(),
        second_name: second.name.clone(),
        stats,
        first_total: first.base_stat_total(),
        second_total: second.base_stat_total(),
        first_height: first.height as f64 / 10.0,
        second_height: second.height as f64 / 10.0,
        first_weight: first.weight as f64 / 10.0,
        second_weight: second.weight as f64 / 10.0,
        height: first.height.cmp(&second.height).into(),
        weight: first.weight.cmp(&second.weight).into(),
    }
}

impl Comparison {
    pub fn total_leader(&self) -> Leader {
        self.first_total.cmp(&self.second_total).into()
    }

    /// "Taller" / "Shorter" / "Same" from the first entity's point of view.
    pub fn height_verdict(&self, language: Language) -> String {
        verdict(self.height, "taller", "shorter", language)
    }

    pub fn weight_verdict(&self, language: Language) -> String {
        verdict(self.weight, "heavier", "lighter", language)
    }

    pub fn stat_label(row: &StatRow, language: Language) -> String {
        stat_name(&row.stat, language)
    }
}

fn verdict(leader: Leader, ahead: &str, behind: &str, language: Language) -> String {
    match leader {
        Leader::First => t(ahead, language),
        Leader::Second => t(behind, language),
        Leader::Tie => t("same", language),
    }
}
