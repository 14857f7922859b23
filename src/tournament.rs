//! Single-elimination "world cup" bracket.
//!
//! A bracket is started with a power-of-two field of entrants drawn at random.
//! Matches are played in strict index order `(2k, 2k+1)`; winners of a round
//! form the field of the next one until a single champion remains.

use crate::api::{PokeApiClient, Transport};
use crate::errors::{TournamentError, TournamentResult};
use crate::translations::t;
use rand::Rng;
use schema::{Language, Pokemon, MAX_POKEMON_ID};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, info};

/// Anything that can take part in a bracket.
pub trait Entrant {
    fn entrant_id(&self) -> u32;
}

impl Entrant for Pokemon {
    fn entrant_id(&self) -> u32 {
        self.id
    }
}

/// The fixed set of bracket sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TournamentSize {
    RoundOf16,
    RoundOf32,
    RoundOf64,
    RoundOf128,
    RoundOf256,
}

impl TournamentSize {
    pub const ALL: [TournamentSize; 5] = [
        TournamentSize::RoundOf16,
        TournamentSize::RoundOf32,
        TournamentSize::RoundOf64,
        TournamentSize::RoundOf128,
        TournamentSize::RoundOf256,
    ];

    pub fn participants(self) -> usize {
        match self {
            TournamentSize::RoundOf16 => 16,
            TournamentSize::RoundOf32 => 32,
            TournamentSize::RoundOf64 => 64,
            TournamentSize::RoundOf128 => 128,
            TournamentSize::RoundOf256 => 256,
        }
    }

    pub fn label(self, language: Language) -> String {
        t(&format!("round_of_{}", self.participants()), language)
    }
}

impl TryFrom<u32> for TournamentSize {
    type Error = TournamentError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            16 => Ok(TournamentSize::RoundOf16),
            32 => Ok(TournamentSize::RoundOf32),
            64 => Ok(TournamentSize::RoundOf64),
            128 => Ok(TournamentSize::RoundOf128),
            256 => Ok(TournamentSize::RoundOf256),
            other => Err(TournamentError::InvalidSize(other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BracketState {
    Idle,
    RoundInProgress,
    Champion,
}

/// What a single pick led to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    /// Another match remains in this round.
    NextMatch,
    /// The round finished and round `round` began.
    NextRound { round: u32 },
    /// The bracket is decided.
    Champion,
}

/// Draws `size` distinct entity ids from `1..=MAX_POKEMON_ID` by rejection
/// sampling.
pub fn draw_participant_ids<R: Rng + ?Sized>(size: TournamentSize, rng: &mut R) -> Vec<u32> {
    let wanted = size.participants();
    let mut ids = Vec::with_capacity(wanted);
    let mut used = HashSet::with_capacity(wanted);

    while ids.len() < wanted {
        let id = rng.random_range(1..=MAX_POKEMON_ID);
        if used.insert(id) {
            ids.push(id);
        }
    }
    ids
}

/// Display name of a round by the number of entrants still in it. Counts
/// outside the power-of-two progression have no name.
pub fn round_name(remaining_participants: usize, language: Language) -> String {
    match remaining_participants {
        256 | 128 | 64 | 32 | 16 => t(&format!("round_of_{}", remaining_participants), language),
        8 => t("quarterfinals", language),
        4 => t("semifinals", language),
        2 => t("finals", language),
        _ => String::new(),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tournament<E> {
    size: Option<TournamentSize>,
    participants: Vec<E>,
    winners: Vec<E>,
    current_match_index: usize,
    current_round: u32,
    champion: Option<E>,
}

impl<E> Default for Tournament<E> {
    fn default() -> Self {
        Self {
            size: None,
            participants: Vec::new(),
            winners: Vec::new(),
            current_match_index: 0,
            current_round: 1,
            champion: None,
        }
    }
}

impl<E: Entrant + Clone> Tournament<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> BracketState {
        if self.champion.is_some() {
            BracketState::Champion
        } else if self.size.is_some() {
            BracketState::RoundInProgress
        } else {
            BracketState::Idle
        }
    }

    pub fn size(&self) -> Option<TournamentSize> {
        self.size
    }

    pub fn participants(&self) -> &[E] {
        &self.participants
    }

    pub fn winners(&self) -> &[E] {
        &self.winners
    }

    pub fn current_match_index(&self) -> usize {
        self.current_match_index
    }

    pub fn current_round(&self) -> u32 {
        self.current_round
    }

    pub fn champion(&self) -> Option<&E> {
        self.champion.as_ref()
    }

    /// Starts a bracket over an already-loaded field.
    pub fn start(&mut self, size: TournamentSize, participants: Vec<E>) -> TournamentResult<()> {
        if participants.len() != size.participants() {
            return Err(TournamentError::ParticipantCount {
                expected: size.participants(),
                actual: participants.len(),
            });
        }

        self.size = Some(size);
        self.participants = participants;
        self.winners = Vec::new();
        self.current_match_index = 0;
        self.current_round = 1;
        self.champion = None;
        info!(size = size.participants(), "tournament started");
        Ok(())
    }

    /// The pair waiting for a decision, or `None` when idle or decided.
    pub fn current_pair(&self) -> Option<(&E, &E)> {
        if self.state() != BracketState::RoundInProgress {
            return None;
        }
        let first = self.participants.get(2 * self.current_match_index)?;
        let second = self.participants.get(2 * self.current_match_index + 1)?;
        Some((first, second))
    }

    pub fn select_winner(&mut self, choice: &E) -> TournamentResult<MatchOutcome> {
        self.select_winner_by_id(choice.entrant_id())
    }

    /// Records the winner of the current match and advances the bracket.
    pub fn select_winner_by_id(&mut self, choice_id: u32) -> TournamentResult<MatchOutcome> {
        let winner = {
            let (first, second) = self.current_pair().ok_or(TournamentError::NoActiveMatch)?;
            if first.entrant_id() == choice_id {
                first.clone()
            } else if second.entrant_id() == choice_id {
                second.clone()
            } else {
                return Err(TournamentError::NotInCurrentPair(choice_id));
            }
        };

        self.winners.push(winner);
        let next_pair_start = 2 * (self.current_match_index + 1);

        if next_pair_start + 1 < self.participants.len() {
            self.current_match_index += 1;
            return Ok(MatchOutcome::NextMatch);
        }

        if self.winners.len() == 1 {
            self.champion = self.winners.first().cloned();
            info!(champion = choice_id, "tournament decided");
            return Ok(MatchOutcome::Champion);
        }

        self.participants = std::mem::take(&mut self.winners);
        self.current_match_index = 0;
        self.current_round += 1;
        debug!(
            round = self.current_round,
            remaining = self.participants.len(),
            "next round"
        );
        Ok(MatchOutcome::NextRound {
            round: self.current_round,
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Name of the round in progress, empty when idle.
    pub fn round_name(&self, language: Language) -> String {
        match self.state() {
            BracketState::Idle => String::new(),
            _ => round_name(self.participants.len(), language),
        }
    }

    /// Matches decided so far across all rounds.
    pub fn matches_played(&self) -> usize {
        match (self.size, self.state()) {
            (Some(size), BracketState::Champion) => size.participants() - 1,
            (Some(size), _) => {
                size.participants() - self.participants.len() + self.current_match_index
            }
            (None, _) => 0,
        }
    }

    /// Overall completion in percent.
    pub fn progress(&self) -> f64 {
        match self.size {
            Some(size) => {
                self.matches_played() as f64 / (size.participants() - 1) as f64 * 100.0
            }
            None => 0.0,
        }
    }

    /// Position within the current round in percent, counting the match in
    /// progress.
    pub fn round_progress(&self) -> u32 {
        let matches_in_round = self.participants.len().div_ceil(2);
        if matches_in_round == 0 {
            return 0;
        }
        (((self.current_match_index + 1) as f64 / matches_in_round as f64) * 100.0).round() as u32
    }
}

impl Tournament<Pokemon> {
    /// Draws a fresh field, fetches every entrant concurrently and starts the
    /// bracket. If any fetch fails nothing is applied and the bracket is left
    /// idle.
    pub async fn initialize<T: Transport>(
        &mut self,
        size: TournamentSize,
        client: &PokeApiClient<T>,
    ) -> TournamentResult<()> {
        let ids = {
            let mut rng = rand::rng();
            draw_participant_ids(size, &mut rng)
        };
        self.initialize_with_ids(size, &ids, client).await
    }

    /// Same as [`Tournament::initialize`] with a caller-supplied generator,
    /// so draws can be seeded.
    pub async fn initialize_with_rng<T: Transport, R: Rng + Send>(
        &mut self,
        size: TournamentSize,
        client: &PokeApiClient<T>,
        rng: &mut R,
    ) -> TournamentResult<()> {
        let ids = draw_participant_ids(size, rng);
        self.initialize_with_ids(size, &ids, client).await
    }

    pub async fn initialize_with_ids<T: Transport>(
        &mut self,
        size: TournamentSize,
        ids: &[u32],
        client: &PokeApiClient<T>,
    ) -> TournamentResult<()> {
        self.reset();
        debug!(count = ids.len(), "loading tournament entrants");
        let participants = client.get_pokemon_batch(ids).await?;
        self.start(size, participants)
    }
}
