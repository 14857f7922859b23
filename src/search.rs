//! Debounced entity search.
//!
//! Every input takes a ticket from a shared counter. A ticket only fetches if
//! it is still the newest one after the quiescence delay, and its result is
//! only reported if no newer ticket was issued while the fetch was in flight.

use crate::api::{PokeApiClient, Transport};
use schema::Pokemon;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Found(Box<Pokemon>),
    NotFound,
    /// A newer input arrived; this one was dropped.
    Superseded,
}

#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    latest: AtomicU64,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            latest: AtomicU64::new(0),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Issues a new ticket, superseding all earlier ones.
    pub fn ticket(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket
    }

    /// Waits out the delay, then looks the query up unless superseded.
    pub async fn search<T: Transport>(
        &self,
        client: &PokeApiClient<T>,
        query: &str,
    ) -> SearchOutcome {
        let ticket = self.ticket();
        tokio::time::sleep(self.delay).await;

        if !self.is_current(ticket) {
            debug!(ticket, "search dropped before fetch");
            return SearchOutcome::Superseded;
        }

        let result = client.search(query).await;

        if !self.is_current(ticket) {
            debug!(ticket, "search result discarded");
            return SearchOutcome::Superseded;
        }

        match result {
            Some(pokemon) => SearchOutcome::Found(Box::new(pokemon)),
            None => SearchOutcome::NotFound,
        }
    }
}
