// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Event catalog snapshots.
//!
//! The surrounding app owns the schedule and refreshes the catalog on its
//! own timer; the catalog here is just the current snapshot. It retains no
//! derived availability between enrichment passes, so it can be replaced at
//! any time.

use crate::error::CoreError;
use cine_book_domain::{EnrichedEvent, Event, enrich_events};
use rand::Rng;
use time::OffsetDateTime;

/// An immutable snapshot of the current event list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EventCatalog {
    events: Vec<Event>,
}

impl EventCatalog {
    /// Creates a catalog from a snapshot of events.
    #[must_use]
    pub const fn new(events: Vec<Event>) -> Self {
        Self { events }
    }

    /// Swaps in a fresh snapshot, discarding the previous one.
    pub fn replace(&mut self, events: Vec<Event>) {
        self.events = events;
    }

    /// Returns the events in this snapshot.
    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Resolves an event by its catalog identifier.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::EventNotFound` if the identifier is not in the
    /// current snapshot.
    pub fn event_by_id(&self, id: u64) -> Result<&Event, CoreError> {
        self.events
            .iter()
            .find(|event| event.id() == id)
            .ok_or(CoreError::EventNotFound(id))
    }

    /// Enriches the whole snapshot for display.
    ///
    /// Each call draws fresh availability; listing views cache the result
    /// for the current rendering pass.
    pub fn enrich<R: Rng>(&self, now: OffsetDateTime, rng: &mut R) -> Vec<EnrichedEvent> {
        enrich_events(&self.events, now, rng)
    }
}
