use std::{
    collections::HashSet,
    time::{
        Duration,
        Instant,
    },
};

use rand::seq::SliceRandom;
use uuid::Uuid;

use super::{
    projection::project,
    settings::{
        SortMode,
        ViewSettings,
    },
};
use crate::core::{
    CardSet,
    CardStore,
    MnemoError,
};

/// Delay between a navigation request and the index swap. The swap
/// lands while the outgoing card is still mid-exit, masking the
/// content change.
pub const EXIT_SWAP_DELAY: Duration = Duration::from_millis(200);

/// Time the incoming card spends animating in after the swap.
pub const ENTER_DURATION: Duration = Duration::from_millis(200);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionPhase {
    Idle,
    Exiting,
    Entering,
}

#[derive(Debug, Clone, Copy)]
enum NavDirection {
    Next,
    Prev,
}

#[derive(Debug, Clone, Copy)]
struct PendingSwap {
    fires_at: Instant,
    direction: NavDirection,
}

/// The deck controller: owns the store, the view settings, the current
/// projection, and the navigation/flip/reveal state. Rendering reads
/// from it; all mutation goes through its methods, and timing comes in
/// as `Instant` values so the transitions are deterministic under test.
pub struct DeckState {
    store: CardStore,
    settings: ViewSettings,
    visible_indices: Vec<usize>,
    dirty: bool,
    current_index: usize,
    is_flipped: bool,
    phase: TransitionPhase,
    pending_swap: Option<PendingSwap>,
    entering_until: Option<Instant>,
    revealed: HashSet<usize>,
    displayed_id: Option<Uuid>,
}

impl DeckState {
    pub fn new(store: CardStore) -> Self {
        let mut state = Self {
            store,
            settings: ViewSettings::default(),
            visible_indices: Vec::new(),
            dirty: true,
            current_index: 0,
            is_flipped: false,
            phase: TransitionPhase::Idle,
            pending_swap: None,
            entering_until: None,
            revealed: HashSet::new(),
            displayed_id: None,
        };
        state.ensure_projection();
        state
    }

    pub fn store(&self) -> &CardStore {
        &self.store
    }

    pub fn settings(&self) -> &ViewSettings {
        &self.settings
    }

    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    pub fn is_flipped(&self) -> bool {
        self.is_flipped
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn visible_len(&self) -> usize {
        self.visible_indices.len()
    }

    /// The card at the current position, or `None` when the projection
    /// is empty and there is no selection.
    pub fn current_card(&self) -> Option<&CardSet> {
        let store_index = self.visible_indices.get(self.current_index)?;
        self.store.get(*store_index)
    }

    pub fn is_revealed(&self, word_index: usize) -> bool {
        self.revealed.contains(&word_index)
    }

    pub fn in_transition(&self) -> bool {
        self.phase != TransitionPhase::Idle
    }

    /// Fraction of the current transition phase elapsed at `now`,
    /// clamped to 0.0..=1.0. Idle reports 0.0.
    pub fn phase_progress(&self, now: Instant) -> f32 {
        let fraction = |deadline: Instant, span: Duration| {
            let remaining = deadline.saturating_duration_since(now).as_secs_f32();
            (1.0 - remaining / span.as_secs_f32()).clamp(0.0, 1.0)
        };

        match self.phase {
            TransitionPhase::Idle => 0.0,
            TransitionPhase::Exiting => self
                .pending_swap
                .map(|pending| fraction(pending.fires_at, EXIT_SWAP_DELAY))
                .unwrap_or(0.0),
            TransitionPhase::Entering => self
                .entering_until
                .map(|until| fraction(until, ENTER_DURATION))
                .unwrap_or(0.0),
        }
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Recomputes the projection if anything changed, then reconciles
    /// the position: an out-of-range index on a non-empty projection
    /// resets to 0. Runs after every mutation, not only navigation.
    pub fn ensure_projection(&mut self) {
        if !self.dirty {
            return;
        }

        self.visible_indices = project(self.store.sets(), &self.settings);
        if self.current_index >= self.visible_indices.len() {
            self.current_index = 0;
        }
        self.dirty = false;
        self.refresh_identity();
    }

    pub fn next(&mut self, now: Instant) {
        self.navigate(NavDirection::Next, now);
    }

    pub fn prev(&mut self, now: Instant) {
        self.navigate(NavDirection::Prev, now);
    }

    /// Valid from Idle with more than one visible card; anything else
    /// is ignored, not queued. A single card does not cycle.
    fn navigate(&mut self, direction: NavDirection, now: Instant) {
        self.ensure_projection();

        if self.phase != TransitionPhase::Idle || self.visible_indices.len() <= 1 {
            return;
        }

        self.set_flipped(false);
        self.phase = TransitionPhase::Exiting;
        self.pending_swap = Some(PendingSwap { fires_at: now + EXIT_SWAP_DELAY, direction });
    }

    /// Advances the transition machine. Called once per frame; the swap
    /// fires exactly once because the pending deadline is taken when it
    /// triggers, no matter how often this runs afterwards.
    pub fn tick(&mut self, now: Instant) {
        self.ensure_projection();

        if let Some(pending) = self.pending_swap {
            if now >= pending.fires_at {
                self.pending_swap = None;

                // Modulo over the length at swap time, not at call
                // time: the collection may have changed during the
                // delay.
                let len = self.visible_indices.len();
                if len == 0 {
                    self.phase = TransitionPhase::Idle;
                } else {
                    self.current_index = match pending.direction {
                        NavDirection::Next => (self.current_index + 1) % len,
                        NavDirection::Prev => (self.current_index + len - 1) % len,
                    };
                    self.phase = TransitionPhase::Entering;
                    self.entering_until = Some(pending.fires_at + ENTER_DURATION);
                    self.refresh_identity();
                }
            }
        }

        if self.phase == TransitionPhase::Entering {
            if let Some(until) = self.entering_until {
                if now >= until {
                    self.entering_until = None;
                    self.phase = TransitionPhase::Idle;
                }
            }
        }
    }

    /// Toggles between prompt and detail side. Independent of the
    /// transition machine, but meaningless without a displayed card.
    pub fn flip(&mut self) {
        self.ensure_projection();

        if self.current_card().is_none() {
            return;
        }
        let flipped = !self.is_flipped;
        self.set_flipped(flipped);
    }

    pub fn toggle_reveal(&mut self, word_index: usize) {
        self.ensure_projection();

        let Some(word_count) = self.current_card().map(|card| card.words.len()) else {
            return;
        };
        if word_index >= word_count {
            return;
        }

        if !self.revealed.remove(&word_index) {
            self.revealed.insert(word_index);
        }
    }

    pub fn toggle_bookmark(&mut self, id: Uuid) -> Result<(), MnemoError> {
        self.store.toggle_bookmark(id)?;
        self.mark_dirty();
        self.ensure_projection();
        Ok(())
    }

    pub fn set_bookmarked_only(&mut self, bookmarked_only: bool) {
        if self.settings.bookmarked_only != bookmarked_only {
            self.settings.bookmarked_only = bookmarked_only;
            self.mark_dirty();
            self.ensure_projection();
        }
    }

    pub fn set_search(&mut self, search: String) {
        // Consumed by the overview only; the main projection ignores it.
        self.settings.search = search;
    }

    /// Latest -> Random materializes one shuffle of the store's order;
    /// Random -> Latest lets the recency sort take over again. Both
    /// edges land on the first card, face up.
    pub fn toggle_sort_mode(&mut self) {
        self.set_flipped(false);

        match self.settings.sort_mode {
            SortMode::Latest => {
                let mut order: Vec<usize> = (0..self.store.len()).collect();
                order.shuffle(&mut rand::rng());
                self.store.reorder(&order);
                self.settings.sort_mode = SortMode::Random;
            }
            SortMode::Random => {
                self.settings.sort_mode = SortMode::Latest;
            }
        }

        self.current_index = 0;
        self.mark_dirty();
        self.ensure_projection();
    }

    /// Selection from the unfiltered overview. If the id is hidden by
    /// the current filters, they are reset so the selection is always
    /// reachable; callers needing filter-preserving selection must
    /// pre-check membership.
    pub fn select_by_id(&mut self, id: Uuid) -> Result<(), MnemoError> {
        self.ensure_projection();

        if let Some(position) = self.visible_position_of(id) {
            self.current_index = position;
        } else {
            if self.store.position_of(id).is_none() {
                return Err(MnemoError::NotFound(id));
            }

            self.settings.bookmarked_only = false;
            self.settings.sort_mode = SortMode::Latest;
            self.mark_dirty();
            self.ensure_projection();

            if let Some(position) = self.visible_position_of(id) {
                self.current_index = position;
            }
        }

        self.set_flipped(false);
        self.refresh_identity();
        Ok(())
    }

    /// Appends a freshly generated set and brings it into view: recency
    /// order, no filter, first card, face up.
    pub fn add_set(&mut self, set: CardSet) {
        self.store.add(set);
        self.settings.sort_mode = SortMode::Latest;
        self.settings.bookmarked_only = false;
        self.current_index = 0;
        self.set_flipped(false);
        self.mark_dirty();
        self.ensure_projection();
    }

    fn visible_position_of(&self, id: Uuid) -> Option<usize> {
        self.visible_indices
            .iter()
            .position(|&index| self.store.get(index).is_some_and(|set| set.id == id))
    }

    /// Reveals are forgotten the moment the card lands face down.
    fn set_flipped(&mut self, flipped: bool) {
        if self.is_flipped && !flipped {
            self.revealed.clear();
        }
        self.is_flipped = flipped;
    }

    /// Clears the reveal set whenever the displayed card's identity
    /// changes, regardless of how the change happened.
    fn refresh_identity(&mut self) {
        let current_id = self.current_card().map(|card| card.id);
        if current_id != self.displayed_id {
            self.revealed.clear();
            self.displayed_id = current_id;
        }
    }
}
