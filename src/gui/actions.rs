use uuid::Uuid;

// A simple ui action queue so draw code doesn't need mutable access to the deck
#[derive(Debug, Clone)]
pub enum UiAction {
    // Navigation
    Next,
    Prev,
    Flip,
    ToggleReveal(usize),

    // Collection
    ToggleBookmark(Uuid),
    ToggleBookmarkFilter,
    ToggleSortMode,

    // Overview
    Select(Uuid),
    SetSearch(String),
}

pub struct ActionQueue {
    actions: Vec<UiAction>,
}

impl ActionQueue {
    pub fn new() -> Self {
        Self { actions: Vec::new() }
    }

    pub fn push(&mut self, action: UiAction) {
        self.actions.push(action);
    }

    pub fn drain(&mut self) -> std::vec::Drain<'_, UiAction> {
        self.actions.drain(..)
    }
}

impl Default for ActionQueue {
    fn default() -> Self {
        Self::new()
    }
}
