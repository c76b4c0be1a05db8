pub mod projection;
pub mod settings;
pub mod state;


pub use settings::{ SortMode, ViewSettings };
pub use state::{ DeckState, TransitionPhase };
