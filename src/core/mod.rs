pub mod errors;
pub mod markup;
pub mod models;
pub mod seed;
pub mod store;

pub use errors::MnemoError;
pub use models::{ CardSet, ExamplePair, WordEntry };
pub use store::CardStore;
