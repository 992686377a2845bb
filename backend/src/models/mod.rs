pub mod game;
pub mod validation;
pub mod wordlist;

pub use game::GridPosition;
pub use validation::{ValidationOptions, ValidationResult};
pub use wordlist::{CompressedNode, WordLengthLimits, WordlistPayload};
