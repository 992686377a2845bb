use serde::{Deserialize, Serialize};

/// A cell coordinate on the letter grid
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq)]
pub struct GridPosition {
    pub row: i32,
    pub col: i32,
}
