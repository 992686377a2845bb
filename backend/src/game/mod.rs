pub mod grid;
pub mod scorer;
pub mod validator;

pub use grid::is_valid_path;
pub use scorer::Scorer;
pub use validator::WordValidator;
