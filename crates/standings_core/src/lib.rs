pub mod game;
pub mod ratio;
pub mod stat_line;
pub mod types;

// Re-export the value types shared by the ranking engine and its callers
pub use game::*;
pub use ratio::*;
pub use stat_line::*;
pub use types::*;
