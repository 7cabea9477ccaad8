pub mod duplication;
pub mod estimate;

pub use duplication::{detect_duplication, MIN_BLOCK_LINES};
pub use estimate::technical_debt_hours;
