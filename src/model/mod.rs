pub mod rubric;
pub mod score;
pub mod tier;

pub use rubric::Rubric;
pub use score::Score;
pub use tier::{Tier, TierProfile};
