//! Constraint-based Wordle solving
//!
//! Knowledge from feedback accumulates in a `ConstraintSet`, `filter` narrows
//! the word list to consistent candidates, and `rank` orders them by letter
//! frequency. `SolverSession` ties the three together for one hidden word.

mod constraints;
mod filter;
mod ranker;
mod session;

pub use constraints::ConstraintSet;
pub use filter::filter;
pub use ranker::{LetterWeights, WeightSource, Weighting, rank, top};
pub use session::{DEFAULT_MAX_ROUNDS, Observation, SessionConfig, SessionState, SolverSession};
