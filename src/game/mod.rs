pub mod difficulty;
pub mod engine;
pub mod registry;

pub use difficulty::Difficulty;
pub use engine::{Engine, EngineConfig, EngineError, MoveOutcome, SearchStats};
pub use registry::{MatchHandle, MatchRegistry};
