// Whitening sequence consensus
// Loader -> majority vote engine -> C declaration emitter

pub mod emitter;
pub mod engine;
pub mod loader;
pub mod report;

pub use emitter::ArtifactEmitter;
pub use engine::{ConsensusSequence, VoteStats, compute_consensus};
pub use loader::{Observation, ObservationSet};
pub use report::RunReport;
