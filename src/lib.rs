//! LoRa whitening sequence consensus.
//!
//! Majority-votes noisy `std::bitset<16>` captures of a whitening sequence
//! into one canonical sequence and emits it as a C array declaration.

pub mod config;
pub mod consensus;
pub mod error;
pub mod pipeline;
pub mod ui;
pub mod utils;

pub use config::{Ppm, RunConfig};
pub use error::{ConsensusError, Result};
pub use pipeline::{RunSummary, run};
