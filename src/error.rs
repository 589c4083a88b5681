//! Error type shared by the loader, engine, emitter and report writer.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::utils::consts::INPUT_BIT_WIDTH;

/// Result type for consensus operations.
pub type Result<T> = std::result::Result<T, ConsensusError>;

/// Why a single bit-string token was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenFault {
    /// Token is not exactly [`INPUT_BIT_WIDTH`] bytes long.
    Width(usize),
    /// Token contains a byte other than '0' or '1'.
    Digit { position: usize, found: u8 },
}

impl std::fmt::Display for TokenFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenFault::Width(len) => write!(
                f,
                "expected {} characters, found {}",
                INPUT_BIT_WIDTH, len
            ),
            TokenFault::Digit { position, found } if found.is_ascii_graphic() => write!(
                f,
                "invalid character {:?} at offset {}, expected '0' or '1'",
                char::from(*found),
                position
            ),
            TokenFault::Digit { position, found } => write!(
                f,
                "invalid byte 0x{:02x} at offset {}, expected '0' or '1'",
                found, position
            ),
        }
    }
}

/// Errors that can occur during a consensus run.
#[derive(Debug, Error)]
pub enum ConsensusError {
    /// Input file missing or unreadable.
    #[error("cannot read input file {}: {source}", path.display())]
    InputAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A bit-string token failed validation.
    #[error("malformed record on line {line}: token {index} {token:?}: {fault}")]
    MalformedRecord {
        line: usize,
        index: usize,
        token: String,
        fault: TokenFault,
    },

    /// No observations were loaded.
    #[error("input contains no observations")]
    EmptyInput,

    /// `ppm` outside `1..=INPUT_BIT_WIDTH`.
    #[error("ppm {ppm} out of range, expected 1..={}", INPUT_BIT_WIDTH)]
    Parameter { ppm: u32 },

    /// Declaration file could not be created or written.
    #[error("cannot write output file {}: {source}", path.display())]
    OutputAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// JSON report could not be encoded or written.
    #[error("cannot write report {}: {reason}", path.display())]
    Report { path: PathBuf, reason: String },
}
