use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::info;

use super::emitter::hex_literal;
use super::engine::VoteStats;
use crate::error::{ConsensusError, Result};

/// JSON summary of one run, written with `--report`
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub input: String,
    pub ppm: usize,
    pub header_mode: String,
    pub ldr: String,
    pub observations: usize,
    pub effective_length: usize,
    pub truncated_observations: usize,
    pub declaration_name: String,
    pub output_file: String,
    pub values: Vec<String>,
    pub stats: VoteStats,
}

impl RunReport {
    pub fn hex_values(values: &[u16]) -> Vec<String> {
        values.iter().map(|&v| hex_literal(v)).collect()
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let to_report_err = |reason: String| ConsensusError::Report {
            path: path.to_path_buf(),
            reason,
        };

        let json = serde_json::to_string_pretty(self)
            .map_err(|e| to_report_err(e.to_string()))?;
        fs::write(path, json + "\n").map_err(|e| to_report_err(e.to_string()))?;

        info!("Report saved to: {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_fields() {
        let report = RunReport {
            input: "caps.txt".to_string(),
            ppm: 7,
            header_mode: "explicit".to_string(),
            ldr: String::new(),
            observations: 3,
            effective_length: 2,
            truncated_observations: 1,
            declaration_name: "whitening_sequence_sf7__explicit".to_string(),
            output_file: "sf7_whitening_declaration_explicit.txt".to_string(),
            values: RunReport::hex_values(&[0x12, 0x7f]),
            stats: VoteStats {
                unanimous: 10,
                majority: 3,
                tied: 1,
            },
        };

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["ppm"], 7);
        assert_eq!(value["values"][1], "0x007f");
        assert_eq!(value["stats"]["tied"], 1);
        assert_eq!(value["truncated_observations"], 1);
    }
}
