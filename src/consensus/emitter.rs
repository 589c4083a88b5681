// Declaration format:
// const unsigned short whitening_sequence_sf<ppm>_<ldr>_<mode>[<len>] = {0x####, ...};

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use super::engine::ConsensusSequence;
use crate::config::Ppm;
use crate::error::{ConsensusError, Result};
use crate::utils::consts::{
    DECLARATION_PREFIX, DECLARATION_TYPE, HEX_DIGITS, OUTPUT_FILE_EXT,
    OUTPUT_FILE_STEM,
};

/// `sf<ppm>_whitening_declaration_<header_mode>.txt`
pub fn output_filename(ppm: Ppm, header_mode: &str) -> String {
    format!("sf{ppm}{OUTPUT_FILE_STEM}{header_mode}.{OUTPUT_FILE_EXT}")
}

/// `whitening_sequence_sf<ppm>_<ldr>_<header_mode>`
pub fn declaration_name(ppm: Ppm, ldr: &str, header_mode: &str) -> String {
    format!("{DECLARATION_PREFIX}{ppm}_{ldr}_{header_mode}")
}

/// Zero padded lowercase literal, e.g. `0x00af`
pub fn hex_literal(value: u16) -> String {
    format!("0x{:0width$x}", value, width = HEX_DIGITS)
}

/// Render the full declaration statement, newline included
pub fn render_declaration(name: &str, values: &[u16]) -> String {
    let literals = values
        .iter()
        .map(|&v| hex_literal(v))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "{} {}[{}] = {{{}}};\n",
        DECLARATION_TYPE,
        name,
        values.len(),
        literals
    )
}

/// Writes the declaration file for one consensus sequence
pub struct ArtifactEmitter<'a> {
    pub header_mode: &'a str,
    pub ldr: &'a str,
}

impl<'a> ArtifactEmitter<'a> {
    pub fn new(header_mode: &'a str, ldr: &'a str) -> Self {
        Self { header_mode, ldr }
    }

    pub fn declaration_name(&self, ppm: Ppm) -> String {
        declaration_name(ppm, self.ldr, self.header_mode)
    }

    pub fn output_path(&self, dir: &Path, ppm: Ppm) -> PathBuf {
        dir.join(output_filename(ppm, self.header_mode))
    }

    pub fn render(&self, sequence: &ConsensusSequence) -> String {
        render_declaration(&self.declaration_name(sequence.ppm), &sequence.values)
    }

    /// Render then write into `dir`; returns the written path
    pub fn write(&self, dir: &Path, sequence: &ConsensusSequence) -> Result<PathBuf> {
        let path = self.output_path(dir, sequence.ppm);
        let contents = self.render(sequence);

        fs::write(&path, contents).map_err(|source| {
            ConsensusError::OutputAccess {
                path: path.clone(),
                source,
            }
        })?;

        info!(
            "Wrote {} ({} values) to {}",
            self.declaration_name(sequence.ppm),
            sequence.len(),
            path.display()
        );
        Ok(path)
    }
}
