//! One full run: load, vote, emit, optionally report.

use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::config::RunConfig;
use crate::consensus::engine::compute_consensus_with_progress;
use crate::consensus::{ArtifactEmitter, ConsensusSequence, ObservationSet, RunReport};
use crate::error::Result;
use crate::ui::progress::{ProgressManager, templates};

const VOTING_BAR: &str = "voting";

/// What a successful run produced
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub observations: usize,
    pub truncated_observations: usize,
    pub consensus: ConsensusSequence,
    pub declaration_name: String,
    pub output_file: PathBuf,
    pub report_file: Option<PathBuf>,
}

pub fn run(config: &RunConfig) -> Result<RunSummary> {
    info!(
        "Input: {}, ppm: {}, header_mode: {}, ldr: {:?}",
        config.input.display(),
        config.ppm,
        config.header_mode,
        config.ldr
    );

    let set = ObservationSet::load(&config.input)?;
    let effective_length = set.effective_length();
    let truncated = set.truncated_count();
    info!("Effective length: {} positions", effective_length);
    if truncated > 0 {
        warn!(
            "{} observations are longer than {} positions, extra tokens ignored",
            truncated, effective_length
        );
    }

    let progress = if config.show_progress {
        ProgressManager::new()
    } else {
        ProgressManager::hidden()
    };
    let bar_ready = match progress.create_bar(
        VOTING_BAR,
        effective_length as u64,
        templates::VOTING,
        &format!("sf{}", config.ppm),
    ) {
        Ok(()) => true,
        Err(e) => {
            warn!("Progress bar unavailable: {}", e);
            false
        }
    };

    let consensus = compute_consensus_with_progress(&set, config.ppm, |_| {
        if bar_ready {
            if let Err(e) = progress.inc(VOTING_BAR, 1) {
                debug!("Progress update failed: {}", e);
            }
        }
    });
    if bar_ready {
        if let Err(e) = progress.finish(VOTING_BAR, "done") {
            debug!("Progress finish failed: {}", e);
        }
    }

    let emitter = ArtifactEmitter::new(&config.header_mode, &config.ldr);
    let declaration_name = emitter.declaration_name(config.ppm);
    let output_file = emitter.write(&config.output_dir, &consensus)?;

    let report_file = match &config.report {
        Some(path) => {
            let report = RunReport {
                input: config.input.display().to_string(),
                ppm: config.ppm.bits(),
                header_mode: config.header_mode.clone(),
                ldr: config.ldr.clone(),
                observations: set.len(),
                effective_length,
                truncated_observations: truncated,
                declaration_name: declaration_name.clone(),
                output_file: output_file.display().to_string(),
                values: RunReport::hex_values(&consensus.values),
                stats: consensus.stats,
            };
            report.save(path)?;
            Some(path.clone())
        }
        None => None,
    };

    Ok(RunSummary {
        observations: set.len(),
        truncated_observations: truncated,
        consensus,
        declaration_name,
        output_file,
        report_file,
    })
}
