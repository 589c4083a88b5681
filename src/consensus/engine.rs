// Per-bit majority voting across observations

use serde::Serialize;
use tracing::{debug, info, warn};

use super::loader::ObservationSet;
use crate::config::Ppm;

/// How the votes for the voted bits were split
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct VoteStats {
    pub unanimous: usize,
    pub majority: usize,
    pub tied: usize, // resolved to 0
}

/// Consensus word per position, only the low `ppm` bits can be set
#[derive(Debug, Clone)]
pub struct ConsensusSequence {
    pub ppm: Ppm,
    pub values: Vec<u16>,
    pub stats: VoteStats,
}

impl ConsensusSequence {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Vote outcome of one bit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vote {
    Unanimous(bool),
    Majority(bool),
    Tie,
}

impl Vote {
    /// Ones strictly above zeros sets the bit; a tie stays 0.
    pub fn tally(ones: usize, zeros: usize) -> Self {
        if ones == 0 || zeros == 0 {
            Vote::Unanimous(ones > zeros)
        } else if ones == zeros {
            Vote::Tie
        } else {
            Vote::Majority(ones > zeros)
        }
    }

    pub fn bit(self) -> bool {
        match self {
            Vote::Unanimous(bit) | Vote::Majority(bit) => bit,
            Vote::Tie => false,
        }
    }
}

/// Majority vote for every position and every bit below `ppm`
pub fn compute_consensus(set: &ObservationSet, ppm: Ppm) -> ConsensusSequence {
    compute_consensus_with_progress(set, ppm, |_| {})
}

/// Same as [`compute_consensus`], calling `on_position` after each position
pub fn compute_consensus_with_progress<F>(
    set: &ObservationSet,
    ppm: Ppm,
    mut on_position: F,
) -> ConsensusSequence
where
    F: FnMut(usize),
{
    let effective_length = set.effective_length();
    let mut values = Vec::with_capacity(effective_length);
    let mut stats = VoteStats::default();

    for position in 0..effective_length {
        let mut value = 0u16;

        for bit in 0..ppm.bits() {
            let (mut ones, mut zeros) = (0usize, 0usize);
            for observation in set.iter() {
                if observation.bit(position, bit) {
                    ones += 1;
                } else {
                    zeros += 1;
                }
            }

            let vote = Vote::tally(ones, zeros);
            match vote {
                Vote::Unanimous(_) => stats.unanimous += 1,
                Vote::Majority(_) => stats.majority += 1,
                Vote::Tie => {
                    stats.tied += 1;
                    debug!("Tie at position {} bit {}, using 0", position, bit);
                }
            }
            if vote.bit() {
                value |= 1u16 << bit;
            }
        }

        debug_assert_eq!(value & !ppm.mask(), 0);
        debug!("Position {}: 0x{:04x}", position, value);
        values.push(value);
        on_position(position);
    }

    info!(
        "Consensus over {} positions x {} bits: {} unanimous, {} majority, {} tied",
        effective_length,
        ppm,
        stats.unanimous,
        stats.majority,
        stats.tied
    );
    if stats.tied > 0 {
        warn!("{} tied bits were resolved to 0", stats.tied);
    }

    ConsensusSequence { ppm, values, stats }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consensus::loader::Observation;

    fn set_of(rows: &[&[u16]]) -> ObservationSet {
        let observations = rows
            .iter()
            .enumerate()
            .map(|(i, words)| Observation {
                line: i + 1,
                label: i.to_string(),
                words: words.to_vec(),
            })
            .collect();
        ObservationSet::new(observations).unwrap()
    }

    fn ppm(bits: u32) -> Ppm {
        Ppm::new(bits).unwrap()
    }

    #[test]
    fn test_identical_observations() {
        let row: &[u16] = &[0xabcd, 0x1234, 0xffff];
        let set = set_of(&[row, row, row]);

        let out = compute_consensus(&set, ppm(8));
        assert_eq!(out.values, vec![0x00cd, 0x0034, 0x00ff]);
        assert_eq!(out.stats.unanimous, 3 * 8);

        let out = compute_consensus(&set, ppm(16));
        assert_eq!(out.values, row.to_vec());
    }

    #[test]
    fn test_two_of_three_majority() {
        // bit 0 at position 0: 1,1,0 -> 1; at position 1: 1,0,0 -> 0
        let set = set_of(&[&[0b0001, 0b0001], &[0b0001, 0b0000], &[0b0000, 0b0000]]);
        let out = compute_consensus(&set, ppm(4));
        assert_eq!(out.values, vec![0b0001, 0b0000]);
        assert_eq!(out.stats.majority, 2);
        assert_eq!(out.stats.tied, 0);
    }

    #[test]
    fn test_tie_resolves_to_zero() {
        let set = set_of(&[&[0x000f], &[0x0000]]);
        let out = compute_consensus(&set, ppm(4));
        assert_eq!(out.values, vec![0x0000]);
        assert_eq!(out.stats.tied, 4);

        let set = set_of(&[&[0x0003], &[0x0003], &[0x0000], &[0x0001]]);
        let out = compute_consensus(&set, ppm(2));
        // bit 0: 3 vs 1, bit 1: 2 vs 2
        assert_eq!(out.values, vec![0x0001]);
    }

    #[test]
    fn test_bits_above_ppm_ignored() {
        let set = set_of(&[&[0xfff0], &[0xfff0], &[0xfff0]]);
        let out = compute_consensus(&set, ppm(4));
        assert_eq!(out.values, vec![0x0000]);
        assert_eq!(out.stats.unanimous, 4);
        assert_eq!(out.stats.majority + out.stats.tied, 0);
    }

    #[test]
    fn test_flipping_minority_keeps_result() {
        let before = set_of(&[&[0x0005], &[0x0005], &[0x0002]]);
        let after = set_of(&[&[0x0005], &[0x0005], &[0x0005]]);
        assert_eq!(
            compute_consensus(&before, ppm(3)).values,
            compute_consensus(&after, ppm(3)).values
        );
    }

    #[test]
    fn test_short_observation_limits_length() {
        let set = set_of(&[&[1, 1, 1, 1], &[1, 1], &[1, 1, 1]]);
        let out = compute_consensus(&set, ppm(1));
        assert_eq!(out.len(), 2);
        assert_eq!(out.values, vec![1, 1]);
    }

    #[test]
    fn test_zero_length_observation() {
        let set = set_of(&[&[1, 2], &[]]);
        let out = compute_consensus(&set, ppm(5));
        assert!(out.is_empty());
        assert_eq!(out.stats, VoteStats::default());
    }

    #[test]
    fn test_progress_called_per_position() {
        let set = set_of(&[&[1, 2, 3], &[1, 2, 3]]);
        let mut seen = Vec::new();
        compute_consensus_with_progress(&set, ppm(2), |p| seen.push(p));
        assert_eq!(seen, vec![0, 1, 2]);
    }

    #[test]
    fn test_vote_tally() {
        assert_eq!(Vote::tally(3, 0), Vote::Unanimous(true));
        assert_eq!(Vote::tally(0, 3), Vote::Unanimous(false));
        assert_eq!(Vote::tally(2, 1), Vote::Majority(true));
        assert_eq!(Vote::tally(1, 2), Vote::Majority(false));
        assert_eq!(Vote::tally(2, 2), Vote::Tie);
        assert!(!Vote::Tie.bit());
    }
}
