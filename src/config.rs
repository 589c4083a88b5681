use std::fmt;
use std::path::PathBuf;

use crate::error::{ConsensusError, Result};
use crate::utils::consts::{DEFAULT_HEADER_MODE, DEFAULT_LDR, INPUT_BIT_WIDTH};

/// Spreading factor, i.e. the number of low-order bits voted on per symbol.
///
/// Always within `1..=INPUT_BIT_WIDTH`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ppm(u8);

impl Ppm {
    pub fn new(value: u32) -> Result<Self> {
        if value == 0 || value as usize > INPUT_BIT_WIDTH {
            return Err(ConsensusError::Parameter { ppm: value });
        }
        Ok(Self(value as u8))
    }

    pub fn bits(self) -> usize {
        self.0 as usize
    }

    /// Mask covering the significant bits
    pub fn mask(self) -> u16 {
        if self.bits() == INPUT_BIT_WIDTH {
            u16::MAX
        } else {
            (1u16 << self.0) - 1
        }
    }
}

impl fmt::Display for Ppm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Everything a single run needs, already validated.
#[derive(Clone, Debug)]
pub struct RunConfig {
    pub input: PathBuf,
    pub ppm: Ppm,
    pub header_mode: String,     // free-form, e.g. explicit / implicit
    pub ldr: String,             // free-form, declaration name only
    pub output_dir: PathBuf,
    pub report: Option<PathBuf>,
    pub show_progress: bool,
}

impl RunConfig {
    /// Builds a config with default labels. Fails on an out-of-range `ppm`
    /// before anything touches the filesystem.
    pub fn new(input: impl Into<PathBuf>, ppm: u32) -> Result<Self> {
        Ok(Self {
            input: input.into(),
            ppm: Ppm::new(ppm)?,
            header_mode: DEFAULT_HEADER_MODE.to_string(),
            ldr: DEFAULT_LDR.to_string(),
            output_dir: PathBuf::from("."),
            report: None,
            show_progress: false,
        })
    }

    pub fn with_header_mode(mut self, header_mode: impl Into<String>) -> Self {
        self.header_mode = header_mode.into();
        self
    }

    pub fn with_ldr(mut self, ldr: impl Into<String>) -> Self {
        self.ldr = ldr.into();
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_report(mut self, report: Option<PathBuf>) -> Self {
        self.report = report;
        self
    }

    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ppm_range() {
        assert!(matches!(
            Ppm::new(0),
            Err(ConsensusError::Parameter { ppm: 0 })
        ));
        assert!(matches!(
            Ppm::new(17),
            Err(ConsensusError::Parameter { ppm: 17 })
        ));
        assert_eq!(Ppm::new(1).unwrap().bits(), 1);
        assert_eq!(Ppm::new(16).unwrap().bits(), 16);
    }

    #[test]
    fn test_ppm_mask() {
        assert_eq!(Ppm::new(1).unwrap().mask(), 0x0001);
        assert_eq!(Ppm::new(7).unwrap().mask(), 0x007f);
        assert_eq!(Ppm::new(12).unwrap().mask(), 0x0fff);
        assert_eq!(Ppm::new(16).unwrap().mask(), 0xffff);
    }

    #[test]
    fn test_run_config_defaults() {
        let config = RunConfig::new("in.txt", 8).unwrap();
        assert_eq!(config.header_mode, "implicit");
        assert_eq!(config.ldr, "");
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert!(config.report.is_none());

        assert!(RunConfig::new("in.txt", 20).is_err());
    }
}
