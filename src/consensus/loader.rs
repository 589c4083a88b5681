// Input format: one observation per line
// [label] [bits:16] [bits:16] ... (optionally wrapped in commas)

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{info, warn};

use crate::error::{ConsensusError, Result, TokenFault};
use crate::utils::consts::INPUT_BIT_WIDTH;

const TOKEN_SEPARATOR: u8 = b' ';

/// Source name used in errors when reading from an anonymous reader
const READER_SOURCE: &str = "<reader>";

/// One captured trial: the label of its line plus one word per bit-string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observation {
    pub line: usize, // 1-based line in the source file
    pub label: String,
    pub words: Vec<u16>,
}

impl Observation {
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Bit `bit` of the word at `position`, bit 0 being the rightmost character
    pub fn bit(&self, position: usize, bit: usize) -> bool {
        (self.words[position] >> bit) & 1 == 1
    }
}

/// All observations of a run. Never empty.
#[derive(Debug, Clone)]
pub struct ObservationSet {
    observations: Vec<Observation>,
}

#[allow(clippy::len_without_is_empty)]
impl ObservationSet {
    pub fn new(observations: Vec<Observation>) -> Result<Self> {
        if observations.is_empty() {
            return Err(ConsensusError::EmptyInput);
        }
        Ok(Self { observations })
    }

    /// Read and parse an observation file
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| {
            ConsensusError::InputAccess {
                path: path.to_path_buf(),
                source,
            }
        })?;
        let set = Self::read(BufReader::new(file), path)?;
        info!(
            "Loaded {} observations from {}",
            set.len(),
            path.display()
        );
        Ok(set)
    }

    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        Self::read(reader, Path::new(READER_SOURCE))
    }

    fn read<R: BufRead>(mut reader: R, source_path: &Path) -> Result<Self> {
        let mut observations = Vec::new();
        let mut buf = Vec::new();
        let mut line_no = 0;

        loop {
            buf.clear();
            let read = reader.read_until(b'\n', &mut buf).map_err(|source| {
                ConsensusError::InputAccess {
                    path: source_path.to_path_buf(),
                    source,
                }
            })?;
            if read == 0 {
                break;
            }
            line_no += 1;

            let observation = parse_line(&buf, line_no)?;
            if observation.is_empty() {
                warn!(
                    "Line {} ({:?}) has no bit-strings, consensus will be empty",
                    line_no, observation.label
                );
            }
            observations.push(observation);
        }

        Self::new(observations)
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Observation> {
        self.observations.iter()
    }

    /// Number of positions compared: the shortest observation's length
    pub fn effective_length(&self) -> usize {
        self.observations
            .iter()
            .map(Observation::len)
            .min()
            .unwrap_or(0)
    }

    /// Observations whose trailing tokens get ignored
    pub fn truncated_count(&self) -> usize {
        let effective = self.effective_length();
        self.observations
            .iter()
            .filter(|o| o.len() > effective)
            .count()
    }
}

/// Parse one raw line. A blank line is an observation with no label and no words.
pub fn parse_line(line: &[u8], line_no: usize) -> Result<Observation> {
    let trimmed = trim_separators(line);

    let mut tokens = trimmed.split(|&b| b == TOKEN_SEPARATOR);
    // First token is the record label, never data
    let label = tokens
        .next()
        .map(|t| String::from_utf8_lossy(t).into_owned())
        .unwrap_or_default();

    let words = tokens
        .enumerate()
        .map(|(i, token)| {
            parse_word(token).map_err(|fault| ConsensusError::MalformedRecord {
                line: line_no,
                index: i + 1,
                token: String::from_utf8_lossy(token).into_owned(),
                fault,
            })
        })
        .collect::<Result<Vec<u16>>>()?;

    Ok(Observation {
        line: line_no,
        label,
        words,
    })
}

fn trim_separators(line: &[u8]) -> &[u8] {
    let is_sep = |b: &u8| matches!(b, b',' | b' ' | b'\r' | b'\n');
    let start = line.iter().position(|b| !is_sep(b)).unwrap_or(line.len());
    let end = line.iter().rposition(|b| !is_sep(b)).map_or(start, |i| i + 1);
    &line[start..end]
}

/// Parse a `std::bitset`-style token (MSB first) into a word
pub fn parse_word(token: &[u8]) -> std::result::Result<u16, TokenFault> {
    if token.len() != INPUT_BIT_WIDTH {
        return Err(TokenFault::Width(token.len()));
    }

    let mut word = 0u16;
    for (position, &b) in token.iter().enumerate() {
        let bit = match b {
            b'0' => 0,
            b'1' => 1,
            found => return Err(TokenFault::Digit { position, found }),
        };
        word = (word << 1) | bit;
    }
    Ok(word)
}
