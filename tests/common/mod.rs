#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    pub tmp: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            tmp: TempDir::new().expect("create temp dir"),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.tmp.path().join(name)
    }

    /// Write an input file and return its path
    pub fn input(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.path(name);
        fs::write(&path, contents).expect("write input");
        path
    }

    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.path(name)).expect("read output")
    }
}

/// `std::bitset<16>` text of `value`
pub fn bits(value: u16) -> String {
    format!("{:016b}", value)
}

/// One input line: label followed by the words
pub fn line(label: usize, words: &[u16]) -> String {
    let mut out = label.to_string();
    for &w in words {
        out.push(' ');
        out.push_str(&bits(w));
    }
    out.push('\n');
    out
}
