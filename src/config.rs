use std::path::{Path, PathBuf};

/// Config
///
/// Configuration info for the program
/// This is generated from the command line arguments
/// Once set it is read only
///
/// input - path to input SAM/BAM/CRAM file
///
pub struct Config {
    input: PathBuf,
}

impl Config {
    pub fn new(input: PathBuf) -> Self {
        Self { input }
    }

    pub fn input(&self) -> &Path {
        &self.input
    }
}
