use std::path::PathBuf;

/// Alignment files from the upstream aligner carry this many header lines.
pub const DEFAULT_HEADER_LINES: usize = 4;

/// Everything a counting run needs, supplied by the caller rather than read
/// from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub sam: PathBuf,
    pub output: PathBuf,
    pub log: Option<PathBuf>,
    /// Lines skipped before the first record. Their content is not checked.
    pub header_lines: usize,
    pub verbose: bool,
}

impl Config {
    pub fn new<P: Into<PathBuf>, Q: Into<PathBuf>>(sam: P, output: Q) -> Self {
        Config {
            sam: sam.into(),
            output: output.into(),
            log: None,
            header_lines: DEFAULT_HEADER_LINES,
            verbose: false,
        }
    }

    pub fn with_log<P: Into<PathBuf>>(mut self, log: P) -> Self {
        self.log = Some(log.into());
        self
    }

    pub fn with_header_lines(mut self, header_lines: usize) -> Self {
        self.header_lines = header_lines;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}
