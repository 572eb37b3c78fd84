use crate::cigar_parser::is_full_match;
use crate::config::Config;
use crate::sam_parser::SamRecord;
use anyhow::{Context, Result};
use log::{debug, info, trace};
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

/// Outcome of one pass over a SAM file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchSummary {
    /// Alignment lines scanned after the header block.
    pub records: u64,
    /// Records whose CIGAR is a single `M` covering the whole read.
    pub full_matches: u64,
}

impl MatchSummary {
    fn add(&mut self, full_match: bool) {
        self.records += 1;
        if full_match {
            self.full_matches += 1;
        }
    }
}

/// Counts full-match records in `reader` after discarding `header_lines`
/// lines. A short input is not an error; it just yields no records.
/// The first malformed record aborts the scan.
pub fn count_full_matches<R: BufRead>(reader: R, header_lines: usize) -> Result<MatchSummary> {
    let mut summary = MatchSummary::default();

    for (idx, line) in reader.lines().enumerate() {
        let line_number = idx + 1;
        let line = line.context(format!("Failed to read SAM line {}", line_number))?;
        if idx < header_lines {
            continue;
        }

        let record = SamRecord::from_line(&line, line_number)?;
        let full_match = is_full_match(record.cigar, record.sequence);
        if full_match {
            trace!("Full match at line {}: {} {}", line_number, record.query_name, record.cigar);
        }
        summary.add(full_match);
    }

    Ok(summary)
}

/// Writes `count` as bare decimal digits, replacing any previous content.
pub fn write_count<P: AsRef<Path>>(path: P, count: u64) -> Result<()> {
    let path = path.as_ref();
    let mut file = File::create(path)
        .context(format!("Failed to create output file: {:?}", path))?;
    file.write_all(count.to_string().as_bytes())
        .context(format!("Failed to write count to {:?}", path))?;
    Ok(())
}

/// Scans `config.sam` and writes the full-match count to `config.output`.
/// Nothing is written if the scan fails.
pub fn run(config: &Config) -> Result<MatchSummary> {
    info!("Using SAM file: {:?}", config.sam);
    info!("Writing count to: {:?}", config.output);
    debug!("Skipping {} header lines", config.header_lines);

    let summary = {
        let sam_file = File::open(&config.sam)
            .context(format!("Failed to open SAM file: {:?}", config.sam))?;
        count_full_matches(BufReader::new(sam_file), config.header_lines)
            .context(format!("Failed to count full matches in {:?}", config.sam))?
    };

    write_count(&config.output, summary.full_matches)?;

    info!(
        "Scanned {} records, {} full matches",
        summary.records, summary.full_matches
    );
    Ok(summary)
}
