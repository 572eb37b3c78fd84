use anyhow::Result;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::tempdir;

const HEADER: &str = "@HD\tVN:1.6\n@SQ\tSN:chr1\tLN:1000\n@RG\tID:rg1\n@PG\tID:bowtie2\n";

fn alignment(name: &str, cigar: &str, seq: &str) -> String {
    format!(
        "{}\t0\tchr1\t1\t42\t{}\t*\t0\t0\t{}\t{}\n",
        name,
        cigar,
        seq,
        "F".repeat(seq.len())
    )
}

fn run_binary(sam: &Path, output: &Path, log: &Path) -> Result<Output> {
    let out = Command::new(env!("CARGO_BIN_EXE_samfullmatch"))
        .args(["-s", sam.to_str().unwrap()])
        .args(["-o", output.to_str().unwrap()])
        .args(["-l", log.to_str().unwrap()])
        .env_remove("RUST_LOG")
        .output()?;
    Ok(out)
}

#[test]
fn test_counts_with_default_header_lines() -> Result<()> {
    let dir = tempdir()?;
    let sam = dir.path().join("aligned.sam");
    let output = dir.path().join("cigar_counts.txt");
    let log = dir.path().join("full_match_cigar.log");

    let mut content = HEADER.to_string();
    content.push_str(&alignment("read1", "8M", "ACGTACGT"));
    content.push_str(&alignment("read2", "3M1I4M", "ACGTACGT"));
    content.push_str(&alignment("read3", "8M", "TTGCATGC"));
    fs::write(&sam, content)?;

    let out = run_binary(&sam, &output, &log)?;

    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    // Three records scanned means exactly the 4 header lines were skipped.
    assert_eq!(fs::read_to_string(&output)?, "2");
    let log_text = fs::read_to_string(&log)?;
    assert!(
        log_text.contains("Scanned 3 records, 2 full matches"),
        "log was: {}",
        log_text
    );
    Ok(())
}

#[test]
fn test_malformed_record_exits_with_failure() -> Result<()> {
    let dir = tempdir()?;
    let sam = dir.path().join("aligned.sam");
    let output = dir.path().join("cigar_counts.txt");
    let log = dir.path().join("full_match_cigar.log");

    let mut content = HEADER.to_string();
    content.push_str("read1\t0\tchr1\n");
    content.push_str(&alignment("read2", "8M", "ACGTACGT"));
    fs::write(&sam, content)?;

    let out = run_binary(&sam, &output, &log)?;

    assert_eq!(out.status.code(), Some(1));
    assert!(!output.exists(), "No partial count should be written");
    let log_text = fs::read_to_string(&log)?;
    assert!(
        log_text.contains("SAM line 5 has 3 tab-separated fields"),
        "log was: {}",
        log_text
    );
    Ok(())
}
