/// The single-operation CIGAR that covers a read of `len` bases, e.g. `76M`.
pub fn full_match_cigar(len: usize) -> String {
    format!("{}M", len)
}

/// True when `cigar` is exactly one `M` operation spanning all of `sequence`.
///
/// This is a literal string comparison. Multi-operation CIGARs such as
/// `10M2I64M` never qualify, even if their lengths add up, and neither does
/// the unavailable marker `*`. The read length is `sequence.len()` in bytes.
pub fn is_full_match(cigar: &str, sequence: &str) -> bool {
    cigar == full_match_cigar(sequence.len())
}
