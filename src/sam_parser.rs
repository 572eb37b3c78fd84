use thiserror::Error;

/// Fields up to and including SEQ (column 10) must be present.
pub const MIN_FIELDS: usize = 10;

const QNAME: usize = 0;
const CIGAR: usize = 5;
const SEQ: usize = 9;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SamError {
    #[error("SAM line {line_number} has {found} tab-separated fields, at least {required} required")]
    TooFewFields {
        line_number: usize,
        found: usize,
        required: usize,
    },
}

/// The columns of an alignment line the counter looks at. Borrows from the line.
#[derive(Debug, PartialEq, Eq)]
pub struct SamRecord<'a> {
    pub query_name: &'a str,
    pub cigar: &'a str,
    pub sequence: &'a str,
}

impl<'a> SamRecord<'a> {
    /// Splits `line` on tabs. Fields are taken as-is; CIGAR is never the last
    /// column of a SAM record, so no trimming is done.
    pub fn from_line(line: &'a str, line_number: usize) -> Result<Self, SamError> {
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < MIN_FIELDS {
            return Err(SamError::TooFewFields {
                line_number,
                found: fields.len(),
                required: MIN_FIELDS,
            });
        }

        Ok(SamRecord {
            query_name: fields[QNAME],
            cigar: fields[CIGAR],
            sequence: fields[SEQ],
        })
    }
}
