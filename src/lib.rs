pub mod cigar_parser;
pub mod config;
pub mod counter;
pub mod logging;
pub mod sam_parser;
