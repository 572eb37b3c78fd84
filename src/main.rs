use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgAction, Command};
use log::error;
use std::path::PathBuf;

use samfullmatch::config::Config;
use samfullmatch::counter::run;
use samfullmatch::logging::init_logging;

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {:?}", e);
            std::process::exit(2);
        }
    };

    if let Err(e) = init_logging(config.log.as_deref(), config.verbose) {
        eprintln!("Error: {:?}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(&config) {
        error!("{:?}", e);
        std::process::exit(1);
    }
}

fn parse_args() -> Result<Config> {
    let matches = Command::new("SAM Full Match Counter")
        .version("0.1.0")
        .about("Counts SAM records whose CIGAR is a single full-length match")
        .arg(
            Arg::new("sam")
                .short('s')
                .long("sam")
                .value_name("SAM")
                .help("Path to the SAM file")
                .takes_value(true)
                .value_parser(value_parser!(PathBuf))
                .required(true),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("OUTPUT")
                .help("File to write the full-match count to")
                .takes_value(true)
                .value_parser(value_parser!(PathBuf))
                .required(true),
        )
        .arg(
            Arg::new("log")
                .short('l')
                .long("log")
                .value_name("LOG")
                .help("Write diagnostics to this file instead of stderr")
                .takes_value(true)
                .value_parser(value_parser!(PathBuf))
                .required(false),
        )
        .arg(
            Arg::new("header-lines")
                .long("header-lines")
                .value_name("N")
                .help("Number of leading lines to skip before the first record")
                .takes_value(true)
                .value_parser(value_parser!(usize))
                .required(false),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable debug diagnostics")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let sam = matches
        .get_one::<PathBuf>("sam")
        .cloned()
        .context("Missing --sam")?;
    let output = matches
        .get_one::<PathBuf>("output")
        .cloned()
        .context("Missing --output")?;
    let verbose = matches.get_one::<bool>("verbose").copied().unwrap_or(false);

    let mut config = Config::new(sam, output).with_verbose(verbose);
    if let Some(header_lines) = matches.get_one::<usize>("header-lines") {
        config = config.with_header_lines(*header_lines);
    }
    if let Some(log) = matches.get_one::<PathBuf>("log") {
        config = config.with_log(log.clone());
    }
    Ok(config)
}
