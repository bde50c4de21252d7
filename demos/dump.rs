// Copyright (C) 2025 FZI Forschungszentrum Informatik
// SPDX-License-Identifier: Apache-2.0
//! SMEM log dump
//!
//! This program decodes a file holding raw SMEM log records and prints the
//! decoded log to stdout. The file is supplied as a positional parameter and
//! is expected to consist of concatenated 20 byte records, or, if `--batch` is
//! given, of a single reply frame of the log source consisting of a header
//! with flow control counts followed by the records. Optionally, output
//! options may be supplied in the form of a TOML file (such as `options.toml`
//! in this directory), which may be overridden on the command line.
//!
//! Log output is controlled via `RUST_LOG`. If run with `--debug` or the
//! environment variable `DEBUG` set to `1`, debug output is enabled
//! regardless.

use std::num::NonZeroU32;
use std::path::PathBuf;

use smem_log::config::{self, Options};
use smem_log::record::{Batch, LogRecord, Reader};
use smem_log::session;

fn main() {
    use std::io::Write;

    let matches = clap::Command::new("SMEM log dump")
        .arg(
            clap::arg!(<input> "Path to the raw log records")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            clap::arg!(-o --options <FILE> "Output options")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            clap::arg!(-b --batch "Input is a reply frame rather than plain records")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(clap::arg!(--ticks "Display raw ticks instead of seconds").action(clap::ArgAction::SetTrue))
        .arg(
            clap::arg!(--"clock-rate" <RATE> "Ticks per second for converting times")
                .value_parser(clap::value_parser!(NonZeroU32)),
        )
        .arg(
            clap::arg!(--"sleep-clock" "Convert times using the sleep clock rate")
                .action(clap::ArgAction::SetTrue)
                .conflicts_with("clock-rate"),
        )
        .arg(
            clap::arg!(-d --debug "Enable additional debug output")
                .env("DEBUG")
                .action(clap::ArgAction::SetTrue)
                .value_parser(clap::builder::FalseyValueParser::new()),
        )
        .get_matches();

    let mut logger = env_logger::Builder::from_default_env();
    if matches.get_flag("debug") {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    // Options from a file form the base for any given on the command line
    let options: Options = matches
        .get_one::<PathBuf>("options")
        .map(|p| {
            let options = std::fs::read_to_string(p).expect("Could not load options");
            toml::from_str(options.as_ref()).expect("Could not parse options")
        })
        .unwrap_or_default();
    log::debug!("Options: {options:?}");

    let mut builder = session::builder().with_options(&options);
    if matches.get_flag("ticks") {
        builder = builder.with_ticks(true);
    }
    if let Some(rate) = matches.get_one::<NonZeroU32>("clock-rate") {
        builder = builder.with_clock_rate(*rate);
    }
    if matches.get_flag("sleep-clock") {
        builder = builder.with_clock_rate(config::SLEEP_CLOCK_RATE);
    }
    let mut session = builder.build();

    let input = matches
        .get_one::<PathBuf>("input")
        .expect("No input file specified");
    let data = std::fs::read(input).expect("Could not load input file");

    let records: Vec<LogRecord> = if matches.get_flag("batch") {
        let batch = Batch::parse(&data).expect("Could not parse batch");
        log::info!(
            "Batch of {} records, {} dropped, {} available",
            batch.len(),
            batch.dropped,
            batch.available,
        );
        batch.records().collect()
    } else {
        Reader::new(&data)
            .map_while(|r| {
                r.inspect_err(|e| log::warn!("Ignoring trailing data: {e}"))
                    .ok()
            })
            .collect()
    };

    let stdout = std::io::stdout();
    let mut stdout = stdout.lock();
    for record in &records {
        let text = session.decode(record);
        stdout
            .write_all(text.as_bytes())
            .expect("Could not write output");
    }
    writeln!(stdout).expect("Could not write output");
}
