//! CLI tool to run a filter chain (.toml) against delimited record data.
//!
//! The chain file lists filter stages in order:
//!
//! ```toml
//! [[filter]]
//! name = "not_null"
//! [filter.config]
//! fields = ["user", "action"]
//! ```
//!
//! The input's first line names the fields (the schema); every following
//! line is one record. Records surviving every filter are written to
//! stdout; per-filter statistics go to stderr.

use clap::Parser;
use filters_rs::{Filter, FilterParams, FlatRecord, Record, Schema, registry};
use serde::Deserialize;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::process;
use tracing_subscriber::EnvFilter;

/// Run a filter chain against delimited record data.
#[derive(Parser)]
#[command(name = "filter-run")]
struct Cli {
    /// Filter chain definition file (.toml)
    #[arg(required_unless_present = "list")]
    chain: Option<String>,

    /// Input data file: a header line of field names, then one record per line
    #[arg(required_unless_present = "list")]
    input: Option<String>,

    /// Write surviving records to file instead of stdout
    #[arg(short, long)]
    output: Option<String>,

    /// Field delimiter
    #[arg(short, long, default_value_t = ',')]
    delimiter: char,

    /// Show paths and debug logging on stderr
    #[arg(short, long)]
    verbose: bool,

    /// List available filters and their options, then exit
    #[arg(long)]
    list: bool,
}

/// One `[[filter]]` entry in the chain file.
#[derive(Debug, Deserialize)]
struct StageConfig {
    name: String,
    #[serde(default)]
    config: Option<toml::Value>,
}

#[derive(Debug, Deserialize)]
struct ChainConfig {
    #[serde(default, rename = "filter")]
    filters: Vec<StageConfig>,
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays clean for record output.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(if cli.verbose { "debug" } else { "warn" })
        }))
        .with_writer(io::stderr)
        .init();

    if cli.list {
        for desc in registry::ALL {
            println!("{} - {}", desc.name, desc.help);
            for option in desc.options {
                println!(
                    "    {} ({:?}{}): {}",
                    option.name,
                    option.kind,
                    if option.required { ", required" } else { "" },
                    option.help
                );
            }
        }
        return;
    }

    let chain_file = cli.chain.as_deref().unwrap_or_default();
    let input_file = cli.input.as_deref().unwrap_or_default();

    let chain_text = match fs::read_to_string(chain_file) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading chain file '{chain_file}': {e}");
            process::exit(1);
        }
    };

    let input_text = match fs::read_to_string(input_file) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading input file '{input_file}': {e}");
            process::exit(1);
        }
    };

    if cli.verbose {
        eprintln!("Chain:  {chain_file}");
        eprintln!("Input:  {input_file}");
        eprintln!("Output: {}", cli.output.as_deref().unwrap_or("(stdout)"));
    }

    let chain: ChainConfig = match toml::from_str(&chain_text) {
        Ok(chain) => chain,
        Err(e) => {
            eprintln!("Error parsing chain file '{chain_file}': {e}");
            process::exit(1);
        }
    };
    if chain.filters.is_empty() {
        eprintln!("Chain has no filters (expected at least one [[filter]] entry)");
        process::exit(1);
    }

    let mut lines = input_text.lines().filter(|line| !line.is_empty());
    let Some(header) = lines.next() else {
        eprintln!("Input is empty: expected a header line of field names");
        process::exit(1);
    };
    let schema = Schema::new(header.split(cli.delimiter).map(str::trim));

    let mut filters: Vec<(String, Box<dyn Filter>)> = Vec::with_capacity(chain.filters.len());
    for stage in &chain.filters {
        let Some(desc) = registry::find(&stage.name) else {
            eprintln!("Unknown filter '{}' (try --list)", stage.name);
            process::exit(1);
        };
        match desc.build(FilterParams {
            config: stage.config.as_ref(),
            resolver: &schema,
        }) {
            Ok(filter) => filters.push((stage.name.clone(), filter)),
            Err(e) => {
                eprintln!("Error configuring filter '{}': {e}", stage.name);
                process::exit(1);
            }
        }
    }

    let mut input_count = 0usize;
    let mut output_count = 0usize;
    let mut output = String::new();
    for line in lines {
        input_count += 1;
        let record = FlatRecord::from_values(line.split(cli.delimiter).map(|v| Some(v.trim())));
        if survives(&filters, &record) {
            output_count += 1;
            output.push_str(line);
            output.push('\n');
        }
    }

    if let Some(out_path) = &cli.output {
        if let Some(parent) = Path::new(out_path.as_str()).parent()
            && !parent.as_os_str().is_empty()
            && fs::create_dir_all(parent).is_err()
        {
            eprintln!("Error creating output directory for '{out_path}'");
            process::exit(1);
        }
        if let Err(e) = fs::write(out_path, &output) {
            eprintln!("Error writing output file '{out_path}': {e}");
            process::exit(1);
        }
    } else if let Err(e) = io::stdout().write_all(output.as_bytes()) {
        eprintln!("Error writing output: {e}");
        process::exit(1);
    }

    for (name, filter) in &filters {
        let stats = filter.stats();
        eprintln!(
            "{name}: processed={} filtered={}",
            stats.records_processed, stats.records_filtered
        );
    }
    eprintln!("Records: {input_count} in -> {output_count} out");
}

/// Drive `record` through the chain by continuation; true if every filter
/// forwarded it.
fn survives(filters: &[(String, Box<dyn Filter>)], record: &dyn Record) -> bool {
    fn step(filters: &[(String, Box<dyn Filter>)], record: &dyn Record, kept: &mut bool) {
        match filters.split_first() {
            None => *kept = true,
            Some(((_, first), rest)) => {
                first.process(record, &mut |r| step(rest, r, &mut *kept));
            }
        }
    }

    let mut kept = false;
    step(filters, record, &mut kept);
    kept
}
