use anyhow::{bail, Context, Result};
use epsg_incode::{lookup, registry, TableSummary};
use std::{env, process::exit};
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

const USAGE: &str = "\
Usage:
  epsg-incode get <file> <key_col> <value> <mode> <target_col>
  epsg-incode row <file> <key_col> <value> <mode>
  epsg-incode column <file> <column>
  epsg-incode tables

<mode> is one of: exact, approx, integer (or the codes 0, 1, 2)";

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // ─── 2) dispatch ─────────────────────────────────────────────────
    let args: Vec<String> = env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    match args.as_slice() {
        ["get", file, key, value, mode, target] => {
            warn_unknown_mode(mode);
            println!(
                "{}",
                lookup::resolve_field_by_mode(file, key, value, mode, target)
            );
        }
        ["row", file, key, value, mode] => {
            warn_unknown_mode(mode);
            match lookup::scan_row_by_mode(file, key, value, mode) {
                Some(row) => println!("{}", serde_json::to_string(row)?),
                None => {
                    info!(file, key, value, "no matching row");
                    exit(1);
                }
            }
        }
        ["column", file, column] => match lookup::resolve_column_index(file, column) {
            Some(idx) => println!("{}", idx),
            None => {
                info!(file, column, "column not found");
                exit(1);
            }
        },
        ["tables"] => {
            let summaries: Vec<TableSummary> =
                registry().tables().iter().map(|t| t.summary()).collect();
            let yaml = serde_yaml::to_string(&summaries).context("serializing table summaries")?;
            print!("{}", yaml);
        }
        _ => {
            eprintln!("{}", USAGE);
            bail!("unrecognized arguments: {:?}", args);
        }
    }
    Ok(())
}

fn warn_unknown_mode(mode: &str) {
    if lookup::parse_mode(mode).is_none() {
        warn!("unknown comparison mode `{}`; nothing will match", mode);
    }
}
