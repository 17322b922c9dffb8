//! Parse command - validate cache option strings

use crate::cache::CacheSpec;
use crate::cli::args::{OutputFormat, ParseArgs};
use crate::config::Config;
use crate::error::{CacheOptError, CacheOptResult};
use tracing::debug;

/// Execute the parse command
pub async fn execute(args: ParseArgs, config: &Config) -> CacheOptResult<()> {
    let raw_specs = resolve_inputs(args.specs, config)?;
    let specs = parse_all(&raw_specs)?;

    match args.output {
        OutputFormat::Table => print_table(&specs),
        OutputFormat::Json => print_json(&specs)?,
        OutputFormat::Plain => print_plain(&specs),
    }

    Ok(())
}

/// Use the command-line specs, or the configured default when none are given
fn resolve_inputs(specs: Vec<String>, config: &Config) -> CacheOptResult<Vec<String>> {
    if !specs.is_empty() {
        return Ok(specs);
    }

    match &config.cache.default_spec {
        Some(spec) => {
            debug!("No cache spec given, using cache.default_spec");
            Ok(vec![spec.clone()])
        }
        None => Err(CacheOptError::User(
            "No cache spec given and cache.default_spec is not configured".to_string(),
        )),
    }
}

/// Parse each spec independently; the first failure aborts
fn parse_all(raw_specs: &[String]) -> CacheOptResult<Vec<CacheSpec>> {
    raw_specs
        .iter()
        .map(|raw| {
            let spec = CacheSpec::parse(raw)?;
            debug!("Parsed '{}' as '{}'", raw, spec);
            Ok(spec)
        })
        .collect()
}

fn print_table(specs: &[CacheSpec]) {
    println!("{:<8} {:<8} {:<40}", "TYPE", "FORMAT", "NAME");
    println!("{}", "-".repeat(56));

    for spec in specs {
        println!(
            "{:<8} {:<8} {:<40}",
            spec.cache_type(),
            spec.format(),
            spec.name().unwrap_or("-")
        );
    }
}

fn print_json(specs: &[CacheSpec]) -> CacheOptResult<()> {
    println!("{}", serde_json::to_string_pretty(specs)?);
    Ok(())
}

fn print_plain(specs: &[CacheSpec]) {
    for spec in specs {
        println!("{}", spec);
    }
}
