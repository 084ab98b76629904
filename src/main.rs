use anyhow::Context;
use snaplink::scenario::{self, Scenario};
use snaplink::{init_logging_with, LogFormat, BUILD_DATE, VERSION};
use snaplink_settings::Config;
use std::path::PathBuf;

const USAGE: &str = "usage: snaplink [--json] <scenario.json> [config.json|config.toml]";

fn main() -> anyhow::Result<()> {
    let mut json = false;
    let mut paths = Vec::new();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            "--version" => {
                println!("snaplink {} (built {})", VERSION, BUILD_DATE);
                return Ok(());
            }
            "-h" | "--help" => {
                println!("{}", USAGE);
                return Ok(());
            }
            _ => paths.push(PathBuf::from(arg)),
        }
    }

    init_logging_with(if json { LogFormat::Json } else { LogFormat::Pretty })?;

    let mut paths = paths.into_iter();
    let scenario_path = paths.next().context(USAGE)?;
    let config_path = match paths.next() {
        Some(path) => Some(path),
        None => match Config::default_path() {
            Ok(path) if path.exists() => Some(path),
            Ok(_) => None,
            Err(e) => {
                tracing::warn!("{}, using default settings", e);
                None
            }
        },
    };
    // A loaded config's grid replaces the one stored with the diagram.
    let (config, ambient) = match config_path {
        Some(path) => {
            let config = Config::load_from_file(&path)
                .with_context(|| format!("Failed to load config {}", path.display()))?;
            let grid = config.ambient_grid();
            (config, Some(grid))
        }
        None => (Config::default(), None),
    };

    let scenario = Scenario::load_from_file(&scenario_path)?;
    let report = scenario::replay(&scenario, config.to_reshape_config()?, ambient)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for (i, step) in report.steps.iter().enumerate() {
            println!("move {}: {} -> {}", i + 1, step.raw, step.corrected);
        }
        let route: Vec<String> = report.route.iter().map(ToString::to_string).collect();
        println!(
            "route ({}): {}",
            if report.committed { "committed" } else { "cancelled" },
            route.join(" ")
        );
    }

    Ok(())
}
