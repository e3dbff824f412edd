use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use colored::Colorize;
use tracing::{debug, warn};

use jdiff_sdk::{
    compare_with, CompareOptions, FileSettingsStore, SdkError, SettingsStore, ViewSettings,
};

use crate::cli::*;
use crate::render;

const CONFIG_ENV: &str = "JDIFF_CONFIG";
const DEFAULT_CONFIG: &str = ".jdiff.toml";

pub fn run_command(cli: Cli) -> anyhow::Result<ExitCode> {
    let store = FileSettingsStore::new(config_path(cli.config, std::env::var_os(CONFIG_ENV)));
    debug!(path = %store.path().display(), "settings file");
    match cli.command {
        Command::Compare(args) => cmd_compare(args, &cli.format, &store),
        Command::Format(args) => cmd_format(args, &cli.format),
        Command::Check(args) => cmd_check(args, &cli.format),
        Command::Config(args) => cmd_config(args, &cli.format, &store),
    }
}

/// `--config` wins, then the environment, then `.jdiff.toml` in the
/// working directory.
fn config_path(flag: Option<PathBuf>, env: Option<std::ffi::OsString>) -> PathBuf {
    flag.or_else(|| env.filter(|v| !v.is_empty()).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG))
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("reading stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

/// Read both documents. Stdin can only supply one of them.
fn read_pair(left: &Path, right: &Path) -> anyhow::Result<(String, String)> {
    let stdin = Path::new("-");
    if left == stdin && right == stdin {
        anyhow::bail!("only one document can be read from stdin (`-`)");
    }
    Ok((read_input(left)?, read_input(right)?))
}

/// A broken settings file should not stop a comparison.
fn load_or_default(store: &dyn SettingsStore) -> ViewSettings {
    store.load().unwrap_or_else(|e| {
        warn!(error = %e, "ignoring unreadable settings");
        ViewSettings::default()
    })
}

/// Stored settings with the command-line overrides applied.
fn view_settings(args: &CompareArgs, stored: ViewSettings) -> ViewSettings {
    let mut view = stored;
    if args.no_color {
        view.color = false;
    }
    if args.no_summary {
        view.show_summary = false;
    }
    if let Some(context) = args.context {
        view.context_lines = Some(context);
    }
    if let Some(width) = args.width {
        view.set_width(width);
    }
    view
}

fn cmd_compare(
    args: CompareArgs,
    format: &OutputFormat,
    store: &dyn SettingsStore,
) -> anyhow::Result<ExitCode> {
    let (left, right) = read_pair(&args.left, &args.right)?;
    let view = view_settings(&args, load_or_default(store));
    let options = CompareOptions {
        canonicalize: !args.raw,
        ..CompareOptions::default()
    };

    let comparison = match compare_with(&left, &right, &options) {
        Ok(comparison) => comparison,
        Err(SdkError::Format { side, source }) => {
            let (path, raw) = match side {
                jdiff_sdk::Side::Left => (&args.left, &left),
                jdiff_sdk::Side::Right => (&args.right, &right),
            };
            eprintln!("{}", render::render_parse_error(raw, &source, view.color));
            anyhow::bail!("{} document ({}) is not valid JSON", side, path.display());
        }
        Err(e) => return Err(e.into()),
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&comparison)?),
        OutputFormat::Text => println!("{}", render::render_comparison(&comparison, &view)),
    }

    if args.exit_code && !comparison.is_identical() {
        return Ok(ExitCode::from(1));
    }
    Ok(ExitCode::SUCCESS)
}

fn cmd_format(args: FormatArgs, format: &OutputFormat) -> anyhow::Result<ExitCode> {
    let raw = read_input(&args.file)?;
    match jdiff_format::canonicalize(&raw) {
        Ok(text) => {
            match format {
                OutputFormat::Json => println!(
                    "{}",
                    serde_json::to_string_pretty(&serde_json::json!({ "ok": true, "text": text }))?
                ),
                OutputFormat::Text => println!("{text}"),
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            match format {
                OutputFormat::Json => {
                    let location = err.location();
                    println!(
                        "{}",
                        serde_json::to_string_pretty(&serde_json::json!({
                            "ok": false,
                            "error": err.to_string(),
                            "line": location.map(|l| l.line),
                            "column": location.map(|l| l.column),
                        }))?
                    );
                }
                OutputFormat::Text => {
                    eprintln!("{}", render::render_parse_error(&raw, &err, true));
                }
            }
            Ok(ExitCode::from(2))
        }
    }
}

fn cmd_check(args: CheckArgs, format: &OutputFormat) -> anyhow::Result<ExitCode> {
    let (left, right) = read_pair(&args.left, &args.right)?;
    let mut canonical = Vec::with_capacity(2);
    for (path, raw) in [(&args.left, left), (&args.right, right)] {
        match jdiff_format::canonicalize(&raw) {
            Ok(text) => canonical.push(text),
            Err(err) => {
                eprintln!("{}", render::render_parse_error(&raw, &err, true));
                anyhow::bail!("{} is not valid JSON", path.display());
            }
        }
    }

    let warning = jdiff_diff::analyze_structure(&canonical[0], &canonical[1]);
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&warning)?),
        OutputFormat::Text => match &warning {
            Some(w) => println!("{}", render::render_warning(w, true)),
            None => println!("{} Structures are comparable.", "✓".green().bold()),
        },
    }
    Ok(if warning.is_some() {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    })
}

fn cmd_config(
    args: ConfigArgs,
    format: &OutputFormat,
    store: &dyn SettingsStore,
) -> anyhow::Result<ExitCode> {
    if args.reset {
        store.save(&ViewSettings::default())?;
        println!("{} Settings reset.", "✓".green());
        return Ok(ExitCode::SUCCESS);
    }

    if args.steps_width() {
        let updated = store.update(&mut |settings| {
            if args.reset_width {
                settings.reset_width();
            }
            (0..args.widen).for_each(|_| settings.widen());
            (0..args.narrow).for_each(|_| settings.narrow());
            Ok(())
        })?;
        println!("{} {} = {}", "✓".green(), "column_width".bold(), updated.column_width);
        return Ok(ExitCode::SUCCESS);
    }

    match (args.key, args.value) {
        (None, _) => {
            let settings = store.load()?;
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&settings)?),
                OutputFormat::Text => {
                    for key in ViewSettings::KEYS {
                        println!("{} = {}", key.bold(), settings.get(key)?);
                    }
                }
            }
        }
        (Some(key), None) => println!("{}", store.load()?.get(&key)?),
        (Some(key), Some(value)) => {
            let updated = store.update(&mut |settings| settings.set(&key, &value))?;
            println!("{} {} = {}", "✓".green(), key.bold(), updated.get(&key)?);
        }
    }
    Ok(ExitCode::SUCCESS)
}
