use serde_json::Value;
use stats_printer::{RenderOptions, StatsPrinter};
use std::fs;
use std::io::Read;
use std::path::PathBuf;

#[derive(Debug)]
struct CliArgs {
    /// `None` reads the stats from stdin.
    input: Option<PathBuf>,
    options: Option<PathBuf>,
    colors: Option<bool>,
    tool_name: Option<String>,
}

fn main() {
    #[cfg(feature = "telemetry")]
    let _ = stats_printer::telemetry::init_default_tracing();

    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let raw = match &args.input {
        Some(path) => fs::read_to_string(path)
            .map_err(|err| format!("failed to read `{}`: {err}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|err| format!("failed to read stdin: {err}"))?;
            buffer
        }
    };
    let stats: Value = serde_json::from_str(&raw).map_err(|err| format!("invalid json: {err}"))?;

    let mut options = match &args.options {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read `{}`: {err}", path.display()))?;
            RenderOptions::from_json_str(&raw).map_err(|err| err.to_string())?
        }
        None => RenderOptions::default(),
    };
    if let Some(colors) = args.colors {
        options = options.with_colors(colors);
    }
    if let Some(tool_name) = args.tool_name {
        options = options.with_tool_name(tool_name);
    }

    let printer = StatsPrinter::with_default_rules().map_err(|err| err.to_string())?;
    let output = printer.render(&stats, &options);
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

fn parse_args() -> Result<CliArgs, String> {
    let mut input: Option<PathBuf> = None;
    let mut options: Option<PathBuf> = None;
    let mut colors: Option<bool> = None;
    let mut tool_name: Option<String> = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--input" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --input".to_owned())?;
                input = (value != "-").then(|| PathBuf::from(value));
            }
            "--options" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --options".to_owned())?;
                options = Some(PathBuf::from(value));
            }
            "--tool-name" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --tool-name".to_owned())?;
                tool_name = Some(value);
            }
            "--colors" => colors = Some(true),
            "--no-colors" => colors = Some(false),
            "-h" | "--help" => {
                println!(
                    "Usage: render_stats [--input <stats.json>|-] [--options <options.json>] [--colors|--no-colors] [--tool-name <name>]"
                );
                std::process::exit(0);
            }
            _ => {
                return Err(format!("unknown argument `{arg}`"));
            }
        }
    }

    Ok(CliArgs {
        input,
        options,
        colors,
        tool_name,
    })
}
