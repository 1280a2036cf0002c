use anyhow::Context;
use clap::{Parser, Subcommand};
use sift_core::config::Config;
use sift_core::{extract, input, FieldKey, Normalizer, Strategy};
use sift_view::{text, Catalogue, Screen};
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "sift", about = "Normalise startup-analysis payloads into structured results")]
struct Cli {
    /// Write debug logs to /tmp/sift-debug.log (tail -f to inspect).
    #[arg(long, global = true)]
    debug: bool,

    /// Config file layered over the built-in defaults
    /// (default: ~/.config/sift/config.toml).
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the canonical result and render decision as JSON.
    Normalize {
        /// Payload file; `-` or absent reads stdin. Non-JSON text is a raw payload.
        payload: Option<PathBuf>,
        /// Event log as a JSON array or JSON lines.
        #[arg(long, value_name = "FILE")]
        events: Option<PathBuf>,
        /// Pretty-print the JSON output.
        #[arg(long)]
        pretty: bool,
    },
    /// Print the results screen as text.
    Render {
        /// Payload file; `-` or absent reads stdin.
        payload: Option<PathBuf>,
        /// Event log as a JSON array or JSON lines.
        #[arg(long, value_name = "FILE")]
        events: Option<PathBuf>,
        /// Show the live progress log instead of the results.
        #[arg(long)]
        progress: bool,
    },
    /// Run one field extractor over text and print the value as JSON.
    Extract {
        /// Field name, e.g. `risks` or `market_score`.
        #[arg(long)]
        key: String,
        /// Text to search; absent reads stdin.
        text: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug)?;

    let config = match &cli.config {
        Some(path) => Config::from_path(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => Config::load().unwrap_or_else(|_| Config::defaults()),
    };
    let normalizer = Normalizer::new(config.engine.clone());

    match cli.command {
        Command::Normalize {
            payload,
            events,
            pretty,
        } => {
            let payload = input::parse_payload(&read_source(payload.as_deref())?);
            let events = read_events(events.as_deref())?;
            let analysis = normalizer.analyze(&payload, &events);
            let out = serde_json::json!({
                "result": analysis.result,
                "structured": analysis.is_structured(),
                "strategy": match analysis.strategy {
                    Strategy::Structured => "structured",
                    Strategy::Fallback => "fallback",
                },
            });
            if pretty {
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!("{out}");
            }
        }
        Command::Render {
            payload,
            events,
            progress,
        } => {
            let events = read_events(events.as_deref())?;
            if progress {
                let lines = sift_view::progress_lines(&events, &config.view);
                print!("{}", text::render_progress(&lines));
                return Ok(());
            }
            let payload = input::parse_payload(&read_source(payload.as_deref())?);
            let analysis = normalizer.analyze(&payload, &events);
            let screen = Screen::build(&analysis, &Catalogue::load_default(), &config.view);
            print!("{}", text::render(&screen));
        }
        Command::Extract { key, text } => {
            let field = FieldKey::parse(&key).with_context(|| {
                let known: Vec<_> = FieldKey::ALL.iter().map(|k| k.as_str()).collect();
                format!("unknown key `{key}`; expected one of: {}", known.join(", "))
            })?;
            let text = match text {
                Some(t) => t,
                None => read_source(None)?,
            };
            println!("{}", serde_json::to_string(&extract::field(&text, field))?);
        }
    }

    Ok(())
}

fn init_logging(debug: bool) -> anyhow::Result<()> {
    if debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/sift-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("sift debug log started; tail -f /tmp/sift-debug.log");
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .init();
    }
    Ok(())
}

/// Read a file, or stdin for `None` / `-`.
fn read_source(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(p) if p != Path::new("-") => {
            std::fs::read_to_string(p).with_context(|| format!("failed to read {}", p.display()))
        }
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn read_events(path: Option<&Path>) -> anyhow::Result<Vec<sift_core::StreamEvent>> {
    let Some(path) = path else {
        return Ok(Vec::new());
    };
    let text = read_source(Some(path))?;
    input::parse_events(&text).with_context(|| format!("malformed event log {}", path.display()))
}
