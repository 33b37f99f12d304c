use clap::{Parser, ValueEnum};
use std::io::Write;
use xdict_core::{Dictionary, LookupView};

#[derive(Parser)]
#[command(name = "xdict", version, about = "xdict: look up a word in a small fixed dictionary")]
struct Cli {
    /// Look up WORD, print the result, and exit without starting the TUI.
    #[arg(long, value_name = "WORD")]
    lookup: Option<String>,

    /// Output format for --lookup.
    #[arg(long, value_enum, default_value_t = Format::Text, requires = "lookup")]
    format: Format,

    /// Theme name (default, gruvbox). Overrides the config file.
    #[arg(long)]
    theme: Option<String>,

    /// Write debug logs to $TMPDIR/xdict-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// The display text followed by a newline.
    Text,
    /// One JSON object: input_text, display_text, outcome.
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        init_debug_log()?;
    }

    match cli.lookup {
        Some(word) => lookup_once(&word, cli.format),
        None => xdict_tui::run(cli.theme.as_deref()),
    }
}

/// Run one input-then-search cycle and print the resulting state.
fn lookup_once(word: &str, format: Format) -> anyhow::Result<()> {
    let mut view = LookupView::new(Dictionary::builtin());
    view.on_input_change(word);
    view.on_search_triggered();

    let mut out = std::io::stdout().lock();
    match format {
        Format::Text => writeln!(out, "{}", view.display_text())?,
        Format::Json => {
            serde_json::to_writer(&mut out, &view.state())?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn init_debug_log() -> anyhow::Result<()> {
    let path = std::env::temp_dir().join("xdict-debug.log");
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)?;
    tracing_subscriber::fmt()
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .init();
    tracing::info!(path = %path.display(), "xdict debug log started");
    Ok(())
}
