use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::{Context, Result};
use arboard::Clipboard;
use clap::Parser;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;
use zcalc::{Calculator, Config, Display, TerminalDisplay, tokenize};

/// A keypad-style calculator for the terminal.
///
/// Tokens are digits, `.`, operators (`+ - * / = sqr sqrt 1/x %`) and
/// editing commands (`back neg ce c`). Without tokens, lines are read from
/// stdin and the display is printed after each line.
#[derive(Parser, Debug)]
#[command(name = "zcalc", version, about)]
struct Cli {
    /// Input tokens, e.g. `5 + 3 =`.
    tokens: Vec<String>,

    /// Config file to use instead of the default location.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the maximum number of digits per entry.
    #[arg(long)]
    max_digits: Option<usize>,

    /// Print the final display as JSON.
    #[arg(long)]
    json: bool,

    /// Copy the final result to the clipboard.
    #[arg(long)]
    copy: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(max_digits) = cli.max_digits {
        config.max_digits = max_digits.max(1);
    }

    let display = if cli.tokens.is_empty() {
        run_interactive(config)?
    } else {
        run_once(config, &cli.tokens.join(" "), cli.json)?
    };

    if cli.json {
        println!(
            "{}",
            serde_json::to_string(&display).context("Failed to serialize display")?
        );
    }

    if cli.copy
        && let Err(e) = copy_primary(&display)
    {
        warn!("{:#}", e);
    }

    Ok(())
}

/// Evaluate one line of tokens from the command line.
fn run_once(config: Config, line: &str, quiet: bool) -> Result<Display> {
    let tokens = tokenize(line).with_context(|| format!("Invalid input: {}", line))?;

    let mut calculator = Calculator::new(config, Display::default());
    calculator.dispatch_all(tokens)?;
    let display = calculator.into_sink();

    // Only the final frame is printed in one-shot mode.
    if !quiet {
        display.render_to(&mut TerminalDisplay::new(io::stdout().lock()));
    }
    Ok(display)
}

/// Read token lines from stdin until EOF, printing the display after each.
fn run_interactive(config: Config) -> Result<Display> {
    let mut calculator = Calculator::new(config, Display::default());
    let mut terminal = TerminalDisplay::new(io::stdout());

    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read stdin")?;
        match tokenize(&line) {
            Ok(tokens) => {
                if let Err(e) = calculator.dispatch_all(tokens) {
                    warn!("{}", e);
                }
            }
            Err(e) => {
                warn!("Skipping line: {}", e);
                continue;
            }
        }
        calculator.sink().render_to(&mut terminal);
    }

    Ok(calculator.into_sink())
}

/// Put the displayed value on the system clipboard.
///
/// Non-finite results are copied as their display text.
fn copy_primary(display: &Display) -> Result<()> {
    Clipboard::new()
        .and_then(|mut clipboard| clipboard.set_text(display.primary.as_str()))
        .context("Failed to copy result to clipboard")?;

    let primary = &display.primary;
    debug!(result = %primary, "copied result to clipboard");
    Ok(())
}
