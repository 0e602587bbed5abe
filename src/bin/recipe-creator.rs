//! Recipe Creator CLI - interactive recipe manager
//!
//! Usage:
//!   recipe-creator                     Start the interactive menu
//!   recipe-creator --script <file>     Replay menu answers from a file
//!   recipe-creator --no-color -v       Plain output with debug lines

use anyhow::{Context, Result};
use clap::Parser;
use recipe_creator::output::{self, ColorChoice};
use recipe_creator::{Config, Shell};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "recipe-creator")]
#[command(about = "Create recipes, scale ingredients and check calorie totals")]
#[command(version)]
struct Cli {
    /// Extra config file, applied after the XDG config files
    #[arg(short, long, env = "RECIPE_CREATOR_CONFIG")]
    config: Option<PathBuf>,

    /// Read menu answers from a file instead of stdin
    #[arg(short, long)]
    script: Option<PathBuf>,

    /// Disable colored status output
    #[arg(long)]
    no_color: bool,

    /// Print debug lines to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Command-line flags win over config values
    fn apply(&self, mut config: Config) -> Config {
        if self.no_color {
            config.color = ColorChoice::Never;
        }
        if self.verbose {
            config.verbose = true;
        }
        config
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = cli.apply(Config::load(cli.config.as_deref())?);
    output::set_color(config.color);
    output::set_verbose(config.verbose);

    for source in &config.sources {
        output::debug(&format!("loaded config {}", source.display()));
    }

    let stdout = io::stdout();
    match &cli.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open script: {}", path.display()))?;
            let count = run_session(BufReader::new(file), stdout.lock(), &config)?;
            output::success(&format!("Session ended with {} recipe(s)", count));
        }
        None => {
            let stdin = io::stdin();
            run_session(stdin.lock(), stdout.lock(), &config)?;
        }
    }

    Ok(())
}

/// Run the menu to completion and return how many recipes were created
fn run_session<R: BufRead, W: Write>(input: R, out: W, config: &Config) -> Result<usize> {
    let mut shell = Shell::new(input, out).with_sorting(config.sort_recipes);
    if let Err(e) = shell.run() {
        output::error(&format!("{e:#}"));
        return Err(e);
    }
    Ok(shell.book().len())
}
