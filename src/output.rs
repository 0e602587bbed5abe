//! Colored status output
//!
//! Uses owo-colors for terminal colors. Status lines go to stderr so the
//! menu dialog on stdout stays clean.

use owo_colors::{OwoColorize, Stream, Style};
use std::sync::atomic::{AtomicBool, Ordering};

static VERBOSE: AtomicBool = AtomicBool::new(false);

/// When to emit ANSI colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorChoice {
    /// Color when the stream is a terminal and `NO_COLOR` is unset
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "auto" => Some(Self::Auto),
            "always" => Some(Self::Always),
            "never" => Some(Self::Never),
            _ => None,
        }
    }
}

/// Apply the color choice process-wide
pub fn set_color(choice: ColorChoice) {
    match choice {
        ColorChoice::Auto => owo_colors::unset_override(),
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
    }
}

pub fn set_verbose(verbose: bool) {
    VERBOSE.store(verbose, Ordering::Relaxed);
}

pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

fn styled(prefix: &str, style: Style) -> String {
    prefix
        .if_supports_color(Stream::Stderr, |p| p.style(style))
        .to_string()
}

/// Print a success message (green)
/// Example: "==> Session ended with 2 recipes"
pub fn success(message: &str) {
    eprintln!("{} {}", styled("==>", Style::new().green().bold()), message);
}

/// Print an error message (red)
pub fn error(message: &str) {
    eprintln!("{} {}", styled("error:", Style::new().red().bold()), message);
}

/// Print a debug line, only in verbose mode
/// Example: "[recipe-creator:debug] loaded /etc/xdg/recipe-creator/config.toml"
pub fn debug(message: &str) {
    if is_verbose() {
        eprintln!("{} {}", styled("[recipe-creator:debug]", Style::new().dimmed()), message);
    }
}
