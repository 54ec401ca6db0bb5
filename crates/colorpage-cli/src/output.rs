//! Terminal output helpers for colorpage-cli

use colored::Colorize;

/// Context for terminal rendering
#[allow(dead_code)]
pub struct OutputContext {
    pub no_color: bool,
    pub quiet: bool,
}

impl OutputContext {
    pub fn new(no_color: bool, quiet: bool) -> Self {
        if no_color {
            colored::control::set_override(false);
        }
        Self { no_color, quiet }
    }

    /// Print a success message (unless in quiet mode)
    pub fn success(&self, msg: &str) {
        if !self.quiet {
            println!("{}", msg.green());
        }
    }

    /// Print an error message
    pub fn error(&self, msg: &str) {
        eprintln!("{}", msg.red());
    }

    /// Print a blocking-alert style message; shown even in quiet mode
    pub fn alert(&self, msg: &str) {
        eprintln!("{}", msg.yellow().bold());
    }
}
