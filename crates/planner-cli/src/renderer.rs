//! Terminal rendering for generated lesson plans
//!
//! Renders the markdown projection of a plan with termimad, with a plain
//! text fallback for --no-color and non-interactive use (piping a plan
//! into a file or printing it).

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

const HEADER_COLOR: &str = "\x1b[34m";
const STATUS_COLOR: &str = "\x1b[32m";
const RESET: &str = "\x1b[0m";

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        // Lesson sections are h2 headers; keep them visually distinct
        // from the plan title (h1) via the default termimad weighting.
        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);

        Self { rich_enabled, skin }
    }

    /// Render the markdown projection of a plan to the terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        if self.rich_enabled {
            // Render line by line so section headers keep their hash
            // prefixes and the output stays grep-able.
            for line in markdown.lines() {
                match Self::header_line(line) {
                    Some(header) => println!("{header}"),
                    None => {
                        self.skin.print_inline(line);
                        println!();
                    }
                }
            }
        } else {
            print!("{markdown}");
        }
        Ok(())
    }

    /// Print a one-line status message (save confirmations and the like)
    pub fn status(&self, message: &str) {
        println!("{}", self.status_line(message));
    }

    /// Colorize a section header, or None when the line is not a header.
    fn header_line(line: &str) -> Option<String> {
        line.starts_with('#')
            .then(|| format!("{HEADER_COLOR}{line}{RESET}"))
    }

    fn status_line(&self, message: &str) -> String {
        if self.rich_enabled {
            format!("{STATUS_COLOR}{message}{RESET}")
        } else {
            message.to_string()
        }
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
