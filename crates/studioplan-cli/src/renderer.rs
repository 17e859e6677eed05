//! Terminal rendering of markdown output, with a plain text fallback.

use anyhow::Result;
use termimad::{crossterm::style::Color, CompoundStyle, MadSkin};

/// Prints markdown either styled through termimad or as plain text.
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::DarkCyan);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.bullet.set_fg(Color::DarkCyan);

        Self { rich_enabled, skin }
    }

    /// Render markdown text to the terminal.
    pub fn render(&self, markdown: &str) -> Result<()> {
        if self.rich_enabled {
            // Headers keep their hash marks so plan reports read the same as
            // the saved markdown.
            for line in markdown.lines() {
                match self.header_style(line) {
                    Some(style) => println!("{}", style.apply_to(line)),
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

    /// Skin style for a markdown header line, picked by its `#` depth.
    fn header_style(&self, line: &str) -> Option<&CompoundStyle> {
        let level = line.chars().take_while(|c| *c == '#').count();
        if level == 0 {
            return None;
        }
        let index = level.min(self.skin.headers.len()) - 1;
        Some(&self.skin.headers[index].compound_style)
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
