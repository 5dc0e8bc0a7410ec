//! Terminal rendering of formatted reports.

use colored::{Color, Colorize};
use std::io::{self, Write};

use crate::{
    format::{AllianceLine, Report},
    tba::types::AllianceColor,
};

const TROPHY: &str = "🏆";
const MIN_LABEL_WIDTH: usize = 10;

/// Colors used when writing a report.
///
/// `colored` still strips escape codes when stdout is not a terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub header: Option<Color>,
    pub label: Option<Color>,
    pub red: Option<Color>,
    pub blue: Option<Color>,
    pub underline_header: bool,
}

impl Palette {
    /// Cyan underlined headers, green labels, alliance-colored rows.
    pub fn colored() -> Self {
        Self {
            header: Some(Color::Cyan),
            label: Some(Color::Green),
            red: Some(Color::Red),
            blue: Some(Color::Blue),
            underline_header: true,
        }
    }

    /// No escape codes at all.
    pub fn plain() -> Self {
        Self {
            header: None,
            label: None,
            red: None,
            blue: None,
            underline_header: false,
        }
    }

    pub fn from_flag(color: bool) -> Self {
        if color {
            Self::colored()
        } else {
            Self::plain()
        }
    }

    fn alliance(&self, color: AllianceColor) -> Option<Color> {
        match color {
            AllianceColor::Red => self.red,
            AllianceColor::Blue => self.blue,
        }
    }
}

fn paint(text: &str, color: Option<Color>) -> String {
    match color {
        Some(c) => text.color(c).to_string(),
        None => text.to_string(),
    }
}

/// Write a full report: indented header, one line per field, then alliances.
pub fn render_report<W: Write>(report: &Report, palette: &Palette, out: &mut W) -> io::Result<()> {
    let header = format!("{}:", report.header);
    let header = match palette.header {
        Some(c) if palette.underline_header => header.color(c).underline().to_string(),
        Some(c) => header.color(c).to_string(),
        None => header,
    };
    writeln!(out)?;
    writeln!(out, "    {header}")?;

    let width = report
        .fields
        .iter()
        .map(|f| f.label.len() + 1)
        .max()
        .unwrap_or(0)
        .max(MIN_LABEL_WIDTH);
    for field in &report.fields {
        let label = format!("{:<width$}", format!("{}:", field.label));
        writeln!(out, "\t{} {}", paint(&label, palette.label), field.value)?;
    }

    for alliance in &report.alliances {
        writeln!(
            out,
            "{}",
            paint(&alliance_row(alliance), palette.alliance(alliance.color))
        )?;
    }

    writeln!(out)
}

/// Write a single sentence (a requested datum) on its own line.
pub fn render_sentence<W: Write>(sentence: &str, out: &mut W) -> io::Result<()> {
    writeln!(out, "{sentence}")
}

/// `\t 🏆  1986 | 1939 | 4522 => 30 points`, without the trophy for non-winners.
pub fn alliance_row(alliance: &AllianceLine) -> String {
    let marker = if alliance.winner {
        format!(" {TROPHY}  ")
    } else {
        "    ".to_string()
    };
    let score = match alliance.score {
        Some(s) => format!("{s} points"),
        None => "-".to_string(),
    };
    format!("\t{marker}{} => {score}", alliance.teams.join(" | "))
}
