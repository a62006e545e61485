use super::grid::{Heatmap, MonthLabel, DAYS_PER_WEEK};
use super::palette::Palette;
use std::io::{self, Write};

pub const DAY_NAMES: [&str; DAYS_PER_WEEK] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Width of the weekday column ("Sun ") that the month header skips.
const GUTTER: &str = "    ";

/// Writes a [`Heatmap`] as colored terminal text.
#[derive(Debug, Clone, Default)]
pub struct HeatmapRenderer {
    palette: Palette,
}

impl HeatmapRenderer {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    pub fn render<W: Write>(&self, heatmap: &Heatmap, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", month_header(&heatmap.labels))?;

        for (weekday, name) in DAY_NAMES.iter().enumerate() {
            write!(out, "{name} ")?;
            for &level in heatmap.grid.row(weekday) {
                write!(out, "{} {}", self.palette.color(level), self.palette.reset)?;
            }
            writeln!(out)?;
        }

        write!(out, "{}", self.palette.reset)?;
        out.flush()
    }

    pub fn render_to_string(&self, heatmap: &Heatmap) -> String {
        let mut buf = Vec::new();
        // Writing into a Vec cannot fail.
        let _ = self.render(heatmap, &mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }
}

/// Month names placed over their week columns, never overlapping.
///
/// A label whose column is already covered starts right after the previous one.
pub fn month_header(labels: &[MonthLabel]) -> String {
    let mut line = String::from(GUTTER);
    let mut column = 0;
    for label in labels {
        if label.week > column {
            line.push_str(&" ".repeat(label.week - column));
            column = label.week;
        }
        line.push_str(&label.name);
        column += label.name.chars().count();
    }
    line
}
