use super::{DateRange, Heatmap, HeatmapRenderer};
use crate::git::{collect_activity, collect_or_report};
use crate::model::CommitActivity;
use anyhow::Context;
use chrono::{Local, NaiveDate};
use console::style;
use std::io::{self, Write};
use std::path::Path;

pub fn exec(path: &Path) -> anyhow::Result<()> {
    let stderr = io::stderr();
    let activity = collect_or_report(collect_activity(path), &mut stderr.lock())
        .context("Failed to write diagnostics")?;

    let stdout = io::stdout();
    render_activity(
        &activity,
        Local::now().date_naive(),
        &HeatmapRenderer::default(),
        &mut stdout.lock(),
        &mut stderr.lock(),
    )
    .context("Failed to write heatmap")
}

/// Render the year ending on `today`, warning on `diag` when there is nothing to show.
pub fn render_activity<W: Write, D: Write>(
    activity: &CommitActivity,
    today: NaiveDate,
    renderer: &HeatmapRenderer,
    out: &mut W,
    diag: &mut D,
) -> io::Result<()> {
    if activity.is_empty() {
        writeln!(
            diag,
            "{} No commits found in the past year or git command failed.",
            style("Warning:").yellow().bold()
        )?;
    }

    let heatmap = Heatmap::build(activity, DateRange::year_ending(today));
    tracing::debug!(
        start = %heatmap.range.start(),
        end = %heatmap.range.end(),
        weeks = heatmap.grid.weeks(),
        "rendering heatmap"
    );
    renderer.render(&heatmap, out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    #[test]
    fn empty_activity_warns_and_still_renders() {
        let mut out = Vec::new();
        let mut diag = Vec::new();
        render_activity(
            &CommitActivity::new(),
            today(),
            &HeatmapRenderer::default(),
            &mut out,
            &mut diag,
        )
        .unwrap();

        let warning = String::from_utf8(diag).unwrap();
        assert!(warning.contains("No commits found"), "{warning}");
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().filter(|l| l.starts_with("Sun ")).count(), 1);
        assert_eq!(text.lines().filter(|l| l.starts_with("Sat ")).count(), 1);
        assert!(!text.contains("\x1b[48;5;22m"));
    }

    #[test]
    fn activity_renders_without_warning() {
        let activity: CommitActivity = [("2025-06-15", 3)].into_iter().collect();
        let mut out = Vec::new();
        let mut diag = Vec::new();
        render_activity(&activity, today(), &HeatmapRenderer::default(), &mut out, &mut diag)
            .unwrap();

        assert!(diag.is_empty());
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("\x1b[48;5;28m \x1b[0m").count(), 1);
    }
}
