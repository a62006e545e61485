use crate::error::{ContribError, Result};
use crate::model::CommitActivity;
use crate::util::shell_quote;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::ffi::OsString;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::Duration;

/// Prefix git puts on errors it cannot recover from.
pub const FATAL_MARKER: &str = "fatal:";

const SINCE: &str = "1 year ago";

/// `git log` query yielding one local `YYYY-MM-DD` line per commit.
#[derive(Debug, Clone)]
pub struct GitLog {
    repo: PathBuf,
}

impl GitLog {
    pub fn new<P: AsRef<Path>>(repo: P) -> Self {
        Self {
            repo: repo.as_ref().to_path_buf(),
        }
    }

    /// Arguments passed to `git`, one element per argv entry.
    pub fn args(&self) -> Vec<OsString> {
        vec![
            "-C".into(),
            self.repo.clone().into_os_string(),
            "log".into(),
            format!("--since={SINCE}").into(),
            "--date=short-local".into(),
            "--pretty=format:%ad".into(),
        ]
    }

    /// Shell-quoted rendering of the invocation, for logs only.
    pub fn command_line(&self) -> String {
        let mut line = String::from("git");
        for arg in self.args() {
            line.push(' ');
            line.push_str(&shell_quote(&arg.to_string_lossy()));
        }
        line
    }

    /// Run git to completion and capture both output streams.
    pub fn run(&self) -> Result<LogOutput> {
        tracing::debug!(command = %self.command_line(), "running git log");

        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message("Reading commit history...");
        pb.enable_steady_tick(Duration::from_millis(100));

        // output() waits on the child and closes its pipes on every path.
        let result = Command::new("git")
            .args(self.args())
            .stdin(Stdio::null())
            .output();
        pb.finish_and_clear();

        let output = result?;
        tracing::debug!(status = %output.status, "git log finished");

        Ok(LogOutput::new(
            String::from_utf8_lossy(&output.stdout).into_owned(),
            String::from_utf8_lossy(&output.stderr).into_owned(),
            output.status.success(),
        ))
    }
}

/// Captured result of one git invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogOutput {
    pub stdout: String,
    pub stderr: String,
    pub success: bool,
}

impl LogOutput {
    pub fn new(stdout: impl Into<String>, stderr: impl Into<String>, success: bool) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: stderr.into(),
            success,
        }
    }

    /// Verbatim text of whichever stream carries a fatal marker.
    ///
    /// The exit status is not consulted; only the marker invalidates output.
    pub fn fatal_message(&self) -> Option<&str> {
        if self.stdout.starts_with(FATAL_MARKER) {
            return Some(&self.stdout);
        }
        if self
            .stderr
            .lines()
            .any(|line| line.starts_with(FATAL_MARKER))
        {
            return Some(&self.stderr);
        }
        None
    }

    pub fn into_activity(self) -> Result<CommitActivity> {
        if let Some(message) = self.fatal_message() {
            return Err(ContribError::Repository(message.to_string()));
        }
        if !self.success {
            tracing::debug!("git exited unsuccessfully without a fatal marker, keeping its output");
        }
        Ok(parse_activity(&self.stdout))
    }
}

/// Count commits per `YYYY-MM-DD` line, skipping blank lines.
pub fn parse_activity(text: &str) -> CommitActivity {
    let mut activity = CommitActivity::new();
    for line in text.lines() {
        let day = line.trim_end_matches('\r');
        if !day.is_empty() {
            activity.record(day);
        }
    }
    activity
}

/// Run the history query against `repo` and aggregate commits per day.
pub fn collect_activity(repo: &Path) -> Result<CommitActivity> {
    let activity = GitLog::new(repo).run()?.into_activity()?;
    tracing::debug!(
        days = activity.len(),
        commits = activity.total_commits(),
        "parsed commit history"
    );
    Ok(activity)
}

/// Degrade a collector failure to an empty mapping after reporting it on `diag`.
///
/// Only a failed write to `diag` is returned as an error.
pub fn collect_or_report<W: Write>(
    result: Result<CommitActivity>,
    diag: &mut W,
) -> io::Result<CommitActivity> {
    match result {
        Ok(activity) => return Ok(activity),
        Err(ContribError::Repository(message)) => {
            diag.write_all(message.as_bytes())?;
            if !message.ends_with('\n') {
                writeln!(diag)?;
            }
        }
        Err(err) => writeln!(diag, "{} {err}", style("Error:").red().bold())?,
    }
    Ok(CommitActivity::new())
}
