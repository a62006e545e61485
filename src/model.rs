use crate::util::date_key;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Commits per calendar day, keyed by `YYYY-MM-DD`.
///
/// Days without commits are absent rather than stored as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitActivity {
    days: BTreeMap<String, u32>,
}

impl CommitActivity {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one commit on the given `YYYY-MM-DD` day.
    pub fn record(&mut self, day: &str) {
        *self.days.entry(day.to_string()).or_insert(0) += 1;
    }

    pub fn count(&self, day: &str) -> u32 {
        self.days.get(day).copied().unwrap_or(0)
    }

    pub fn count_on(&self, date: NaiveDate) -> u32 {
        self.count(&date_key(date))
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Number of distinct days with at least one commit.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn total_commits(&self) -> u64 {
        self.days.values().map(|&c| c as u64).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.days.iter().map(|(day, &count)| (day.as_str(), count))
    }
}

impl<S: AsRef<str>> FromIterator<(S, u32)> for CommitActivity {
    fn from_iter<I: IntoIterator<Item = (S, u32)>>(iter: I) -> Self {
        let mut activity = CommitActivity::new();
        for (day, count) in iter {
            if count > 0 {
                *activity.days.entry(day.as_ref().to_string()).or_insert(0) += count;
            }
        }
        activity
    }
}
