use chrono::{Months, NaiveDate};

/// Inclusive run of calendar days from one year before `end` through `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// The year ending on `today`, anchored by [`one_year_before`].
    pub fn year_ending(today: NaiveDate) -> Self {
        Self {
            start: one_year_before(today),
            end: today,
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Whole days between the two anchors: 365, or 366 across a Feb 29.
    pub fn span_days(&self) -> usize {
        (self.end - self.start).num_days() as usize
    }

    /// Days in the range, counting both ends.
    pub fn total_days(&self) -> usize {
        self.span_days() + 1
    }

    pub fn total_weeks(&self) -> usize {
        self.total_days().div_ceil(7)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Position of `date` counted from the first day, if it is in range.
    pub fn day_index(&self, date: NaiveDate) -> Option<usize> {
        self.contains(date)
            .then(|| (date - self.start).num_days() as usize)
    }

    /// Each day in order with its index, stepping by calendar day.
    pub fn days(&self) -> impl Iterator<Item = (usize, NaiveDate)> {
        self.start.iter_days().take(self.total_days()).enumerate()
    }
}

/// Same month and day one year earlier; Feb 29 falls back to Feb 28.
pub fn one_year_before(date: NaiveDate) -> NaiveDate {
    date.checked_sub_months(Months::new(12))
        .unwrap_or(NaiveDate::MIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn ordinary_year_spans_365_days() {
        let range = DateRange::year_ending(ymd(2025, 6, 15));
        assert_eq!(range.start(), ymd(2024, 6, 15));
        assert_eq!(range.span_days(), 365);
        assert_eq!(range.total_days(), 366);
        assert_eq!(range.total_weeks(), 53);
    }

    #[test]
    fn span_crossing_leap_day_is_366() {
        let range = DateRange::year_ending(ymd(2024, 6, 15));
        assert_eq!(range.span_days(), 366);
        assert_eq!(range.total_days(), 367);
        assert_eq!(range.total_weeks(), 53);

        let range = DateRange::year_ending(ymd(2025, 2, 28));
        assert_eq!(range.start(), ymd(2024, 2, 28));
        assert_eq!(range.span_days(), 366);
    }

    #[test]
    fn span_just_missing_leap_day_is_365() {
        assert_eq!(DateRange::year_ending(ymd(2024, 2, 28)).span_days(), 365);
        assert_eq!(DateRange::year_ending(ymd(2025, 3, 1)).span_days(), 365);
    }

    #[test]
    fn leap_day_anchor_clamps_to_feb_28() {
        assert_eq!(one_year_before(ymd(2024, 2, 29)), ymd(2023, 2, 28));
        let range = DateRange::year_ending(ymd(2024, 2, 29));
        assert_eq!(range.span_days(), 366);
        assert_eq!(range.total_days(), 367);
    }

    #[test]
    fn total_weeks_is_ceiling_of_days() {
        for offset in 0..800 {
            let today = ymd(2020, 1, 1) + chrono::Days::new(offset);
            let range = DateRange::year_ending(today);
            let days = range.total_days();
            assert!(days == 366 || days == 367, "{today}: {days}");
            assert_eq!(range.total_weeks(), (days + 6) / 7);
        }
    }

    #[test]
    fn days_are_contiguous_and_end_today() {
        // Spans both US and EU daylight-saving switches.
        let range = DateRange::year_ending(ymd(2025, 11, 5));
        let days: Vec<_> = range.days().collect();

        assert_eq!(days.len(), range.total_days());
        assert_eq!(days.first(), Some(&(0, range.start())));
        assert_eq!(days.last().map(|&(_, d)| d), Some(range.end()));
        for pair in days.windows(2) {
            assert_eq!(pair[0].1.succ_opt(), Some(pair[1].1));
            assert_eq!(pair[0].0 + 1, pair[1].0);
        }
    }

    #[test]
    fn day_index_matches_iteration() {
        let range = DateRange::year_ending(ymd(2025, 6, 15));
        for (index, date) in range.days() {
            assert_eq!(range.day_index(date), Some(index));
        }
        assert_eq!(range.day_index(ymd(2024, 6, 14)), None);
        assert_eq!(range.day_index(ymd(2025, 6, 16)), None);
    }
}
