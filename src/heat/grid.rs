use super::level::IntensityLevel;
use super::range::DateRange;
use crate::model::CommitActivity;
use chrono::{Datelike, NaiveDate};

pub const DAYS_PER_WEEK: usize = 7;

/// Seven weekday rows (Sunday first) by one column per week of the range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: [Vec<IntensityLevel>; DAYS_PER_WEEK],
}

impl Grid {
    pub fn new(weeks: usize) -> Self {
        Self {
            rows: std::array::from_fn(|_| vec![IntensityLevel::NONE; weeks]),
        }
    }

    pub fn weeks(&self) -> usize {
        self.rows[0].len()
    }

    pub fn get(&self, weekday: usize, week: usize) -> Option<IntensityLevel> {
        self.rows.get(weekday)?.get(week).copied()
    }

    pub fn set(&mut self, weekday: usize, week: usize, level: IntensityLevel) {
        if let Some(cell) = self.rows.get_mut(weekday).and_then(|row| row.get_mut(week)) {
            *cell = level;
        }
    }

    pub fn row(&self, weekday: usize) -> &[IntensityLevel] {
        &self.rows[weekday]
    }

    pub fn cells(&self) -> impl Iterator<Item = IntensityLevel> + '_ {
        self.rows.iter().flat_map(|row| row.iter().copied())
    }
}

/// Month abbreviation anchored above a week column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthLabel {
    pub week: usize,
    pub name: String,
}

impl MonthLabel {
    pub fn new(week: usize, name: impl Into<String>) -> Self {
        Self {
            week,
            name: name.into(),
        }
    }
}

/// Grid cell for the `day_index`-th day of a range that lands on `date`.
pub fn cell_position(date: NaiveDate, day_index: usize) -> (usize, usize) {
    (
        date.weekday().num_days_from_sunday() as usize,
        day_index / DAYS_PER_WEEK,
    )
}

/// Laid-out heatmap for one date range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heatmap {
    pub range: DateRange,
    pub grid: Grid,
    pub labels: Vec<MonthLabel>,
}

impl Heatmap {
    /// Walk `range` once, classifying each day and recording month starts.
    pub fn build(activity: &CommitActivity, range: DateRange) -> Self {
        let mut grid = Grid::new(range.total_weeks());
        let mut labels = Vec::new();
        let mut last_month = None;

        for (day_index, date) in range.days() {
            let level = IntensityLevel::from_count(activity.count_on(date));
            let (weekday, week) = cell_position(date, day_index);
            grid.set(weekday, week, level);

            if date.day() <= 7 && last_month != Some(date.month()) {
                labels.push(MonthLabel::new(week, date.format("%b").to_string()));
                last_month = Some(date.month());
            }
        }

        Self {
            range,
            grid,
            labels,
        }
    }

    /// Level drawn for `date`, or `None` outside the range.
    pub fn level_on(&self, date: NaiveDate) -> Option<IntensityLevel> {
        let day_index = self.range.day_index(date)?;
        let (weekday, week) = cell_position(date, day_index);
        self.grid.get(weekday, week)
    }
}
