//! Month grid layout.
//!
//! A month is laid out as whole Sunday-first weeks. Cells are addressed by a
//! flat index; their classification and displayed day number are derived from
//! the index alone, so no per-cell date objects are built while rendering.

mod cursor;

pub use cursor::CalendarCursor;

use std::ops::Range;

use chrono::{Datelike, Duration, NaiveDate};

use crate::models::schedule_item::ScheduleItem;
use crate::models::settings::GridPadding;
use crate::utils::date::{days_in_month, first_of_month, is_same_day, previous_month_length};

const DAYS_PER_WEEK: u32 = 7;
const FOUR_WEEKS: u32 = 28;
const FIVE_WEEKS: u32 = 35;
const SIX_WEEKS: u32 = 42;

/// Where a grid cell sits relative to the displayed month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayKind {
    /// Trailing day of the previous month
    Past,
    Current,
    /// Current-month cell that is today's date
    Today,
    /// Leading day of the following month
    Future,
}

/// Layout metadata for one month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarGridState {
    /// First day of the displayed month
    pub first_day: NaiveDate,
    /// Day-of-month of the Sunday the grid starts on, 0 when the 1st is a Sunday
    pub offset_start: u32,
    /// Number of leading previous-month cells
    pub offset: u32,
    pub days_in_month: u32,
    /// Total cells; always 28, 35 or 42
    pub cell_count: u32,
}

/// Grid for the month containing `reference_day`, six-week months extended
pub fn compute_grid(reference_day: NaiveDate) -> CalendarGridState {
    compute_grid_with(reference_day, GridPadding::Extend)
}

pub fn compute_grid_with(reference_day: NaiveDate, padding: GridPadding) -> CalendarGridState {
    let first_day = first_of_month(reference_day);

    // Leading cells run from the preceding Sunday; derived from month lengths
    // so the first and last months chrono can represent still lay out.
    let offset = first_day.weekday().num_days_from_sunday();
    let offset_start = match offset {
        0 => 0,
        _ => previous_month_length(first_day) - offset + 1,
    };

    let days_in_month = days_in_month(reference_day);
    let used = days_in_month + offset;
    let cell_count = match (used, padding) {
        (FOUR_WEEKS | FIVE_WEEKS, _) => used,
        (_, _) if used < FIVE_WEEKS => FIVE_WEEKS,
        (_, GridPadding::Extend) => SIX_WEEKS,
        (_, GridPadding::Truncate) => {
            log::debug!(
                "Truncating {} grid to five weeks, {} day(s) hidden",
                first_day.format("%B %Y"),
                used - FIVE_WEEKS
            );
            FIVE_WEEKS
        }
    };

    CalendarGridState {
        first_day,
        offset_start,
        offset,
        days_in_month,
        cell_count,
    }
}

impl CalendarGridState {
    /// Flat cell index range driving cell generation
    pub fn days(&self) -> Range<u32> {
        0..self.cell_count
    }

    pub fn week_count(&self) -> u32 {
        self.cell_count / DAYS_PER_WEEK
    }

    /// Index ranges for each grid row
    pub fn weeks(&self) -> impl Iterator<Item = Range<u32>> {
        (0..self.week_count()).map(|week| week * DAYS_PER_WEEK..(week + 1) * DAYS_PER_WEEK)
    }

    fn check_index(&self, index: u32) {
        assert!(
            index < self.cell_count,
            "cell index {} out of range for a {}-cell grid",
            index,
            self.cell_count
        );
    }

    /// Classify a cell by position; `today` only matters for current-month cells
    pub fn classify(&self, index: u32, today: NaiveDate) -> DayKind {
        self.check_index(index);

        if index < self.offset {
            DayKind::Past
        } else if index < self.offset + self.days_in_month {
            if self.date_for_index(index) == Some(today) {
                DayKind::Today
            } else {
                DayKind::Current
            }
        } else {
            DayKind::Future
        }
    }

    /// Day-of-month printed in a cell
    pub fn date_number(&self, index: u32) -> u32 {
        self.check_index(index);

        if index < self.offset {
            self.offset_start + index
        } else if index < self.offset + self.days_in_month {
            index - self.offset + 1
        } else {
            index + 1 - (self.days_in_month + self.offset)
        }
    }

    /// Calendar date of a cell, for looking up its items.
    ///
    /// `None` only for spill-over cells beyond the dates chrono can represent.
    pub fn date_for_index(&self, index: u32) -> Option<NaiveDate> {
        self.check_index(index);
        self.first_day
            .checked_add_signed(Duration::days(i64::from(index) - i64::from(self.offset)))
    }

    /// Index of `date` if it falls inside the grid
    pub fn index_of(&self, date: NaiveDate) -> Option<u32> {
        let from_first = date.signed_duration_since(self.first_day).num_days();
        let index = from_first + i64::from(self.offset);
        (0..i64::from(self.cell_count))
            .contains(&index)
            .then_some(index as u32)
    }
}

/// Items that start on `day` (local time), in snapshot order
pub fn events_for_day(
    items: &[ScheduleItem],
    day: NaiveDate,
) -> impl Iterator<Item = &ScheduleItem> {
    items
        .iter()
        .filter(move |item| is_same_day(item.start_date, day))
}
