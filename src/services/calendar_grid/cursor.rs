use chrono::{Datelike, Months, NaiveDate};

use super::{compute_grid_with, CalendarGridState};
use crate::models::settings::GridPadding;
use crate::utils::date::first_of_month;

/// Month navigation state for the calendar view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarCursor {
    base_day: NaiveDate,
    today: NaiveDate,
}

impl CalendarCursor {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            base_day: today,
            today,
        }
    }

    pub fn base_day(&self) -> NaiveDate {
        self.base_day
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn first_day_in_month(&self) -> NaiveDate {
        first_of_month(self.base_day)
    }

    /// Whether the displayed month contains today
    pub fn is_current_month(&self) -> bool {
        self.base_day.year() == self.today.year() && self.base_day.month() == self.today.month()
    }

    pub fn next_month(&mut self) {
        match self.base_day.checked_add_months(Months::new(1)) {
            Some(day) => self.base_day = day,
            None => log::warn!("Cannot move past {}", self.base_day),
        }
    }

    pub fn previous_month(&mut self) {
        match self.base_day.checked_sub_months(Months::new(1)) {
            Some(day) => self.base_day = day,
            None => log::warn!("Cannot move before {}", self.base_day),
        }
    }

    pub fn go_to_today(&mut self) {
        self.base_day = self.today;
    }

    pub fn grid(&self, padding: GridPadding) -> CalendarGridState {
        compute_grid_with(self.base_day, padding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_navigation_clamps_to_month_end() {
        let mut cursor = CalendarCursor::new(ymd(2025, 1, 31));
        cursor.next_month();
        assert_eq!(cursor.base_day(), ymd(2025, 2, 28));
        assert_eq!(cursor.first_day_in_month(), ymd(2025, 2, 1));
        assert!(!cursor.is_current_month());
    }

    #[test]
    fn test_previous_month_crosses_year() {
        let mut cursor = CalendarCursor::new(ymd(2026, 1, 15));
        cursor.previous_month();
        assert_eq!(cursor.base_day(), ymd(2025, 12, 15));
    }

    #[test]
    fn test_go_to_today() {
        let mut cursor = CalendarCursor::new(ymd(2025, 10, 15));
        cursor.next_month();
        cursor.next_month();
        cursor.go_to_today();
        assert_eq!(cursor.base_day(), ymd(2025, 10, 15));
        assert!(cursor.is_current_month());
    }

    #[test]
    fn test_grid_follows_cursor() {
        let mut cursor = CalendarCursor::new(ymd(2025, 10, 15));
        cursor.previous_month();
        let grid = cursor.grid(GridPadding::Extend);
        assert_eq!(grid.first_day, ymd(2025, 9, 1));
        assert_eq!(grid.days_in_month, 30);
    }
}
