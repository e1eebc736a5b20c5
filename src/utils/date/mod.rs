// Date utility functions

use chrono::{DateTime, Datelike, Duration, Local, NaiveDate};

pub fn is_same_day(date: DateTime<Local>, day: NaiveDate) -> bool {
    date.date_naive() == day
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.day0()))
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Length of a month, without building any date outside chrono's range
pub fn month_length(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

pub fn days_in_month(date: NaiveDate) -> u32 {
    month_length(date.year(), date.month())
}

/// Length of the month before the one containing `date`
pub fn previous_month_length(date: NaiveDate) -> u32 {
    match date.month() {
        1 => month_length(date.year() - 1, 12),
        month => month_length(date.year(), month - 1),
    }
}
