// Property-based tests for month grids and address parsing
// Checks the layout invariants over arbitrary dates and free-form input

use chrono::{Datelike, NaiveDate, Weekday};
use proptest::prelude::*;
use schedule_dashboard::models::location::{format_location, parse_location, Location};
use schedule_dashboard::models::settings::GridPadding;
use schedule_dashboard::services::calendar_grid::{compute_grid, compute_grid_with, DayKind};

fn any_date() -> impl Strategy<Value = NaiveDate> {
    (1900..2200i32, 1..=12u32, 1..=31u32).prop_filter_map("valid date", |(y, m, d)| {
        NaiveDate::from_ymd_opt(y, m, d)
    })
}

proptest! {
    /// Property: the grid is whole weeks and shows every day of the month
    #[test]
    fn prop_grid_is_whole_weeks_covering_month(day in any_date()) {
        let grid = compute_grid(day);

        prop_assert_eq!(grid.cell_count % 7, 0);
        prop_assert!(grid.cell_count >= grid.days_in_month + grid.offset);
        prop_assert!([28, 35, 42].contains(&grid.cell_count));
    }

    /// Property: index 0 is always a Sunday and the 1st sits at `offset`
    #[test]
    fn prop_grid_starts_on_sunday(day in any_date()) {
        let grid = compute_grid(day);

        prop_assert_eq!(grid.date_for_index(0).map(|d| d.weekday()), Some(Weekday::Sun));
        prop_assert_eq!(grid.date_for_index(grid.offset), Some(grid.first_day));
        if grid.first_day.weekday() == Weekday::Sun {
            prop_assert_eq!(grid.offset, 0);
            prop_assert_eq!(grid.offset_start, 0);
        } else {
            prop_assert_eq!(Some(grid.offset_start), grid.date_for_index(0).map(|d| d.day()));
        }
    }

    /// Property: positional day numbers agree with real dates
    #[test]
    fn prop_date_numbers_match_dates(day in any_date()) {
        let grid = compute_grid(day);
        for index in grid.days() {
            prop_assert_eq!(
                Some(grid.date_number(index)),
                grid.date_for_index(index).map(|d| d.day())
            );
        }
    }

    /// Property: classification splits the grid into past, current, future runs
    #[test]
    fn prop_classification_is_ordered(day in any_date()) {
        let grid = compute_grid(day);
        let today = grid.first_day;
        let kinds: Vec<DayKind> = grid.days().map(|index| grid.classify(index, today)).collect();

        let past = kinds.iter().take_while(|kind| **kind == DayKind::Past).count();
        prop_assert_eq!(past as u32, grid.offset);
        prop_assert_eq!(kinds[past], DayKind::Today);
        let current = kinds.iter().filter(|kind| **kind == DayKind::Current).count();
        prop_assert_eq!(current as u32 + 1, grid.days_in_month);
    }

    /// Property: truncated grids never exceed five weeks
    #[test]
    fn prop_truncate_caps_at_five_weeks(day in any_date()) {
        let grid = compute_grid_with(day, GridPadding::Truncate);
        prop_assert!(grid.cell_count <= 35);
        prop_assert_eq!(grid.cell_count % 7, 0);
    }

    /// Property: parsing never fails and keeps the input as display text
    #[test]
    fn prop_parse_location_keeps_text(text in ".*") {
        let location = parse_location(&text);
        prop_assert_eq!(location.formatted.as_deref(), Some(text.as_str()));
        prop_assert_eq!(format_location(Some(&location)), text);
    }

    /// Property: well-formed addresses decompose into their parts
    #[test]
    fn prop_parse_location_decomposes(
        address in "[0-9]{1,4} [A-Za-z]{3,10} St",
        city in "[A-Za-z]{3,12}",
        state in "[A-Z]{2}",
        zip in "[0-9]{5}",
    ) {
        let text = format!("{}, {}, {} {}", address, city, state, zip);
        let location = parse_location(&text);

        prop_assert_eq!(location.address, Some(address));
        prop_assert_eq!(location.city, Some(city));
        prop_assert_eq!(location.state, Some(state));
        prop_assert_eq!(location.zip, Some(zip));
    }

    /// Property: an explicit formatted string always wins
    #[test]
    fn prop_formatted_wins(formatted in "[a-z ]{1,30}") {
        let location = Location::new("1 Main St", "Town", "TX", "75001").with_formatted(formatted.clone());
        prop_assert_eq!(format_location(Some(&location)), formatted);
    }
}
