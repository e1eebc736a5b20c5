// Schedule Dashboard
// Prints the month grid and, given a snapshot, the first page of the schedule table
//
// Usage: schedule-dashboard [YYYY-MM] [--snapshot snapshot.json]

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;

use schedule_dashboard::models::schedule_item::ScheduleItem;
use schedule_dashboard::models::settings::DashboardSettings;
use schedule_dashboard::services::calendar_grid::{
    compute_grid_with, events_for_day, CalendarGridState, DayKind,
};
use schedule_dashboard::services::edit_coordinator::EditCoordinator;
use schedule_dashboard::services::notification::NotificationCenter;
use schedule_dashboard::services::repository::InMemoryScheduleRepository;
use schedule_dashboard::services::schedule_store::ScheduleStore;
use schedule_dashboard::services::settings::SettingsService;
use schedule_dashboard::services::table_view::{TableView, TableViewState};

#[derive(Parser, Debug)]
#[command(name = "schedule-dashboard")]
#[command(about = "Print a month grid and the first page of a schedule snapshot")]
struct Args {
    /// Month to show (YYYY-MM); defaults to the current month
    #[arg(value_parser = parse_month)]
    month: Option<NaiveDate>,

    /// JSON array of schedule items to load
    #[arg(short, long)]
    snapshot: Option<PathBuf>,
}

fn parse_month(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(&format!("{}-01", value.trim()), "%Y-%m-%d")
        .map_err(|_| format!("invalid month '{}', expected YYYY-MM", value))
}

fn print_grid(grid: &CalendarGridState, items: &[ScheduleItem], today: NaiveDate) {
    println!("{}", grid.first_day.format("%B %Y"));
    println!(" Su  Mo  Tu  We  Th  Fr  Sa");

    for week in grid.weeks() {
        let line: String = week
            .map(|index| {
                let number = grid.date_number(index);
                let has_events = grid
                    .date_for_index(index)
                    .is_some_and(|date| events_for_day(items, date).next().is_some());
                let marker = if has_events {
                    '*'
                } else {
                    ' '
                };
                match grid.classify(index, today) {
                    DayKind::Today => format!("[{:>2}]", number),
                    DayKind::Current => format!(" {:>2}{}", number, marker),
                    DayKind::Past | DayKind::Future => format!(" {:>2}.", number),
                }
            })
            .collect();
        println!("{}", line);
    }
}

fn print_table(store: &ScheduleStore, state: &TableViewState) {
    let view = TableView::new(store, state);
    let columns = view.visible_columns();

    let header: Vec<&str> = columns.iter().map(|column| column.header()).collect();
    println!("{}", header.join(" | "));
    for item in view.page_rows() {
        let cells: Vec<String> = columns.iter().map(|column| column.cell_text(item)).collect();
        println!("{}", cells.join(" | "));
    }
    println!(
        "{} (page {} of {})",
        view.row_range_label(),
        state.pagination.effective_index(view.row_count()) + 1,
        view.page_count().max(1)
    );
}

fn run(args: Args, settings: &DashboardSettings) -> Result<()> {
    let today = Local::now().date_naive();
    let grid = compute_grid_with(args.month.unwrap_or(today), settings.grid_padding);

    let Some(path) = args.snapshot else {
        print_grid(&grid, &[], today);
        return Ok(());
    };

    let repository = InMemoryScheduleRepository::from_json_file(&path)?;
    let mut store = ScheduleStore::new();
    let mut notifications =
        NotificationCenter::new(Duration::from_secs(settings.notification_seconds));

    EditCoordinator::new(&repository, &mut store, &mut notifications)
        .refresh()
        .context("Failed to load schedule snapshot")?;

    print_grid(&grid, store.items(), today);
    println!();

    let state = TableViewState::new(settings);
    store.dispatch(state.hidden_flag_action());
    print_table(&store, &state);
    Ok(())
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Schedule Dashboard");

    let args = Args::parse();
    let settings = SettingsService::new().load()?;
    run(args, &settings)
}
