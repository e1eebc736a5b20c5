// Test fixtures - reusable schedule data
// Provides consistent items across the integration tests

#![allow(dead_code)]

use chrono::{DateTime, Local, TimeZone};
use schedule_dashboard::models::location::Location;
use schedule_dashboard::models::schedule_item::{EventType, ScheduleItem, Status};

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// October 2025 at the given day and hour, local time
    pub fn oct_2025(day: u32, hour: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 10, day, hour, 0, 0).unwrap()
    }
}

/// Sample schedule items
pub mod items {
    use super::*;

    pub fn item(id: i64, name: &str, day: u32, status: Status, event_type: EventType) -> ScheduleItem {
        ScheduleItem {
            id,
            name: name.to_string(),
            start_date: dates::oct_2025(day, 9),
            end_date: dates::oct_2025(day, 12),
            status,
            event_type,
            has_location: false,
            location: None,
            description: None,
            notes: None,
            bid_id: None,
            created_at: None,
            updated_at: None,
        }
    }

    pub fn located(mut item: ScheduleItem, location: Location) -> ScheduleItem {
        item.has_location = true;
        item.location = Some(location);
        item
    }

    /// A dozen items across the first half of October 2025
    pub fn october_schedule() -> Vec<ScheduleItem> {
        vec![
            located(
                item(1, "roof repair", 1, Status::Confirmed, EventType::Job),
                Location::new("12 Oak St", "Springfield", "IL", "62704"),
            ),
            item(2, "crew meeting", 2, Status::Pending, EventType::Meeting),
            item(3, "gutter cleaning", 3, Status::Pending, EventType::Job),
            item(4, "supplier visit", 3, Status::Completed, EventType::Appointment),
            located(
                item(5, "roof inspection", 6, Status::Pending, EventType::Job),
                Location::from_formatted("Old mill road, past the bridge"),
            ),
            item(6, "open house", 7, Status::Cancelled, EventType::Event),
            item(7, "deck stain", 8, Status::InProgress, EventType::Job),
            item(8, "estimate review", 9, Status::Pending, EventType::Meeting),
            item(9, "siding patch", 10, Status::Pending, EventType::Job),
            item(10, "client call", 13, Status::Confirmed, EventType::Appointment),
            item(11, "roof tarp", 14, Status::Pending, EventType::Job),
            item(12, "safety training", 15, Status::Confirmed, EventType::Event),
        ]
    }
}
