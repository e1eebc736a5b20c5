use std::fmt;

use crate::models::location::format_location;
use crate::models::schedule_item::{EventType, ScheduleItem, Status};

/// How a column's filter value is compared against a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    /// Case-insensitive substring
    Text,
    /// Case-insensitive equality against a fixed option list
    Enumeration,
}

/// Columns of the schedule table, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ColumnId {
    Select,
    Id,
    Name,
    StartDate,
    EndDate,
    Status,
    EventType,
    Location,
}

impl ColumnId {
    pub const ALL: [ColumnId; 8] = [
        ColumnId::Select,
        ColumnId::Id,
        ColumnId::Name,
        ColumnId::StartDate,
        ColumnId::EndDate,
        ColumnId::Status,
        ColumnId::EventType,
        ColumnId::Location,
    ];

    /// Field key, shared with filters and patches
    pub fn key(&self) -> &'static str {
        match self {
            ColumnId::Select => "select",
            ColumnId::Id => "id",
            ColumnId::Name => "name",
            ColumnId::StartDate => "startDate",
            ColumnId::EndDate => "endDate",
            ColumnId::Status => "status",
            ColumnId::EventType => "eventType",
            ColumnId::Location => "location",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|column| column.key() == key)
    }

    pub fn header(&self) -> &'static str {
        match self {
            ColumnId::Select => "",
            ColumnId::Id => "ID",
            ColumnId::Name => "Name",
            ColumnId::StartDate => "Start",
            ColumnId::EndDate => "End",
            ColumnId::Status => "Status",
            ColumnId::EventType => "Type",
            ColumnId::Location => "Location",
        }
    }

    /// Sorting is offered on the id and date columns only. Text and choice
    /// columns keep store order.
    pub fn is_sortable(&self) -> bool {
        matches!(self, ColumnId::Id | ColumnId::StartDate | ColumnId::EndDate)
    }

    pub fn filter_kind(&self) -> Option<FilterKind> {
        match self {
            ColumnId::Name | ColumnId::Location => Some(FilterKind::Text),
            ColumnId::Status | ColumnId::EventType => Some(FilterKind::Enumeration),
            _ => None,
        }
    }

    /// Values offered for enumeration filters
    pub fn filter_options(&self) -> Vec<&'static str> {
        match self {
            ColumnId::Status => Status::ALL.iter().map(|status| status.as_str()).collect(),
            ColumnId::EventType => EventType::ALL.iter().map(|kind| kind.as_str()).collect(),
            _ => Vec::new(),
        }
    }

    pub fn hidden_by_default(&self) -> bool {
        matches!(self, ColumnId::Id)
    }

    pub fn can_hide(&self) -> bool {
        !matches!(self, ColumnId::Select)
    }

    /// Display text of this column for `item`
    pub fn cell_text(&self, item: &ScheduleItem) -> String {
        match self {
            ColumnId::Select => String::new(),
            ColumnId::Id => item.id.to_string(),
            ColumnId::Name => item.name.clone(),
            ColumnId::StartDate => item.start_date.format("%b %-d, %Y %-I:%M %p").to_string(),
            ColumnId::EndDate => item.end_date.format("%b %-d, %Y %-I:%M %p").to_string(),
            ColumnId::Status => item.status.to_string(),
            ColumnId::EventType => item.event_type.to_string(),
            ColumnId::Location => format_location(item.visible_location()),
        }
    }

    /// Whether `item` passes a filter of `value` on this column.
    ///
    /// Columns without a filter kind accept every item.
    pub fn matches(&self, item: &ScheduleItem, value: &str) -> bool {
        let needle = value.trim();
        if needle.is_empty() {
            return true;
        }
        match self.filter_kind() {
            Some(FilterKind::Text) => self
                .cell_text(item)
                .to_lowercase()
                .contains(&needle.to_lowercase()),
            Some(FilterKind::Enumeration) => self.cell_text(item).eq_ignore_ascii_case(needle),
            None => true,
        }
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::location::Location;
    use chrono::{Local, TimeZone};
    use test_case::test_case;

    fn item() -> ScheduleItem {
        let start = Local.with_ymd_and_hms(2025, 10, 6, 9, 0, 0).unwrap();
        ScheduleItem {
            id: 7,
            name: "roof repair".to_string(),
            start_date: start,
            end_date: start + chrono::Duration::hours(3),
            status: Status::InProgress,
            event_type: EventType::Job,
            has_location: true,
            location: Some(Location::new("12 Oak St", "Springfield", "il", "62704")),
            description: None,
            notes: None,
            bid_id: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_keys_round_trip() {
        for column in ColumnId::ALL {
            assert_eq!(ColumnId::from_key(column.key()), Some(column));
        }
        assert_eq!(ColumnId::from_key("color"), None);
    }

    #[test_case(ColumnId::Name, "ROOF", true; "name substring ignores case")]
    #[test_case(ColumnId::Name, "gutter", false; "name substring miss")]
    #[test_case(ColumnId::Status, "In-Progress", true; "status exact ignores case")]
    #[test_case(ColumnId::Status, "in", false; "status is not substring")]
    #[test_case(ColumnId::EventType, "job", true; "event type exact")]
    #[test_case(ColumnId::Location, "springfield", true; "location substring")]
    #[test_case(ColumnId::StartDate, "anything", true; "unfiltered column accepts")]
    #[test_case(ColumnId::Name, "  ", true; "blank filter accepts")]
    fn test_matches(column: ColumnId, value: &str, expected: bool) {
        assert_eq!(column.matches(&item(), value), expected);
    }

    #[test]
    fn test_sortable_columns() {
        let sortable: Vec<ColumnId> = ColumnId::ALL
            .into_iter()
            .filter(|column| column.is_sortable())
            .collect();
        assert_eq!(
            sortable,
            vec![ColumnId::Id, ColumnId::StartDate, ColumnId::EndDate]
        );
    }

    #[test]
    fn test_filter_options() {
        assert_eq!(ColumnId::EventType.filter_options().len(), 4);
        assert!(ColumnId::Status.filter_options().contains(&"in-progress"));
        assert!(ColumnId::Name.filter_options().is_empty());
    }

    #[test]
    fn test_location_cell_uses_formatter() {
        assert_eq!(
            ColumnId::Location.cell_text(&item()),
            "12 Oak St, Springfield, IL 62704"
        );
    }
}
