// Schedule item module
// Calendar-visible unit of work mirrored from the schedule service

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::location::Location;

/// Longest name accepted by the schedule service
pub const MAX_NAME_LEN: usize = 255;
/// Shortest name accepted on create
pub const MIN_NAME_LEN: usize = 3;

/// Workflow status of a schedule item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    #[default]
    Pending,
    Confirmed,
    InProgress,
    Completed,
    Cancelled,
}

impl Status {
    pub const ALL: [Status; 5] = [
        Status::Pending,
        Status::Confirmed,
        Status::InProgress,
        Status::Completed,
        Status::Cancelled,
    ];

    /// Wire name, as used in filters and patches
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Pending => "pending",
            Status::Confirmed => "confirmed",
            Status::InProgress => "in-progress",
            Status::Completed => "completed",
            Status::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Status::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown status: {}", s))
    }
}

/// Kind of work a schedule item represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    #[default]
    Job,
    Meeting,
    Event,
    Appointment,
}

impl EventType {
    pub const ALL: [EventType; 4] = [
        EventType::Job,
        EventType::Meeting,
        EventType::Event,
        EventType::Appointment,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Job => "job",
            EventType::Meeting => "meeting",
            EventType::Event => "event",
            EventType::Appointment => "appointment",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventType::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown event type: {}", s))
    }
}

/// Schedule item as held by the schedule service.
///
/// The local copy is always provisional: it is replaced wholesale on every
/// re-sync and never edited in place by the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleItem {
    pub id: i64,
    pub name: String,
    pub start_date: DateTime<Local>,
    pub end_date: DateTime<Local>,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub event_type: EventType,
    #[serde(default)]
    pub has_location: bool,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub bid_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Local>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Local>>,
}

impl ScheduleItem {
    /// Location shown for this item, honouring the `has_location` flag
    pub fn visible_location(&self) -> Option<&Location> {
        if self.has_location {
            self.location.as_ref()
        } else {
            None
        }
    }

    pub fn duration(&self) -> chrono::Duration {
        self.end_date - self.start_date
    }
}

/// Reasons a create candidate is refused before reaching the service
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Event must have a name")]
    NameTooShort,
    #[error("Event name cannot exceed 255 characters")]
    NameTooLong,
    #[error("Dates are required")]
    MissingDates,
    #[error("End date must not be before start date")]
    EndBeforeStart,
    #[error("Location is required when hasLocation is true")]
    LocationRequired,
    #[error("Address is required")]
    AddressRequired,
    #[error("City is required")]
    CityRequired,
    #[error("Enter a state abbreviation")]
    InvalidState,
    #[error("Invalid Zipcode")]
    InvalidZip,
}

/// Candidate for a new schedule item; the service assigns id and timestamps
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewScheduleItem {
    pub name: String,
    pub start_date: DateTime<Local>,
    pub end_date: DateTime<Local>,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub event_type: EventType,
    #[serde(default)]
    pub has_location: bool,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub bid_id: Option<String>,
}

impl NewScheduleItem {
    pub fn builder() -> NewScheduleItemBuilder {
        NewScheduleItemBuilder::new()
    }

    /// Check the candidate and return its normalized form.
    ///
    /// Text fields are trimmed and lowercased, the state code is uppercased,
    /// and a located candidate gets its `formatted` address filled in.
    pub fn validate(self) -> Result<NewScheduleItem, ValidationError> {
        let name = self.name.trim().to_lowercase();
        let name_len = name.chars().count();
        if name_len < MIN_NAME_LEN {
            return Err(ValidationError::NameTooShort);
        }
        if name_len > MAX_NAME_LEN {
            return Err(ValidationError::NameTooLong);
        }

        if self.end_date < self.start_date {
            return Err(ValidationError::EndBeforeStart);
        }

        let location = match (self.has_location, self.location) {
            (true, None) => return Err(ValidationError::LocationRequired),
            (true, Some(location)) => Some(normalize_location(location)?),
            (false, location) => location,
        };

        Ok(NewScheduleItem {
            name,
            start_date: self.start_date,
            end_date: self.end_date,
            status: self.status,
            event_type: self.event_type,
            has_location: self.has_location,
            location,
            description: normalize_text(self.description),
            notes: normalize_text(self.notes),
            bid_id: normalize_text(self.bid_id),
        })
    }
}

fn normalize_text(value: Option<String>) -> Option<String> {
    value
        .map(|text| text.trim().to_lowercase())
        .filter(|text| !text.is_empty())
}

fn normalize_location(location: Location) -> Result<Location, ValidationError> {
    let address = normalize_text(location.address).ok_or(ValidationError::AddressRequired)?;
    let city = normalize_text(location.city).ok_or(ValidationError::CityRequired)?;

    let state = location
        .state
        .map(|state| state.trim().to_uppercase())
        .filter(|state| state.chars().count() == 2)
        .ok_or(ValidationError::InvalidState)?;
    let zip = location
        .zip
        .map(|zip| zip.trim().to_string())
        .filter(|zip| zip.chars().count() == 5)
        .ok_or(ValidationError::InvalidZip)?;

    let formatted = format!("{}, {}, {} {}", address, city, state, zip);
    Ok(Location {
        address: Some(address),
        city: Some(city),
        state: Some(state),
        zip: Some(zip),
        formatted: Some(formatted),
    })
}

/// Builder for create candidates, mirroring the add-item form
pub struct NewScheduleItemBuilder {
    name: Option<String>,
    start_date: Option<DateTime<Local>>,
    end_date: Option<DateTime<Local>>,
    status: Status,
    event_type: EventType,
    location: Option<Location>,
    description: Option<String>,
    notes: Option<String>,
    bid_id: Option<String>,
}

impl NewScheduleItemBuilder {
    pub fn new() -> Self {
        Self {
            name: None,
            start_date: None,
            end_date: None,
            status: Status::default(),
            event_type: EventType::default(),
            location: None,
            description: None,
            notes: None,
            bid_id: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn start(mut self, start: DateTime<Local>) -> Self {
        self.start_date = Some(start);
        self
    }

    pub fn end(mut self, end: DateTime<Local>) -> Self {
        self.end_date = Some(end);
        self
    }

    pub fn status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    pub fn event_type(mut self, event_type: EventType) -> Self {
        self.event_type = event_type;
        self
    }

    /// Attach a location; this also sets `has_location`
    pub fn location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn bid_id(mut self, bid_id: impl Into<String>) -> Self {
        self.bid_id = Some(bid_id.into());
        self
    }

    /// Assemble the candidate without validating it
    pub fn build(self) -> Result<NewScheduleItem, ValidationError> {
        let (Some(start_date), Some(end_date)) = (self.start_date, self.end_date) else {
            return Err(ValidationError::MissingDates);
        };

        Ok(NewScheduleItem {
            name: self.name.unwrap_or_default(),
            start_date,
            end_date,
            status: self.status,
            event_type: self.event_type,
            has_location: self.location.is_some(),
            location: self.location,
            description: self.description,
            notes: self.notes,
            bid_id: self.bid_id,
        })
    }
}

impl Default for NewScheduleItemBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Value carried by a single-field patch.
///
/// Any editable column can be targeted, so the payload stays loosely typed at
/// this boundary and the service interprets it per field. On the wire every
/// string decodes as `Text`; date fields parse it themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Date(DateTime<Local>),
    Cleared,
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<DateTime<Local>> for FieldValue {
    fn from(value: DateTime<Local>) -> Self {
        FieldValue::Date(value)
    }
}

impl From<Option<String>> for FieldValue {
    fn from(value: Option<String>) -> Self {
        value.map(FieldValue::Text).unwrap_or(FieldValue::Cleared)
    }
}
