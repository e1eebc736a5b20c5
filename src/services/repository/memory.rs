use std::cell::{Cell, RefCell};
use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use chrono::{DateTime, Local};

use super::{ApiResponse, ScheduleRepository};
use crate::models::location::parse_location;
use crate::models::schedule_item::{FieldValue, NewScheduleItem, ScheduleItem};

/// Non-persistent schedule service used by tests, benchmarks and the demo.
///
/// Applies patches to the typed fields the way the real service does and
/// can be told to fail its next call.
#[derive(Debug)]
pub struct InMemoryScheduleRepository {
    items: RefCell<Vec<ScheduleItem>>,
    next_id: Cell<i64>,
    fail_next: RefCell<Option<String>>,
    fetch_count: Cell<usize>,
}

impl InMemoryScheduleRepository {
    pub fn new() -> Self {
        Self::with_items(Vec::new())
    }

    pub fn with_items(items: Vec<ScheduleItem>) -> Self {
        let next_id = items.iter().map(|item| item.id).max().unwrap_or(0) + 1;
        Self {
            items: RefCell::new(items),
            next_id: Cell::new(next_id),
            fail_next: RefCell::new(None),
            fetch_count: Cell::new(0),
        }
    }

    /// Seed from a JSON array of schedule items
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read snapshot {:?}", path))?;
        let items: Vec<ScheduleItem> = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse snapshot {:?}", path))?;
        log::info!("Loaded {} schedule item(s) from {:?}", items.len(), path);
        Ok(Self::with_items(items))
    }

    /// Make the next call fail with `message`
    pub fn fail_next(&self, message: impl Into<String>) {
        *self.fail_next.borrow_mut() = Some(message.into());
    }

    pub fn fetch_count(&self) -> usize {
        self.fetch_count.get()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    fn check_failure(&self) -> Result<()> {
        match self.fail_next.borrow_mut().take() {
            Some(message) => Err(anyhow!(message)),
            None => Ok(()),
        }
    }
}

impl Default for InMemoryScheduleRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn date_value(field_id: &str, value: &FieldValue) -> Result<DateTime<Local>> {
    match value {
        FieldValue::Date(date) => Ok(*date),
        FieldValue::Text(text) => DateTime::parse_from_rfc3339(text)
            .map(|date| date.with_timezone(&Local))
            .with_context(|| format!("Invalid date for {}: {}", field_id, text)),
        FieldValue::Cleared => bail!("{} cannot be cleared", field_id),
    }
}

fn text_value<'v>(field_id: &str, value: &'v FieldValue) -> Result<&'v str> {
    value
        .as_text()
        .ok_or_else(|| anyhow!("{} expects a text value", field_id))
}

fn optional_text(field_id: &str, value: &FieldValue) -> Result<Option<String>> {
    match value {
        FieldValue::Cleared => Ok(None),
        other => Ok(Some(text_value(field_id, other)?.to_string())),
    }
}

fn apply_patch(item: &mut ScheduleItem, field_id: &str, value: &FieldValue) -> Result<()> {
    match field_id {
        "id" => bail!("id cannot be changed"),
        "name" => {
            let name = text_value(field_id, value)?.trim();
            if name.is_empty() {
                bail!("Event must have a name");
            }
            item.name = name.to_string();
        }
        "startDate" => {
            let start = date_value(field_id, value)?;
            if item.end_date < start {
                bail!("Start date cannot be after end date");
            }
            item.start_date = start;
        }
        "endDate" => {
            let end = date_value(field_id, value)?;
            if end < item.start_date {
                bail!("End date cannot be before start date");
            }
            item.end_date = end;
        }
        "status" => {
            item.status = text_value(field_id, value)?
                .parse()
                .map_err(|e: String| anyhow!(e))?;
        }
        "eventType" => {
            item.event_type = text_value(field_id, value)?
                .parse()
                .map_err(|e: String| anyhow!(e))?;
        }
        "hasLocation" => {
            let flag: bool = text_value(field_id, value)?
                .parse()
                .with_context(|| format!("Invalid value for {}", field_id))?;
            if flag && item.location.is_none() {
                bail!("Location is required when hasLocation is true");
            }
            item.has_location = flag;
        }
        "location" => {
            item.location = optional_text(field_id, value)?.map(|text| parse_location(&text));
            item.has_location = item.location.is_some();
        }
        "description" => item.description = optional_text(field_id, value)?,
        "notes" => item.notes = optional_text(field_id, value)?,
        "bidId" => item.bid_id = optional_text(field_id, value)?,
        other => bail!("Unknown field: {}", other),
    }
    Ok(())
}

impl ScheduleRepository for InMemoryScheduleRepository {
    fn fetch_all(&self) -> Result<Vec<ScheduleItem>> {
        self.fetch_count.set(self.fetch_count.get() + 1);
        self.check_failure()?;

        let mut items = self.items.borrow().clone();
        items.sort_by_key(|item| item.start_date);
        Ok(items)
    }

    fn create(&self, candidate: NewScheduleItem) -> Result<ScheduleItem> {
        self.check_failure()?;
        let candidate = candidate.validate().context("Could not save, try again")?;

        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let now = Local::now();
        let item = ScheduleItem {
            id,
            name: candidate.name,
            start_date: candidate.start_date,
            end_date: candidate.end_date,
            status: candidate.status,
            event_type: candidate.event_type,
            has_location: candidate.has_location,
            location: candidate.location,
            description: candidate.description,
            notes: candidate.notes,
            bid_id: candidate.bid_id,
            created_at: Some(now),
            updated_at: Some(now),
        };

        self.items.borrow_mut().push(item.clone());
        Ok(item)
    }

    fn patch_field(
        &self,
        item_id: i64,
        field_id: String,
        value: FieldValue,
    ) -> Result<ApiResponse> {
        self.check_failure()?;

        let mut items = self.items.borrow_mut();
        let item = items
            .iter_mut()
            .find(|item| item.id == item_id)
            .ok_or_else(|| anyhow!("Schedule item with id {} not found", item_id))?;

        let mut patched = item.clone();
        apply_patch(&mut patched, &field_id, &value)?;
        patched.updated_at = Some(Local::now());
        *item = patched;

        Ok(ApiResponse::success(format!("Updated {}", field_id)))
    }

    fn delete_many(&self, item_ids: Vec<i64>) -> Result<()> {
        self.check_failure()?;

        let mut items = self.items.borrow_mut();
        if let Some(missing) = item_ids
            .iter()
            .find(|id| !items.iter().any(|item| item.id == **id))
        {
            bail!("Schedule item with id {} not found", missing);
        }

        items.retain(|item| !item_ids.contains(&item.id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::schedule_item::{EventType, Status};
    use chrono::{Duration, TimeZone};

    fn at(day: u32, hour: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 10, day, hour, 0, 0).unwrap()
    }

    fn candidate(name: &str, day: u32) -> NewScheduleItem {
        NewScheduleItem::builder()
            .name(name)
            .start(at(day, 9))
            .end(at(day, 11))
            .build()
            .unwrap()
    }

    #[test]
    fn test_create_assigns_ids() {
        let repo = InMemoryScheduleRepository::new();
        let first = repo.create(candidate("Roof job", 3)).unwrap();
        let second = repo.create(candidate("Gutter job", 4)).unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(first.name, "roof job");
        assert!(first.created_at.is_some());
    }

    #[test]
    fn test_create_rejects_invalid_candidate() {
        let repo = InMemoryScheduleRepository::new();
        assert!(repo.create(candidate("ab", 3)).is_err());
        assert!(repo.is_empty());
    }

    #[test]
    fn test_fetch_all_orders_by_start() {
        let repo = InMemoryScheduleRepository::new();
        repo.create(candidate("Later job", 9)).unwrap();
        repo.create(candidate("Early job", 2)).unwrap();

        let names: Vec<String> = repo.fetch_all().unwrap().into_iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["early job", "later job"]);
        assert_eq!(repo.fetch_count(), 1);
    }

    #[test]
    fn test_patch_status() {
        let repo = InMemoryScheduleRepository::new();
        let item = repo.create(candidate("Roof job", 3)).unwrap();

        repo.patch_field(item.id, "status".to_string(), "in-progress".into())
            .unwrap();
        let stored = repo.fetch_all().unwrap().remove(0);
        assert_eq!(stored.status, Status::InProgress);
        assert_eq!(stored.event_type, EventType::Job);
    }

    #[test]
    fn test_patch_end_before_start_is_rejected() {
        let repo = InMemoryScheduleRepository::new();
        let item = repo.create(candidate("Roof job", 3)).unwrap();

        let result = repo.patch_field(
            item.id,
            "endDate".to_string(),
            FieldValue::Date(item.start_date - Duration::hours(1)),
        );
        assert!(result.is_err());
        assert_eq!(repo.fetch_all().unwrap()[0].end_date, item.end_date);
    }

    #[test]
    fn test_patch_accepts_values_decoded_from_json() {
        let repo = InMemoryScheduleRepository::new();
        let item = repo.create(candidate("Roof job", 3)).unwrap();
        let new_end = item.end_date + Duration::hours(1);

        let notes: FieldValue = serde_json::from_str(r#""2025-10-01T09:00:00+00:00""#).unwrap();
        repo.patch_field(item.id, "notes".to_string(), notes).unwrap();

        let end_json = serde_json::to_string(&FieldValue::Date(new_end)).unwrap();
        let end: FieldValue = serde_json::from_str(&end_json).unwrap();
        repo.patch_field(item.id, "endDate".to_string(), end).unwrap();

        let stored = repo.fetch_all().unwrap().remove(0);
        assert_eq!(stored.notes.as_deref(), Some("2025-10-01T09:00:00+00:00"));
        assert_eq!(stored.end_date, new_end);
    }

    #[test]
    fn test_patch_location_text() {
        let repo = InMemoryScheduleRepository::new();
        let item = repo.create(candidate("Roof job", 3)).unwrap();

        repo.patch_field(
            item.id,
            "location".to_string(),
            "9 Pine Ave, Duluth, MN 55802".into(),
        )
        .unwrap();
        let stored = repo.fetch_all().unwrap().remove(0);
        assert!(stored.has_location);
        assert_eq!(stored.location.unwrap().city.as_deref(), Some("Duluth"));
    }

    #[test]
    fn test_patch_unknown_field_or_item() {
        let repo = InMemoryScheduleRepository::new();
        let item = repo.create(candidate("Roof job", 3)).unwrap();

        assert!(repo.patch_field(item.id, "color".to_string(), "red".into()).is_err());
        assert!(repo.patch_field(99, "name".to_string(), "x".into()).is_err());
    }

    #[test]
    fn test_delete_many_is_atomic() {
        let repo = InMemoryScheduleRepository::new();
        let a = repo.create(candidate("Roof job", 3)).unwrap();
        repo.create(candidate("Gutter job", 4)).unwrap();

        assert!(repo.delete_many(vec![a.id, 99]).is_err());
        assert_eq!(repo.len(), 2);

        repo.delete_many(vec![a.id]).unwrap();
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn test_fail_next_applies_once() {
        let repo = InMemoryScheduleRepository::new();
        repo.fail_next("Service unavailable");

        let err = repo.fetch_all().unwrap_err();
        assert_eq!(err.to_string(), "Service unavailable");
        assert!(repo.fetch_all().is_ok());
    }
}
