//! Turns user edits into targeted calls on the schedule service.
//!
//! Edits are optimistic in the view only: the input shows the new value while
//! the call is in flight, but the store is never patched locally. Every call
//! settles with a full re-fetch, which is the sole way changes reach the
//! store.

use anyhow::Context;
use thiserror::Error;

use crate::models::schedule_item::{FieldValue, NewScheduleItem, ScheduleItem, ValidationError};
use crate::services::notification::NotificationCenter;
use crate::services::repository::{ApiResponse, ScheduleRepository};
use crate::services::schedule_store::{ScheduleAction, ScheduleStore};
use crate::services::table_view::RowSelection;

/// Fields the service assigns and the client may not edit
const IMMUTABLE_FIELDS: [&str; 3] = ["id", "createdAt", "updatedAt"];

#[derive(Debug, Error)]
pub enum EditError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Field {0} cannot be edited")]
    ImmutableField(String),
    #[error(transparent)]
    Repository(anyhow::Error),
}

/// Coordinates one edit between the view, the store and the schedule service
pub struct EditCoordinator<'a, R: ScheduleRepository> {
    repository: &'a R,
    store: &'a mut ScheduleStore,
    notifications: &'a mut NotificationCenter,
}

impl<'a, R: ScheduleRepository> EditCoordinator<'a, R> {
    pub fn new(
        repository: &'a R,
        store: &'a mut ScheduleStore,
        notifications: &'a mut NotificationCenter,
    ) -> Self {
        Self {
            repository,
            store,
            notifications,
        }
    }

    /// Fetch every item and replace the local mirror
    pub fn refresh(&mut self) -> Result<(), EditError> {
        let items = self
            .repository
            .fetch_all()
            .context("Failed to load schedule")
            .map_err(|err| self.report(err))?;

        log::info!("Loaded {} schedule item(s)", items.len());
        self.store.dispatch(ScheduleAction::sync(items));
        Ok(())
    }

    /// Commit a single-field edit of one item
    pub fn edit_field(
        &mut self,
        item_id: i64,
        field_id: &str,
        value: FieldValue,
    ) -> Result<ApiResponse, EditError> {
        if IMMUTABLE_FIELDS.contains(&field_id) {
            log::warn!("Refused edit of {} on item {}", field_id, item_id);
            return Err(EditError::ImmutableField(field_id.to_string()));
        }

        let result = self
            .repository
            .patch_field(item_id, field_id.to_string(), value)
            .with_context(|| format!("Failed to update {} of item {}", field_id, item_id));
        self.settle();

        let response = result.map_err(|err| self.report(err))?;
        log::info!("Updated {} of item {}", field_id, item_id);
        self.notifications.success("Item updated");
        Ok(response)
    }

    /// Delete a batch of items and drop them from the view's selection
    pub fn delete_items(
        &mut self,
        item_ids: &[i64],
        selection: &mut RowSelection,
    ) -> Result<(), EditError> {
        if item_ids.is_empty() {
            log::debug!("Nothing selected to delete");
            return Ok(());
        }

        let result = self
            .repository
            .delete_many(item_ids.to_vec())
            .with_context(|| format!("Failed to delete {} item(s)", item_ids.len()));
        self.settle();

        result.map_err(|err| self.report(err))?;
        selection.remove(item_ids);
        log::info!("Deleted {} item(s)", item_ids.len());
        self.notifications.success("Items deleted");
        Ok(())
    }

    /// Validate and create a new item.
    ///
    /// A candidate that fails validation never reaches the service; the caller
    /// decides whether to reset the form or prompt again.
    pub fn create_item(&mut self, candidate: NewScheduleItem) -> Result<ScheduleItem, EditError> {
        let candidate = candidate.validate().map_err(|err| {
            log::warn!("Rejected new item: {}", err);
            err
        })?;

        let result = self
            .repository
            .create(candidate)
            .context("Failed to create item");
        self.settle();

        let item = result.map_err(|err| self.report(err))?;
        log::info!("Created item {}", item.id);
        self.notifications.success("Event added!");
        Ok(item)
    }

    /// Re-sync after a call, whatever its outcome; a failed fetch keeps the
    /// previous snapshot.
    fn settle(&mut self) {
        match self.repository.fetch_all() {
            Ok(items) => {
                self.store.dispatch(ScheduleAction::sync(items));
            }
            Err(err) => {
                log::error!("Failed to refresh schedule: {:#}", err);
                self.notifications
                    .error(format!("Could not refresh schedule: {}", err));
            }
        }
    }

    fn report(&mut self, err: anyhow::Error) -> EditError {
        log::error!("{:#}", err);
        self.notifications.error(format!("{:#}", err));
        EditError::Repository(err)
    }
}
