//! Local mirror of the schedule service's items plus the table's filter state.
//!
//! All changes go through [`ScheduleStore::dispatch`]. Items are never edited
//! in place: the only way new item data arrives is a full snapshot via
//! [`ScheduleAction::SyncFromSource`].

mod actions;

pub use actions::{RawAction, ScheduleAction, StoreError};

use std::sync::Arc;

use crate::models::filter::Filter;
use crate::models::schedule_item::ScheduleItem;

#[derive(Debug, Clone)]
pub struct ScheduleState {
    items: Arc<[ScheduleItem]>,
    filters: Vec<Filter>,
    is_hidden: bool,
    revision: u64,
}

impl Default for ScheduleState {
    fn default() -> Self {
        Self {
            items: Arc::from(Vec::new()),
            filters: Vec::new(),
            is_hidden: false,
            revision: 0,
        }
    }
}

/// Apply one action; returns whether the state changed.
pub fn reduce(state: &mut ScheduleState, action: ScheduleAction) -> bool {
    match action {
        ScheduleAction::SyncFromSource(items) => {
            if Arc::ptr_eq(&state.items, &items) {
                return false;
            }
            log::debug!(
                "Synced {} schedule item(s), revision {}",
                items.len(),
                state.revision + 1
            );
            state.items = items;
            state.revision += 1;
            true
        }
        ScheduleAction::FilterChange(filter) => {
            let before = state.filters.clone();
            state.filters.retain(|existing| existing.id != filter.id);
            state.filters.push(filter);
            state.filters != before
        }
        ScheduleAction::ClearFilter(Some(id)) => {
            let before = state.filters.len();
            state.filters.retain(|existing| existing.id != id);
            state.filters.len() != before
        }
        ScheduleAction::ClearFilter(None) => {
            let changed = !state.filters.is_empty();
            state.filters.clear();
            changed
        }
        ScheduleAction::MarkColumnsHidden => !std::mem::replace(&mut state.is_hidden, true),
        ScheduleAction::ResetHiddenFlag => std::mem::replace(&mut state.is_hidden, false),
    }
}

/// Owner of the schedule view's shared state for the lifetime of the view
#[derive(Debug, Default)]
pub struct ScheduleStore {
    state: ScheduleState,
}

impl ScheduleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dispatch(&mut self, action: ScheduleAction) -> bool {
        let kind = action.kind();
        let changed = reduce(&mut self.state, action);
        if !changed {
            log::debug!("{} left the schedule state unchanged", kind);
        }
        changed
    }

    /// Dispatch a string-tagged action; unknown kinds are refused, never ignored
    pub fn dispatch_raw(&mut self, raw: RawAction) -> Result<bool, StoreError> {
        match ScheduleAction::try_from(raw) {
            Ok(action) => Ok(self.dispatch(action)),
            Err(err) => {
                log::error!("Rejected schedule action: {}", err);
                Err(err)
            }
        }
    }

    pub fn items(&self) -> &[ScheduleItem] {
        &self.state.items
    }

    /// Shared handle to the current snapshot
    pub fn snapshot(&self) -> Arc<[ScheduleItem]> {
        Arc::clone(&self.state.items)
    }

    pub fn item(&self, id: i64) -> Option<&ScheduleItem> {
        self.state.items.iter().find(|item| item.id == id)
    }

    pub fn filters(&self) -> &[Filter] {
        &self.state.filters
    }

    pub fn filter_value(&self, id: &str) -> Option<&str> {
        self.state
            .filters
            .iter()
            .find(|filter| filter.id == id)
            .map(|filter| filter.value.as_str())
    }

    pub fn is_hidden(&self) -> bool {
        self.state.is_hidden
    }

    /// Number of snapshots accepted so far
    pub fn revision(&self) -> u64 {
        self.state.revision
    }
}
