//! Row, column and page projection of the schedule store for a table renderer.
//!
//! The store owns items and filters; selection, pagination, sorting and
//! column visibility belong to the view and are kept in [`TableViewState`].
//! [`TableView`] is rebuilt from both whenever either changes.

mod columns;
mod pagination;
mod selection;

pub use columns::{ColumnId, FilterKind};
pub use pagination::{PaginationState, PAGE_WINDOW};
pub use selection::RowSelection;

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::models::schedule_item::ScheduleItem;
use crate::models::settings::DashboardSettings;
use crate::services::schedule_store::{ScheduleAction, ScheduleStore};

/// Active sort column and direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub column: ColumnId,
    pub descending: bool,
}

impl SortState {
    fn compare(&self, a: &ScheduleItem, b: &ScheduleItem) -> Ordering {
        let ordering = match self.column {
            ColumnId::Id => a.id.cmp(&b.id),
            ColumnId::StartDate => a.start_date.cmp(&b.start_date),
            ColumnId::EndDate => a.end_date.cmp(&b.end_date),
            _ => Ordering::Equal,
        };
        if self.descending {
            ordering.reverse()
        } else {
            ordering
        }
    }
}

/// View-owned table state
#[derive(Debug, Clone, Default)]
pub struct TableViewState {
    pub selection: RowSelection,
    pub pagination: PaginationState,
    sort: Option<SortState>,
    visibility: HashMap<ColumnId, bool>,
}

impl TableViewState {
    pub fn new(settings: &DashboardSettings) -> Self {
        Self {
            pagination: PaginationState::new(settings.page_size),
            ..Self::default()
        }
    }

    pub fn sort(&self) -> Option<SortState> {
        self.sort
    }

    /// Sort by `column`; refused for columns outside the id and date set
    pub fn sort_by(&mut self, column: ColumnId, descending: bool) -> bool {
        if !column.is_sortable() {
            log::warn!("Column {} is not sortable", column);
            return false;
        }
        self.sort = Some(SortState { column, descending });
        true
    }

    /// Cycle ascending, descending, unsorted
    pub fn toggle_sort(&mut self, column: ColumnId) -> bool {
        match self.sort {
            Some(SortState { column: current, descending: false }) if current == column => {
                self.sort_by(column, true)
            }
            Some(SortState { column: current, descending: true }) if current == column => {
                self.sort = None;
                true
            }
            _ => self.sort_by(column, false),
        }
    }

    pub fn clear_sort(&mut self) {
        self.sort = None;
    }

    pub fn is_column_visible(&self, column: ColumnId) -> bool {
        self.visibility
            .get(&column)
            .copied()
            .unwrap_or(!column.hidden_by_default())
    }

    /// Show or hide a column.
    ///
    /// Returns the store action that keeps the "show hidden columns"
    /// affordance in step, or `None` when the change was refused.
    pub fn set_column_visible(
        &mut self,
        column: ColumnId,
        visible: bool,
    ) -> Option<ScheduleAction> {
        if !visible && !column.can_hide() {
            log::warn!("Column {} cannot be hidden", column);
            return None;
        }
        self.visibility.insert(column, visible);
        Some(self.hidden_flag_action())
    }

    /// Store action matching the current visibility, for syncing the flag at mount
    pub fn hidden_flag_action(&self) -> ScheduleAction {
        if self.hidden_columns().is_empty() {
            ScheduleAction::ResetHiddenFlag
        } else {
            ScheduleAction::MarkColumnsHidden
        }
    }

    pub fn hidden_columns(&self) -> Vec<ColumnId> {
        ColumnId::ALL
            .into_iter()
            .filter(|column| column.can_hide() && !self.is_column_visible(*column))
            .collect()
    }

    pub fn visible_columns(&self) -> Vec<ColumnId> {
        ColumnId::ALL
            .into_iter()
            .filter(|column| self.is_column_visible(*column))
            .collect()
    }
}

/// Derived table for one render
#[derive(Debug)]
pub struct TableView<'a> {
    rows: Vec<&'a ScheduleItem>,
    state: &'a TableViewState,
    show_hidden_affordance: bool,
}

impl<'a> TableView<'a> {
    pub fn new(store: &'a ScheduleStore, state: &'a TableViewState) -> Self {
        let mut active = Vec::new();
        for filter in store.filters().iter().filter(|filter| !filter.is_blank()) {
            match ColumnId::from_key(&filter.id) {
                Some(column) if column.filter_kind().is_some() => {
                    active.push((column, filter.value.as_str()))
                }
                _ => log::warn!("Ignoring filter on unknown column {}", filter.id),
            }
        }

        let mut rows: Vec<&ScheduleItem> = store
            .items()
            .iter()
            .filter(|item| active.iter().all(|(column, value)| column.matches(item, value)))
            .collect();

        if let Some(sort) = state.sort {
            rows.sort_by(|a, b| sort.compare(a, b));
        }

        Self {
            rows,
            state,
            show_hidden_affordance: store.is_hidden(),
        }
    }

    /// Every row passing the filters, in display order
    pub fn rows(&self) -> &[&'a ScheduleItem] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn page_rows(&self) -> &[&'a ScheduleItem] {
        &self.rows[self.state.pagination.row_range(self.rows.len())]
    }

    /// Stable keys of the rows on the current page
    pub fn row_keys(&self) -> Vec<i64> {
        self.page_rows().iter().map(|item| item.id).collect()
    }

    pub fn is_selected(&self, id: i64) -> bool {
        self.state.selection.is_selected(id)
    }

    pub fn all_rows_selected(&self) -> bool {
        !self.rows.is_empty() && self.rows.iter().all(|item| self.is_selected(item.id))
    }

    pub fn visible_columns(&self) -> Vec<ColumnId> {
        self.state.visible_columns()
    }

    pub fn hidden_columns(&self) -> Vec<ColumnId> {
        self.state.hidden_columns()
    }

    pub fn show_hidden_affordance(&self) -> bool {
        self.show_hidden_affordance
    }

    pub fn page_count(&self) -> usize {
        self.state.pagination.page_count(self.rows.len())
    }

    pub fn page_window(&self) -> Vec<usize> {
        self.state.pagination.page_window(self.rows.len(), PAGE_WINDOW)
    }

    pub fn row_range_label(&self) -> String {
        self.state.pagination.row_range_label(self.rows.len())
    }
}
