use contracts::domain::a001_young_spec::{validate_record, ValidationErrors, YoungSpecRecord};
use contracts::shared::NetworkError;
use leptos::prelude::*;

use crate::shared::list_utils::{filter_list, sort_list, Searchable, Sortable};

#[derive(Clone, Debug)]
pub struct YoungSpecListState {
    pub search_query: String,
    /// Empty means server order
    pub sort_field: String,
    pub sort_ascending: bool,
    pub show_id: bool,
}

impl Default for YoungSpecListState {
    fn default() -> Self {
        Self {
            search_query: String::new(),
            sort_field: String::new(),
            sort_ascending: true,
            show_id: false,
        }
    }
}

impl YoungSpecListState {
    /// Click on a sortable header
    pub fn toggle_sort(&mut self, field: &str) {
        if self.sort_field == field {
            self.sort_ascending = !self.sort_ascending;
        } else {
            self.sort_field = field.to_string();
            self.sort_ascending = true;
        }
    }

    /// Rows to render: search first, then sort
    pub fn visible_rows<T>(&self, items: Vec<T>) -> Vec<T>
    where
        T: Searchable + Sortable,
    {
        let mut rows = filter_list(items, &self.search_query);
        sort_list(&mut rows, &self.sort_field, self.sort_ascending);
        rows
    }
}

pub fn create_state() -> RwSignal<YoungSpecListState> {
    RwSignal::new(YoungSpecListState::default())
}

/// Create/edit dialog. Creating and editing at once is unrepresentable.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum RecordModal {
    #[default]
    Closed,
    Creating,
    Editing(YoungSpecRecord),
}

impl RecordModal {
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Closed => "",
            Self::Creating => "Создать пользователя",
            Self::Editing(_) => "Редактировать",
        }
    }

    /// Values the dialog inputs start from
    pub fn initial_values(&self) -> YoungSpecRecord {
        match self {
            Self::Editing(record) => record.clone(),
            Self::Closed | Self::Creating => YoungSpecRecord::default(),
        }
    }

    /// What pressing "Сохранить" with `values` should do.
    /// `None` when no dialog is open.
    pub fn save_outcome(&self, values: YoungSpecRecord) -> Option<SaveOutcome> {
        if !self.is_open() {
            return None;
        }
        let errors = validate_record(&values);
        if errors.has_errors() {
            return Some(SaveOutcome::Invalid(errors));
        }
        Some(match self {
            Self::Editing(_) => SaveOutcome::Update(values),
            Self::Closed | Self::Creating => SaveOutcome::Create(values),
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SaveOutcome {
    /// Keep the dialog open and show these messages
    Invalid(ValidationErrors),
    Create(YoungSpecRecord),
    Update(YoungSpecRecord),
}

/// Which loading indicator the page shows for the list query
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchIndicator {
    Hidden,
    /// First load, nothing cached yet: spinner row inside the table
    InitialLoad,
    /// Refetch over cached rows: spinner above the table
    Refresh,
}

pub fn fetch_indicator(is_loading: bool, is_fetching: bool, is_error: bool) -> FetchIndicator {
    if is_error || !is_fetching {
        FetchIndicator::Hidden
    } else if is_loading {
        FetchIndicator::InitialLoad
    } else {
        FetchIndicator::Refresh
    }
}

/// Whether the dialog closes once a save settles. A cancelled save leaves
/// whatever dialog is open now alone.
pub fn closes_after_save<T>(result: &Result<T, NetworkError>) -> bool {
    !matches!(result, Err(e) if e.is_aborted())
}
