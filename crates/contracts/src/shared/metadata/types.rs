//! Core metadata types for collections and columns
//!
//! All types use 'static lifetimes for zero-cost compile-time constants.

// ============================================================================
// Entity-level metadata
// ============================================================================

/// Metadata for an entity collection served by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityMetadataInfo {
    /// Path segment of the collection on the backend; also the cache key
    pub collection_name: &'static str,
    pub ui: EntityUiMetadata,
}

/// UI metadata for entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityUiMetadata {
    pub list_name: &'static str,
}

// ============================================================================
// Column-level metadata
// ============================================================================

/// Metadata for a single grid column bound to a record field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMetadata {
    /// Backend field name
    pub name: &'static str,
    pub ui: ColumnUiMetadata,
    pub editable: bool,
    pub required: bool,
    /// Key in the validation map whose message is shown under this column's input
    pub error_key: Option<&'static str>,
}

impl ColumnMetadata {
    pub fn header(&self) -> &'static str {
        self.ui.label
    }

    pub fn visible_by_default(&self) -> bool {
        !self.ui.hidden_by_default
    }
}

/// UI metadata for a column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnUiMetadata {
    pub label: &'static str,
    pub column_width: Option<u32>,
    pub hidden_by_default: bool,
}

/// Find column metadata by field name
pub fn find_column(
    columns: &'static [ColumnMetadata],
    name: &str,
) -> Option<&'static ColumnMetadata> {
    columns.iter().find(|c| c.name == name)
}
