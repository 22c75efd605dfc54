//! Derivations behind the read-mostly "Просмотр" form.
//!
//! Field definitions and line items come from two unrelated collections. The
//! N-th definition (zero-based) is paired with the line item whose id is
//! `N + 1`; the definitions' own identifiers play no part in the join.

use std::collections::{BTreeMap, HashMap};

use super::aggregate::{FieldDefinition, LineItem};

/// Loading phase of the form. Only ever moves from `Loading` to `Ready`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Loading,
    Ready,
}

impl FormPhase {
    /// Advance once both collections have arrived non-empty
    pub fn advance(self, field_count: usize, line_count: usize) -> Self {
        match self {
            Self::Ready => Self::Ready,
            Self::Loading if field_count > 0 && line_count > 0 => Self::Ready,
            Self::Loading => Self::Loading,
        }
    }

    pub fn is_ready(self) -> bool {
        self == Self::Ready
    }
}

/// One rendered row: an editable total and two read-only counts
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FormRow {
    pub name: String,
    pub input_id: String,
    pub input_type: String,
    pub total: String,
    pub target: String,
    pub distribution: String,
}

/// Empty value per field definition, keyed by field name
pub fn initial_values(fields: &[FieldDefinition]) -> BTreeMap<String, String> {
    fields
        .iter()
        .map(|f| (f.name.clone(), String::new()))
        .collect()
}

/// Store what was typed into a row's total input. The input itself keeps
/// showing [`FormRow::total`]; only the submitted values change.
pub fn record_input(values: &mut BTreeMap<String, String>, name: &str, typed: String) {
    values.insert(name.to_string(), typed);
}

/// Join definitions to line items by position. A row without a matching line
/// item shows empty strings in all three inputs.
pub fn build_rows(fields: &[FieldDefinition], lines: &[LineItem]) -> Vec<FormRow> {
    let by_id: HashMap<i64, &LineItem> = lines
        .iter()
        .map(|l| (l.f_pers_young_spec_line_id, l))
        .collect();

    fields
        .iter()
        .enumerate()
        .map(|(index, field)| {
            let line = by_id.get(&(index as i64 + 1));
            FormRow {
                name: field.name.clone(),
                input_id: field.id.map(|id| id.to_string()).unwrap_or_default(),
                input_type: field
                    .input_type
                    .clone()
                    .unwrap_or_else(|| "text".to_string()),
                total: line.map(|l| l.total().to_string()).unwrap_or_default(),
                target: line
                    .and_then(|l| l.target_count)
                    .map(|v| v.to_string())
                    .unwrap_or_default(),
                distribution: line
                    .and_then(|l| l.distribution_count)
                    .map(|v| v.to_string())
                    .unwrap_or_default(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(name: &str) -> FieldDefinition {
        FieldDefinition {
            name: name.to_string(),
            ..Default::default()
        }
    }

    fn line(id: i64, target: i64, distribution: i64) -> LineItem {
        LineItem {
            f_pers_young_spec_line_id: id,
            target_count: Some(target),
            distribution_count: Some(distribution),
        }
    }

    #[test]
    fn test_rows_sum_counts() {
        let rows = build_rows(&[field("a"), field("b")], &[line(1, 1, 2), line(2, 1, 2)]);
        assert_eq!(rows.len(), 2);
        for row in &rows {
            assert_eq!(row.total, "3");
            assert_eq!(row.target, "1");
            assert_eq!(row.distribution, "2");
            assert_eq!(row.input_type, "text");
        }
    }

    #[test]
    fn test_join_ignores_definition_ids_and_line_order() {
        let fields = vec![
            FieldDefinition {
                id: Some(2),
                name: "first".into(),
                input_type: Some("number".into()),
            },
            FieldDefinition {
                id: Some(1),
                name: "second".into(),
                input_type: None,
            },
        ];
        let rows = build_rows(&fields, &[line(2, 10, 20), line(1, 1, 1)]);
        assert_eq!(rows[0].total, "2");
        assert_eq!(rows[0].input_id, "2");
        assert_eq!(rows[0].input_type, "number");
        assert_eq!(rows[1].total, "30");
    }

    #[test]
    fn test_missing_line_renders_empty() {
        let rows = build_rows(&[field("a"), field("b")], &[line(1, 0, 0)]);
        assert_eq!(rows[0].total, "0");
        assert_eq!(rows[1].total, "");
        assert_eq!(rows[1].target, "");
        assert_eq!(rows[1].distribution, "");
    }

    #[test]
    fn test_null_counts_render_empty_cells() {
        let lines = vec![LineItem {
            f_pers_young_spec_line_id: 1,
            target_count: None,
            distribution_count: Some(2),
        }];
        let rows = build_rows(&[field("a")], &lines);
        assert_eq!(rows[0].total, "2");
        assert_eq!(rows[0].target, "");
        assert_eq!(rows[0].distribution, "2");
    }

    #[test]
    fn test_typed_input_changes_values_not_total() {
        let fields = [field("a"), field("b")];
        let lines = [line(1, 1, 2)];
        let mut values = initial_values(&fields);

        record_input(&mut values, "a", "17".into());

        assert_eq!(values.get("a").map(String::as_str), Some("17"));
        assert_eq!(values.get("b").map(String::as_str), Some(""));
        assert_eq!(build_rows(&fields, &lines)[0].total, "3");
    }

    #[test]
    fn test_initial_values() {
        let values = initial_values(&[field("a"), field("b")]);
        assert_eq!(values.len(), 2);
        assert_eq!(values.get("a").map(String::as_str), Some(""));
    }

    #[test]
    fn test_phase_moves_forward_only() {
        let phase = FormPhase::default();
        assert_eq!(phase.advance(2, 0), FormPhase::Loading);
        assert_eq!(phase.advance(0, 2), FormPhase::Loading);
        let ready = phase.advance(1, 1);
        assert!(ready.is_ready());
        assert_eq!(ready.advance(0, 0), FormPhase::Ready);
    }
}
