use serde::{Deserialize, Serialize};

pub const FIELD_DEFINITIONS_COLLECTION: &str = "nsi_pers_young_spec";
pub const LINE_ITEMS_COLLECTION: &str = "f_pers_young_spec_line";

/// Строка справочника полей формы (`nsi_pers_young_spec`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDefinition {
    #[serde(
        default,
        rename = "nsi_pers_young_spec_id",
        alias = "f_pers_young_spec_line_id"
    )]
    pub id: Option<i64>,
    pub name: String,
    /// HTML input type; `text` when absent
    #[serde(default, rename = "type")]
    pub input_type: Option<String>,
}

/// Значения строки формы (`f_pers_young_spec_line`).
///
/// The backend sends `null` for counts that were never filled in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub f_pers_young_spec_line_id: i64,
    #[serde(default)]
    pub target_count: Option<i64>,
    #[serde(default)]
    pub distribution_count: Option<i64>,
}

impl LineItem {
    /// Sum of both counts, a missing count adds nothing
    pub fn total(&self) -> i64 {
        self.target_count.unwrap_or(0) + self.distribution_count.unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_definition_json() {
        let def: FieldDefinition =
            serde_json::from_str(r#"{"nsi_pers_young_spec_id": 3, "name": "Всего"}"#).unwrap();
        assert_eq!(def.id, Some(3));
        assert_eq!(def.input_type, None);

        let def: FieldDefinition =
            serde_json::from_str(r#"{"name": "Всего", "type": "number"}"#).unwrap();
        assert_eq!(def.id, None);
        assert_eq!(def.input_type.as_deref(), Some("number"));
    }

    #[test]
    fn test_line_item_total() {
        let line: LineItem = serde_json::from_str(
            r#"{"f_pers_young_spec_line_id": 1, "target_count": 4, "distribution_count": 5}"#,
        )
        .unwrap();
        assert_eq!(line.total(), 9);
    }

    #[test]
    fn test_line_item_null_counts() {
        let lines: Vec<LineItem> = serde_json::from_str(
            r#"[{"f_pers_young_spec_line_id": 1, "target_count": null, "distribution_count": 2},
                {"f_pers_young_spec_line_id": 2, "target_count": null, "distribution_count": null}]"#,
        )
        .unwrap();
        assert_eq!(lines[0].target_count, None);
        assert_eq!(lines[0].total(), 2);
        assert_eq!(lines[1].total(), 0);
    }
}
