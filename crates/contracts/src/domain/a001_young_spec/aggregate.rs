use serde::{Deserialize, Deserializer, Serialize};

// ============================================================================
// Field names (as the backend spells them)
// ============================================================================

pub const FIELD_ID: &str = "f_pers_young_spec_id";
pub const FIELD_INSERT_DATE: &str = "insert_date";
pub const FIELD_INSERT_USER: &str = "insert_user";
pub const FIELD_ORG_EMPLOYEE: &str = "org_employee";
pub const FIELD_REP_BEG_PERIOD: &str = "rep_beg_period";
pub const FIELD_REP_END_PERIOD: &str = "rep_end_period";
pub const FIELD_UPDATE_DATE: &str = "update_date";
pub const FIELD_UPDATE_USER: &str = "update_user";

// ============================================================================
// Aggregate
// ============================================================================

/// Сведения о молодом специалисте (`f_pers_young_spec`).
///
/// The identifier is assigned by the server. It is left out of the JSON body
/// whenever it is `None`, which is how a create request strips it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct YoungSpecRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub f_pers_young_spec_id: Option<i64>,

    /// Дата и время добавления записи
    #[serde(default, deserialize_with = "null_as_empty")]
    pub insert_date: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub insert_user: String,
    /// ФИО и контактные данные сотрудника организации
    #[serde(default, deserialize_with = "null_as_empty")]
    pub org_employee: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub rep_beg_period: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub rep_end_period: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub update_date: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub update_user: String,
}

impl YoungSpecRecord {
    pub fn id(&self) -> Option<i64> {
        self.f_pers_young_spec_id
    }

    /// Copy of the record with the identifier removed (create payload)
    pub fn without_id(&self) -> Self {
        Self {
            f_pers_young_spec_id: None,
            ..self.clone()
        }
    }

    /// Text value of a field by its backend name. The identifier is not a text field.
    pub fn text_field(&self, name: &str) -> Option<&str> {
        let value = match name {
            FIELD_INSERT_DATE => &self.insert_date,
            FIELD_INSERT_USER => &self.insert_user,
            FIELD_ORG_EMPLOYEE => &self.org_employee,
            FIELD_REP_BEG_PERIOD => &self.rep_beg_period,
            FIELD_REP_END_PERIOD => &self.rep_end_period,
            FIELD_UPDATE_DATE => &self.update_date,
            FIELD_UPDATE_USER => &self.update_user,
            _ => return None,
        };
        Some(value.as_str())
    }

    /// Value of any field formatted for display in the grid
    pub fn display_value(&self, name: &str) -> String {
        if name == FIELD_ID {
            return self
                .f_pers_young_spec_id
                .map(|id| id.to_string())
                .unwrap_or_default();
        }
        self.text_field(name).unwrap_or_default().to_string()
    }

    /// Set a text field by its backend name.
    ///
    /// Returns `false` for unknown names and for the identifier, which is read-only.
    pub fn set_field(&mut self, name: &str, value: String) -> bool {
        let slot = match name {
            FIELD_INSERT_DATE => &mut self.insert_date,
            FIELD_INSERT_USER => &mut self.insert_user,
            FIELD_ORG_EMPLOYEE => &mut self.org_employee,
            FIELD_REP_BEG_PERIOD => &mut self.rep_beg_period,
            FIELD_REP_END_PERIOD => &mut self.rep_end_period,
            FIELD_UPDATE_DATE => &mut self.update_date,
            FIELD_UPDATE_USER => &mut self.update_user,
            _ => return false,
        };
        *slot = value;
        true
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> YoungSpecRecord {
        YoungSpecRecord {
            f_pers_young_spec_id: Some(42),
            insert_date: "2024-01-10T09:00:00".into(),
            insert_user: "ivanov".into(),
            org_employee: "Петров П.П., +7 900 000-00-00".into(),
            rep_beg_period: "2024-01-01".into(),
            rep_end_period: "2024-03-31".into(),
            update_date: "2024-01-11".into(),
            update_user: "sidorov".into(),
        }
    }

    #[test]
    fn test_deserialize_with_nulls_and_extra_fields() {
        let json = r#"{
            "f_pers_young_spec_id": 7,
            "insert_date": null,
            "insert_user": "ivanov",
            "org_employee": "x",
            "rep_beg_period": "2024-01-01",
            "update_user": "y",
            "unknown": 1
        }"#;
        let record: YoungSpecRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id(), Some(7));
        assert_eq!(record.insert_date, "");
        assert_eq!(record.rep_end_period, "");
        assert_eq!(record.insert_user, "ivanov");
    }

    #[test]
    fn test_create_payload_has_no_identifier() {
        let body = serde_json::to_value(sample().without_id()).unwrap();
        assert!(body.get(FIELD_ID).is_none());
        assert_eq!(body[FIELD_INSERT_USER], "ivanov");
    }

    #[test]
    fn test_update_payload_keeps_identifier() {
        let body = serde_json::to_value(sample()).unwrap();
        assert_eq!(body[FIELD_ID], 42);
    }

    #[test]
    fn test_set_field() {
        let mut record = sample();
        assert!(record.set_field(FIELD_UPDATE_USER, "kuznetsov".into()));
        assert_eq!(record.update_user, "kuznetsov");
        assert!(!record.set_field(FIELD_ID, "1".into()));
        assert!(!record.set_field("missing", "1".into()));
        assert_eq!(record.id(), Some(42));
    }

    #[test]
    fn test_display_value() {
        let record = sample();
        assert_eq!(record.display_value(FIELD_ID), "42");
        assert_eq!(record.display_value(FIELD_REP_BEG_PERIOD), "2024-01-01");
        assert_eq!(YoungSpecRecord::default().display_value(FIELD_ID), "");
    }
}
