//! Grid columns of the `f_pers_young_spec` collection.
//!
//! `insert_date`, `rep_end_period` and `update_date` show (and clear) the
//! `rep_beg_period` message rather than one of their own.

use super::aggregate::*;
use crate::shared::metadata::{
    ColumnMetadata, ColumnUiMetadata, EntityMetadataInfo, EntityUiMetadata,
};

pub const ENTITY: EntityMetadataInfo = EntityMetadataInfo {
    collection_name: "f_pers_young_spec",
    ui: EntityUiMetadata {
        list_name: "Молодые специалисты",
    },
};

pub const COLUMNS: &[ColumnMetadata] = &[
    ColumnMetadata {
        name: FIELD_ID,
        ui: ColumnUiMetadata {
            label: "id",
            column_width: Some(80),
            hidden_by_default: true,
        },
        editable: false,
        required: false,
        error_key: None,
    },
    ColumnMetadata {
        name: FIELD_INSERT_DATE,
        ui: ColumnUiMetadata {
            label: "Дата и время добавления записи",
            column_width: Some(80),
            hidden_by_default: false,
        },
        editable: true,
        required: true,
        error_key: Some(FIELD_REP_BEG_PERIOD),
    },
    ColumnMetadata {
        name: FIELD_INSERT_USER,
        ui: ColumnUiMetadata {
            label: "Имя пользователя",
            column_width: None,
            hidden_by_default: false,
        },
        editable: true,
        required: true,
        error_key: Some(FIELD_INSERT_USER),
    },
    ColumnMetadata {
        name: FIELD_ORG_EMPLOYEE,
        ui: ColumnUiMetadata {
            label: "ФИО и контактные данные сотрудника организации для связи",
            column_width: None,
            hidden_by_default: false,
        },
        editable: true,
        required: true,
        error_key: Some(FIELD_ORG_EMPLOYEE),
    },
    ColumnMetadata {
        name: FIELD_REP_BEG_PERIOD,
        ui: ColumnUiMetadata {
            label: "Дата начала отчетного периода",
            column_width: None,
            hidden_by_default: false,
        },
        editable: true,
        required: true,
        error_key: Some(FIELD_REP_BEG_PERIOD),
    },
    ColumnMetadata {
        name: FIELD_REP_END_PERIOD,
        ui: ColumnUiMetadata {
            label: "Дата окончания отчетного периода",
            column_width: Some(80),
            hidden_by_default: false,
        },
        editable: true,
        required: true,
        error_key: Some(FIELD_REP_BEG_PERIOD),
    },
    ColumnMetadata {
        name: FIELD_UPDATE_DATE,
        ui: ColumnUiMetadata {
            label: "Укажите текущую дату",
            column_width: Some(80),
            hidden_by_default: false,
        },
        editable: true,
        required: false,
        error_key: Some(FIELD_REP_BEG_PERIOD),
    },
    ColumnMetadata {
        name: FIELD_UPDATE_USER,
        ui: ColumnUiMetadata {
            label: "Имя пользователя изменившего запись",
            column_width: Some(80),
            hidden_by_default: false,
        },
        editable: true,
        required: true,
        error_key: Some(FIELD_UPDATE_USER),
    },
];

/// Columns rendered as inputs in the create/edit dialog
pub fn editable_columns() -> impl Iterator<Item = &'static ColumnMetadata> {
    COLUMNS.iter().filter(|c| c.editable)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::metadata::find_column;

    #[test]
    fn test_column_set() {
        assert_eq!(COLUMNS.len(), 8);
        let id = find_column(COLUMNS, FIELD_ID).unwrap();
        assert!(!id.editable);
        assert!(!id.visible_by_default());
        assert_eq!(editable_columns().count(), 7);
        assert!(COLUMNS.iter().skip(1).all(|c| c.visible_by_default()));
    }

    #[test]
    fn test_every_editable_column_is_a_record_field() {
        let mut record = YoungSpecRecord::default();
        for column in editable_columns() {
            assert!(record.set_field(column.name, "v".into()), "{}", column.name);
        }
    }

    #[test]
    fn test_date_columns_share_start_period_error() {
        for name in [FIELD_INSERT_DATE, FIELD_REP_END_PERIOD, FIELD_UPDATE_DATE] {
            let column = find_column(COLUMNS, name).unwrap();
            assert_eq!(column.error_key, Some(FIELD_REP_BEG_PERIOD));
        }
        let update_user = find_column(COLUMNS, FIELD_UPDATE_USER).unwrap();
        assert_eq!(update_user.error_key, Some(FIELD_UPDATE_USER));
    }
}
