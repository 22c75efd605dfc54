use std::collections::BTreeMap;

use contracts::domain::a002_young_spec_line::{
    build_rows, initial_values, record_input, FieldDefinition, FormPhase, FormRow, LineItem,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a002_young_spec_line::api;
use crate::shared::request_scope::RequestScope;

/// ViewModel for the "Просмотр" dialog
#[derive(Clone, Copy)]
pub struct DynamicFormViewModel {
    pub fields: RwSignal<Vec<FieldDefinition>>,
    pub lines: RwSignal<Vec<LineItem>>,
    pub phase: RwSignal<FormPhase>,
    pub values: RwSignal<BTreeMap<String, String>>,
    pub submitting: RwSignal<bool>,
    load_scope: StoredValue<Option<RequestScope>, LocalStorage>,
    submit_scope: StoredValue<Option<RequestScope>, LocalStorage>,
}

impl DynamicFormViewModel {
    pub fn new() -> Self {
        Self {
            fields: RwSignal::new(Vec::new()),
            lines: RwSignal::new(Vec::new()),
            phase: RwSignal::new(FormPhase::Loading),
            values: RwSignal::new(BTreeMap::new()),
            submitting: RwSignal::new(false),
            load_scope: StoredValue::new_local(None),
            submit_scope: StoredValue::new_local(None),
        }
    }

    pub fn rows(&self) -> Signal<Vec<FormRow>> {
        let fields = self.fields;
        let lines = self.lines;
        Signal::derive(move || fields.with(|f| lines.with(|l| build_rows(f, l))))
    }

    fn refresh_phase(&self) {
        let field_count = self.fields.with_untracked(Vec::len);
        let line_count = self.lines.with_untracked(Vec::len);
        self.phase
            .try_update(|phase| *phase = phase.advance(field_count, line_count));
    }

    /// Fetch both collections concurrently. A failed fetch leaves the form loading.
    pub fn load(&self) {
        let scope = RequestScope::new();
        let signal = scope.signal();
        self.load_scope.set_value(Some(scope));

        let vm = *self;
        let fields_signal = signal.clone();
        spawn_local(async move {
            match api::fetch_field_definitions(fields_signal.as_ref()).await {
                Ok(fields) => {
                    vm.values.try_set(initial_values(&fields));
                    vm.fields.try_set(fields);
                    vm.refresh_phase();
                }
                Err(e) if e.is_aborted() => log::debug!("Загрузка полей формы отменена"),
                Err(e) => log::error!("Error fetching form fields: {}", e),
            }
        });

        spawn_local(async move {
            match api::fetch_line_items(signal.as_ref()).await {
                Ok(lines) => {
                    vm.lines.try_set(lines);
                    vm.refresh_phase();
                }
                Err(e) if e.is_aborted() => log::debug!("Загрузка строк формы отменена"),
                Err(e) => log::error!("Error fetching line data: {}", e),
            }
        });
    }

    pub fn set_value(&self, name: &str, value: String) {
        self.values.update(|values| record_input(values, name, value));
    }

    /// Post the current values; on success confirm with an alert and close.
    pub fn submit(&self, open: RwSignal<bool>) {
        if self.submitting.get_untracked() {
            return;
        }
        let payload = self.values.get_untracked();
        let scope = RequestScope::new();
        let signal = scope.signal();
        self.submit_scope.set_value(Some(scope));
        self.submitting.set(true);

        let vm = *self;
        spawn_local(async move {
            let result = api::submit_form(&payload, signal.as_ref()).await;
            vm.submitting.try_set(false);
            vm.submit_scope.try_update_value(|scope| *scope = None);
            match result {
                Ok(()) => {
                    if let Some(window) = web_sys::window() {
                        let _ = window.alert_with_message("Form submitted successfully!");
                    }
                    open.try_set(false);
                }
                Err(e) if e.is_aborted() => log::debug!("Отправка формы отменена"),
                Err(e) => log::error!("Error submitting form: {}", e),
            }
        });
    }

    pub fn abort_load(&self) {
        Self::abort(self.load_scope);
    }

    pub fn abort_submit(&self) {
        Self::abort(self.submit_scope);
    }

    fn abort(slot: StoredValue<Option<RequestScope>, LocalStorage>) {
        slot.try_update_value(|scope| {
            if let Some(scope) = scope.take() {
                scope.abort();
            }
        });
    }
}
