//! Create/edit dialog for a single record.

use contracts::domain::a001_young_spec::metadata::COLUMNS;
use contracts::domain::a001_young_spec::{ValidationErrors, YoungSpecRecord};
use leptos::prelude::*;
use thaw::*;

use super::list::RecordModal;
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;

#[component]
pub fn RecordEditor(
    /// `Creating` or `Editing`; decides title and initial values
    modal: RecordModal,
    errors: RwSignal<ValidationErrors>,
    #[prop(into)] saving: Signal<bool>,
    on_save: Callback<YoungSpecRecord>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let title = modal.title();
    let is_editing = matches!(modal, RecordModal::Editing(_));
    let draft = RwSignal::new(modal.initial_values());

    // The identifier is shown (read-only) only when editing an existing row
    let inputs = COLUMNS
        .iter()
        .filter(|column| column.editable || is_editing)
        .map(|column| {
            let name = column.name;
            let editable = column.editable;
            let error_key = column.error_key;
            let message = move || {
                error_key.and_then(|key| errors.with(|e| e.message_for(key).map(str::to_string)))
            };

            view! {
                <div class="form__group">
                    <label class="form__label" for=name>
                        {column.header()}
                        {column.required.then_some(" *")}
                    </label>
                    <input
                        id=name
                        type="text"
                        class=move || {
                            if message().is_some() {
                                "form__input form__input--error"
                            } else {
                                "form__input"
                            }
                        }
                        required=column.required
                        disabled=move || !editable || saving.get()
                        prop:value=move || draft.with(|d| d.display_value(name))
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            draft.update(|d| {
                                d.set_field(name, value);
                            });
                        }
                        on:focus=move |_| {
                            if let Some(key) = error_key {
                                errors.update(|e| e.clear_field(key));
                            }
                        }
                    />
                    {move || message().map(|m| view! {
                        <div class="form__helper-text form__helper-text--error">{m}</div>
                    })}
                </div>
            }
        })
        .collect_view();

    view! {
        <ModalFrame on_close=on_cancel modal_class="record-editor">
            <div class="modal-header">
                <h2 class="modal-title">{title}</h2>
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| on_cancel.run(())
                >
                    {icon("x")}
                </Button>
            </div>

            <div class="modal-body" style="display: flex; flex-direction: column; gap: 1rem;">
                {inputs}
            </div>

            <div class="modal-footer">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_cancel.run(())
                >
                    "Отмена"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| on_save.run(draft.get_untracked())
                    disabled=Signal::derive(move || saving.get())
                >
                    {move || if saving.get() { "Сохранение..." } else { "Сохранить" }}
                </Button>
            </div>
        </ModalFrame>
    }
}
