use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use thaw::*;

use super::view_model::DynamicFormViewModel;

const FORM_ID: &str = "young-spec-line-form";

#[component]
pub fn DynamicForm(open: RwSignal<bool>) -> impl IntoView {
    let vm = DynamicFormViewModel::new();
    vm.load();
    on_cleanup(move || {
        vm.abort_load();
        vm.abort_submit();
    });

    // Closing the dialog cancels a pending submit
    Effect::new(move |_| {
        if !open.get() {
            vm.abort_submit();
        }
    });

    let rows = vm.rows();
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit(open);
    };

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>"Просмотр"</DialogTitle>
                    <DialogContent>
                        <Show
                            when=move || vm.phase.get().is_ready()
                            fallback=|| view! { <div>"Loading..."</div> }
                        >
                            <form id=FORM_ID on:submit=on_submit>
                                <div style="display: flex; justify-content: flex-end; gap: 2rem;">
                                    <p>"Общее кол-во"</p>
                                    <p>"по Целевому"</p>
                                    <p>"по Распределению"</p>
                                </div>
                                <For
                                    each=move || rows.get().into_iter().enumerate()
                                    key=|(index, row)| (*index, row.clone())
                                    children=move |(_, row)| {
                                        let name = row.name.clone();
                                        let total = row.total.clone();
                                        view! {
                                            <div style="display: flex; justify-content: space-between;">
                                                <label for=row.input_id.clone()>{row.name.clone()}</label>
                                                <div style="display: flex; justify-content: space-between;">
                                                    <input
                                                        id=row.input_id
                                                        name=row.name
                                                        type=row.input_type
                                                        prop:value=move || {
                                                            // Controlled: typing never replaces the shown sum
                                                            vm.values.track();
                                                            total.clone()
                                                        }
                                                        on:input=move |ev| vm.set_value(&name, event_target_value(&ev))
                                                    />
                                                    <input type="text" readonly prop:value=row.target />
                                                    <input type="text" readonly prop:value=row.distribution />
                                                </div>
                                            </div>
                                        }
                                    }
                                />
                            </form>
                        </Show>
                    </DialogContent>
                    <DialogActions>
                        <Button
                            appearance=ButtonAppearance::Primary
                            button_type=ButtonType::Submit
                            attr:form=FORM_ID
                            disabled=Signal::derive(move || {
                                !vm.phase.get().is_ready() || vm.submitting.get()
                            })
                        >
                            "Отправить"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| open.set(false)
                        >
                            "Закрыть"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
