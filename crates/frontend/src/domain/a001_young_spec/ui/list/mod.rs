mod state;

use std::cmp::Ordering;

use contracts::domain::a001_young_spec::aggregate::FIELD_ID;
use contracts::domain::a001_young_spec::metadata::{COLUMNS, ENTITY};
use contracts::domain::a001_young_spec::{ValidationErrors, YoungSpecRecord};
use contracts::shared::metadata::ColumnMetadata;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

pub use state::{RecordModal, SaveOutcome};
use state::{closes_after_save, create_state, fetch_indicator, FetchIndicator};

use super::editor::RecordEditor;
use crate::domain::a001_young_spec::hooks::{
    use_create_record, use_records, use_update_record, RECORDS_KEY,
};
use crate::domain::a002_young_spec_line::ui::dynamic_form::DynamicForm;
use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_class, get_sort_indicator, Searchable, Sortable};
use crate::shared::query::{use_query_client, QueryStore};
use crate::shared::request_scope::RequestScope;

impl Sortable for YoungSpecRecord {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        if field == FIELD_ID {
            return self.id().cmp(&other.id());
        }
        match (self.text_field(field), other.text_field(field)) {
            (Some(a), Some(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
            _ => Ordering::Equal,
        }
    }
}

impl Searchable for YoungSpecRecord {
    fn matches_filter(&self, filter: &str) -> bool {
        COLUMNS
            .iter()
            .any(|column| self.display_value(column.name).to_lowercase().contains(filter))
    }
}

fn visible_columns(show_id: bool) -> Vec<&'static ColumnMetadata> {
    COLUMNS
        .iter()
        .filter(|column| show_id || column.visible_by_default())
        .collect()
}

fn column_style(column: &ColumnMetadata) -> String {
    column
        .ui
        .column_width
        .map(|w| format!("min-width: {w}px;"))
        .unwrap_or_default()
}

#[component]
pub fn YoungSpecList() -> impl IntoView {
    let state = create_state();
    let search = RwSignal::new(String::new());
    let show_id = RwSignal::new(false);
    let validation_errors = RwSignal::new(ValidationErrors::new());
    let form_visible = RwSignal::new(false);
    let modal = RwSignal::new(RecordModal::Closed);
    let save_scope = StoredValue::new_local(None::<RequestScope>);

    let client = use_query_client();
    let records = use_records();
    let create = use_create_record();
    let update = use_update_record();

    let is_creating = create.is_pending();
    let is_updating = update.is_pending();
    let is_saving = Signal::derive(move || is_creating.get() || is_updating.get());

    Effect::new(move |_| {
        let query = search.get();
        state.update(|s| s.search_query = query);
    });
    Effect::new(move |_| {
        let visible = show_id.get();
        state.update(|s| s.show_id = visible);
    });

    let rows = Signal::derive(move || {
        let data = records.data.get().unwrap_or_default();
        state.with(|s| s.visible_rows(data))
    });
    let total_count =
        Signal::derive(move || records.data.with(|d| d.as_ref().map_or(0, Vec::len)));
    let columns = Signal::derive(move || visible_columns(state.with(|s| s.show_id)));

    let abort_save = move || {
        save_scope.update_value(|scope| {
            if let Some(scope) = scope.take() {
                scope.abort();
            }
        });
    };

    let open_modal = move |next: RecordModal| {
        validation_errors.set(ValidationErrors::new());
        modal.set(next);
    };

    let cancel = move || {
        abort_save();
        validation_errors.set(ValidationErrors::new());
        modal.set(RecordModal::Closed);
    };

    let save = move |values: YoungSpecRecord| {
        let Some(outcome) = modal.with_untracked(|m| m.save_outcome(values)) else {
            return;
        };
        let (editing, record) = match outcome {
            SaveOutcome::Invalid(errors) => {
                validation_errors.set(errors);
                return;
            }
            SaveOutcome::Create(record) => (false, record),
            SaveOutcome::Update(record) => (true, record),
        };
        validation_errors.set(ValidationErrors::new());

        let scope = RequestScope::new();
        let signal = scope.signal();
        save_scope.set_value(Some(scope));

        spawn_local(async move {
            let result = if editing {
                update.mutate_async(record, signal).await
            } else {
                create.mutate_async(record, signal).await
            };
            match &result {
                Err(e) if e.is_aborted() => log::debug!("Сохранение отменено"),
                Err(e) => log::error!("Ошибка сохранения записи: {}", e),
                Ok(saved) => log::debug!("Запись сохранена: {:?}", saved.id()),
            }
            if closes_after_save(&result) {
                save_scope.try_update_value(|scope| *scope = None);
                modal.try_set(RecordModal::Closed);
            }
        });
    };

    let indicator = Signal::derive(move || {
        fetch_indicator(
            records.is_loading.get(),
            records.is_fetching.get(),
            records.is_error.get(),
        )
    });

    let refresh = move |_: leptos::ev::MouseEvent| client.invalidate_queries(RECORDS_KEY);

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{ENTITY.ui.list_name}</h1>
                    <Badge>{move || total_count.get().to_string()}</Badge>
                    <Show when=move || is_saving.get()>
                        <Spinner />
                        "Сохранение..."
                    </Show>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| open_modal(RecordModal::Creating)
                    >
                        {icon("plus")}
                        " СОЗДАТЬ ПОЛЬЗОВАТЕЛЯ"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| form_visible.update(|v| *v = !*v)
                    >
                        {icon("eye")}
                        " ПОСМОТРЕТЬ"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=refresh
                        disabled=Signal::derive(move || records.is_fetching.get())
                    >
                        {icon("refresh")}
                        " Обновить"
                    </Button>
                </div>
            </div>

            <div class="filter-panel">
                <div class="filter-panel-content">
                    <Flex gap=FlexGap::Small align=FlexAlign::Center>
                        {icon("filter")}
                        <div style="flex: 1; max-width: 320px;">
                            <Input value=search placeholder="Поиск (от 3 символов)..." />
                        </div>
                        <Checkbox checked=show_id label="Показать id" />
                    </Flex>
                </div>
            </div>

            <div class="page__content">
                <Show when=move || records.is_error.get()>
                    <MessageBar intent=MessageBarIntent::Error>
                        <div>
                            "Ошибка загрузки данных"
                            {move || records.error.get().map(|e| format!(": {e}"))}
                        </div>
                    </MessageBar>
                </Show>

                <Show when=move || indicator.get() == FetchIndicator::Refresh>
                    <Flex align=FlexAlign::Center gap=FlexGap::Small>
                        <Spinner />
                        "Обновление данных..."
                    </Flex>
                </Show>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                {move || {
                                    columns
                                        .get()
                                        .into_iter()
                                        .map(|column| {
                                            let name = column.name;
                                            view! {
                                                <TableHeaderCell resizable=false attr:style=column_style(column)>
                                                    <div
                                                        class="table__sortable-header"
                                                        style="cursor: pointer;"
                                                        on:click=move |_| state.update(|s| s.toggle_sort(name))
                                                    >
                                                        {column.header()}
                                                        <span class=move || state.with(|s| get_sort_class(&s.sort_field, name))>
                                                            {move || state.with(|s| get_sort_indicator(&s.sort_field, name, s.sort_ascending))}
                                                        </span>
                                                    </div>
                                                </TableHeaderCell>
                                            }
                                        })
                                        .collect_view()
                                }}
                                <TableHeaderCell resizable=false>"Действия"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <Show when=move || indicator.get() == FetchIndicator::InitialLoad>
                                <TableRow>
                                    <TableCell attr:colspan="9" attr:style="padding: 40px; text-align: center;">
                                        <Flex justify=FlexJustify::Center align=FlexAlign::Center gap=FlexGap::Small>
                                            <Spinner />
                                            "Загрузка..."
                                        </Flex>
                                    </TableCell>
                                </TableRow>
                            </Show>
                            <For
                                each=move || rows.get().into_iter().enumerate()
                                key=|(index, record)| (*index, record.clone())
                                children=move |(_, record)| {
                                    let for_edit = record.clone();
                                    view! {
                                        <TableRow>
                                            {move || {
                                                columns
                                                    .get()
                                                    .into_iter()
                                                    .map(|column| {
                                                        let record = record.clone();
                                                        view! {
                                                            <TableCell>
                                                                <TableCellLayout truncate=true>
                                                                    {record.display_value(column.name)}
                                                                </TableCellLayout>
                                                            </TableCell>
                                                        }
                                                    })
                                                    .collect_view()
                                            }}
                                            <TableCell>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    attr:title="Редактировать"
                                                    on_click=move |_| open_modal(RecordModal::Editing(for_edit.clone()))
                                                >
                                                    {icon("edit")}
                                                </Button>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>
            </div>

            {move || {
                let current = modal.get();
                current.is_open().then(|| view! {
                    <RecordEditor
                        modal=current
                        errors=validation_errors
                        saving=is_saving
                        on_save=Callback::new(save)
                        on_cancel=Callback::new(move |_| cancel())
                    />
                })
            }}

            <DynamicForm open=form_visible />
        </div>
    }
}
