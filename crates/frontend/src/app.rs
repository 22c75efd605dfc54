use leptos::prelude::*;
use thaw::ConfigProvider;

use crate::domain::a001_young_spec::ui::YoungSpecList;
use crate::shared::query::QueryClient;

#[component]
pub fn App() -> impl IntoView {
    // One query cache shared by every data-access hook.
    provide_context(QueryClient::new());

    view! {
        <ConfigProvider>
            <YoungSpecList />
        </ConfigProvider>
    }
}
