use crate::shared::components::ui::Input;
use crate::shared::config::use_docs_config;
use leptos::prelude::*;

/// Top bar: page title and the editable base URL every call is issued
/// against. Curl examples across the page re-render on each keystroke.
#[component]
pub fn TopHeader() -> impl IntoView {
    let config = use_docs_config();

    view! {
        <header class="top-header">
            <h1 class="top-header__title">"Card Battle API"</h1>
            <div class="top-header__base-url">
                <Input
                    label="Base URL"
                    id="base-url-input"
                    value=config.base_url
                    on_input=Callback::new(move |value: String| config.base_url.set(value))
                />
            </div>
        </header>
    }
}
