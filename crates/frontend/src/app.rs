use crate::console::ApiConsole;
use crate::layout::header::TopHeader;
use crate::layout::sidebar::Sidebar;
use crate::layout::NavState;
use crate::shared::config::DocsConfig;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Page-session state shared through context: the editable base URL and
    // the sidebar expansion state.
    provide_context(DocsConfig::new());
    provide_context(NavState::new());

    view! {
        <div class="app-layout">
            <TopHeader />
            <div class="app-body">
                <Sidebar />
                <ApiConsole />
            </div>
        </div>
    }
}
