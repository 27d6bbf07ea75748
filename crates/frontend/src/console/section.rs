use crate::api::Method;
use crate::layout::use_nav;
use crate::shared::config::use_docs_config;
use leptos::prelude::*;

/// Documentation section for one endpoint: title, description, a curl example
/// whose base URL tracks the header input live, and the try-it form slot.
///
/// The section stays hidden until its sidebar item is expanded.
#[component]
pub fn EndpointSection(
    /// Element id; the sidebar item scrolls to and toggles this
    id: &'static str,
    title: &'static str,
    description: &'static str,
    method: Method,
    /// Endpoint path appended to the base URL
    path: &'static str,
    /// Trailing flags of the curl example, after the URL
    curl_flags: &'static str,
    children: Children,
) -> impl IntoView {
    let nav = use_nav();
    let config = use_docs_config();

    view! {
        <section
            id=id
            class="api-section"
            class:api-section--open=move || nav.is_expanded(id)
        >
            <h2 class="api-section__title">{title}</h2>
            <p class="api-section__description">{description}</p>

            <div class="api-section__subsection" id=format!("{}-example", id)>
                <h3>"Example"</h3>
                <pre class="curl-example"><code>
                    {format!("curl -X {} ", method.as_str())}
                    <span class="curl-base-url">{move || config.base_url.get()}</span>
                    {format!("{} {}", path, curl_flags)}
                </code></pre>
            </div>

            <div class="api-section__subsection" id=format!("{}-try", id)>
                <h3>"Try it now"</h3>
                {children()}
            </div>
        </section>
    }
}
