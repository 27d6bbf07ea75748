//! Renders one [`ApiExchange`] into its section's response container.

use crate::api::{pretty, ApiExchange, Outcome};
use crate::shared::clipboard::copy_to_clipboard_with_callback;
use leptos::prelude::*;

/// Holds at most one rendered exchange; a new submission replaces the
/// previous content entirely.
#[component]
pub fn ResponseContainer(exchange: ReadSignal<Option<ApiExchange>>) -> impl IntoView {
    view! {
        <div class="response-container">
            {move || exchange.get().map(|ex| view! { <ResponseView exchange=ex /> })}
        </div>
    }
}

#[component]
pub fn ResponseView(exchange: ApiExchange) -> impl IntoView {
    let status = exchange.status_display();
    let request_body = exchange
        .request_body
        .clone()
        .unwrap_or_else(|| "N/A".to_string());

    // Exactly one of the three outcome blocks is rendered.
    let outcome_view = match exchange.outcome.clone() {
        Outcome::Success { body } => view! {
            <div class="response-body">
                <CopyBox label="Response Body:" text=pretty(&body) />
            </div>
        }
        .into_any(),
        Outcome::AppError { code, message } => view! {
            <div class="response-body">
                <div class="label">"App Error Code:"</div>
                <div class="box app-error-code">{code}</div>
                <CopyBox label="Error Message:" text=message />
            </div>
        }
        .into_any(),
        Outcome::Failed { message, .. } => view! {
            <div class="response-body">
                <CopyBox label="Error Message:" text=message />
            </div>
        }
        .into_any(),
    };

    view! {
        <div class="api-response">
            <div class="api-response__header">
                <div><span class="label">"HTTP Type: "</span><span>{exchange.method.as_str()}</span></div>
                <div><span class="label">"HTTP Status: "</span><span>{status}</span></div>
                <div><span class="label">"URL Called: "</span><span>{exchange.url.clone()}</span></div>
            </div>
            <div class="api-response__request">
                <div class="api-response__request-left">
                    <CopyBox label="Request Header:" text=exchange.request_headers.clone() />
                </div>
                <div class="api-response__request-right">
                    <CopyBox label="Request Body:" text=request_body />
                </div>
            </div>
            {outcome_view}
        </div>
    }
}

/// Labeled preformatted box with a copy control. A successful copy flashes
/// the confirmation for two seconds.
#[component]
pub fn CopyBox(label: &'static str, text: String) -> impl IntoView {
    let (copied, set_copied) = signal(false);
    let text_for_copy = text.clone();

    let handle_copy = move |_| {
        copy_to_clipboard_with_callback(&text_for_copy, move || {
            set_copied.set(true);
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(2000).await;
                set_copied.set(false);
            });
        });
    };

    view! {
        <div class="copy-box">
            <div class="label">
                {label}
                <span class="copy-icon" title="Copy to clipboard" on:click=handle_copy>
                    "⧉"
                </span>
                <span class="copy-message" class:copy-message--visible=move || copied.get()>
                    "Copied!"
                </span>
            </div>
            <div class="box">
                <pre>{text}</pre>
            </div>
        </div>
    }
}
