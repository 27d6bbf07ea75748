use leptos::prelude::*;

pub const DEFAULT_BASE_URL: &str = "http://localhost:4000";

/// Page-session configuration, provided via context at the app root.
///
/// The base URL is read at call time by every request builder, so an edit
/// takes effect on the next submission and never rewrites a rendered
/// exchange. Last write wins; no well-formedness check is done here.
#[derive(Clone, Copy)]
pub struct DocsConfig {
    pub base_url: RwSignal<String>,
}

impl DocsConfig {
    pub fn new() -> Self {
        Self {
            base_url: RwSignal::new(DEFAULT_BASE_URL.to_string()),
        }
    }
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_docs_config() -> DocsConfig {
    use_context::<DocsConfig>().expect("DocsConfig context not found")
}
