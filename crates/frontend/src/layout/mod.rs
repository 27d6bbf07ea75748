pub mod header;
pub mod sidebar;

use leptos::prelude::*;

/// Sidebar expansion state shared by the sidebar and the endpoint sections.
///
/// Expanding an item always collapses every other one, so at most one item is
/// ever expanded and the whole machine fits in an `Option`.
#[derive(Clone, Copy)]
pub struct NavState {
    pub expanded: RwSignal<Option<&'static str>>,
}

impl NavState {
    pub fn new() -> Self {
        Self {
            expanded: RwSignal::new(None),
        }
    }

    pub fn is_expanded(&self, id: &'static str) -> bool {
        self.expanded.get() == Some(id)
    }
}

impl Default for NavState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_nav() -> NavState {
    use_context::<NavState>().expect("NavState context not found")
}
