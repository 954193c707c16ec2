//! Save progress indicator.

use dioxus::prelude::*;
use groupforms_shared::SaveState;

/// Shows nothing for unsaved drafts, a spinner while saving and a check
/// mark once saved. Expects the icon view of the state, see
/// [`SaveState::icon_state`].
#[component]
pub fn SaveStateIcon(state: SaveState) -> Element {
    match state.icon_state() {
        SaveState::Saving => rsx! {
            span {
                class: "flex items-center gap-x-1 text-grey-6",
                "data-testid": "save-state-saving",
                span { class: "inline-block w-3 h-3 rounded-full border-2 border-grey-4 border-t-transparent animate-spin" }
                "Saving…"
            }
        },
        SaveState::Saved => rsx! {
            span {
                class: "flex items-center gap-x-1 text-green-success",
                "data-testid": "save-state-saved",
                "✓"
                "Saved"
            }
        },
        _ => rsx! {},
    }
}
