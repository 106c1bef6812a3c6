//! Toast Notifications
//!
//! Transient banners for the success/error signals in `GlobalState`. The
//! signals auto-clear on a timer over there; this component only renders
//! whatever is currently set, stacked above the footer so neither covers
//! the other.

use leptos::*;

use crate::state::global::GlobalState;

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="fixed bottom-20 right-4 z-50 space-y-2">
            {move || state.success.get().map(|msg| view! {
                <ToastMessage message=msg error=false />
            })}

            {move || state.error.get().map(|msg| view! {
                <ToastMessage message=msg error=true />
            })}
        </div>
    }
}

#[component]
fn ToastMessage(
    #[prop(into)]
    message: String,
    /// Error styling instead of success
    error: bool,
) -> impl IntoView {
    let (icon, accent) = if error {
        ("✕", "bg-red-600 border-red-500")
    } else {
        ("✓", "bg-green-600 border-green-500")
    };

    view! {
        <div class=format!(
            "flex items-center gap-3 {} border-l-4 text-white px-4 py-3 \
             rounded-lg shadow-lg animate-slide-in",
            accent
        )>
            <span class="text-lg leading-none">{icon}</span>
            <span class="text-sm font-medium">{message}</span>
        </div>
    }
}
