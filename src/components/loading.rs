//! Loading Component
//!
//! Loading spinners and skeleton states.

use leptos::*;

/// Loading spinner shown while a panel's fetch is in flight
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-12">
            <div class="loading-spinner w-8 h-8" />
        </div>
    }
}
