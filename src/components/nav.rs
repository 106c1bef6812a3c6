//! Navigation Component
//!
//! Header bar: brand on the left, route links on the right.

use leptos::*;
use leptos_router::*;

const LINKS: [(&str, &str); 2] = [("/", "Dashboard"), ("/settings", "Settings")];

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="bg-gray-800 border-b border-gray-700 sticky top-0 z-40">
            <div class="container mx-auto px-4 h-16 flex items-center justify-between">
                <A href="/" class="flex items-baseline gap-2">
                    <span class="text-xl font-bold text-white">"Marketscope"</span>
                    <span class="hidden sm:inline text-xs text-gray-500 uppercase tracking-wider">
                        "app market analytics"
                    </span>
                </A>

                <div class="flex items-center gap-1">
                    {LINKS.into_iter().map(|(href, label)| view! {
                        <A
                            href=href
                            class="px-3 py-2 rounded-md text-sm text-gray-300
                                   hover:text-white hover:bg-gray-700 transition-colors"
                            active_class="bg-gray-700 text-white"
                        >
                            {label}
                        </A>
                    }).collect_view()}
                </div>
            </div>
        </nav>
    }
}
