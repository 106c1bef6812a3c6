//! Settings Page
//!
//! API connection configuration.

use leptos::*;

use crate::api;
use crate::api::client;
use crate::state::global::GlobalState;

/// Settings page component
#[component]
pub fn Settings() -> impl IntoView {
    view! {
        <div class="space-y-8">
            // Header
            <div>
                <h1 class="text-3xl font-bold">"Settings"</h1>
                <p class="text-gray-400 mt-1">"Configure the metrics API connection"</p>
            </div>

            <ApiSettings />

            <AboutSection />
        </div>
    }
}

/// API connection settings
#[component]
fn ApiSettings() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (api_url, set_api_url) = create_signal(api::get_api_base());
    let (testing, set_testing) = create_signal(false);
    let (test_result, set_test_result) = create_signal(None::<bool>);

    // The genre endpoint doubles as a health probe: static, small, always
    // present when the API is up.
    let test_connection = move |_| {
        set_testing.set(true);
        set_test_result.set(None);

        api::set_api_base(&api_url.get());

        spawn_local(async move {
            match client::fetch_genres().await {
                Ok(_) => {
                    set_test_result.set(Some(true));
                    state.show_success("Connection successful!");
                }
                Err(e) => {
                    set_test_result.set(Some(false));
                    state.show_error(&format!("Connection failed: {}", e));
                }
            }
            set_testing.set(false);
        });
    };

    let save_url = move |_| {
        api::set_api_base(&api_url.get());
        state.show_success("API URL saved");
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"API Connection"</h2>

            <div class="space-y-4">
                // API URL
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Metrics API URL"</label>
                    <div class="flex space-x-2">
                        <input
                            type="text"
                            prop:value=move || api_url.get()
                            on:input=move |ev| set_api_url.set(event_target_value(&ev))
                            class="flex-1 bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                        <button
                            on:click=test_connection
                            disabled=move || testing.get()
                            class="px-4 py-3 bg-gray-600 hover:bg-gray-500 disabled:bg-gray-700
                                   rounded-lg font-medium transition-colors"
                        >
                            {move || if testing.get() { "Testing..." } else { "Test" }}
                        </button>
                        <button
                            on:click=save_url
                            class="px-4 py-3 bg-primary-600 hover:bg-primary-700
                                   rounded-lg font-medium transition-colors"
                        >
                            "Save"
                        </button>
                    </div>
                </div>

                // Connection status
                <div class="flex items-center space-x-2">
                    <span class="text-sm text-gray-400">"Status:"</span>
                    {move || {
                        match test_result.get() {
                            Some(true) => view! {
                                <span class="text-green-400">"✓ Connected"</span>
                            }.into_view(),
                            Some(false) => view! {
                                <span class="text-red-400">"✕ Failed"</span>
                            }.into_view(),
                            None => view! {
                                <span class="text-gray-400">"Not tested"</span>
                            }.into_view(),
                        }
                    }}
                </div>
            </div>
        </section>
    }
}

/// About section
#[component]
fn AboutSection() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"About Marketscope"</h2>

            <div class="space-y-4 text-gray-300">
                <p>
                    "Marketscope visualizes mobile app market metrics by genre: "
                    "revenue, user base, ratings, release cadence, market entries "
                    "and exits, concentration and stability."
                </p>

                <p class="text-sm text-gray-400">
                    {format!("Data window: {}", state.window.label())}
                </p>

                <p class="text-sm text-gray-400">
                    "Version 0.1.0 • Built with Rust and Leptos"
                </p>
            </div>
        </section>
    }
}
