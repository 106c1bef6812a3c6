//! Marketscope
//!
//! Mobile app market analytics dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Per-genre metrics: revenue, users, ratings, versions, lifecycle,
//!   concentration (HHI) and ranking stability
//! - Year/month selection over a bounded history window with partial
//!   boundary months
//! - Client-side multi-genre filtering
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It fetches pre-aggregated metric collections from a remote
//! REST API; each metric panel loads and fails independently.

use leptos::*;

mod api;
mod app;
mod components;
mod dates;
mod filter;
mod format;
mod model;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
