//! Tally
//!
//! Personal income and expense tracker built with Leptos (WASM).
//!
//! # Features
//!
//! - Token-based sign in and registration
//! - Income/expense record keeping
//! - Monthly trend charts
//! - Period summary reports
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It communicates with the Tally API via HTTP; the session
//! token lives in browser local storage and is attached to every request.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
