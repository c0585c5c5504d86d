//! TalentHub - Frontend Rust/Leptos Application
//!
//! A WebAssembly shell for the TalentHub job board. Its job in this
//! repository is to mount the site footer at the bottom of every page.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  PageOutlet (placeholder for any client route)               │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! │  ├── Brand block (tagline, contact, social icons)            │
//! │  ├── Four navigation columns                                 │
//! │  └── Legal bar (copyright, legal links)                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Brand and contact constants
//! - [`types`] - Footer content model (NavSection, SocialLink, IconKind, ...)
//! - [`content`] - The static footer tables and copyright year
//! - [`theme`] - Explicit footer style object
//! - [`components`] - UI components (Footer, Icon)

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod content;
pub mod theme;
pub mod components;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Icons
    IconKind,
    // Links
    NavLink, NavSection, SocialLink, ContactDetail,
    // Errors
    AppError, AppResult,
};

// Content
pub use content::{validate_tables, FooterContent};

// Theme
pub use theme::{FooterStyle, Palette};

// Components
pub use components::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    init_logging();
    mount_to_body(|| view! { <App/> });
}

/// Console logging plus the content audit. Safe to call more than once.
pub fn init_logging() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("Starting {} frontend", APP_NAME);

    if let Err(e) = FooterContent::validate() {
        log::warn!("Footer content audit failed: {}", e);
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <div class="page" style="min-height: 100vh; display: flex; flex-direction: column;">
                <main style="flex: 1;">
                    <Routes>
                        <Route path="/*any" view=PageOutlet/>
                    </Routes>
                </main>
                <Footer/>
            </div>
        </Router>
    }
}

/// Placeholder for the real pages, which live outside this repository.
/// Shows which route was reached so footer links can be followed.
#[component]
fn PageOutlet() -> impl IntoView {
    let location = use_location();
    let title = move || page_title(&location.pathname.get());

    view! {
        <section style="max-width: 1200px; margin: 0 auto; padding: 64px 24px;">
            <h1>{title}</h1>
        </section>
    }
}

/// Heading for a client route: the footer label pointing at it, or the
/// brand name for anything else.
pub fn page_title(path: &str) -> String {
    FooterContent::nav_sections()
        .iter()
        .flat_map(|section| section.links.iter())
        .chain(FooterContent::legal_links().iter())
        .find(|link| link.destination == path)
        .map(|link| link.label.to_string())
        .unwrap_or_else(|| APP_NAME.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_title_uses_first_matching_label() {
        assert_eq!(page_title("/jobs"), "Browse Jobs");
        assert_eq!(page_title("/recruiter/applications"), "Applications");
        // "/messages" is linked from two columns; the job seeker one wins.
        assert_eq!(page_title("/messages"), "Messages");
        assert_eq!(page_title("/cookies"), "Cookies");
    }

    #[test]
    fn test_page_title_falls_back_to_brand() {
        assert_eq!(page_title("/"), "TalentHub");
        assert_eq!(page_title("/nowhere"), "TalentHub");
    }
}
