//! Root application module.
//!
//! Contains the main App component and the AppContext definition, following
//! Leptos conventions.

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::components::browser::Browser;
use crate::config::{APP_NAME, LIBRARY_MANIFEST, ROOT_LABEL};
use crate::core::Navigator;
use crate::models::{BrowseRoute, DirectoryNode, Manifest};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/app.module.css");

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and accessed from any child
/// component using `use_context::<AppContext>()`.
///
/// This struct is `Copy` because its only field is a Leptos signal.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Browsing session over the embedded library.
    pub navigator: RwSignal<Navigator>,
}

impl AppContext {
    /// Creates the context from the embedded manifest, starting at the path
    /// in the current URL hash.
    pub fn new() -> Self {
        Self::with_library(load_library(), &BrowseRoute::current().path)
    }

    pub fn with_library(tree: DirectoryNode, path: &str) -> Self {
        Self {
            navigator: RwSignal::new(Navigator::new(tree, path)),
        }
    }

    /// Navigate to the route in the URL hash.
    pub fn sync_route(&self) {
        let route = BrowseRoute::current();
        self.navigator.update(|nav| nav.navigate(&route.path));
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the tree from the embedded manifest.
///
/// Falls back to an empty library when the manifest is broken.
fn load_library() -> DirectoryNode {
    match Manifest::from_json(LIBRARY_MANIFEST) {
        Ok(manifest) => DirectoryNode::from_manifest(ROOT_LABEL, &manifest),
        Err(err) => {
            tracing::error!(%err, "embedded manifest rejected");
            DirectoryNode::new(ROOT_LABEL)
        }
    }
}

/// Root application component.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Keeps the navigator in sync with the URL hash
/// - Renders the Browser
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    // Canonicalize hand-typed hashes like `#//a/`
    let raw = dom::get_hash();
    let canonical = BrowseRoute::from_hash(&raw).to_hash();
    if !raw.is_empty() && format!("#{}", raw) != canonical {
        dom::replace_hash(&canonical);
    }

    // Set up hashchange event listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            ctx.sync_route();
        }) as Box<dyn Fn()>);

        if let Some(window) = dom::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    view! {
        <div class=css::app>
            <header class=css::banner>
                <a class=css::brand href=BrowseRoute::default().to_hash()>{APP_NAME}</a>
            </header>
            <main class=css::main>
                <Browser />
            </main>
        </div>
    }
}
