//! Main browser component.
//!
//! Shows the navigator's current level: header (breadcrumbs, title, filter),
//! the entry grid or an error state, and the preview overlay when open.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::{EntryGrid, LevelHeader, PreviewModal};
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::core::{CardPreview, LevelView, Unresolved};
use crate::models::BrowseRoute;
use crate::utils::dom::focus_filter_input;

stylance::import_crate_style!(css, "src/components/browser/browser.module.css");

/// Library browser view component.
#[component]
pub fn Browser() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let level = Memo::new(move |_| ctx.navigator.with(|nav| nav.view(&CardPreview)));
    let path = Memo::new(move |_| ctx.navigator.with(|nav| nav.path().to_string()));
    let preview = Memo::new(move |_| {
        level.with(|view| view.as_listing().and_then(|listing| listing.preview.clone()))
    });

    // Focus the filter of each newly shown level
    Effect::new(move |_| {
        path.track();
        focus_filter_input();
    });

    view! {
        <article class=css::browser>
            // Keyed by path: every level gets its own filter input
            {move || {
                let path = path.get();
                view! { <LevelHeader path=path level=level /> }
            }}

            {move || match level.get() {
                LevelView::Listing(listing) => view! { <EntryGrid listing=listing /> }.into_any(),
                LevelView::Unresolved(unresolved) => {
                    view! { <UnresolvedState unresolved=unresolved /> }.into_any()
                }
            }}

            {move || preview.get().map(|overlay| view! { <PreviewModal overlay=overlay /> })}
        </article>
    }
}

/// Error state for a path that does not resolve.
///
/// Links back to the deepest ancestor that did resolve.
#[component]
fn UnresolvedState(unresolved: Unresolved) -> impl IntoView {
    let fallback = unresolved
        .error
        .depth
        .checked_sub(1)
        .and_then(|idx| unresolved.breadcrumbs.get(idx))
        .map(|crumb| BrowseRoute::new(&crumb.target_path))
        .unwrap_or_default();
    let detail = unresolved.error.to_string();

    view! {
        <div class=css::unresolved role="alert">
            <p class=css::unresolvedMessage>{unresolved.message}</p>
            <p class=css::unresolvedDetail>{detail}</p>
            <a class=css::unresolvedLink href=fallback.to_hash()>
                <Icon icon=ic::HOME />
                <span>"Back"</span>
            </a>
        </div>
    }
}
