//! Level header: breadcrumbs, folder title, item count, and filter input.

use leptos::ev;
use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen::JsCast;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::labels;
use crate::core::{Breadcrumb, LevelView, PreviewCard, breadcrumbs};
use crate::models::BrowseRoute;

stylance::import_crate_style!(css, "src/components/browser/header.module.css");

/// Header of one level. Created anew for every path.
#[component]
pub fn LevelHeader(path: String, level: Memo<LevelView<PreviewCard>>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let crumbs = breadcrumbs::build(&path);

    let title = Memo::new(move |_| {
        level.with(|view| match view {
            LevelView::Listing(listing) => listing.name.clone(),
            LevelView::Unresolved(unresolved) => unresolved
                .breadcrumbs
                .last()
                .map(|crumb| crumb.label.clone())
                .unwrap_or_default(),
        })
    });
    let item_count = Memo::new(move |_| {
        level.with(|view| view.as_listing().map(|listing| listing.item_count.clone()))
    });
    let resolved = Memo::new(move |_| level.with(|view| view.as_listing().is_some()));

    // Restore the level's filter when an ancestor is shown again
    let initial_filter = ctx
        .navigator
        .with_untracked(|nav| nav.filter().unwrap_or_default().to_string());

    let handle_input = move |ev: ev::Event| {
        let Some(target) = ev.target() else { return };
        let input = target.unchecked_into::<web_sys::HtmlInputElement>();
        let value = input.value();
        ctx.navigator.update(|nav| nav.set_filter(&value));
    };

    let input_id = format!("{}-filter", path);

    view! {
        <section class=css::header>
            {(!crumbs.is_empty()).then(|| view! { <Breadcrumbs crumbs=crumbs /> })}

            <div class=css::titleRow>
                <div class=css::title>
                    <h2 class=css::titleLabel>
                        <span class=css::titleIcon><Icon icon=ic::FOLDER /></span>
                        {move || title.get()}
                    </h2>
                    <h3 class=css::itemCount>{move || item_count.get()}</h3>
                </div>

                <Show when=move || resolved.get()>
                    <label class=css::filter>
                        <span class=css::filterIcon><Icon icon=ic::SEARCH /></span>
                        <input
                            id=input_id.clone()
                            type="text"
                            class=css::filterInput
                            data-role="filter"
                            placeholder=labels::FILTER_PLACEHOLDER
                            autocomplete="off"
                            spellcheck="false"
                            prop:value=initial_filter.clone()
                            on:input=handle_input
                        />
                    </label>
                </Show>
            </div>
        </section>
    }
}

/// Breadcrumb trail. The last crumb is the current level and not a link.
#[component]
fn Breadcrumbs(crumbs: Vec<Breadcrumb>) -> impl IntoView {
    view! {
        <nav class=css::breadcrumbs aria-label="Breadcrumb">
            <a class=css::crumb href=BrowseRoute::default().to_hash() title="Library root">
                <Icon icon=ic::HOME />
            </a>
            {crumbs
                .into_iter()
                .map(|crumb| {
                    let segment = match crumb.link() {
                        Some(target) => {
                            view! {
                                <a class=css::crumb href=BrowseRoute::new(target).to_hash()>
                                    {crumb.label.clone()}
                                </a>
                            }
                                .into_any()
                        }
                        None => {
                            view! {
                                <span
                                    class=format!("{} {}", css::crumb, css::crumbCurrent)
                                    aria-current="page"
                                >
                                    <b>{crumb.label.clone()}</b>
                                </span>
                            }
                                .into_any()
                        }
                    };

                    view! {
                        <>
                            <span class=css::separator>
                                <Icon icon=ic::CHEVRON_RIGHT />
                            </span>
                            {segment}
                        </>
                    }
                })
                .collect_view()}
        </nav>
    }
}
