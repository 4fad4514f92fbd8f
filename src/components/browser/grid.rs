//! Entry grid: folder tiles, then file tiles.

use leptos::ev;
use leptos::prelude::*;
use leptos_icons::Icon;

use super::preview::Thumbnail;
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::labels;
use crate::core::{FileTile, FolderTile, Listing, PreviewCard};
use crate::models::BrowseRoute;

stylance::import_crate_style!(css, "src/components/browser/grid.module.css");

/// Filtered children of the current level.
#[component]
pub fn EntryGrid(listing: Listing<PreviewCard>) -> impl IntoView {
    let no_matches = listing.no_matches();
    let Listing { folders, files, .. } = listing;
    let show_divider = !folders.is_empty() && !files.is_empty();

    view! {
        <section class=css::grid aria-label="Folders">
            {folders
                .into_iter()
                .map(|tile| view! { <FolderCard tile=tile /> })
                .collect_view()}
        </section>

        {show_divider.then(|| view! { <hr class=css::divider /> })}

        <section class=css::grid aria-label="Files">
            {files.into_iter().map(|tile| view! { <FileCard tile=tile /> }).collect_view()}
        </section>

        {no_matches.then(|| view! { <p class=css::empty>{labels::NO_MATCHES}</p> })}
    }
}

#[component]
fn FolderCard(tile: FolderTile) -> impl IntoView {
    let FolderTile {
        name,
        label,
        target_path,
        item_count,
    } = tile;

    view! {
        <div class=format!("{} {}", css::card, css::folderCard)>
            <span class=css::cardIcon>
                <Icon icon=ic::FOLDER />
            </span>
            <a class=css::folderLink href=BrowseRoute::new(&target_path).to_hash() title=name>
                {label}
            </a>
            <span class=css::cardMeta>{item_count}</span>
        </div>
    }
}

#[component]
fn FileCard(tile: FileTile<PreviewCard>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let FileTile {
        name,
        label,
        size_mb,
        thumbnail,
    } = tile;
    let title = name.clone();

    let handle_select = move |_: ev::MouseEvent| {
        ctx.navigator.update(|nav| {
            if let Err(err) = nav.select_file(&name) {
                tracing::warn!(error = %err, "file tile could not be previewed");
            }
        });
    };

    view! {
        <button
            type="button"
            class=format!("{} {}", css::card, css::fileCard)
            title=title
            on:click=handle_select
        >
            <Thumbnail card=thumbnail />
            <span class=css::fileName>{label}</span>
            <span class=css::cardMeta>{format!("{} MB", size_mb)}</span>
        </button>
    }
}
