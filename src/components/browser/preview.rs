//! File previews: grid thumbnails and the enlarged modal.

use leptos::ev;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::labels;
use crate::core::{PreviewCard, PreviewOverlay};

stylance::import_crate_style!(css, "src/components/browser/preview.module.css");

/// Small rendering of a file inside its tile.
#[component]
pub fn Thumbnail(card: PreviewCard) -> impl IntoView {
    view! {
        <div class=css::thumbnail data-mode=card.mode.as_str()>
            <span class=css::thumbnailIcon>
                <Icon icon=ic::for_kind(card.kind) />
            </span>
            <span class=css::thumbnailKind>{card.kind.label()}</span>
        </div>
    }
}

/// Enlarged preview of the selected file.
///
/// Closing (button, backdrop, or Escape) returns the level to its listing.
#[component]
pub fn PreviewModal(overlay: PreviewOverlay<PreviewCard>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let close = move || ctx.navigator.update(|nav| nav.close_preview());

    // Escape only reaches the dialog while it has focus
    let dialog = NodeRef::<leptos::html::Div>::new();
    Effect::new(move |_| {
        if let Some(el) = dialog.get() {
            let _ = el.focus();
        }
    });

    let handle_keydown = move |ev: ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            close();
        }
    };

    let PreviewOverlay {
        title,
        name,
        content,
    } = overlay;
    let PreviewCard {
        title: heading,
        kind,
        details,
        ..
    } = content;

    view! {
        <div class=css::backdrop on:click=move |_| close()>
            <div
                class=css::modal
                role="dialog"
                aria-modal="true"
                aria-label=labels::PREVIEW_TITLE
                tabindex="-1"
                node_ref=dialog
                on:click=|ev: ev::MouseEvent| ev.stop_propagation()
                on:keydown=handle_keydown
            >
                <header class=css::modalHeader>
                    <h2 class=css::modalTitle>{title}</h2>
                    <button
                        type="button"
                        class=css::closeButton
                        title="Close preview"
                        aria-label="Close preview"
                        on:click=move |_| close()
                    >
                        <Icon icon=ic::CLOSE />
                    </button>
                </header>

                <div class=css::modalBody>
                    <span class=css::previewIcon>
                        <Icon icon=ic::for_kind(kind) />
                    </span>
                    <h3 class=css::previewName title=name>{heading}</h3>
                    <dl class=css::details>
                        {details
                            .into_iter()
                            .map(|(label, value)| view! {
                                <>
                                    <dt>{label}</dt>
                                    <dd>{value}</dd>
                                </>
                            })
                            .collect_view()}
                    </dl>
                </div>
            </div>
        </div>
    }
}
