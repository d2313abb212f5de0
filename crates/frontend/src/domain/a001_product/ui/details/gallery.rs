//! Main image, thumbnail strip and lightbox for one product.
//!
//! Everything reads one `RwSignal<GalleryState>`, so an index change updates
//! the main image, the open lightbox and the active thumbnail in the same pass.

use crate::shared::icons::icon;
use contracts::shared::gallery::{GalleryState, SwipeTracker};
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, KeyboardEvent, MouseEvent, PointerEvent};

#[component]
pub fn Gallery(images: Vec<String>, #[prop(into)] alt: String) -> impl IntoView {
    let gallery = RwSignal::new(GalleryState::new(images));

    if gallery.with_untracked(|g| g.images().is_empty()) {
        return view! { <div class="slider-wrapper slider-wrapper--empty"></div> }.into_any();
    }

    let swipe = StoredValue::new(SwipeTracker::default());

    // Bound for this gallery only; removed when the detail view is torn down.
    let keys = window_event_listener(ev::keydown, move |ev: KeyboardEvent| {
        match ev.key().as_str() {
            "ArrowLeft" => gallery.update(|g| g.prev()),
            "ArrowRight" => gallery.update(|g| g.next()),
            "Escape" => gallery.update(|g| g.close()),
            _ => {}
        }
    });
    on_cleanup(move || keys.remove());

    let on_pointer_down = move |ev: PointerEvent| {
        // Keep receiving the pointer when it leaves the image mid-drag.
        if let Some(target) = ev.current_target().and_then(|t| t.dyn_into::<Element>().ok()) {
            let _ = target.set_pointer_capture(ev.pointer_id());
        }
        swipe.update_value(|s| s.begin(ev.client_x() as f64, ev.client_y() as f64));
    };
    let on_pointer_up = move |ev: PointerEvent| {
        let mut step = None;
        swipe.update_value(|s| step = s.finish(ev.client_x() as f64, ev.client_y() as f64));
        if let Some(step) = step {
            gallery.update(|g| g.navigate(step));
        }
    };
    // False right after a swipe; the browser still fires a click for it.
    let take_click = move || {
        let mut take = true;
        swipe.update_value(|s| take = s.take_click());
        take
    };
    let on_pointer_cancel = move |_: PointerEvent| swipe.update_value(|s| s.cancel());

    let arrow = move |class: &'static str, step: isize, name: &'static str| {
        view! {
            <Show when=move || gallery.with(|g| g.has_navigation())>
                <button
                    class=class
                    aria-label=name
                    on:click=move |ev: MouseEvent| {
                        ev.stop_propagation();
                        gallery.update(|g| g.navigate(step));
                    }
                >
                    {icon(if step < 0 { "chevron-left" } else { "chevron-right" })}
                </button>
            </Show>
        }
    };

    let current = move || gallery.with(|g| g.current().unwrap_or_default().to_string());

    let thumbnails = gallery
        .with_untracked(|g| g.images().to_vec())
        .into_iter()
        .enumerate()
        .map(|(i, url)| {
            view! {
                <img
                    src=url
                    class=move || if gallery.with(|g| g.is_active(i)) { "thumb active" } else { "thumb" }
                    data-index=i.to_string()
                    on:click=move |_| gallery.update(|g| g.select(i))
                />
            }
        })
        .collect_view();

    let lightbox_alt = alt.clone();

    view! {
        <div
            class="slider-wrapper"
            style="touch-action: pan-y;"
            on:click=move |_| {
                if take_click() {
                    gallery.update(|g| g.open());
                }
            }
            on:pointerdown=on_pointer_down
            on:pointerup=on_pointer_up
            on:pointercancel=on_pointer_cancel
        >
            {arrow("slider-arrow prev", -1, "Previous image")}
            <img id="main-photo" src=current alt=alt draggable="false" />
            {arrow("slider-arrow next", 1, "Next image")}
        </div>

        <div class="thumbnail-container">{thumbnails}</div>

        <Show when=move || gallery.with(|g| g.is_open())>
            <div
                class="lightbox"
                on:click=move |_| {
                    if take_click() {
                        gallery.update(|g| g.close());
                    }
                }
            >
                <button
                    class="close-lightbox"
                    aria-label="Close"
                    on:click=move |ev: MouseEvent| {
                        ev.stop_propagation();
                        gallery.update(|g| g.close());
                    }
                >
                    {icon("x")}
                </button>
                {arrow("slider-arrow prev", -1, "Previous image")}
                <img
                    class="lightbox-content"
                    style="touch-action: pan-y;"
                    src=current
                    alt=lightbox_alt.clone()
                    draggable="false"
                    on:click=move |ev: MouseEvent| {
                        ev.stop_propagation();
                        take_click();
                    }
                    on:pointerdown=on_pointer_down
                    on:pointerup=on_pointer_up
                    on:pointercancel=on_pointer_cancel
                />
                {arrow("slider-arrow next", 1, "Next image")}
            </div>
        </Show>
    }
    .into_any()
}
