use leptos::portal::Portal;
use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use leptos::wasm_bindgen::JsCast;

use crate::core::CloseTrigger;
use crate::ui::icon::{Icon, icons};

/// Full-viewport overlay showing its content at contained size
///
/// Mounted on `<body>` so transformed ancestors cannot clip it. Closes on a click on the backdrop itself, the close button or Escape.
/// What to do on close (state reset, scroll restoration) is up to the owner.
#[component]
pub fn Lightbox(
    /// Whether the lightbox is open
    is_open: Signal<bool>,
    /// Called with what closed the lightbox
    on_close: Callback<CloseTrigger>,
    /// Accessible label for the dialog
    #[prop(default = "Image preview")]
    label: &'static str,
    children: ChildrenFn,
) -> impl IntoView {
    // Close on Escape key, listening only while open
    #[cfg(feature = "hydrate")]
    {
        use leptos::ev::keydown;

        let handle_keydown = StoredValue::new_local(None::<WindowListenerHandle>);
        let unlisten = move || {
            handle_keydown.try_update_value(|handle| {
                if let Some(handle) = handle.take() {
                    handle.remove();
                }
            });
        };

        Effect::new(move |_| {
            if !is_open.get() {
                unlisten();
                return;
            }
            if handle_keydown.with_value(Option::is_some) {
                return;
            }
            let handle = window_event_listener(keydown, move |ev| {
                if ev.key() == "Escape" {
                    on_close.run(CloseTrigger::Escape);
                }
            });
            handle_keydown.set_value(Some(handle));
        });

        on_cleanup(unlisten);
    }

    let children = StoredValue::new(children);

    view! {
        <Portal>
            <Show when=move || is_open.get()>
                <div
                    class="lightbox-backdrop fixed inset-0 z-[100] flex items-center justify-center bg-black/90 backdrop-blur-sm"
                    role="dialog"
                    aria-modal="true"
                    aria-label=label
                    on:click=move |e| {
                        #[cfg(feature = "hydrate")]
                        {
                            if let Some(element) = e
                                .target()
                                .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
                            {
                                if element.class_list().contains("lightbox-backdrop") {
                                    on_close.run(CloseTrigger::Backdrop);
                                }
                            }
                        }
                        #[cfg(not(feature = "hydrate"))]
                        {
                            let _ = e;
                        }
                    }
                >
                    <button
                        class="lightbox-close absolute top-6 right-6 flex h-11 w-11 items-center justify-center rounded-full border border-white/20 bg-white/10 hover:bg-white/20 transition-colors"
                        on:click=move |_| on_close.run(CloseTrigger::CloseButton)
                        title="Close"
                        aria-label="Close image"
                    >
                        <Icon name=icons::X class="w-5 h-5 invert" />
                    </button>
                    {children.with_value(|children| children())}
                </div>
            </Show>
        </Portal>
    }
}
