use crate::modals::scroll_lock::use_scroll_lock;
use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ModalShellProps {
    pub open: bool,
    pub title: AttrValue,
    /// False while a request is in flight: Escape, backdrop and ✕ do nothing.
    pub dismissable: bool,
    pub on_close: Callback<()>,
    pub children: Children,
}

/// Backdrop, dialog frame and close handling shared by the video dialogs.
#[function_component(ModalShell)]
pub fn modal_shell(props: &ModalShellProps) -> Html {
    use_scroll_lock(props.open);

    {
        let on_close = props.on_close.clone();
        use_effect_with(
            (props.open && props.dismissable, on_close),
            |(listening, on_close)| {
                let listener = listening
                    .then(|| web_sys::window().and_then(|w| w.document()))
                    .flatten()
                    .map(|document| {
                        let on_close = on_close.clone();
                        EventListener::new(&document, "keydown", move |event| {
                            let escape = event
                                .dyn_ref::<KeyboardEvent>()
                                .is_some_and(|e| e.key() == "Escape");
                            if escape {
                                on_close.emit(());
                            }
                        })
                    });
                move || drop(listener)
            },
        );
    }

    if !props.open {
        return html! {};
    }

    let on_backdrop = {
        let on_close = props.on_close.clone();
        let dismissable = props.dismissable;
        Callback::from(move |_: MouseEvent| {
            if dismissable {
                on_close.emit(());
            }
        })
    };
    let on_close_button = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <>
            <div class="fixed inset-0 z-50 bg-black/50 backdrop-blur-sm" />
            <div
                class="fixed inset-0 z-50 flex items-center justify-center p-4"
                role="dialog"
                aria-modal="true"
                onclick={on_backdrop}
            >
                <div class="relative w-full max-w-xl">
                    <div class="rounded-2xl bg-white p-6 shadow-2xl" onclick={keep_open}>
                        <div class="mb-6 flex items-center justify-between">
                            <h2 class="text-2xl font-bold text-gray-900">{ props.title.clone() }</h2>
                            <button
                                type="button"
                                onclick={on_close_button}
                                disabled={!props.dismissable}
                                class="cursor-pointer p-2 text-gray-400 transition-colors hover:text-gray-600 disabled:cursor-default disabled:opacity-50"
                                aria-label="Close modal"
                            >
                                <svg class="h-6 w-6" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12" />
                                </svg>
                            </button>
                        </div>
                        { for props.children.iter() }
                    </div>
                </div>
            </div>
        </>
    }
}
