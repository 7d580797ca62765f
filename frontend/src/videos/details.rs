use crate::layout::states::{ErrorState, Variant};
use crate::models::Video;
use crate::player::components::{VideoPlayer, VideoPlayerSkeleton};
use crate::query::{use_video, QueryState};
use crate::utils::{avatar_initial, format_iso8601_date, time_ago};
use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Element, KeyboardEvent, Node};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct VideoSectionProps {
    pub video_id: AttrValue,
    pub on_edit: Callback<Video>,
}

/// Player and details for one video, or a page-level error.
#[function_component(VideoSection)]
pub fn video_section(props: &VideoSectionProps) -> Html {
    let video = use_video(&props.video_id);

    match &video.state {
        QueryState::Loading => html! {
            <>
                <VideoPlayerSkeleton />
                <VideoDetailsSkeleton />
            </>
        },
        QueryState::Error(_) => html! {
            <div class="flex min-h-[60vh] items-center justify-center">
                <ErrorState
                    title="Video not found"
                    message="We couldn't load this video. It may have been deleted or the link is invalid."
                    on_retry={video.refetch_callback::<()>()}
                    variant={Variant::Page}
                />
            </div>
        },
        QueryState::Data(data) => html! {
            <>
                <VideoPlayer key={data.id.clone()} src={data.video_url.clone()} />
                <VideoDetails video={data.clone()} on_edit={props.on_edit.clone()} />
            </>
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct VideoDetailsProps {
    pub video: Video,
    pub on_edit: Callback<Video>,
}

#[function_component(VideoDetails)]
pub fn video_details(props: &VideoDetailsProps) -> Html {
    let video = &props.video;
    let on_edit = {
        let on_edit = props.on_edit.clone();
        let video = video.clone();
        Callback::from(move |_: ()| on_edit.emit(video.clone()))
    };

    html! {
        <div class="mt-4 flex flex-col gap-4">
            <div class="flex items-start justify-between gap-4">
                <h1 class="flex-1 text-2xl font-semibold">{ &video.title }</h1>
                <VideoDropdownMenu on_edit={on_edit} />
            </div>
            <div class="flex items-center gap-3 text-sm text-gray-500">
                <div class="flex h-10 w-10 items-center justify-center rounded-full bg-blue-100 font-bold text-blue-700">
                    { avatar_initial(&video.user_id) }
                </div>
                <span class="font-semibold text-gray-900">{ &video.user_id }</span>
                <span title={format_iso8601_date(&video.created_at)}>{ format!("• {}", time_ago(&video.created_at)) }</span>
            </div>
            <div class="rounded-lg bg-gray-50 p-4">
                <ExpandableText text={video.description.clone()} />
            </div>
        </div>
    }
}

#[function_component(VideoDetailsSkeleton)]
pub fn video_details_skeleton() -> Html {
    html! {
        <div class="mt-4 flex flex-col gap-4">
            <div class="flex items-start justify-between gap-4">
                <div class="h-8 w-3/4 animate-pulse rounded bg-gray-200" />
                <div class="h-8 w-8 animate-pulse rounded bg-gray-200" />
            </div>
            <div class="h-4 w-full animate-pulse rounded bg-gray-200" />
            <div class="h-4 w-2/3 animate-pulse rounded bg-gray-200" />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct VideoDropdownMenuProps {
    pub on_edit: Callback<()>,
}

#[function_component(VideoDropdownMenu)]
pub fn video_dropdown_menu(props: &VideoDropdownMenuProps) -> Html {
    let open = use_state(|| false);
    let container_ref = use_node_ref();

    {
        let open = open.clone();
        let container_ref = container_ref.clone();
        use_effect_with(*open, move |is_open| {
            let listeners = is_open
                .then(|| web_sys::window().and_then(|w| w.document()))
                .flatten()
                .map(|document| {
                    let close_outside = {
                        let open = open.clone();
                        EventListener::new(&document, "mousedown", move |event| {
                            let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
                            let inside = container_ref
                                .cast::<Element>()
                                .is_some_and(|container| container.contains(target.as_ref()));
                            if !inside {
                                open.set(false);
                            }
                        })
                    };
                    let close_on_escape = EventListener::new(&document, "keydown", move |event| {
                        if event
                            .dyn_ref::<KeyboardEvent>()
                            .is_some_and(|e| e.key() == "Escape")
                        {
                            open.set(false);
                        }
                    });
                    [close_outside, close_on_escape]
                });
            move || drop(listeners)
        });
    }

    let on_toggle = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(!*open))
    };

    let on_edit = {
        let open = open.clone();
        let on_edit = props.on_edit.clone();
        Callback::from(move |_: MouseEvent| {
            on_edit.emit(());
            open.set(false);
        })
    };

    html! {
        <div class="relative" ref={container_ref}>
            <button
                type="button"
                onclick={on_toggle}
                class="cursor-pointer rounded-lg bg-gray-100 p-2 text-gray-500 transition-colors hover:bg-gray-200 hover:text-gray-700"
                aria-label="Video options"
                aria-expanded={open.to_string()}
                aria-haspopup="true"
            >
                <svg class="h-5 w-5" fill="currentColor" viewBox="0 0 20 20">
                    <path d="M10 6a2 2 0 110-4 2 2 0 010 4zM10 12a2 2 0 110-4 2 2 0 010 4zM10 18a2 2 0 110-4 2 2 0 010 4z" />
                </svg>
            </button>
            if *open {
                <div
                    class="absolute right-0 top-full z-50 mt-1 w-48 rounded-lg border border-gray-200 bg-white py-1 shadow-lg"
                    role="menu"
                    aria-orientation="vertical"
                >
                    <button
                        type="button"
                        onclick={on_edit}
                        class="w-full cursor-pointer px-4 py-2 text-left text-sm text-gray-700 transition-colors hover:bg-gray-100"
                        role="menuitem"
                    >
                        { "Edit Video" }
                    </button>
                </div>
            }
        </div>
    }
}

/// Whether content of `scroll_height` spills past the collapsed box. One pixel
/// of slack absorbs rounding.
pub fn overflows(scroll_height: i32, collapsed_height_px: u32) -> bool {
    i64::from(scroll_height) > i64::from(collapsed_height_px) + 1
}

#[derive(Properties, PartialEq)]
pub struct ExpandableTextProps {
    pub text: AttrValue,
    #[prop_or(48)]
    pub collapsed_height_px: u32,
}

#[function_component(ExpandableText)]
pub fn expandable_text(props: &ExpandableTextProps) -> Html {
    let content_ref = use_node_ref();
    let expanded = use_state(|| false);
    let expanded_height = use_state(|| None::<i32>);
    let show_toggle = use_state(|| false);

    {
        let content_ref = content_ref.clone();
        let show_toggle = show_toggle.clone();
        use_effect_with(
            (props.text.clone(), props.collapsed_height_px),
            move |(_, collapsed)| {
                if let Some(content) = content_ref.cast::<Element>() {
                    show_toggle.set(overflows(content.scroll_height(), *collapsed));
                }
                || ()
            },
        );
    }

    let on_toggle = {
        let content_ref = content_ref.clone();
        let expanded = expanded.clone();
        let expanded_height = expanded_height.clone();
        Callback::from(move |_: MouseEvent| {
            if *expanded {
                expanded.set(false);
            } else if let Some(content) = content_ref.cast::<Element>() {
                // Measured right before expanding so late layout changes count
                expanded_height.set(Some(content.scroll_height()));
                expanded.set(true);
            }
        })
    };

    if props.text.is_empty() {
        return html! {};
    }

    let collapsed = props.collapsed_height_px as i32;
    let max_height = if *expanded {
        expanded_height.unwrap_or(collapsed)
    } else {
        collapsed
    };

    html! {
        <div class="relative">
            <div
                class="overflow-hidden transition-[max-height] duration-300 ease-out"
                style={format!("max-height: {max_height}px")}
                aria-expanded={expanded.to_string()}
            >
                <div ref={content_ref} class="whitespace-pre-line leading-6 text-gray-600">
                    { props.text.clone() }
                </div>
            </div>
            if !*expanded && *show_toggle {
                <div class="pointer-events-none absolute inset-x-0 bottom-6 h-6 bg-gradient-to-b from-transparent to-gray-50" />
            }
            if *show_toggle {
                <button
                    type="button"
                    onclick={on_toggle}
                    class="mt-2 cursor-pointer text-sm text-blue-600 transition-colors hover:text-blue-700"
                >
                    { if *expanded { "...hide" } else { "...show" } }
                </button>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_only_when_content_spills() {
        assert!(!overflows(24, 48));
        assert!(!overflows(49, 48));
        assert!(overflows(50, 48));
        assert!(overflows(400, 48));
    }
}
