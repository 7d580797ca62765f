use crate::api;
use crate::env_variable_utils::USER_ID;
use crate::models::{CreateVideoRequest, Video};
use crate::modals::context::use_modal;
use crate::modals::shell::ModalShell;
use crate::modals::validation::{submit_error, url_feedback};
use crate::query::{use_create_video, use_query_client, QueryKey};
use crate::router::Route;
use web_sys::{HtmlInputElement, HtmlTextAreaElement, SubmitEvent};
use yew::prelude::*;
use yew_router::prelude::*;

/// Every field filled, no pending URL complaint, nothing in flight.
pub fn form_ready(title: &str, description: &str, video_url: &str, url_error: bool, pending: bool) -> bool {
    !pending
        && !url_error
        && !title.trim().is_empty()
        && !description.trim().is_empty()
        && !video_url.trim().is_empty()
}

/// Where to land after a create: the head of the re-fetched list.
///
/// The backend does not return the new id, so this assumes the list comes
/// back newest first. An empty list falls back to the video index.
pub fn created_video_route(videos: &[Video]) -> Route {
    videos
        .first()
        .map(|video| Route::VideoDetail { id: video.id.clone() })
        .unwrap_or(Route::Videos)
}

#[function_component(VideoCreateModal)]
pub fn video_create_modal() -> Html {
    let modal = use_modal();
    let client = use_query_client();
    let navigator = use_navigator();
    let create = use_create_video(&USER_ID);

    let title = use_state(String::new);
    let description = use_state(String::new);
    let video_url = use_state(String::new);
    let url_error = use_state(|| None::<&'static str>);

    let pending = create.is_pending();

    let reset = {
        let title = title.clone();
        let description = description.clone();
        let video_url = video_url.clone();
        let url_error = url_error.clone();
        Callback::from(move |_: ()| {
            title.set(String::new());
            description.set(String::new());
            video_url.set(String::new());
            url_error.set(None);
        })
    };

    let on_close = {
        let reset = reset.clone();
        let modal = modal.clone();
        Callback::from(move |_: ()| {
            if !pending {
                reset.emit(());
                modal.close();
            }
        })
    };

    let on_title = {
        let title = title.clone();
        Callback::from(move |e: InputEvent| title.set(e.target_unchecked_into::<HtmlInputElement>().value()))
    };
    let on_description = {
        let description = description.clone();
        Callback::from(move |e: InputEvent| {
            description.set(e.target_unchecked_into::<HtmlTextAreaElement>().value())
        })
    };
    let on_url = {
        let video_url = video_url.clone();
        let url_error = url_error.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            url_error.set(url_feedback(&value));
            video_url.set(value);
        })
    };

    let on_submit = {
        let create = create.clone();
        let title = title.clone();
        let description = description.clone();
        let video_url = video_url.clone();
        let url_error = url_error.clone();
        let modal = modal.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if create.is_pending() {
                return;
            }
            if let Some(message) = submit_error(&video_url) {
                url_error.set(Some(message));
                return;
            }

            let request = CreateVideoRequest {
                user_id: USER_ID.clone(),
                title: (*title).clone(),
                description: (*description).clone(),
                video_url: (*video_url).clone(),
            };
            let client = client.clone();
            let navigator = navigator.clone();
            let reset = reset.clone();
            let modal = modal.clone();

            create.mutate(request, move || {
                wasm_bindgen_futures::spawn_local(async move {
                    let target = match api::list_videos_by_user(&USER_ID).await {
                        Ok(videos) => {
                            let target = created_video_route(&videos);
                            client.set_query_data(QueryKey::Videos(USER_ID.clone()), videos);
                            target
                        }
                        Err(e) => {
                            log::error!("Reloading videos after create failed: {}", e);
                            Route::Videos
                        }
                    };
                    if let Some(navigator) = navigator {
                        navigator.push(&target);
                    }
                    reset.emit(());
                    modal.close();
                });
            });
        })
    };

    let ready = form_ready(&title, &description, &video_url, url_error.is_some(), pending);
    let url_border = if url_error.is_some() {
        "border-red-300 focus:ring-red-500"
    } else {
        "border-gray-300 focus:ring-blue-500"
    };

    html! {
        <ModalShell open={modal.is_open} title="Create New Video" dismissable={!pending} on_close={on_close.clone()}>
            <form onsubmit={on_submit} class="space-y-4">
                <div>
                    <label for="title" class="mb-2 block text-sm font-medium text-gray-700">{ "Title" }</label>
                    <input
                        id="title"
                        type="text"
                        class="w-full rounded-lg border border-gray-300 px-4 py-3 transition-colors focus:border-transparent focus:ring-2 focus:ring-blue-500"
                        placeholder="Enter video title"
                        value={(*title).clone()}
                        oninput={on_title}
                        required={true}
                        disabled={pending}
                    />
                </div>

                <div>
                    <label for="description" class="mb-2 block text-sm font-medium text-gray-700">{ "Description" }</label>
                    <textarea
                        id="description"
                        rows="4"
                        class="w-full resize-none rounded-lg border border-gray-300 px-4 py-3 transition-colors focus:border-transparent focus:ring-2 focus:ring-blue-500"
                        placeholder="Enter video description"
                        value={(*description).clone()}
                        oninput={on_description}
                        required={true}
                        disabled={pending}
                    />
                </div>

                <div>
                    <label for="videoUrl" class="mb-2 block text-sm font-medium text-gray-700">{ "Video URL" }</label>
                    <input
                        id="videoUrl"
                        type="url"
                        class={classes!("w-full", "rounded-lg", "border", "px-4", "py-3", "transition-colors", "focus:border-transparent", "focus:ring-2", url_border)}
                        placeholder="https://example.com/video.mp4"
                        value={(*video_url).clone()}
                        oninput={on_url}
                        required={true}
                        disabled={pending}
                    />
                    {
                        match *url_error {
                            Some(message) => html! { <p class="mt-1 text-sm text-red-600">{ message }</p> },
                            None => html! {
                                <p class="mt-1 text-sm text-gray-500">
                                    { "Enter a direct link to a video file (MP4, WebM, OGG, MOV, AVI, MKV)" }
                                </p>
                            },
                        }
                    }
                </div>

                if create.error().is_some() {
                    <div class="rounded-lg border border-red-200 bg-red-50 p-3">
                        <p class="text-sm text-red-600">{ "Failed to create video. Please try again." }</p>
                    </div>
                }

                <div class="flex items-center justify-end gap-3 pt-4">
                    <button
                        type="button"
                        onclick={Callback::from(move |_: MouseEvent| on_close.emit(()))}
                        disabled={pending}
                        class="cursor-pointer rounded-lg bg-gray-100 px-6 py-3 text-gray-700 transition-colors hover:bg-gray-200 disabled:cursor-default disabled:opacity-50"
                    >
                        { "Cancel" }
                    </button>
                    <button
                        type="submit"
                        disabled={!ready}
                        class="cursor-pointer rounded-lg bg-blue-600 px-6 py-3 text-white transition-colors hover:bg-blue-700 disabled:cursor-default disabled:opacity-50"
                    >
                        { if pending { "Creating..." } else { "Create Video" } }
                    </button>
                </div>
            </form>
        </ModalShell>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_fields_are_required() {
        let url = "https://example.com/a.mp4";
        assert!(form_ready("Intro", "About", url, false, false));
        assert!(!form_ready("  ", "About", url, false, false));
        assert!(!form_ready("Intro", "", url, false, false));
        assert!(!form_ready("Intro", "About", " ", false, false));
    }

    #[test]
    fn url_complaint_or_pending_blocks_submit() {
        let url = "https://example.com/a.mp4";
        assert!(!form_ready("Intro", "About", url, true, false));
        assert!(!form_ready("Intro", "About", url, false, true));
    }

    fn video(id: &str, created_at: &str) -> Video {
        Video {
            id: id.into(),
            user_id: "john_smith".into(),
            title: format!("Video {id}"),
            description: String::new(),
            video_url: format!("https://example.com/{id}.mp4"),
            created_at: created_at.into(),
            num_comments: 0,
        }
    }

    #[test]
    fn lands_on_head_of_refetched_list() {
        let videos = [
            video("fresh", "2024-03-02T10:00:00Z"),
            video("older", "2024-03-01T10:00:00Z"),
        ];
        assert_eq!(
            created_video_route(&videos),
            Route::VideoDetail { id: "fresh".into() }
        );
    }

    #[test]
    fn empty_list_falls_back_to_index() {
        assert_eq!(created_video_route(&[]), Route::Videos);
    }
}
