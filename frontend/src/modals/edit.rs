use crate::env_variable_utils::USER_ID;
use crate::models::{EditVideoRequest, Video};
use crate::modals::shell::ModalShell;
use crate::query::{use_edit_video, use_query_client, QueryKey};
use web_sys::{HtmlInputElement, HtmlTextAreaElement, SubmitEvent};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct VideoEditModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
    pub video: Option<Video>,
}

#[function_component(VideoEditModal)]
pub fn video_edit_modal(props: &VideoEditModalProps) -> Html {
    let client = use_query_client();
    let edit = use_edit_video();

    let initial = props
        .video
        .as_ref()
        .map(|v| (v.title.clone(), v.description.clone()))
        .unwrap_or_default();

    let title = use_state(|| initial.0.clone());
    let description = use_state(|| initial.1.clone());

    {
        let title = title.clone();
        let description = description.clone();
        use_effect_with(props.video.clone(), move |video| {
            if let Some(video) = video {
                title.set(video.title.clone());
                description.set(video.description.clone());
            }
            || ()
        });
    }

    let pending = edit.is_pending();

    let on_close = {
        let title = title.clone();
        let description = description.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_: ()| {
            if !pending {
                title.set(initial.0.clone());
                description.set(initial.1.clone());
                on_close.emit(());
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

    let on_submit = {
        let edit = edit.clone();
        let video = props.video.clone();
        let title = title.clone();
        let description = description.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(video) = video.as_ref() else {
                return;
            };
            if edit.is_pending() {
                return;
            }

            let request = EditVideoRequest {
                video_id: video.id.clone(),
                title: (*title).clone(),
                description: (*description).clone(),
            };
            let client = client.clone();
            let video_id = video.id.clone();
            let on_close = on_close.clone();

            edit.mutate(request, move || {
                client.invalidate_queries(&QueryKey::Videos(USER_ID.clone()));
                client.invalidate_queries(&QueryKey::Video(video_id));
                on_close.emit(());
            });
        })
    };

    if props.video.is_none() {
        return html! {};
    }

    let ready = !pending && !title.trim().is_empty() && !description.trim().is_empty();

    html! {
        <ModalShell open={props.open} title="Edit Video" dismissable={!pending} on_close={on_close.clone()}>
            <form onsubmit={on_submit} class="space-y-4">
                <div>
                    <label for="edit-title" class="mb-2 block text-sm font-medium text-gray-700">{ "Title" }</label>
                    <input
                        id="edit-title"
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
                    <label for="edit-description" class="mb-2 block text-sm font-medium text-gray-700">{ "Description" }</label>
                    <textarea
                        id="edit-description"
                        rows="4"
                        class="w-full resize-none rounded-lg border border-gray-300 px-4 py-3 transition-colors focus:border-transparent focus:ring-2 focus:ring-blue-500"
                        placeholder="Enter video description"
                        value={(*description).clone()}
                        oninput={on_description}
                        required={true}
                        disabled={pending}
                    />
                </div>

                if edit.error().is_some() {
                    <div class="rounded-lg border border-red-200 bg-red-50 p-3">
                        <p class="text-sm text-red-600">{ "Failed to update video. Please try again." }</p>
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
                        { if pending { "Saving..." } else { "Save Changes" } }
                    </button>
                </div>
            </form>
        </ModalShell>
    }
}
