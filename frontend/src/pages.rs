use crate::comments::section::CommentSection;
use crate::env_variable_utils::USER_ID;
use crate::layout::hero::HeroSection;
use crate::layout::states::{EmptyState, ErrorState, Variant};
use crate::modals::context::use_modal;
use crate::modals::edit::VideoEditModal;
use crate::models::Video;
use crate::query::{use_videos, QueryState};
use crate::videos::components::{FilterBar, VideoGrid, VideoGridSkeleton};
use crate::videos::details::VideoSection;
use crate::videos::sidebar::VideoSidebar;
use crate::videos::sort::{sort_videos, SortOption};
use yew::prelude::*;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    html! { <HeroSection /> }
}

#[function_component(VideosPage)]
pub fn videos_page() -> Html {
    let videos = use_videos(&USER_ID);
    let sort_by = use_state(SortOption::default);
    let modal = use_modal();

    let on_sort_change = {
        let sort_by = sort_by.clone();
        Callback::from(move |option: SortOption| sort_by.set(option))
    };

    let content = match &videos.state {
        QueryState::Loading => html! { <VideoGridSkeleton /> },
        QueryState::Error(_) => html! {
            <ErrorState
                title="Failed to load videos"
                message="We couldn't load the video list. Please try again."
                on_retry={videos.refetch_callback::<()>()}
                variant={Variant::Page}
            />
        },
        QueryState::Data(list) if list.is_empty() => html! {
            <EmptyState
                title="No videos yet"
                message="Be the first to share something worth learning."
                action_text="Create video"
                on_action={modal.open_callback::<()>()}
                variant={Variant::Page}
            />
        },
        QueryState::Data(list) => html! { <VideoGrid videos={sort_videos(list, *sort_by)} /> },
    };

    html! {
        <div class="space-y-6">
            <FilterBar
                sort_by={*sort_by}
                on_sort_change={on_sort_change}
                is_loading={videos.state.is_loading()}
            />
            { content }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct VideoPageProps {
    pub id: AttrValue,
}

#[function_component(VideoPage)]
pub fn video_page(props: &VideoPageProps) -> Html {
    let editing = use_state(|| None::<Video>);

    let on_edit = {
        let editing = editing.clone();
        Callback::from(move |video: Video| editing.set(Some(video)))
    };
    let on_close_edit = {
        let editing = editing.clone();
        Callback::from(move |_: ()| editing.set(None))
    };

    html! {
        <div class="flex flex-col gap-8 lg:flex-row">
            <div class="min-w-0 flex-1 space-y-8">
                <VideoSection video_id={props.id.clone()} on_edit={on_edit} />
                <CommentSection video_id={props.id.clone()} />
            </div>
            <VideoSidebar video_id={props.id.clone()} />
            <VideoEditModal
                open={editing.is_some()}
                on_close={on_close_edit}
                video={(*editing).clone()}
            />
        </div>
    }
}
