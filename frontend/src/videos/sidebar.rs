use crate::env_variable_utils::USER_ID;
use crate::layout::states::{EmptyState, ErrorState, Variant};
use crate::models::Video;
use crate::query::{use_videos, QueryState};
use crate::router::Route;
use crate::utils::time_ago;
use crate::videos::components::{comments_meta, set_flag, PreviewThumbnail};
use yew::prelude::*;
use yew_router::prelude::*;

pub const SIDEBAR_SKELETON_CARDS: usize = 12;

/// Everything in `videos` except `current_id`, order kept.
pub fn other_videos(videos: &[Video], current_id: &str) -> Vec<Video> {
    videos
        .iter()
        .filter(|video| video.id != current_id)
        .cloned()
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct VideoSidebarProps {
    pub video_id: AttrValue,
}

#[function_component(VideoSidebar)]
pub fn video_sidebar(props: &VideoSidebarProps) -> Html {
    let videos = use_videos(&USER_ID);

    let body = match &videos.state {
        QueryState::Loading => html! {
            <ul class="space-y-4">
                { for (0..SIDEBAR_SKELETON_CARDS).map(|i| html! { <SidebarCardSkeleton key={i} /> }) }
            </ul>
        },
        QueryState::Error(_) => html! {
            <ErrorState
                message="Failed to load videos"
                on_retry={videos.refetch_callback::<()>()}
                variant={Variant::Minimal}
            />
        },
        QueryState::Data(list) => {
            let others = other_videos(list, &props.video_id);
            if others.is_empty() {
                html! { <EmptyState message="No other videos available" variant={Variant::Minimal} /> }
            } else {
                html! {
                    <ul class="space-y-4">
                        { for others.into_iter().map(|video| html! {
                            <SidebarCard key={video.id.clone()} video={video.clone()} />
                        }) }
                    </ul>
                }
            }
        }
    };

    html! {
        <aside class="w-full space-y-4 lg:w-80" aria-busy={videos.state.is_loading().to_string()} aria-live="polite">
            <h3 class="text-lg font-semibold">{ "More Videos" }</h3>
            { body }
        </aside>
    }
}

#[derive(Properties, PartialEq)]
pub struct SidebarCardProps {
    pub video: Video,
}

#[function_component(SidebarCard)]
pub fn sidebar_card(props: &SidebarCardProps) -> Html {
    let hovered = use_state(|| false);
    let video = &props.video;

    html! {
        <li
            onmouseenter={set_flag::<MouseEvent>(&hovered, true)}
            onmouseleave={set_flag::<MouseEvent>(&hovered, false)}
            onfocusin={set_flag::<FocusEvent>(&hovered, true)}
            onfocusout={set_flag::<FocusEvent>(&hovered, false)}
        >
            <Link<Route> to={Route::VideoDetail { id: video.id.clone() }} classes="group relative flex cursor-pointer gap-3">
                <div class="w-36 flex-shrink-0">
                    <PreviewThumbnail src={video.video_url.clone()} title={video.title.clone()} active={*hovered} compact={true} />
                </div>
                <div class="min-w-0 flex-1">
                    <h4 class="line-clamp-2 text-sm font-semibold leading-snug text-gray-900 transition-colors group-hover:text-blue-600">
                        { &video.title }
                    </h4>
                    <div class="mt-1 flex flex-col gap-1 text-xs text-gray-500">
                        <span>{ &video.user_id }</span>
                        <div class="flex gap-1">
                            <span>{ time_ago(&video.created_at) }</span>
                            <span>{ comments_meta(video.num_comments) }</span>
                        </div>
                    </div>
                </div>
            </Link<Route>>
        </li>
    }
}

#[function_component(SidebarCardSkeleton)]
pub fn sidebar_card_skeleton() -> Html {
    html! {
        <li>
            <div class="relative flex cursor-default gap-3">
                <div class="relative aspect-video w-36 flex-shrink-0 animate-pulse overflow-hidden rounded-lg bg-gray-200">
                    <div class="absolute bottom-1 right-1 h-4 w-8 rounded bg-black/20" />
                </div>
                <div class="min-w-0 flex-1">
                    <div class="h-4 w-5/6 animate-pulse rounded bg-gray-200" />
                    <div class="mt-1 h-4 w-3/5 animate-pulse rounded bg-gray-200" />
                    <div class="mt-2 h-3 w-24 animate-pulse rounded bg-gray-200" />
                    <div class="mt-1 flex gap-2">
                        <div class="h-3 w-16 animate-pulse rounded bg-gray-200" />
                        <div class="h-3 w-20 animate-pulse rounded bg-gray-200" />
                    </div>
                </div>
            </div>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(id: &str) -> Video {
        Video {
            id: id.to_string(),
            user_id: "john_smith".to_string(),
            title: id.to_uppercase(),
            description: String::new(),
            video_url: format!("https://example.com/{id}.mp4"),
            created_at: "2024-01-01T00:00:00Z".to_string(),
            num_comments: 0,
        }
    }

    #[test]
    fn current_video_is_left_out() {
        let list = vec![video("a"), video("b"), video("c")];
        let ids: Vec<_> = other_videos(&list, "b").into_iter().map(|v| v.id).collect();
        assert_eq!(ids, ["a", "c"]);
    }

    #[test]
    fn only_the_current_video_means_nothing_else() {
        assert!(other_videos(&[video("a")], "a").is_empty());
    }
}
