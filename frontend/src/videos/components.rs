use crate::models::Video;
use crate::player::preview::use_video_preview;
use crate::router::Route;
use crate::utils::{avatar_initial, format_time, pluralize, time_ago};
use crate::videos::sort::SortOption;
use yew::prelude::*;
use yew_router::prelude::*;

pub const GRID_SKELETON_CARDS: usize = 6;

#[derive(Properties, PartialEq)]
pub struct PreviewThumbnailProps {
    pub src: AttrValue,
    pub title: AttrValue,
    /// Plays while true, rewinds and pauses when it turns false.
    pub active: bool,
    #[prop_or_default]
    pub compact: bool,
}

#[function_component(PreviewThumbnail)]
pub fn preview_thumbnail(props: &PreviewThumbnailProps) -> Html {
    let preview = use_video_preview();

    {
        let start = preview.start.clone();
        let stop = preview.stop.clone();
        use_effect_with(props.active, move |active| {
            if *active {
                start.emit(());
            } else {
                stop.emit(());
            }
            || ()
        });
    }

    let (rounding, badge) = if props.compact {
        ("rounded-lg", "right-1 bottom-1 text-[10px]")
    } else {
        ("rounded-xl", "right-2 bottom-2 text-xs")
    };

    html! {
        <div class={classes!("relative", "aspect-video", "overflow-hidden", "bg-gray-200", rounding)}>
            <video
                ref={preview.video_ref.clone()}
                src={props.src.clone()}
                muted={true}
                playsinline={true}
                preload="metadata"
                aria-label={props.title.clone()}
                class="pointer-events-none h-full w-full object-cover transition-transform duration-300 group-hover:scale-[1.02]"
            />
            <span class={classes!("pointer-events-none", "absolute", "rounded", "bg-black/80", "px-1.5", "py-0.5", "font-semibold", "text-white", badge)}>
                { format_time(preview.clock.badge_seconds()) }
            </span>
        </div>
    }
}

/// `• 1 comment` / `• 4 comments`
pub fn comments_meta(num_comments: i64) -> String {
    format!("• {}", pluralize(num_comments.max(0) as usize, "comment", "comments"))
}

pub(crate) fn set_flag<IN: 'static>(flag: &UseStateHandle<bool>, value: bool) -> Callback<IN> {
    let flag = flag.clone();
    Callback::from(move |_| flag.set(value))
}

#[derive(Properties, PartialEq)]
pub struct VideoCardProps {
    pub video: Video,
}

#[function_component(VideoCard)]
pub fn video_card(props: &VideoCardProps) -> Html {
    let hovered = use_state(|| false);
    let video = &props.video;

    html! {
        <li
            onmouseenter={set_flag::<MouseEvent>(&hovered, true)}
            onmouseleave={set_flag::<MouseEvent>(&hovered, false)}
            onfocusin={set_flag::<FocusEvent>(&hovered, true)}
            onfocusout={set_flag::<FocusEvent>(&hovered, false)}
        >
            <Link<Route> to={Route::VideoDetail { id: video.id.clone() }} classes="group relative flex h-full cursor-pointer flex-col gap-3">
                <PreviewThumbnail src={video.video_url.clone()} title={video.title.clone()} active={*hovered} />

                <div class="grid grid-cols-[auto_1fr] grid-rows-2 items-start gap-x-3 gap-y-0">
                    <div class="row-span-2 flex h-12 w-12 items-center justify-center self-center rounded-full bg-blue-100 font-bold text-blue-700">
                        { avatar_initial(&video.user_id) }
                    </div>
                    <div class="col-start-2 row-start-1 line-clamp-2 self-center font-semibold leading-snug text-gray-900 transition-colors group-hover:text-blue-600">
                        { &video.title }
                    </div>
                    <div class="col-start-2 row-start-2 flex flex-wrap items-center gap-x-2 self-center text-sm text-gray-500">
                        <span>{ &video.user_id }</span>
                        <span>{ format!("• {}", time_ago(&video.created_at)) }</span>
                        <span>{ comments_meta(video.num_comments) }</span>
                    </div>
                </div>
            </Link<Route>>
        </li>
    }
}

#[function_component(VideoCardSkeleton)]
pub fn video_card_skeleton() -> Html {
    html! {
        <li>
            <div class="relative flex h-full cursor-default flex-col gap-3">
                <div class="relative aspect-video animate-pulse overflow-hidden rounded-xl bg-gray-200">
                    <div class="absolute bottom-2 right-2 h-5 w-12 rounded bg-black/20" />
                </div>
                <div class="grid grid-cols-[auto_1fr] grid-rows-[auto_auto] items-start gap-x-3 gap-y-0">
                    <div class="row-span-2 h-12 w-12 animate-pulse rounded-full bg-blue-100" />
                    <div class="col-start-2 row-start-1 mt-1 h-5 w-4/5 animate-pulse rounded bg-gray-200" />
                    <div class="col-start-2 row-start-2 mt-2 flex flex-wrap items-center gap-2">
                        <div class="h-3.5 w-24 animate-pulse rounded bg-gray-200" />
                        <div class="h-3.5 w-20 animate-pulse rounded bg-gray-200" />
                        <div class="h-3.5 w-24 animate-pulse rounded bg-gray-200" />
                    </div>
                </div>
            </div>
        </li>
    }
}

#[derive(Properties, PartialEq)]
pub struct VideoGridProps {
    pub videos: Vec<Video>,
}

#[function_component(VideoGrid)]
pub fn video_grid(props: &VideoGridProps) -> Html {
    html! {
        <ul class="grid grid-cols-[repeat(auto-fit,minmax(350px,1fr))] gap-6">
            { for props.videos.iter().map(|video| html! {
                <VideoCard key={video.id.clone()} video={video.clone()} />
            }) }
        </ul>
    }
}

#[function_component(VideoGridSkeleton)]
pub fn video_grid_skeleton() -> Html {
    html! {
        <ul class="grid grid-cols-[repeat(auto-fit,minmax(350px,1fr))] gap-6" aria-busy="true" aria-live="polite">
            { for (0..GRID_SKELETON_CARDS).map(|i| html! { <VideoCardSkeleton key={i} /> }) }
        </ul>
    }
}

#[derive(Properties, PartialEq)]
pub struct FilterBarProps {
    pub sort_by: SortOption,
    pub on_sort_change: Callback<SortOption>,
    #[prop_or_default]
    pub is_loading: bool,
}

#[function_component(FilterBar)]
pub fn filter_bar(props: &FilterBarProps) -> Html {
    let button = |option: SortOption| {
        let selected = props.sort_by == option;
        let on_sort_change = props.on_sort_change.clone();
        let tone = if selected {
            "bg-white text-gray-900 shadow-sm"
        } else {
            "text-gray-600 hover:text-gray-900"
        };
        html! {
            <button
                type="button"
                aria-pressed={selected.to_string()}
                disabled={props.is_loading}
                onclick={Callback::from(move |_: MouseEvent| on_sort_change.emit(option))}
                class={classes!("relative", "cursor-pointer", "rounded-md", "px-3", "py-1.5", "text-sm", "font-medium", "transition-colors", "disabled:cursor-not-allowed", "disabled:opacity-50", tone)}
            >
                { option.label() }
            </button>
        }
    };

    html! {
        <div class="flex items-center justify-between">
            <h1 class="text-2xl font-bold text-gray-900">{ "Videos" }</h1>
            <div class="flex items-center gap-2">
                <span class="text-sm text-gray-600">{ "Sort by:" }</span>
                <div class="flex rounded-lg bg-gray-100 p-1 ring-1 ring-gray-200">
                    { button(SortOption::Date) }
                    { button(SortOption::Comments) }
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comment_meta_pluralizes() {
        assert_eq!(comments_meta(1), "• 1 comment");
        assert_eq!(comments_meta(0), "• 0 comments");
        assert_eq!(comments_meta(12), "• 12 comments");
    }
}
