use crate::models::Comment;
use crate::utils::{avatar_initial, time_ago};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct VideoCommentProps {
    pub comment: Comment,
}

#[function_component(VideoComment)]
pub fn video_comment(props: &VideoCommentProps) -> Html {
    let comment = &props.comment;

    html! {
        <li class="grid grid-cols-[auto_1fr] grid-rows-[auto_1fr] items-start gap-x-3 gap-y-1">
            <div class="row-span-2 flex h-12 w-12 items-center justify-center self-start rounded-full bg-blue-100 font-bold text-blue-700">
                { avatar_initial(&comment.user_id) }
            </div>
            <div class="col-start-2 row-start-1 flex flex-wrap items-center gap-x-2 self-center text-sm text-gray-500">
                <span class="font-bold">{ &comment.user_id }</span>
                <span>{ format!("• {}", time_ago(&comment.created_at)) }</span>
            </div>
            <div class="col-start-2 row-start-2 self-center leading-snug text-gray-900">
                { &comment.content }
            </div>
        </li>
    }
}

#[function_component(VideoCommentSkeleton)]
pub fn video_comment_skeleton() -> Html {
    html! {
        <div class="flex gap-3">
            <div class="h-12 w-12 animate-pulse rounded-full bg-gray-200" />
            <div class="flex-1 space-y-2">
                <div class="h-4 w-24 animate-pulse rounded bg-gray-200" />
                <div class="h-4 w-full animate-pulse rounded bg-gray-200" />
                <div class="h-4 w-3/4 animate-pulse rounded bg-gray-200" />
            </div>
        </div>
    }
}
