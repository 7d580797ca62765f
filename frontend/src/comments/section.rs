use crate::comments::form::CommentForm;
use crate::comments::item::{VideoComment, VideoCommentSkeleton};
use crate::layout::states::{ErrorState, Variant};
use crate::query::{use_comments, use_create_comment, NewComment, QueryState};
use yew::prelude::*;

const SKELETON_COMMENTS: usize = 3;

/// Heading text; the count is whatever the list holds, not the video's counter.
pub fn comment_count_label(count: usize) -> String {
    let noun = if count == 1 { "Comment" } else { "Comments" };
    format!("{count} {noun}")
}

fn reload_page() {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().reload() {
            log::warn!("Reload failed: {:?}", e);
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct CommentSectionProps {
    pub video_id: AttrValue,
}

#[function_component(CommentSection)]
pub fn comment_section(props: &CommentSectionProps) -> Html {
    let comments = use_comments(&props.video_id);
    let add_comment = use_create_comment(&props.video_id);

    let on_submit = {
        let add_comment = add_comment.clone();
        Callback::from(move |(content, user_id): (String, String)| {
            add_comment.mutate(NewComment { content, user_id }, || ());
        })
    };

    let body = match &comments.state {
        QueryState::Loading => html! {
            <>
                <div class="h-6 w-32 animate-pulse rounded bg-gray-200" />
                <div class="space-y-4">
                    <div class="h-20 w-full animate-pulse rounded bg-gray-200" />
                    <div class="space-y-4">
                        { for (0..SKELETON_COMMENTS).map(|i| html! { <VideoCommentSkeleton key={i} /> }) }
                    </div>
                </div>
            </>
        },
        QueryState::Error(_) => html! {
            <ErrorState
                title="Unable to load comments"
                message="We're having trouble loading the comments for this video. Please try again."
                on_retry={Callback::from(|_: ()| reload_page())}
                variant={Variant::Inline}
            />
        },
        QueryState::Data(list) => html! {
            <>
                <h2 class="text-lg font-semibold">{ comment_count_label(list.len()) }</h2>
                <CommentForm on_submit={on_submit} pending={add_comment.is_pending()} />
                <ul class="flex flex-col gap-6">
                    { for list.iter().map(|comment| html! {
                        <VideoComment key={comment.id.clone()} comment={comment.clone()} />
                    }) }
                </ul>
            </>
        },
    };

    html! {
        <section class="flex flex-col gap-6">
            { body }
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn singular_only_for_exactly_one() {
        assert_eq!(comment_count_label(0), "0 Comments");
        assert_eq!(comment_count_label(1), "1 Comment");
        assert_eq!(comment_count_label(2), "2 Comments");
        assert_eq!(comment_count_label(101), "101 Comments");
    }
}
