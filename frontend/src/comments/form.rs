use crate::env_variable_utils::USER_ID;
use crate::utils::avatar_initial;
use web_sys::{HtmlInputElement, SubmitEvent};
use yew::prelude::*;

/// Trimmed comment body, or `None` when there is nothing worth posting.
pub fn prepare_comment(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[derive(Properties, PartialEq)]
pub struct CommentFormProps {
    /// Receives `(content, user_id)`.
    pub on_submit: Callback<(String, String)>,
    #[prop_or_default]
    pub pending: bool,
}

#[function_component(CommentForm)]
pub fn comment_form(props: &CommentFormProps) -> Html {
    let content = use_state(String::new);
    let focused = use_state(|| false);

    let on_input = {
        let content = content.clone();
        Callback::from(move |e: InputEvent| {
            content.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let on_focus = {
        let focused = focused.clone();
        Callback::from(move |_: FocusEvent| focused.set(true))
    };

    let on_cancel = {
        let content = content.clone();
        let focused = focused.clone();
        Callback::from(move |_: MouseEvent| {
            content.set(String::new());
            focused.set(false);
        })
    };

    let on_submit = {
        let content = content.clone();
        let focused = focused.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(body) = prepare_comment(&content) else {
                return;
            };
            on_submit.emit((body, USER_ID.clone()));
            content.set(String::new());
            focused.set(false);
        })
    };

    let can_post = !props.pending && prepare_comment(&content).is_some();
    let underline = if *focused { "width: 100%" } else { "width: 0%" };

    html! {
        <form onsubmit={on_submit} class="grid grid-cols-[auto_1fr] items-start gap-x-3 gap-y-2">
            <div class="flex h-12 w-12 items-center justify-center self-center rounded-full bg-blue-100 font-bold text-blue-700">
                { avatar_initial(&USER_ID) }
            </div>

            <div class="relative col-start-2 row-start-1">
                <input
                    class="w-full border-0 border-b border-gray-300 bg-transparent pb-2 focus:outline-none"
                    placeholder="Add a comment..."
                    value={(*content).clone()}
                    oninput={on_input}
                    onfocus={on_focus}
                />
                <div class="absolute bottom-0 left-0 h-0.5 bg-blue-500 transition-all duration-300 ease-out" style={underline} />
            </div>

            if *focused {
                <div class="col-start-2 row-start-2 flex items-center justify-end gap-2">
                    <button
                        type="button"
                        onclick={on_cancel}
                        class="cursor-pointer rounded bg-gray-200 px-3 py-2 text-sm text-gray-700 transition-colors duration-200 hover:bg-gray-300"
                    >
                        { "Cancel" }
                    </button>
                    <button
                        type="submit"
                        disabled={!can_post}
                        class="cursor-pointer rounded bg-blue-600 px-3 py-2 text-sm text-white transition-colors duration-200 hover:bg-blue-700 disabled:cursor-auto disabled:opacity-50"
                    >
                        { if props.pending { "Posting…" } else { "Comment" } }
                    </button>
                </div>
            }
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_comments_are_dropped() {
        assert_eq!(prepare_comment(""), None);
        assert_eq!(prepare_comment(" \n\t "), None);
    }

    #[test]
    fn comments_are_trimmed() {
        assert_eq!(prepare_comment("  great video \n").as_deref(), Some("great video"));
    }
}
