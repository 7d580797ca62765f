//! Empty and error panels shared by every page.

use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    #[default]
    Page,
    Inline,
    Minimal,
}

impl Variant {
    fn padding(self) -> &'static str {
        match self {
            Variant::Page => "px-4 py-16",
            Variant::Inline => "px-4 py-8",
            Variant::Minimal => "px-2 py-4",
        }
    }

    fn title_size(self) -> &'static str {
        match self {
            Variant::Page => "text-xl",
            Variant::Inline => "text-lg",
            Variant::Minimal => "text-base",
        }
    }

    fn message_width(self) -> &'static str {
        match self {
            Variant::Page => "max-w-md",
            _ => "max-w-sm",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct EmptyStateProps {
    #[prop_or(AttrValue::Static("No content available"))]
    pub title: AttrValue,
    #[prop_or(AttrValue::Static("There are no items to display at the moment."))]
    pub message: AttrValue,
    #[prop_or_default]
    pub action_text: Option<AttrValue>,
    #[prop_or_default]
    pub on_action: Option<Callback<()>>,
    #[prop_or_default]
    pub variant: Variant,
}

#[derive(Properties, PartialEq)]
pub struct ErrorStateProps {
    #[prop_or(AttrValue::Static("Something went wrong"))]
    pub title: AttrValue,
    #[prop_or(AttrValue::Static("We encountered an error while loading content."))]
    pub message: AttrValue,
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
    #[prop_or(AttrValue::Static("Try Again"))]
    pub retry_text: AttrValue,
    #[prop_or_default]
    pub variant: Variant,
}

fn action_button(label: AttrValue, on_click: Callback<()>) -> Html {
    html! {
        <button
            type="button"
            onclick={Callback::from(move |_: MouseEvent| on_click.emit(()))}
            class="cursor-pointer rounded-lg bg-blue-600 px-6 py-3 font-medium text-white transition-colors hover:bg-blue-700 focus:outline-none focus:ring-2 focus:ring-blue-500 focus:ring-offset-2"
        >
            { label }
        </button>
    }
}

#[function_component(EmptyState)]
pub fn empty_state(props: &EmptyStateProps) -> Html {
    let variant = props.variant;

    if variant == Variant::Minimal {
        return html! {
            <div class={classes!("flex", "flex-col", "items-center", "justify-center", variant.padding())}>
                <p class="text-gray-500">{ props.message.clone() }</p>
            </div>
        };
    }

    let icon_size = if variant == Variant::Page { "h-16 w-16" } else { "h-12 w-12" };

    html! {
        <div class={classes!("flex", "flex-col", "items-center", "justify-center", variant.padding())}>
            <div class="mb-6 rounded-full bg-gray-100 p-4">
                <svg class={classes!(icon_size, "text-gray-400")} fill="none" stroke="currentColor" viewBox="0 0 24 24">
                    <path
                        stroke-linecap="round"
                        stroke-linejoin="round"
                        stroke-width="1.5"
                        d="M15 10l4.553-2.276A1 1 0 0121 8.618v6.764a1 1 0 01-1.447.894L15 14M5 18h8a2 2 0 002-2V8a2 2 0 00-2-2H5a2 2 0 00-2 2v8a2 2 0 002 2z"
                    />
                </svg>
            </div>
            <h3 class={classes!("mb-2", "font-semibold", "text-gray-900", variant.title_size())}>{ props.title.clone() }</h3>
            <p class={classes!("mb-6", "text-center", "text-gray-600", variant.message_width())}>{ props.message.clone() }</p>
            {
                match (&props.action_text, &props.on_action) {
                    (Some(text), Some(on_action)) => action_button(text.clone(), on_action.clone()),
                    _ => html! {},
                }
            }
        </div>
    }
}

#[function_component(ErrorState)]
pub fn error_state(props: &ErrorStateProps) -> Html {
    let variant = props.variant;

    if variant == Variant::Minimal {
        return html! {
            <div class={classes!("flex", "flex-col", "items-center", "justify-center", variant.padding())}>
                <p class="text-gray-500">{ props.message.clone() }</p>
            </div>
        };
    }

    let icon_size = if variant == Variant::Page { "h-12 w-12" } else { "h-8 w-8" };

    html! {
        <div class={classes!("flex", "flex-col", "items-center", "justify-center", variant.padding())} role="alert">
            <div class="mb-4 rounded-full bg-red-100 p-3">
                <svg class={classes!(icon_size, "text-red-600")} fill="none" stroke="currentColor" viewBox="0 0 24 24">
                    <path
                        stroke-linecap="round"
                        stroke-linejoin="round"
                        stroke-width="2"
                        d="M12 9v2m0 4h.01m-6.938 4h13.856c1.54 0 2.502-1.667 1.732-2.5L13.732 4c-.77-.833-1.964-.833-2.732 0L3.732 16.5c-.77.833.192 2.5 1.732 2.5z"
                    />
                </svg>
            </div>
            <h3 class={classes!("mb-2", "font-semibold", "text-gray-900", variant.title_size())}>{ props.title.clone() }</h3>
            <p class={classes!("mb-6", "text-center", "text-gray-600", variant.message_width())}>{ props.message.clone() }</p>
            {
                match &props.on_retry {
                    Some(on_retry) => action_button(props.retry_text.clone(), on_retry.clone()),
                    None => html! {},
                }
            }
        </div>
    }
}
