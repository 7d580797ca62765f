use crate::pages::{HomePage, VideoPage, VideosPage};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/videos")]
    Videos,
    #[at("/videos/:id")]
    VideoDetail { id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <HomePage /> },
        Route::Videos => html! { <VideosPage /> },
        Route::VideoDetail { id } => html! { <VideoPage key={id.clone()} id={id.clone()} /> },
        Route::NotFound => html! {
            <div class="flex min-h-[60vh] items-center justify-center">
                <div class="rounded-lg bg-white p-8 text-center shadow-lg">
                    <h1 class="mb-4 text-2xl font-bold text-gray-800">{"404 - Page Not Found"}</h1>
                    <Link<Route> to={Route::Videos} classes="text-blue-600 hover:underline">
                        {"Browse videos"}
                    </Link<Route>>
                </div>
            </div>
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_path_carries_the_video_id() {
        assert_eq!(Route::Videos.to_path(), "/videos");
        assert_eq!(
            Route::VideoDetail { id: "abc123".into() }.to_path(),
            "/videos/abc123"
        );
        assert_eq!(
            Route::recognize("/videos/abc123"),
            Some(Route::VideoDetail { id: "abc123".into() })
        );
    }

    #[test]
    fn detail_route_renders_the_video_page() {
        let html = switch(Route::VideoDetail { id: "abc123".into() });
        assert!(matches!(html, Html::VComp(_)));
    }
}
