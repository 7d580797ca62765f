use crate::env_variable_utils::get_app_name;
use crate::modals::context::use_modal;
use crate::router::Route;
use gloo_events::EventListener;
use yew::prelude::*;
use yew_router::prelude::*;

const ALWAYS_VISIBLE_ABOVE_PX: f64 = 80.0;
const SCROLL_JITTER_PX: f64 = 2.0;

/// Header visibility after the page scrolled from `previous_y` to `y`.
pub fn header_visible(previous_y: f64, y: f64, visible: bool) -> bool {
    if (y - previous_y).abs() < SCROLL_JITTER_PX {
        visible
    } else if y < ALWAYS_VISIBLE_ABOVE_PX {
        true
    } else {
        y < previous_y
    }
}

#[function_component(Header)]
pub fn header() -> Html {
    let visible = use_state(|| true);
    let modal = use_modal();

    {
        let visible = visible.clone();
        use_effect_with((), move |_| {
            let listener = web_sys::window().map(|window| {
                let target = window.clone();
                let mut last = (0.0_f64, true);
                EventListener::new(&window, "scroll", move |_| {
                    let y = target.scroll_y().unwrap_or(0.0);
                    let (previous_y, was_visible) = last;
                    let now_visible = header_visible(previous_y, y, was_visible);
                    last = (y, now_visible);
                    if now_visible != was_visible {
                        visible.set(now_visible);
                    }
                })
            });
            move || drop(listener)
        });
    }

    let transform = if *visible {
        "transform: translateY(0)"
    } else {
        "transform: translateY(-100%)"
    };

    html! {
        <header
            class="fixed inset-x-0 top-0 z-50 border-b border-white/40 bg-white/60 backdrop-blur-md transition-transform duration-300"
            style={transform}
        >
            <nav class="mx-auto max-w-[1504px] px-4 sm:px-6 lg:px-8" aria-label="Main navigation">
                <div class="flex h-20 items-center justify-between gap-6">
                    <Link<Route> to={Route::Home} classes="flex items-center text-4xl font-bold text-gray-900 transition-colors hover:text-blue-600">
                        { get_app_name() }
                    </Link<Route>>

                    // Decorative only, there is no search backend
                    <div class="hidden max-w-md flex-1 md:block">
                        <input
                            type="search"
                            placeholder="Search"
                            aria-label="Search"
                            class="w-full rounded-full border border-gray-300 bg-white/80 px-4 py-2 focus:outline-none focus:ring-2 focus:ring-blue-500"
                        />
                    </div>

                    <div class="flex items-center gap-6" aria-label="Primary navigation">
                        <Link<Route> to={Route::Videos} classes="px-3 py-2 text-xl font-bold text-gray-700 transition-colors hover:text-blue-600">
                            { "Videos" }
                        </Link<Route>>
                        <button
                            type="button"
                            onclick={modal.open_callback::<MouseEvent>()}
                            class="inline-flex cursor-pointer items-center rounded-md bg-blue-600 px-4 py-2 text-xl text-white focus:outline-none focus:ring-2 focus:ring-blue-500 focus:ring-offset-2"
                        >
                            { "+ Create" }
                        </button>
                    </div>
                </div>
            </nav>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_deltas_keep_current_visibility() {
        assert!(!header_visible(300.0, 301.5, false));
        assert!(header_visible(300.0, 298.5, true));
    }

    #[test]
    fn near_top_is_always_visible() {
        assert!(header_visible(40.0, 79.0, false));
        assert!(header_visible(200.0, 10.0, false));
    }

    #[test]
    fn scrolling_down_hides_and_up_shows() {
        assert!(!header_visible(100.0, 200.0, true));
        assert!(header_visible(500.0, 450.0, false));
    }
}
