use crate::modals::context::use_modal;
use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(HeroSection)]
pub fn hero_section() -> Html {
    let modal = use_modal();

    html! {
        <section class="flex min-h-[calc(100dvh-5rem)] items-center lg:min-h-[85vh]">
            <div class="mb-10 w-full">
                <div class="flex flex-col gap-8 lg:grid lg:grid-cols-[1fr_1.1fr] lg:items-center">
                    <div class="text-left">
                        <h1 class="text-6xl font-bold leading-tight tracking-tight text-gray-900">
                            { "Press Play." }
                            <span class="block text-blue-600">{ "Start Learning." }</span>
                        </h1>
                        <p class="mb-8 mt-6 text-xl text-gray-600 sm:text-3xl">
                            { "Discover, create, and share knowledge through engaging video content. Join our community of learners and educators." }
                        </p>
                        <div class="flex flex-col gap-4 sm:flex-row">
                            <Link<Route> to={Route::Videos} classes="rounded-lg bg-blue-600 px-8 py-4 text-center text-lg font-semibold text-white hover:bg-blue-700">
                                { "Start Learning" }
                            </Link<Route>>
                            <button
                                type="button"
                                onclick={modal.open_callback::<MouseEvent>()}
                                class="cursor-pointer rounded-lg border-2 border-blue-600 px-8 py-4 text-center text-lg font-semibold text-blue-600 hover:bg-blue-50"
                            >
                                { "Create Video" }
                            </button>
                        </div>
                    </div>
                    <div class="flex items-center justify-center">
                        <img
                            src="/assets/images/hero-image.svg"
                            alt="Educational Video Learning"
                            width="1000"
                            height="900"
                            class="h-auto w-full max-w-7xl"
                        />
                    </div>
                </div>
            </div>
        </section>
    }
}
