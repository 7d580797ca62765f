use crate::env_variable_utils::get_app_name;
use crate::router::Route;
use chrono::{Datelike, Utc};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    let app_name = get_app_name();
    let year = Utc::now().year();

    html! {
        <footer class="mt-16 border-t border-gray-200 bg-gray-50">
            <div class="mx-auto max-w-[1504px] px-4 py-12 sm:px-6 lg:px-8">
                <div class="grid grid-cols-1 gap-8 md:grid-cols-3">
                    <div class="col-span-1 md:col-span-2">
                        <Link<Route> to={Route::Home} classes="flex items-center text-2xl font-bold text-gray-900 transition-colors hover:text-blue-600">
                            { app_name.clone() }
                        </Link<Route>>
                        <p class="mt-4 max-w-md text-gray-600">
                            { "An educational video platform designed to make learning engaging and accessible for everyone." }
                        </p>
                    </div>

                    <div>
                        <h3 class="mb-4 text-sm font-semibold uppercase tracking-wider text-gray-900">{ "Navigation" }</h3>
                        <ul class="space-y-3">
                            <li>
                                <Link<Route> to={Route::Home} classes="text-gray-600 transition-colors hover:text-blue-600">
                                    { "Home" }
                                </Link<Route>>
                            </li>
                            <li>
                                <Link<Route> to={Route::Videos} classes="text-gray-600 transition-colors hover:text-blue-600">
                                    { "Videos" }
                                </Link<Route>>
                            </li>
                        </ul>
                    </div>
                </div>

                <div class="mt-12 border-t border-gray-200 pt-8">
                    <p class="text-sm text-gray-500">{ format!("© {} {}. All rights reserved.", year, app_name) }</p>
                </div>
            </div>
        </footer>
    }
}
