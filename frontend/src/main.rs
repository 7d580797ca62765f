mod api;
mod comments;
mod env_variable_utils;
mod layout;
mod modals;
mod models;
mod pages;
mod player;
mod query;
mod router;
mod utils;
mod videos;

use crate::env_variable_utils::{get_api_base_url, get_app_name, is_debug_mode, USER_ID};
use crate::layout::footer::Footer;
use crate::layout::header::Header;
use crate::modals::context::ModalProvider;
use crate::modals::create::VideoCreateModal;
use crate::query::{QueryClient, QueryClientProvider};
use crate::router::{switch, Route};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let client = use_memo((), |_| QueryClient::new());

    html! {
        <QueryClientProvider client={(*client).clone()}>
            <ModalProvider>
                <BrowserRouter>
                    <div class="flex min-h-screen flex-col bg-white">
                        <Header />
                        <main class="mx-auto w-full max-w-[1504px] flex-1 px-4 pt-28 sm:px-6 lg:px-8">
                            <Switch<Route> render={switch} />
                        </main>
                        <Footer />
                    </div>
                    <VideoCreateModal />
                </BrowserRouter>
            </ModalProvider>
        </QueryClientProvider>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    let level = if is_debug_mode() {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    wasm_logger::init(wasm_logger::Config::new(level));

    yew::Renderer::<App>::new().render();

    log::info!(
        "NAME: \"{}\", API: \"{}\", USER: \"{}\", DEBUG: \"{}\"",
        get_app_name(),
        get_api_base_url(),
        *USER_ID,
        is_debug_mode()
    );
}
