use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod error;
mod flow;
mod gate;
mod guards;
mod render;
mod content {
    pub mod key;
    pub mod record;
    pub mod registry;
    pub mod free_results;
    pub mod selector;
    pub mod resolver;
    pub mod freshness;
}
mod components {
    pub mod raw_html;
    pub mod brief_view;
    pub mod cta;
}
mod pages {
    pub mod diagnostic;
    pub mod paid_brief;
}

use pages::{
    diagnostic::Diagnostic,
    paid_brief::PaidBrief,
};


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Diagnostic,
    #[at("/paid")]
    PaidBrief,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Diagnostic => {
            info!("Rendering Diagnostic page");
            html! { <Diagnostic /> }
        },
        Route::PaidBrief => {
            info!("Rendering Paid brief page");
            html! { <PaidBrief /> }
        },
        Route::NotFound => {
            info!("Unknown route, redirecting to diagnostic");
            html! { <Redirect<Route> to={Route::Diagnostic} /> }
        },
    }
}


#[function_component(Nav)]
pub fn nav() -> Html {
    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <Link<Route> to={Route::Diagnostic} classes="nav-logo">
                    {"Hiring Signal"}
                </Link<Route>>
            </div>
        </nav>
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
