pub mod styles;
pub mod pages;
pub mod config;

use yew::prelude::*;
use yew_router::prelude::*;
use crate::pages::{home::Home, boggle::BoggleGame};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/play")]
    Play,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <div class={styles::CONTAINER}>
                <Switch<Route> render={switch} />
            </div>
        </BrowserRouter>
    }
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Home /> },
        Route::Play => html! { <BoggleGame /> },
        Route::NotFound => html! {
            <div class="py-16 text-center">
                <h1 class={styles::TEXT_H1}>{ "404" }</h1>
                <p class={styles::TEXT_BODY}>{ "Nothing on this square." }</p>
            </div>
        },
    }
}
