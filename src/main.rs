use yew::prelude::*;
use yew_router::components::Link;
use yew_router::prelude::*;

mod components;
mod config;
mod funnels;
mod pages;

use pages::landing::Landing;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Landing /> },
        Route::NotFound => html! {
            <div style="min-height: 100vh; display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 1rem;">
                <h1 style="font-size: 3rem; margin: 0;">{"404"}</h1>
                <p style="color: #999;">{"This page does not exist."}</p>
                <Link<Route> to={Route::Home} classes="not-found-link">
                    {"Back to the funnel"}
                </Link<Route>>
            </div>
        },
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
