use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

pub mod animation;
pub mod config;
pub mod content;
pub mod error;
pub mod hooks;
pub mod theme;
pub mod components {
    pub mod sticky;
}
pub mod pages {
    pub mod about;
    pub mod home;
}

use pages::{
    about::AboutValues,
    home::Home,
};


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::About => {
            info!("Rendering About page");
            html! {
                <div class="about-page">
                    <AboutValues />
                </div>
            }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! {
                <div class="not-found">
                    <h1>{"Page not found"}</h1>
                    <Link<Route> to={Route::Home}>{"Back home"}</Link<Route>>
                </div>
            }
        },
    }
}


#[function_component]
fn Nav() -> Html {
    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"Studio"}
                </Link<Route>>
                <div class="nav-right">
                    <Link<Route> to={Route::About} classes="nav-link">
                        {"About"}
                    </Link<Route>>
                    <a href="/articles" class="nav-link">{"Articles"}</a>
                </div>
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


pub fn run() {
    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
