use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod capture;
mod components {
    pub mod capture_dialog;
}
mod pages {
    pub mod landing;
    pub mod not_found;
}

use pages::{
    landing::Landing,
    not_found::NotFound,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::get_log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_path_routes_to_landing() {
        assert!(Route::recognize("/") == Some(Route::Home));
    }

    #[test]
    fn not_found_route_is_registered() {
        assert!(Route::not_found_route() == Some(Route::NotFound));
        assert_eq!(Route::NotFound.to_path(), "/404");
    }
}
