use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div style="min-height: 100vh; display: flex; flex-direction: column; align-items: center; justify-content: center; background: #0A0F1A; color: #fff;">
            <h1>{"Página no encontrada"}</h1>
            <Link<Route> to={Route::Home}>
                {"Volver al inicio"}
            </Link<Route>>
        </div>
    }
}
