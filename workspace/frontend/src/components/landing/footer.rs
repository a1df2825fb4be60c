use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="py-10 bg-neutral text-neutral-content text-center">
            <div class="px-6 max-w-6xl mx-auto space-y-4">
                <div class="flex items-center justify-center gap-2">
                    <i class="fas fa-chart-line"></i>
                    <span class="font-bold">{"Demandcast"}</span>
                </div>
                <nav class="flex justify-center gap-6 text-sm">
                    <Link<Route> to={Route::Dashboard} classes="link link-hover">{"Dashboard"}</Link<Route>>
                    <Link<Route> to={Route::Upload} classes="link link-hover">{"Upload CSV"}</Link<Route>>
                    <Link<Route> to={Route::About} classes="link link-hover">{"About"}</Link<Route>>
                    <a class="link link-hover" href="https://github.com/generic/demandcast" target="_blank">{"GitHub"}</a>
                </nav>
                <p class="text-sm opacity-60">
                    {"© 2025 Demandcast. Forecasts for hyperlocal stores."}
                </p>
            </div>
        </footer>
    }
}
