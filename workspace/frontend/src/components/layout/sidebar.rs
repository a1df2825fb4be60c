use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(Sidebar)]
pub fn sidebar() -> Html {
    html! {
        <div class="drawer-side z-50">
            <label aria-label="close sidebar" class="drawer-overlay" for="main-drawer"></label>
            <ul class="menu p-4 w-80 min-h-full bg-base-100 text-base-content border-r border-base-300">
                <li class="mb-4">
                    <div class="flex items-center gap-3 px-2">
                        <div class="w-10 h-10 rounded-lg bg-primary flex items-center justify-center text-primary-content font-bold text-2xl">
                            <i class="fas fa-chart-line"></i>
                        </div>
                        <span class="text-2xl font-bold tracking-tight">{"Demandcast"}</span>
                    </div>
                </li>

                <li><Link<Route> to={Route::Dashboard} classes="nav-link"><i class="fas fa-store w-5"></i> {"Demand Forecast"}</Link<Route>></li>
                <li><Link<Route> to={Route::Visualization} classes="nav-link"><i class="fas fa-chart-bar w-5"></i> {"Sales & Payments"}</Link<Route>></li>
                <li><Link<Route> to={Route::Upload} classes="nav-link"><i class="fas fa-file-upload w-5"></i> {"Upload CSV"}</Link<Route>></li>

                <div class="divider"></div>

                <li><Link<Route> to={Route::Home} classes="nav-link"><i class="fas fa-globe w-5"></i> {"Website"}</Link<Route>></li>
                <li><Link<Route> to={Route::About} classes="nav-link"><i class="fas fa-info-circle w-5"></i> {"About"}</Link<Route>></li>
                <li><a class="nav-link" href="https://github.com/generic/demandcast" target="_blank"><i
                        class="fab fa-github w-5"></i> {"GitHub"}</a></li>
            </ul>
        </div>
    }
}
