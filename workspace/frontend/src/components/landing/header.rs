use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

/// Sticky landing header with the brand and a sign-in shortcut into the
/// dashboard.
#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <header class="sticky top-0 backdrop-blur-sm z-20 bg-base-100/80">
            <div class="py-4 px-6 max-w-6xl mx-auto">
                <div class="flex items-center justify-between">
                    <div class="flex items-center gap-3">
                        <div class="w-10 h-10 rounded-lg bg-primary flex items-center justify-center text-primary-content text-2xl">
                            <i class="fas fa-chart-line"></i>
                        </div>
                        <span class="text-xl font-bold tracking-tight">{"Demandcast"}</span>
                    </div>

                    <nav class="flex gap-6 items-center">
                        <Link<Route> to={Route::About} classes="hidden md:inline text-base-content/60 hover:text-base-content">
                            {"About"}
                        </Link<Route>>
                        <Link<Route> to={Route::Dashboard} classes="btn btn-neutral btn-sm px-4 rounded-lg font-medium tracking-tight">
                            {"Sign In"}
                        </Link<Route>>
                    </nav>
                </div>
            </div>
        </header>
    }
}
