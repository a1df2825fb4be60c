use stylist::yew::use_style;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(Hero)]
pub fn hero() -> Html {
    let background = use_style!(
        r#"
        background: radial-gradient(ellipse 200% 100% at bottom left, #d2dcff, #ffffff 66%);
        "#
    );

    html! {
        <section class={classes!(background, "pt-16", "pb-24", "overflow-x-clip")}>
            <div class="px-6 max-w-6xl mx-auto">
                <div class="max-w-2xl">
                    <div class="badge badge-outline border-base-content/30 text-sm">
                        {"Hyperlocal demand forecasting"}
                    </div>
                    <h1 class="text-5xl md:text-6xl font-bold tracking-tight mt-6">
                        {"Stock what your neighborhood will buy"}
                    </h1>
                    <p class="text-xl text-base-content/70 tracking-tight mt-6">
                        {"Demandcast turns your sales history into store-level demand predictions, \
                          so every shelf reflects what the people around your store actually need \
                          next week, next month and next year."}
                    </p>
                    <div class="flex gap-3 items-center mt-8">
                        <Link<Route> to={Route::Dashboard} classes="btn btn-neutral">
                            {"Open the dashboard"}
                        </Link<Route>>
                        <Link<Route> to={Route::Upload} classes="btn btn-ghost gap-2">
                            <span>{"Upload your data"}</span>
                            <i class="fas fa-arrow-right"></i>
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </section>
    }
}
