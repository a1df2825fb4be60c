use stylist::yew::use_style;
use yew::prelude::*;

use crate::static_data::product_catalog;

/// Product showcase section with the forecast pitch and a sample of what
/// the dashboard recommends.
#[function_component(Showcase)]
pub fn showcase() -> Html {
    let background = use_style!(
        r#"
        background: linear-gradient(to bottom, #ffffff, #d2dcff);
        "#
    );

    html! {
        <section class={classes!(background, "py-24", "overflow-x-clip")}>
            <div class="px-6 max-w-6xl mx-auto">
                <div class="max-w-3xl mx-auto text-center">
                    <div class="flex justify-center items-center">
                        <div class="badge badge-outline border-base-content/30 text-sm">
                            {"Boost your Inventory Intelligence"}
                        </div>
                    </div>
                    <h2 class="text-4xl md:text-5xl font-bold tracking-tight mt-5">
                        {"A more effective way to predict demand"}
                    </h2>
                    <p class="text-lg text-base-content/70 tracking-tight mt-5">
                        {"Effortlessly transform your hyperlocal business with our advanced AI \
                          system that combines historical data, real-time market intelligence, \
                          and demographic insights to predict inventory needs with unprecedented \
                          accuracy."}
                    </p>
                </div>

                <div class="flex justify-center mt-10">
                    <div class="card bg-base-100 shadow-xl w-full max-w-2xl">
                        <div class="card-body">
                            <h3 class="card-title text-base">{"This week's suggestions"}</h3>
                            <div class="divide-y divide-base-200">
                                {for product_catalog().iter().take(3).map(|product| html! {
                                    <div class="flex items-center justify-between py-3">
                                        <div>
                                            <span class="font-medium">{product.name}</span>
                                            <p class="text-sm text-base-content/60">{product.category}</p>
                                        </div>
                                        <span class="badge badge-primary badge-outline">
                                            {format!("{} units", product.quantity)}
                                        </span>
                                    </div>
                                })}
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
