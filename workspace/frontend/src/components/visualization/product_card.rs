use yew::prelude::*;

use crate::static_data::product_catalog;

/// Products the forecast suggests stocking, with predicted quantities.
#[function_component(ProductCard)]
pub fn product_card() -> Html {
    let products = product_catalog();

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h3 class="card-title text-lg mb-2">{"Suggested Stock"}</h3>

                <div class="divide-y divide-base-200">
                    {for products.iter().map(|product| {
                        let initial = product.name.chars().next().unwrap_or('?');
                        html! {
                            <div class="flex items-center gap-4 py-3">
                                <div class="avatar placeholder">
                                    <div class="w-12 rounded-full bg-primary text-primary-content">
                                        <span class="text-lg">{initial}</span>
                                    </div>
                                </div>
                                <div class="flex-1">
                                    <h5 class="font-medium">{product.name}</h5>
                                    <p class="text-sm text-gray-500">
                                        <span class="font-medium">{product.category}</span>
                                        {format!(" · Quantity: {}", product.quantity)}
                                    </p>
                                </div>
                            </div>
                        }
                    })}
                </div>
            </div>
        </div>
    }
}
