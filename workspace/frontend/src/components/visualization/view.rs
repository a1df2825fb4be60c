use yew::prelude::*;

use super::payments_chart::PaymentsChart;
use super::product_card::ProductCard;
use super::weekly_chart::WeeklyChart;

/// Sales and payments visualization page.
///
/// Shows illustrative ledger charts until a store connects real payment
/// data; both charts can swap their axis orientation in place.
#[function_component(Visualization)]
pub fn visualization() -> Html {
    html! {
        <div class="grid grid-cols-1 xl:grid-cols-3 gap-6">
            <div class="xl:col-span-2">
                <PaymentsChart />
            </div>
            <div>
                <WeeklyChart />
            </div>
            <div class="xl:col-span-3">
                <ProductCard />
            </div>
        </div>
    }
}
