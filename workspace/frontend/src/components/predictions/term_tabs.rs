use common::{LongTermOutlook, MidTermOutlook, ShortTermOutlook, StorePrediction};
use compute::is_gain;
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq)]
enum Term {
    Short,
    Mid,
    Long,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub prediction: StorePrediction,
}

/// Tabbed drill-down into the short, mid and long-term outlooks.
#[function_component(TermTabs)]
pub fn term_tabs(props: &Props) -> Html {
    let term = use_state(|| Term::Short);

    let tab = |label: &str, value: Term| {
        let term = term.clone();
        let class = classes!("tab", (*term == value).then_some("tab-active"));
        let onclick = Callback::from(move |_| term.set(value));
        html! {
            <a role="tab" {class} {onclick}>{label}</a>
        }
    };

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <div role="tablist" class="tabs tabs-bordered mb-4">
                    {tab("Short-Term", Term::Short)}
                    {tab("Mid-Term", Term::Mid)}
                    {tab("Long-Term", Term::Long)}
                </div>

                {match *term {
                    Term::Short => short_term_panel(&props.prediction.short_term_predictions),
                    Term::Mid => mid_term_panel(&props.prediction.mid_term_predictions),
                    Term::Long => long_term_panel(&props.prediction.long_term_predictions),
                }}
            </div>
        </div>
    }
}

fn empty_panel(message: &str) -> Html {
    html! {
        <div class="text-center py-8 text-gray-500">
            <i class="fas fa-inbox text-4xl mb-4 opacity-50"></i>
            <p>{message}</p>
        </div>
    }
}

fn chip_list(title: &str, items: &[String]) -> Html {
    if items.is_empty() {
        return html! {};
    }
    html! {
        <div class="mt-2">
            <span class="text-xs uppercase text-gray-400">{title}</span>
            <div class="flex flex-wrap gap-1 mt-1">
                {for items.iter().map(|item| html! {
                    <span class="badge badge-ghost badge-sm">{item}</span>
                })}
            </div>
        </div>
    }
}

fn bullet_list(items: &[String]) -> Html {
    html! {
        <ul class="list-disc list-inside text-sm space-y-1">
            {for items.iter().map(|item| html! { <li>{item}</li> })}
        </ul>
    }
}

fn short_term_panel(outlook: &ShortTermOutlook) -> Html {
    let has_peak_hours =
        !outlook.peak_hours.changes.is_empty() || !outlook.peak_hours.factors.is_empty();

    if outlook.demand_changes.is_empty() && !has_peak_hours {
        return empty_panel("No short-term predictions for this store.");
    }

    html! {
        <div class="space-y-4">
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-4">
                {for outlook.demand_changes.iter().map(|change| {
                    // The '+' marker on the raw string decides the color, not
                    // the parsed sign.
                    let value_class = if is_gain(&change.predicted_change) {
                        "text-success"
                    } else {
                        "text-error"
                    };
                    html! {
                        <div class="border border-base-300 rounded-lg p-4">
                            <div class="flex items-center justify-between">
                                <span class="font-semibold capitalize">{&change.category}</span>
                                <span class={classes!("text-xl", "font-bold", value_class)}>
                                    {&change.predicted_change}
                                </span>
                            </div>
                            <div class="text-sm text-gray-500 mt-1">
                                {"Confidence: "}{&change.confidence}
                            </div>
                            {chip_list("Driving factors", &change.driving_factors)}
                        </div>
                    }
                })}
            </div>

            {if has_peak_hours {
                html! {
                    <div class="border border-base-300 rounded-lg p-4">
                        <span class="font-semibold">
                            <i class="fas fa-clock mr-2"></i>{"Peak Hours"}
                        </span>
                        <div class="mt-2">{bullet_list(&outlook.peak_hours.changes)}</div>
                        {chip_list("Factors", &outlook.peak_hours.factors)}
                    </div>
                }
            } else {
                html! {}
            }}
        </div>
    }
}

fn mid_term_panel(outlook: &MidTermOutlook) -> Html {
    if outlook.emerging_categories.is_empty() && outlook.demographic_shifts.is_empty() {
        return empty_panel("No mid-term predictions for this store.");
    }

    html! {
        <div class="grid grid-cols-1 lg:grid-cols-2 gap-4">
            <div>
                <h4 class="font-semibold mb-2">{"Emerging Categories"}</h4>
                <div class="space-y-3">
                    {for outlook.emerging_categories.iter().map(|category| html! {
                        <div class="border border-base-300 rounded-lg p-4">
                            <div class="flex items-center justify-between">
                                <span class="font-semibold capitalize">{&category.category}</span>
                                <span class="badge badge-success badge-outline">{&category.growth_potential}</span>
                            </div>
                            {chip_list("Driving factors", &category.driving_factors)}
                        </div>
                    })}
                </div>
            </div>
            <div>
                <h4 class="font-semibold mb-2">{"Demographic Shifts"}</h4>
                <div class="space-y-3">
                    {for outlook.demographic_shifts.iter().map(|shift| html! {
                        <div class="border border-base-300 rounded-lg p-4">
                            <span class="font-semibold">{&shift.trend}</span>
                            <p class="text-sm text-gray-500 mt-1">{&shift.impact}</p>
                            {chip_list("Category implications", &shift.category_implications)}
                        </div>
                    })}
                </div>
            </div>
        </div>
    }
}

fn priority_badge(priority: &str) -> Html {
    let class = match priority {
        "high" => "badge badge-error",
        "medium" => "badge badge-warning",
        "low" => "badge badge-info",
        _ => "badge badge-ghost",
    };
    html! { <span {class}>{priority}</span> }
}

fn long_term_panel(outlook: &LongTermOutlook) -> Html {
    let population = &outlook.population_evolution;
    let infrastructure = &outlook.infrastructure_development;

    if population.changes.is_empty()
        && infrastructure.projects.is_empty()
        && outlook.recommended_adaptations.is_empty()
    {
        return empty_panel("No long-term predictions for this store.");
    }

    html! {
        <div class="space-y-4">
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-4">
                <div class="border border-base-300 rounded-lg p-4">
                    <span class="font-semibold">
                        <i class="fas fa-users mr-2"></i>{"Population Evolution"}
                    </span>
                    <div class="mt-2">{bullet_list(&population.changes)}</div>
                    {chip_list("Category impacts", &population.category_impacts)}
                </div>
                <div class="border border-base-300 rounded-lg p-4">
                    <span class="font-semibold">
                        <i class="fas fa-city mr-2"></i>{"Infrastructure Development"}
                    </span>
                    <div class="mt-2">{bullet_list(&infrastructure.projects)}</div>
                    {chip_list("Business implications", &infrastructure.business_implications)}
                </div>
            </div>

            {if !outlook.recommended_adaptations.is_empty() {
                html! {
                    <div>
                        <h4 class="font-semibold mb-2">{"Recommended Adaptations"}</h4>
                        <div class="overflow-x-auto">
                            <table class="table table-zebra">
                                <thead>
                                    <tr>
                                        <th>{"Area"}</th>
                                        <th>{"Action"}</th>
                                        <th>{"Timeline"}</th>
                                        <th>{"Priority"}</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {for outlook.recommended_adaptations.iter().map(|adaptation| html! {
                                        <tr>
                                            <td class="capitalize">{&adaptation.area}</td>
                                            <td>{&adaptation.action}</td>
                                            <td>{&adaptation.timeline}</td>
                                            <td>{priority_badge(&adaptation.priority)}</td>
                                        </tr>
                                    })}
                                </tbody>
                            </table>
                        </div>
                    </div>
                }
            } else {
                html! {}
            }}
        </div>
    }
}
