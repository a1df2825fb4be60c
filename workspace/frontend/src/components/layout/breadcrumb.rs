use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[derive(Clone, PartialEq)]
struct BreadcrumbItem {
    label: String,
    route: Route,
}

/// Breadcrumb trail derived from the current location.
#[function_component(Breadcrumb)]
pub fn breadcrumb() -> Html {
    let location = use_location();

    let breadcrumb_items = if let Some(route) =
        location.as_ref().and_then(|loc| Route::recognize(loc.path()))
    {
        match route {
            Route::Home | Route::Dashboard => vec![BreadcrumbItem {
                label: "Dashboard".to_string(),
                route: Route::Dashboard,
            }],
            Route::Visualization => vec![
                BreadcrumbItem {
                    label: "Dashboard".to_string(),
                    route: Route::Dashboard,
                },
                BreadcrumbItem {
                    label: "Sales & Payments".to_string(),
                    route: Route::Visualization,
                },
            ],
            Route::Upload => vec![
                BreadcrumbItem {
                    label: "Dashboard".to_string(),
                    route: Route::Dashboard,
                },
                BreadcrumbItem {
                    label: "Upload CSV".to_string(),
                    route: Route::Upload,
                },
            ],
            Route::About => vec![
                BreadcrumbItem {
                    label: "Dashboard".to_string(),
                    route: Route::Dashboard,
                },
                BreadcrumbItem {
                    label: "About".to_string(),
                    route: Route::About,
                },
            ],
            Route::NotFound => vec![
                BreadcrumbItem {
                    label: "Dashboard".to_string(),
                    route: Route::Dashboard,
                },
                BreadcrumbItem {
                    label: "404".to_string(),
                    route: Route::NotFound,
                },
            ],
        }
    } else {
        vec![BreadcrumbItem {
            label: "Dashboard".to_string(),
            route: Route::Dashboard,
        }]
    };

    html! {
        <div class="breadcrumbs text-sm px-6 py-2 bg-base-100">
            <ul>
                {for breadcrumb_items.iter().enumerate().map(|(idx, item)| {
                    let is_last = idx == breadcrumb_items.len() - 1;
                    html! {
                        <li>
                            if is_last {
                                <span class="text-primary font-semibold">{&item.label}</span>
                            } else {
                                <Link<Route> to={item.route.clone()} classes="hover:text-primary">
                                    {&item.label}
                                </Link<Route>>
                            }
                        </li>
                    }
                })}
            </ul>
        </div>
    }
}
