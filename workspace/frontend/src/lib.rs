use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod static_data;
pub mod api_client;
pub mod common;
pub mod hooks;
pub mod settings;

use common::toast::ToastProvider;
use components::landing::Landing;
use components::layout::layout::Layout;
use components::predictions::Predictions;
use components::upload::UploadCsv;
use components::visualization::Visualization;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/dashboard")]
    Dashboard,
    #[at("/dashboard/visualization")]
    Visualization,
    #[at("/dashboard/upload")]
    Upload,
    #[at("/about")]
    About,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    log::debug!("Routing to: {:?}", routes);
    match routes {
        Route::Home => {
            log::trace!("Rendering marketing landing page");
            // The landing page carries its own header and footer, so it
            // renders outside the dashboard chrome.
            html! { <Landing /> }
        }
        Route::Dashboard => {
            log::trace!("Rendering Demand Forecast page");
            html! { <PredictionsPage /> }
        }
        Route::Visualization => {
            log::trace!("Rendering Sales & Payments page");
            html! { <Layout title="Sales & Payments"><Visualization /></Layout> }
        }
        Route::Upload => {
            log::trace!("Rendering Upload CSV page");
            html! { <Layout title="Upload CSV"><UploadCsv /></Layout> }
        }
        Route::About => {
            log::trace!("Rendering About page");
            html! {
                <Layout title="About">
                    <div class="max-w-2xl space-y-3">
                        <p>{"Demandcast forecasts demand for hyperlocal stores from their \
                            historical sales, so owners can stock what their neighbourhood \
                            will actually buy."}</p>
                        <p>{"Upload a CSV of past sales on the Upload page and browse the \
                            per-store forecasts on the dashboard."}</p>
                    </div>
                </Layout>
            }
        }
        Route::NotFound => {
            log::warn!("404 - Route not found");
            html! { <Layout title="404"><h1>{"404 Not Found"}</h1></Layout> }
        }
    }
}

#[function_component(PredictionsPage)]
fn predictions_page() -> Html {
    let refresh_trigger = use_state(|| 0);

    let on_refresh = {
        let refresh_trigger = refresh_trigger.clone();
        Callback::from(move |_| {
            log::debug!("Demand forecast page refresh triggered");
            refresh_trigger.set(*refresh_trigger + 1);
        })
    };

    html! {
        <Layout title="Demand Forecast" on_refresh={Some(on_refresh)}>
            <Predictions key={*refresh_trigger} />
        </Layout>
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <ToastProvider>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ToastProvider>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== Demandcast Frontend Application Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("API base URL: {}", settings.api_base_url());

    log::trace!("Initializing Yew renderer");
    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
