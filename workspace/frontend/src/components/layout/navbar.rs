use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub title: String,
    #[prop_or_default]
    pub on_refresh: Option<Callback<()>>,
}

#[function_component(Navbar)]
pub fn navbar(props: &Props) -> Html {
    html! {
        <div class="navbar bg-base-100 shadow-sm z-40 sticky top-0">
            <div class="flex-none lg:hidden">
                <label aria-label="open sidebar" class="btn btn-square btn-ghost" for="main-drawer">
                    <i class="fas fa-bars text-xl"></i>
                </label>
            </div>
            <div class="flex-1 px-4">
                <h1 class="text-xl font-bold" id="page-title">{ &props.title }</h1>
            </div>
            <div class="flex-none gap-2">
                {if let Some(on_refresh) = &props.on_refresh {
                    let on_refresh = on_refresh.clone();
                    html! {
                        <button
                            class="btn btn-ghost btn-circle"
                            title="Refresh"
                            onclick={Callback::from(move |_| {
                                log::debug!("Navbar refresh clicked");
                                on_refresh.emit(());
                            })}
                        >
                            <i class="fas fa-sync-alt text-xl"></i>
                        </button>
                    }
                } else {
                    html! {}
                }}

                <label class="swap swap-rotate btn btn-ghost btn-circle">
                    <input id="theme-toggle" type="checkbox"/>
                    <i class="swap-on fill-current fas fa-sun text-xl"></i>
                    <i class="swap-off fill-current fas fa-moon text-xl"></i>
                </label>
            </div>
        </div>
    }
}
