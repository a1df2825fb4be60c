use common::SignupRequest;
use yew::prelude::*;

use crate::api_client::users::create_signup;
use crate::common::toast::ToastContext;

/// Early-access signup form at the bottom of the landing page.
#[function_component(CallToAction)]
pub fn call_to_action() -> Html {
    let toast_ctx = use_context::<ToastContext>().unwrap();
    let form_ref = use_node_ref();
    let is_submitting = use_state(|| false);

    let on_submit = {
        let toast_ctx = toast_ctx.clone();
        let form_ref = form_ref.clone();
        let is_submitting = is_submitting.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if *is_submitting {
                return;
            }

            if let Some(form) = form_ref.cast::<web_sys::HtmlFormElement>() {
                let form_data = web_sys::FormData::new_with_form(&form).unwrap();

                let username = form_data.get("store_name").as_string().unwrap_or_default();
                let email = form_data.get("email").as_string().unwrap_or_default();
                let phone = form_data
                    .get("phone")
                    .as_string()
                    .filter(|value| !value.trim().is_empty());

                if username.trim().is_empty() || email.trim().is_empty() {
                    toast_ctx.show_warning("Store name and email are required.".to_string());
                    return;
                }

                let request = SignupRequest {
                    username: username.trim().to_string(),
                    email: email.trim().to_string(),
                    phone,
                };

                is_submitting.set(true);

                let toast_ctx = toast_ctx.clone();
                let is_submitting = is_submitting.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    match create_signup(request).await {
                        Ok(user) => {
                            toast_ctx.show_success(format!(
                                "Welcome aboard, {}! We'll be in touch at {}.",
                                user.username, user.email
                            ));
                            form.reset();
                        }
                        Err(e) => {
                            toast_ctx.show_error(e);
                        }
                    }
                    is_submitting.set(false);
                });
            }
        })
    };

    html! {
        <section class="py-24 bg-base-200">
            <div class="px-6 max-w-3xl mx-auto text-center">
                <h2 class="text-4xl md:text-5xl font-bold tracking-tight">
                    {"Sign up for free today"}
                </h2>
                <p class="text-lg text-base-content/70 tracking-tight mt-5">
                    {"Join the early-access list and be the first to put neighborhood-level \
                      forecasts behind your shelves."}
                </p>

                <form ref={form_ref} onsubmit={on_submit} class="mt-8 space-y-3 max-w-md mx-auto">
                    <input
                        type="text"
                        name="store_name"
                        placeholder="Store name"
                        class="input input-bordered w-full"
                        disabled={*is_submitting}
                    />
                    <input
                        type="email"
                        name="email"
                        placeholder="you@example.com"
                        class="input input-bordered w-full"
                        disabled={*is_submitting}
                    />
                    <input
                        type="tel"
                        name="phone"
                        placeholder="Phone (optional)"
                        class="input input-bordered w-full"
                        disabled={*is_submitting}
                    />
                    <button type="submit" class="btn btn-neutral w-full" disabled={*is_submitting}>
                        {if *is_submitting {
                            html! {
                                <>
                                    <span class="loading loading-spinner loading-sm"></span>
                                    {" Signing up..."}
                                </>
                            }
                        } else {
                            html! { {"Get early access"} }
                        }}
                    </button>
                </form>
            </div>
        </section>
    }
}
