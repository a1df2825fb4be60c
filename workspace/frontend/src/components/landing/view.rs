use yew::prelude::*;

use super::call_to_action::CallToAction;
use super::footer::Footer;
use super::header::Header;
use super::hero::Hero;
use super::showcase::Showcase;
use super::testimonials::Testimonials;

/// Marketing landing page, rendered without the dashboard chrome.
#[function_component(Landing)]
pub fn landing() -> Html {
    html! {
        <>
            <Header />
            <Hero />
            <Showcase />
            <Testimonials />
            <CallToAction />
            <Footer />
        </>
    }
}
