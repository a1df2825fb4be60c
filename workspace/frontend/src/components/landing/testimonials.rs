use stylist::yew::use_style;
use yew::prelude::*;

use crate::static_data::{Testimonial, testimonials};

#[derive(Properties, PartialEq)]
struct ColumnProps {
    items: Vec<Testimonial>,
    /// Seconds per full loop; columns scroll at different speeds.
    duration_secs: u32,
    #[prop_or_default]
    class: Classes,
}

#[function_component(TestimonialColumn)]
fn testimonial_column(props: &ColumnProps) -> Html {
    let duration = props.duration_secs;
    let scroll = use_style!(
        r#"
        @keyframes column-scroll {
            from { transform: translateY(0); }
            to { transform: translateY(-50%); }
        }
        animation: column-scroll ${duration}s linear infinite;
        "#,
        duration = duration
    );

    let card = |testimonial: &Testimonial| {
        html! {
            <div class="card bg-base-100 shadow-md">
                <div class="card-body p-6">
                    <p class="text-sm">{testimonial.quote}</p>
                    <div class="mt-4">
                        <div class="font-semibold text-sm">{testimonial.name}</div>
                        <div class="text-xs text-base-content/60">{testimonial.handle}</div>
                    </div>
                </div>
            </div>
        }
    };

    html! {
        <div class={classes!("h-[600px]", "overflow-hidden", props.class.clone())}>
            <div class={classes!(scroll, "flex", "flex-col", "gap-6", "pb-6")}>
                // The list renders twice so the -50% translation loops
                // seamlessly.
                {for props.items.iter().map(&card)}
                {for props.items.iter().map(&card)}
            </div>
        </div>
    }
}

/// Store-owner testimonials in three independently scrolling columns.
#[function_component(Testimonials)]
pub fn testimonials_section() -> Html {
    let all = testimonials();
    let first: Vec<Testimonial> = all[0..3].to_vec();
    let second: Vec<Testimonial> = all[3..6].to_vec();
    let third: Vec<Testimonial> = all[6..9].to_vec();

    html! {
        <section class="py-24 bg-base-100">
            <div class="px-6 max-w-6xl mx-auto">
                <div class="max-w-3xl mx-auto text-center">
                    <div class="flex justify-center items-center">
                        <div class="badge badge-outline border-base-content/30 text-sm">
                            {"Testimonials"}
                        </div>
                    </div>
                    <h2 class="text-4xl md:text-5xl font-bold tracking-tight mt-5">
                        {"What our users say"}
                    </h2>
                </div>

                <div class="flex justify-center gap-6 mt-10">
                    <TestimonialColumn items={first} duration_secs={30} />
                    <TestimonialColumn items={second} duration_secs={45} class="hidden md:block" />
                    <TestimonialColumn items={third} duration_secs={38} class="hidden lg:block" />
                </div>
            </div>
        </section>
    }
}
