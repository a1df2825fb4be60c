//! Compiled-in demo datasets for the visualization page and landing copy.
//!
//! The payments and weekly figures are illustrative numbers shown until a
//! store connects its own ledger; they are not derived from predictions.

use common::{ChartData, ChartSeries};

/// Totals displayed under the payments chart.
pub const RECEIVED_TOTAL: &str = "$45,070.00";
pub const DUE_TOTAL: &str = "$32,400.00";

/// Received vs due payments across a trailing year, September first.
pub fn payments_chart() -> ChartData {
    ChartData {
        categories: [
            "Sep", "Oct", "Nov", "Dec", "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug",
        ]
        .iter()
        .map(|m| m.to_string())
        .collect(),
        series: vec![
            ChartSeries::numbers(
                "Received Amount",
                vec![
                    0.0, 20.0, 35.0, 45.0, 35.0, 55.0, 65.0, 50.0, 65.0, 75.0, 60.0, 75.0,
                ],
            ),
            ChartSeries::numbers(
                "Due Amount",
                vec![
                    15.0, 9.0, 17.0, 32.0, 25.0, 68.0, 80.0, 68.0, 84.0, 94.0, 74.0, 62.0,
                ],
            ),
        ],
    }
}

/// Sales and revenue per weekday, Monday first.
pub fn weekly_chart() -> ChartData {
    ChartData {
        categories: ["M", "T", "W", "T", "F", "S", "S"]
            .iter()
            .map(|d| d.to_string())
            .collect(),
        series: vec![
            ChartSeries::numbers("Sales", vec![44.0, 55.0, 41.0, 67.0, 22.0, 43.0, 65.0]),
            ChartSeries::numbers("Revenue", vec![13.0, 23.0, 20.0, 8.0, 13.0, 27.0, 15.0]),
        ],
    }
}

/// A product with its predicted weekly demand.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub name: &'static str,
    pub category: &'static str,
    pub quantity: u32,
}

/// Products the forecast suggests stocking this week.
pub fn product_catalog() -> Vec<Product> {
    vec![
        Product {
            name: "Organic Green Tea",
            category: "Beverage",
            quantity: 150,
        },
        Product {
            name: "Artisan Whole Wheat Bread",
            category: "Bakery",
            quantity: 80,
        },
        Product {
            name: "Handmade Ceramic Mug",
            category: "Kitchenware",
            quantity: 40,
        },
        Product {
            name: "Eco-friendly Bamboo Toothbrush",
            category: "Personal Care",
            quantity: 200,
        },
        Product {
            name: "Organic Almond Butter",
            category: "Groceries",
            quantity: 60,
        },
    ]
}

#[derive(Debug, Clone, PartialEq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub name: &'static str,
    pub handle: &'static str,
}

/// Store-owner quotes for the landing page, rendered in three columns.
pub fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            quote: "The demographic insights are incredible. We discovered our area has 65% \
                    working professionals, helping us optimize our dark store inventory for \
                    grab-and-go meals.",
            name: "Rajesh Mehta",
            handle: "@quickmart_delhi",
        },
        Testimonial {
            quote: "Our stockout incidents dropped by 75% within the first month. The AI \
                    predictions for our tech-hub locality are remarkably accurate.",
            name: "Priya Sharma",
            handle: "@priya_retail",
        },
        Testimonial {
            quote: "The system predicted increased demand for healthy snacks near our store \
                    due to a new fitness center. This hyper-local intelligence is game-changing.",
            name: "Amit Patel",
            handle: "@quickserve_mumbai",
        },
        Testimonial {
            quote: "We were perfectly stocked during an unexpected rainy season because the AI \
                    predicted a surge in comfort foods. Impressive local weather integration!",
            name: "Deepak Kumar",
            handle: "@inventory_pro",
        },
        Testimonial {
            quote: "Managing inventory across multiple dark stores in Bangalore was challenging \
                    until we found this solution. Now each micro-market is optimized perfectly.",
            name: "Sarah Mathews",
            handle: "@freshcart_pune",
        },
        Testimonial {
            quote: "The system's ability to predict festival-related demand spikes has reduced \
                    our waste by 40% while maintaining perfect stock levels.",
            name: "Kavita Singh",
            handle: "@smart_retail",
        },
        Testimonial {
            quote: "Real-time market intelligence helped us capitalize on local events we \
                    didn't even know about. Our revenue increased by 35% in just two months.",
            name: "Ankit Verma",
            handle: "@quickstore_guru",
        },
        Testimonial {
            quote: "The population intelligence feature helped us optimize our product mix \
                    perfectly for our university area dark store. Students love us!",
            name: "Ravi Kumar",
            handle: "@campusmart",
        },
        Testimonial {
            quote: "From local events to community patterns, this AI understands our market \
                    better than we did after 5 years of operation.",
            name: "Neha Gupta",
            handle: "@smartstore_blr",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_series_align_with_categories() {
        for chart in [payments_chart(), weekly_chart()] {
            for series in &chart.series {
                assert_eq!(series.values().len(), chart.categories.len());
            }
        }
    }

    #[test]
    fn catalog_and_testimonials_are_populated() {
        assert_eq!(product_catalog().len(), 5);
        // Three columns of three on the landing page.
        assert_eq!(testimonials().len(), 9);
    }
}
