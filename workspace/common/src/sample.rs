//! Baked-in prediction dataset for the six sample stores.
//!
//! The deployed pipeline refreshes these trees nightly; this module carries
//! the reference snapshot the backend serves and the tests assert against.

use std::collections::BTreeMap;

use crate::predictions::{
    DemandChange, DemographicShift, EmergingCategory, InfrastructureDevelopment, LongTermOutlook,
    MidTermOutlook, PeakHours, PopulationEvolution, RecommendedAdaptation, ShortTermOutlook,
    StorePrediction,
};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn change(category: &str, predicted: &str, confidence: &str, factors: &[&str]) -> DemandChange {
    DemandChange {
        category: category.to_string(),
        predicted_change: predicted.to_string(),
        confidence: confidence.to_string(),
        driving_factors: strings(factors),
    }
}

fn emerging(category: &str, growth_potential: &str, factors: &[&str]) -> EmergingCategory {
    EmergingCategory {
        category: category.to_string(),
        growth_potential: growth_potential.to_string(),
        driving_factors: strings(factors),
    }
}

fn shift(trend: &str, impact: &str, implications: &[&str]) -> DemographicShift {
    DemographicShift {
        trend: trend.to_string(),
        impact: impact.to_string(),
        category_implications: strings(implications),
    }
}

fn adaptation(area: &str, action: &str, timeline: &str, priority: &str) -> RecommendedAdaptation {
    RecommendedAdaptation {
        area: area.to_string(),
        action: action.to_string(),
        timeline: timeline.to_string(),
        priority: priority.to_string(),
    }
}

/// Predictions for every store in the catalog, keyed by store id.
pub fn sample_predictions() -> BTreeMap<String, StorePrediction> {
    let mut predictions = BTreeMap::new();
    predictions.insert("1".to_string(), financial_district());
    predictions.insert("2".to_string(), upper_east_side());
    predictions.insert("3".to_string(), greenwich_village());
    predictions.insert("4".to_string(), park_slope());
    predictions.insert("5".to_string(), chelsea());
    predictions.insert("6".to_string(), upper_west_side());
    tracing::debug!(stores = predictions.len(), "loaded sample predictions");
    predictions
}

fn financial_district() -> StorePrediction {
    StorePrediction {
        short_term_predictions: ShortTermOutlook {
            demand_changes: vec![
                change(
                    "home office",
                    "+15%",
                    "85%",
                    &["increasing work-from-home population", "convenience premium"],
                ),
                change(
                    "wellness products",
                    "+10%",
                    "78%",
                    &["new fitness center opening nearby", "health-conscious office workers"],
                ),
                change(
                    "grab-and-go lunches",
                    "+12%",
                    "82%",
                    &["return-to-office lunch rush", "few food options on the block"],
                ),
                change("print and stationery", "-8%", "70%", &["offices going paperless"]),
            ],
            peak_hours: PeakHours {
                changes: strings(&["12:00 PM - 2:00 PM", "6:00 PM - 8:00 PM"]),
                factors: strings(&["office lunch breaks", "commuter pickup on the way home"]),
            },
        },
        mid_term_predictions: MidTermOutlook {
            emerging_categories: vec![
                emerging(
                    "premium coffee",
                    "high",
                    &["remote workers hosting meetings at home", "specialty roaster closures nearby"],
                ),
                emerging("meal kits", "medium", &["residents cooking more weekday dinners"]),
            ],
            demographic_shifts: vec![shift(
                "younger professionals moving into converted office towers",
                "more single-person households within two blocks",
                &["single-serve portions", "late-evening snacks"],
            )],
        },
        long_term_predictions: LongTermOutlook {
            population_evolution: PopulationEvolution {
                changes: strings(&[
                    "office-to-residential conversions adding roughly 2,000 units",
                    "weekday footfall recovering toward pre-pandemic levels",
                ]),
                category_impacts: strings(&["household staples", "breakfast items"]),
            },
            infrastructure_development: InfrastructureDevelopment {
                projects: strings(&[
                    "Water Street office-to-residential conversion",
                    "Fulton Street protected bike lanes",
                    "waterfront esplanade extension",
                ]),
                business_implications: strings(&[
                    "more evening and weekend traffic",
                    "cyclist grab-and-go demand",
                ]),
            },
            recommended_adaptations: vec![
                adaptation(
                    "assortment",
                    "expand the grab-and-go lunch range",
                    "next 4 weeks",
                    "high",
                ),
                adaptation(
                    "inventory",
                    "deepen home office stock ahead of Q4",
                    "next quarter",
                    "medium",
                ),
                adaptation(
                    "operations",
                    "extend weekend hours as residents move in",
                    "next 6 months",
                    "low",
                ),
            ],
        },
    }
}

fn upper_east_side() -> StorePrediction {
    StorePrediction {
        short_term_predictions: ShortTermOutlook {
            demand_changes: vec![
                change(
                    "organic groceries",
                    "+18%",
                    "88%",
                    &["affluent families trading up", "farmers market closed for renovation"],
                ),
                change("pet supplies", "+9%", "75%", &["new dog run opening in Carl Schurz Park"]),
                change("baby care", "+7%", "72%", &["young families replacing older tenants"]),
                change("tobacco", "-12%", "80%", &["citywide decline in smoking rates"]),
            ],
            peak_hours: PeakHours {
                changes: strings(&["7:00 AM - 9:00 AM", "5:00 PM - 7:00 PM"]),
                factors: strings(&["school drop-off", "after-work shopping"]),
            },
        },
        mid_term_predictions: MidTermOutlook {
            emerging_categories: vec![
                emerging("premium skincare", "high", &["pharmacy chain downsizing nearby"]),
                emerging("fresh flowers", "medium", &["hospital visitor traffic"]),
            ],
            demographic_shifts: vec![shift(
                "young families moving in as rents soften",
                "stroller traffic up on weekday mornings",
                &["baby care", "kids snacks"],
            )],
        },
        long_term_predictions: LongTermOutlook {
            population_evolution: PopulationEvolution {
                changes: strings(&["school enrollment rising after two flat years"]),
                category_impacts: strings(&["school supplies", "lunchbox items"]),
            },
            infrastructure_development: InfrastructureDevelopment {
                projects: strings(&[
                    "Second Avenue subway phase 2",
                    "East River greenway repairs",
                ]),
                business_implications: strings(&["construction crew morning rush for two years"]),
            },
            recommended_adaptations: vec![
                adaptation("assortment", "add an organic produce cooler", "next 8 weeks", "high"),
                adaptation(
                    "operations",
                    "open 30 minutes earlier on school days",
                    "next month",
                    "medium",
                ),
            ],
        },
    }
}

fn greenwich_village() -> StorePrediction {
    StorePrediction {
        short_term_predictions: ShortTermOutlook {
            demand_changes: vec![
                change(
                    "healthy snacks",
                    "+14%",
                    "83%",
                    &["new fitness center opening nearby", "student wellness trend"],
                ),
                change("craft beverages", "+11%", "79%", &["weekend visitor traffic"]),
                change("late-night snacks", "+9%", "74%", &["exam season study hours"]),
                change("newspapers", "-10%", "81%", &["digital subscriptions"]),
            ],
            peak_hours: PeakHours {
                changes: strings(&["11:00 AM - 1:00 PM", "8:00 PM - 11:00 PM"]),
                factors: strings(&["between-class breaks", "evening study and nightlife"]),
            },
        },
        mid_term_predictions: MidTermOutlook {
            emerging_categories: vec![
                emerging(
                    "plant-based alternatives",
                    "high",
                    &["student demand", "two vegan cafes opened on the block"],
                ),
                emerging("energy drinks", "medium", &["late library hours during term"]),
            ],
            demographic_shifts: vec![shift(
                "student population turns over each semester",
                "demand resets sharply in September and February",
                &["dorm essentials", "grab-and-go breakfast"],
            )],
        },
        long_term_predictions: LongTermOutlook {
            population_evolution: PopulationEvolution {
                changes: strings(&["university expanding enrollment by 8% over five years"]),
                category_impacts: strings(&["instant meals", "study fuel"]),
            },
            infrastructure_development: InfrastructureDevelopment {
                projects: strings(&[
                    "university science center expansion",
                    "Washington Square fountain restoration",
                ]),
                business_implications: strings(&["larger September rush each year"]),
            },
            recommended_adaptations: vec![
                adaptation(
                    "assortment",
                    "stock dorm move-in bundles before each semester",
                    "recurring",
                    "high",
                ),
                adaptation("operations", "extend Friday closing to midnight", "next month", "low"),
            ],
        },
    }
}

fn park_slope() -> StorePrediction {
    StorePrediction {
        short_term_predictions: ShortTermOutlook {
            demand_changes: vec![
                change(
                    "organic produce",
                    "+14%",
                    "82%",
                    &["food co-op waitlist overflow", "farmers market crowds"],
                ),
                change("kids snacks", "+11%", "79%", &["stroller-dense blocks", "school pickup routine"]),
                change("prepared dinners", "+9%", "75%", &["two-income households short on time"]),
                change("diet soda", "-7%", "72%", &["shift toward seltzer"]),
            ],
            peak_hours: PeakHours {
                changes: strings(&["8:00 AM - 9:30 AM", "5:00 PM - 7:00 PM"]),
                factors: strings(&["school drop-off along Seventh Avenue", "after-work dinner shopping"]),
            },
        },
        mid_term_predictions: MidTermOutlook {
            emerging_categories: vec![
                emerging("natural wine", "high", &["dinner party culture", "no nearby stockist"]),
                emerging("allergy-friendly snacks", "medium", &["school snack policies"]),
            ],
            demographic_shifts: vec![shift(
                "families staying put as mortgage rates lock them in",
                "fewer move-outs, deeper repeat-customer loyalty",
                &["family-size packs", "school lunch items"],
            )],
        },
        long_term_predictions: LongTermOutlook {
            population_evolution: PopulationEvolution {
                changes: strings(&["Fourth Avenue rezoning towers adding young renters"]),
                category_impacts: strings(&["single-serve dinners", "seltzer"]),
            },
            infrastructure_development: InfrastructureDevelopment {
                projects: strings(&[
                    "Fourth Avenue streetscape rebuild",
                    "Prospect Park West bike lane extension",
                ]),
                business_implications: strings(&[
                    "construction crew coffee runs",
                    "cyclist grab-and-go demand",
                ]),
            },
            recommended_adaptations: vec![
                adaptation(
                    "assortment",
                    "expand the kids snack shelf before September",
                    "next 6 weeks",
                    "high",
                ),
                adaptation(
                    "operations",
                    "add a second register for the school rush",
                    "next month",
                    "medium",
                ),
            ],
        },
    }
}

fn chelsea() -> StorePrediction {
    StorePrediction {
        short_term_predictions: ShortTermOutlook {
            demand_changes: vec![
                change(
                    "protein snacks",
                    "+16%",
                    "85%",
                    &["boutique gyms on every block", "post-workout foot traffic"],
                ),
                change("grab-and-go salads", "+12%", "80%", &["gallery and tech office lunch crowd"]),
                change("sparkling water", "+10%", "76%", &["High Line visitor flow"]),
                change("lottery tickets", "-6%", "70%", &["younger foot traffic"]),
            ],
            peak_hours: PeakHours {
                changes: strings(&["11:00 AM - 2:00 PM", "5:00 PM - 8:00 PM"]),
                factors: strings(&["tourist lunch window", "post-gym pickup"]),
            },
        },
        mid_term_predictions: MidTermOutlook {
            emerging_categories: vec![
                emerging("ready-to-drink cold brew", "high", &["queues at nearby roasters"]),
                emerging("electrolyte mixes", "medium", &["gym crowd recovery habits"]),
            ],
            demographic_shifts: vec![shift(
                "galleries ceding street frontage to tech tenants",
                "weekday lunch rush growing quarter over quarter",
                &["premium lunch", "afternoon snacks"],
            )],
        },
        long_term_predictions: LongTermOutlook {
            population_evolution: PopulationEvolution {
                changes: strings(&["Hudson Yards spillover adding high-income renters"]),
                category_impacts: strings(&["premium convenience", "late-night snacks"]),
            },
            infrastructure_development: InfrastructureDevelopment {
                projects: strings(&[
                    "Hudson River Park pier renovation",
                    "23rd Street station elevator installation",
                ]),
                business_implications: strings(&["more weekend visitor traffic"]),
            },
            recommended_adaptations: vec![
                adaptation(
                    "assortment",
                    "launch a post-workout cooler by the register",
                    "next 4 weeks",
                    "high",
                ),
                adaptation(
                    "marketing",
                    "partner with nearby gyms on member discounts",
                    "next quarter",
                    "medium",
                ),
            ],
        },
    }
}

fn upper_west_side() -> StorePrediction {
    StorePrediction {
        short_term_predictions: ShortTermOutlook {
            demand_changes: vec![
                change("fresh bakery", "+13%", "81%", &["weekend Central Park picnics"]),
                change(
                    "vitamins and supplements",
                    "+10%",
                    "77%",
                    &["aging residents", "new urgent care next door"],
                ),
                change("kosher prepared foods", "+8%", "74%", &["deli closure left demand unserved"]),
                change("greeting cards", "-7%", "71%", &["digital messaging shift"]),
            ],
            peak_hours: PeakHours {
                changes: strings(&["9:00 AM - 11:00 AM", "4:00 PM - 6:00 PM"]),
                factors: strings(&["post-school-run errands", "pre-dinner shopping"]),
            },
        },
        mid_term_predictions: MidTermOutlook {
            emerging_categories: vec![
                emerging("low-sodium staples", "high", &["residents aging in place"]),
                emerging("boxed chocolates", "medium", &["Lincoln Center gifting before curtain"]),
            ],
            demographic_shifts: vec![shift(
                "empty nesters downsizing into the neighborhood",
                "smaller baskets, more frequent trips",
                &["single portions", "fresh daily items"],
            )],
        },
        long_term_predictions: LongTermOutlook {
            population_evolution: PopulationEvolution {
                changes: strings(&["senior share of residents growing steadily"]),
                category_impacts: strings(&["pharmacy adjacents", "easy-open packaging"]),
            },
            infrastructure_development: InfrastructureDevelopment {
                projects: strings(&[
                    "Lincoln Center campus renovation",
                    "96th Street station accessibility upgrade",
                ]),
                business_implications: strings(&["event-night snack rush"]),
            },
            recommended_adaptations: vec![
                adaptation(
                    "assortment",
                    "add a low-sodium staples section",
                    "next 2 months",
                    "high",
                ),
                adaptation(
                    "operations",
                    "stay open through Lincoln Center curtain times",
                    "next season",
                    "low",
                ),
            ],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predictions::store_catalog;

    #[test]
    fn sample_covers_every_catalog_store() {
        let predictions = sample_predictions();
        for store in store_catalog() {
            assert!(
                predictions.contains_key(&store.id),
                "missing predictions for store {}",
                store.id
            );
        }
        assert_eq!(predictions.len(), store_catalog().len());
    }

    #[test]
    fn every_store_has_a_complete_short_term_section() {
        for (id, prediction) in sample_predictions() {
            let short = &prediction.short_term_predictions;
            assert!(!short.demand_changes.is_empty(), "store {id} has no demand changes");
            assert!(!short.peak_hours.changes.is_empty(), "store {id} has no peak hours");
            for change in &short.demand_changes {
                assert!(
                    change.predicted_change.starts_with('+')
                        || change.predicted_change.starts_with('-'),
                    "store {id} change {:?} is unsigned",
                    change.predicted_change
                );
                assert!(change.confidence.ends_with('%'));
            }
        }
    }

    #[test]
    fn financial_district_home_office_matches_pipeline_snapshot() {
        let predictions = sample_predictions();
        let store = &predictions["1"];
        let home_office = store
            .short_term_predictions
            .demand_changes
            .iter()
            .find(|c| c.category == "home office")
            .unwrap();
        assert_eq!(home_office.predicted_change, "+15%");
        assert_eq!(home_office.confidence, "85%");
        assert_eq!(
            home_office.driving_factors,
            vec!["increasing work-from-home population", "convenience premium"]
        );
        assert_eq!(
            store.short_term_predictions.peak_hours.changes,
            vec!["12:00 PM - 2:00 PM", "6:00 PM - 8:00 PM"]
        );
    }
}
