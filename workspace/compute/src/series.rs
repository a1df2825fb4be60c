use std::collections::BTreeMap;

use common::{ChartData, ChartSeries, SeriesData, SeriesPoint, StorePrediction};
use tracing::{debug, instrument, warn};

use crate::percent::parse_signed_percent;

/// X-axis labels shared by every per-category trend series.
const TREND_CATEGORIES: [&str; 2] = ["Start", "Change"];

/// Builds the cross-store demand overview chart.
///
/// Walks every store's short-term demand changes in store-id order and
/// emits one category label per change plus two parallel series: the
/// predicted change and the forecast confidence. An entry whose change or
/// confidence fails to parse is skipped whole, keeping the category axis
/// and both series aligned.
#[instrument(skip(predictions), fields(stores = predictions.len()))]
pub fn demand_overview(predictions: &BTreeMap<String, StorePrediction>) -> ChartData {
    let mut categories = Vec::new();
    let mut changes = Vec::new();
    let mut confidences = Vec::new();

    for (store_id, prediction) in predictions {
        for change in &prediction.short_term_predictions.demand_changes {
            let parsed_change = parse_signed_percent(&change.predicted_change);
            let parsed_confidence = parse_signed_percent(&change.confidence);
            match (parsed_change, parsed_confidence) {
                (Ok(value), Ok(confidence)) => {
                    categories.push(change.category.clone());
                    changes.push(value);
                    confidences.push(confidence);
                }
                _ => {
                    warn!(
                        store = %store_id,
                        category = %change.category,
                        change = %change.predicted_change,
                        confidence = %change.confidence,
                        "skipping demand change with malformed percent"
                    );
                }
            }
        }
    }

    debug!(categories = categories.len(), "built demand overview series");
    ChartData {
        categories,
        series: vec![
            ChartSeries::numbers("Change", changes),
            ChartSeries::numbers("Confidence", confidences),
        ],
    }
}

/// Builds the per-category trend chart for one store.
///
/// Each short-term demand change becomes its own series named after the
/// category, containing the two points `[0, predicted_change]` against the
/// shared `["Start", "Change"]` axis. Malformed change values are skipped.
/// A store with no demand changes yields an empty series list.
#[instrument(skip(prediction), fields(changes = prediction.short_term_predictions.demand_changes.len()))]
pub fn store_trend(prediction: &StorePrediction) -> ChartData {
    let mut series = Vec::new();

    for change in &prediction.short_term_predictions.demand_changes {
        match parse_signed_percent(&change.predicted_change) {
            Ok(value) => {
                series.push(ChartSeries::numbers(change.category.clone(), vec![0.0, value]));
            }
            Err(_) => {
                warn!(
                    category = %change.category,
                    change = %change.predicted_change,
                    "skipping trend series with malformed percent"
                );
            }
        }
    }

    ChartData {
        categories: TREND_CATEGORIES.iter().map(|c| c.to_string()).collect(),
        series,
    }
}

/// Swaps a chart between category-axis and labelled-point orientation.
///
/// Numeric series are zipped with the category axis into `{x, y}` points;
/// series already in point form are passed through unchanged. Values
/// beyond the category axis length are dropped.
pub fn swap_axes(data: &ChartData) -> ChartData {
    let series = data
        .series
        .iter()
        .map(|s| match &s.data {
            SeriesData::Numbers(values) => {
                let points = data
                    .categories
                    .iter()
                    .zip(values.iter())
                    .map(|(category, value)| SeriesPoint {
                        x: category.clone(),
                        y: *value,
                    })
                    .collect();
                ChartSeries::points(s.name.clone(), points)
            }
            SeriesData::Points(_) => s.clone(),
        })
        .collect();

    ChartData {
        categories: data.categories.clone(),
        series,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::{DemandChange, sample_predictions};

    fn prediction_with_changes(changes: Vec<DemandChange>) -> StorePrediction {
        let mut prediction = StorePrediction::empty();
        prediction.short_term_predictions.demand_changes = changes;
        prediction
    }

    fn change(category: &str, predicted: &str, confidence: &str) -> DemandChange {
        DemandChange {
            category: category.to_string(),
            predicted_change: predicted.to_string(),
            confidence: confidence.to_string(),
            driving_factors: vec![],
        }
    }

    #[test]
    fn test_store_trend_two_point_series() {
        let prediction = prediction_with_changes(vec![
            change("home office", "+15", "85"),
            change("wellness products", "+10", "78"),
        ]);

        let data = store_trend(&prediction);
        assert_eq!(data.categories, vec!["Start", "Change"]);
        assert_eq!(data.series.len(), 2);
        assert_eq!(data.series[0].name, "home office");
        assert_eq!(data.series[0].values(), vec![0.0, 15.0]);
        assert_eq!(data.series[1].name, "wellness products");
        assert_eq!(data.series[1].values(), vec![0.0, 10.0]);
    }

    #[test]
    fn test_store_trend_preserves_negative_sign() {
        let prediction = prediction_with_changes(vec![change("magazines", "-9%", "77%")]);
        let data = store_trend(&prediction);
        assert_eq!(data.series[0].values(), vec![0.0, -9.0]);
    }

    #[test]
    fn test_store_trend_empty_changes_yield_empty_series() {
        let data = store_trend(&StorePrediction::empty());
        assert!(data.series.is_empty());
        assert_eq!(data.categories, vec!["Start", "Change"]);
    }

    #[test]
    fn test_store_trend_skips_malformed_change() {
        let prediction = prediction_with_changes(vec![
            change("home office", "+15", "85"),
            change("mystery", "n/a", "50"),
            change("wellness products", "+10", "78"),
        ]);

        let data = store_trend(&prediction);
        let names: Vec<&str> = data.series.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["home office", "wellness products"]);
    }

    #[test]
    fn test_demand_overview_concatenates_stores_in_id_order() {
        let mut predictions = BTreeMap::new();
        predictions.insert(
            "2".to_string(),
            prediction_with_changes(vec![change("pet supplies", "+9%", "75%")]),
        );
        predictions.insert(
            "1".to_string(),
            prediction_with_changes(vec![
                change("home office", "+15%", "85%"),
                change("print and stationery", "-8%", "70%"),
            ]),
        );

        let data = demand_overview(&predictions);
        assert_eq!(
            data.categories,
            vec!["home office", "print and stationery", "pet supplies"]
        );
        assert_eq!(data.series.len(), 2);
        assert_eq!(data.series[0].name, "Change");
        assert_eq!(data.series[0].values(), vec![15.0, -8.0, 9.0]);
        assert_eq!(data.series[1].name, "Confidence");
        assert_eq!(data.series[1].values(), vec![85.0, 70.0, 75.0]);
    }

    #[test]
    fn test_demand_overview_skips_malformed_entry_whole() {
        let mut predictions = BTreeMap::new();
        predictions.insert(
            "1".to_string(),
            prediction_with_changes(vec![
                change("home office", "+15", "85"),
                change("broken", "+12", "unknown"),
                change("wellness products", "+10", "78"),
            ]),
        );

        let data = demand_overview(&predictions);
        assert_eq!(data.categories, vec!["home office", "wellness products"]);
        assert_eq!(data.series[0].values(), vec![15.0, 10.0]);
        assert_eq!(data.series[1].values(), vec![85.0, 78.0]);
    }

    #[test]
    fn test_demand_overview_on_sample_dataset_stays_aligned() {
        let predictions = sample_predictions();
        let data = demand_overview(&predictions);

        assert!(!data.categories.is_empty());
        assert_eq!(data.series[0].values().len(), data.categories.len());
        assert_eq!(data.series[1].values().len(), data.categories.len());
    }

    #[test]
    fn test_swap_axes_zips_categories_with_values() {
        let data = ChartData {
            categories: vec!["Sep".to_string(), "Oct".to_string()],
            series: vec![ChartSeries::numbers("Received Amount", vec![0.0, 20.0])],
        };

        let swapped = swap_axes(&data);
        match &swapped.series[0].data {
            SeriesData::Points(points) => {
                assert_eq!(points.len(), 2);
                assert_eq!(points[0].x, "Sep");
                assert_eq!(points[0].y, 0.0);
                assert_eq!(points[1].x, "Oct");
                assert_eq!(points[1].y, 20.0);
            }
            SeriesData::Numbers(_) => panic!("expected labelled points after swap"),
        }
    }

    #[test]
    fn test_swap_axes_truncates_to_category_length() {
        let data = ChartData {
            categories: vec!["M".to_string()],
            series: vec![ChartSeries::numbers("Sales", vec![44.0, 55.0])],
        };

        let swapped = swap_axes(&data);
        assert_eq!(swapped.series[0].values(), vec![44.0]);
    }
}
