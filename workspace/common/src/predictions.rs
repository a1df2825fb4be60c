//! Demand prediction payloads and the store registry.
//!
//! The prediction tree mirrors the JSON the forecasting pipeline emits per
//! store: a short-term block (category demand shifts plus peak hours), a
//! mid-term block (emerging categories plus demographic shifts) and a
//! long-term block (neighborhood evolution plus recommended adaptations).
//! Every collection field tolerates absence so a store with partial data
//! still deserializes instead of failing the whole dashboard.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A monitored store location.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct Store {
    /// Stable identifier used in API paths and dashboard selectors.
    pub id: String,
    /// Display name shown on selector buttons.
    pub name: String,
    /// Neighborhood the store serves.
    pub location: String,
}

/// One predicted demand shift for a product category.
///
/// `predicted_change` and `confidence` are signed/unsigned percent strings
/// as produced by the pipeline (for example `"+15%"` and `"85%"`).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DemandChange {
    pub category: String,
    pub predicted_change: String,
    pub confidence: String,
    #[serde(default)]
    pub driving_factors: Vec<String>,
}

/// Expected busy windows and what drives them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct PeakHours {
    #[serde(default)]
    pub changes: Vec<String>,
    #[serde(default)]
    pub factors: Vec<String>,
}

/// Next-week outlook: category shifts and peak-hour movement.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ShortTermOutlook {
    #[serde(default)]
    pub demand_changes: Vec<DemandChange>,
    #[serde(default)]
    pub peak_hours: PeakHours,
}

/// A category expected to gain relevance over the coming months.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct EmergingCategory {
    pub category: String,
    pub growth_potential: String,
    #[serde(default)]
    pub driving_factors: Vec<String>,
}

/// A shift in who shops at the store and what it implies.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DemographicShift {
    pub trend: String,
    pub impact: String,
    #[serde(default)]
    pub category_implications: Vec<String>,
}

/// Months-out outlook: new categories and demographic movement.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct MidTermOutlook {
    #[serde(default)]
    pub emerging_categories: Vec<EmergingCategory>,
    #[serde(default)]
    pub demographic_shifts: Vec<DemographicShift>,
}

/// How the surrounding population is expected to change.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct PopulationEvolution {
    #[serde(default)]
    pub changes: Vec<String>,
    #[serde(default)]
    pub category_impacts: Vec<String>,
}

/// Construction and civic projects near the store.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct InfrastructureDevelopment {
    #[serde(default)]
    pub projects: Vec<String>,
    #[serde(default)]
    pub business_implications: Vec<String>,
}

/// A concrete assortment or operations change the store should make.
///
/// `priority` is one of `"high"`, `"medium"` or `"low"` as emitted by the
/// pipeline; it stays a plain string so unknown values render instead of
/// failing deserialization.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct RecommendedAdaptation {
    pub area: String,
    pub action: String,
    pub timeline: String,
    pub priority: String,
}

/// Year-plus outlook: neighborhood evolution and adaptations.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct LongTermOutlook {
    #[serde(default)]
    pub population_evolution: PopulationEvolution,
    #[serde(default)]
    pub infrastructure_development: InfrastructureDevelopment,
    #[serde(default)]
    pub recommended_adaptations: Vec<RecommendedAdaptation>,
}

/// Full prediction tree for one store.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct StorePrediction {
    #[serde(default)]
    pub short_term_predictions: ShortTermOutlook,
    #[serde(default)]
    pub mid_term_predictions: MidTermOutlook,
    #[serde(default)]
    pub long_term_predictions: LongTermOutlook,
}

impl StorePrediction {
    /// Prediction with every section present but empty.
    ///
    /// Handlers return this for unknown store ids so dashboard pages can
    /// render their skeleton without null checks on each section.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Registry of the stores covered by the sample dataset.
///
/// Ids are stable and ordered; dashboard selectors and API listings both
/// iterate this catalog.
pub fn store_catalog() -> Vec<Store> {
    let entry = |id: &str, name: &str, location: &str| Store {
        id: id.to_string(),
        name: name.to_string(),
        location: location.to_string(),
    };
    vec![
        entry("1", "Store 1", "Financial District, Manhattan"),
        entry("2", "Store 2", "Upper East Side, Manhattan"),
        entry("3", "Store 3", "Greenwich Village, Manhattan"),
        entry("4", "Store 4", "Park Slope, Brooklyn"),
        entry("5", "Store 5", "Chelsea, Manhattan"),
        entry("6", "Store 6", "Upper West Side, Manhattan"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_prediction_has_all_sections() {
        let prediction = StorePrediction::empty();
        assert!(prediction.short_term_predictions.demand_changes.is_empty());
        assert!(prediction.short_term_predictions.peak_hours.changes.is_empty());
        assert!(prediction.mid_term_predictions.emerging_categories.is_empty());
        assert!(prediction.long_term_predictions.recommended_adaptations.is_empty());
    }

    #[test]
    fn empty_prediction_serializes_with_all_top_level_keys() {
        let value = serde_json::to_value(StorePrediction::empty()).unwrap();
        let object = value.as_object().unwrap();
        assert!(object.contains_key("short_term_predictions"));
        assert!(object.contains_key("mid_term_predictions"));
        assert!(object.contains_key("long_term_predictions"));
    }

    #[test]
    fn partial_payload_deserializes_with_defaults() {
        // Pipeline output sometimes omits whole sections; missing ones
        // must come back empty rather than failing deserialization.
        let json = r#"{
            "short_term_predictions": {
                "demand_changes": [
                    {
                        "category": "home office",
                        "predicted_change": "+15%",
                        "confidence": "85%"
                    }
                ]
            }
        }"#;
        let prediction: StorePrediction = serde_json::from_str(json).unwrap();
        assert_eq!(prediction.short_term_predictions.demand_changes.len(), 1);
        let change = &prediction.short_term_predictions.demand_changes[0];
        assert_eq!(change.category, "home office");
        assert!(change.driving_factors.is_empty());
        assert!(prediction.short_term_predictions.peak_hours.changes.is_empty());
        assert_eq!(prediction.mid_term_predictions, MidTermOutlook::default());
        assert_eq!(prediction.long_term_predictions, LongTermOutlook::default());
    }

    #[test]
    fn store_catalog_is_ordered_and_unique() {
        let stores = store_catalog();
        assert_eq!(stores.len(), 6);
        let ids: Vec<&str> = stores.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5", "6"]);
    }
}
