//! Chart-ready series shapes shared by the transform layer and the frontend.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One labelled point on a category axis.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SeriesPoint {
    pub x: String,
    pub y: f64,
}

/// Payload of a chart series.
///
/// Plain bar and line charts carry a bare list of values aligned with a
/// separate category axis; axis-swapped charts carry labelled points. The
/// untagged representation keeps the JSON identical to what the plotting
/// library consumes.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(untagged)]
pub enum SeriesData {
    Numbers(Vec<f64>),
    Points(Vec<SeriesPoint>),
}

/// A named chart series.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ChartSeries {
    pub name: String,
    pub data: SeriesData,
}

/// A complete chart payload: the category axis plus its series.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ChartData {
    pub categories: Vec<String>,
    pub series: Vec<ChartSeries>,
}

impl ChartSeries {
    pub fn numbers(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            data: SeriesData::Numbers(values),
        }
    }

    pub fn points(name: impl Into<String>, points: Vec<SeriesPoint>) -> Self {
        Self {
            name: name.into(),
            data: SeriesData::Points(points),
        }
    }

    /// Values of a numeric series; labelled points yield their `y` values.
    pub fn values(&self) -> Vec<f64> {
        match &self.data {
            SeriesData::Numbers(values) => values.clone(),
            SeriesData::Points(points) => points.iter().map(|p| p.y).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_series_serializes_as_bare_array() {
        let series = ChartSeries::numbers("Change", vec![15.0, -5.0]);
        let json = serde_json::to_value(&series).unwrap();
        assert_eq!(json["name"], "Change");
        assert_eq!(json["data"][0], 15.0);
        assert_eq!(json["data"][1], -5.0);
    }

    #[test]
    fn point_series_serializes_as_xy_objects() {
        let series = ChartSeries::points(
            "Received Amount",
            vec![SeriesPoint {
                x: "Sep".to_string(),
                y: 20.0,
            }],
        );
        let json = serde_json::to_value(&series).unwrap();
        assert_eq!(json["data"][0]["x"], "Sep");
        assert_eq!(json["data"][0]["y"], 20.0);
    }

    #[test]
    fn untagged_data_roundtrips_both_shapes() {
        let numbers: ChartSeries =
            serde_json::from_str(r#"{"name":"Sales","data":[44.0,55.0]}"#).unwrap();
        assert_eq!(numbers.values(), vec![44.0, 55.0]);

        let points: ChartSeries =
            serde_json::from_str(r#"{"name":"Sales","data":[{"x":"M","y":44.0}]}"#).unwrap();
        assert_eq!(points.values(), vec![44.0]);
    }
}
