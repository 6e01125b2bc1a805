//! Cost and time constants for the print estimator.

use serde::{Deserialize, Serialize};

use crate::material::RateTable;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteConfig {
    pub rates: RateTable,
    /// Labour charged per estimated machine hour.
    pub labor_per_hour: f64,
    /// Floor on the machine-time estimate, in hours.
    pub min_hours: f64,
    /// Hours per cm³.
    pub hours_per_cm3: f64,
    /// Hours per √cm³.
    pub hours_per_sqrt_cm3: f64,
    /// Part height assumed when counting layers (mm).
    pub assumed_height_mm: f64,
    /// Fixed minutes per layer.
    pub minutes_per_layer: f64,
    /// Extra minutes per layer per cm³.
    pub minutes_per_layer_per_cm3: f64,
    /// Support material surcharge per cm³.
    pub support_per_cm3: f64,
    /// Post-processing charge per cm³, per part.
    pub post_processing_per_cm3: f64,
    /// Minimum post-processing charge per part.
    pub post_processing_min: f64,
    /// Rush surcharge as a fraction of material plus labour.
    pub rush_surcharge: f64,
    /// Working hours per delivery day.
    pub hours_per_day: f64,
}

impl Default for QuoteConfig {
    fn default() -> Self {
        Self {
            rates: RateTable::calculator_usd(),
            labor_per_hour: 12.0,
            min_hours: 0.5,
            hours_per_cm3: 0.08,
            hours_per_sqrt_cm3: 0.2,
            assumed_height_mm: 50.0,
            minutes_per_layer: 2.0,
            minutes_per_layer_per_cm3: 0.01,
            support_per_cm3: 0.08,
            post_processing_per_cm3: 0.15,
            post_processing_min: 8.0,
            rush_surcharge: 0.6,
            hours_per_day: 8.0,
        }
    }
}
