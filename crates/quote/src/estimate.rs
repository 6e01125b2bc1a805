//! Price and lead-time estimate for a print job.

use mesh_types::ModelInfo;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::config::QuoteConfig;
use crate::error::QuoteError;
use crate::material::{Material, RateTable};

/// Round to cents.
pub fn round_money(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Slicer layer height. Finer layers take longer to print and supervise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerHeight {
    /// 0.1 mm
    Fine,
    /// 0.2 mm
    #[default]
    Standard,
    /// 0.3 mm
    Draft,
}

impl LayerHeight {
    pub fn mm(&self) -> f64 {
        match self {
            LayerHeight::Fine => 0.1,
            LayerHeight::Standard => 0.2,
            LayerHeight::Draft => 0.3,
        }
    }

    /// Labour multiplier.
    pub fn complexity(&self) -> f64 {
        match self {
            LayerHeight::Fine => 1.8,
            LayerHeight::Standard => 1.0,
            LayerHeight::Draft => 0.7,
        }
    }

    pub fn from_mm(mm: f64) -> Option<Self> {
        [LayerHeight::Fine, LayerHeight::Standard, LayerHeight::Draft]
            .into_iter()
            .find(|h| (h.mm() - mm).abs() < 1e-9)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub volume_cm3: f64,
    pub material: Material,
    pub quantity: u32,
    pub infill_percent: u8,
    pub layer_height: LayerHeight,
    pub support_material: bool,
    pub post_processing: bool,
    pub rush_delivery: bool,
}

impl Default for QuoteRequest {
    fn default() -> Self {
        Self {
            volume_cm3: 0.0,
            material: Material::Pla,
            quantity: 1,
            infill_percent: 20,
            layer_height: LayerHeight::Standard,
            support_material: false,
            post_processing: false,
            rush_delivery: false,
        }
    }
}

impl QuoteRequest {
    /// Default job settings for an analysed model.
    pub fn for_model(info: &ModelInfo, material: Material) -> Self {
        Self {
            volume_cm3: info.volume,
            material,
            ..Self::default()
        }
    }

    fn validate(&self) -> Result<(), QuoteError> {
        if !self.volume_cm3.is_finite() || self.volume_cm3 < 0.0 {
            return Err(QuoteError::InvalidVolume(self.volume_cm3));
        }
        if self.quantity == 0 {
            return Err(QuoteError::ZeroQuantity);
        }
        if self.infill_percent > 100 {
            return Err(QuoteError::InvalidInfill(self.infill_percent));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub currency: String,
    pub material_cost: f64,
    pub labor_cost: f64,
    /// Support, post-processing and rush surcharges.
    pub additional_costs: f64,
    pub total_cost: f64,
    /// Machine time used for labour and delivery, in hours.
    pub machine_hours: f64,
    pub print_minutes: u64,
    /// `"{h}h {m}m"`
    pub print_time: String,
    pub delivery_days: u32,
    /// `"3 days"`, `"1 day (Rush)"`
    pub estimated_time: String,
}

fn format_print_time(minutes: u64) -> String {
    format!("{}h {}m", minutes / 60, minutes % 60)
}

fn format_delivery(days: u32, rush: bool) -> String {
    let plural = if days > 1 { "s" } else { "" };
    if rush {
        format!("{days} day{plural} (Rush)")
    } else {
        format!("{days} day{plural}")
    }
}

#[instrument(skip(config))]
pub fn estimate(request: &QuoteRequest, config: &QuoteConfig) -> Result<Quote, QuoteError> {
    request.validate()?;

    let volume = request.volume_cm3;
    let quantity = f64::from(request.quantity);

    let infill = 0.3 + f64::from(request.infill_percent) / 100.0 * 0.7;
    let material_cost = volume * config.rates.rate(request.material) * infill * quantity;

    let hours = (volume * config.hours_per_cm3 + volume.sqrt() * config.hours_per_sqrt_cm3)
        * request.layer_height.complexity()
        * quantity;
    let machine_hours = hours.max(config.min_hours);
    let labor_cost = machine_hours * config.labor_per_hour;

    let layers = (config.assumed_height_mm / request.layer_height.mm()).ceil();
    let minutes =
        layers * (config.minutes_per_layer + volume * config.minutes_per_layer_per_cm3) * quantity;
    let print_minutes = minutes.round() as u64;

    let mut additional_costs = 0.0;
    if request.support_material {
        additional_costs += volume * config.support_per_cm3 * quantity;
    }
    if request.post_processing {
        additional_costs +=
            (volume * config.post_processing_per_cm3).max(config.post_processing_min) * quantity;
    }
    if request.rush_delivery {
        additional_costs += (material_cost + labor_cost) * config.rush_surcharge;
    }
    let total_cost = material_cost + labor_cost + additional_costs;
    if !total_cost.is_finite() {
        return Err(QuoteError::InvalidVolume(volume));
    }

    let base_days = (machine_hours / config.hours_per_day).ceil() as u32;
    let delivery_days = if request.rush_delivery {
        base_days.div_ceil(2).max(1)
    } else {
        base_days.saturating_add(1)
    };

    debug!(machine_hours, print_minutes, delivery_days, "estimate computed");
    Ok(Quote {
        currency: config.rates.currency.clone(),
        material_cost: round_money(material_cost),
        labor_cost: round_money(labor_cost),
        additional_costs: round_money(additional_costs),
        total_cost: round_money(total_cost),
        machine_hours,
        print_minutes,
        print_time: format_print_time(print_minutes),
        delivery_days,
        estimated_time: format_delivery(delivery_days, request.rush_delivery),
    })
}

/// Material-only price for the viewer's quote button.
pub fn quick_quote(info: &ModelInfo, material: Material, rates: &RateTable) -> f64 {
    round_money(info.volume * rates.rate(material))
}
