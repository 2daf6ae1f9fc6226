//! Chart domain models.
//!
//! The shape matches what the charting widget consumes:
//! `{ labels: [..], datasets: [{ label, data: [..] }] }`.

use serde::{Deserialize, Serialize};

/// Dataset of actual portfolio values in the net worth chart.
pub const TOTAL_AMOUNT_LABEL: &str = "Total Amount";
/// Projected overlay in the net worth chart.
pub const PREDICTED_AMOUNT_LABEL: &str = "Predicted Amount";
/// Dataset of the net percentage chart.
pub const NET_PERCENTAGE_LABEL: &str = "Net percentage";
/// Dataset of the predicted net worth chart.
pub const NET_VALUE_LABEL: &str = "Net value";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDataset {
    pub label: String,
    pub data: Vec<f64>,
}

impl ChartDataset {
    pub fn new(label: &str, data: Vec<f64>) -> Self {
        Self {
            label: label.to_string(),
            data,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartData {
    /// X-axis labels, one per point
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
}

impl ChartData {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty() && self.datasets.is_empty()
    }

    pub fn dataset(&self, label: &str) -> Option<&ChartDataset> {
        self.datasets.iter().find(|d| d.label == label)
    }
}

/// Tooltip content for a single chart point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TooltipEntry {
    /// A point of the actual series
    #[serde(rename_all = "camelCase")]
    Actual {
        total_value: f64,
        /// Profit/loss in crores, two decimals
        net_pl: f64,
        net_pl_percent: f64,
    },
    /// A point of the projected series, in crores
    Projected { value: f64 },
}

impl TooltipEntry {
    /// Display lines shown by the tooltip.
    pub fn lines(&self) -> Vec<String> {
        match self {
            TooltipEntry::Actual {
                total_value,
                net_pl,
                net_pl_percent,
            } => vec![
                format!("Total Amount: {} Crores", total_value),
                format!("Net PL Amount: {} Crores", net_pl),
                format!("Net PL Percentage: {}", net_pl_percent),
            ],
            TooltipEntry::Projected { value } => vec![format!("Total Amount: {} Crores", value)],
        }
    }
}
