use log::debug;

use super::chart_model::{
    ChartData, ChartDataset, TooltipEntry, NET_PERCENTAGE_LABEL, NET_VALUE_LABEL,
    PREDICTED_AMOUNT_LABEL, TOTAL_AMOUNT_LABEL,
};
use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::errors::Result;
use crate::investments::ActualPoint;
use crate::projection::InvestmentPoint;
use crate::utils::number_utils::round_dp;
use crate::utils::time_utils::format_chart_label;

/// Builds the net worth chart from the actual series, with an optional
/// projected overlay.
///
/// Labels come from the actual series. The projected dataset is aligned by
/// position, not by date: its i-th value is the i-th projected point in
/// crores, truncated to the number of labels. Series with different start
/// dates or step sizes are therefore not re-synchronized.
///
/// An empty actual series gives an empty chart.
pub fn build_net_worth_chart(
    actual: &[ActualPoint],
    projected: Option<&[InvestmentPoint]>,
) -> Result<ChartData> {
    if actual.is_empty() {
        return Ok(ChartData::empty());
    }

    let labels = actual_labels(actual)?;

    let mut datasets = vec![ChartDataset::new(
        TOTAL_AMOUNT_LABEL,
        actual.iter().map(|p| p.total_value).collect(),
    )];

    if let Some(projected) = projected {
        datasets.push(ChartDataset::new(
            PREDICTED_AMOUNT_LABEL,
            projected
                .iter()
                .take(labels.len())
                .map(InvestmentPoint::value_in_crores)
                .collect(),
        ));
    }

    debug!(
        "Built net worth chart with {} labels and {} datasets",
        labels.len(),
        datasets.len()
    );

    Ok(ChartData { labels, datasets })
}

/// Resolves the tooltip for the point at `index` of the dataset labelled
/// `dataset_label`.
///
/// "Total Amount" reads the actual series; any other dataset reads the
/// projected series at the same position. `None` when the index is out of
/// range for the series it resolves to.
///
/// Projected tooltip values are in crores, not base currency units, so they
/// read on the same scale as the "Total Amount" dataset.
pub fn resolve_tooltip(
    actual: &[ActualPoint],
    projected: &[InvestmentPoint],
    dataset_label: &str,
    index: usize,
) -> Result<Option<TooltipEntry>> {
    if dataset_label == TOTAL_AMOUNT_LABEL {
        return actual
            .get(index)
            .map(|p| {
                Ok(TooltipEntry::Actual {
                    total_value: p.total_value,
                    net_pl: round_dp(p.total_returns, DISPLAY_DECIMAL_PRECISION, "totalReturns")?,
                    net_pl_percent: p.total_return_percentage,
                })
            })
            .transpose();
    }

    Ok(projected.get(index).map(|p| TooltipEntry::Projected {
        value: p.value_in_crores(),
    }))
}

/// Net percentage chart: the backend's precomputed return percentage over time.
pub fn build_percentage_chart(actual: &[ActualPoint]) -> Result<ChartData> {
    if actual.is_empty() {
        return Ok(ChartData::empty());
    }

    Ok(ChartData {
        labels: actual_labels(actual)?,
        datasets: vec![ChartDataset::new(
            NET_PERCENTAGE_LABEL,
            actual.iter().map(|p| p.total_return_percentage).collect(),
        )],
    })
}

/// Predicted net worth chart: the projected series alone, in crores.
pub fn build_prediction_chart(projected: &[InvestmentPoint]) -> ChartData {
    if projected.is_empty() {
        return ChartData::empty();
    }

    ChartData {
        labels: projected.iter().map(|p| format_chart_label(p.date)).collect(),
        datasets: vec![ChartDataset::new(
            NET_VALUE_LABEL,
            projected.iter().map(InvestmentPoint::value_in_crores).collect(),
        )],
    }
}

fn actual_labels(actual: &[ActualPoint]) -> Result<Vec<String>> {
    actual
        .iter()
        .map(|p| p.calendar_date().map(format_chart_label))
        .collect()
}
