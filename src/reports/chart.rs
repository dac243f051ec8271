//! Chart data preparation
//!
//! Turns numeric series that share one label axis into render parameters:
//! a common scale maximum, legend ticks and per-bar height fractions. Knows
//! nothing about money, colours or layout.

/// Largest absolute value across all series, never below 1
///
/// Non-finite samples are ignored, so the result is always a usable divisor.
pub fn scale_max(series: &[&[f64]]) -> f64 {
    series
        .iter()
        .flat_map(|s| s.iter())
        .filter(|v| v.is_finite())
        .map(|v| v.abs())
        .fold(1.0, f64::max)
}

/// `step_count + 1` legend values from `max` down to zero, each rounded to
/// the nearest whole unit
///
/// The top tick can differ from a non-integral `max` because of rounding.
pub fn ticks(max: f64, step_count: usize) -> Vec<f64> {
    if step_count == 0 {
        return vec![max.round()];
    }
    let steps = step_count as f64;
    (0..=step_count)
        .map(|i| (max - max * (i as f64 / steps)).round())
        .collect()
}

/// Height of a bar relative to the scale maximum
pub fn bar_height_fraction(value: f64, max: f64) -> f64 {
    value / max
}

/// One named series with its bar fractions
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub name: String,
    pub values: Vec<f64>,
    pub fractions: Vec<f64>,
}

/// Everything a renderer needs to draw a grouped bar chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub series: Vec<ChartSeries>,
    pub max: f64,
    pub ticks: Vec<f64>,
}

impl ChartData {
    /// Scale a set of `(name, values)` series aligned to `labels`
    pub fn prepare(
        labels: Vec<String>,
        series: Vec<(String, Vec<f64>)>,
        step_count: usize,
    ) -> Self {
        let slices: Vec<&[f64]> = series.iter().map(|(_, values)| values.as_slice()).collect();
        let max = scale_max(&slices);

        let series = series
            .into_iter()
            .map(|(name, values)| {
                let fractions = values.iter().map(|v| bar_height_fraction(*v, max)).collect();
                ChartSeries {
                    name,
                    values,
                    fractions,
                }
            })
            .collect();

        Self {
            labels,
            series,
            max,
            ticks: ticks(max, step_count),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_max_floor() {
        assert_eq!(scale_max(&[]), 1.0);
        assert_eq!(scale_max(&[&[]]), 1.0);
        assert_eq!(scale_max(&[&[0.0, 0.0], &[0.0]]), 1.0);
        assert_eq!(scale_max(&[&[0.25, -0.5]]), 1.0);
    }

    #[test]
    fn test_scale_max_uses_absolute_values() {
        assert_eq!(scale_max(&[&[100.0, 250.0], &[-400.0]]), 400.0);
        assert_eq!(scale_max(&[&[f64::NAN, 3.0, f64::INFINITY]]), 3.0);
    }

    #[test]
    fn test_ticks() {
        assert_eq!(ticks(1000.0, 4), vec![1000.0, 750.0, 500.0, 250.0, 0.0]);
        assert_eq!(ticks(1.0, 4), vec![1.0, 1.0, 1.0, 0.0, 0.0]);
        assert_eq!(ticks(7.0, 0), vec![7.0]);
    }

    #[test]
    fn test_ticks_round_non_integral_max() {
        let t = ticks(10.6, 2);
        assert_eq!(t, vec![11.0, 5.0, 0.0]);
        assert_eq!(t.len(), 3);
    }

    #[test]
    fn test_bar_height_fraction() {
        assert_eq!(bar_height_fraction(250.0, 1000.0), 0.25);
        assert_eq!(bar_height_fraction(-500.0, 1000.0), -0.5);
    }

    #[test]
    fn test_prepare() {
        let chart = ChartData::prepare(
            vec!["2026-01".into(), "2026-02".into()],
            vec![
                ("Income".into(), vec![1000.0, 800.0]),
                ("Expenses".into(), vec![400.0, 200.0]),
            ],
            4,
        );
        assert_eq!(chart.max, 1000.0);
        assert_eq!(chart.ticks.len(), 5);
        assert_eq!(chart.series[0].fractions, vec![1.0, 0.8]);
        assert_eq!(chart.series[1].fractions, vec![0.4, 0.2]);
        assert!(!chart.is_empty());
    }

    #[test]
    fn test_prepare_empty() {
        let chart = ChartData::prepare(Vec::new(), Vec::new(), 4);
        assert!(chart.is_empty());
        assert_eq!(chart.max, 1.0);
        assert_eq!(chart.ticks, vec![1.0, 1.0, 1.0, 0.0, 0.0]);
    }
}
