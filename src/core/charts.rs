use rand::Rng;

use crate::models::{ChartData, ChartPoint, HeatmapRow};

pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

pub const COHORTS: [&str; 4] = ["Cohort A", "Cohort B", "Cohort C", "Cohort D"];

pub const QUARTERS: [&str; 5] = ["Q1", "Q2", "Q3", "Q4", "Q5"];

/// (cohort, quarter) cells forced into the anomaly range
pub const ANOMALY_CELLS: [(&str, &str); 2] = [("Cohort B", "Q3"), ("Cohort D", "Q5")];

const NORMAL_RANGE: (u32, u32) = (20, 80);
const ANOMALY_RANGE: (u32, u32) = (90, 100);

/// Generates the synthetic datasets returned by the visualizer
///
/// Output shape never depends on the upload or the query.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChartGenerator;

impl ChartGenerator {
    pub fn new() -> Self {
        Self
    }

    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> ChartData {
        ChartData {
            line_chart_data: self.line_chart(rng),
            heatmap_data: self.heatmap(rng),
        }
    }

    /// Twelve months of two noisy upward-trending series
    pub fn line_chart<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<ChartPoint> {
        MONTHS
            .iter()
            .enumerate()
            .map(|(i, month)| {
                let step = i as f64;
                let revenue = 1000.0 + 150.0 * step + rng.gen_range(-100.0..=100.0);
                let users = 500.0 + 80.0 * step + rng.gen_range(-50.0..=50.0);
                ChartPoint {
                    month: month.to_string(),
                    revenue: round2(revenue),
                    users: round2(users),
                }
            })
            .collect()
    }

    /// Cohort by quarter grid with two elevated cells
    pub fn heatmap<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<HeatmapRow> {
        COHORTS
            .iter()
            .map(|cohort| {
                let mut cell = |quarter: &str| {
                    let (lo, hi) = if is_anomaly(cohort, quarter) {
                        ANOMALY_RANGE
                    } else {
                        NORMAL_RANGE
                    };
                    rng.gen_range(lo..=hi)
                };
                HeatmapRow {
                    cohort: cohort.to_string(),
                    q1: cell(QUARTERS[0]),
                    q2: cell(QUARTERS[1]),
                    q3: cell(QUARTERS[2]),
                    q4: cell(QUARTERS[3]),
                    q5: cell(QUARTERS[4]),
                }
            })
            .collect()
    }
}

pub fn is_anomaly(cohort: &str, quarter: &str) -> bool {
    ANOMALY_CELLS.iter().any(|(c, q)| *c == cohort && *q == quarter)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
