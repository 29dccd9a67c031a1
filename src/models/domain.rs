use serde::{Deserialize, Serialize};

/// A catalog track
///
/// `album` and `duration` are always present in the JSON output, as `null`
/// when unknown.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Song {
    pub title: String,
    pub artist: String,
    #[serde(default)]
    pub album: Option<String>,
    /// Free text, "M:SS"
    #[serde(default)]
    pub duration: Option<String>,
}

impl Song {
    pub fn new(title: &str, artist: &str, album: Option<&str>, duration: Option<&str>) -> Self {
        Self {
            title: title.to_string(),
            artist: artist.to_string(),
            album: album.map(str::to_string),
            duration: duration.map(str::to_string),
        }
    }
}

/// One month of the synthetic line chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub month: String,
    pub revenue: f64,
    pub users: f64,
}

/// One cohort row of the synthetic heatmap, keyed by quarter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeatmapRow {
    pub cohort: String,
    #[serde(rename = "Q1")]
    pub q1: u32,
    #[serde(rename = "Q2")]
    pub q2: u32,
    #[serde(rename = "Q3")]
    pub q3: u32,
    #[serde(rename = "Q4")]
    pub q4: u32,
    #[serde(rename = "Q5")]
    pub q5: u32,
}

impl HeatmapRow {
    /// Value for a quarter label ("Q1".."Q5")
    pub fn get(&self, quarter: &str) -> Option<u32> {
        match quarter {
            "Q1" => Some(self.q1),
            "Q2" => Some(self.q2),
            "Q3" => Some(self.q3),
            "Q4" => Some(self.q4),
            "Q5" => Some(self.q5),
            _ => None,
        }
    }
}

/// Both chart datasets returned by the visualizer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    #[serde(rename = "lineChartData")]
    pub line_chart_data: Vec<ChartPoint>,
    #[serde(rename = "heatmapData")]
    pub heatmap_data: Vec<HeatmapRow>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_song_serializes_missing_fields_as_null() {
        let song = Song::new("Stay", "The Kid LAROI & Justin Bieber", None, Some("2:21"));
        let json = serde_json::to_value(&song).unwrap();
        assert_eq!(json["album"], serde_json::Value::Null);
        assert_eq!(json["duration"], "2:21");
    }

    #[test]
    fn test_heatmap_row_quarter_keys() {
        let row = HeatmapRow {
            cohort: "Cohort A".to_string(),
            q1: 1,
            q2: 2,
            q3: 3,
            q4: 4,
            q5: 5,
        };
        let json = serde_json::to_value(&row).unwrap();
        let obj = json.as_object().unwrap();
        for key in ["cohort", "Q1", "Q2", "Q3", "Q4", "Q5"] {
            assert!(obj.contains_key(key), "missing key {}", key);
        }
        assert_eq!(row.get("Q3"), Some(3));
        assert_eq!(row.get("Q6"), None);
    }
}
