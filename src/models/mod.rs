// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Song, ChartPoint, HeatmapRow, ChartData};
pub use requests::VibeRequest;
pub use responses::{PlaylistResponse, AnalyzeResponse, HealthResponse, MessageResponse, ErrorResponse};
