//! HackMix - playlist and data visualization services
//!
//! Two small, stateless HTTP services share this library: one draws
//! playlists from a fixed song catalog, the other validates spreadsheet
//! uploads and answers with synthetic chart data.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;
pub mod server;

// Re-export commonly used types
pub use core::{ChartGenerator, FileIntake, PlaylistGenerator};
pub use error::ApiError;
pub use models::{Song, ChartData, VibeRequest, PlaylistResponse, AnalyzeResponse};
pub use server::ServiceKind;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let generator = PlaylistGenerator::default();
        assert_eq!(generator.catalog().len(), core::CATALOG_SIZE);
        assert_eq!(generator.size_range(), (8, 12));
    }
}
