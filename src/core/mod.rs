// Core generator exports
pub mod catalog;
pub mod charts;
pub mod intake;
pub mod playlist;

pub use catalog::{sample_songs, CATALOG_SIZE};
pub use charts::{ChartGenerator, MONTHS, COHORTS, QUARTERS, ANOMALY_CELLS};
pub use intake::{FileFormat, FileIntake, IntakeError, ParsedTable};
pub use playlist::{PlaylistGenerator, PlaylistError};
