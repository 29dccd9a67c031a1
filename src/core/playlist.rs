use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

use crate::core::catalog::sample_songs;
use crate::models::Song;

/// Errors that can occur while building a playlist
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlaylistError {
    #[error("invalid playlist size range {min}..={max}")]
    InvalidSizeRange { min: usize, max: usize },

    #[error("catalog has {available} songs but playlists need at least {required}")]
    CatalogTooSmall { available: usize, required: usize },
}

/// Draws playlists from a fixed catalog
///
/// The vibe is accepted but does not influence selection: every playlist is
/// a uniform shuffle of the catalog truncated to a random size.
#[derive(Debug, Clone)]
pub struct PlaylistGenerator {
    catalog: Vec<Song>,
    min_size: usize,
    max_size: usize,
}

impl PlaylistGenerator {
    pub fn new(catalog: Vec<Song>, min_size: usize, max_size: usize) -> Self {
        Self {
            catalog,
            min_size,
            max_size,
        }
    }

    /// Built-in catalog with playlists of 8 to 12 songs
    pub fn with_default_catalog() -> Self {
        Self::new(sample_songs(), 8, 12)
    }

    pub fn catalog(&self) -> &[Song] {
        &self.catalog
    }

    pub fn size_range(&self) -> (usize, usize) {
        (self.min_size, self.max_size)
    }

    /// Check that the size range can be satisfied by the catalog
    pub fn validate(&self) -> Result<(), PlaylistError> {
        if self.min_size == 0 || self.min_size > self.max_size {
            return Err(PlaylistError::InvalidSizeRange {
                min: self.min_size,
                max: self.max_size,
            });
        }
        if self.catalog.len() < self.min_size {
            return Err(PlaylistError::CatalogTooSmall {
                available: self.catalog.len(),
                required: self.min_size,
            });
        }
        Ok(())
    }

    /// Generate a playlist for a vibe
    ///
    /// Songs are drawn without replacement. The size is uniform over
    /// `min_size..=max_size`, capped by the catalog length.
    pub fn generate<R: Rng + ?Sized>(&self, vibe: &str, rng: &mut R) -> Result<Vec<Song>, PlaylistError> {
        let vibe_lower = vibe.to_lowercase();
        tracing::debug!("Generating playlist for vibe '{}'", vibe_lower);

        self.validate()?;

        let size = rng.gen_range(self.min_size..=self.max_size).min(self.catalog.len());

        let mut available = self.catalog.clone();
        available.shuffle(rng);
        available.truncate(size);

        Ok(available)
    }
}

impl Default for PlaylistGenerator {
    fn default() -> Self {
        Self::with_default_catalog()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_playlist_size_in_range() {
        let generator = PlaylistGenerator::with_default_catalog();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..200 {
            let playlist = generator.generate("chill", &mut rng).unwrap();
            assert!((8..=12).contains(&playlist.len()), "got {}", playlist.len());
        }
    }

    #[test]
    fn test_same_seed_same_playlist() {
        let generator = PlaylistGenerator::with_default_catalog();
        let a = generator.generate("x", &mut StdRng::seed_from_u64(42)).unwrap();
        let b = generator.generate("x", &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_vibe_does_not_affect_selection() {
        let generator = PlaylistGenerator::with_default_catalog();
        let a = generator.generate("Sad Rainy Day", &mut StdRng::seed_from_u64(3)).unwrap();
        let b = generator.generate("HYPE GYM", &mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_inverted_range_rejected() {
        let generator = PlaylistGenerator::new(sample_songs(), 12, 8);
        let err = generator.generate("x", &mut StdRng::seed_from_u64(1)).unwrap_err();
        assert_eq!(err, PlaylistError::InvalidSizeRange { min: 12, max: 8 });
    }

    #[test]
    fn test_small_catalog_rejected() {
        let catalog = sample_songs().into_iter().take(5).collect();
        let generator = PlaylistGenerator::new(catalog, 8, 12);
        let err = generator.generate("x", &mut StdRng::seed_from_u64(1)).unwrap_err();
        assert_eq!(err, PlaylistError::CatalogTooSmall { available: 5, required: 8 });
    }

    #[test]
    fn test_validate() {
        assert!(PlaylistGenerator::with_default_catalog().validate().is_ok());
        assert_eq!(
            PlaylistGenerator::new(sample_songs(), 0, 4).validate(),
            Err(PlaylistError::InvalidSizeRange { min: 0, max: 4 })
        );
        assert_eq!(
            PlaylistGenerator::new(sample_songs(), 16, 20).validate(),
            Err(PlaylistError::CatalogTooSmall { available: 15, required: 16 })
        );
    }

    #[test]
    fn test_size_capped_by_catalog() {
        let catalog = sample_songs().into_iter().take(9).collect();
        let generator = PlaylistGenerator::new(catalog, 8, 12);
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..50 {
            let playlist = generator.generate("x", &mut rng).unwrap();
            assert!(playlist.len() == 8 || playlist.len() == 9);
        }
    }
}
