use crate::models::Song;

pub const CATALOG_SIZE: usize = 15;

/// (title, artist, album, duration)
const SAMPLE_SONGS: [(&str, &str, Option<&str>, &str); CATALOG_SIZE] = [
    ("Blinding Lights", "The Weeknd", Some("After Hours"), "3:20"),
    ("Watermelon Sugar", "Harry Styles", Some("Fine Line"), "2:54"),
    ("Levitating", "Dua Lipa", Some("Future Nostalgia"), "3:23"),
    ("Good 4 U", "Olivia Rodrigo", Some("Sour"), "2:58"),
    ("Stay", "The Kid LAROI & Justin Bieber", None, "2:21"),
    ("Peaches", "Justin Bieber ft. Daniel Caesar & Giveon", Some("Justice"), "3:18"),
    ("Industry Baby", "Lil Nas X & Jack Harlow", None, "3:32"),
    ("Heat Waves", "Glass Animals", Some("Dreamland"), "3:58"),
    ("As It Was", "Harry Styles", Some("Harry's House"), "2:47"),
    ("Anti-Hero", "Taylor Swift", Some("Midnights"), "3:20"),
    ("Flowers", "Miley Cyrus", Some("Endless Summer Vacation"), "3:20"),
    ("Unholy", "Sam Smith ft. Kim Petras", None, "2:36"),
    ("Calm Down", "Rema & Selena Gomez", None, "3:59"),
    ("Shivers", "Ed Sheeran", Some("="), "3:27"),
    ("Ghost", "Justin Bieber", Some("Justice"), "2:33"),
];

/// The fixed song catalog playlists are drawn from
pub fn sample_songs() -> Vec<Song> {
    SAMPLE_SONGS
        .iter()
        .map(|(title, artist, album, duration)| Song::new(title, artist, *album, Some(*duration)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_has_unique_titles() {
        let songs = sample_songs();
        assert_eq!(songs.len(), CATALOG_SIZE);

        let titles: HashSet<_> = songs.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles.len(), CATALOG_SIZE);
    }

    #[test]
    fn test_every_song_has_duration() {
        assert!(sample_songs().iter().all(|s| s.duration.is_some()));
    }
}
