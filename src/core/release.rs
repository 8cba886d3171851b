//! The parsed representation of a release name (`ReleaseParser::data`).
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::types::{AnnounceSection, Episode, ReleaseType};

/// Structured data extracted from a release name.
///
/// Field order is the JSON key order. Absent values serialize as `null`;
/// list-like fields (`flags`, `audio`, `language`) are `null` rather than empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Release {
    pub release: String,
    pub title: Option<String>,
    pub title_extra: Option<String>,
    pub group: Option<String>,
    pub year: Option<u32>,
    /// `dd.mm.yyyy`
    pub date: Option<String>,
    pub season: Option<u32>,
    pub episode: Option<Episode>,
    pub disc: Option<u32>,
    pub flags: Option<Vec<String>>,
    pub source: Option<String>,
    pub format: Option<String>,
    pub resolution: Option<String>,
    pub audio: Option<Vec<String>>,
    pub device: Option<String>,
    pub os: Option<String>,
    pub version: Option<String>,
    /// ISO code to language name, in detection order.
    pub language: Option<IndexMap<String, String>>,
    pub country: Option<String>,
    #[serde(rename = "type")]
    pub kind: ReleaseType,
}

impl Release {
    /// An empty record for `release`; every attribute unset.
    pub fn bare(release: impl Into<String>, kind: ReleaseType) -> Self {
        Self {
            release: release.into(),
            title: None,
            title_extra: None,
            group: None,
            year: None,
            date: None,
            season: None,
            episode: None,
            disc: None,
            flags: None,
            source: None,
            format: None,
            resolution: None,
            audio: None,
            device: None,
            os: None,
            version: None,
            language: None,
            country: None,
            kind,
        }
    }

    pub fn has_flag(&self, flag: &str) -> bool {
        self.flags
            .as_ref()
            .is_some_and(|flags| flags.iter().any(|f| f == flag))
    }

    /// Section label a pre-announce channel would publish for this release.
    pub fn announce_section(&self) -> AnnounceSection {
        let format = self.format.as_deref();
        match self.kind {
            ReleaseType::ABook => AnnounceSection::Audiobooks,
            ReleaseType::Anime => AnnounceSection::Anime,
            ReleaseType::App => match self.os.as_deref() {
                Some("Linux") => AnnounceSection::Linux,
                Some("macOS") => AnnounceSection::MacOs,
                _ => AnnounceSection::Apps,
            },
            ReleaseType::Bookware => AnnounceSection::Bookware,
            ReleaseType::EBook => AnnounceSection::Ebooks,
            ReleaseType::Font => AnnounceSection::Fonts,
            ReleaseType::Game => match self.device.as_deref() {
                Some("Nintendo Switch") => AnnounceSection::Nsw,
                Some("Playstation 5") => AnnounceSection::Ps5,
                Some("Playstation 4") => AnnounceSection::Ps4,
                Some("Microsoft Xbox One") => AnnounceSection::XboxOne,
                Some("Microsoft Xbox360") => AnnounceSection::Xbox360,
                _ => AnnounceSection::Games,
            },
            ReleaseType::Music => match format {
                Some("FLAC") => AnnounceSection::Flac,
                _ => AnnounceSection::Mp3,
            },
            ReleaseType::MusicVideo => AnnounceSection::MusicVideo,
            ReleaseType::TV => match format {
                Some("x264" | "h264") => AnnounceSection::TvX264,
                Some("x265" | "h265") => AnnounceSection::TvX265,
                _ => AnnounceSection::Tv,
            },
            ReleaseType::Sports => AnnounceSection::Sports,
            ReleaseType::XXX => AnnounceSection::Xxx,
            ReleaseType::Movie => {
                if format == Some("DVDR") {
                    AnnounceSection::Dvdr
                } else if self.has_flag("Complete") {
                    AnnounceSection::Bluray
                } else {
                    match format {
                        Some("x264" | "h264") => AnnounceSection::X264,
                        Some("x265" | "h265") => AnnounceSection::X265,
                        _ => AnnounceSection::Pre,
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_release_serializes_all_keys_in_order() {
        let json = serde_json::to_string(&Release::bare("X-GRP", ReleaseType::Movie)).unwrap();
        let keys = [
            "release", "title", "title_extra", "group", "year", "date", "season", "episode",
            "disc", "flags", "source", "format", "resolution", "audio", "device", "os",
            "version", "language", "country", "type",
        ];
        let mut last = 0;
        for key in keys {
            let pos = json.find(&format!("\"{key}\":")).unwrap();
            assert!(pos >= last, "{key} out of order in {json}");
            last = pos;
        }
        assert!(json.ends_with("\"type\":\"Movie\"}"));
    }

    #[test]
    fn test_announce_section_for_apps_and_games() {
        let mut app = Release::bare("Tool.v1.Linux-GRP", ReleaseType::App);
        app.os = Some("Linux".into());
        assert_eq!(app.announce_section(), AnnounceSection::Linux);
        app.os = None;
        assert_eq!(app.announce_section(), AnnounceSection::Apps);

        let mut game = Release::bare("Game.NSW-GRP", ReleaseType::Game);
        game.device = Some("Nintendo Switch".into());
        assert_eq!(game.announce_section(), AnnounceSection::Nsw);
        game.device = Some("Nintendo Wii".into());
        assert_eq!(game.announce_section(), AnnounceSection::Games);
    }

    #[test]
    fn test_announce_section_for_movies() {
        let mut movie = Release::bare("Movie.2019.COMPLETE.BLURAY-GRP", ReleaseType::Movie);
        movie.flags = Some(vec!["Complete".into()]);
        assert_eq!(movie.announce_section(), AnnounceSection::Bluray);

        movie.format = Some("DVDR".into());
        assert_eq!(movie.announce_section(), AnnounceSection::Dvdr);

        movie.format = Some("h265".into());
        movie.flags = None;
        assert_eq!(movie.announce_section(), AnnounceSection::X265);

        movie.format = Some("XviD".into());
        assert_eq!(movie.announce_section(), AnnounceSection::Pre);
    }

    #[test]
    fn test_announce_section_for_tv_and_music() {
        let mut tv = Release::bare("Show.S01E01-GRP", ReleaseType::TV);
        tv.format = Some("x264".into());
        assert_eq!(tv.announce_section(), AnnounceSection::TvX264);
        tv.format = None;
        assert_eq!(tv.announce_section(), AnnounceSection::Tv);

        let mut music = Release::bare("Artist-Album-WEB-2023-GRP", ReleaseType::Music);
        music.format = Some("FLAC".into());
        assert_eq!(music.announce_section(), AnnounceSection::Flac);
        music.format = Some("MP3".into());
        assert_eq!(music.announce_section(), AnnounceSection::Mp3);
    }
}
