//! Shared types and enums used across the parser.
//! Includes `ReleaseType`, the announce-section labels (`AnnounceSection`),
//! and the `Episode` number/range value.

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub enum ReleaseType {
    ABook,
    Anime,
    App,
    Bookware,
    #[serde(rename = "eBook")]
    EBook,
    Font,
    Game,
    Movie,
    Music,
    MusicVideo,
    Sports,
    TV,
    XXX,
}

impl ReleaseType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReleaseType::ABook => "ABook",
            ReleaseType::Anime => "Anime",
            ReleaseType::App => "App",
            ReleaseType::Bookware => "Bookware",
            ReleaseType::EBook => "eBook",
            ReleaseType::Font => "Font",
            ReleaseType::Game => "Game",
            ReleaseType::Movie => "Movie",
            ReleaseType::Music => "Music",
            ReleaseType::MusicVideo => "MusicVideo",
            ReleaseType::Sports => "Sports",
            ReleaseType::TV => "TV",
            ReleaseType::XXX => "XXX",
        }
    }

    /// Types whose release names use the `Artist-Title-...` dash layout.
    pub fn uses_dash_layout(&self) -> bool {
        matches!(
            self,
            ReleaseType::Music | ReleaseType::ABook | ReleaseType::MusicVideo
        )
    }
}

impl std::fmt::Display for ReleaseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Section label a pre-announce channel publishes for a parsed release.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum AnnounceSection {
    #[serde(rename = "AUDiOBOOKS")]
    Audiobooks,
    #[serde(rename = "ANiME")]
    Anime,
    #[serde(rename = "APPS")]
    Apps,
    #[serde(rename = "LiNUX")]
    Linux,
    #[serde(rename = "MACOS")]
    MacOs,
    #[serde(rename = "BOOKWARE")]
    Bookware,
    #[serde(rename = "EBOOKS")]
    Ebooks,
    #[serde(rename = "FONTS")]
    Fonts,
    #[serde(rename = "NSW")]
    Nsw,
    #[serde(rename = "PS5")]
    Ps5,
    #[serde(rename = "PS4")]
    Ps4,
    #[serde(rename = "XBOXONE")]
    XboxOne,
    #[serde(rename = "XBOX360")]
    Xbox360,
    #[serde(rename = "GAMES")]
    Games,
    #[serde(rename = "FLAC")]
    Flac,
    #[serde(rename = "MP3")]
    Mp3,
    #[serde(rename = "MViD")]
    MusicVideo,
    #[serde(rename = "TV-X264")]
    TvX264,
    #[serde(rename = "TV-X265")]
    TvX265,
    #[serde(rename = "TV")]
    Tv,
    #[serde(rename = "SPORTS")]
    Sports,
    #[serde(rename = "XXX")]
    Xxx,
    #[serde(rename = "DVDR")]
    Dvdr,
    #[serde(rename = "BLURAY")]
    Bluray,
    #[serde(rename = "X264")]
    X264,
    #[serde(rename = "X265")]
    X265,
    #[serde(rename = "PRE")]
    Pre,
}

impl AnnounceSection {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnnounceSection::Audiobooks => "AUDiOBOOKS",
            AnnounceSection::Anime => "ANiME",
            AnnounceSection::Apps => "APPS",
            AnnounceSection::Linux => "LiNUX",
            AnnounceSection::MacOs => "MACOS",
            AnnounceSection::Bookware => "BOOKWARE",
            AnnounceSection::Ebooks => "EBOOKS",
            AnnounceSection::Fonts => "FONTS",
            AnnounceSection::Nsw => "NSW",
            AnnounceSection::Ps5 => "PS5",
            AnnounceSection::Ps4 => "PS4",
            AnnounceSection::XboxOne => "XBOXONE",
            AnnounceSection::Xbox360 => "XBOX360",
            AnnounceSection::Games => "GAMES",
            AnnounceSection::Flac => "FLAC",
            AnnounceSection::Mp3 => "MP3",
            AnnounceSection::MusicVideo => "MViD",
            AnnounceSection::TvX264 => "TV-X264",
            AnnounceSection::TvX265 => "TV-X265",
            AnnounceSection::Tv => "TV",
            AnnounceSection::Sports => "SPORTS",
            AnnounceSection::Xxx => "XXX",
            AnnounceSection::Dvdr => "DVDR",
            AnnounceSection::Bluray => "BLURAY",
            AnnounceSection::X264 => "X264",
            AnnounceSection::X265 => "X265",
            AnnounceSection::Pre => "PRE",
        }
    }
}

impl std::fmt::Display for AnnounceSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single episode number or an inclusive range (`S01E01E02`, `S01E01-E03`).
/// Serialized as a bare integer or a two-element array.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Episode {
    Single(u32),
    Range(u32, u32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_type_serializes_with_display_names() {
        assert_eq!(serde_json::to_string(&ReleaseType::EBook).unwrap(), "\"eBook\"");
        assert_eq!(serde_json::to_string(&ReleaseType::TV).unwrap(), "\"TV\"");
        assert_eq!(ReleaseType::MusicVideo.to_string(), "MusicVideo");
    }

    #[test]
    fn test_announce_section_serde_matches_label() {
        for section in [
            AnnounceSection::Audiobooks,
            AnnounceSection::Linux,
            AnnounceSection::MusicVideo,
            AnnounceSection::TvX265,
            AnnounceSection::Pre,
        ] {
            let json = serde_json::to_string(&section).unwrap();
            assert_eq!(json, format!("\"{}\"", section.as_str()));
        }
    }

    #[test]
    fn test_episode_json_shapes() {
        assert_eq!(serde_json::to_string(&Episode::Single(4)).unwrap(), "4");
        assert_eq!(serde_json::to_string(&Episode::Range(1, 3)).unwrap(), "[1,3]");
    }
}
