//! Release type classification: section rules first, content rules second.
use std::sync::OnceLock;

use regex::Regex;
use tracing::trace;

use super::Detected;
use super::patterns::{EBOOK_FORMATS, MUSIC_SOURCES};
use crate::types::ReleaseType;

/// Ordered section rules. Earlier rules win, so `ABOOK` is checked before
/// the generic audio sections and `MDVDR` before `DVDR`.
const SECTION_RULES: &[(ReleaseType, &str)] = &[
    (ReleaseType::ABook, r"A(?:UDIO)?BOOK"),
    (ReleaseType::EBook, r"E-?BOOK"),
    (ReleaseType::Anime, r"ANIME"),
    (ReleaseType::Bookware, r"BOOKWARE"),
    (ReleaseType::Font, r"FONT"),
    (ReleaseType::MusicVideo, r"MVID|MDVDR|MBLURAY|MUSIC-?VIDEO"),
    (ReleaseType::XXX, r"XXX|IMGSET"),
    (ReleaseType::Sports, r"SPORT"),
    (ReleaseType::TV, r"TV|SERIES|EPISODE|DOKU|DOCU"),
    (ReleaseType::Music, r"MP3|FLAC|MUSIC|AUDIO|OGG|AAC|WAV|VINYL"),
    (ReleaseType::Game, r"GAME|NSW|PS\d|PSV|PSP|XBOX|X360|WII|3DS|NDS|DOX|CONSOLE"),
    (ReleaseType::App, r"APP|0DAY|PDA|LINUX|MAC|IOS|ANDROID|WIN"),
    (ReleaseType::Movie, r"X26[45]|H26[45]|XVID|DIVX|DVDR|BLURAY|BD|MOVIE|FILM|UHD|HD|SD|WEB|VCD"),
];

fn section_rules() -> &'static [(ReleaseType, Regex)] {
    static RULES: OnceLock<Vec<(ReleaseType, Regex)>> = OnceLock::new();
    RULES.get_or_init(|| {
        SECTION_RULES
            .iter()
            .map(|(kind, pattern)| {
                let re = Regex::new(&format!("(?i){pattern}"))
                    .unwrap_or_else(|e| panic!("invalid section pattern {pattern:?}: {e}"));
                (*kind, re)
            })
            .collect()
    })
}

/// Type implied by the section label alone, if any.
pub fn type_from_section(section: &str) -> Option<ReleaseType> {
    let section = section.trim();
    if section.is_empty() {
        return None;
    }
    section_rules()
        .iter()
        .find(|(_, re)| re.is_match(section))
        .map(|(kind, _)| *kind)
}

/// Type implied by the release name contents.
pub fn type_from_content(detected: &Detected) -> ReleaseType {
    let video = detected.has_video();
    let episodic = detected.is_episodic();

    if detected.has_flag("XXX") {
        ReleaseType::XXX
    } else if detected.has_flag("ABook") || detected.media_format_is("M4B") {
        ReleaseType::ABook
    } else if detected.has_flag("eBook")
        || detected
            .media_format
            .is_some_and(|f| EBOOK_FORMATS.contains(&f.value))
    {
        ReleaseType::EBook
    } else if detected.device.is_some() {
        ReleaseType::Game
    } else if detected.os.is_some() && !video {
        ReleaseType::App
    } else if detected.has_flag("Music Video") {
        ReleaseType::MusicVideo
    } else if episodic && video {
        ReleaseType::TV
    } else if !video
        && (detected.media_format.is_some()
            || detected
                .source
                .is_some_and(|s| MUSIC_SOURCES.contains(&s.value)))
    {
        ReleaseType::Music
    } else if video {
        if episodic {
            ReleaseType::TV
        } else {
            ReleaseType::Movie
        }
    } else if episodic {
        ReleaseType::TV
    } else if detected.version.is_some() {
        ReleaseType::App
    } else {
        ReleaseType::Movie
    }
}

/// Final type: the section decides when it is recognised, except that a
/// movie section carrying episode or date markers is reclassified as TV.
pub fn classify(section: &str, detected: &Detected) -> ReleaseType {
    let kind = match type_from_section(section) {
        Some(ReleaseType::Movie) if detected.is_episodic() => ReleaseType::TV,
        Some(kind) => kind,
        None => type_from_content(detected),
    };
    trace!(section, kind = %kind, "classified release");
    kind
}
