//! Numbered markers: season/episode, dates, years, discs and versions.
use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;

use super::patterns::{SEPARATORS, bounded};
use crate::types::Episode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EpisodeMarker {
    pub season: Option<u32>,
    pub episode: Option<Episode>,
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateMarker {
    pub date: NaiveDate,
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberMarker {
    pub value: u32,
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionMarker {
    pub value: String,
    pub start: usize,
    pub end: usize,
}

fn compile(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| {
        Regex::new(&bounded(pattern))
            .unwrap_or_else(|e| panic!("invalid marker pattern {pattern:?}: {e}"))
    })
}

fn season_episode_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    compile(&RE, r"S(\d{1,3})[._\-]?E(\d{1,4})(?:-?E(\d{1,4})|-(\d{1,4}))?")
}

fn cross_episode_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    compile(&RE, r"(\d{1,2})x(\d{2,3})")
}

fn season_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    compile(&RE, r"S(\d{1,3})|SEASON[._\-]?(\d{1,3})")
}

fn episode_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    compile(&RE, r"E(\d{2,4})|EP(?:ISODE)?[._\-]?(\d{1,4})")
}

fn ymd_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    compile(&RE, r"(\d{4})[._\-](\d{2})[._\-](\d{2})")
}

fn dmy_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    compile(&RE, r"(\d{2})[._\-](\d{2})[._\-](\d{4})")
}

fn disc_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    compile(&RE, r"DIS[CK][._\-]?(\d{1,2})|CD(\d{1,2})")
}

fn version_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    compile(&RE, r"V(\d+(?:[._]\d+)*)")
}

fn token_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!(r"[^{}]+", &SEPARATORS[1..SEPARATORS.len() - 1]))
            .unwrap_or_else(|e| panic!("invalid token pattern: {e}"))
    })
}

fn number(caps: &regex::Captures<'_>, groups: &[usize]) -> Option<u32> {
    groups
        .iter()
        .find_map(|&i| caps.get(i))
        .and_then(|m| m.as_str().parse().ok())
}

/// Season and episode, trying `S01E02` style first, then `1x02`, then a bare
/// season (`S01`, `Season.1`) or a bare episode (`E05`, `Ep.5`).
pub fn find_episode(text: &str) -> Option<EpisodeMarker> {
    if let Some(caps) = season_episode_regex().captures(text) {
        let whole = caps.get(1)?;
        let season = number(&caps, &[2]);
        let first = number(&caps, &[3])?;
        let episode = match number(&caps, &[4, 5]) {
            Some(last) if last > first => Episode::Range(first, last),
            _ => Episode::Single(first),
        };
        return Some(EpisodeMarker {
            season,
            episode: Some(episode),
            start: whole.start(),
            end: whole.end(),
        });
    }

    if let Some(caps) = cross_episode_regex().captures(text) {
        let whole = caps.get(1)?;
        return Some(EpisodeMarker {
            season: number(&caps, &[2]),
            episode: number(&caps, &[3]).map(Episode::Single),
            start: whole.start(),
            end: whole.end(),
        });
    }

    if let Some(caps) = season_regex().captures(text) {
        let whole = caps.get(1)?;
        return Some(EpisodeMarker {
            season: number(&caps, &[2, 3]),
            episode: None,
            start: whole.start(),
            end: whole.end(),
        });
    }

    let caps = episode_regex().captures(text)?;
    let whole = caps.get(1)?;
    Some(EpisodeMarker {
        season: None,
        episode: number(&caps, &[2, 3]).map(Episode::Single),
        start: whole.start(),
        end: whole.end(),
    })
}

/// A calendar date in `yyyy.mm.dd` or `dd.mm.yyyy` order (any separator).
/// Impossible dates such as `2023.02.30` are rejected.
pub fn find_date(text: &str) -> Option<DateMarker> {
    let ymd = ymd_regex().captures(text).and_then(|caps| {
        let whole = caps.get(1)?;
        let date = NaiveDate::from_ymd_opt(
            caps[2].parse().ok()?,
            caps[3].parse().ok()?,
            caps[4].parse().ok()?,
        )?;
        Some(DateMarker {
            date,
            start: whole.start(),
            end: whole.end(),
        })
    });
    if ymd.is_some() {
        return ymd;
    }

    let caps = dmy_regex().captures(text)?;
    let whole = caps.get(1)?;
    let date = NaiveDate::from_ymd_opt(
        caps[4].parse().ok()?,
        caps[3].parse().ok()?,
        caps[2].parse().ok()?,
    )?;
    Some(DateMarker {
        date,
        start: whole.start(),
        end: whole.end(),
    })
}

pub fn find_disc(text: &str) -> Option<NumberMarker> {
    let caps = disc_regex().captures(text)?;
    let whole = caps.get(1)?;
    Some(NumberMarker {
        value: number(&caps, &[2, 3])?,
        start: whole.start(),
        end: whole.end(),
    })
}

pub fn find_version(text: &str) -> Option<VersionMarker> {
    let caps = version_regex().captures(text)?;
    let whole = caps.get(1)?;
    Some(VersionMarker {
        value: caps[2].replace('_', "."),
        start: whole.start(),
        end: whole.end(),
    })
}

/// Four-digit years (1900–2099) standing alone as a token. The first token
/// is never a year: it always belongs to the title (`1917.2019.1080p`).
pub fn year_tokens(text: &str) -> Vec<NumberMarker> {
    token_regex()
        .find_iter(text)
        .skip(1)
        .filter_map(|m| {
            let s = m.as_str();
            let is_year = s.len() == 4
                && (s.starts_with("19") || s.starts_with("20"))
                && s.bytes().all(|b| b.is_ascii_digit());
            if !is_year {
                return None;
            }
            Some(NumberMarker {
                value: s.parse().ok()?,
                start: m.start(),
                end: m.end(),
            })
        })
        .collect()
}

/// Pick the release year: the last year token ahead of the first technical
/// marker, otherwise the last year token anywhere (`Artist-Album-CD-FLAC-1997`).
pub fn select_year(years: &[NumberMarker], first_marker: Option<usize>) -> Option<NumberMarker> {
    let before = first_marker.and_then(|pos| years.iter().filter(|y| y.end <= pos).last());
    before.or_else(|| years.last()).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_episode() {
        let m = find_episode("Show.Name.S01E02.Title.720p").unwrap();
        assert_eq!(m.season, Some(1));
        assert_eq!(m.episode, Some(Episode::Single(2)));
        assert_eq!(&"Show.Name.S01E02.Title.720p"[m.start..m.end], "S01E02");
    }

    #[test]
    fn test_episode_ranges() {
        let m = find_episode("Show.S02E05E06.720p").unwrap();
        assert_eq!(m.episode, Some(Episode::Range(5, 6)));
        let m = find_episode("Show.S02E05-E07.720p").unwrap();
        assert_eq!(m.episode, Some(Episode::Range(5, 7)));
        let m = find_episode("Show.S02E05-07.720p").unwrap();
        assert_eq!(m.episode, Some(Episode::Range(5, 7)));
    }

    #[test]
    fn test_alternative_episode_forms() {
        let m = find_episode("Show.3x04.HDTV").unwrap();
        assert_eq!((m.season, m.episode), (Some(3), Some(Episode::Single(4))));

        let m = find_episode("Show.S04.1080p.WEB").unwrap();
        assert_eq!((m.season, m.episode), (Some(4), None));

        let m = find_episode("Show.Season.2.DVDRip").unwrap();
        assert_eq!(m.season, Some(2));

        let m = find_episode("Documentary.E03.720p").unwrap();
        assert_eq!((m.season, m.episode), (None, Some(Episode::Single(3))));
    }

    #[test]
    fn test_no_episode_in_plain_movie() {
        assert!(find_episode("Movie.Title.2019.1080p.BluRay.x264").is_none());
    }

    #[test]
    fn test_dates() {
        let m = find_date("Show.2023.01.15.Guest.720p").unwrap();
        assert_eq!(m.date, NaiveDate::from_ymd_opt(2023, 1, 15).unwrap());
        let m = find_date("Artist-Live-SAT-15-01-2023").unwrap();
        assert_eq!(m.date, NaiveDate::from_ymd_opt(2023, 1, 15).unwrap());
        assert!(find_date("Show.2023.02.30.Guest").is_none());
    }

    #[test]
    fn test_disc_and_version() {
        assert_eq!(find_disc("Game.Disc2-GRP").unwrap().value, 2);
        assert_eq!(find_disc("Artist-Album-2CD-FLAC").map(|d| d.value), None);
        assert_eq!(find_disc("Artist-Album-CD1-FLAC").unwrap().value, 1);
        assert_eq!(find_version("Tool.v1.2.3.WinALL").unwrap().value, "1.2.3");
        assert!(find_version("V.for.Vendetta.2005").is_none());
    }

    #[test]
    fn test_year_selection() {
        let text = "Blade.Runner.2049.2017.1080p.BluRay";
        let years = year_tokens(text);
        assert_eq!(years.len(), 2);
        let marker = text.find("1080p");
        assert_eq!(select_year(&years, marker).unwrap().value, 2017);

        let text = "VA-Some_Album-CD-FLAC-1997";
        let years = year_tokens(text);
        assert_eq!(select_year(&years, text.find("CD")).unwrap().value, 1997);

        assert!(year_tokens("1917.1080p").is_empty());
    }
}
