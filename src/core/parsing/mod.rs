//! Release name parsing.
//!
//! `ReleaseParser` takes a release name and the section it was announced in
//! and produces a [`Release`]. Parsing runs in three passes over the name with
//! the group suffix removed:
//!
//! 1. scan: every token table and numbered marker is matched independently,
//!    recording where in the name it was found (`Detected`);
//! 2. classify: the section, or failing that the detected attributes, decides
//!    the `ReleaseType`;
//! 3. assemble: the title is whatever precedes the first detected marker, and
//!    the remaining attributes are copied into the `Release`.
//!
//! Parsing is total: any string, including an empty one, yields a `Release`.
pub mod classify;
pub mod markers;
pub mod patterns;
pub mod title;

use chrono::Datelike;
use indexmap::IndexMap;
use tracing::debug;

use crate::core::release::Release;
use markers::{DateMarker, EpisodeMarker, NumberMarker, VersionMarker};
use patterns::{Hit, Language, Span, VIDEO_SOURCES};

/// Parses a release name on construction and exposes the result as `data`.
#[derive(Debug, Clone)]
pub struct ReleaseParser {
    release: String,
    section: String,
    pub data: Release,
}

impl ReleaseParser {
    pub fn new(release: impl Into<String>, section: impl Into<String>) -> Self {
        let release = release.into();
        let section = section.into();
        let data = parse(&release, &section);
        Self {
            release,
            section,
            data,
        }
    }

    pub fn release(&self) -> &str {
        &self.release
    }

    pub fn section(&self) -> &str {
        &self.section
    }

    pub fn into_data(self) -> Release {
        self.data
    }
}

/// Everything found in a release body, with byte positions.
#[derive(Debug, Clone, Default)]
pub struct Detected {
    pub source: Option<Hit<&'static str>>,
    pub video_format: Option<Hit<&'static str>>,
    pub media_format: Option<Hit<&'static str>>,
    pub resolution: Option<Hit<&'static str>>,
    pub audio: Vec<Hit<&'static str>>,
    pub device: Option<Hit<&'static str>>,
    pub os: Option<Hit<&'static str>>,
    pub flags: Vec<Hit<&'static str>>,
    pub languages: Vec<Hit<Language>>,
    pub episode: Option<EpisodeMarker>,
    pub date: Option<DateMarker>,
    pub disc: Option<NumberMarker>,
    pub version: Option<VersionMarker>,
    pub year: Option<NumberMarker>,
}

impl Detected {
    pub fn scan(body: &str) -> Self {
        let mut detected = Detected {
            source: patterns::sources().first(body),
            video_format: patterns::video_formats().first(body),
            media_format: patterns::media_formats().first(body),
            resolution: patterns::resolutions().first(body),
            audio: patterns::audio_tracks().all(body),
            device: patterns::devices().first(body),
            os: patterns::operating_systems().first(body),
            episode: markers::find_episode(body),
            date: markers::find_date(body),
            disc: markers::find_disc(body),
            version: markers::find_version(body),
            ..Detected::default()
        };

        let claimed = detected.technical_spans();
        detected.flags = patterns::flags().all_outside(body, &claimed);
        detected.languages = patterns::languages().all_outside(body, &claimed);

        let first_marker = detected.marker_starts().into_iter().filter(|&s| s > 0).min();
        let years: Vec<NumberMarker> = markers::year_tokens(body)
            .into_iter()
            .filter(|y| {
                detected
                    .date
                    .is_none_or(|d| y.end <= d.start || y.start >= d.end)
            })
            .collect();
        detected.year = markers::select_year(&years, first_marker);
        detected.drop_title_words();
        detected
    }

    /// Spans of the single-valued technical tokens and audio tracks.
    fn technical_spans(&self) -> Vec<Span> {
        let mut spans: Vec<Span> = [
            self.source,
            self.video_format,
            self.media_format,
            self.resolution,
            self.device,
            self.os,
        ]
        .iter()
        .flatten()
        .map(|h| h.span())
        .collect();
        spans.extend(self.audio.iter().map(|h| h.span()));
        spans
    }

    /// Flag and language words that sit before the year and before every
    /// technical marker are part of the title (`My.Big.Fat.Greek.Wedding.2002`).
    fn drop_title_words(&mut self) {
        let Some(year) = self.year else {
            return;
        };
        let title_end = self
            .technical_spans()
            .into_iter()
            .map(|(start, _)| start)
            .chain(self.episode.map(|m| m.start))
            .chain(self.date.map(|m| m.start))
            .chain(self.disc.map(|m| m.start))
            .chain(self.version.as_ref().map(|m| m.start))
            .fold(year.start, usize::min);
        self.flags.retain(|h| h.start >= title_end);
        self.languages.retain(|h| h.start >= title_end);
    }

    /// Start offsets of every technical marker (everything but the year).
    fn marker_starts(&self) -> Vec<usize> {
        let mut starts: Vec<usize> = [
            self.source,
            self.video_format,
            self.media_format,
            self.resolution,
            self.device,
            self.os,
        ]
        .iter()
        .flatten()
        .map(|h| h.start)
        .collect();
        starts.extend(self.audio.iter().map(|h| h.start));
        starts.extend(self.flags.iter().map(|h| h.start));
        starts.extend(self.languages.iter().map(|h| h.start));
        starts.extend(self.episode.map(|m| m.start));
        starts.extend(self.date.map(|m| m.start));
        starts.extend(self.disc.map(|m| m.start));
        starts.extend(self.version.as_ref().map(|m| m.start));
        starts
    }

    fn all_starts(&self) -> Vec<usize> {
        let mut starts = self.marker_starts();
        starts.extend(self.year.map(|y| y.start));
        starts
    }

    /// Where the title ends. A marker at offset zero is part of the title.
    pub fn boundary(&self) -> Option<usize> {
        self.all_starts().into_iter().filter(|&s| s > 0).min()
    }

    /// First marker starting at or after `pos`.
    pub fn next_boundary_after(&self, pos: usize) -> Option<usize> {
        self.all_starts().into_iter().filter(|&s| s >= pos).min()
    }

    pub fn has_video(&self) -> bool {
        self.video_format.is_some()
            || self.resolution.is_some()
            || self.source.is_some_and(|s| VIDEO_SOURCES.contains(&s.value))
    }

    pub fn is_episodic(&self) -> bool {
        self.episode.is_some() || self.date.is_some()
    }

    pub fn has_flag(&self, flag: &str) -> bool {
        self.flags.iter().any(|h| h.value == flag)
    }

    pub fn media_format_is(&self, format: &str) -> bool {
        self.media_format.is_some_and(|h| h.value == format)
    }
}

/// Split the trailing `-GROUP` off a release name.
fn split_group(name: &str) -> (&str, Option<String>) {
    match name.rsplit_once('-') {
        Some((body, group))
            if !body.trim().is_empty()
                && !group.is_empty()
                && group.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') =>
        {
            (body, Some(group.to_string()))
        }
        _ => (name, None),
    }
}

fn non_empty<T>(items: Vec<T>) -> Option<Vec<T>> {
    if items.is_empty() { None } else { Some(items) }
}

/// Parse `release` as announced in `section`.
pub fn parse(release: &str, section: &str) -> Release {
    let (body, group) = split_group(release.trim());
    let detected = Detected::scan(body);
    let kind = classify::classify(section, &detected);
    let titles = title::extract(body, &detected, kind);

    let mut data = Release::bare(release, kind);
    data.title = titles.title;
    data.title_extra = titles.title_extra;
    data.country = titles.country;
    data.group = group;

    data.year = detected
        .year
        .map(|y| y.value)
        .or_else(|| detected.date.map(|d| d.date.year() as u32));
    data.date = detected.date.map(|d| d.date.format("%d.%m.%Y").to_string());

    if let Some(episode) = detected.episode {
        data.season = episode.season;
        data.episode = episode.episode;
    }
    data.disc = detected.disc.map(|d| d.value);
    data.version = detected.version.as_ref().map(|v| v.value.clone());

    data.source = detected.source.map(|h| h.value.to_string());
    data.resolution = detected.resolution.map(|h| h.value.to_string());
    data.device = detected.device.map(|h| h.value.to_string());
    data.os = detected.os.map(|h| h.value.to_string());

    if detected.has_video() {
        data.format = detected
            .video_format
            .or(detected.media_format)
            .map(|h| h.value.to_string());
        data.audio = non_empty(detected.audio.iter().map(|h| h.value.to_string()).collect());
    } else {
        data.format = detected
            .media_format
            .or(detected.video_format)
            .map(|h| h.value.to_string());
    }

    data.flags = non_empty(detected.flags.iter().map(|h| h.value.to_string()).collect());

    let language: IndexMap<String, String> = detected
        .languages
        .iter()
        .map(|h| (h.value.0.to_string(), h.value.1.to_string()))
        .collect();
    if !language.is_empty() {
        data.language = Some(language);
    }

    debug!(
        release,
        section,
        kind = %data.kind,
        title = data.title.as_deref().unwrap_or_default(),
        group = data.group.as_deref().unwrap_or_default(),
        "parsed release"
    );
    data
}
