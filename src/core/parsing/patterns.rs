//! Token tables for release attributes.
//!
//! Every table is an ordered list of `(value, pattern)` pairs. A pattern only
//! matches between token separators (`. _ - space ( ) [ ]` or either end of
//! the string), so `x264` never matches inside `x2645` and `WEB` never matches
//! inside `WEBSITE`. Tables are case-insensitive; entries that are only
//! meaningful in upper case opt out with `(?-i:...)`.
use std::sync::OnceLock;

use regex::Regex;

/// Characters that separate tokens in a release name.
pub const SEPARATORS: &str = r"[._\s\-()\[\]]";

/// Byte range `(start, end)` within a release name.
pub type Span = (usize, usize);

/// A table match: the canonical value and the byte span of the matched token(s).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit<T> {
    pub value: T,
    pub start: usize,
    pub end: usize,
}

impl<T> Hit<T> {
    pub fn span(&self) -> Span {
        (self.start, self.end)
    }
}

pub struct Table<T> {
    entries: Vec<(T, Regex)>,
}

impl<T: Copy> Table<T> {
    fn build(rules: &[(T, &str)]) -> Self {
        let entries = rules
            .iter()
            .map(|(value, pattern)| {
                let re = Regex::new(&bounded(pattern))
                    .unwrap_or_else(|e| panic!("invalid token pattern {pattern:?}: {e}"));
                (*value, re)
            })
            .collect();
        Self { entries }
    }

    /// First entry, in table order, that matches anywhere in `text`.
    pub fn first(&self, text: &str) -> Option<Hit<T>> {
        self.entries.iter().find_map(|(value, re)| hit(*value, re, text))
    }

    /// Every matching entry ordered by position. A match nested inside an
    /// earlier, longer one (`DTS` inside `DTS-HD.MA`) is dropped.
    pub fn all(&self, text: &str) -> Vec<Hit<T>> {
        self.all_outside(text, &[])
    }

    /// Like [`Table::all`], but text inside `claimed` spans already belongs
    /// to another table (the `DL` of `WEB-DL`) and is skipped.
    pub fn all_outside(&self, text: &str, claimed: &[Span]) -> Vec<Hit<T>> {
        let mut hits: Vec<Hit<T>> = self
            .entries
            .iter()
            .filter_map(|(value, re)| hit_outside(*value, re, text, claimed))
            .collect();
        hits.sort_by(|a, b| a.start.cmp(&b.start).then(b.end.cmp(&a.end)));

        let mut accepted: Vec<Hit<T>> = Vec::with_capacity(hits.len());
        for h in hits {
            if accepted.iter().all(|a| h.start >= a.end || h.end <= a.start) {
                accepted.push(h);
            }
        }
        accepted
    }
}

fn hit<T: Copy>(value: T, re: &Regex, text: &str) -> Option<Hit<T>> {
    hit_outside(value, re, text, &[])
}

fn hit_outside<T: Copy>(value: T, re: &Regex, text: &str, claimed: &[Span]) -> Option<Hit<T>> {
    re.captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .find(|m| {
            claimed
                .iter()
                .all(|&(start, end)| m.start() >= end || m.end() <= start)
        })
        .map(|m| Hit {
            value,
            start: m.start(),
            end: m.end(),
        })
}

/// Wrap a pattern so it only matches a whole token sequence.
pub fn bounded(pattern: &str) -> String {
    format!(r"(?i)(?:^|{SEPARATORS})({pattern})(?:$|{SEPARATORS})")
}

macro_rules! table {
    ($name:ident, $ty:ty, $rules:expr) => {
        pub fn $name() -> &'static Table<$ty> {
            static TABLE: OnceLock<Table<$ty>> = OnceLock::new();
            TABLE.get_or_init(|| Table::build($rules))
        }
    };
}

const SOURCE_RULES: &[(&str, &str)] = &[
    ("Bluray", r"(?:UHD[._\-]?)?BLU[._\-]?RAY|BDRIP|BRRIP|BD(?:25|50|66|100)|(?-i:BD|BDR)"),
    ("WEB", r"WEB[._\-]?DL|WEB[._\-]?RIP|WEB[._\-]?HD|(?-i:WEB)"),
    ("HDTV", r"U?HDTV(?:RIP)?"),
    ("PDTV", r"PDTV"),
    ("SDTV", r"SDTV|TVRIP"),
    ("DSR", r"DSR|DTHRIP|DVBRIP"),
    ("DVD", r"DVD[._\-]?RIP|(?-i:DVD)"),
    ("VHS", r"VHS(?:RIP)?"),
    ("CAM", r"HDCAM|CAM(?:RIP)?"),
    ("Telesync", r"HDTS|TELESYNC|(?-i:TS|PDVD)"),
    ("Telecine", r"HDTC|TELECINE|(?-i:TC)"),
    ("Screener", r"DVDSCR|BDSCR|SCREENER|(?-i:SCR)"),
    ("CD", r"CDDA|CDM|CDS|CDEP|CDR|CD"),
    ("Vinyl", r"VINYL|VLS|(?-i:LP)"),
    ("SAT", r"SATRIP|(?-i:SAT)"),
    ("DAB", r"(?-i:DAB)"),
    ("Cable", r"(?-i:CABLE)"),
];

const VIDEO_FORMAT_RULES: &[(&str, &str)] = &[
    ("x264", r"x[._]?264"),
    ("x265", r"x[._]?265"),
    ("h264", r"h[._]?264|AVC"),
    ("h265", r"h[._]?265|HEVC"),
    ("XviD", r"XVID"),
    ("DivX", r"DIVX"),
    ("DVDR", r"DVDR|DVD[._\-]?[59]"),
    ("MPEG2", r"MPEG[._\-]?2"),
    ("VC-1", r"VC[._\-]?1"),
    ("SVCD", r"SVCD"),
    ("VCD", r"VCD"),
    ("AV1", r"AV1"),
];

const MEDIA_FORMAT_RULES: &[(&str, &str)] = &[
    ("FLAC", r"FLAC"),
    ("MP3", r"MP3"),
    ("AAC", r"AAC"),
    ("OGG", r"OGG|VORBIS"),
    ("ALAC", r"ALAC"),
    ("WAV", r"WAV"),
    ("M4B", r"M4B"),
    ("ePub", r"EPUB"),
    ("PDF", r"PDF"),
    ("MOBI", r"MOBI"),
    ("AZW3", r"AZW3"),
    ("CBR", r"CBR"),
    ("CBZ", r"CBZ"),
];

const RESOLUTION_RULES: &[(&str, &str)] = &[
    ("2160p", r"2160p|4K"),
    ("1080p", r"1080p"),
    ("1080i", r"1080i"),
    ("720p", r"720p"),
    ("576p", r"576p"),
    ("480p", r"480p"),
];

const AUDIO_TRACK_RULES: &[(&str, &str)] = &[
    ("Dolby Atmos", r"ATMOS"),
    ("Dolby TrueHD", r"TRUE[._\-]?HD(?:[._]?[257][._][01])?"),
    ("DTS-HD MA", r"DTS[._\-]?HD[._\-]?MA(?:[._]?[257][._][01])?"),
    ("DTS-X", r"DTS[._\-]?X"),
    ("DTS", r"DTS(?:[._\-]?HD)?(?:[._]?[257][._][01])?"),
    ("Dolby Digital Plus", r"DDP(?:[._]?[257][._][01])?|E[._\-]?AC[._\-]?3"),
    ("Dolby Digital", r"DD(?:[._]?[257][._][01])?|AC[._\-]?3"),
    ("AAC", r"AAC(?:[._]?[257][._][01])?"),
    ("LPCM", r"L?PCM"),
    ("MP3", r"MP3"),
    ("FLAC", r"FLAC"),
];

const DEVICE_RULES: &[(&str, &str)] = &[
    ("Nintendo Switch", r"NSW"),
    ("Playstation 5", r"PS5"),
    ("Playstation 4", r"PS4"),
    ("Playstation 3", r"PS3"),
    ("Playstation 2", r"PS2"),
    ("Playstation Vita", r"PSV(?:ITA)?"),
    ("Playstation Portable", r"PSP"),
    ("Microsoft Xbox Series X", r"XBOX[._\-]?SERIES[._\-]?X|XBSX"),
    ("Microsoft Xbox One", r"XBOX[._\-]?ONE|XBOX1|XBO"),
    ("Microsoft Xbox360", r"XBOX[._\-]?360|X360"),
    ("Microsoft Xbox", r"XBOX"),
    ("Nintendo Wii U", r"WII[._\-]?U"),
    ("Nintendo Wii", r"WII"),
    ("Nintendo 3DS", r"3DS"),
    ("Nintendo DS", r"NDS"),
    ("Nintendo Game Boy Advance", r"GBA"),
];

const OS_RULES: &[(&str, &str)] = &[
    ("Windows", r"WIN(?:ALL|32|64|XP|7|8|10|11|DOWS)|(?-i:WIN)"),
    ("macOS", r"MAC[._\-]?OS(?:[._\-]?X)?|OSX"),
    ("Linux", r"LINUX"),
    ("iOS", r"IOS|IPHONE|IPAD"),
    ("Android", r"ANDROID"),
];

const FLAG_RULES: &[(&str, &str)] = &[
    ("Proper", r"PROPER"),
    ("Repack", r"REPACK"),
    ("Rerip", r"RERIP"),
    ("Real", r"(?-i:REAL)"),
    ("Internal", r"INTERNAL"),
    ("Limited", r"LIMITED"),
    ("Unrated", r"UNRATED"),
    ("Uncut", r"UNCUT"),
    ("Extended", r"EXTENDED(?:[._\-]?(?:CUT|EDITION))?"),
    ("Directors Cut", r"DIRECTORS?[._\-]?CUT"),
    ("Theatrical", r"THEATRICAL"),
    ("Remastered", r"REMASTERED"),
    ("Restored", r"RESTORED"),
    ("Complete", r"COMPLETE"),
    ("Dirfix", r"DIRFIX"),
    ("NFOFix", r"NFO[._\-]?FIX"),
    ("Samplefix", r"SAMPLE[._\-]?FIX"),
    ("Prooffix", r"PROOF[._\-]?FIX"),
    ("Syncfix", r"SYNC[._\-]?FIX"),
    ("Read NFO", r"READ[._\-]?NFO"),
    ("Subbed", r"SUBBED|(?-i:SUBS)"),
    ("Dubbed", r"DUBBED"),
    ("Dual Language", r"DUAL|(?-i:DL)"),
    ("HDR", r"HDR(?:10(?:P|\+)?)?"),
    ("Dolby Vision", r"DOVI|DOLBY[._\-]?VISION|(?-i:DV)"),
    ("UHD", r"UHD"),
    ("3D", r"3D"),
    ("Widescreen", r"(?-i:WS)"),
    ("Fullscreen", r"(?-i:FS)"),
    ("Convert", r"CONVERT"),
    ("Retail", r"RETAIL"),
    ("Incl. Keygen", r"INCL[._\-]?KEY(?:GEN|MAKER)|KEYGEN"),
    ("Incl. Crack", r"INCL[._\-]?CRACK|CRACKED"),
    ("Incl. Patch", r"INCL[._\-]?PATCH"),
    ("Update", r"UPDATE"),
    ("DLC", r"DLC"),
    ("ABook", r"A(?:UDIO)?BOOK"),
    ("eBook", r"E[._\-]?BOOK"),
    ("XXX", r"(?-i:XXX)"),
    ("Bootleg", r"BOOTLEG"),
    ("Promo", r"PROMO"),
    ("Boxset", r"BOX[._\-]?SET"),
    ("Music Video", r"MUSIC[._\-]?VIDEO|(?-i:MVID)"),
    ("Amazon", r"(?-i:AMZN)"),
    ("Netflix", r"NETFLIX|(?-i:NF)"),
    ("Disney+", r"(?-i:DSNP)"),
    ("HBO Max", r"(?-i:HMAX)"),
    ("Apple TV+", r"(?-i:ATVP)"),
];

/// `(iso code, language name)` pairs.
pub type Language = (&'static str, &'static str);

const LANGUAGE_RULES: &[(Language, &str)] = &[
    (("en", "English"), r"ENGLISH|(?-i:ENG)"),
    (("de", "German"), r"GERMAN|(?-i:GER)"),
    (("fr", "French"), r"TRUEFRENCH|FRENCH|VFF|VFQ|(?-i:VF)"),
    (("es", "Spanish"), r"SPANISH|CASTELLANO|LATINO"),
    (("it", "Italian"), r"ITALIAN|(?-i:ITA)"),
    (("nl", "Dutch"), r"DUTCH|FLEMISH"),
    (("sv", "Swedish"), r"SWEDISH|(?-i:SWE)"),
    (("da", "Danish"), r"DANISH"),
    (("no", "Norwegian"), r"NORWEGIAN"),
    (("fi", "Finnish"), r"FINNISH"),
    (("pl", "Polish"), r"POLISH|(?-i:PL)"),
    (("ru", "Russian"), r"RUSSIAN|(?-i:RUS)"),
    (("ja", "Japanese"), r"JAPANESE|(?-i:JAP|JPN)"),
    (("ko", "Korean"), r"KOREAN|(?-i:KOR)"),
    (("zh", "Chinese"), r"CHINESE|MANDARIN|CANTONESE"),
    (("pt", "Portuguese"), r"PORTUGUESE"),
    (("hu", "Hungarian"), r"HUNGARIAN"),
    (("cs", "Czech"), r"CZECH"),
    (("tr", "Turkish"), r"TURKISH"),
    (("hi", "Hindi"), r"HINDI"),
    (("el", "Greek"), r"GREEK"),
    (("he", "Hebrew"), r"HEBREW"),
    (("ar", "Arabic"), r"ARABIC"),
    (("multi", "Multi"), r"MULTILINGUAL|MULTI(?:LANG|[._\-]?\d{1,2})?"),
];

table!(sources, &'static str, SOURCE_RULES);
table!(video_formats, &'static str, VIDEO_FORMAT_RULES);
table!(media_formats, &'static str, MEDIA_FORMAT_RULES);
table!(resolutions, &'static str, RESOLUTION_RULES);
table!(audio_tracks, &'static str, AUDIO_TRACK_RULES);
table!(devices, &'static str, DEVICE_RULES);
table!(operating_systems, &'static str, OS_RULES);
table!(flags, &'static str, FLAG_RULES);
table!(languages, Language, LANGUAGE_RULES);

/// Sources that only occur on video releases.
pub const VIDEO_SOURCES: &[&str] = &[
    "Bluray", "HDTV", "PDTV", "SDTV", "DSR", "DVD", "VHS", "CAM", "Telesync", "Telecine",
    "Screener",
];

/// Sources typical for audio releases.
pub const MUSIC_SOURCES: &[&str] = &["CD", "Vinyl", "SAT", "DAB", "Cable"];

/// Formats that identify written material rather than audio.
pub const EBOOK_FORMATS: &[&str] = &["ePub", "PDF", "MOBI", "AZW3", "CBR", "CBZ"];

/// Country codes accepted as a title suffix (`The.Office.US.S01E01`).
pub const COUNTRIES: &[&str] = &["US", "UK", "AU", "CA", "NZ", "IE", "DK", "SE", "NO", "NL", "DE", "FR"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounded_respects_separators() {
        let re = Regex::new(&bounded("x264")).unwrap();
        assert!(re.is_match("Movie.2019.x264-GRP"));
        assert!(re.is_match("x264"));
        assert!(!re.is_match("Movie.x2645"));
    }

    #[test]
    fn test_first_uses_table_order() {
        let hit = sources().first("Movie.2019.1080p.WEB-DL.DDP5.1.x264").unwrap();
        assert_eq!(hit.value, "WEB");
        assert_eq!(&"Movie.2019.1080p.WEB-DL.DDP5.1.x264"[hit.start..hit.end], "WEB-DL");
    }

    #[test]
    fn test_all_drops_nested_matches() {
        let hits = audio_tracks().all("Movie.2019.1080p.BluRay.DTS-HD.MA.5.1.x264");
        let names: Vec<_> = hits.iter().map(|h| h.value).collect();
        assert_eq!(names, vec!["DTS-HD MA"]);
    }

    #[test]
    fn test_case_sensitive_entries() {
        assert!(sources().first("Charlottes.Web.2006").is_none());
        assert_eq!(sources().first("Show.S01E01.WEB").unwrap().value, "WEB");
        assert!(flags().first("xXx.2002").is_none());
    }

    #[test]
    fn test_language_table() {
        let hits = languages().all("Movie.2019.GERMAN.DL.1080p");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].value, ("de", "German"));
    }

    #[test]
    fn test_device_prefers_specific_entries() {
        assert_eq!(devices().first("Game.XBOX360-GRP").unwrap().value, "Microsoft Xbox360");
        assert_eq!(devices().first("Game.XBOXONE-GRP").unwrap().value, "Microsoft Xbox One");
    }

    #[test]
    fn test_all_outside_skips_claimed_text() {
        let name = "Movie.2019.1080p.WEB-DL.x264";
        let source = sources().first(name).unwrap();
        assert!(flags().all(name).iter().any(|h| h.value == "Dual Language"));
        assert!(flags().all_outside(name, &[source.span()]).is_empty());

        let name = "Movie.2019.WEB-DL.GERMAN.DL.x264";
        let source = sources().first(name).unwrap();
        let hits = flags().all_outside(name, &[source.span()]);
        assert_eq!(hits.len(), 1);
        assert_eq!(&name[hits[0].start..hits[0].end], "DL");
        assert!(hits[0].start > source.end);
    }
}
