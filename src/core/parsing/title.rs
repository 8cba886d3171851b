//! Title, secondary title and country extraction.
use super::Detected;
use super::patterns::COUNTRIES;
use crate::types::ReleaseType;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Titles {
    pub title: Option<String>,
    pub title_extra: Option<String>,
    pub country: Option<String>,
}

/// Turn a raw name fragment into display text: `.` and `_` become spaces,
/// runs of whitespace collapse, stray dashes at either end are dropped.
pub fn clean(text: &str) -> Option<String> {
    let spaced = text.replace(['.', '_'], " ");
    let collapsed = spaced.split_whitespace().collect::<Vec<_>>().join(" ");
    let trimmed = collapsed.trim_matches(|c: char| c == '-' || c.is_whitespace());
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

pub fn extract(body: &str, detected: &Detected, kind: ReleaseType) -> Titles {
    let boundary = detected.boundary().unwrap_or(body.len());

    if kind.uses_dash_layout() && body.contains('-') {
        return dash_layout(body, boundary);
    }

    let mut titles = Titles {
        title: clean(&body[..boundary]),
        ..Titles::default()
    };

    let anchor = detected
        .episode
        .map(|e| e.end)
        .or(detected.date.map(|d| d.end));
    if let Some(anchor) = anchor {
        let next = detected.next_boundary_after(anchor).unwrap_or(body.len());
        if next > anchor {
            titles.title_extra = clean(&body[anchor..next]);
        }
    }

    if matches!(kind, ReleaseType::TV | ReleaseType::Movie) {
        split_country(&mut titles);
    }
    titles
}

/// `Artist-Album-Source-Format-Year` layout used by audio releases.
fn dash_layout(body: &str, boundary: usize) -> Titles {
    let mut segments = Vec::new();
    let mut offset = 0;
    for segment in body.split('-') {
        segments.push((offset, segment));
        offset += segment.len() + 1;
    }

    let title = segments.first().and_then(|(_, s)| clean(s)).map(|artist| {
        if artist.eq_ignore_ascii_case("VA") {
            "Various".to_string()
        } else {
            artist
        }
    });

    let title_extra = segments.get(1).and_then(|&(start, segment)| {
        if start >= boundary {
            return None;
        }
        let end = (start + segment.len()).min(boundary);
        clean(&body[start..end])
    });

    Titles {
        title,
        title_extra,
        country: None,
    }
}

fn split_country(titles: &mut Titles) {
    let Some(title) = titles.title.as_deref() else {
        return;
    };
    let Some((head, last)) = title.rsplit_once(' ') else {
        return;
    };
    if COUNTRIES.contains(&last) {
        titles.country = Some(last.to_string());
        titles.title = Some(head.to_string());
    }
}
