//! Cutting a single exercise out of a generated batch.
//!
//! The batch is free text. The only structure relied on is the heading
//! marker `Exercise {n}` the generation prompt asks for. An exercise's body
//! runs from just after its marker to the next occurrence of the bare word
//! `Exercise`, or to the end of the document.
//!
//! A marker only matches when it is not followed by another digit, so
//! `Exercise 1` never matches inside `Exercise 12`. A missing marker, a
//! marker that occurs twice, or a body holding nothing but whitespace and
//! the next heading's `#` prefix is an [`DomainError::ExtractionMismatch`].

use crate::domain::error::{DomainError, ExtractionMismatchKind};

const MARKER_WORD: &str = "Exercise";

/// Return the body of exercise `number` (1-based). No upper bound is
/// enforced here.
pub fn extract(batch: &str, number: u32) -> Result<&str, DomainError> {
    let mismatch = |kind| DomainError::ExtractionMismatch { number, kind };

    let marker = format!("{MARKER_WORD} {number}");
    let mut positions = marker_positions(batch, &marker);

    let start = match (positions.next(), positions.next()) {
        (None, _) => return Err(mismatch(ExtractionMismatchKind::MarkerMissing)),
        (Some(_), Some(_)) => return Err(mismatch(ExtractionMismatchKind::MarkerDuplicated)),
        (Some(pos), None) => pos + marker.len(),
    };

    let rest = &batch[start..];
    let end = rest.find(MARKER_WORD).unwrap_or(rest.len());
    let body = &rest[..end];

    // The next heading's `#` sits just before its marker word.
    let content = body.trim_end_matches(|c: char| c == '#' || c.is_whitespace());
    if content.trim_start().is_empty() {
        return Err(mismatch(ExtractionMismatchKind::EmptyBody));
    }
    Ok(body)
}

/// Byte offsets of `marker` occurrences not followed by an ASCII digit.
fn marker_positions<'a>(haystack: &'a str, marker: &'a str) -> impl Iterator<Item = usize> + 'a {
    haystack.match_indices(marker).filter_map(move |(pos, _)| {
        let next = haystack[pos + marker.len()..].chars().next();
        match next {
            Some(c) if c.is_ascii_digit() => None,
            _ => Some(pos),
        }
    })
}
