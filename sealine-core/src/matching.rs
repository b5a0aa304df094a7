//! Fuzzy joins between the three upstream feeds.
//!
//! The ship catalog, cabin catalog and availability feed are maintained
//! independently and identify the same vessel or cabin with drifting
//! free-text names ("MV Aurora" vs "Aurora Liveaboard"). Every join in the
//! engine goes through these functions rather than ad-hoc comparisons, so
//! the policy lives in one place and can be tested without network state.
//!
//! All functions are total: bad input yields `false`, never an error.

/// Words that vessel names carry or drop between feeds. Stripped before the
/// second containment pass in [`boat_names_match`].
const VESSEL_NOISE_WORDS: &[&str] = &[
    "mv", "ms", "sv", "my", "km", "klm", "rv", "liveaboard", "liveaboards", "cruise", "cruises",
    "yacht", "boat", "phinisi", "the",
];

/// Lowercase, strip punctuation, collapse runs of whitespace.
fn normalize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut last_was_space = true;
    for ch in raw.chars() {
        let ch = if ch.is_alphanumeric() {
            ch.to_ascii_lowercase()
        } else {
            ' '
        };
        if ch == ' ' {
            if !last_was_space {
                out.push(' ');
            }
            last_was_space = true;
        } else {
            out.push(ch);
            last_was_space = false;
        }
    }
    while out.ends_with(' ') {
        out.pop();
    }
    out
}

fn strip_noise_words(normalized: &str) -> String {
    normalized
        .split(' ')
        .filter(|word| !VESSEL_NOISE_WORDS.contains(word))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Containment either way after normalization. Empty strings never match.
fn contains_either_way(a: &str, b: &str) -> bool {
    !a.is_empty() && !b.is_empty() && (a.contains(b) || b.contains(a))
}

/// Case-insensitive substring check over raw feed text. Used by the
/// free-text query filter.
pub fn normalized_contains(haystack: &str, needle: &str) -> bool {
    let haystack = normalize(haystack);
    let needle = normalize(needle);
    !needle.is_empty() && haystack.contains(&needle)
}

/// Do two boat/operator names refer to the same vessel?
///
/// First tries plain containment on the normalized names, then retries with
/// vessel noise words ("MV", "Liveaboard", ...) stripped, so prefix/suffix
/// drift between the catalog and the availability feed still joins.
pub fn boat_names_match(a: &str, b: &str) -> bool {
    let na = normalize(a);
    let nb = normalize(b);
    if contains_either_way(&na, &nb) {
        return true;
    }
    let sa = strip_noise_words(&na);
    let sb = strip_noise_words(&nb);
    contains_either_way(&sa, &sb)
}

/// Do two cabin/room-type names refer to the same cabin type?
pub fn cabin_names_match(a: &str, b: &str) -> bool {
    let na = normalize(a);
    let nb = normalize(b);
    contains_either_way(&na, &nb)
}

/// Does a selected destination id (slug form, e.g. "komodo-national-park")
/// match a ship's free-text destinations field?
///
/// The slug is de-slugged to its display name and each comma-separated
/// segment of the destinations text is checked for containment either way.
pub fn destination_matches(selected_id: &str, destinations_text: &str) -> bool {
    let display = normalize(&selected_id.replace(['-', '_'], " "));
    if display.is_empty() {
        return false;
    }
    destinations_text.split(',').any(|segment| {
        let segment = normalize(segment);
        contains_either_way(&segment, &display)
    })
}
