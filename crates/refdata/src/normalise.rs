//! Suburb and LGA name canonicalization.
//!
//! The key produced here is the sole join key between user input and the
//! reference datasets. Matching is exact: an unmatched key is a miss, never
//! a partial match.

const STATE_SUFFIXES: [&str; 8] = [
    "(NSW)",
    "(VIC)",
    "(QLD)",
    "(WA)",
    "(SA)",
    "(TAS)",
    "(ACT)",
    "(NT)",
];

// Order matters: "CITY OF" must be stripped before the bare "CITY".
const LGA_ADMIN_TOKENS: [&str; 3] = ["COUNCIL", "CITY OF", "CITY"];

/// Canonical lookup key for a suburb name. Empty input yields an empty key.
pub fn normalise_suburb_name(raw: &str) -> String {
    let mut cleaned = raw.to_uppercase();
    for suffix in STATE_SUFFIXES {
        cleaned = cleaned.replace(suffix, "");
    }
    collapse_whitespace(&cleaned)
}

/// Canonical lookup key for an LGA name. Strips the administrative words
/// that differ between valuation reports ("The Hills Shire Council") and
/// the ABS datasets ("The Hills Shire").
pub fn normalise_lga_name(raw: &str) -> String {
    let mut cleaned = raw.to_uppercase();
    for suffix in STATE_SUFFIXES {
        cleaned = cleaned.replace(suffix, "");
    }
    for token in LGA_ADMIN_TOKENS {
        cleaned = cleaned.replace(token, "");
    }
    collapse_whitespace(&cleaned)
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
