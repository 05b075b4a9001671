//! Light suffix stripping for the TF-IDF fallback path.
//!
//! Not a linguistic stemmer: it only folds the common inflections that make
//! exact-term BM25 miss ("revenues" vs "revenue", "reported" vs "report").

const RULES: &[(&str, &str)] = &[
    ("sses", "ss"),
    ("ies", "y"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("xes", "x"),
    ("ing", ""),
    ("ed", ""),
    ("ly", ""),
    ("s", ""),
];

const MIN_STEM_CHARS: usize = 3;

/// Strip the first matching suffix, keeping stems of at least three chars.
pub fn stem(token: &str) -> String {
    for (suffix, replacement) in RULES {
        if let Some(base) = token.strip_suffix(suffix) {
            // "ss" is not a plural.
            if *suffix == "s" && base.ends_with('s') {
                return token.to_string();
            }
            let candidate = format!("{base}{replacement}");
            if candidate.chars().count() >= MIN_STEM_CHARS {
                return candidate;
            }
            return token.to_string();
        }
    }
    token.to_string()
}
