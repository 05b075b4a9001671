//! Numeric token extraction with thousands separators stripped.
//!
//! A number is a standalone token: the characters on either side must not
//! be word characters, so `Q3` and `10k` contain no numbers. Commas count
//! only as separators between three-digit groups (`1,200`); `1,2` is two
//! numbers.

/// Extract normalized numbers in order of appearance.
///
/// `"1,200 units, up 42%"` yields `["1200", "42"]`. A sentence-final period
/// is not part of the number (`"in 2023."` yields `"2023"`).
pub fn extract_numbers(text: &str) -> Vec<String> {
    let mut numbers = Vec::new();
    let mut prev: Option<char> = None;
    let mut pos = 0;
    while let Some(c) = text[pos..].chars().next() {
        if c.is_ascii_digit() && !prev.is_some_and(is_word_char) {
            if let Some(len) = number_at(&text[pos..]) {
                numbers.push(text[pos..pos + len].replace(',', ""));
                pos += len;
                prev = text[..pos].chars().next_back();
                continue;
            }
        }
        prev = Some(c);
        pos += c.len_utf8();
    }
    numbers
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn digit_run(s: &str, from: usize) -> usize {
    s.as_bytes()
        .get(from..)
        .map_or(0, |rest| rest.iter().take_while(|b| b.is_ascii_digit()).count())
}

/// Extend `end` over a `.digits` fraction when one follows.
fn with_fraction(s: &str, end: usize) -> Option<usize> {
    if s.as_bytes().get(end) != Some(&b'.') {
        return None;
    }
    match digit_run(s, end + 1) {
        0 => None,
        n => Some(end + 1 + n),
    }
}

fn ends_at_boundary(s: &str, end: usize) -> bool {
    !s[end..].chars().next().is_some_and(is_word_char)
}

/// Byte length of the number starting at `s[0]`, if any reading of it ends
/// at a token boundary. Grouped readings are preferred over plain digit
/// runs, and longer readings over shorter ones.
fn number_at(s: &str) -> Option<usize> {
    let lead = digit_run(s, 0);
    let mut candidates = Vec::new();

    if (1..=3).contains(&lead) {
        let mut group_ends = Vec::new();
        let mut end = lead;
        while s.as_bytes().get(end) == Some(&b',') && digit_run(s, end + 1) >= 3 {
            end += 4;
            group_ends.push(end);
        }
        for &end in group_ends.iter().rev() {
            candidates.extend(with_fraction(s, end));
            candidates.push(end);
        }
    }
    candidates.extend(with_fraction(s, lead));
    candidates.push(lead);

    candidates.into_iter().find(|&end| ends_at_boundary(s, end))
}
