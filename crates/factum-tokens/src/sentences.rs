//! Sentence-boundary splitting used for claim decomposition.

/// Split on `.`, `!` or `?` followed by whitespace. Pieces are trimmed and
/// empty pieces dropped; text without a boundary comes back as one piece.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        if !matches!(ch, '.' | '!' | '?') {
            continue;
        }
        match chars.peek() {
            Some((_, next)) if next.is_whitespace() => {
                let end = idx + ch.len_utf8();
                push_trimmed(&mut sentences, &text[start..end]);
                start = end;
            }
            _ => {}
        }
    }
    push_trimmed(&mut sentences, &text[start..]);
    sentences
}

fn push_trimmed(out: &mut Vec<String>, piece: &str) {
    let trimmed = piece.trim();
    if !trimmed.is_empty() {
        out.push(trimmed.to_string());
    }
}
