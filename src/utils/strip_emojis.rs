use crate::constants::EMOJI_RANGES;

/// Removes emoji and related pictographic code points from `text`.
pub fn strip_emojis(text: &str) -> String {
    text.chars()
        .filter(|c| {
            let code = *c as u32;
            !EMOJI_RANGES
                .iter()
                .any(|&(start, end)| code >= start && code <= end)
        })
        .collect()
}
