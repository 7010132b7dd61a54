/// Default number of intervals when charting a ticker's reference timestamps.
pub const DEFAULT_BUCKET_COUNT: usize = 15;

/// Comment body left behind when a moderator removes the original text.
pub const REMOVED_BODY_MARKER: &str = "[removed]";

/// Phrase unique to the auto-moderator boilerplate comment.
pub const AUTO_MOD_MARKER: &str = "Does this submission";

/// Unicode code-point ranges treated as emoji when scrubbing post text.
pub const EMOJI_RANGES: &[(u32, u32)] = &[
    (0x1F600, 0x1F64F), // emoticons
    (0x1F300, 0x1F5FF), // symbols & pictographs
    (0x1F680, 0x1F6FF), // transport & map symbols
    (0x1F1E0, 0x1F1FF), // flags
    (0x2500, 0x2BEF),
    (0x2702, 0x27B0), // dingbats
    (0x24C2, 0x1F251),
    (0x1F926, 0x1F937),
    (0x10000, 0x10FFFF),
    (0x2640, 0x2642),
    (0x2600, 0x2B55),
    (0x200D, 0x200D), // zero-width joiner
    (0x23CF, 0x23CF),
    (0x23E9, 0x23E9),
    (0x231A, 0x231A),
    (0xFE0F, 0xFE0F), // variation selector
    (0x3030, 0x3030),
];
