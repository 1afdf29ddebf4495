/// ATX heading block type with owned marker constants.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: usize = 6;

    /// Level of a heading line: 1–6 markers followed by a space.
    ///
    /// Seven or more markers, or no space, is not a heading.
    pub fn level(line: &str) -> Option<usize> {
        let t = line.trim_start();
        let level = t.chars().take_while(|&c| c == Self::MARKER).count();
        if !(1..=Self::MAX_LEVEL).contains(&level) {
            return None;
        }
        t[level..].starts_with(' ').then_some(level)
    }

    /// Whether a line starts with the marker at all.
    pub fn starts_line(line: &str) -> bool {
        line.trim_start().starts_with(Self::MARKER)
    }

    /// Heading text without its markers.
    pub fn strip(line: &str) -> &str {
        line.trim_start().trim_start_matches(Self::MARKER).trim()
    }
}
