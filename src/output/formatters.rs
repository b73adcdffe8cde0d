//! Formatting utilities for terminal output

/// Create a bar split between low and high guesses
///
/// The low share is drawn with `◀` and the high share with `▶`. Exact guesses
/// are not part of the bar. Returns an empty-looking bar when there is
/// nothing to show.
#[must_use]
pub fn guess_bar(low: usize, high: usize, width: usize) -> String {
    let total = low + high;
    if total == 0 {
        return "·".repeat(width);
    }

    // Cast is safe: the result is clamped to [0, width]
    let low_width = ((low as f64 / total as f64) * width as f64).round() as usize;
    let low_width = low_width.min(width);

    format!("{}{}", "◀".repeat(low_width), "▶".repeat(width - low_width))
}

/// Format a correct/incorrect flag
#[must_use]
pub const fn verdict(correct: bool) -> &'static str {
    if correct { "yes" } else { "no" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guess_bar_empty() {
        assert_eq!(guess_bar(0, 0, 4), "····");
    }

    #[test]
    fn guess_bar_all_low() {
        assert_eq!(guess_bar(3, 0, 5), "◀◀◀◀◀");
    }

    #[test]
    fn guess_bar_all_high() {
        assert_eq!(guess_bar(0, 2, 5), "▶▶▶▶▶");
    }

    #[test]
    fn guess_bar_even_split() {
        assert_eq!(guess_bar(2, 2, 10), "◀◀◀◀◀▶▶▶▶▶");
    }

    #[test]
    fn verdict_words() {
        assert_eq!(verdict(true), "yes");
        assert_eq!(verdict(false), "no");
    }
}
