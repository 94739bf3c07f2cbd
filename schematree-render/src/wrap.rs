//! Description block formatting.

/// Indentation added per depth level.
pub const INDENT: &str = "  ";

/// Total line width of a description block at depth 0.
pub const WRAP_WIDTH: usize = 70;

/// Marker between the indentation and the description text.
const COMMENT_MARKER: &str = "  # ";

/// Format a node description as comment lines for a node at `depth`.
///
/// Whitespace runs collapse to single spaces, and lines are wrapped so that
/// prefix plus text fit in `70 - 2 * depth` columns. A blank description
/// yields no lines.
pub fn description_lines(description: &str, depth: usize) -> Vec<String> {
    let prefix = format!("{}{}", INDENT.repeat(depth), COMMENT_MARKER);
    let width = WRAP_WIDTH.saturating_sub(INDENT.len() * depth);
    wrap(description, width, &prefix)
}

/// Greedy word wrap. Every line starts with `prefix` and is at most `width`
/// characters long, counting the prefix; at least one character of text fits
/// on each line however narrow `width` gets.
///
/// Lines break only at whitespace. A word longer than a line is cut at the
/// line width, hyphens included, rather than at a hyphen.
pub fn wrap(text: &str, width: usize, prefix: &str) -> Vec<String> {
    let avail = width.saturating_sub(prefix.chars().count()).max(1);

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if current_len > 0 && current_len + 1 + word_len <= avail {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
            continue;
        }

        if current_len > 0 {
            lines.push(std::mem::take(&mut current));
        }

        let chars: Vec<char> = word.chars().collect();
        let mut pieces: Vec<String> = chars.chunks(avail).map(|c| c.iter().collect()).collect();
        current = pieces.pop().unwrap_or_default();
        current_len = current.chars().count();
        lines.extend(pieces);
    }

    if current_len > 0 {
        lines.push(current);
    }

    lines
        .into_iter()
        .map(|line| format!("{}{}", prefix, line))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_fits_on_one_line() {
        assert_eq!(wrap("short text", 20, ""), ["short text"]);
    }

    #[test]
    fn test_wrap_breaks_between_words() {
        assert_eq!(wrap("aaa bbb ccc", 7, ""), ["aaa bbb", "ccc"]);
    }

    #[test]
    fn test_wrap_counts_prefix() {
        assert_eq!(wrap("one two", 10, "  # "), ["  # one", "  # two"]);
        assert_eq!(wrap("one two", 11, "  # "), ["  # one two"]);
    }

    #[test]
    fn test_wrap_splits_long_words() {
        assert_eq!(wrap("abcdefghij", 4, ""), ["abcd", "efgh", "ij"]);
        assert_eq!(wrap("x abcdefghij y", 4, ""), ["x", "abcd", "efgh", "ij y"]);
    }

    #[test]
    fn test_wrap_does_not_break_at_hyphens() {
        assert_eq!(wrap("use state-of-the-art", 9, ""), ["use", "state-of-", "the-art"]);
        assert_eq!(wrap("state-of-the-art", 6, ""), ["state-", "of-the", "-art"]);
    }

    #[test]
    fn test_wrap_never_stalls_on_narrow_width() {
        assert_eq!(wrap("ab", 2, "####"), ["####a", "####b"]);
    }

    #[test]
    fn test_wrap_empty() {
        assert!(wrap("", 10, "# ").is_empty());
        assert!(wrap(" \n\t ", 10, "# ").is_empty());
    }

    #[test]
    fn test_description_collapses_whitespace() {
        assert_eq!(
            description_lines("Operational\n   state  of\tthe port", 0),
            ["  # Operational state of the port"]
        );
    }

    #[test]
    fn test_description_indented_by_depth() {
        assert_eq!(description_lines("Port speed", 2), ["      # Port speed"]);
    }

    #[test]
    fn test_description_width_shrinks_with_depth() {
        let text = "word ".repeat(40);

        for depth in [0, 1, 5] {
            let lines = description_lines(&text, depth);
            assert!(lines.len() > 1);
            for line in &lines {
                assert!(line.len() <= 70 - 2 * depth, "{line:?} too long at {depth}");
                assert!(line.starts_with(&format!("{}  # ", "  ".repeat(depth))));
            }
        }
    }

    #[test]
    fn test_description_fills_lines_greedily() {
        // Thirteen words take 64 of the 66 text columns at depth 0.
        let lines = description_lines(&"word ".repeat(14), 0);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], format!("  # {}", ["word"; 13].join(" ")));
        assert_eq!(lines[1], "  # word");
    }
}
