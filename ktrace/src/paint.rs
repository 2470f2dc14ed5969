//! Display-side transforms for resolved backtrace lines.

use crossterm::style::Stylize;

/// How many trailing path segments get highlighted.
const TAIL_SEGMENTS: usize = 2;

/// Innermost-frame-last display order.
///
/// addr2line prints frames in input order; the backtrace reads better
/// bottom-up, so the whole batch is reversed for display.
#[must_use]
pub fn display_order(mut lines: Vec<String>) -> Vec<String> {
    lines.reverse();
    lines
}

/// Re-emit a location line with its final two `/`-segments in red.
///
/// A line with fewer than two segments has every segment it does have
/// highlighted; other segments pass through untouched and the separators
/// are preserved.
#[must_use]
pub fn highlight_tail(line: &str) -> String {
    let parts: Vec<&str> = line.split('/').collect();
    let first_hot = parts.len().saturating_sub(TAIL_SEGMENTS);

    parts
        .iter()
        .enumerate()
        .map(|(i, part)| {
            if i >= first_hot {
                format!("{}", (*part).red())
            } else {
                (*part).to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red(s: &str) -> String {
        format!("{}", s.red())
    }

    #[test]
    fn exactly_the_last_two_segments_are_highlighted() {
        let line = "/home/kos/src/kernel/trap.rs:42";
        let expected = format!(
            "/home/kos/src/{}/{}",
            red("kernel"),
            red("trap.rs:42")
        );
        assert_eq!(highlight_tail(line), expected);
    }

    #[test]
    fn two_segment_lines_are_fully_highlighted() {
        let line = "src/main.rs:7";
        assert_eq!(highlight_tail(line), format!("{}/{}", red("src"), red("main.rs:7")));
    }

    #[test]
    fn separator_free_lines_are_fully_highlighted() {
        assert_eq!(highlight_tail("??:0"), red("??:0"));
    }

    #[test]
    fn display_order_is_its_own_inverse() {
        let lines: Vec<String> = (0..5).map(|i| format!("frame-{i}")).collect();
        assert_eq!(display_order(display_order(lines.clone())), lines);
    }

    #[test]
    fn highlighting_preserves_line_count() {
        let lines: Vec<String> =
            (0..4).map(|i| format!("src/mod{i}/file{i}.rs:{i}")).collect();
        let painted: Vec<String> = display_order(lines.clone())
            .iter()
            .map(|l| highlight_tail(l))
            .collect();
        assert_eq!(painted.len(), lines.len());
    }
}
