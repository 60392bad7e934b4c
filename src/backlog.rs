//! Task backlog extraction
//!
//! Pulls checkbox lines and `> [!todo]` callout blocks out of a journal
//! note. This is plain line matching, not markdown parsing: a marker inside
//! a code block counts like any other.

use serde::Serialize;

use crate::constants as C;

/// Tasks carried over from a journal note
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Backlog {
    /// Open checkbox lines followed by todo callout blocks
    pub todo: Vec<String>,
    /// Completed checkbox lines
    pub done: Vec<String>,
}

impl Backlog {
    /// True when neither list has entries
    pub fn is_empty(&self) -> bool {
        self.todo.is_empty() && self.done.is_empty()
    }

    /// Total number of entries across both lists
    pub fn len(&self) -> usize {
        self.todo.len() + self.done.len()
    }
}

/// Extract open tasks, completed tasks and todo callouts from note text.
///
/// Marker lines keep their source order and are never deduplicated, so a
/// line holding both markers shows up in both lists. Each callout block is
/// one `todo` entry made of its lines joined with `\n`, trailing newline
/// included, appended after all open marker lines.
pub fn extract(text: &str) -> Backlog {
    if text.is_empty() {
        return Backlog::default();
    }

    let lines: Vec<&str> = text.split(C::NEWLINE).collect();

    let done: Vec<String> = lines
        .iter()
        .filter(|line| line.contains(C::TASK_MARKER_DONE))
        .map(|line| line.to_string())
        .collect();
    let mut todo: Vec<String> = lines
        .iter()
        .filter(|line| line.contains(C::TASK_MARKER_OPEN))
        .map(|line| line.to_string())
        .collect();

    let mut i = 0;
    while i < lines.len() {
        if !is_callout_start(lines[i]) {
            i += 1;
            continue;
        }

        let mut block = String::new();
        block.push_str(lines[i]);
        block.push_str(C::NEWLINE);
        i += 1;
        while i < lines.len() && lines[i].starts_with(C::QUOTE_PREFIX) {
            block.push_str(lines[i]);
            block.push_str(C::NEWLINE);
            i += 1;
        }
        todo.push(block);
    }

    Backlog { todo, done }
}

/// A callout opens on `> [!todo]`, leading whitespace allowed
fn is_callout_start(line: &str) -> bool {
    line.trim_start().starts_with(C::TODO_CALLOUT_MARKER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_empty() {
        let backlog = extract("");
        assert!(backlog.todo.is_empty());
        assert!(backlog.done.is_empty());
        assert!(backlog.is_empty());
    }

    #[test]
    fn test_extract_markers() {
        let backlog = extract("- [x] a\n- [ ] b\n- [x] c");
        assert_eq!(backlog.done, vec!["- [x] a", "- [x] c"]);
        assert_eq!(backlog.todo, vec!["- [ ] b"]);
        assert_eq!(backlog.len(), 3);
    }

    #[test]
    fn test_extract_callout_block() {
        let backlog = extract("> [!todo] title\n> line2\n> line3\nnot quoted");
        assert_eq!(backlog.todo, vec!["> [!todo] title\n> line2\n> line3\n"]);
        assert!(backlog.done.is_empty());
    }

    #[test]
    fn test_extract_unterminated_callout() {
        let backlog = extract("intro\n> [!todo] open\n> still going");
        assert_eq!(backlog.todo, vec!["> [!todo] open\n> still going\n"]);
    }

    #[test]
    fn test_extract_indented_callout_start() {
        // The opening line may be indented; continuation lines may not
        let backlog = extract("  > [!todo] nested\n> more\n  > not part of it");
        assert_eq!(backlog.todo, vec!["  > [!todo] nested\n> more\n"]);
    }

    #[test]
    fn test_extract_callouts_follow_marker_lines() {
        let text = "> [!todo] first\n> body\n\n- [ ] later task\n> [!todo] second\n- [x] finished";
        let backlog = extract(text);
        assert_eq!(
            backlog.todo,
            vec![
                "- [ ] later task".to_string(),
                "> [!todo] first\n> body\n".to_string(),
                "> [!todo] second\n".to_string(),
            ]
        );
        assert_eq!(backlog.done, vec!["- [x] finished"]);
    }

    #[test]
    fn test_extract_back_to_back_callouts() {
        // A second callout directly after the first is swallowed by it
        let backlog = extract("> [!todo] one\n> [!todo] two\nend");
        assert_eq!(backlog.todo, vec!["> [!todo] one\n> [!todo] two\n"]);
    }

    #[test]
    fn test_extract_other_callouts_ignored() {
        let backlog = extract("> [!note] remember\n> something\n> [!todo]x");
        assert_eq!(backlog.todo, vec!["> [!todo]x\n"]);
    }

    #[test]
    fn test_extract_checkbox_inside_callout_counted_twice() {
        let backlog = extract("> [!todo] week\n> - [ ] inner\n");
        assert_eq!(
            backlog.todo,
            vec!["> - [ ] inner".to_string(), "> [!todo] week\n> - [ ] inner\n".to_string()]
        );
    }

    #[test]
    fn test_extract_line_with_both_markers() {
        let backlog = extract("- [x] done - [ ] open");
        assert_eq!(backlog.done, vec!["- [x] done - [ ] open"]);
        assert_eq!(backlog.todo, vec!["- [x] done - [ ] open"]);
    }

    #[test]
    fn test_extract_duplicates_preserved() {
        let backlog = extract("- [ ] same\n- [ ] same");
        assert_eq!(backlog.todo, vec!["- [ ] same", "- [ ] same"]);
    }

    #[test]
    fn test_extract_substring_match_and_indentation() {
        let backlog = extract("  - [ ] indented\n* - [x] odd bullet\n-[ ] no space");
        assert_eq!(backlog.todo, vec!["  - [ ] indented"]);
        assert_eq!(backlog.done, vec!["* - [x] odd bullet"]);
    }

    #[test]
    fn test_extract_crlf_keeps_carriage_return() {
        assert_eq!(extract("- [ ] a\r\n").todo, vec!["- [ ] a\r"]);
    }

    #[test]
    fn test_extract_plain_text() {
        assert!(extract("# Heading\n\nJust prose.\n").is_empty());
    }
}
