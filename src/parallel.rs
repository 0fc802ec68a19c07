//! Splitting a line into its `&`-separated parallel group.
//!
//! The splitter only produces the group; the engine executes each
//! sub-command in order, waiting for one to finish before starting the
//! next. That serialized-wait ordering is observable through output
//! interleaving and is preserved deliberately.

/// Split `tokens` at every `&` into sub-command token sequences.
///
/// A trailing separator is optional and stripped. Empty segments — a lone
/// `&`, doubled separators, a leading separator — produce no sub-command.
/// A line that is separators only therefore yields an empty group, which
/// the engine treats as a complete no-op.
pub fn split(tokens: Vec<String>) -> Vec<Vec<String>> {
    let mut group = Vec::new();
    let mut current = Vec::new();
    for token in tokens {
        if token == "&" {
            if !current.is_empty() {
                group.push(std::mem::take(&mut current));
            }
        } else {
            current.push(token);
        }
    }
    if !current.is_empty() {
        group.push(current);
    }
    group
}

#[cfg(test)]
mod tests {
    use super::split;

    fn toks(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn lone_separator_yields_empty_group() {
        assert!(split(toks(&["&"])).is_empty());
        assert!(split(toks(&["&", "&"])).is_empty());
    }

    #[test]
    fn splits_three_sub_commands_in_order() {
        let group = split(toks(&["echo", "a", "&", "echo", "b", "&", "echo", "c"]));
        assert_eq!(
            group,
            vec![toks(&["echo", "a"]), toks(&["echo", "b"]), toks(&["echo", "c"])]
        );
    }

    #[test]
    fn trailing_separator_is_stripped() {
        let group = split(toks(&["ls", "&"]));
        assert_eq!(group, vec![toks(&["ls"])]);
    }

    #[test]
    fn degenerate_boundaries_are_skipped() {
        let group = split(toks(&["&", "echo", "a", "&", "&", "echo", "b"]));
        assert_eq!(group, vec![toks(&["echo", "a"]), toks(&["echo", "b"])]);
    }

    #[test]
    fn line_without_separator_is_one_sub_command() {
        let group = split(toks(&["echo", "hi"]));
        assert_eq!(group, vec![toks(&["echo", "hi"])]);
    }
}
