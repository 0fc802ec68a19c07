//! Lexical analysis for shell input lines.
//!
//! The grammar here is deliberately flat: a token is one whitespace-delimited
//! word. The redirection marker `>`, the parallel separator `&`, and the
//! stream selector `2` are produced as ordinary word tokens; their meaning is
//! assigned later by the engine, not by the lexer.

/// Split one input line into its whitespace-delimited tokens.
///
/// Empty and all-whitespace lines produce an empty sequence. No quoting or
/// escaping is recognized.
pub fn tokenize(line: &str) -> Vec<String> {
    line.split_whitespace().map(str::to_owned).collect()
}

#[cfg(test)]
mod tests {
    use super::tokenize;

    #[test]
    fn splits_on_any_whitespace() {
        assert_eq!(tokenize("ls  -l\t/tmp"), vec!["ls", "-l", "/tmp"]);
    }

    #[test]
    fn empty_and_blank_lines_yield_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t  \n").is_empty());
    }

    #[test]
    fn markers_are_ordinary_tokens() {
        assert_eq!(
            tokenize("echo hi 2 > out & wc"),
            vec!["echo", "hi", "2", ">", "out", "&", "wc"]
        );
    }

    #[test]
    fn attached_markers_are_not_split() {
        // Whitespace-only lexing: `hi>out` stays one word.
        assert_eq!(tokenize("echo hi>out"), vec!["echo", "hi>out"]);
    }
}
