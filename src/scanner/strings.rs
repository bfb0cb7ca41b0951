//! String-literal extractor.

/// Scanner positions while collecting double-quoted literals.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
enum LexState {
    /// Ordinary code.
    #[default]
    Code,
    /// One slash seen; `/` turns it into a comment, anything else is
    /// consumed and scanning resumes as code.
    Slash,
    /// Inside a `//` comment, until the newline.
    Comment,
    /// Inside a double-quoted literal, buffering its contents.
    Str,
    /// Backslash seen inside a literal; the next character is taken
    /// verbatim.
    Escape,
}

/// Incremental extractor for double-quoted string literals.
///
/// Feed characters one at a time; each completed literal is returned as
/// it closes. Quotes inside `//` comments are ignored, `\x` escapes
/// append `x` verbatim, and a literal still open at end of input is
/// discarded.
///
/// # Example
///
/// ```rust
/// use vendo::scanner::StringScanner;
///
/// let mut scanner = StringScanner::new();
/// let emitted: Vec<String> = r#"say("hi");"#
///     .chars()
///     .filter_map(|ch| scanner.feed(ch))
///     .collect();
///
/// assert_eq!(emitted, vec!["hi"]);
/// ```
#[derive(Debug, Default)]
pub struct StringScanner {
    state: LexState,
    buffer: String,
}

impl StringScanner {
    /// Create a scanner at the start of code.
    pub fn new() -> Self {
        Self {
            state: LexState::Code,
            buffer: String::new(),
        }
    }

    /// Consume one character, returning a literal if one just closed.
    pub fn feed(&mut self, ch: char) -> Option<String> {
        let mut emitted = None;

        self.state = match (self.state, ch) {
            (LexState::Code, '/') => LexState::Slash,
            (LexState::Code, '"') => {
                self.buffer.clear();
                LexState::Str
            }
            (LexState::Code, _) => LexState::Code,

            (LexState::Slash, '/') => LexState::Comment,
            // The character deciding against a comment is consumed here,
            // quotes included.
            (LexState::Slash, _) => LexState::Code,

            (LexState::Comment, '\n') => LexState::Code,
            (LexState::Comment, _) => LexState::Comment,

            (LexState::Str, '\\') => LexState::Escape,
            (LexState::Str, '"') => {
                emitted = Some(std::mem::take(&mut self.buffer));
                LexState::Code
            }
            (LexState::Str, _) => {
                self.buffer.push(ch);
                LexState::Str
            }

            (LexState::Escape, _) => {
                self.buffer.push(ch);
                LexState::Str
            }
        };

        emitted
    }
}

/// Collect every completed string literal in `code`.
///
/// # Example
///
/// ```rust
/// use vendo::scanner::extract_strings;
///
/// let strings = extract_strings(r#"a = "one"; b = "two";"#);
/// assert_eq!(strings, vec!["one", "two"]);
/// ```
pub fn extract_strings(code: &str) -> Vec<String> {
    let mut scanner = StringScanner::new();
    code.chars().filter_map(|ch| scanner.feed(ch)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_a_simple_literal() {
        assert_eq!(extract_strings(r#"x = "abc";"#), vec!["abc"]);
    }

    #[test]
    fn extracts_literals_in_order() {
        assert_eq!(extract_strings(r#""a" + "b" + "c""#), vec!["a", "b", "c"]);
    }

    #[test]
    fn escaped_quote_stays_inside_the_literal() {
        assert_eq!(
            extract_strings(r#"t = "hi \"there\"";"#),
            vec![r#"hi "there""#]
        );
    }

    #[test]
    fn escape_appends_the_next_character_verbatim() {
        assert_eq!(extract_strings(r#""a\\b""#), vec![r"a\b"]);
        assert_eq!(extract_strings(r#""a\nb""#), vec!["anb"]);
    }

    #[test]
    fn comment_quotes_are_ignored() {
        let code = "// \"not a string\" \n char t[] = \"real\";";
        assert_eq!(extract_strings(code), vec!["real"]);
    }

    #[test]
    fn unterminated_literal_is_discarded() {
        assert_eq!(extract_strings(r#"x = "abc"#), Vec::<String>::new());
    }

    #[test]
    fn quote_right_after_a_lone_slash_is_consumed() {
        // The slash state consumes its decider, so this quote never
        // opens a literal and the later one is left unterminated.
        assert_eq!(extract_strings(r#"/"ab""#), Vec::<String>::new());
    }

    #[test]
    fn empty_literal_is_emitted() {
        assert_eq!(extract_strings(r#"s = "";"#), vec![""]);
    }

    #[test]
    fn scanner_can_be_fed_across_chunks() {
        let mut scanner = StringScanner::new();
        assert_eq!(scanner.feed('"'), None);
        assert_eq!(scanner.feed('h'), None);
        assert_eq!(scanner.feed('i'), None);
        assert_eq!(scanner.feed('"'), Some("hi".to_string()));
    }
}
