//! Division-operator finder.

/// Scanner positions while looking for lone slashes.
#[derive(Clone, Copy, PartialEq, Debug)]
enum SlashState {
    /// Ordinary code.
    Code,
    /// One slash seen; the next character decides what it was.
    Slash,
    /// Inside a `//` comment, until the newline.
    Comment,
}

/// Report the character index of every `/` used as a division operator.
///
/// `//` starts a comment running to the next newline; slashes inside
/// comments are not reported. A slash is only classified once its
/// follower is seen, so a trailing `/` at end of input is never reported.
///
/// # Example
///
/// ```rust
/// use vendo::scanner::find_divisions;
///
/// assert_eq!(find_divisions("x = 1/2; // half / of it"), vec![5]);
/// assert_eq!(find_divisions("// all comment"), Vec::<usize>::new());
/// ```
pub fn find_divisions(code: &str) -> Vec<usize> {
    let mut state = SlashState::Code;
    let mut found = Vec::new();

    for (index, ch) in code.chars().enumerate() {
        state = match (state, ch) {
            (SlashState::Code, '/') => SlashState::Slash,
            (SlashState::Code, _) => SlashState::Code,

            (SlashState::Slash, '/') => SlashState::Comment,
            (SlashState::Slash, _) => {
                found.push(index - 1);
                SlashState::Code
            }

            (SlashState::Comment, '\n') => SlashState::Code,
            (SlashState::Comment, _) => SlashState::Comment,
        };
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_a_lone_division() {
        assert_eq!(find_divisions("a / b"), vec![2]);
    }

    #[test]
    fn finds_every_division() {
        assert_eq!(find_divisions("a/b/c"), vec![1, 3]);
    }

    #[test]
    fn comment_slashes_are_not_divisions() {
        assert_eq!(find_divisions("// a / b"), Vec::<usize>::new());
    }

    #[test]
    fn comment_ends_at_newline() {
        assert_eq!(find_divisions("a // b\nc / d"), vec![9]);
    }

    #[test]
    fn trailing_slash_is_not_reported() {
        assert_eq!(find_divisions("a /"), Vec::<usize>::new());
    }

    #[test]
    fn empty_input_finds_nothing() {
        assert_eq!(find_divisions(""), Vec::<usize>::new());
    }

    #[test]
    fn reports_the_slash_position_itself() {
        let code = "printf(2 / 4);";
        let positions = find_divisions(code);
        assert_eq!(positions, vec![9]);
        assert_eq!(code.chars().nth(9), Some('/'));
    }
}
