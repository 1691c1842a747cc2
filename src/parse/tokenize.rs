use crate::error::ParseError;

/// Input redirection marker.
pub const INPUT_MARKER: &str = "<";
/// Output redirection marker.
pub const OUTPUT_MARKER: &str = ">";

/// Split a single command into word tokens, with `<` and `>` as tokens of
/// their own.
///
/// ```
/// # use mmsh::parse::parts;
/// assert_eq!(
///     parts("foo bar1 bar2 < baz > fizz"),
///     vec!["foo", "bar1", "bar2", "<", "baz", ">", "fizz"],
/// );
/// ```
pub fn parts(command: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut segment = String::new();

    for c in command.chars() {
        if c == '<' || c == '>' {
            push_words(&mut tokens, &segment);
            segment.clear();
            tokens.push(c.to_string());
        } else {
            segment.push(c);
        }
    }
    push_words(&mut tokens, &segment);

    tokens
}

fn push_words(tokens: &mut Vec<String>, segment: &str) {
    tokens.extend(segment.split_whitespace().map(String::from));
}

fn is_marker(token: &str) -> bool {
    token == INPUT_MARKER || token == OUTPUT_MARKER
}

/// The command name: the first token, or empty.
pub fn name(parts: &[String]) -> String {
    parts.first().cloned().unwrap_or_default()
}

/// Tokens between the name and the earliest redirection marker, joined by
/// single spaces.
pub fn args(parts: &[String]) -> String {
    let cut = parts
        .iter()
        .position(|p| is_marker(p))
        .unwrap_or(parts.len());
    if cut <= 1 {
        return String::new();
    }
    parts[1..cut].join(" ")
}

/// The target following the first `<`, if any.
pub fn input(parts: &[String]) -> Result<Option<String>, ParseError> {
    target(parts, INPUT_MARKER)
}

/// The target following the first `>`, if any.
pub fn output(parts: &[String]) -> Result<Option<String>, ParseError> {
    target(parts, OUTPUT_MARKER)
}

fn target(parts: &[String], marker: &str) -> Result<Option<String>, ParseError> {
    let Some(idx) = parts.iter().position(|p| p == marker) else {
        return Ok(None);
    };
    match parts.get(idx + 1) {
        Some(t) => Ok(Some(t.clone())),
        None => Err(ParseError::MalformedRedirection {
            marker: marker.chars().next().unwrap_or('?'),
            fragment: parts.join(" "),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(command: &str) -> Vec<String> {
        parts(command)
    }

    #[test]
    fn parts_full_command() {
        assert_eq!(
            toks("foo bar1 bar2 bar3 < baz > fizz"),
            vec!["foo", "bar1", "bar2", "bar3", "<", "baz", ">", "fizz"]
        );
    }

    #[test]
    fn parts_markers_without_spaces() {
        assert_eq!(toks("sort<in.txt>out.txt"), vec!["sort", "<", "in.txt", ">", "out.txt"]);
    }

    #[test]
    fn parts_operator_fragment() {
        assert_eq!(toks("|"), vec!["|"]);
    }

    #[test]
    fn parts_empty() {
        assert!(toks("   ").is_empty());
    }

    #[test]
    fn name_first_token() {
        assert_eq!(name(&toks("ls -la")), "ls");
    }

    #[test]
    fn name_empty() {
        assert_eq!(name(&[]), "");
    }

    #[test]
    fn args_until_first_marker() {
        assert_eq!(args(&toks("foo a b > out < in")), "a b");
    }

    #[test]
    fn args_without_markers() {
        assert_eq!(args(&toks("echo hello   world")), "hello world");
    }

    #[test]
    fn args_none() {
        assert_eq!(args(&toks("pwd")), "");
        assert_eq!(args(&toks("cat < file")), "");
        assert_eq!(args(&[]), "");
    }

    #[test]
    fn input_present() {
        assert_eq!(input(&toks("baz < fizz.txt")).unwrap(), Some("fizz.txt".into()));
    }

    #[test]
    fn input_absent() {
        assert_eq!(input(&toks("baz > fizz.txt")).unwrap(), None);
    }

    #[test]
    fn output_present() {
        assert_eq!(output(&toks("ls > listing")).unwrap(), Some("listing".into()));
    }

    #[test]
    fn first_marker_wins() {
        assert_eq!(output(&toks("x > a > b")).unwrap(), Some("a".into()));
    }

    #[test]
    fn trailing_marker_is_malformed() {
        let err = input(&toks("foo <")).unwrap_err();
        assert_eq!(
            err,
            ParseError::MalformedRedirection {
                marker: '<',
                fragment: "foo <".into(),
            }
        );
        assert!(matches!(
            output(&toks("foo >")),
            Err(ParseError::MalformedRedirection { marker: '>', .. })
        ));
    }

    #[test]
    fn marker_right_after_marker_is_a_target() {
        let parts = toks("foo < > bar");
        assert_eq!(input(&parts).unwrap(), Some(">".into()));
        assert_eq!(output(&parts).unwrap(), Some("bar".into()));
        assert_eq!(args(&parts), "");
    }
}
