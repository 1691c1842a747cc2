use super::types::{Fragment, Operator};

/// Split a compound command at control operators (&&, *, |, ;).
///
/// Operators are kept as their own fragments. Command text is trimmed and
/// never dropped, so a leading, trailing, or doubled operator leaves an
/// empty command fragment next to it.
///
/// No quote handling: `echo 'a | b'` splits at the `|`.
pub fn subcommands(command: &str) -> Vec<Fragment> {
    let mut fragments = Vec::new();
    let mut buf = String::new();

    let chars: Vec<char> = command.chars().collect();
    let len = chars.len();
    let mut i = 0;

    while i < len {
        let c = chars[i];

        // Two-char operator
        if c == '&' && i + 1 < len && chars[i + 1] == '&' {
            flush(&mut fragments, &mut buf);
            fragments.push(Fragment::Operator(Operator::And));
            i += 2;
            continue;
        }

        // Single-char operators
        let op = match c {
            '*' => Some(Operator::Star),
            '|' => Some(Operator::Pipe),
            ';' => Some(Operator::Semi),
            _ => None,
        };
        if let Some(op) = op {
            flush(&mut fragments, &mut buf);
            fragments.push(Fragment::Operator(op));
            i += 1;
            continue;
        }

        buf.push(c);
        i += 1;
    }

    flush(&mut fragments, &mut buf);
    fragments
}

fn flush(fragments: &mut Vec<Fragment>, buf: &mut String) {
    fragments.push(Fragment::Command(buf.trim().to_string()));
    buf.clear();
}
