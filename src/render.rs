use std::collections::HashSet;

use crate::parse::Command;

/// Rebuild command-line text from a parsed command list.
///
/// Stream values that are ids of commands in the list came from wiring and
/// are left out; everything else was a literal redirection and is written
/// back as `< target` or `> target`. Whitespace is normalized to single
/// spaces, so `to_source(parse(s))` parses back to the same shape as `s`.
pub fn to_source(commands: &[Command]) -> String {
    let ids: HashSet<&str> = commands.iter().map(|c| c.id.as_str()).collect();
    let literal = |stream: &Option<String>| {
        stream
            .as_deref()
            .filter(|s| !ids.contains(s))
            .map(str::to_string)
    };

    let mut words: Vec<String> = Vec::new();
    for c in commands {
        if c.operator.is_some() {
            words.push(c.name.clone());
            continue;
        }
        for w in [&c.name, &c.args] {
            if !w.is_empty() {
                words.push(w.clone());
            }
        }
        if let Some(input) = literal(&c.input) {
            words.push(format!("< {input}"));
        }
        if let Some(output) = literal(&c.output) {
            words.push(format!("> {output}"));
        }
    }
    words.join(" ")
}

/// One human-readable line per command.
pub fn describe(commands: &[Command]) -> String {
    commands
        .iter()
        .map(|c| {
            let mut line = format!("{}  {}", c.id, c.name);
            if !c.args.is_empty() {
                line.push(' ');
                line.push_str(&c.args);
            }
            if let Some(input) = &c.input {
                line.push_str(&format!("  < {input}"));
            }
            if let Some(output) = &c.output {
                line.push_str(&format!("  > {output}"));
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}
