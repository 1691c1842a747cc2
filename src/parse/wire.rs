use super::types::{Command, Operator};
use crate::error::ParseError;

/// Link a built command list.
///
/// Every command without an output gets its own id as output. The command
/// after each pipe gets the id of the command before the pipe as input,
/// unless it already redirects input from a file.
///
/// A pipe must sit between two real commands; anything else is a
/// [`ParseError::DanglingPipe`].
pub fn wire(mut commands: Vec<Command>) -> Result<Vec<Command>, ParseError> {
    for k in 0..commands.len() {
        if commands[k].output.is_none() {
            commands[k].output = Some(commands[k].id.clone());
        }

        if !commands[k].is_operator(Operator::Pipe) {
            continue;
        }

        let upstream = k
            .checked_sub(1)
            .and_then(|p| commands.get(p))
            .filter(|c| c.is_real())
            .map(|c| c.id.clone());
        let downstream_ok = commands.get(k + 1).is_some_and(Command::is_real);

        let (Some(upstream), true) = (upstream, downstream_ok) else {
            return Err(ParseError::DanglingPipe { position: k });
        };

        let next = &mut commands[k + 1];
        if next.input.is_none() {
            log::debug!("wire: {} ({}) <- {}", next.name, next.id, upstream);
            next.input = Some(upstream);
        }
    }

    Ok(commands)
}
