use super::ids::IdGenerator;
use super::tokenize;
use super::types::{Command, Fragment};
use crate::error::ParseError;

/// Turns fragments into unlinked [`Command`] values, one id per fragment.
pub struct Builder<'a> {
    ids: &'a dyn IdGenerator,
}

impl<'a> Builder<'a> {
    pub fn new(ids: &'a dyn IdGenerator) -> Self {
        Self { ids }
    }

    /// Build the command for one fragment.
    ///
    /// Operator fragments become degenerate commands named after the
    /// operator. Empty command text yields an empty-name command.
    pub fn fragment(&self, fragment: &Fragment) -> Result<Command, ParseError> {
        match fragment {
            Fragment::Operator(op) => Ok(Command {
                id: self.ids.next_id(),
                name: op.as_str().to_string(),
                args: String::new(),
                input: None,
                output: None,
                operator: Some(*op),
            }),
            Fragment::Command(text) => self.command(text),
        }
    }

    /// Build the command for a single command string.
    pub fn command(&self, text: &str) -> Result<Command, ParseError> {
        let parts = tokenize::parts(text);
        let input = tokenize::input(&parts)?;
        let output = tokenize::output(&parts)?;

        Ok(Command {
            id: self.ids.next_id(),
            name: tokenize::name(&parts),
            args: tokenize::args(&parts),
            input,
            output,
            operator: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::ids::SequentialIds;
    use crate::parse::types::Operator;

    #[test]
    fn command_fields() {
        let ids = SequentialIds::new("b");
        let cmd = Builder::new(&ids).command("baz < fizz.txt").unwrap();
        assert_eq!(
            cmd,
            Command {
                id: "b-1".into(),
                name: "baz".into(),
                args: String::new(),
                input: Some("fizz.txt".into()),
                output: None,
                operator: None,
            }
        );
    }

    #[test]
    fn operator_fragment() {
        let ids = SequentialIds::default();
        let cmd = Builder::new(&ids)
            .fragment(&Fragment::Operator(Operator::And))
            .unwrap();
        assert_eq!(cmd.name, "&&");
        assert_eq!(cmd.args, "");
        assert_eq!(cmd.input, None);
        assert_eq!(cmd.output, None);
        assert!(cmd.is_operator(Operator::And));
        assert!(!cmd.is_real());
    }

    #[test]
    fn empty_fragment_is_accepted() {
        let ids = SequentialIds::default();
        let cmd = Builder::new(&ids)
            .fragment(&Fragment::Command(String::new()))
            .unwrap();
        assert_eq!(cmd.name, "");
        assert!(!cmd.is_real());
    }

    #[test]
    fn each_build_gets_a_fresh_id() {
        let ids = SequentialIds::default();
        let builder = Builder::new(&ids);
        let a = builder.command("ls").unwrap();
        let b = builder.command("ls").unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn malformed_redirection_propagates() {
        let ids = SequentialIds::default();
        assert!(matches!(
            Builder::new(&ids).command("cat >"),
            Err(ParseError::MalformedRedirection { marker: '>', .. })
        ));
    }
}
