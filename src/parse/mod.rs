pub mod build;
pub mod ids;
pub mod split;
pub mod tokenize;
pub mod types;
pub mod wire;

pub use build::Builder;
pub use ids::{IdGenerator, SequentialIds, UuidIds};
pub use split::subcommands;
pub use tokenize::{args, input, name, output, parts};
pub use types::{Command, Fragment, Operator};
pub use wire::wire;

use crate::error::ParseError;

/// Compound command parser: split, build, then wire.
pub struct Parser {
    ids: Box<dyn IdGenerator>,
}

impl Default for Parser {
    fn default() -> Self {
        Self::with_ids(UuidIds)
    }
}

impl Parser {
    /// Parser that assigns UUID v4 identifiers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parser that draws identifiers from `ids`.
    pub fn with_ids(ids: impl IdGenerator + 'static) -> Self {
        Self { ids: Box::new(ids) }
    }

    /// Parse a continuation-free command line into a linked command list.
    ///
    /// The list keeps input order and includes operator entities. Any
    /// malformed redirection or dangling pipe fails the whole parse.
    pub fn parse(&self, command: &str) -> Result<Vec<Command>, ParseError> {
        let builder = Builder::new(self.ids.as_ref());
        let commands = subcommands(command)
            .iter()
            .map(|fragment| {
                log::trace!("fragment: {fragment:?}");
                builder.fragment(fragment)
            })
            .collect::<Result<Vec<_>, _>>()?;
        wire(commands)
    }
}
