//! mmsh: parse compound command lines into linked command descriptors.
//!
//! Usage:
//!   mmsh -c '<command line>'    parse one line and print the result
//!   mmsh < script               parse every logical line on stdin
//!   mmsh                        interactive prompt
//!
//! Flags:
//!   --json / --pretty           override the configured output format
//!   --dump-config               print the merged configuration and exit

use std::io::IsTerminal;

use clap::Parser as _;

use mmsh::config::{Config, OutputFormat};
use mmsh::error::ShellError;
use mmsh::line::{self, LineSource, Lines, Prompts};
use mmsh::repl::Repl;
use mmsh::{Command, Parser, logging, render};

/// Parse compound command lines into linked command descriptors
#[derive(clap::Parser, Debug)]
#[command(name = "mmsh", version)]
struct Args {
    /// Parse this command line, print the result, and exit
    #[arg(short = 'c', value_name = "COMMAND")]
    command: Option<String>,

    /// Print results as JSON
    #[arg(long, conflicts_with = "pretty")]
    json: bool,

    /// Print results as one line per command
    #[arg(long)]
    pretty: bool,

    /// Print the merged configuration and exit
    #[arg(long)]
    dump_config: bool,
}

impl Args {
    /// Output format requested on the command line, if any.
    fn format(&self) -> Option<OutputFormat> {
        if self.json {
            Some(OutputFormat::Json)
        } else if self.pretty {
            Some(OutputFormat::Pretty)
        } else {
            None
        }
    }
}

/// Parse one logical line and print it. Returns false if parsing failed.
fn run_line(parser: &Parser, config: &Config, text: &str) -> Result<bool, ShellError> {
    let result = parser.parse(text);
    logging::log_parse(text, &result);

    let commands = match result {
        Ok(commands) => commands,
        Err(e) => {
            eprintln!("mmsh: {e}");
            return Ok(false);
        }
    };

    let shown: Vec<Command> = if config.output.real_only {
        commands.into_iter().filter(Command::is_real).collect()
    } else {
        commands
    };

    match config.output.format {
        OutputFormat::Json => println!("{}", serde_json::to_string(&shown)?),
        OutputFormat::Pretty => println!("{}", render::describe(&shown)),
    }
    Ok(true)
}

/// Read logical lines from `source` until end of input, parsing each.
fn run_source<S>(source: &mut S, parser: &Parser, config: &Config) -> Result<bool, ShellError>
where
    S: LineSource,
    ShellError: From<S::Error>,
{
    let prompts = Prompts {
        primary: &config.settings.prompt,
        continuation: &config.settings.continuation_prompt,
    };
    let mut all_ok = true;
    loop {
        let text = match line::read_logical(source, prompts) {
            Ok(Some(text)) => text,
            Ok(None) => break,
            Err(e) => match ShellError::from(e) {
                ShellError::Interrupted => continue,
                e => return Err(e),
            },
        };
        let text = text.trim();
        if text.is_empty() {
            continue;
        }
        if text == "exit" {
            break;
        }
        all_ok &= run_line(parser, config, text)?;
    }
    Ok(all_ok)
}

fn run(opts: Args) -> Result<bool, ShellError> {
    let mut config = Config::load();
    if let Some(format) = opts.format() {
        config.output.format = format;
    }

    if opts.dump_config {
        match config.to_toml() {
            Ok(text) => print!("{text}"),
            Err(e) => {
                eprintln!("mmsh: cannot render config: {e}");
                return Ok(false);
            }
        }
        return Ok(true);
    }

    logging::init(&config);
    let parser = config.parser();

    if let Some(text) = opts.command {
        return run_line(&parser, &config, &text);
    }

    if !std::io::stdin().is_terminal() {
        let mut source = Lines::new(std::io::stdin().lock());
        return run_source(&mut source, &parser, &config);
    }

    let mut repl = Repl::new(&config)?;
    run_source(&mut repl, &parser, &config)?;
    repl.save()?;
    Ok(true)
}

fn main() {
    match run(Args::parse()) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("mmsh: {e}");
            std::process::exit(1);
        }
    }
}
