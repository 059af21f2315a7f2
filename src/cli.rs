//! Command line adapter.
//!
//! Turns one line of user input into a calculator call and renders the
//! result. Used both for one-shot arguments and for the interactive prompt.

use crate::config::OutputFormat;
use crate::input::{parse_host_count, parse_octet};
use crate::models::{AddressClassification, BitBreakdown, SubnetPlan};
use crate::{output, TutorError};
use lazy_static::lazy_static;
use regex::Regex;

/// Usage and description of every command, in help order.
pub const COMMANDS: [(&str, &str); 5] = [
    ("hosts <count>", "size the smallest subnet holding <count> hosts"),
    ("ip <address>", "validate and classify a dotted-decimal IPv4 address"),
    ("bin <0-255>", "show the binary breakdown of one octet"),
    ("help", "show this list"),
    ("quit", "leave the prompt"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hosts(String),
    Ip(String),
    Bin(String),
    Help,
    Quit,
}

/// Result of executing a command, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Plan(SubnetPlan),
    Classification(AddressClassification),
    Breakdown(BitBreakdown),
    Help,
    Quit,
}

/// What the caller should do with a processed line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print to stdout.
    Text(String),
    /// Print as an error; the session continues.
    Failure(String),
    Quit,
    /// Blank line, nothing to show.
    Nothing,
}

lazy_static! {
    static ref WORD_RE: Regex =
        Regex::new(r#"'([^']*)'\s*|"([^"]*)"\s*|([^'\s]*)\s*"#).expect("Invalid Regex?");
}

/// Split on whitespace, keeping 'quoted sub' strings together.
fn split_words(line: &str) -> Vec<&str> {
    WORD_RE
        .find_iter(line)
        .map(|m| m.as_str().trim().trim_matches('\'').trim_matches('"'))
        .filter(|w| !w.is_empty())
        .collect()
}

/// Parse a command line. Blank lines give `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Command>, TutorError> {
    let words = split_words(line);
    log::trace!("split words={:?}", words);
    let Some((name, args)) = words.split_first() else {
        return Ok(None);
    };
    if args.len() > 1 {
        log::debug!("Ignoring extra arguments for {name}: {:?}", &args[1..]);
    }

    let name = name.to_ascii_lowercase();
    let argument = |wanted: &'static str| {
        args.first()
            .map(|a| a.to_string())
            .ok_or_else(|| TutorError::MissingArgument {
                command: name.clone(),
                argument: wanted,
            })
    };
    let command = match name.as_str() {
        "hosts" | "h" => Command::Hosts(argument("a host count")?),
        "ip" | "classify" => Command::Ip(argument("an IPv4 address")?),
        "bin" | "binary" => Command::Bin(argument("a number between 0 and 255")?),
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        _ => return Err(TutorError::UnknownCommand(name.clone())),
    };
    Ok(Some(command))
}

/// Run a parsed command against the calculators.
pub fn execute(command: Command) -> Result<Outcome, TutorError> {
    log::info!("execute {:?}", command);
    let outcome = match command {
        Command::Hosts(raw) => Outcome::Plan(crate::plan(parse_host_count(&raw)?)),
        Command::Ip(raw) => Outcome::Classification(crate::classify(raw.trim())),
        Command::Bin(raw) => Outcome::Breakdown(crate::breakdown(parse_octet(&raw)?)),
        Command::Help => Outcome::Help,
        Command::Quit => Outcome::Quit,
    };
    Ok(outcome)
}

/// Render an outcome in the configured format.
pub fn render(outcome: &Outcome, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(match outcome {
            Outcome::Plan(plan) => output::render_plan(plan),
            Outcome::Classification(c) => output::render_classification(c),
            Outcome::Breakdown(b) => output::render_breakdown(b),
            Outcome::Help => output::render_help(&COMMANDS),
            Outcome::Quit => String::new(),
        }),
        OutputFormat::Json => match outcome {
            Outcome::Plan(plan) => output::to_json(plan),
            Outcome::Classification(c) => output::to_json(c),
            Outcome::Breakdown(b) => output::to_json(b),
            Outcome::Help => output::help_json(&COMMANDS),
            Outcome::Quit => Ok(String::new()),
        },
    }
}

fn render_failure(err: &TutorError, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => output::render_error(err),
        OutputFormat::Json => output::error_json(err).unwrap_or_else(|e| e.to_string()),
    }
}

/// Parse, execute and render one line of input.
///
/// Input mistakes come back as [`Reply::Failure`]; they never end a session.
pub fn handle_line(line: &str, format: OutputFormat) -> Reply {
    let command = match parse_command(line) {
        Ok(Some(command)) => command,
        Ok(None) => return Reply::Nothing,
        Err(e) => {
            log::info!("bad command: {}", e);
            return Reply::Failure(render_failure(&e, format));
        }
    };

    let outcome = match execute(command) {
        Ok(Outcome::Quit) => return Reply::Quit,
        Ok(outcome) => outcome,
        Err(e) => {
            log::info!("bad input: {}", e);
            return Reply::Failure(render_failure(&e, format));
        }
    };

    if let Outcome::Classification(AddressClassification::Invalid { reason }) = &outcome {
        log::info!("invalid address: {reason}");
    }
    match render(&outcome, format) {
        Ok(text) => Reply::Text(text),
        Err(e) => {
            log::error!("Error rendering {:?}: {}", outcome, e);
            Reply::Failure(e.to_string())
        }
    }
}
