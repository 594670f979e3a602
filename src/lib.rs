//! `declarg` is a declarative command line option parser for Rust.
//!
//! Although other crates provide command line parser functionality, we have found they prioritize different concerns than those we are interested in.
//! It is very possible those crates can be configured to make *our desired* command line parser.
//! We built `declarg` to create our desired style of command line parser "out of the box".
//! Specifically, `declarg` attempts to prioritize the following design concerns:
//! * *Specification-first configuration*:
//! The entire command line surface is one ordered list of [`OptionSpec`] values; the parser and the help text are both derived from it, so they can never drift apart.
//! * *Layered resolution*:
//! Every option resolves through the same precedence - default value, then environment variable, then command line - and reports whether it resolved at all via [`OptionValue::is_defined`].
//! * *Forgiving authoring, strict input*:
//! Mistakes in the specifications themselves (conflicting names, misapplied qualifiers) are collected as warnings so the author sees them all in one run; mistakes in the actual input fail fast with a single descriptive message.
//! * *Detailed yet basic UX*:
//! The help and error output of the Cli should be very detailed, leaving no ambiguity in how to use the program.
//! However, we do not aim to support rich display configurations, such as colour output, shell completions, etc.
//! * *Reasonable performance*:
//! The command line parser should be *fast enough*.
//! To be clear, we are of the opinion that the cost of argument parsing is insignificant with respect to any non-trivial program.
//!
//! # Usage
//! Build the specifications, construct the [`OptionParser`], and `process` the argument vector:
//!
//! ```
//! use declarg::{HelpStyle, OptionParser, OptionSpec};
//!
//! let parser = OptionParser::new(vec![
//!     OptionSpec::string("colour", Some('c'), "The widget colour.", true),
//!     OptionSpec::integer("number", Some('n'), "Number of widgets.", false)
//!         .int_range(1, 20)
//!         .default_int(4)
//!         .env_var("NUMBER_OF_WIDGETS"),
//!     OptionSpec::help(),
//! ]);
//!
//! let arguments: Vec<String> = std::env::args().collect();
//! # let arguments: Vec<String> = vec!["widgets".to_string(), "-c".to_string(), "blue".to_string()];
//! match parser.process(&arguments, true) {
//!     Ok(parsed) => {
//!         if parsed.values().get("help").flag {
//!             print!("{}", parser.option_help(&HelpStyle::default()));
//!             return;
//!         }
//!
//!         let colour = parsed.values().get("colour");
//!         let number = parsed.values().get("number");
//!         println!("{} {} widgets", number.ival, colour.str);
//!         println!("parameters: {:?}", parsed.parameters());
//!     }
//!     Err(error) => {
//!         eprintln!("error: {error}");
//!         eprint!("{}", parser.option_help(&HelpStyle::default()));
//!         # panic!("unexpected: {error}");
//!         // std::process::exit(2);
//!     }
//! }
//! ```
//!
//! # Options
//! Each [`OptionSpec`] is one of five kinds ([`OptionKind`]): a `Flag` switch,
//! a free-form `Str`, a closed `Enum` set, a range-checkable `Int`, or a
//! range-checkable `Real`.
//! Options are matched by long name (`--number value`) or by single-character
//! short name (`-n value`); each option is single-valued and may be given at
//! most once.
//!
//! Qualifiers chain by value, each returning a new specification: a default,
//! a numeric range, and an environment variable fallback may each be applied
//! at most once.
//! An incompatible or repeated qualifier is dropped with a warning
//! ([`OptionParser::warnings`]) rather than failing construction.
//!
//! # Parameters
//! Tokens not consumed as options are returned as positional parameters, in
//! order, unparsed: the first bare token switches processing into parameter
//! mode, as does the `--` terminator (useful when a leading parameter "looks
//! like" an option).
//!
//! # Singletons
//! The pre-defined [`OptionSpec::help`] and [`OptionSpec::version`] flags are
//! *singletons*: recognizing one on the command line reports success
//! immediately, even when required options are absent.
//! Custom singleton flags can be made via [`OptionSpec::flag`].
//!
//! # Features
//! * `tracing_debug`: For debug lines over the [tracing](https://docs.rs/tracing/latest/tracing/) crate.
#![deny(missing_docs)]
mod api;
mod constant;
pub mod convert;
mod matcher;
mod model;
mod parser;

pub use api::OptionSpec;
pub use model::{OptionKind, OptionValue};
pub use parser::{HelpStyle, OptionParser, OptionValues, ParseError, Parsed};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
