mod base;
mod printer;

pub use base::{OptionParser, OptionValues, ParseError, Parsed};
pub use printer::HelpStyle;
