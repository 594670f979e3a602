pub(crate) const HELP_NAME: &str = "help";
pub(crate) const HELP_SHORT: char = 'h';
pub(crate) const HELP_MESSAGE: &str = "Show this message and exit.";

pub(crate) const VERSION_NAME: &str = "version";
pub(crate) const VERSION_SHORT: char = 'V';
pub(crate) const VERSION_MESSAGE: &str = "Show version and exit.";

/// The "no more options" terminator token.
pub(crate) const NO_MORE_OPTIONS: &str = "--";

// The environment variable values which turn a flag option on.
// Anything else leaves the flag off.
pub(crate) const FLAG_TRUTHY: [&str; 3] = ["1", "Y", "YES"];

// A description starting with this marker is emitted verbatim (split on '\n')
// instead of word-wrapped.
pub(crate) const LITERAL_MARKER: char = '!';

// The width of the name gutter in the generated help text.
pub(crate) const HELP_GAP_WIDTH: usize = 20;

pub(crate) const DEFAULT_HELP_WIDTH: usize = 92;
pub(crate) const MINIMUM_HELP_WIDTH: usize = 40;
