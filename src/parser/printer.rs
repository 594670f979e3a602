use terminal_size::{terminal_size, Width};

use crate::api::{DefaultValue, OptionSpec};
use crate::constant::*;
use crate::convert::{format_int, format_real};
use crate::model::OptionKind;

const TERMINATOR_DESCRIPTION: &str = "The null option indicating no more options. \
    This is useful if/when the initial parameters \"look like\" options.";

/// Presentation settings for the auto-generated help text.
///
/// ### Example
/// ```
/// use declarg::{HelpStyle, OptionParser, OptionSpec};
///
/// let parser = OptionParser::new(vec![OptionSpec::help()]);
/// let help = parser.option_help(&HelpStyle::default().blank_separator(true));
///
/// assert!(help.starts_with("Options:\n"));
/// ```
#[derive(Debug, Clone)]
pub struct HelpStyle {
    width: usize,
    blank_separator: bool,
    describe_terminator: bool,
}

impl Default for HelpStyle {
    fn default() -> Self {
        Self {
            width: DEFAULT_HELP_WIDTH,
            blank_separator: false,
            describe_terminator: false,
        }
    }
}

impl HelpStyle {
    /// A style whose wrap width tracks the attached terminal, when there is
    /// one; otherwise the default width applies.
    pub fn terminal() -> Self {
        match terminal_size() {
            Some((Width(terminal_width), _)) => Self::default().width(terminal_width as usize),
            None => Self::default(),
        }
    }

    /// Set the characters-per-line at which descriptions wrap.
    /// Widths below the minimum of 40 are raised to it.
    pub fn width(mut self, width: usize) -> Self {
        self.width = std::cmp::max(width, MINIMUM_HELP_WIDTH);
        self
    }

    /// Insert a blank line between option blocks.
    pub fn blank_separator(mut self, on: bool) -> Self {
        self.blank_separator = on;
        self
    }

    /// Append a synthetic entry describing the `--` "no more options" marker.
    pub fn describe_terminator(mut self, on: bool) -> Self {
        self.describe_terminator = on;
        self
    }
}

pub(crate) fn render(specs: &[OptionSpec], style: &HelpStyle) -> String {
    let mut out = String::from("Options:\n");

    for spec in specs {
        match spec.description().strip_prefix(LITERAL_MARKER) {
            Some(literal) => out.push_str(&literal_lines(&spec.name(), literal)),
            None => out.push_str(&wrap_block(&spec.name(), spec.description(), style.width)),
        }

        let extra = summary(spec);

        if !extra.is_empty() {
            out.push_str(&wrap_block("", &extra, style.width));
        }

        if style.blank_separator {
            out.push('\n');
        }
    }

    if style.describe_terminator {
        out.push_str(&wrap_block(
            NO_MORE_OPTIONS,
            TERMINATOR_DESCRIPTION,
            style.width,
        ));
    }

    out
}

// One gutter-aligned, word-wrapped block: the name column padded to the gap
// width, the description flowing beside it, continuation lines re-indented.
// A word is appended before the width test, so a line may run past the wrap
// width rather than break mid-word.
fn wrap_block(name: &str, description: &str, width: usize) -> String {
    let gap = " ".repeat(HELP_GAP_WIDTH);
    let mut out = String::default();

    let mut line = format!("{name} ");
    while line.len() < HELP_GAP_WIDTH {
        line.push(' ');
    }

    let mut line_empty = true;

    for word in description.split(' ').filter(|word| !word.is_empty()) {
        if !line_empty {
            line.push(' ');
        }

        line.push_str(word);
        line_empty = false;

        if line.len() >= width {
            out.push_str(&line);
            out.push('\n');
            line = gap.clone();
            line_empty = true;
        }
    }

    if !line_empty {
        out.push_str(&line);
        out.push('\n');
    }

    out
}

// The escape hatch for pre-formatted help (ex: usage banners): split on the
// explicit line breaks and emit verbatim, without re-wrapping.
fn literal_lines(name: &str, description: &str) -> String {
    let gap = " ".repeat(HELP_GAP_WIDTH);
    let mut out = String::default();

    let mut prefix = format!("{name} ");
    while prefix.len() < HELP_GAP_WIDTH {
        prefix.push(' ');
    }

    for part in description.split('\n') {
        out.push_str(&prefix);
        out.push_str(part);
        out.push('\n');
        prefix = gap.clone();
    }

    out
}

// The auto-generated constraint/default/environment-variable summary.
fn summary(spec: &OptionSpec) -> String {
    let mut extra = String::default();

    if spec.is_required() && !spec.is_defaulted() {
        // A defined default always satisfies the requirement.
        extra.push_str("Required. ");
    }

    match spec.kind() {
        OptionKind::Flag => {
            if let Some(env_var) = spec.env_var_name() {
                extra.push_str(&format!(
                    "Use the {env_var} environment variable set to 'Y', 'YES' or '1' to set flag on. "
                ));
            }
        }
        OptionKind::Str => {
            extra.push_str(&default_sentence(spec));
            extra.push_str(&env_var_sentence(spec));
        }
        OptionKind::Enum => {
            extra.push_str(&format!("Allowed values: {}. ", spec.enum_set()));
            extra.push_str(&default_sentence(spec));
            extra.push_str(&env_var_sentence(spec));
        }
        OptionKind::Int | OptionKind::Real => {
            if let Some(range) = spec.range() {
                extra.push_str(&format!("Range: {}. ", range.image()));
            }

            extra.push_str(&default_sentence(spec));
            extra.push_str(&env_var_sentence(spec));
        }
    }

    extra.trim_end().to_string()
}

fn default_sentence(spec: &OptionSpec) -> String {
    match spec.default() {
        Some(DefaultValue::Str(value)) => format!("Default value: '{value}'. "),
        Some(DefaultValue::Int(value)) => format!("Default value: {}. ", format_int(*value)),
        Some(DefaultValue::Real(value)) => format!("Default value: {}. ", format_real(*value)),
        // The implicit flag default is not worth a sentence.
        Some(DefaultValue::Flag) | None => String::default(),
    }
}

fn env_var_sentence(spec: &OptionSpec) -> String {
    match spec.env_var_name() {
        Some(env_var) => {
            let effect = if spec.is_defaulted() {
                "override the default value"
            } else {
                "provide a default value"
            };
            format!("Use the {env_var} environment variable to {effect}. ")
        }
        None => String::default(),
    }
}
