use crate::constant::*;
use crate::convert::{format_int, format_real};
use crate::model::OptionKind;

/// The default value attached to a specification, tagged by kind.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum DefaultValue {
    /// Flags always carry an implicit default: off.
    Flag,
    Str(String),
    Int(i64),
    Real(f64),
}

/// An inclusive `[min, max]` constraint on a numeric specification.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ValueRange {
    Int(i64, i64),
    Real(f64, f64),
}

impl ValueRange {
    /// The "min to max" image used in error messages and help text.
    pub(crate) fn image(&self) -> String {
        match self {
            ValueRange::Int(min, max) => {
                format!("{} to {}", format_int(*min), format_int(*max))
            }
            ValueRange::Real(min, max) => {
                format!("{} to {}", format_real(*min), format_real(*max))
            }
        }
    }
}

/// The specification of a single command line option.
///
/// A specification is an immutable value: the factories
/// ([`OptionSpec::flag`], [`OptionSpec::string`], [`OptionSpec::enumeration`],
/// [`OptionSpec::integer`], [`OptionSpec::real`], and the fixed
/// [`OptionSpec::help`]/[`OptionSpec::version`]) each produce a fresh
/// specification, and every qualifier consumes its receiver and returns a new,
/// further qualified specification.
/// Clone freely to share a partially qualified specification between options.
///
/// Each qualifier may be applied at most once, and only to a compatible kind.
/// An incompatible or repeated qualifier is *dropped*, not fatal: the
/// specification records a warning note and is otherwise returned unchanged,
/// so an author sees all of their specification mistakes in a single run (via
/// [`OptionParser::warnings`](crate::OptionParser::warnings)).
///
/// ### Example
/// ```
/// use declarg::OptionSpec;
///
/// let spec = OptionSpec::integer("number", Some('n'), "Number of widgets.", false)
///     .int_range(1, 20)
///     .default_int(4)
///     .env_var("NUMBER_OF_WIDGETS");
/// ```
#[derive(Debug, Clone)]
pub struct OptionSpec {
    kind: OptionKind,
    long_name: String,
    short_name: Option<char>,
    description: String,
    is_required: bool,
    is_singleton: bool,
    enum_options: Vec<String>,
    default: Option<DefaultValue>,
    range: Option<ValueRange>,
    env_var: Option<String>,
    notes: Vec<String>,
}

impl OptionSpec {
    fn new(
        kind: OptionKind,
        long_name: impl Into<String>,
        short_name: Option<char>,
        description: impl Into<String>,
        is_required: bool,
    ) -> Self {
        Self {
            kind,
            long_name: long_name.into(),
            short_name,
            description: description.into(),
            is_required,
            is_singleton: false,
            enum_options: Vec::default(),
            default: None,
            range: None,
            env_var: None,
            notes: Vec::default(),
        }
    }

    /// Create a flag specification.
    ///
    /// Flags are implicitly optional and implicitly defaulted to off; supplying
    /// the flag on the command line turns it on.
    /// A `singleton` flag short-circuits parsing: once recognized, processing
    /// reports success immediately without checking the remaining tokens or
    /// any required options (the `--help`/`--version` behaviour).
    pub fn flag(
        long_name: impl Into<String>,
        short_name: Option<char>,
        description: impl Into<String>,
        is_singleton: bool,
    ) -> Self {
        let mut spec = Self::new(OptionKind::Flag, long_name, short_name, description, false);
        spec.default = Some(DefaultValue::Flag);
        spec.is_singleton = is_singleton;
        spec
    }

    /// Create a string specification.
    pub fn string(
        long_name: impl Into<String>,
        short_name: Option<char>,
        description: impl Into<String>,
        is_required: bool,
    ) -> Self {
        Self::new(OptionKind::Str, long_name, short_name, description, is_required)
    }

    /// Create an enumeration specification over the closed set `options`.
    ///
    /// Command line and environment values must match one of the literals
    /// exactly (case-sensitive); the matched ordinal is reported alongside the
    /// literal in the parse result.
    pub fn enumeration(
        long_name: impl Into<String>,
        short_name: Option<char>,
        description: impl Into<String>,
        options: Vec<impl Into<String>>,
        is_required: bool,
    ) -> Self {
        let mut spec = Self::new(OptionKind::Enum, long_name, short_name, description, is_required);
        spec.enum_options = options.into_iter().map(|o| o.into()).collect();
        spec
    }

    /// Create an integer specification.
    pub fn integer(
        long_name: impl Into<String>,
        short_name: Option<char>,
        description: impl Into<String>,
        is_required: bool,
    ) -> Self {
        Self::new(OptionKind::Int, long_name, short_name, description, is_required)
    }

    /// Create a real (floating point) specification.
    pub fn real(
        long_name: impl Into<String>,
        short_name: Option<char>,
        description: impl Into<String>,
        is_required: bool,
    ) -> Self {
        Self::new(OptionKind::Real, long_name, short_name, description, is_required)
    }

    /// The pre-defined `-h, --help` singleton flag.
    pub fn help() -> Self {
        Self::flag(HELP_NAME, Some(HELP_SHORT), HELP_MESSAGE, true)
    }

    /// The pre-defined `-V, --version` singleton flag.
    pub fn version() -> Self {
        Self::flag(VERSION_NAME, Some(VERSION_SHORT), VERSION_MESSAGE, true)
    }

    /// Qualify a string or enumeration specification with a default value.
    ///
    /// An enumeration default must be one of the allowed literals.
    /// A defined default always satisfies the requirement of a required option.
    pub fn default_str(mut self, value: impl Into<String>) -> Self {
        let value = value.into();

        if self.kind != OptionKind::Str && self.kind != OptionKind::Enum {
            self.note(format!("default string value for {} ignored.", self.info()));
        } else if self.default.is_some() {
            self.note(format!("secondary default value for {} ignored.", self.info()));
        } else if self.kind == OptionKind::Enum && self.ordinal_of(&value).is_none() {
            self.note(format!(
                "the default value for {} is not an allowed value.",
                self.info()
            ));
        } else {
            self.default = Some(DefaultValue::Str(value));
        }

        self
    }

    /// Qualify an integer specification with a default value.
    ///
    /// A default outside an already configured range is still applied, with a
    /// warning note; such an option simply cannot keep its default through a
    /// command line round-trip.
    pub fn default_int(mut self, value: i64) -> Self {
        if self.kind != OptionKind::Int {
            self.note(format!("default integer value for {} ignored.", self.info()));
        } else if self.default.is_some() {
            self.note(format!("secondary default value for {} ignored.", self.info()));
        } else {
            if let Some(ValueRange::Int(min, max)) = &self.range {
                if value < *min || value > *max {
                    self.note(format!(
                        "the default value for {} is out of range.",
                        self.info()
                    ));
                }
            }
            self.default = Some(DefaultValue::Int(value));
        }

        self
    }

    /// Qualify a real specification with a default value.
    ///
    /// A default outside an already configured range is still applied, with a
    /// warning note.
    pub fn default_real(mut self, value: f64) -> Self {
        if self.kind != OptionKind::Real {
            self.note(format!("default real value for {} ignored.", self.info()));
        } else if self.default.is_some() {
            self.note(format!("secondary default value for {} ignored.", self.info()));
        } else {
            if let Some(ValueRange::Real(min, max)) = &self.range {
                if value < *min || value > *max {
                    self.note(format!(
                        "the default value for {} is out of range.",
                        self.info()
                    ));
                }
            }
            self.default = Some(DefaultValue::Real(value));
        }

        self
    }

    /// Qualify an integer specification with an inclusive `[min, max]` range.
    pub fn int_range(mut self, min: i64, max: i64) -> Self {
        if self.kind != OptionKind::Int {
            self.note(format!("integer range constraint for {} ignored.", self.info()));
        } else if self.range.is_some() {
            self.note(format!("secondary range constraint for {} ignored.", self.info()));
        } else {
            if let Some(DefaultValue::Int(value)) = &self.default {
                if *value < min || *value > max {
                    self.note(format!(
                        "the default value for {} is out of range.",
                        self.info()
                    ));
                }
            }
            self.range = Some(ValueRange::Int(min, max));
        }

        self
    }

    /// Qualify a real specification with an inclusive `[min, max]` range.
    pub fn real_range(mut self, min: f64, max: f64) -> Self {
        if self.kind != OptionKind::Real {
            self.note(format!("real range constraint for {} ignored.", self.info()));
        } else if self.range.is_some() {
            self.note(format!("secondary range constraint for {} ignored.", self.info()));
        } else {
            if let Some(DefaultValue::Real(value)) = &self.default {
                if *value < min || *value > max {
                    self.note(format!(
                        "the default value for {} is out of range.",
                        self.info()
                    ));
                }
            }
            self.range = Some(ValueRange::Real(min, max));
        }

        self
    }

    /// Qualify the specification with an environment variable fallback.
    ///
    /// When the variable is set in the process environment, its value supplies
    /// the option value (overriding any default) unless the option is given on
    /// the command line.
    /// Flags recognize exactly `1`, `Y` or `YES` as "on".
    pub fn env_var(mut self, name: impl Into<String>) -> Self {
        let name = name.into();

        if self.env_var.is_some() {
            self.note(format!(
                "secondary environment variable for {} ignored.",
                self.info()
            ));
        } else if name.is_empty() {
            self.note(format!(
                "empty environment variable name for {} ignored.",
                self.info()
            ));
        } else {
            self.env_var = Some(name);
        }

        self
    }

    fn note(&mut self, message: String) {
        self.notes.push(message);
    }

    // "the integer option 'number'" - identifies the spec inside warning notes.
    fn info(&self) -> String {
        format!("the {} option '{}'", self.kind, self.long_name)
    }

    /// The display name used in error messages and help text:
    /// `-n, --number`, or `--number` when there is no short name.
    pub fn name(&self) -> String {
        match self.short_name {
            Some(short) => format!("-{short}, --{}", self.long_name),
            None => format!("--{}", self.long_name),
        }
    }

    /// The allowed-values image of an enumeration: `(aaa, bbb, ccc)`.
    pub(crate) fn enum_set(&self) -> String {
        format!("({})", self.enum_options.join(", "))
    }

    pub(crate) fn ordinal_of(&self, value: &str) -> Option<usize> {
        self.enum_options.iter().position(|option| option == value)
    }

    pub(crate) fn kind(&self) -> OptionKind {
        self.kind
    }

    pub(crate) fn long_name(&self) -> &str {
        &self.long_name
    }

    pub(crate) fn short_name(&self) -> Option<char> {
        self.short_name
    }

    pub(crate) fn description(&self) -> &str {
        &self.description
    }

    pub(crate) fn is_required(&self) -> bool {
        self.is_required
    }

    pub(crate) fn is_singleton(&self) -> bool {
        self.is_singleton
    }

    pub(crate) fn is_defaulted(&self) -> bool {
        self.default.is_some()
    }

    pub(crate) fn default(&self) -> Option<&DefaultValue> {
        self.default.as_ref()
    }

    pub(crate) fn range(&self) -> Option<&ValueRange> {
        self.range.as_ref()
    }

    pub(crate) fn env_var_name(&self) -> Option<&str> {
        self.env_var.as_deref()
    }

    pub(crate) fn take_notes(&mut self) -> Vec<String> {
        std::mem::take(&mut self.notes)
    }
}
