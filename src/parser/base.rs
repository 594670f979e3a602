use std::collections::HashMap;
use thiserror::Error;

use crate::api::{DefaultValue, OptionSpec, ValueRange};
use crate::convert;
use crate::matcher::{classify, TokenForm};
use crate::model::{OptionKind, OptionValue};
use crate::parser::printer;
use crate::parser::HelpStyle;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// A fatal problem encountered while interpreting actual input (environment
/// variables or command line tokens).
///
/// Processing stops at the first problem; `Display` renders the single
/// descriptive message a calling program is expected to print (typically
/// followed by [`OptionParser::option_help`] and a non-zero exit).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The parser was constructed from a conflicting specification list.
    #[error("option specification errors")]
    InvalidSpecifications,

    /// A `-`-prefixed token that is neither a short nor a long option form (ex: `-xy`).
    #[error("invalid option format: {token}")]
    InvalidFormat {
        /// The offending token.
        token: String,
    },

    /// An option token that matches no specification.
    #[error("no such option: {token}")]
    UnknownOption {
        /// The offending token.
        token: String,
    },

    /// An option supplied more than once in the same invocation.
    #[error("duplicate option: {name}")]
    DuplicateOption {
        /// The option's display name.
        name: String,
    },

    /// A value-taking option at the end of the token sequence.
    #[error("option {name} requires an argument.")]
    MissingArgument {
        /// The option's display name.
        name: String,
    },

    /// An enumeration value outside the allowed set.
    #[error("invalid value for {name}: {value} is not one of {allowed}.")]
    NotAnEnumOption {
        /// The option's display name.
        name: String,
        /// The rejected value.
        value: String,
        /// The allowed-values image, ex `(aaa, bbb, ccc)`.
        allowed: String,
    },

    /// A value that does not parse as an integer.
    #[error("invalid value for {name}: '{value}' is not a valid integer.")]
    NotAnInteger {
        /// The option's display name.
        name: String,
        /// The rejected value.
        value: String,
    },

    /// A value that does not parse as a floating point number.
    #[error("invalid value for {name}: '{value}' is not a valid floating point number.")]
    NotAReal {
        /// The option's display name.
        name: String,
        /// The rejected value.
        value: String,
    },

    /// A numeric value outside the specification's configured range.
    #[error("invalid value for {name}: {value} is out of range {range}.")]
    OutOfRange {
        /// The option's display name.
        name: String,
        /// The rejected value, stringified.
        value: String,
        /// The configured range image, ex `1 to 10`.
        range: String,
    },

    /// An environment-sourced enumeration value outside the allowed set.
    #[error("invalid environment variable {env_var} value for {name}: {value} is not one of {allowed}.")]
    EnvironmentEnumValue {
        /// The environment variable that supplied the value.
        env_var: String,
        /// The option's display name.
        name: String,
        /// The rejected value.
        value: String,
        /// The allowed-values image.
        allowed: String,
    },

    /// An environment-sourced value that does not parse as an integer.
    #[error("invalid environment variable {env_var} value for {name}: '{value}' is not a valid integer.")]
    EnvironmentIntValue {
        /// The environment variable that supplied the value.
        env_var: String,
        /// The option's display name.
        name: String,
        /// The rejected value.
        value: String,
    },

    /// An environment-sourced value that does not parse as a floating point number.
    #[error("invalid environment variable {env_var} value for {name}: '{value}' is not a valid floating point number.")]
    EnvironmentRealValue {
        /// The environment variable that supplied the value.
        env_var: String,
        /// The option's display name.
        name: String,
        /// The rejected value.
        value: String,
    },

    /// A required option that never resolved to a value.
    #[error("a value is required for: {name}")]
    MissingRequired {
        /// The option's display name.
        name: String,
    },
}

/// The option values resolved by a successful [`OptionParser::process`].
///
/// Values are looked up by long name; a name that matches no specification
/// yields a default (undefined) record rather than an error.
#[derive(Debug, Default)]
pub struct OptionValues {
    values: HashMap<String, OptionValue>,
}

impl OptionValues {
    /// Copy out the value for `long_name`.
    ///
    /// ### Example
    /// ```
    /// use declarg::{OptionParser, OptionSpec};
    ///
    /// let parser = OptionParser::new(vec![OptionSpec::help()]);
    /// let parsed = parser.process(&["program"], true).unwrap();
    ///
    /// assert!(parsed.values().get("help").is_defined);
    /// assert!(!parsed.values().get("no-such-option").is_defined);
    /// ```
    pub fn get(&self, long_name: &str) -> OptionValue {
        self.values.get(long_name).cloned().unwrap_or_default()
    }
}

/// The successful outcome of an [`OptionParser::process`] invocation.
#[derive(Debug, Default)]
pub struct Parsed {
    values: OptionValues,
    parameters: Vec<String>,
}

impl Parsed {
    /// The resolved option values.
    pub fn values(&self) -> &OptionValues {
        &self.values
    }

    /// The tokens not consumed as options, in their original order.
    ///
    /// These are not parsed or validated in any way.
    pub fn parameters(&self) -> &[String] {
        &self.parameters
    }
}

// The transient per-option working record for a single process() invocation.
// Rebuilt from scratch on every call - one invocation never leaks into the next.
struct WorkingValue {
    value: OptionValue,
    already_specified: bool,
}

/// The command line option parser: an ordered registry of [`OptionSpec`]s plus
/// the `process` operation that interprets an argument vector against them.
///
/// Construction never fails.
/// Specification-authoring problems (conflicting names, dropped qualifiers)
/// are collected into [`OptionParser::warnings`]; conflicting names
/// additionally invalidate the parser, deferring the failure to `process`.
///
/// ### Example
/// ```
/// use declarg::{OptionParser, OptionSpec};
///
/// let parser = OptionParser::new(vec![
///     OptionSpec::integer("number", Some('n'), "Number of widgets.", false)
///         .int_range(1, 20)
///         .default_int(4),
///     OptionSpec::help(),
/// ]);
///
/// let parsed = parser.process(&["widgets", "--number", "12", "blue"], true).unwrap();
/// assert_eq!(parsed.values().get("number").ival, 12);
/// assert_eq!(parsed.parameters(), &["blue".to_string()]);
/// ```
pub struct OptionParser {
    specs: Vec<OptionSpec>,
    long_index: HashMap<String, usize>,
    short_index: HashMap<char, usize>,
    valid: bool,
    warnings: Vec<String>,
}

impl std::fmt::Debug for OptionParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OptionParser{..}").finish()
    }
}

impl OptionParser {
    /// Create a parser over the ordered specification list.
    ///
    /// The order of specifications dictates the order of the generated help
    /// text; it does not affect the parsing semantics.
    pub fn new(mut specs: Vec<OptionSpec>) -> Self {
        let mut warnings = Vec::default();

        for spec in specs.iter_mut() {
            warnings.extend(spec.take_notes());
        }

        let mut valid = true;

        for (skip, former) in specs.iter().enumerate() {
            for latter in specs.iter().skip(skip + 1) {
                let long_collision = former.long_name() == latter.long_name();
                let short_collision = former.short_name().is_some()
                    && former.short_name() == latter.short_name();

                if long_collision || short_collision {
                    warnings.push(format!(
                        "conflicting option names: {} and {}",
                        former.name(),
                        latter.name()
                    ));
                    valid = false;
                }
            }
        }

        let mut long_index = HashMap::default();
        let mut short_index = HashMap::default();

        for (index, spec) in specs.iter().enumerate() {
            long_index.insert(spec.long_name().to_string(), index);

            if let Some(short) = spec.short_name() {
                short_index.insert(short, index);
            }
        }

        Self {
            specs,
            long_index,
            short_index,
            valid,
            warnings,
        }
    }

    /// The specification-authoring warnings collected at construction.
    ///
    /// Emit these however the embedding program sees fit; `declarg` never
    /// writes to a stream on its own.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Render the auto-generated help text over the ordered specification list.
    pub fn option_help(&self, style: &HelpStyle) -> String {
        printer::render(&self.specs, style)
    }

    /// Process an argument vector against the specification list.
    ///
    /// With `skip_program_name` set, the zeroth token is ignored (the
    /// conventional `argv[0]`).
    ///
    /// Resolution precedence per option, lowest to highest: default value,
    /// environment variable, command line.
    /// Tokens not consumed as options become [`Parsed::parameters`]: the first
    /// bare token (empty or not `-`-prefixed) and everything after it, plus
    /// everything after a `--` terminator.
    ///
    /// Recognizing a singleton option (ex: `--help`) reports success
    /// immediately, without inspecting the remaining tokens or checking the
    /// other required options.
    ///
    /// Each invocation resolves from a fresh working state; sequential reuse
    /// of one parser is well-defined.
    pub fn process<S: AsRef<str>>(
        &self,
        arguments: &[S],
        skip_program_name: bool,
    ) -> Result<Parsed, ParseError> {
        if !self.valid {
            return Err(ParseError::InvalidSpecifications);
        }

        let mut working = self.resolve_ambient()?;

        let mut parameters: Vec<String> = Vec::default();
        let mut options_complete = false;
        let skip = if skip_program_name { 1 } else { 0 };
        let mut tokens = arguments.iter().map(|token| token.as_ref()).skip(skip);

        while let Some(token) = tokens.next() {
            if options_complete {
                parameters.push(token.to_string());
                continue;
            }

            let index = match classify(token) {
                TokenForm::Terminator => {
                    options_complete = true;
                    continue;
                }
                TokenForm::Parameter => {
                    parameters.push(token.to_string());
                    options_complete = true;
                    continue;
                }
                TokenForm::Short(short) => self.short_index.get(&short),
                TokenForm::Long(long) => self.long_index.get(long),
                TokenForm::Malformed => {
                    return Err(ParseError::InvalidFormat {
                        token: token.to_string(),
                    });
                }
            };

            let index = *index.ok_or_else(|| ParseError::UnknownOption {
                token: token.to_string(),
            })?;
            let spec = &self.specs[index];

            #[cfg(feature = "tracing_debug")]
            {
                debug!("Token '{}' matched {}.", token, spec.name());
            }

            self.capture(spec, &mut working[index], &mut tokens)?;

            if spec.is_singleton() {
                // A singleton overrides all else - report success without
                // checking the remaining tokens or the required options.
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Singleton {} stops processing.", spec.name());
                }

                return Ok(self.finish(working, parameters));
            }
        }

        for (spec, record) in self.specs.iter().zip(working.iter()) {
            if spec.is_required() && !record.value.is_defined {
                return Err(ParseError::MissingRequired { name: spec.name() });
            }
        }

        Ok(self.finish(working, parameters))
    }

    // Phase A: seed one working record per specification from its default,
    // then apply any environment variable override.
    fn resolve_ambient(&self) -> Result<Vec<WorkingValue>, ParseError> {
        let mut working = Vec::with_capacity(self.specs.len());

        for spec in &self.specs {
            let mut value = OptionValue {
                is_defined: spec.is_defaulted(),
                ..OptionValue::default()
            };
            let environment = spec
                .env_var_name()
                .and_then(|name| std::env::var(name).ok().map(|v| (name, v)));

            match spec.kind() {
                OptionKind::Flag => {
                    // Flags keep their implicit (defined) default; a recognized
                    // truthy environment value turns them on, anything else
                    // leaves them off.
                    if let Some((_, supplied)) = environment {
                        value.flag = crate::constant::FLAG_TRUTHY.contains(&supplied.as_str());
                    }
                }
                OptionKind::Str => {
                    if let Some(DefaultValue::Str(default)) = spec.default() {
                        value.str = default.clone();
                    }

                    if let Some((_, supplied)) = environment {
                        value.str = supplied;
                        value.is_defined = true;
                    }
                }
                OptionKind::Enum => {
                    if let Some(DefaultValue::Str(default)) = spec.default() {
                        value.str = default.clone();
                    }

                    if let Some((name, supplied)) = environment {
                        match spec.ordinal_of(&supplied) {
                            Some(ordinal) => {
                                value.str = supplied;
                                value.ival = ordinal as i64;
                                value.is_defined = true;
                            }
                            None => {
                                return Err(ParseError::EnvironmentEnumValue {
                                    env_var: name.to_string(),
                                    name: spec.name(),
                                    value: supplied,
                                    allowed: spec.enum_set(),
                                });
                            }
                        }
                    } else if value.is_defined {
                        // The builder only admits member defaults.
                        let ordinal = spec.ordinal_of(&value.str).unwrap_or_else(|| {
                            unreachable!("internal error - enum default must be an allowed value")
                        });
                        value.ival = ordinal as i64;
                    }
                }
                OptionKind::Int => {
                    if let Some(DefaultValue::Int(default)) = spec.default() {
                        value.ival = *default;
                    }

                    if let Some((name, supplied)) = environment {
                        match convert::parse_int(&supplied) {
                            Some(parsed) => {
                                value.ival = parsed;
                                value.is_defined = true;
                            }
                            None => {
                                return Err(ParseError::EnvironmentIntValue {
                                    env_var: name.to_string(),
                                    name: spec.name(),
                                    value: supplied,
                                });
                            }
                        }
                    }
                }
                OptionKind::Real => {
                    if let Some(DefaultValue::Real(default)) = spec.default() {
                        value.real = *default;
                    }

                    if let Some((name, supplied)) = environment {
                        match convert::parse_real(&supplied) {
                            Some(parsed) => {
                                value.real = parsed;
                                value.is_defined = true;
                            }
                            None => {
                                return Err(ParseError::EnvironmentRealValue {
                                    env_var: name.to_string(),
                                    name: spec.name(),
                                    value: supplied,
                                });
                            }
                        }
                    }
                }
            }

            working.push(WorkingValue {
                value,
                already_specified: false,
            });
        }

        Ok(working)
    }

    // Phase B, per matched option: enforce single occurrence, then capture the
    // kind-appropriate value (consuming the next token where one is taken).
    fn capture<'t>(
        &self,
        spec: &OptionSpec,
        record: &mut WorkingValue,
        tokens: &mut impl Iterator<Item = &'t str>,
    ) -> Result<(), ParseError> {
        if record.already_specified {
            return Err(ParseError::DuplicateOption { name: spec.name() });
        }

        record.already_specified = true;
        let value = &mut record.value;

        match spec.kind() {
            OptionKind::Flag => {
                value.flag = true;
                value.is_defined = true;
            }
            OptionKind::Str => {
                value.str = Self::next_argument(spec, tokens)?;
                value.is_defined = true;
            }
            OptionKind::Enum => {
                let supplied = Self::next_argument(spec, tokens)?;

                match spec.ordinal_of(&supplied) {
                    Some(ordinal) => {
                        value.str = supplied;
                        value.ival = ordinal as i64;
                        value.is_defined = true;
                    }
                    None => {
                        return Err(ParseError::NotAnEnumOption {
                            name: spec.name(),
                            value: supplied,
                            allowed: spec.enum_set(),
                        });
                    }
                }
            }
            OptionKind::Int => {
                let supplied = Self::next_argument(spec, tokens)?;
                let parsed = convert::parse_int(&supplied).ok_or_else(|| {
                    ParseError::NotAnInteger {
                        name: spec.name(),
                        value: supplied.clone(),
                    }
                })?;

                if let Some(range @ ValueRange::Int(min, max)) = spec.range() {
                    if parsed < *min || parsed > *max {
                        return Err(ParseError::OutOfRange {
                            name: spec.name(),
                            value: convert::format_int(parsed),
                            range: range.image(),
                        });
                    }
                }

                value.ival = parsed;
                value.is_defined = true;
            }
            OptionKind::Real => {
                let supplied = Self::next_argument(spec, tokens)?;
                let parsed = convert::parse_real(&supplied).ok_or_else(|| {
                    ParseError::NotAReal {
                        name: spec.name(),
                        value: supplied.clone(),
                    }
                })?;

                if let Some(range @ ValueRange::Real(min, max)) = spec.range() {
                    if parsed < *min || parsed > *max {
                        return Err(ParseError::OutOfRange {
                            name: spec.name(),
                            value: convert::format_real(parsed),
                            range: range.image(),
                        });
                    }
                }

                value.real = parsed;
                value.is_defined = true;
            }
        }

        Ok(())
    }

    fn next_argument<'t>(
        spec: &OptionSpec,
        tokens: &mut impl Iterator<Item = &'t str>,
    ) -> Result<String, ParseError> {
        tokens
            .next()
            .map(|token| token.to_string())
            .ok_or_else(|| ParseError::MissingArgument { name: spec.name() })
    }

    fn finish(&self, working: Vec<WorkingValue>, parameters: Vec<String>) -> Parsed {
        let values = self
            .specs
            .iter()
            .zip(working)
            .map(|(spec, record)| (spec.long_name().to_string(), record.value))
            .collect();

        Parsed {
            values: OptionValues { values },
            parameters,
        }
    }
}
