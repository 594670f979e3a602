/// The kind of value an option carries.
///
/// The kind is fixed at specification time and decides which qualifiers apply
/// (ex: a range constraint is only meaningful on `Int`/`Real`), which
/// [`OptionValue`](crate::OptionValue) field is populated, and how the option's
/// command line argument is validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    /// A boolean switch; takes no argument.
    Flag,
    /// A free-form string; takes one argument.
    Str,
    /// One of a closed set of literals; takes one argument.
    Enum,
    /// A base-10 integer; takes one argument.
    Int,
    /// A base-10 floating point number; takes one argument.
    Real,
}

impl std::fmt::Display for OptionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let image = match self {
            OptionKind::Flag => "flag",
            OptionKind::Str => "string",
            OptionKind::Enum => "enumeration",
            OptionKind::Int => "integer",
            OptionKind::Real => "real",
        };
        write!(f, "{image}")
    }
}

/// The resolved value of a single option after [`OptionParser::process`](crate::OptionParser::process).
///
/// Only the field matching the option's [`OptionKind`] is meaningful; the
/// others hold their zero values.
/// Instances are plain records copied out of the parser - mutating one has no
/// effect on the parse result it came from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptionValue {
    /// Whether the option resolved to a value at all - explicitly on the
    /// command line, via an environment variable, or via a default.
    pub is_defined: bool,
    /// The switch state (`OptionKind::Flag`).
    pub flag: bool,
    /// The raw string or enumeration literal (`OptionKind::Str`/`OptionKind::Enum`).
    pub str: String,
    /// The integer value, or the enumeration ordinal (`OptionKind::Int`/`OptionKind::Enum`).
    pub ival: i64,
    /// The floating point value (`OptionKind::Real`).
    pub real: f64,
}
