use crate::constant::*;

/// The syntactic shape of a single raw token, before any specification lookup.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum TokenForm<'t> {
    /// Empty, or does not start with `-`: the first positional parameter.
    Parameter,
    /// The `--` marker: no more options follow.
    Terminator,
    /// `-x`: a short option named by its single character.
    Short(char),
    /// `--name`: a long option named by the remainder.
    Long(&'t str),
    /// Any other `-`-prefixed token (ex: `-xy`, `-`): not a recognized option syntax.
    Malformed,
}

pub(crate) fn classify(token: &str) -> TokenForm<'_> {
    if token == NO_MORE_OPTIONS {
        return TokenForm::Terminator;
    }

    if !token.starts_with('-') {
        return TokenForm::Parameter;
    }

    let mut tail = token.chars();
    tail.next();

    match (tail.next(), tail.next()) {
        (Some(second), None) => TokenForm::Short(second),
        _ => match token.strip_prefix(NO_MORE_OPTIONS) {
            // The empty remainder (token == "--") was handled above.
            Some(name) => TokenForm::Long(name),
            None => TokenForm::Malformed,
        },
    }
}
