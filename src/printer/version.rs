use std::{fmt, str::FromStr};

use snafu::{ensure, ResultExt, Snafu};

/// Decimal pkginfo version, compared as a float by the generated scripts.
///
/// The text form always carries a fractional part (`2` is shown as `2.0`) and
/// is the one used both for the descriptor and for the `@VERSION@` token, so
/// the two can never disagree.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Version(f64);

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: f64 = s.trim().parse().context(NotANumberSnafu { input: s })?;
        ensure!(value.is_finite(), NotFiniteSnafu { input: s });
        Ok(Version(value))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.0.to_string();
        if text.contains('.') {
            f.write_str(&text)
        } else {
            write!(f, "{text}.0")
        }
    }
}

/// clap value parser for `--version`.
pub fn parse_version(s: &str) -> Result<Version, VersionError> {
    s.parse()
}

// ////// //
// Errors //
// ////// //

#[derive(Debug, Snafu)]
pub enum VersionError {
    #[snafu(display("'{input}' is not a decimal number"))]
    NotANumber { input: String, source: std::num::ParseFloatError },

    #[snafu(display("'{input}' is not a finite number"))]
    NotFinite { input: String },
}
