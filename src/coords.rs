//! Sexagesimal angle conversion.
//!
//! Both conversions are pure: they parse their tokens and return decimal
//! degrees, or a [`CoordError`] naming the token that failed.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoordError {
    #[error("invalid number '{0}'")]
    InvalidNumber(String),
    #[error("expected D:M[:S], got '{0}'")]
    InvalidSexagesimal(String),
    #[error("expected 'D M S H', got '{0}'")]
    InvalidDms(String),
}

/// Which hemisphere letter flips the sign of a DMS angle.
///
/// The XEphem site list counts longitudes positive westward, so its
/// longitudes use [`SignConvention::EastNegative`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignConvention {
    SouthNegative,
    EastNegative,
}

impl SignConvention {
    fn negative_hemisphere(self) -> &'static str {
        match self {
            SignConvention::SouthNegative => "S",
            SignConvention::EastNegative => "E",
        }
    }
}

pub(crate) fn parse_number(token: &str) -> Result<f64, CoordError> {
    token
        .trim()
        .parse::<f64>()
        .map_err(|_| CoordError::InvalidNumber(token.to_string()))
}

/// `deg + min/60 + sec/3600`, negated when `hemisphere` is the negative
/// letter of `convention`.
pub fn dms_to_decimal(
    deg: &str,
    min: &str,
    sec: &str,
    hemisphere: &str,
    convention: SignConvention,
) -> Result<f64, CoordError> {
    let value = parse_number(deg)? + parse_number(min)? / 60.0 + parse_number(sec)? / 3600.0;
    if hemisphere == convention.negative_hemisphere() {
        Ok(-value)
    } else {
        Ok(value)
    }
}

/// Parse a space-separated `D M S H` group.
pub fn parse_dms(text: &str, convention: SignConvention) -> Result<f64, CoordError> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    match tokens.as_slice() {
        [deg, min, sec, hemisphere, ..] => dms_to_decimal(deg, min, sec, hemisphere, convention),
        _ => Err(CoordError::InvalidDms(text.to_string())),
    }
}

/// `D:M[:S]` → `D + M/60 [+ S/3600]`.
///
/// The sign of `D` is not distributed over the minutes and seconds.
/// Four or more `:`-separated parts are rejected as
/// [`CoordError::InvalidSexagesimal`] rather than truncated to `D:M`.
pub fn colon_to_decimal(text: &str) -> Result<f64, CoordError> {
    let parts: Vec<&str> = text.split(':').collect();
    match parts.as_slice() {
        [deg, min] => Ok(parse_number(deg)? + parse_number(min)? / 60.0),
        [deg, min, sec] => {
            Ok(parse_number(deg)? + parse_number(min)? / 60.0 + parse_number(sec)? / 3600.0)
        }
        _ => Err(CoordError::InvalidSexagesimal(text.to_string())),
    }
}

/// Decimal degrees, or colon-delimited sexagesimal when the value contains `:`.
pub fn parse_angle(text: &str) -> Result<f64, CoordError> {
    if text.contains(':') {
        colon_to_decimal(text)
    } else {
        parse_number(text)
    }
}
