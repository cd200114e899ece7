//! Technical parameter identifier decomposition.
//!
//! Identifiers have the form `<param>_<unit>`. Parameter names themselves contain
//! underscores, so the split happens at the *last* underscore.

use crate::record::trim_field;

/// A technical parameter identifier split into name and unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamIdentifier<'a> {
    full: &'a str,
    param: &'a str,
    unit: &'a str,
}

/// The identifier has no underscore, or only a leading one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MalformedIdentifier<'a>(pub &'a str);

impl<'a> ParamIdentifier<'a> {
    /// Strip padding and split an identifier at its last underscore.
    ///
    /// A trailing underscore yields an empty unit; that is left for the unit
    /// check to reject.
    ///
    /// ```
    /// use argo_model::ParamIdentifier;
    ///
    /// let id = ParamIdentifier::parse(" PRES_GREATER_THAN_dbar ").unwrap();
    /// assert_eq!(id.param(), "PRES_GREATER_THAN");
    /// assert_eq!(id.unit(), "dbar");
    /// assert!(ParamIdentifier::parse("_dbar").is_err());
    /// ```
    pub fn parse(raw: &'a str) -> Result<Self, MalformedIdentifier<'a>> {
        let full = trim_field(raw);
        match full.rfind('_') {
            Some(index) if index > 0 => Ok(Self {
                full,
                param: &full[..index],
                unit: &full[index + 1..],
            }),
            _ => Err(MalformedIdentifier(full)),
        }
    }

    /// The trimmed identifier.
    pub fn full(&self) -> &'a str {
        self.full
    }

    pub fn param(&self) -> &'a str {
        self.param
    }

    pub fn unit(&self) -> &'a str {
        self.unit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_at_last_underscore() {
        let id = ParamIdentifier::parse("CLOCK_AscentEnd_HHMMSS").unwrap();
        assert_eq!(id.full(), "CLOCK_AscentEnd_HHMMSS");
        assert_eq!(id.param(), "CLOCK_AscentEnd");
        assert_eq!(id.unit(), "HHMMSS");
    }

    #[test]
    fn rejects_missing_or_leading_underscore() {
        assert_eq!(
            ParamIdentifier::parse("NOUNDERSCORE"),
            Err(MalformedIdentifier("NOUNDERSCORE"))
        );
        assert_eq!(
            ParamIdentifier::parse("  _volts "),
            Err(MalformedIdentifier("_volts"))
        );
        assert_eq!(ParamIdentifier::parse("   "), Err(MalformedIdentifier("")));
    }

    #[test]
    fn strips_nul_padding() {
        let id = ParamIdentifier::parse("CLOCK_Offset_seconds\0\0\0").unwrap();
        assert_eq!(id.full(), "CLOCK_Offset_seconds");
        assert_eq!(id.unit(), "seconds");
        assert_eq!(ParamIdentifier::parse("\0\0"), Err(MalformedIdentifier("")));
    }

    #[test]
    fn trailing_underscore_gives_empty_unit() {
        let id = ParamIdentifier::parse("VOLTAGE_").unwrap();
        assert_eq!(id.param(), "VOLTAGE");
        assert_eq!(id.unit(), "");
    }
}
