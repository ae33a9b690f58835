use crate::base::{PropertyLookup, PropertyName};
use std::fmt;

/// Holds an invalid (negative) or missing material property
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParamViolation {
    /// Name of the fluid law requiring the property
    pub law: &'static str,

    /// The offending property
    pub name: PropertyName,

    /// The invalid value or None if the property is missing
    pub value: Option<f64>,
}

impl fmt::Display for ParamViolation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Incorrect or missing {} provided for {}: ", self.name, self.law)?;
        match self.value {
            Some(value) => write!(f, "{}", value),
            None => write!(f, "(none)"),
        }
    }
}

/// Holds the results of checking the material properties of a fluid law
#[derive(Clone, Debug, PartialEq)]
pub struct CheckReport {
    /// Name of the checked fluid law
    pub law: &'static str,

    /// All violations found (empty if the properties are valid)
    pub violations: Vec<ParamViolation>,
}

impl CheckReport {
    /// Returns true if no violation was found
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns the status code expected by the host (0 = valid)
    ///
    /// A non-zero value equals the number of violations.
    pub fn status(&self) -> usize {
        self.violations.len()
    }

    /// Returns the violation associated with a property, if any
    pub fn find(&self, name: PropertyName) -> Option<&ParamViolation> {
        self.violations.iter().find(|v| v.name == name)
    }

    /// Converts this report into a Result to allow the use of the `?` operator
    pub fn into_result(self) -> Result<(), CheckReport> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_valid() {
            return write!(f, "{}: ok", self.law);
        }
        let lines: Vec<_> = self.violations.iter().map(|v| v.to_string()).collect();
        write!(f, "{}", lines.join("\n"))
    }
}

impl std::error::Error for CheckReport {}

/// Finds all negative or missing properties among a set of names
///
/// Every property is checked; the search does not stop at the first violation.
pub fn validate(law: &'static str, props: &dyn PropertyLookup, names: &[PropertyName]) -> Vec<ParamViolation> {
    names
        .iter()
        .filter_map(|&name| match props.get(name) {
            Some(value) if value >= 0.0 => None,
            value => Some(ParamViolation { law, name, value }),
        })
        .collect()
}

/// Checks the material properties of a fluid law and logs the violations
pub fn check(law: &'static str, props: &dyn PropertyLookup, names: &[PropertyName]) -> CheckReport {
    let violations = validate(law, props, names);
    for violation in &violations {
        log::warn!("{}", violation);
    }
    if violations.is_empty() {
        log::debug!("{}: material properties are valid", law);
    }
    CheckReport { law, violations }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
