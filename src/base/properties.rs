use crate::StrError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::ffi::OsStr;
use std::fmt;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Defines the names of the material properties read by the fluid laws
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PropertyName {
    /// Dynamic viscosity (consistency index of the power-law term)
    DynamicViscosity,

    /// Yield shear stress
    YieldShear,

    /// Flow index (power-law exponent)
    FlowIndex,

    /// Adaptive (regularization) exponent
    AdaptiveExponent,

    /// Bulk modulus (only validated by the 2D laws)
    BulkModulus,
}

impl PropertyName {
    /// Holds all property names in the order they are validated
    pub const ALL: [PropertyName; 5] = [
        PropertyName::DynamicViscosity,
        PropertyName::YieldShear,
        PropertyName::FlowIndex,
        PropertyName::AdaptiveExponent,
        PropertyName::BulkModulus,
    ];

    /// Returns the key used by the host property store
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyName::DynamicViscosity => "DYNAMIC_VISCOSITY",
            PropertyName::YieldShear => "YIELD_SHEAR",
            PropertyName::FlowIndex => "FLOW_INDEX",
            PropertyName::AdaptiveExponent => "ADAPTIVE_EXPONENT",
            PropertyName::BulkModulus => "BULK_MODULUS",
        }
    }

    /// Returns the error message for a property absent from the store
    pub fn missing(&self) -> StrError {
        match self {
            PropertyName::DynamicViscosity => "DYNAMIC_VISCOSITY is missing",
            PropertyName::YieldShear => "YIELD_SHEAR is missing",
            PropertyName::FlowIndex => "FLOW_INDEX is missing",
            PropertyName::AdaptiveExponent => "ADAPTIVE_EXPONENT is missing",
            PropertyName::BulkModulus => "BULK_MODULUS is missing",
        }
    }

    /// Finds the property name corresponding to a host key
    pub fn from_key(key: &str) -> Option<Self> {
        PropertyName::ALL.iter().copied().find(|name| name.as_str() == key)
    }
}

impl fmt::Display for PropertyName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Specifies the read-only access to material properties
///
/// This is the only capability the fluid laws need from the host property store.
pub trait PropertyLookup {
    /// Returns the value of a property or None if it is not defined
    fn get(&self, name: PropertyName) -> Option<f64>;

    /// Returns the effective value of a property at the current integration point
    ///
    /// The default implementation returns the stored value. Hosts may override this
    /// method to modify the parameter (e.g., with temperature or regularization).
    fn effective(&self, name: PropertyName) -> Option<f64> {
        self.get(name)
    }

    /// Returns the value of a property or an error if it is not defined
    fn require(&self, name: PropertyName) -> Result<f64, StrError> {
        self.get(name).ok_or(name.missing())
    }

    /// Returns the effective value of a property or an error if it is not defined
    fn require_effective(&self, name: PropertyName) -> Result<f64, StrError> {
        self.effective(name).ok_or(name.missing())
    }
}

/// Holds material properties as a map of host keys to values
///
/// The JSON representation is a plain object such as:
///
/// ```text
/// { "DYNAMIC_VISCOSITY": 5.0, "YIELD_SHEAR": 10.0, "FLOW_INDEX": 1.2,
///   "ADAPTIVE_EXPONENT": 2.0, "BULK_MODULUS": 2.1e9 }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Properties {
    values: HashMap<String, f64>,
}

impl Properties {
    /// Allocates a new (empty) instance
    pub fn new() -> Self {
        Properties { values: HashMap::new() }
    }

    /// Sets the value of a property
    pub fn set(&mut self, name: PropertyName, value: f64) -> &mut Self {
        self.values.insert(name.as_str().to_string(), value);
        self
    }

    /// Removes a property and returns its previous value
    pub fn remove(&mut self, name: PropertyName) -> Option<f64> {
        self.values.remove(name.as_str())
    }

    /// Returns the number of stored properties
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if no property is stored
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Reads a JSON file containing the material properties
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn read_json<P>(full_path: &P) -> Result<Self, StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        let file = File::open(path).map_err(|_| "cannot open file")?;
        let buffered = BufReader::new(file);
        let properties = serde_json::from_reader(buffered).map_err(|_| "cannot parse JSON file")?;
        Ok(properties)
    }

    /// Writes a JSON file with the material properties
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn write_json<P>(&self, full_path: &P) -> Result<(), StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        if let Some(p) = path.parent() {
            fs::create_dir_all(p).map_err(|_| "cannot create directory")?;
        }
        let mut file = File::create(&path).map_err(|_| "cannot create file")?;
        serde_json::to_writer(&mut file, &self).map_err(|_| "cannot write file")?;
        Ok(())
    }
}

impl<const N: usize> From<[(PropertyName, f64); N]> for Properties {
    fn from(pairs: [(PropertyName, f64); N]) -> Self {
        let mut properties = Properties::new();
        for (name, value) in pairs {
            properties.set(name, value);
        }
        properties
    }
}

impl PropertyLookup for Properties {
    fn get(&self, name: PropertyName) -> Option<f64> {
        self.values.get(name.as_str()).copied()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
