use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::foundation::error::{WrapError, WrapResult};

/// Opaque vehicle key used for asset retrieval and export naming.
///
/// Ids are single path segments: non-empty, no separators, not `.` or `..`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VehicleId(String);

impl VehicleId {
    /// Validate and wrap a vehicle id.
    pub fn new(id: impl Into<String>) -> WrapResult<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(WrapError::validation("vehicle id must be non-empty"));
        }
        if id.contains(['/', '\\']) || id == "." || id == ".." {
            return Err(WrapError::validation(format!(
                "vehicle id '{id}' must be a single path segment"
            )));
        }
        Ok(Self(id))
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for VehicleId {
    type Error = WrapError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<VehicleId> for String {
    fn from(value: VehicleId) -> Self {
        value.0
    }
}

impl std::fmt::Display for VehicleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One selectable vehicle.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Vehicle {
    /// Asset key.
    pub id: VehicleId,
    /// Display name.
    pub name: String,
}

/// Ordered list of selectable vehicles.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VehicleCatalog {
    vehicles: Vec<Vehicle>,
}

impl VehicleCatalog {
    /// Build a catalog, rejecting duplicate ids. Order is preserved.
    pub fn new(vehicles: Vec<Vehicle>) -> WrapResult<Self> {
        let mut seen = HashSet::new();
        for v in &vehicles {
            if !seen.insert(v.id.clone()) {
                return Err(WrapError::validation(format!(
                    "duplicate vehicle id '{}' in catalog",
                    v.id
                )));
            }
        }
        Ok(Self { vehicles })
    }

    /// Parse a catalog from a JSON array of `{ "id", "name" }` records.
    pub fn from_reader<R: std::io::Read>(r: R) -> WrapResult<Self> {
        let vehicles: Vec<Vehicle> = serde_json::from_reader(r)
            .map_err(|e| WrapError::validation(format!("parse vehicle catalog JSON: {e}")))?;
        Self::new(vehicles)
    }

    /// Parse a catalog from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> WrapResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            WrapError::validation(format!("open vehicle catalog '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Look up a vehicle by id.
    pub fn get(&self, id: &VehicleId) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| &v.id == id)
    }

    /// Vehicles in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Vehicle> {
        self.vehicles.iter()
    }

    /// Number of vehicles.
    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    /// Return `true` when the catalog has no vehicles.
    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/catalog.rs"]
mod tests;
