use crate::core::types::PartId;
use serde::Serialize;

/// A single car part, either a catalog template or a produced unit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CarPart {
    pub id: PartId,
    pub name: String,
    /// Weight in the same unit as the parts file
    pub weight: f64,
    pub defective: bool,
}

impl CarPart {
    pub fn new(id: PartId, name: impl Into<String>, weight: f64, defective: bool) -> Self {
        Self {
            id,
            name: name.into(),
            weight,
            defective,
        }
    }
}

impl std::fmt::Display for CarPart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
