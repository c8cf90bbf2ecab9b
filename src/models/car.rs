use serde::{Deserialize, Serialize};

use super::{null_as_default, require, ModelError, Validate};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Car {
    pub id: String,
    pub make: String,
    pub model: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub year: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub color: String,
}

impl Car {
    /// Coche de ejemplo que muestra y guarda la vista de coches
    pub fn sample() -> Self {
        Self {
            id: "123".to_string(),
            make: "Toyota".to_string(),
            model: "Camry".to_string(),
            year: 2024,
            color: "Blue".to_string(),
        }
    }

    /// "Toyota Camry"
    pub fn display_name(&self) -> String {
        format!("{} {}", self.make, self.model)
    }
}

impl Validate for Car {
    fn validate(&self) -> Result<(), ModelError> {
        require("Car", "id", &self.id)?;
        require("Car", "make", &self.make)?;
        require("Car", "model", &self.model)?;
        Ok(())
    }
}
