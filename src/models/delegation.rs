use serde::{Deserialize, Serialize};

use super::{require, ModelError, Validate};

/// Delegación: punto de recogida / devolución del coche
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Delegation {
    pub id: String,
    pub name: String,

    // Campos descriptivos, opcionales en la respuesta del endpoint
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub available_car_qty: Option<u32>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl Delegation {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            address: None,
            city: None,
            available_car_qty: None,
            phone: None,
            email: None,
        }
    }
}

impl Validate for Delegation {
    fn validate(&self) -> Result<(), ModelError> {
        require("Delegation", "id", &self.id)?;
        require("Delegation", "name", &self.name)?;
        Ok(())
    }
}
