//! Entity Models
//!
//! Data structures matching the remote REST entities. Every field besides the
//! identity is optional; the server assigns ids.

use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// A CRUD-managed record type with a server-assigned identity.
pub trait Entity:
    Clone + Default + PartialEq + std::fmt::Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// REST collection path, relative to the gateway origin.
    const RESOURCE: &'static str;

    /// Tag used in console log messages.
    const NAME: &'static str;

    fn id(&self) -> Option<i64>;
}

/// Car entity (carsapp service)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Car {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub make: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
}

impl Entity for Car {
    const RESOURCE: &'static str = "services/carsapp/api/cars";
    const NAME: &'static str = "car";

    fn id(&self) -> Option<i64> {
        self.id
    }
}

/// Dealer entity (dealersapp service)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dealer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl Entity for Dealer {
    const RESOURCE: &'static str = "services/dealersapp/api/dealers";
    const NAME: &'static str = "dealer";

    fn id(&self) -> Option<i64> {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entity_serializes_without_id() {
        let car = Car {
            make: Some("Honda".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&car).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json.get("make").unwrap(), "Honda");
        assert!(json.get("model").is_none());
    }

    #[test]
    fn test_entity_deserializes_partial_payload() {
        let dealer: Dealer = serde_json::from_str(r#"{"id":1,"name":"Acme Motors"}"#).unwrap();
        assert_eq!(dealer.id(), Some(1));
        assert_eq!(dealer.name.as_deref(), Some("Acme Motors"));
        assert_eq!(dealer.address, None);
    }

    #[test]
    fn test_default_entity_is_empty() {
        assert_eq!(Car::default().id(), None);
        assert_eq!(serde_json::to_string(&Dealer::default()).unwrap(), "{}");
    }
}
