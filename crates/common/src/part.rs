use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// The seven fixed hardware categories a build is made of
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartCategory {
    Cpu,
    Motherboard,
    Ram,
    Gpu,
    Storage,
    Psu,
    Case,
}

impl PartCategory {
    /// All categories in display order
    pub const ALL: [PartCategory; 7] = [
        PartCategory::Cpu,
        PartCategory::Motherboard,
        PartCategory::Ram,
        PartCategory::Gpu,
        PartCategory::Storage,
        PartCategory::Psu,
        PartCategory::Case,
    ];

    /// Wire tag used in the part's `type` field
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cpu => "cpu",
            Self::Motherboard => "motherboard",
            Self::Ram => "ram",
            Self::Gpu => "gpu",
            Self::Storage => "storage",
            Self::Psu => "psu",
            Self::Case => "case",
        }
    }

    /// Human readable label
    pub fn label(self) -> &'static str {
        match self {
            Self::Cpu => "CPU",
            Self::Motherboard => "Motherboard",
            Self::Ram => "RAM",
            Self::Gpu => "GPU",
            Self::Storage => "Storage",
            Self::Psu => "PSU",
            Self::Case => "Case",
        }
    }
}

impl fmt::Display for PartCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PartCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == lower)
            .ok_or_else(|| Error::UnknownCategory(s.to_string()))
    }
}

/// A catalog entry
///
/// Category-specific attributes (socket, wattage, form factor, ...) are kept
/// verbatim in `attributes` and written back out unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    /// Stable identifier, unique within the catalog
    pub id: String,

    /// Hardware category
    #[serde(rename = "type")]
    pub category: PartCategory,

    /// Display name
    pub name: String,

    /// Unit price
    pub price: f64,

    /// Everything else the backend sent
    #[serde(flatten)]
    pub attributes: serde_json::Map<String, serde_json::Value>,
}

impl Part {
    /// Create a part with no extra attributes
    pub fn new(
        id: impl Into<String>,
        category: PartCategory,
        name: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            id: id.into(),
            category,
            name: name.into(),
            price,
            attributes: serde_json::Map::new(),
        }
    }

    /// Attach an attribute
    pub fn with_attribute(mut self, key: &str, value: impl Into<serde_json::Value>) -> Self {
        self.attributes.insert(key.to_string(), value.into());
        self
    }

    /// Look up a string attribute
    pub fn attr_str(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).and_then(|v| v.as_str())
    }

    /// Look up a numeric attribute
    pub fn attr_u64(&self, key: &str) -> Option<u64> {
        self.attributes.get(key).and_then(|v| v.as_u64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_category_parse_is_case_insensitive() {
        assert_eq!("GPU".parse::<PartCategory>().unwrap(), PartCategory::Gpu);
        assert_eq!(" psu ".parse::<PartCategory>().unwrap(), PartCategory::Psu);
        assert!(matches!(
            "cooler".parse::<PartCategory>(),
            Err(Error::UnknownCategory(_))
        ));
    }

    #[test]
    fn test_part_keeps_unknown_attributes() {
        let raw = json!({
            "id": "c1",
            "type": "cpu",
            "name": "Ryzen 5",
            "price": 199,
            "socket": "AM5",
            "tdp": 65
        });

        let part: Part = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(part.category, PartCategory::Cpu);
        assert_eq!(part.price, 199.0);
        assert_eq!(part.attr_str("socket"), Some("AM5"));
        assert_eq!(part.attr_u64("tdp"), Some(65));

        let back = serde_json::to_value(&part).unwrap();
        assert_eq!(back["socket"], "AM5");
        assert_eq!(back["type"], "cpu");
    }
}
