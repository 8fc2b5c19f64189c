//! Sticker size types.

use core::fmt;
use core::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::status::UnknownVariant;

/// Measurement unit for sticker dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SizeUnit {
    #[default]
    In,
    Cm,
}

impl SizeUnit {
    /// The text form stored in the database.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::In => "in",
            Self::Cm => "cm",
        }
    }
}

impl FromStr for SizeUnit {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "in" => Ok(Self::In),
            "cm" => Ok(Self::Cm),
            other => Err(UnknownVariant::new("size unit", other)),
        }
    }
}

impl fmt::Display for SizeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named die-cut size a product can be ordered in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StickerSize {
    /// Display name, e.g. "Medium".
    pub name: String,
    pub width: Decimal,
    pub height: Decimal,
    pub unit: SizeUnit,
}

impl StickerSize {
    /// Create a size with inch dimensions.
    #[must_use]
    pub fn inches(name: &str, width: Decimal, height: Decimal) -> Self {
        Self {
            name: name.to_owned(),
            width,
            height,
            unit: SizeUnit::In,
        }
    }

    /// The standard size list applied to products created without one.
    #[must_use]
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::inches("Small", Decimal::from(2), Decimal::from(2)),
            Self::inches("Medium", Decimal::from(3), Decimal::from(3)),
            Self::inches("Large", Decimal::from(4), Decimal::from(4)),
        ]
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_non_empty_and_named() {
        let sizes = StickerSize::defaults();
        assert!(!sizes.is_empty());
        assert!(sizes.iter().any(|s| s.name == "Medium"));
    }

    #[test]
    fn serializes_in_camel_case() {
        let size = StickerSize::inches("Small", Decimal::from(2), Decimal::from(2));
        let json = serde_json::to_value(&size).unwrap();
        assert_eq!(json["unit"], "in");
        assert_eq!(json["name"], "Small");
    }

    #[test]
    fn unit_round_trips_through_text() {
        assert_eq!("cm".parse::<SizeUnit>().unwrap(), SizeUnit::Cm);
        assert!("ft".parse::<SizeUnit>().is_err());
    }
}
