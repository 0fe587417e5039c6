//! Closed option sets offered by the search form.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Shared contract for every enumerated option the form can offer.
///
/// `label` is both the display text and the wire value sent downstream.
pub trait CatalogOption: Copy + Sized + 'static {
    /// Every value of the option set, in presentation order.
    fn all() -> &'static [Self];

    fn label(&self) -> &'static str;

    /// Case-insensitive lookup by label. Surrounding whitespace is ignored.
    fn from_label(value: &str) -> Option<Self> {
        let needle = value.trim();
        Self::all()
            .iter()
            .copied()
            .find(|candidate| candidate.label().eq_ignore_ascii_case(needle))
    }

    fn labels() -> Vec<&'static str> {
        Self::all().iter().map(|option| option.label()).collect()
    }
}

/// Top-level product kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Ring,
    Necklace,
    Wristband,
}

impl CatalogOption for Category {
    fn all() -> &'static [Self] {
        &[Category::Ring, Category::Necklace, Category::Wristband]
    }

    fn label(&self) -> &'static str {
        match self {
            Category::Ring => "Ring",
            Category::Necklace => "Necklace",
            Category::Wristband => "Wristband",
        }
    }
}

/// Product type. Ring types and the remaining types are disjoint groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeOption {
    Alliance,
    Signet,
    Anchor,
    Beehive,
}

impl TypeOption {
    pub const RING_TYPES: &'static [TypeOption] = &[TypeOption::Alliance, TypeOption::Signet];
    pub const OTHER_TYPES: &'static [TypeOption] = &[TypeOption::Anchor, TypeOption::Beehive];
}

impl CatalogOption for TypeOption {
    fn all() -> &'static [Self] {
        &[
            TypeOption::Alliance,
            TypeOption::Signet,
            TypeOption::Anchor,
            TypeOption::Beehive,
        ]
    }

    fn label(&self) -> &'static str {
        match self {
            TypeOption::Alliance => "Alliance",
            TypeOption::Signet => "Signet",
            TypeOption::Anchor => "Anchor",
            TypeOption::Beehive => "Beehive",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metal {
    Gold,
    #[serde(rename = "White gold")]
    WhiteGold,
    #[serde(rename = "Rose gold")]
    RoseGold,
    Silver,
}

impl CatalogOption for Metal {
    fn all() -> &'static [Self] {
        &[Metal::Gold, Metal::WhiteGold, Metal::RoseGold, Metal::Silver]
    }

    fn label(&self) -> &'static str {
        match self {
            Metal::Gold => "Gold",
            Metal::WhiteGold => "White gold",
            Metal::RoseGold => "Rose gold",
            Metal::Silver => "Silver",
        }
    }
}

/// Fineness grade. Silver grades and gold karats share one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CaratOption {
    Sterling,
    #[serde(rename = "Tretårnet")]
    Tretarnet,
    #[serde(rename = "24")]
    K24,
    #[serde(rename = "21")]
    K21,
    #[serde(rename = "18")]
    K18,
    #[serde(rename = "14")]
    K14,
}

impl CaratOption {
    pub const SILVER_GRADES: &'static [CaratOption] =
        &[CaratOption::Sterling, CaratOption::Tretarnet];
    pub const GOLD_KARATS: &'static [CaratOption] = &[
        CaratOption::K24,
        CaratOption::K21,
        CaratOption::K18,
        CaratOption::K14,
    ];
}

impl CatalogOption for CaratOption {
    fn all() -> &'static [Self] {
        &[
            CaratOption::Sterling,
            CaratOption::Tretarnet,
            CaratOption::K24,
            CaratOption::K21,
            CaratOption::K18,
            CaratOption::K14,
        ]
    }

    fn label(&self) -> &'static str {
        match self {
            CaratOption::Sterling => "Sterling",
            CaratOption::Tretarnet => "Tretårnet",
            CaratOption::K24 => "24",
            CaratOption::K21 => "21",
            CaratOption::K18 => "18",
            CaratOption::K14 => "14",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Brand {
    #[serde(rename = "BNH")]
    Bnh,
    Pandora,
}

impl CatalogOption for Brand {
    fn all() -> &'static [Self] {
        &[Brand::Bnh, Brand::Pandora]
    }

    fn label(&self) -> &'static str {
        match self {
            Brand::Bnh => "BNH",
            Brand::Pandora => "Pandora",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StoneType {
    Diamond,
    Pearls,
}

impl CatalogOption for StoneType {
    fn all() -> &'static [Self] {
        &[StoneType::Diamond, StoneType::Pearls]
    }

    fn label(&self) -> &'static str {
        match self {
            StoneType::Diamond => "Diamond",
            StoneType::Pearls => "Pearls",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StoneColor {
    Red,
    White,
}

impl CatalogOption for StoneColor {
    fn all() -> &'static [Self] {
        &[StoneColor::Red, StoneColor::White]
    }

    fn label(&self) -> &'static str {
        match self {
            StoneColor::Red => "Red",
            StoneColor::White => "White",
        }
    }
}

macro_rules! display_via_label {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.label())
                }
            }
        )+
    };
}

display_via_label!(
    Category,
    TypeOption,
    Metal,
    CaratOption,
    Brand,
    StoneType,
    StoneColor
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_parse_case_insensitively() {
        assert_eq!(Metal::from_label("white GOLD"), Some(Metal::WhiteGold));
        assert_eq!(CaratOption::from_label(" tretårnet "), Some(CaratOption::Tretarnet));
        assert_eq!(Category::from_label("Bracelet"), None);
    }

    #[test]
    fn serde_uses_wire_labels() {
        let json = serde_json::to_string(&CaratOption::K18).unwrap();
        assert_eq!(json, "\"18\"");
        let metal: Metal = serde_json::from_str("\"Rose gold\"").unwrap();
        assert_eq!(metal, Metal::RoseGold);
        assert_eq!(serde_json::to_string(&Brand::Bnh).unwrap(), "\"BNH\"");
    }

    #[test]
    fn type_groups_partition_all_types() {
        let mut grouped: Vec<_> = TypeOption::RING_TYPES
            .iter()
            .chain(TypeOption::OTHER_TYPES)
            .copied()
            .collect();
        grouped.sort_by_key(|option| option.label());
        let mut all = TypeOption::all().to_vec();
        all.sort_by_key(|option| option.label());
        assert_eq!(grouped, all);
    }
}
