//! Identifiers for every raw input the form exposes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Raw field identifier, as reported by the field-value source.
///
/// The serialized form is the wire id (`"ringSizeFrom"`, `"stoneType"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldId {
    Category,
    Type,
    LengthFrom,
    LengthTo,
    WidthFrom,
    WidthTo,
    WeightFrom,
    WeightTo,
    Metal,
    Carat,
    Brand,
    PriceFrom,
    PriceTo,
    RingSizeFrom,
    RingSizeTo,
    StoneType,
    StoneColor,
    Email,
    Phone,
    Name,
}

impl FieldId {
    /// All identifiers in form order.
    pub const ALL: &'static [FieldId] = &[
        FieldId::Category,
        FieldId::Type,
        FieldId::LengthFrom,
        FieldId::LengthTo,
        FieldId::WidthFrom,
        FieldId::WidthTo,
        FieldId::WeightFrom,
        FieldId::WeightTo,
        FieldId::Metal,
        FieldId::Carat,
        FieldId::Brand,
        FieldId::PriceFrom,
        FieldId::PriceTo,
        FieldId::RingSizeFrom,
        FieldId::RingSizeTo,
        FieldId::StoneType,
        FieldId::StoneColor,
        FieldId::Email,
        FieldId::Phone,
        FieldId::Name,
    ];

    pub const CONTACT: &'static [FieldId] = &[FieldId::Email, FieldId::Phone, FieldId::Name];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldId::Category => "category",
            FieldId::Type => "type",
            FieldId::LengthFrom => "lengthFrom",
            FieldId::LengthTo => "lengthTo",
            FieldId::WidthFrom => "widthFrom",
            FieldId::WidthTo => "widthTo",
            FieldId::WeightFrom => "weightFrom",
            FieldId::WeightTo => "weightTo",
            FieldId::Metal => "metal",
            FieldId::Carat => "carat",
            FieldId::Brand => "brand",
            FieldId::PriceFrom => "priceFrom",
            FieldId::PriceTo => "priceTo",
            FieldId::RingSizeFrom => "ringSizeFrom",
            FieldId::RingSizeTo => "ringSizeTo",
            FieldId::StoneType => "stoneType",
            FieldId::StoneColor => "stoneColor",
            FieldId::Email => "email",
            FieldId::Phone => "phone",
            FieldId::Name => "name",
        }
    }

    pub fn from_id(value: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|field| field.as_str() == value.trim())
    }

    pub fn label(&self) -> &'static str {
        match self {
            FieldId::Category => "Category",
            FieldId::Type => "Type",
            FieldId::LengthFrom => "Length (from)",
            FieldId::LengthTo => "Length (to)",
            FieldId::WidthFrom => "Width (from)",
            FieldId::WidthTo => "Width (to)",
            FieldId::WeightFrom => "Weight (from)",
            FieldId::WeightTo => "Weight (to)",
            FieldId::Metal => "Metal",
            FieldId::Carat => "Carat",
            FieldId::Brand => "Brand",
            FieldId::PriceFrom => "Price (from)",
            FieldId::PriceTo => "Price (to)",
            FieldId::RingSizeFrom => "Ring size (from)",
            FieldId::RingSizeTo => "Ring size (to)",
            FieldId::StoneType => "Stone type",
            FieldId::StoneColor => "Stone color",
            FieldId::Email => "Email",
            FieldId::Phone => "Phone",
            FieldId::Name => "Name",
        }
    }

    /// Whether the presentation layer flags this field as required.
    ///
    /// This is independent of which fields validation actually enforces.
    pub fn marked_required(&self) -> bool {
        matches!(
            self,
            FieldId::Category | FieldId::Email | FieldId::Phone | FieldId::Name
        )
    }

    pub fn is_contact(&self) -> bool {
        Self::CONTACT.contains(self)
    }

    /// The range this identifier is one side of, if any.
    pub fn range(&self) -> Option<RangeKind> {
        RangeKind::ALL
            .iter()
            .copied()
            .find(|range| range.from_field() == *self || range.to_field() == *self)
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The five two-sided numeric filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeKind {
    Length,
    Width,
    Weight,
    Price,
    RingSize,
}

impl RangeKind {
    pub const ALL: &'static [RangeKind] = &[
        RangeKind::Length,
        RangeKind::Width,
        RangeKind::Weight,
        RangeKind::Price,
        RangeKind::RingSize,
    ];

    /// Key used for this range inside the filter payload.
    pub fn key(&self) -> &'static str {
        match self {
            RangeKind::Length => "length",
            RangeKind::Width => "width",
            RangeKind::Weight => "weight",
            RangeKind::Price => "price",
            RangeKind::RingSize => "ringSize",
        }
    }

    pub fn from_field(&self) -> FieldId {
        match self {
            RangeKind::Length => FieldId::LengthFrom,
            RangeKind::Width => FieldId::WidthFrom,
            RangeKind::Weight => FieldId::WeightFrom,
            RangeKind::Price => FieldId::PriceFrom,
            RangeKind::RingSize => FieldId::RingSizeFrom,
        }
    }

    pub fn to_field(&self) -> FieldId {
        match self {
            RangeKind::Length => FieldId::LengthTo,
            RangeKind::Width => FieldId::WidthTo,
            RangeKind::Weight => FieldId::WeightTo,
            RangeKind::Price => FieldId::PriceTo,
            RangeKind::RingSize => FieldId::RingSizeTo,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_ids_match_serde_names() {
        for field in FieldId::ALL {
            let json = serde_json::to_string(field).unwrap();
            assert_eq!(json, format!("\"{}\"", field.as_str()));
            assert_eq!(FieldId::from_id(field.as_str()), Some(*field));
        }
    }

    #[test]
    fn range_sides_map_back_to_their_range() {
        assert_eq!(FieldId::RingSizeTo.range(), Some(RangeKind::RingSize));
        assert_eq!(FieldId::PriceFrom.range(), Some(RangeKind::Price));
        assert_eq!(FieldId::Metal.range(), None);
    }

    #[test]
    fn marked_required_differs_from_contact_set() {
        let marked: Vec<_> = FieldId::ALL
            .iter()
            .filter(|field| field.marked_required())
            .collect();
        assert_eq!(
            marked,
            vec![&FieldId::Category, &FieldId::Email, &FieldId::Phone, &FieldId::Name]
        );
        assert!(!FieldId::Category.is_contact());
    }
}
