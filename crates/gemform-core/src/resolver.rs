//! Pure resolution of dependent option sets and field-group visibility.

use gemform_domain::{CaratOption, Category, FieldId, Metal, TypeOption};

use crate::catalog::OptionCatalog;

/// Which optional field groups are disclosed.
///
/// The flags are independent so a future category can combine them freely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Visibility {
    pub show_length_width: bool,
    pub show_ring_size: bool,
    pub show_stone_details: bool,
}

impl Visibility {
    /// Nothing disclosed; the state before any category is chosen.
    pub fn hidden() -> Self {
        Self::default()
    }

    /// Whether `field` is currently shown. Fields outside the three groups
    /// are always shown.
    pub fn shows(&self, field: FieldId) -> bool {
        match field {
            FieldId::LengthFrom | FieldId::LengthTo | FieldId::WidthFrom | FieldId::WidthTo => {
                self.show_length_width
            }
            FieldId::RingSizeFrom | FieldId::RingSizeTo => self.show_ring_size,
            FieldId::StoneType | FieldId::StoneColor => self.show_stone_details,
            _ => true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryResolution {
    pub type_options: &'static [TypeOption],
    pub visibility: Visibility,
}

pub fn resolve_category(category: Category) -> CategoryResolution {
    CategoryResolution {
        type_options: OptionCatalog::types_for(category),
        visibility: OptionCatalog::visibility_for(category),
    }
}

/// Resolution in effect while no category has been chosen.
pub fn resolve_unselected_category() -> CategoryResolution {
    CategoryResolution {
        type_options: TypeOption::OTHER_TYPES,
        visibility: Visibility::hidden(),
    }
}

pub fn resolve_metal(metal: Metal) -> &'static [CaratOption] {
    OptionCatalog::carats_for(metal)
}

/// Carat options in effect while no metal has been chosen.
pub fn resolve_unselected_metal() -> &'static [CaratOption] {
    CaratOption::GOLD_KARATS
}
