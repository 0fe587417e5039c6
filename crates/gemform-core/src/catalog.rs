//! Mapping tables between selections and the option sets they unlock.
//!
//! Adding a category or metal only touches the tables below; the resolver
//! and the session read them without knowing individual variants.

use strsim::levenshtein;

use gemform_domain::{
    Brand, CaratOption, CatalogOption, Category, FieldId, Metal, StoneColor, StoneType, TypeOption,
};

use crate::{error::CoreError, resolver::Visibility};

const SUGGESTION_DISTANCE: usize = 3;

pub struct OptionCatalog;

impl OptionCatalog {
    pub fn categories() -> &'static [Category] {
        Category::all()
    }

    pub fn metals() -> &'static [Metal] {
        Metal::all()
    }

    pub fn brands() -> &'static [Brand] {
        Brand::all()
    }

    pub fn stone_types() -> &'static [StoneType] {
        StoneType::all()
    }

    pub fn stone_colors() -> &'static [StoneColor] {
        StoneColor::all()
    }

    /// Type options allowed for a category. Anything other than a ring shares
    /// one type list.
    pub fn types_for(category: Category) -> &'static [TypeOption] {
        match category {
            Category::Ring => TypeOption::RING_TYPES,
            Category::Necklace | Category::Wristband => TypeOption::OTHER_TYPES,
        }
    }

    /// Carat options allowed for a metal.
    pub fn carats_for(metal: Metal) -> &'static [CaratOption] {
        match metal {
            Metal::Silver => CaratOption::SILVER_GRADES,
            Metal::Gold | Metal::WhiteGold | Metal::RoseGold => CaratOption::GOLD_KARATS,
        }
    }

    /// Field groups disclosed for a category.
    pub fn visibility_for(category: Category) -> Visibility {
        let is_ring = category == Category::Ring;
        Visibility {
            show_length_width: !is_ring,
            show_ring_size: is_ring,
            show_stone_details: is_ring,
        }
    }

    /// Static option labels for a choice field. Dependent fields (`type`,
    /// `carat`) and free-text fields return `None`.
    pub fn static_labels(field: FieldId) -> Option<Vec<&'static str>> {
        match field {
            FieldId::Category => Some(Category::labels()),
            FieldId::Metal => Some(Metal::labels()),
            FieldId::Brand => Some(Brand::labels()),
            FieldId::StoneType => Some(StoneType::labels()),
            FieldId::StoneColor => Some(StoneColor::labels()),
            _ => None,
        }
    }

    /// Parses a catalog label, reporting the nearest known label on failure.
    pub fn parse<T: CatalogOption>(field: FieldId, value: &str) -> Result<T, CoreError> {
        T::from_label(value).ok_or_else(|| CoreError::UnknownOption {
            field,
            value: value.to_string(),
            suggestion: closest_label(T::all(), value),
        })
    }
}

fn closest_label<T: CatalogOption>(options: &[T], input: &str) -> Option<&'static str> {
    let needle = input.trim().to_lowercase();
    options
        .iter()
        .map(|option| {
            (
                levenshtein(&option.label().to_lowercase(), &needle),
                option.label(),
            )
        })
        .min_by_key(|(distance, _)| *distance)
        .filter(|(distance, _)| *distance <= SUGGESTION_DISTANCE)
        .map(|(_, label)| label)
}
