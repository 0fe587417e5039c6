//! In-progress form state driven by the dependent-field rules.

use std::collections::BTreeMap;

use tracing::debug;
use uuid::Uuid;

use gemform_domain::{CaratOption, CatalogOption, Category, FieldId, Metal, TypeOption};

use crate::{
    catalog::OptionCatalog,
    error::CoreError,
    resolver::{
        resolve_category, resolve_metal, resolve_unselected_category, resolve_unselected_metal,
        Visibility,
    },
    source::FieldValueSource,
};

/// One form session. Created fresh per submission attempt and never persisted.
///
/// Category and metal are tracked as typed selections because they drive the
/// option sets of `type` and `carat`; every other field is raw text.
#[derive(Debug, Clone)]
pub struct FormSession {
    id: Uuid,
    category: Option<Category>,
    metal: Option<Metal>,
    type_options: &'static [TypeOption],
    carat_options: &'static [CaratOption],
    visibility: Visibility,
    values: BTreeMap<FieldId, String>,
}

impl Default for FormSession {
    fn default() -> Self {
        Self::new()
    }
}

impl FormSession {
    pub fn new() -> Self {
        let category = resolve_unselected_category();
        Self {
            id: Uuid::new_v4(),
            category: None,
            metal: None,
            type_options: category.type_options,
            carat_options: resolve_unselected_metal(),
            visibility: category.visibility,
            values: BTreeMap::new(),
        }
    }

    /// Builds a session by replaying every field of `source` in form order.
    pub fn from_source(source: &impl FieldValueSource) -> Result<Self, CoreError> {
        let mut session = Self::new();
        for field in FieldId::ALL {
            let value = source.get_value(*field);
            if !value.is_empty() {
                session.set_value(*field, value)?;
            }
        }
        Ok(session)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn category(&self) -> Option<Category> {
        self.category
    }

    pub fn metal(&self) -> Option<Metal> {
        self.metal
    }

    pub fn type_options(&self) -> &'static [TypeOption] {
        self.type_options
    }

    pub fn carat_options(&self) -> &'static [CaratOption] {
        self.carat_options
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Fields currently shown, in form order.
    pub fn visible_fields(&self) -> Vec<FieldId> {
        FieldId::ALL
            .iter()
            .copied()
            .filter(|field| self.visibility.shows(*field))
            .collect()
    }

    /// Option labels currently offered for a choice field.
    pub fn options_for(&self, field: FieldId) -> Option<Vec<&'static str>> {
        match field {
            FieldId::Type => Some(self.type_options.iter().map(|o| o.label()).collect()),
            FieldId::Carat => Some(self.carat_options.iter().map(|o| o.label()).collect()),
            other => OptionCatalog::static_labels(other),
        }
    }

    /// Changes the category and discards the chosen type. Re-selecting the
    /// current category is not a change and keeps the type.
    pub fn select_category(&mut self, category: Category) {
        if self.category == Some(category) {
            return;
        }
        let resolution = resolve_category(category);
        self.category = Some(category);
        self.type_options = resolution.type_options;
        self.visibility = resolution.visibility;
        self.values
            .insert(FieldId::Category, category.label().to_string());
        let previous_type = self.values.remove(&FieldId::Type);
        debug!(
            session = %self.id,
            category = %category,
            cleared_type = previous_type.as_deref().unwrap_or(""),
            "category changed"
        );
    }

    pub fn clear_category(&mut self) {
        let resolution = resolve_unselected_category();
        self.category = None;
        self.type_options = resolution.type_options;
        self.visibility = resolution.visibility;
        self.values.remove(&FieldId::Category);
        self.values.remove(&FieldId::Type);
        debug!(session = %self.id, "category cleared");
    }

    pub fn select_type(&mut self, option: TypeOption) -> Result<(), CoreError> {
        if !self.type_options.contains(&option) {
            return Err(CoreError::OptionUnavailable {
                field: FieldId::Type,
                value: option.label().to_string(),
            });
        }
        self.values.insert(FieldId::Type, option.label().to_string());
        Ok(())
    }

    /// Changes the metal and its carat options. An already chosen carat is
    /// kept even when the new metal does not offer it.
    pub fn select_metal(&mut self, metal: Metal) {
        self.metal = Some(metal);
        self.carat_options = resolve_metal(metal);
        self.values.insert(FieldId::Metal, metal.label().to_string());
        debug!(session = %self.id, metal = %metal, "metal changed");
    }

    pub fn clear_metal(&mut self) {
        self.metal = None;
        self.carat_options = resolve_unselected_metal();
        self.values.remove(&FieldId::Metal);
    }

    pub fn select_carat(&mut self, option: CaratOption) -> Result<(), CoreError> {
        if !self.carat_options.contains(&option) {
            return Err(CoreError::OptionUnavailable {
                field: FieldId::Carat,
                value: option.label().to_string(),
            });
        }
        self.values
            .insert(FieldId::Carat, option.label().to_string());
        Ok(())
    }

    /// Records a raw value as committed by the presentation layer.
    ///
    /// `category` and `metal` are parsed so the dependent option sets follow;
    /// a blank or whitespace-only value clears them. Every other field is
    /// stored verbatim.
    pub fn set_value(&mut self, field: FieldId, value: impl Into<String>) -> Result<(), CoreError> {
        let value = value.into();
        match field {
            FieldId::Category if value.trim().is_empty() => self.clear_category(),
            FieldId::Category => {
                let category = OptionCatalog::parse::<Category>(field, &value)?;
                self.select_category(category);
            }
            FieldId::Metal if value.trim().is_empty() => self.clear_metal(),
            FieldId::Metal => {
                let metal = OptionCatalog::parse::<Metal>(field, &value)?;
                self.select_metal(metal);
            }
            _ if value.is_empty() => {
                self.values.remove(&field);
            }
            _ => {
                self.values.insert(field, value);
            }
        }
        Ok(())
    }

    pub fn value(&self, field: FieldId) -> Option<&str> {
        self.values.get(&field).map(String::as_str)
    }
}

impl FieldValueSource for FormSession {
    fn get_value(&self, field: FieldId) -> String {
        self.value(field).map(str::to_string).unwrap_or_default()
    }
}
