//! Wizard-style entry of the product-search form.
//!
//! The field list is not fixed: choosing a category discloses or hides field
//! groups and changes the `type` options, and choosing a metal changes the
//! `carat` options. The engine therefore re-reads the visible fields from the
//! [`FormSession`] after every committed answer.

use std::fmt;

use gemform_core::FormSession;
use gemform_domain::FieldId;

use crate::cli::io;
use crate::errors::CliError;

/// High-level lifecycle states emitted by the form runner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormResult<T> {
    Completed(T),
    Cancelled,
}

/// Describes how prompts can be answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptResponse {
    /// User supplied a value. An empty value clears the field.
    Value(String),
    /// Keep the current value and move on.
    Keep,
    /// Abort the entire wizard immediately.
    Cancel,
    /// Go back to the previous field.
    Back,
    /// Request additional information for the current field.
    Help,
}

/// Responses accepted when confirming the collected data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmationResponse {
    Confirm,
    Back,
    Cancel,
}

/// Field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Supported data kinds for form fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
    /// Options offered right now; dependent fields change between prompts.
    Choice(Vec<&'static str>),
}

#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    pub field: FieldId,
    pub label: &'static str,
    pub kind: FieldKind,
    /// Shows the required marker. Enforcement happens at submission.
    pub required: bool,
    pub help: Option<&'static str>,
}

impl FieldDescriptor {
    fn for_session(session: &FormSession, field: FieldId) -> Self {
        let kind = match session.options_for(field) {
            Some(options) => FieldKind::Choice(options),
            None if field.range().is_some() => FieldKind::Number,
            None => FieldKind::Text,
        };
        Self {
            field,
            label: field.label(),
            kind,
            required: field.marked_required(),
            help: help_for(field),
        }
    }
}

fn help_for(field: FieldId) -> Option<&'static str> {
    match field {
        FieldId::Category => Some("Rings disclose ring size and stone details; other categories disclose length and width."),
        FieldId::Type => Some("The types offered depend on the selected category."),
        FieldId::Carat => Some("Silver offers fineness grades; every other metal offers karats."),
        FieldId::Email | FieldId::Phone | FieldId::Name => {
            Some("Contact details are required before the search can be submitted.")
        }
        other if other.range().is_some() => {
            Some("Leave one side empty to search for that exact value.")
        }
        _ => None,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSummary {
    pub entries: Vec<(String, String)>,
}

/// Data provided to render the current field.
pub struct PromptContext<'a> {
    pub descriptor: &'a FieldDescriptor,
    pub current: Option<&'a str>,
    pub index: usize,
    pub total: usize,
}

/// Interaction surface used by the form engine. An `Err` means the prompt
/// itself failed (no terminal, closed input) and aborts the run; a user
/// cancel is `Ok(PromptResponse::Cancel)`.
pub trait FormInteraction {
    fn prompt_field(&mut self, context: &PromptContext<'_>) -> Result<PromptResponse, CliError>;

    fn confirm(
        &mut self,
        summary: &FormSummary,
        lines: &[String],
    ) -> Result<ConfirmationResponse, CliError>;
}

/// The search form as a sequence of prompts over one [`FormSession`].
#[derive(Debug, Default)]
pub struct SearchWizard {
    session: FormSession,
}

impl SearchWizard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from an existing session, e.g. values loaded from a file.
    pub fn with_session(session: FormSession) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &FormSession {
        &self.session
    }

    pub fn into_session(self) -> FormSession {
        self.session
    }

    pub fn descriptor(&self, field: FieldId) -> FieldDescriptor {
        FieldDescriptor::for_session(&self.session, field)
    }

    /// Validates `raw` against the field kind and commits it to the session.
    pub fn apply(&mut self, field: FieldId, raw: &str) -> Result<(), ValidationError> {
        let descriptor = self.descriptor(field);
        let value = match &descriptor.kind {
            FieldKind::Choice(options) => {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    String::new()
                } else {
                    let needle = trimmed.to_lowercase();
                    options
                        .iter()
                        .find(|candidate| candidate.to_lowercase() == needle)
                        .map(|label| label.to_string())
                        .ok_or_else(|| {
                            ValidationError::new(format!(
                                "Value must be one of: {}",
                                options.join(", ")
                            ))
                        })?
                }
            }
            FieldKind::Number => {
                let trimmed = raw.trim();
                if !trimmed.is_empty() && trimmed.parse::<f64>().is_err() {
                    return Err(ValidationError::new("Enter a number or leave empty"));
                }
                trimmed.to_string()
            }
            FieldKind::Text => raw.to_string(),
        };

        self.session
            .set_value(field, value)
            .map_err(|err| ValidationError::new(err.to_string()))
    }

    /// Visible fields with their current values, in form order.
    pub fn summary(&self) -> FormSummary {
        let entries = self
            .session
            .visible_fields()
            .into_iter()
            .map(|field| {
                let value = self
                    .session
                    .value(field)
                    .filter(|value| !value.is_empty())
                    .unwrap_or("-");
                (field.label().to_string(), value.to_string())
            })
            .collect();
        FormSummary { entries }
    }

    fn next_field(&self, after: Option<FieldId>) -> Option<FieldId> {
        self.session
            .visible_fields()
            .into_iter()
            .find(|field| after.map_or(true, |after| *field > after))
    }

    fn previous_field(&self, before: FieldId) -> Option<FieldId> {
        self.session
            .visible_fields()
            .into_iter()
            .rev()
            .find(|field| *field < before)
    }
}

/// Drives a [`SearchWizard`] using a [`FormInteraction`] implementation.
pub struct FormEngine {
    wizard: SearchWizard,
}

impl FormEngine {
    pub fn new(wizard: SearchWizard) -> Self {
        Self { wizard }
    }

    pub fn run<I: FormInteraction>(
        mut self,
        interaction: &mut I,
    ) -> Result<FormResult<FormSession>, CliError> {
        let mut current = self.wizard.next_field(None);

        loop {
            let Some(field) = current else {
                let summary = self.wizard.summary();
                let lines = format_summary_lines(&summary);
                match interaction.confirm(&summary, &lines)? {
                    ConfirmationResponse::Confirm => {
                        return Ok(FormResult::Completed(self.wizard.into_session()))
                    }
                    ConfirmationResponse::Back => {
                        current = self.wizard.session().visible_fields().last().copied();
                        continue;
                    }
                    ConfirmationResponse::Cancel => return Ok(FormResult::Cancelled),
                }
            };

            let visible = self.wizard.session().visible_fields();
            let index = visible.iter().position(|f| *f == field).unwrap_or(0);
            let descriptor = self.wizard.descriptor(field);
            let response = {
                let context = PromptContext {
                    descriptor: &descriptor,
                    current: self.wizard.session().value(field),
                    index,
                    total: visible.len(),
                };
                interaction.prompt_field(&context)?
            };

            match response {
                PromptResponse::Cancel => return Ok(FormResult::Cancelled),
                PromptResponse::Back => match self.wizard.previous_field(field) {
                    Some(previous) => current = Some(previous),
                    None => io::print_warning("Already at the first field."),
                },
                PromptResponse::Help => match descriptor.help {
                    Some(help) => io::print_info(help),
                    None => io::print_info("No additional information available for this field."),
                },
                PromptResponse::Keep => current = self.wizard.next_field(Some(field)),
                PromptResponse::Value(raw) => match self.wizard.apply(field, &raw) {
                    Ok(()) => current = self.wizard.next_field(Some(field)),
                    Err(err) => io::print_warning(&err.message),
                },
            }
        }
    }
}

pub fn format_summary_lines(summary: &FormSummary) -> Vec<String> {
    let width = summary
        .entries
        .iter()
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(0);
    summary
        .entries
        .iter()
        .map(|(label, value)| format!("{label:<width$} : {value}"))
        .collect()
}
