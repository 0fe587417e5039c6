use std::fmt;

use dialoguer::{theme::ColorfulTheme, Input, Select};

use crate::cli::forms::{
    ConfirmationResponse, FieldKind, FormInteraction, FormSummary, PromptContext, PromptResponse,
};
use crate::cli::output;
use crate::errors::CliError;

/// Print an informational message via the standard CLI output helpers.
pub fn print_info(message: impl fmt::Display) {
    output::info(message);
}

/// Print a warning message via the standard CLI output helpers.
pub fn print_warning(message: impl fmt::Display) {
    output::warning(message);
}

/// Print an error message via the standard CLI output helpers.
pub fn print_error(message: impl fmt::Display) {
    output::error(message);
}

/// Print a success message via the standard CLI output helpers.
pub fn print_success(message: impl fmt::Display) {
    output::success(message);
}

const CLEAR_OPTION: &str = "(none)";
const BACK_OPTION: &str = "← Back";

/// Terminal implementation of [`FormInteraction`] backed by dialoguer.
pub struct DialoguerInteraction {
    theme: ColorfulTheme,
}

impl Default for DialoguerInteraction {
    fn default() -> Self {
        Self::new()
    }
}

impl DialoguerInteraction {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }

    fn step_title(context: &PromptContext<'_>) -> String {
        let marker = if context.descriptor.required { " *" } else { "" };
        format!(
            "Step {} / {}: {}{}",
            context.index + 1,
            context.total,
            context.descriptor.label,
            marker
        )
    }

    fn prompt_choice(
        &self,
        context: &PromptContext<'_>,
        options: &[&'static str],
    ) -> Result<PromptResponse, CliError> {
        let mut items: Vec<&str> = options.to_vec();
        items.push(CLEAR_OPTION);
        if context.index > 0 {
            items.push(BACK_OPTION);
        }
        let default = context
            .current
            .and_then(|current| options.iter().position(|option| *option == current))
            .unwrap_or(0);

        let selection = Select::with_theme(&self.theme)
            .with_prompt(Self::step_title(context))
            .items(&items)
            .default(default)
            .interact_opt()?;

        let response = match selection {
            Some(index) => match items[index] {
                BACK_OPTION => PromptResponse::Back,
                CLEAR_OPTION if context.current.is_none() => PromptResponse::Keep,
                CLEAR_OPTION => PromptResponse::Value(String::new()),
                label if context.current == Some(label) => PromptResponse::Keep,
                label => PromptResponse::Value(label.to_string()),
            },
            None if context.index > 0 => PromptResponse::Back,
            None => PromptResponse::Cancel,
        };
        Ok(response)
    }

    fn prompt_text(&self, context: &PromptContext<'_>) -> Result<PromptResponse, CliError> {
        let mut input = Input::<String>::with_theme(&self.theme)
            .with_prompt(format!(
                "{} (:back, :help, :clear, :cancel)",
                Self::step_title(context)
            ))
            .allow_empty(true);
        if let Some(current) = context.current {
            input = input.default(current.to_string()).show_default(true);
        }

        let buffer = input.interact_text()?;
        Ok(interpret_buffer(&buffer, context.current))
    }
}

/// Maps typed text to a response. Typing the current value keeps it.
fn interpret_buffer(buffer: &str, current: Option<&str>) -> PromptResponse {
    match buffer.trim() {
        ":back" => PromptResponse::Back,
        ":help" => PromptResponse::Help,
        ":cancel" => PromptResponse::Cancel,
        ":clear" => PromptResponse::Value(String::new()),
        "" if current.is_none() => PromptResponse::Keep,
        _ if current == Some(buffer) => PromptResponse::Keep,
        _ => PromptResponse::Value(buffer.to_string()),
    }
}

impl FormInteraction for DialoguerInteraction {
    fn prompt_field(&mut self, context: &PromptContext<'_>) -> Result<PromptResponse, CliError> {
        match &context.descriptor.kind {
            FieldKind::Choice(options) => self.prompt_choice(context, options),
            FieldKind::Text | FieldKind::Number => self.prompt_text(context),
        }
    }

    fn confirm(
        &mut self,
        _summary: &FormSummary,
        lines: &[String],
    ) -> Result<ConfirmationResponse, CliError> {
        output::section("Review");
        for line in lines {
            println!("  {line}");
        }
        println!();

        let choice = Select::with_theme(&self.theme)
            .with_prompt("Submit this search?")
            .items(&["Submit", "Edit previous field", "Cancel"])
            .default(0)
            .interact_opt()?;
        Ok(match choice {
            Some(0) => ConfirmationResponse::Confirm,
            Some(1) => ConfirmationResponse::Back,
            _ => ConfirmationResponse::Cancel,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_are_recognised() {
        assert_eq!(interpret_buffer(":back", None), PromptResponse::Back);
        assert_eq!(interpret_buffer(" :help ", Some("x")), PromptResponse::Help);
        assert_eq!(
            interpret_buffer(":clear", Some("x")),
            PromptResponse::Value(String::new())
        );
    }

    #[test]
    fn echoing_the_current_value_keeps_it() {
        assert_eq!(interpret_buffer("a@b.com", Some("a@b.com")), PromptResponse::Keep);
        assert_eq!(interpret_buffer("", None), PromptResponse::Keep);
        assert_eq!(
            interpret_buffer("new", Some("old")),
            PromptResponse::Value("new".into())
        );
    }
}
