use std::{
    env,
    path::{Path, PathBuf},
};

use strsim::levenshtein;
use tracing::debug;

use gemform_config::{Config, ConfigManager};
use gemform_core::{
    assemble_from, FieldValueSource, FormSession, FormValidator, OptionCatalog, SubmitOutcome,
    SubmitService,
};
use gemform_domain::{CatalogOption, Category, FieldId, Metal};
use gemform_http::HttpTransport;

use crate::cli::forms::{FormEngine, FormResult, SearchWizard};
use crate::cli::io::{self as cli_io, DialoguerInteraction};
use crate::cli::output::{self, OutputPreferences};
use crate::errors::CliError;
use crate::utils::{build_info, value_file};

/// Exit code for a form that failed required-field validation.
pub const EXIT_INVALID: i32 = 1;
/// Exit code for a valid form whose delivery failed.
pub const EXIT_TRANSPORT: i32 = 2;

const COMMANDS: &[(&str, &str)] = &[
    ("options", "List option sets; `options category <name>` or `options metal <name>` shows dependent options"),
    ("preview", "Validate a value file and print the payload that would be submitted"),
    ("submit", "Validate a value file and post it to the search agent"),
    ("wizard", "Fill in the search form interactively, optionally starting from a value file"),
    ("config", "`config show` prints the active settings, `config init` writes defaults"),
    ("version", "Show build information"),
    ("help", "Show this help"),
];

/// Parsed command line: global flags plus the command and its arguments.
#[derive(Debug, Default, PartialEq, Eq)]
struct Invocation {
    command: Option<String>,
    args: Vec<String>,
    config_path: Option<PathBuf>,
    plain: bool,
    quiet: bool,
}

fn parse_args(raw: impl IntoIterator<Item = String>) -> Result<Invocation, CliError> {
    let mut invocation = Invocation::default();
    let mut raw = raw.into_iter();
    while let Some(arg) = raw.next() {
        match arg.as_str() {
            "--config" => {
                let path = raw
                    .next()
                    .ok_or_else(|| CliError::Usage("`--config` expects a path".into()))?;
                invocation.config_path = Some(PathBuf::from(path));
            }
            "--plain" => invocation.plain = true,
            "--quiet" | "-q" => invocation.quiet = true,
            "--help" | "-h" if invocation.command.is_none() => {
                invocation.command = Some("help".into())
            }
            _ if invocation.command.is_none() => invocation.command = Some(arg),
            _ => invocation.args.push(arg),
        }
    }
    Ok(invocation)
}

pub fn run_cli() -> Result<i32, CliError> {
    run_with_args(env::args().skip(1))
}

/// Runs one command and returns the process exit code.
pub fn run_with_args(args: impl IntoIterator<Item = String>) -> Result<i32, CliError> {
    let invocation = parse_args(args)?;
    output::set_preferences(OutputPreferences {
        plain: invocation.plain || env::var_os("NO_COLOR").is_some(),
        quiet: invocation.quiet,
    });

    let manager = match &invocation.config_path {
        Some(path) => ConfigManager::new(path.clone()),
        None => ConfigManager::from_default_location(),
    };
    let args: Vec<&str> = invocation.args.iter().map(String::as_str).collect();
    debug!(
        command = invocation.command.as_deref().unwrap_or("help"),
        config = %manager.config_path().display(),
        "dispatching command"
    );

    match invocation.command.as_deref() {
        None | Some("help") => {
            print_usage();
            Ok(0)
        }
        Some("options") => cmd_options(&args),
        Some("preview") => cmd_preview(&manager, &args),
        Some("submit") => cmd_submit(&manager, &args),
        Some("wizard") => cmd_wizard(&manager, &args),
        Some("config") => cmd_config(&manager, &args),
        Some("version") => {
            println!("{}", build_info::current().summary());
            Ok(0)
        }
        Some(other) => Err(unknown_command(other)),
    }
}

fn unknown_command(input: &str) -> CliError {
    let suggestion = COMMANDS
        .iter()
        .map(|(name, _)| (levenshtein(name, input), *name))
        .min_by_key(|(distance, _)| *distance)
        .filter(|(distance, _)| *distance <= 3);
    match suggestion {
        Some((_, best)) => CliError::Usage(format!(
            "unknown command `{}`. Suggestion: `{}`?",
            input, best
        )),
        None => CliError::Usage(format!(
            "unknown command `{}`. Run `gemform_cli help` for usage.",
            input
        )),
    }
}

fn print_usage() {
    println!("Usage: gemform_cli [--config <path>] [--plain] [--quiet] <command> [args]");
    println!();
    println!("Commands:");
    let width = COMMANDS.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
    for (name, description) in COMMANDS {
        println!("  {name:<width$}  {description}");
    }
}

fn value_file_arg<'a>(command: &str, args: &[&'a str]) -> Result<&'a Path, CliError> {
    match args {
        [path] => Ok(Path::new(*path)),
        _ => Err(CliError::Usage(format!(
            "usage: gemform_cli {} <values.json>",
            command
        ))),
    }
}

fn load_session(path: &Path) -> Result<FormSession, CliError> {
    let values = value_file::load_values_from_file(path)?;
    Ok(FormSession::from_source(&values)?)
}

fn report_missing(missing: &[FieldId]) {
    let names: Vec<&str> = missing.iter().map(FieldId::as_str).collect();
    cli_io::print_error(format!(
        "Form is not valid. Fill in all required fields: {}",
        names.join(", ")
    ));
}

fn cmd_options(args: &[&str]) -> Result<i32, CliError> {
    match args {
        [] => {
            for field in [
                FieldId::Category,
                FieldId::Metal,
                FieldId::Brand,
                FieldId::StoneType,
                FieldId::StoneColor,
            ] {
                let labels = OptionCatalog::static_labels(field).unwrap_or_default();
                println!("{}: {}", field.label(), labels.join(", "));
            }
            Ok(0)
        }
        ["category", name] => {
            let category = OptionCatalog::parse::<Category>(FieldId::Category, name)?;
            let types: Vec<&str> = OptionCatalog::types_for(category)
                .iter()
                .map(|option| option.label())
                .collect();
            let visibility = OptionCatalog::visibility_for(category);
            println!("Type: {}", types.join(", "));
            println!("Length/width: {}", shown(visibility.show_length_width));
            println!("Ring size: {}", shown(visibility.show_ring_size));
            println!("Stone details: {}", shown(visibility.show_stone_details));
            Ok(0)
        }
        ["metal", name] => {
            let metal = OptionCatalog::parse::<Metal>(FieldId::Metal, name)?;
            let carats: Vec<&str> = OptionCatalog::carats_for(metal)
                .iter()
                .map(|option| option.label())
                .collect();
            println!("Carat: {}", carats.join(", "));
            Ok(0)
        }
        _ => Err(CliError::Usage(
            "usage: gemform_cli options [category <name> | metal <name>]".into(),
        )),
    }
}

fn shown(flag: bool) -> &'static str {
    if flag {
        "shown"
    } else {
        "hidden"
    }
}

fn cmd_preview(manager: &ConfigManager, args: &[&str]) -> Result<i32, CliError> {
    let path = value_file_arg("preview", args)?;
    let config = manager.load()?;
    let session = load_session(path)?;

    let mut validator = FormValidator::new(config.enforced_required.clone());
    if !validator.validate(&session) {
        report_missing(&validator.missing_fields(&session));
        return Ok(EXIT_INVALID);
    }

    let payload = assemble_from(&session);
    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(0)
}

fn cmd_submit(manager: &ConfigManager, args: &[&str]) -> Result<i32, CliError> {
    let path = value_file_arg("submit", args)?;
    let config = manager.load()?;
    let session = load_session(path)?;
    submit_session(&config, &session)
}

fn submit_session(config: &Config, source: &impl FieldValueSource) -> Result<i32, CliError> {
    let transport = HttpTransport::from_config(config)?;
    let validator = FormValidator::new(config.enforced_required.clone());
    let mut service = SubmitService::new(transport, validator)
        .on_transport_failure(|err| cli_io::print_error(format!("Search request failed: {err}")));

    match service.submit(source) {
        SubmitOutcome::Invalid { missing } => {
            report_missing(&missing);
            Ok(EXIT_INVALID)
        }
        SubmitOutcome::Sent { receipt, .. } => {
            cli_io::print_success(format!(
                "Search submitted to {} (HTTP {}).",
                service.transport().endpoint(),
                receipt.status
            ));
            if !receipt.body.trim().is_empty() {
                println!("{}", receipt.body);
            }
            Ok(0)
        }
        SubmitOutcome::TransportFailed { .. } => Ok(EXIT_TRANSPORT),
    }
}

fn cmd_wizard(manager: &ConfigManager, args: &[&str]) -> Result<i32, CliError> {
    let config = manager.load()?;
    let wizard = match args {
        [] => SearchWizard::new(),
        [path] => SearchWizard::with_session(load_session(Path::new(path))?),
        _ => {
            return Err(CliError::Usage(
                "usage: gemform_cli wizard [values.json]".into(),
            ))
        }
    };

    output::section("Product search");
    let mut interaction = DialoguerInteraction::new();
    match FormEngine::new(wizard).run(&mut interaction)? {
        FormResult::Completed(session) => submit_session(&config, &session),
        FormResult::Cancelled => {
            cli_io::print_info("Search cancelled.");
            Ok(0)
        }
    }
}

fn cmd_config(manager: &ConfigManager, args: &[&str]) -> Result<i32, CliError> {
    match args {
        [] | ["show"] => {
            let config = manager.load()?;
            cli_io::print_info(format!("Config file: {}", manager.config_path().display()));
            println!("{}", serde_json::to_string_pretty(&config)?);
            Ok(0)
        }
        ["init"] => {
            if manager.config_path().exists() {
                cli_io::print_warning(format!(
                    "Config file already exists at {}",
                    manager.config_path().display()
                ));
                return Ok(0);
            }
            manager.save(&Config::default())?;
            cli_io::print_success(format!(
                "Wrote default config to {}",
                manager.config_path().display()
            ));
            Ok(0)
        }
        _ => Err(CliError::Usage(
            "usage: gemform_cli config [show | init]".into(),
        )),
    }
}
