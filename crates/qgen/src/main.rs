//! qgen CLI - Backend project skeleton generator

use anyhow::{Context, Result};
use clap::builder::NonEmptyStringValueParser;
use clap::error::ErrorKind;
use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use colored::Colorize;
use qgen_core::{ProductConfig, ProjectRequest, Variant};
use std::ffi::OsString;
use std::process::ExitCode;

/// CLI version, in the date style generated projects also use
pub const CLI_VERSION: &str = "20230703";

/// qgen product configuration
#[derive(Clone)]
pub struct QgenConfig;

impl ProductConfig for QgenConfig {
    fn name(&self) -> &'static str {
        "qgen"
    }

    fn display_name(&self) -> &'static str {
        "qgen"
    }

    fn cli_description(&self) -> &'static str {
        "Generate code"
    }

    fn version(&self) -> &'static str {
        CLI_VERSION
    }

    fn next_steps(&self, request: &ProjectRequest) -> Vec<String> {
        vec![
            format!("cd {}", request.name),
            "go mod init".to_string(),
            "go mod tidy".to_string(),
        ]
    }
}

#[derive(Parser, Debug)]
#[command(name = "qgen")]
pub struct Args {
    /// Project Name
    #[arg(
        short,
        long,
        global = true,
        value_parser = NonEmptyStringValueParser::new()
    )]
    pub name: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Args {
    /// Variant picked by `create web|cli`, if the command got that far
    fn variant(&self) -> Option<Variant> {
        match &self.command {
            Some(Command::Create(CreateArgs {
                variant: Some(variant),
            })) => Some(variant.variant()),
            _ => None,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate code
    Create(CreateArgs),
}

#[derive(Parser, Debug)]
pub struct CreateArgs {
    #[command(subcommand)]
    pub variant: Option<VariantCommand>,
}

#[derive(Subcommand, Debug, Clone, Copy)]
pub enum VariantCommand {
    /// Generate web
    Web,
    /// Generate cli
    Cli,
}

impl VariantCommand {
    fn variant(self) -> Variant {
        match self {
            VariantCommand::Web => Variant::Web,
            VariantCommand::Cli => Variant::Cli,
        }
    }
}

/// Root command with identity taken from the product config
fn cli_command<C: ProductConfig>(config: &C) -> clap::Command {
    Args::command()
        .name(config.name())
        .about(config.cli_description())
        .version(config.version())
}

/// Parse the command line; `--name` is global but required by `web` / `cli`
fn parse_args<C, I, T>(config: &C, itr: I) -> Result<Args, clap::Error>
where
    C: ProductConfig,
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let mut cmd = cli_command(config);
    let matches = cmd.try_get_matches_from_mut(itr)?;
    let args = Args::from_arg_matches(&matches)?;

    if args.variant().is_some() && args.name.is_none() {
        return Err(cmd.error(
            ErrorKind::MissingRequiredArgument,
            "the following required arguments were not provided:\n  --name <NAME>",
        ));
    }

    Ok(args)
}

/// Exit status for a clap error: help and version are not failures
fn usage_exit_code(err: &clap::Error) -> u8 {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}

fn print_help<C: ProductConfig>(config: &C, subcommand: Option<&str>) -> Result<()> {
    let mut cmd = cli_command(config);
    cmd.build();
    if let Some(name) = subcommand {
        if let Some(sub) = cmd.find_subcommand_mut(name) {
            sub.print_help()?;
            return Ok(());
        }
    }
    cmd.print_help()?;
    Ok(())
}

fn execute<C: ProductConfig>(config: &C, args: Args) -> Result<()> {
    if let Some(variant) = args.variant() {
        let name = args.name.context("--name is required")?;
        let request = ProjectRequest::new(name, variant);
        let result = qgen_core::run(config, &request);

        // Ensure cursor is visible on normal exit
        let _ = console::Term::stderr().show_cursor();

        return result.map(|_| ());
    }

    match args.command {
        Some(Command::Create(_)) => print_help(config, Some("create")),
        None => print_help(config, None),
    }
}

fn main() -> ExitCode {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let config = QgenConfig;

    let args = match parse_args(&config, std::env::args_os()) {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(usage_exit_code(&e));
        }
    };

    match execute(&config, args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Result<Args, clap::Error> {
        parse_args(&QgenConfig, argv.iter().copied())
    }

    fn request(argv: &[&str]) -> ProjectRequest {
        let args = parse(argv).unwrap();
        let variant = args.variant().expect("expected a create command");
        ProjectRequest::new(args.name.unwrap(), variant)
    }

    #[test]
    fn test_create_web_long_flag() {
        let req = request(&["qgen", "create", "web", "--name", "shop"]);
        assert_eq!(req.name, "shop");
        assert_eq!(req.variant, Variant::Web);
    }

    #[test]
    fn test_create_cli_short_flag() {
        let req = request(&["qgen", "create", "cli", "-n", "demo"]);
        assert_eq!(req.name, "demo");
        assert_eq!(req.variant, Variant::Cli);
    }

    #[test]
    fn test_name_before_subcommands() {
        let req = request(&["qgen", "-n", "demo", "create", "cli"]);
        assert_eq!(req.name, "demo");
        assert_eq!(req.variant, Variant::Cli);

        let req = request(&["qgen", "create", "--name", "shop", "web"]);
        assert_eq!(req.name, "shop");
        assert_eq!(req.variant, Variant::Web);
    }

    #[test]
    fn test_missing_name_is_usage_error() {
        let err = parse(&["qgen", "create", "cli"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert_eq!(usage_exit_code(&err), 1);
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let err = parse(&["qgen", "create", "web", "--name", ""]).unwrap_err();
        assert!(matches!(
            err.kind(),
            ErrorKind::InvalidValue | ErrorKind::ValueValidation
        ));
        assert_eq!(usage_exit_code(&err), 1);
    }

    #[test]
    fn test_unknown_variant_is_usage_error() {
        let err = parse(&["qgen", "create", "desktop", "--name", "demo"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidSubcommand);
        assert_eq!(usage_exit_code(&err), 1);
    }

    #[test]
    fn test_bare_commands_parse_without_name() {
        assert!(parse(&["qgen"]).unwrap().command.is_none());
        assert!(matches!(
            parse(&["qgen", "create"]).unwrap().command,
            Some(Command::Create(CreateArgs { variant: None }))
        ));
    }

    #[test]
    fn test_help_and_version_exit_zero() {
        let help = parse(&["qgen", "--help"]).unwrap_err();
        assert_eq!(usage_exit_code(&help), 0);

        let version = parse(&["qgen", "--version"]).unwrap_err();
        assert_eq!(version.kind(), ErrorKind::DisplayVersion);
        assert!(version.to_string().contains("20230703"));
        assert_eq!(usage_exit_code(&version), 0);
    }

    #[test]
    fn test_next_steps() {
        let req = ProjectRequest::new("demo", Variant::Cli);
        let config = QgenConfig;

        assert_eq!(config.created_message(&req), "Create project with cli: demo");
        assert_eq!(
            config.next_steps(&req),
            vec!["cd demo", "go mod init", "go mod tidy"]
        );
    }

    #[test]
    fn test_command_definition_is_valid() {
        cli_command(&QgenConfig).debug_assert();
    }
}
