use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use shadeset_core::{LengthUnit, Variant, derive_theme_with};
use tracing::info;

use crate::config::Overrides;
use crate::error::Result;
use crate::logging::{self, LogSettings};
use crate::output::{self, OutputFormat};

#[derive(Debug, Parser)]
#[command(
    name = "shadeset",
    about = "Derive light and dark design-token palettes from one primary color",
    version
)]
pub struct Cli {
    /// Increase log detail (-v debug, -vv trace). SHADESET_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate the custom-property blocks for a theme.
    Generate(GenerateArgs),

    /// List the available variants.
    Variants,
}

#[derive(Debug, Clone, Default, Args)]
pub struct GenerateArgs {
    /// Primary color: hex, CSS name, rgb(), hsl() or oklch(). [default: #007bff]
    #[arg(long, short = 'p')]
    pub primary: Option<String>,

    /// Corner radius in the configured unit. [default: 0.5]
    #[arg(long, short = 'r', allow_negative_numbers = true)]
    pub radius: Option<f64>,

    /// tint, vibrant or professional. [default: professional]
    #[arg(long)]
    pub variant: Option<String>,

    /// light or dark; reported in JSON output.
    #[arg(long)]
    pub appearance: Option<String>,

    /// Radius unit: rem, em or px. [default: rem]
    #[arg(long)]
    pub unit: Option<LengthUnit>,

    /// Selector of the light block. [default: :root]
    #[arg(long)]
    pub root_selector: Option<String>,

    /// Selector of the dark block. [default: .dark]
    #[arg(long)]
    pub dark_selector: Option<String>,

    /// JSON file with defaults for any of the options above.
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Css)]
    pub format: OutputFormat,

    /// Write to this file instead of stdout.
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

impl GenerateArgs {
    fn overrides(&self) -> Overrides {
        Overrides {
            primary: self.primary.clone(),
            radius: self.radius,
            variant: self.variant.clone(),
            appearance: self.appearance.clone(),
            root_selector: self.root_selector.clone(),
            dark_selector: self.dark_selector.clone(),
            radius_unit: self.unit,
            config: self.config.clone(),
        }
    }
}

pub fn run_from_env() -> Result<()> {
    let cli = Cli::parse();
    logging::init(&LogSettings::from_env(cli.verbose))?;
    run(cli)
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Generate(args) => run_generate(&args),
        Commands::Variants => {
            output::emit(&variant_listing(), None)?;
            Ok(())
        }
    }
}

pub fn run_generate(args: &GenerateArgs) -> Result<()> {
    let resolved = args.overrides().resolve()?;
    let theme = derive_theme_with(&resolved.options, resolved.style.radius_unit)?;
    let text = output::render(&theme, &resolved.style, args.format)?;
    info!(variant = %theme.variant, format = ?args.format, "theme generated");
    output::emit(&text, args.output.as_deref())
}

/// One line per variant, default marked.
#[must_use]
pub fn variant_listing() -> String {
    Variant::ALL
        .iter()
        .map(|variant| {
            let marker = if *variant == Variant::default() {
                " (default)"
            } else {
                ""
            };
            format!("{:<13} {}{marker}", variant.as_str(), variant.description())
        })
        .collect::<Vec<_>>()
        .join("\n")
}
