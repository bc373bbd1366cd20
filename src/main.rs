use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

use calculatron::config::{CalcPaths, Settings};
use calculatron::display::format_summary;
use calculatron::services::TotalsService;
use calculatron::state::{apply, Action, CalculatorState};

#[derive(Parser)]
#[command(
    name = "calculatron",
    version,
    about = "Terminal-based income calculator",
    long_about = "Calculatron models your income sources (hourly, salaried, and \
                  passive) plus monthly expenses, and derives weekly, monthly, and \
                  yearly totals. Launch the interactive sliders with 'calculatron tui' \
                  or print a one-shot summary with 'calculatron summary'."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    /// Print an income summary for the sample data set
    Summary {
        /// Override the number of vacation weeks (0-52)
        #[arg(short, long)]
        weeks_off: Option<u8>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Show current configuration and paths
    Config,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = CalcPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Summary { weeks_off, format }) => {
            let mut state = CalculatorState::sample();
            state.weeks_off = settings.default_weeks_off.min(52);
            if let Some(weeks) = weeks_off {
                state = apply(&state, Action::SetWeeksOff(weeks), &settings.limits)?;
            }

            let summary = TotalsService::new(&state).summary();
            match format {
                OutputFormat::Table => {
                    print!("{}", format_summary(&summary, &settings.currency_symbol));
                }
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&summary)?);
                }
            }
        }
        Some(Commands::Config) => {
            println!("Calculatron Configuration");
            println!("=========================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:   {}", settings.currency_symbol);
            println!("  Default weeks off: {}", settings.default_weeks_off);
        }
        Some(Commands::Tui) | None => {
            calculatron::tui::run_tui(&settings)?;
        }
    }

    Ok(())
}
