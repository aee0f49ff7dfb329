use clap::{Args, Parser, Subcommand};
use env_logger::Env;
use log::{debug, info, warn};
use std::path::{Path, PathBuf};

use fanta_calc::config::{ColorMode, Config, OutputFormat};
use fanta_calc::scoring::{MatchEvents, Role};

const EXIT_SUCCESS: i32 = 0;
const EXIT_INVALID: i32 = 1;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute the result of a match sheet
    Calc {
        /// Path to the match sheet (YAML or JSON)
        sheet: PathBuf,

        /// Also write the result as JSON to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Validate a match sheet without computing it
    Check {
        /// Path to the match sheet (YAML or JSON)
        sheet: PathBuf,
    },
    /// Translate match events into a bonus/malus
    Bonus(BonusArgs),
    /// Print an example match sheet
    Template,
    /// Write the default config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Args, Debug)]
struct BonusArgs {
    /// Player role: P, D, C or A
    #[arg(short, long)]
    role: Role,
    #[arg(long, default_value_t = 0)]
    goals: i32,
    /// Goals conceded (goalkeepers only)
    #[arg(long, default_value_t = 0)]
    conceded: i32,
    #[arg(long, default_value_t = 0)]
    penalties_saved: i32,
    #[arg(long, default_value_t = 0)]
    penalties_scored: i32,
    #[arg(long, default_value_t = 0)]
    penalties_missed: i32,
    #[arg(long, default_value_t = 0)]
    own_goals: i32,
    #[arg(long, default_value_t = 0)]
    yellow: i32,
    #[arg(long, default_value_t = 0)]
    red: i32,
    #[arg(long, default_value_t = 0)]
    assists: i32,
}

impl BonusArgs {
    fn events(&self) -> MatchEvents {
        MatchEvents {
            goals_scored: self.goals,
            goals_conceded: self.conceded,
            penalties_saved: self.penalties_saved,
            penalties_scored: self.penalties_scored,
            penalties_missed: self.penalties_missed,
            own_goals: self.own_goals,
            yellow_cards: self.yellow,
            red_cards: self.red,
            assists: self.assists,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "fanta-calc")]
#[command(about = "Fantasy-football match calculator", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/fanta-calc/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format (overrides config)
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// When to use colours (overrides config)
    #[arg(long, global = true, value_enum)]
    color: Option<ColorMode>,

    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    let Cli {
        config: config_path,
        format,
        color,
        command,
        ..
    } = cli;

    match command {
        Commands::Init { force } => run_init(config_path, force),
        Commands::Check { sheet } => run_check(&sheet),
        Commands::Template => print!("{}", fanta_calc::lineup::TEMPLATE),
        Commands::Calc { sheet, output } => {
            let config = effective_config(config_path, format, color);
            run_calc(&config, &sheet, output);
        }
        Commands::Bonus(args) => {
            let config = effective_config(config_path, format, color);
            run_bonus(&config, &args);
        }
    }

    std::process::exit(EXIT_SUCCESS);
}

/// Load the config file and apply flag overrides, exiting on config errors
fn effective_config(
    path: Option<PathBuf>,
    format: Option<OutputFormat>,
    color: Option<ColorMode>,
) -> Config {
    let config = match fanta_calc::config::load_config(path) {
        Ok(c) => c.with_overrides(format, color),
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };
    debug!("effective config: {:?}", config);
    config
}

fn run_init(path: Option<PathBuf>, force: bool) -> ! {
    match fanta_calc::config::init_config(path, force) {
        Ok(Some(path)) => println!("Config written to {}", path.display()),
        Ok(None) => println!("Config already exists. Use --force to overwrite."),
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    }
    std::process::exit(EXIT_SUCCESS);
}

/// Load and validate a sheet, exiting with the right code on failure
fn load_valid_sheet(path: &Path) -> fanta_calc::lineup::MatchSheet {
    let sheet = match fanta_calc::lineup::load_match_sheet(path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Match sheet error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if let Err(errors) = fanta_calc::lineup::validate_match_sheet(&sheet) {
        eprintln!("Match sheet errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_INVALID);
    }

    for warning in fanta_calc::lineup::formation_warnings(&sheet) {
        warn!("{}", warning);
    }
    sheet
}

fn run_calc(config: &Config, path: &Path, output: Option<PathBuf>) {
    let sheet = load_valid_sheet(path);
    let (home, away) = sheet.lineups();
    let result = fanta_calc::scoring::compute_match_result(&home, &away);
    info!("{} {} {}", sheet.home.name, result.label, sheet.away.name);

    if let Some(ref out_path) = output {
        if let Err(e) = fanta_calc::output::write_json_file(out_path, &result) {
            eprintln!("Output error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
        debug!("result written to {}", out_path.display());
    }

    match config.format {
        OutputFormat::Json => print_json(&result),
        OutputFormat::Text => {
            let use_colors = fanta_calc::output::should_use_colors(config.color);
            println!(
                "{}",
                fanta_calc::output::format_match_result(
                    &result,
                    &sheet.home.name,
                    &sheet.away.name,
                    use_colors
                )
            );
        }
    }
}

fn run_check(path: &Path) {
    let sheet = load_valid_sheet(path);
    println!(
        "{} vs {}: both lineups are valid",
        sheet.home.name, sheet.away.name
    );
}

fn run_bonus(config: &Config, args: &BonusArgs) {
    let events = args.events();
    let lines = fanta_calc::scoring::event_breakdown(&events, args.role);
    let total = fanta_calc::scoring::translate_events(&events, args.role);

    match config.format {
        OutputFormat::Json => print_json(&serde_json::json!({
            "role": args.role,
            "events": events,
            "breakdown": lines,
            "bonus_malus": total,
        })),
        OutputFormat::Text => {
            let use_colors = fanta_calc::output::should_use_colors(config.color);
            println!(
                "{}",
                fanta_calc::output::format_bonus(args.role, &lines, total, use_colors)
            );
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T) {
    match fanta_calc::output::to_json(value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Output error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    }
}
