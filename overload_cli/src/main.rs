use clap::{ArgAction, Parser, Subcommand};
use overload_core::*;
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "overload")]
#[command(about = "Progressive overload recommendations for strength training", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Use this config file instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend the next weight and reps for one exercise
    Next {
        /// Weight used last session
        #[arg(long)]
        weight: f64,

        /// Reps completed per set
        #[arg(long)]
        reps: u32,

        /// Sets completed
        #[arg(long, default_value_t = 3)]
        sets: u32,

        /// Difficulty rating: 1 very easy .. 5 too hard
        #[arg(long)]
        rating: u8,

        /// barbell, dumbbell, cable, machine or bodyweight
        #[arg(long, default_value = "barbell")]
        equipment: EquipmentType,

        /// Multi-joint movement
        #[arg(long)]
        compound: bool,

        /// Exercise name (enables bodyweight detection)
        #[arg(long)]
        name: Option<String>,

        /// Exercise id (enables transition suggestions)
        #[arg(long)]
        id: Option<u32>,

        /// strength or hypertrophy
        #[arg(long, default_value = "strength")]
        style: TrainingStyle,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Round a weight to the nearest loadable value
    Round {
        #[arg(long)]
        weight: f64,

        #[arg(long, default_value = "barbell")]
        equipment: EquipmentType,
    },

    /// Evaluate a CSV file of performance records, writing CSV to stdout
    Batch {
        /// Input CSV path
        file: PathBuf,

        #[arg(long, default_value = "strength")]
        style: TrainingStyle,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    overload_core::logging::init_with_level(overload_core::logging::level_for_verbosity(
        cli.verbose,
    ));

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Commands::Next {
            weight,
            reps,
            sets,
            rating,
            equipment,
            compound,
            name,
            id,
            style,
            json,
        } => {
            let mut record = PerformanceRecord::new(sets, reps, weight, rating, equipment, compound);
            if let Some(name) = name {
                record = record.with_name(name);
            }
            if let Some(id) = id {
                record = record.with_id(id);
            }
            cmd_next(&record, style, json, &config)
        }
        Commands::Round { weight, equipment } => {
            let rounded = round_to_closest_increment(weight, equipment, Some(&config.equipment));
            println!("{}", format_weight(rounded));
            Ok(())
        }
        Commands::Batch { file, style } => cmd_batch(file, style, &config),
    }
}

fn cmd_next(record: &PerformanceRecord, style: TrainingStyle, json: bool, config: &Config) -> Result<()> {
    let transitions = config.transition_table();
    let engine = ProgressionEngine::new(&config.equipment, &config.progression).with_advisor(&transitions);
    let result = engine.calculate(record, style);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    if record.weight <= 0.0 && result.new_weight <= 0.0 {
        println!("Next: bodyweight x {} reps", result.new_reps);
    } else {
        println!(
            "Next: {} x {} reps",
            format_weight(result.new_weight),
            result.new_reps
        );
    }

    if result.deload {
        println!("  Deload: back off and rebuild");
    }

    if let Some(ref suggestion) = result.suggestion {
        match suggestion.suggested_exercise_id {
            Some(id) => println!("  → {} (exercise {})", suggestion.message, id),
            None => println!("  → {}", suggestion.message),
        }
    }

    Ok(())
}

fn cmd_batch(file: PathBuf, style: TrainingStyle, config: &Config) -> Result<()> {
    let input = File::open(&file)?;
    let transitions = config.transition_table();
    let engine = ProgressionEngine::new(&config.equipment, &config.progression).with_advisor(&transitions);

    let count = overload_core::batch::evaluate_csv(input, io::stdout().lock(), style, &engine)?;
    tracing::info!("Processed {} rows from {}", count, file.display());
    Ok(())
}

/// Whole numbers print bare, fractions keep up to two places
fn format_weight(weight: f64) -> String {
    if weight.fract() == 0.0 {
        format!("{:.0}", weight)
    } else {
        let formatted = format!("{:.2}", weight);
        formatted.trim_end_matches('0').to_string()
    }
}
