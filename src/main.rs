//! liftplan - Rule-based resistance training plan generator

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use chrono::Local;
use clap::{Args, Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use liftplan::exercises::{all_exercises, exercises_for};
use liftplan::profile::{GenerateRequest, TraineeProfile, parse_equipment, start_of_week};
use liftplan::program::{GeneratedPlan, Generator, PlannedExercise, volume};
use liftplan::PlanError;

#[derive(Parser)]
#[command(name = "liftplan")]
#[command(author, version, about = "Weekly resistance training plan generator")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a weekly plan
    Generate(GenerateArgs),

    /// List catalog exercises
    Exercises {
        /// Only exercises usable with this equipment (comma separated)
        #[arg(short, long, value_delimiter = ',')]
        equipment: Vec<String>,
    },

    /// Check that every blueprint slot exists in the catalog
    Check,
}

#[derive(Args, Default)]
struct GenerateArgs {
    /// JSON request file; flags below override its fields
    #[arg(long)]
    request: Option<PathBuf>,

    /// beginner | intermediate | advanced
    #[arg(short, long)]
    level: Option<String>,

    /// Training days per week (2-6)
    #[arg(short, long)]
    days: Option<i64>,

    /// strength | hypertrophy | endurance | recomp
    #[arg(short, long)]
    goal: Option<String>,

    /// Available equipment (comma separated, e.g. "barbell,bench")
    #[arg(short, long, value_delimiter = ',')]
    equipment: Vec<String>,

    /// Completed last week's sets: yes | no
    #[arg(short, long)]
    adherence: Option<String>,

    /// Hardest RPE reported last week
    #[arg(short, long)]
    rpe: Option<i32>,

    /// Program week number (every 4th is a deload)
    #[arg(short, long)]
    week: Option<i64>,

    /// Random seed for reproducible plans
    #[arg(long, env = "LIFTPLAN_SEED")]
    seed: Option<u64>,

    /// Print the plan as JSON
    #[arg(long)]
    json: bool,
}

impl GenerateArgs {
    fn into_request(self) -> Result<GenerateRequest> {
        let mut req = match &self.request {
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))?
            }
            None => GenerateRequest::default(),
        };

        if let Some(level) = self.level {
            req.level = level;
        }
        if let Some(days) = self.days {
            req.days = days;
        }
        if let Some(goal) = self.goal {
            req.goal = goal;
        }
        if !self.equipment.is_empty() {
            req.equipment = self.equipment;
        }
        if let Some(adherence) = self.adherence {
            req.adherence = adherence;
        }
        if let Some(rpe) = self.rpe {
            req.rpe = rpe;
        }
        if let Some(week) = self.week {
            req.week = week;
        }
        if req.week_of.is_none() {
            req.week_of = Some(start_of_week(Local::now().date_naive()));
        }

        Ok(req)
    }
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Generate(args)) => generate(args)?,
        None => {
            // Default: generate with default request, still honoring the seed env var
            let seed = std::env::var("LIFTPLAN_SEED").ok().and_then(|s| s.parse().ok());
            generate(GenerateArgs { seed, ..GenerateArgs::default() })?
        }

        Some(Commands::Exercises { equipment }) => {
            let exercises = if equipment.is_empty() {
                all_exercises().iter().collect()
            } else {
                exercises_for(&parse_equipment(&equipment))
            };

            println!("{:12} | {:30} | {:15} | {:9} | Equipment", "Id", "Name", "Muscle", "Type");
            println!("{:-<90}", "");
            for e in exercises {
                let equipment: Vec<_> = e.equipment.iter().map(|eq| eq.name()).collect();
                println!(
                    "{:12} | {:30} | {:15} | {:9} | {}",
                    e.id,
                    e.name,
                    e.muscle.name(),
                    e.movement.name(),
                    equipment.join(", ")
                );
            }
        }

        Some(Commands::Check) => {
            Generator::new()?;
            println!("Catalog OK: {} exercises, every blueprint slot resolves", all_exercises().len());
        }
    }

    Ok(())
}

fn generate(args: GenerateArgs) -> Result<()> {
    let seed = args.seed;
    let json = args.json;
    let profile = TraineeProfile::from(args.into_request()?);

    let mut rng = match seed {
        Some(seed) => {
            info!("Random seed: {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let generator = Generator::new()?;
    let plan = match generator.generate(&profile, &mut rng) {
        Ok(plan) => plan,
        Err(PlanError::NoEquipment) => {
            bail!("No usable equipment given. Pass e.g. --equipment barbell,bench,dumbbell or --equipment bodyweight")
        }
        Err(e) => return Err(e.into()),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        print_plan(&plan);
    }

    Ok(())
}

fn print_exercise(e: &PlannedExercise) {
    println!("  {:30} {} x {:6} rest {}s", e.name, e.sets, e.reps.to_string(), e.rest);
}

fn print_plan(plan: &GeneratedPlan) {
    let meta = &plan.meta;
    let equipment: Vec<_> = meta.equipment.iter().map(|e| e.name()).collect();

    println!(
        "{} {} | {} days | week {} | {}",
        meta.level, meta.goal, meta.days, meta.week, equipment.join(", ")
    );
    if let Some(week_of) = meta.week_of {
        println!("Week of {}", week_of.format("%Y-%m-%d"));
    }

    for day in plan.days() {
        println!();
        println!("{}", day.name);
        println!("{:-<60}", "");
        for e in &day.main {
            print_exercise(e);
        }
        for e in &day.accessories {
            print_exercise(e);
        }
        println!("  {}", day.note);
    }

    let report = volume::weekly_volume(plan);
    let max_sets = report.first().map(|v| v.sets).unwrap_or(0);

    println!();
    println!("Weekly sets per muscle");
    println!("{:-<40}", "");
    for v in &report {
        println!("{:15} {:3} {}", v.muscle.name(), v.sets, volume::volume_bar(v.sets, max_sets));
    }
}
