use clap::{Parser, Subcommand};
use hr_sim::{RodSimulation, StepEvent};
use hr_solver::RodConfig;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "hr-cli")]
#[command(about = "HeatRod CLI - 1D transient rod conduction solver", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate scenario file syntax and parameter ranges
    Validate {
        /// Path to the scenario YAML file
        scenario_path: PathBuf,
    },
    /// Show the effective parameters and discretization of a scenario
    Show {
        /// Path to the scenario YAML file (omit for built-in defaults)
        scenario_path: Option<PathBuf>,
    },
    /// Run a simulation
    Run {
        /// Path to the scenario YAML file (omit for built-in defaults)
        scenario_path: Option<PathBuf>,
        /// Log a final summary line (final time and end temperatures)
        #[arg(long)]
        verbose: bool,
        /// Write the final temperature profile as CSV
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("Scenario error: {0}")]
    Scenario(#[from] hr_project::ProjectError),

    #[error("Solver error: {0}")]
    Solver(#[from] hr_solver::SolverError),

    #[error("Simulation error: {0}")]
    Simulation(#[from] hr_sim::SimError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

type CliResult<T> = Result<T, CliError>;

fn main() -> CliResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { scenario_path } => cmd_validate(&scenario_path),
        Commands::Show { scenario_path } => cmd_show(scenario_path.as_deref()),
        Commands::Run {
            scenario_path,
            verbose,
            output,
        } => cmd_run(scenario_path.as_deref(), verbose, output.as_deref()),
    }
}

fn load_config(scenario_path: Option<&Path>) -> CliResult<RodConfig> {
    match scenario_path {
        Some(path) => {
            let scenario = hr_project::load_yaml(path)?;
            println!("Scenario: {} ({})", scenario.name, path.display());
            Ok(scenario.rod.to_config())
        }
        None => {
            println!("Scenario: built-in defaults (copper rod)");
            Ok(RodConfig::default())
        }
    }
}

fn cmd_validate(scenario_path: &Path) -> CliResult<()> {
    println!("Validating scenario: {}", scenario_path.display());
    let scenario = hr_project::load_yaml(scenario_path)?;
    // load_yaml validates ranges; discretize confirms the solver accepts it too
    scenario.rod.to_config().discretize()?;
    println!("✓ Scenario is valid");
    Ok(())
}

fn cmd_show(scenario_path: Option<&Path>) -> CliResult<()> {
    let config = load_config(scenario_path)?;
    let disc = config.discretize()?;

    println!("\nRod:");
    println!("  Length:          {:.4} m", config.mesh.length.value);
    println!("  Nodes:           {}", disc.node_count);
    println!("  Element size:    {:.6} m", disc.element_size_m);
    println!("\nMaterial:");
    println!(
        "  Conductivity:    {:.1} W/(m·K)",
        config.material.conductivity.value
    );
    println!(
        "  Density:         {:.1} kg/m³",
        config.material.density.value
    );
    println!(
        "  Specific heat:   {:.1} J/(kg·K)",
        config.material.specific_heat.value
    );
    println!(
        "  Diffusivity:     {:.4e} m²/s",
        config.material.diffusivity_m2ps()
    );
    println!("\nRun:");
    println!(
        "  Time range:      {:.3} - {:.3} s",
        disc.start_time_s, disc.end_time_s
    );
    println!("  Time step:       {:.4} s", disc.time_step_s);
    println!("  Steps:           {}", disc.step_count());
    println!("  Lambda (ατ/h²):  {:.4}", disc.lambda);
    println!(
        "  Boundaries:      {:.2} K / {:.2} K",
        disc.left_temperature_k, disc.right_temperature_k
    );
    println!("  Initial temp:    {:.2} K", disc.initial_temperature_k);
    Ok(())
}

fn cmd_run(scenario_path: Option<&Path>, verbose: bool, output: Option<&Path>) -> CliResult<()> {
    let config = load_config(scenario_path)?;
    let mut sim = RodSimulation::new(&config)?;

    let started = Instant::now();
    let mut last_emit = Instant::now();
    let mut last_fraction = -1.0f64;
    sim.solve_with_observer(
        verbose,
        Some(&mut |event: &StepEvent<'_>| {
            let emit_now = (event.fraction_complete - last_fraction).abs() >= 0.005
                || last_emit.elapsed().as_millis() >= 100;
            if emit_now {
                render_progress(event, started.elapsed().as_secs_f64());
                last_fraction = event.fraction_complete;
                last_emit = Instant::now();
            }
        }),
    )?;
    clear_progress_line();

    println!("✓ Simulation completed in {:.3}s", started.elapsed().as_secs_f64());

    let field = sim.temperature_field();
    let n = sim.node_count();
    println!("  Steps:           {}", n - 1);
    println!("  Left boundary:   {:.4} K", field[0]);
    println!("  Right boundary:  {:.4} K", field[n]);
    println!("  Last interior:   {:.4} K (node {})", field[n - 1], n - 1);

    if let Some(path) = output {
        export_profile(path, field)?;
        println!("✓ Exported {} values to {}", field.len(), path.display());
    }

    Ok(())
}

fn clear_progress_line() {
    print!("\r{}\r", " ".repeat(100));
    let _ = io::stdout().flush();
}

fn render_progress(event: &StepEvent<'_>, elapsed_wall_s: f64) {
    let width = 28usize;
    let filled = ((event.fraction_complete * width as f64).round() as usize).min(width);
    let bar = format!(
        "{}{}",
        "#".repeat(filled),
        "-".repeat(width.saturating_sub(filled))
    );
    print!(
        "\r[{}] {:>6.2}%  t={:.3}s  step={}  elapsed={:.2}s",
        bar,
        event.fraction_complete * 100.0,
        event.sim_time_s,
        event.step,
        elapsed_wall_s
    );
    let _ = io::stdout().flush();
}

fn export_profile(path: &Path, field: &[f64]) -> CliResult<()> {
    let mut csv = String::from("node,temperature_k\n");
    for (i, t) in field.iter().enumerate() {
        csv.push_str(&format!("{},{}\n", i, t));
    }
    std::fs::write(path, csv)?;
    Ok(())
}
