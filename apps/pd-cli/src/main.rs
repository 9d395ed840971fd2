mod report;

use clap::{Parser, Subcommand};
use pd_components::DEFAULT_STATIONS;
use pd_core::PdError;
use pd_core::units::k;
use pd_fluids::{CoolPropProvider, viscosity};
use report::PressureUnit;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pd-cli")]
#[command(about = "PipeDrop CLI - Pressure drop along propellant feed lines", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate project file syntax and structure
    Validate {
        /// Path to the project YAML or JSON file
        project_path: PathBuf,
    },
    /// Evaluate the flow path and print the pressure breakdown
    Run {
        /// Path to the project YAML or JSON file
        project_path: PathBuf,
        /// Pressure unit for the report
        #[arg(long, value_enum, default_value_t = PressureUnit::Pa)]
        units: PressureUnit,
        /// Write the cumulative profile to a CSV file
        #[arg(long)]
        csv: Option<PathBuf>,
    },
    /// Sweep the diameter of one duct from its inlet to its outlet bore
    Sweep {
        /// Path to the project YAML or JSON file
        project_path: PathBuf,
        /// Index of the duct row in the geometry
        #[arg(long)]
        element: usize,
        /// Number of diameter stations
        #[arg(long, default_value_t = DEFAULT_STATIONS)]
        samples: usize,
        /// Pressure unit for the report
        #[arg(long, value_enum, default_value_t = PressureUnit::Psi)]
        units: PressureUnit,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(long)]
        csv: Option<PathBuf>,
    },
    /// Evaluate the N2O viscosity correlations at a temperature
    Viscosity {
        /// Temperature in kelvin
        #[arg(long)]
        temperature_k: f64,
    },
}

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error(transparent)]
    Project(#[from] pd_project::ProjectError),

    #[error(transparent)]
    Core(#[from] PdError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Usage(String),
}

type CliResult<T> = Result<T, CliError>;

fn main() -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { project_path } => cmd_validate(&project_path),
        Commands::Run {
            project_path,
            units,
            csv,
        } => cmd_run(&project_path, units, csv.as_deref()),
        Commands::Sweep {
            project_path,
            element,
            samples,
            units,
            csv,
        } => cmd_sweep(&project_path, element, samples, units, csv.as_deref()),
        Commands::Viscosity { temperature_k } => cmd_viscosity(temperature_k),
    }
}

fn cmd_validate(project_path: &Path) -> CliResult<()> {
    println!("Validating project: {}", project_path.display());
    let project = pd_project::load(project_path)?;
    pd_project::elements(&project)?;
    println!(
        "✓ Project is valid ({} geometry rows)",
        project.geometry.len()
    );
    Ok(())
}

fn cmd_run(project_path: &Path, units: PressureUnit, csv: Option<&Path>) -> CliResult<()> {
    let project = pd_project::load(project_path)?;
    info!(path = %project_path.display(), name = %project.name, "loaded project");
    let provider = CoolPropProvider::new();
    let (fluid, path) = pd_project::flow_path(&project, &provider)?;

    println!("Project: {}", project.name);
    println!(
        "  mdot = {:.4} kg/s, T = {:.2} K, rho = {:.2} kg/m³, mu = {:.4e} Pa·s",
        fluid.mdot().value,
        fluid.temperature().value,
        fluid.density().value,
        fluid.dynamic_viscosity().value
    );
    println!();
    print!("{}", report::path_table(&path, units));
    println!(
        "\nTotal: {:.3} {} over {:.4} m",
        units.from_pa(path.total_drop().value),
        units.label(),
        path.total_length().value
    );

    if let Some(out) = csv {
        std::fs::write(out, report::path_csv(&path, units))?;
        println!("✓ Exported {} elements to {}", path.len(), out.display());
    }
    Ok(())
}

fn cmd_sweep(
    project_path: &Path,
    element: usize,
    samples: usize,
    units: PressureUnit,
    csv: Option<&Path>,
) -> CliResult<()> {
    if samples == 0 {
        return Err(CliError::Usage("--samples must be at least 1".to_string()));
    }

    let project = pd_project::load(project_path)?;
    let elements = pd_project::elements(&project)?;
    let duct = elements
        .get(element)
        .ok_or_else(|| {
            CliError::Usage(format!(
                "element {} out of range ({} elements)",
                element,
                elements.len()
            ))
        })?
        .as_duct()
        .ok_or_else(|| CliError::Usage(format!("element {} is not a pipe", element)))?;

    let provider = CoolPropProvider::new();
    let fluid = pd_project::fluid_state(&project.fluid, &provider)?;
    let stations = duct.sweep(&fluid, samples).map_err(PdError::from)?;
    let content = report::sweep_csv(&stations, units);

    if let Some(out) = csv {
        std::fs::write(out, content)?;
        println!(
            "✓ Exported {} diameter stations to {}",
            stations.len(),
            out.display()
        );
    } else {
        print!("{}", content);
    }
    Ok(())
}

fn cmd_viscosity(temperature_k: f64) -> CliResult<()> {
    let t = k(temperature_k);
    println!("N2O viscosity at {:.2} K:", temperature_k);

    let rows = [
        ("saturated liquid", viscosity::saturated_liquid(t)),
        ("saturated vapour", viscosity::saturated_vapour(t)),
        ("dilute gas", viscosity::dilute_gas(t)),
    ];
    for (label, value) in rows {
        match value {
            Ok(mu) => println!("  {:<17} {:.6e} Pa·s", label, mu.value),
            Err(e) => println!("  {:<17} unavailable: {}", label, e),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pd_components::ElementError;

    #[test]
    fn element_failures_surface_through_the_core_error() {
        let err: CliError = PdError::from(ElementError::MissingViscosity).into();
        assert!(matches!(
            err,
            CliError::Core(PdError::InvalidArg {
                what: "missing viscosity"
            })
        ));
        assert!(err.to_string().contains("missing viscosity"));
    }
}
