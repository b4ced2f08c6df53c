use af_app::{
    AppError, AppResult, AzeotropeDef, ComponentDef, EquilibriumCurve, Perspective, ProblemDef,
    QuantityDef, SolverDef, load_problem, solve_problem, to_csv, to_json,
};
use af_core::units::constants::STANDARD_PRESSURE_MMHG;
use af_thermo::filter_antoine_catalog;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "af-cli")]
#[command(about = "AzeoFlow CLI - T-x-y curves for binary azeotropic mixtures", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a curve from command-line inputs
    Solve(SolveArgs),
    /// Compute a curve from a problem file
    Run {
        /// Path to the problem YAML or JSON file
        problem_path: PathBuf,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Validate a problem file and fit the model without sweeping
    Validate {
        /// Path to the problem YAML or JSON file
        problem_path: PathBuf,
    },
    /// List components with tabulated Antoine constants
    Catalog {
        /// Filter by id, name or alias
        query: Option<String>,
    },
    /// Prompt for the mixture on stdin
    Interactive {
        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Args)]
struct SolveArgs {
    /// First component by catalog name (e.g. ethyl-acetate)
    #[arg(long, conflicts_with = "first_antoine")]
    first: Option<String>,
    /// First component display name, used with --first-antoine
    #[arg(long, requires = "first_antoine")]
    first_name: Option<String>,
    /// First component Antoine constants "A B C" (mmHg, °C)
    #[arg(long, allow_hyphen_values = true)]
    first_antoine: Option<String>,
    /// Second component by catalog name
    #[arg(long, conflicts_with = "second_antoine")]
    second: Option<String>,
    /// Second component display name, used with --second-antoine
    #[arg(long, requires = "second_antoine")]
    second_name: Option<String>,
    /// Second component Antoine constants "A B C" (mmHg, °C)
    #[arg(long, allow_hyphen_values = true)]
    second_antoine: Option<String>,
    /// Azeotrope temperature (bare numbers are °C)
    #[arg(long)]
    az_temperature: String,
    /// Azeotrope mole fraction of the first component
    #[arg(long)]
    az_x1: String,
    /// Azeotrope mole fraction of the second component
    #[arg(long)]
    az_x2: String,
    /// Operating pressure (bare numbers are mmHg)
    #[arg(long, default_value = "760 mmHg")]
    pressure: String,
    /// Bisection residual tolerance [mmHg]
    #[arg(long, default_value_t = 1e-3)]
    tolerance: f64,
    /// Bisection iteration cap per point
    #[arg(long, default_value_t = 1000)]
    max_iterations: usize,
    /// Number of grid points over x1 = 0..1
    #[arg(long, default_value_t = 101)]
    points: usize,
    /// Solve grid points in parallel
    #[arg(long)]
    parallel: bool,
    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args)]
struct OutputArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Table)]
    format: Format,
    /// Which component's fraction runs along the composition axis
    #[arg(long, value_enum, default_value_t = View::First)]
    view: View,
    /// Write to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Fail if any grid point did not converge
    #[arg(long)]
    strict: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Table,
    Csv,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum View {
    First,
    Second,
}

impl From<View> for Perspective {
    fn from(view: View) -> Self {
        match view {
            View::First => Perspective::First,
            View::Second => Perspective::Second,
        }
    }
}

fn main() -> AppResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Solve(args) => cmd_solve(args),
        Commands::Run {
            problem_path,
            output,
        } => cmd_run(&problem_path, &output),
        Commands::Validate { problem_path } => cmd_validate(&problem_path),
        Commands::Catalog { query } => cmd_catalog(query.as_deref().unwrap_or("")),
        Commands::Interactive { output } => cmd_interactive(&output),
    }
}

fn cmd_solve(args: SolveArgs) -> AppResult<()> {
    let problem = ProblemDef {
        first: component_def("first", args.first, args.first_name, args.first_antoine)?,
        second: component_def("second", args.second, args.second_name, args.second_antoine)?,
        azeotrope: AzeotropeDef {
            temperature: QuantityDef::Text(args.az_temperature),
            x1: QuantityDef::Text(args.az_x1),
            x2: QuantityDef::Text(args.az_x2),
        },
        pressure: QuantityDef::Text(args.pressure),
        solver: SolverDef {
            tolerance: args.tolerance,
            max_iterations: args.max_iterations,
            grid_points: args.points,
            parallel: args.parallel,
        },
    };
    solve_and_emit(&problem, &args.output)
}

fn cmd_run(problem_path: &Path, output: &OutputArgs) -> AppResult<()> {
    let problem = load_problem(problem_path)?;
    info!(path = %problem_path.display(), "problem loaded");
    solve_and_emit(&problem, output)
}

fn cmd_validate(problem_path: &Path) -> AppResult<()> {
    println!("Validating problem: {}", problem_path.display());
    let problem = load_problem(problem_path)?;
    let builder = problem.prepare()?;
    let system = builder.system();
    let (t1, t2) = builder.boiling_points_c();

    println!("✓ Problem is valid");
    println!("  System:     {}", system.label());
    println!("  Pressure:   {:.2} mmHg", builder.config().pressure_mmhg);
    println!("  T1:         {t1:.4} °C ({})", system.first.name);
    println!("  T2:         {t2:.4} °C ({})", system.second.name);
    println!(
        "  Azeotrope:  {:.2} °C at x1 = {:.4} ({})",
        system.azeotrope.temperature_c,
        system.azeotrope.x1(),
        builder.kind()
    );
    println!("  Van Laar:   {}", builder.params());
    println!("  Bracket:    [0, {:.4}] °C", builder.upper_bound_c());
    println!("  Grid:       {}", builder.grid());
    Ok(())
}

fn cmd_catalog(query: &str) -> AppResult<()> {
    let entries = filter_antoine_catalog(query);
    if entries.is_empty() {
        println!("No components match '{query}'");
        return Ok(());
    }

    println!(
        "{:<16} {:<16} {:>9} {:>10} {:>9} {:>10}",
        "id", "name", "A", "B", "C", "Tb [°C]"
    );
    for entry in entries {
        let tb = entry
            .antoine
            .boiling_temperature(STANDARD_PRESSURE_MMHG)?;
        println!(
            "{:<16} {:<16} {:>9.5} {:>10.3} {:>9.3} {:>10.2}",
            entry.canonical_id,
            entry.display_name,
            entry.antoine.a,
            entry.antoine.b,
            entry.antoine.c,
            tb
        );
    }
    Ok(())
}

fn cmd_interactive(output: &OutputArgs) -> AppResult<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock();

    let first_name = prompt(&mut lines, "Enter the name of the component A: ")?;
    let first_antoine = parse_antoine(&prompt(
        &mut lines,
        "Enter the Antoine Constants for component 1 (A,B,C): ",
    )?)?;
    let second_name = prompt(&mut lines, "Enter the name of the component B: ")?;
    let second_antoine = parse_antoine(&prompt(
        &mut lines,
        "Enter the Antoine Constants for component 2 (A,B,C): ",
    )?)?;
    let temperature = prompt(&mut lines, "Enter the azeotrope temperature (Celsius): ")?;
    let composition = prompt(&mut lines, "Enter azeotrope composition (X1,X2): ")?;
    let (x1, x2) = match split_numbers(&composition).as_slice() {
        [x1, x2] => (x1.clone(), x2.clone()),
        _ => {
            return Err(AppError::InvalidInput(format!(
                "expected two mole fractions, got '{composition}'"
            )));
        }
    };

    let problem = ProblemDef {
        first: ComponentDef::Explicit {
            name: first_name,
            antoine: first_antoine,
        },
        second: ComponentDef::Explicit {
            name: second_name,
            antoine: second_antoine,
        },
        azeotrope: AzeotropeDef {
            temperature: QuantityDef::Text(temperature),
            x1: QuantityDef::Text(x1),
            x2: QuantityDef::Text(x2),
        },
        pressure: QuantityDef::Number(STANDARD_PRESSURE_MMHG),
        solver: SolverDef::default(),
    };
    solve_and_emit(&problem, output)
}

fn prompt(input: &mut impl BufRead, question: &str) -> AppResult<String> {
    print!("{question}");
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(AppError::InvalidInput(format!(
            "input ended before answering '{}'",
            question.trim_end_matches([':', ' '])
        )));
    }
    Ok(line.trim().to_string())
}

/// Split on whitespace and commas, so both `7.1 1244 217` and `0.5,0.5` work.
fn split_numbers(text: &str) -> Vec<String> {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_antoine(text: &str) -> AppResult<[f64; 3]> {
    let values = split_numbers(text)
        .iter()
        .map(|part| part.parse::<f64>())
        .collect::<Result<Vec<f64>, _>>()
        .map_err(|_| AppError::InvalidInput(format!("could not parse Antoine constants '{text}'")))?;
    match values.as_slice() {
        [a, b, c] => Ok([*a, *b, *c]),
        _ => Err(AppError::InvalidInput(format!(
            "expected three Antoine constants A B C, got '{text}'"
        ))),
    }
}

fn component_def(
    role: &str,
    catalog: Option<String>,
    name: Option<String>,
    antoine: Option<String>,
) -> AppResult<ComponentDef> {
    match (catalog, antoine) {
        (Some(query), None) => Ok(ComponentDef::Catalog(query)),
        (None, Some(constants)) => Ok(ComponentDef::Explicit {
            name: name.unwrap_or_else(|| role.to_string()),
            antoine: parse_antoine(&constants)?,
        }),
        _ => Err(AppError::InvalidInput(format!(
            "give either --{role} or --{role}-name with --{role}-antoine"
        ))),
    }
}

fn solve_and_emit(problem: &ProblemDef, output: &OutputArgs) -> AppResult<()> {
    let curve = solve_problem(problem)?;
    if output.strict {
        curve.ensure_resolved()?;
    }

    let rendered = match output.format {
        Format::Table => render_table(&curve, output.view.into()),
        Format::Csv => to_csv(&curve),
        Format::Json => to_json(&curve)?,
    };

    match &output.output {
        Some(path) => {
            std::fs::write(path, rendered).map_err(|source| AppError::FileWrite {
                path: path.clone(),
                source,
            })?;
            println!("✓ Wrote {}", path.display());
        }
        None => print!("{rendered}"),
    }
    Ok(())
}

fn render_table(curve: &EquilibriumCurve, perspective: Perspective) -> String {
    let view = curve.view(perspective);
    let (t1, t2) = curve.boiling_points_c;
    let mut out = String::new();

    out.push_str(&format!(
        "{} - {} at {:.2} mmHg\n",
        curve.first_name, curve.second_name, curve.pressure_mmhg
    ));
    out.push_str(&format!("  Boiling points: T1 = {t1:.4} °C, T2 = {t2:.4} °C\n"));
    out.push_str(&format!(
        "  Azeotrope: {:.2} °C ({}), label at {:.2} °C\n",
        view.annotation.temperature_c, curve.kind, view.annotation.label_temperature_c
    ));
    out.push_str(&format!("  Van Laar: {}\n", curve.params));
    out.push_str(&format!(
        "  Display range: {:.2} - {:.2} °C\n",
        view.display_bounds.lower_c, view.display_bounds.upper_c
    ));
    out.push('\n');

    let x_head = format!("x({})", view.component);
    let y_head = format!("y({})", view.component);
    out.push_str(&format!("{x_head:>24} {:>12} {y_head:>24}\n", "T [°C]"));
    for i in 0..view.liquid.len() {
        match (view.temperatures_c[i], view.vapor[i]) {
            (Some(t), Some(y)) => {
                out.push_str(&format!("{:>24.4} {t:>12.4} {y:>24.4}\n", view.liquid[i]));
            }
            _ => {
                out.push_str(&format!(
                    "{:>24.4} {:>12} {:>24}\n",
                    view.liquid[i], "unresolved", "-"
                ));
            }
        }
    }

    let unresolved = curve.unresolved_indices();
    if !unresolved.is_empty() {
        out.push_str(&format!("\n{} point(s) did not converge\n", unresolved.len()));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn antoine_constants_accept_spaces_or_commas() {
        assert_eq!(
            parse_antoine("7.10179 1244.951 217.881").unwrap(),
            [7.10179, 1244.951, 217.881]
        );
        assert_eq!(parse_antoine("7, 1200, 220").unwrap(), [7.0, 1200.0, 220.0]);
        assert!(parse_antoine("7 1200").is_err());
        assert!(parse_antoine("a b c").is_err());
    }

    #[test]
    fn component_flags_pick_catalog_or_explicit() {
        assert_eq!(
            component_def("first", Some("hexane".into()), None, None).unwrap(),
            ComponentDef::Catalog("hexane".into())
        );
        let explicit =
            component_def("first", None, Some("EA".into()), Some("7.1 1244.9 217.9".into()))
                .unwrap();
        assert!(matches!(explicit, ComponentDef::Explicit { ref name, .. } if name == "EA"));
        assert!(component_def("first", None, None, None).is_err());
    }

    #[test]
    fn prompt_reads_one_trimmed_line() {
        let mut input = io::Cursor::new("Ethyl acetate  \n0.531 0.469\n");
        assert_eq!(prompt(&mut input, "name: ").unwrap(), "Ethyl acetate");
        assert_eq!(prompt(&mut input, "x: ").unwrap(), "0.531 0.469");
        assert!(prompt(&mut input, "more: ").is_err());
    }

    #[test]
    fn table_lists_every_grid_point() {
        let problem = ProblemDef {
            first: ComponentDef::Catalog("ethyl acetate".into()),
            second: ComponentDef::Catalog("cyclohexane".into()),
            azeotrope: AzeotropeDef {
                temperature: QuantityDef::Number(72.8),
                x1: QuantityDef::Number(0.531),
                x2: QuantityDef::Number(0.469),
            },
            pressure: QuantityDef::Number(760.0),
            solver: SolverDef {
                grid_points: 11,
                ..SolverDef::default()
            },
        };
        let curve = solve_problem(&problem).unwrap();
        let table = render_table(&curve, Perspective::Second);
        assert!(table.contains("x(Cyclohexane)"));
        assert!(table.contains("minimum-boiling"));
        // 5 summary lines, blank line, column header, 11 rows
        assert_eq!(table.lines().count(), 5 + 1 + 1 + 11);
    }

    #[test]
    fn table_marks_unresolved_rows() {
        let problem = ProblemDef {
            first: ComponentDef::Catalog("ethyl acetate".into()),
            second: ComponentDef::Catalog("cyclohexane".into()),
            azeotrope: AzeotropeDef {
                temperature: QuantityDef::Number(72.8),
                x1: QuantityDef::Number(0.531),
                x2: QuantityDef::Number(0.469),
            },
            pressure: QuantityDef::Number(760.0),
            solver: SolverDef {
                tolerance: 1e-12,
                max_iterations: 5,
                grid_points: 5,
                parallel: false,
            },
        };
        let curve = solve_problem(&problem).unwrap();
        let table = render_table(&curve, Perspective::First);
        let rows: Vec<&str> = table.lines().filter(|l| l.contains("unresolved")).collect();
        assert_eq!(rows.len(), 3);
        assert!(rows[0].trim_start().starts_with("0.2500"));
        assert!(rows[0].trim_end().ends_with('-'));
        assert!(table.ends_with("3 point(s) did not converge\n"));
    }
}
