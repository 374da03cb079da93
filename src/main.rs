use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use unitparams::app::logging::setup_logging;
use unitparams::{AppError, DatabaseLocation, OutputFormat, RemovalOptions};

#[derive(Parser)]
#[command(name = "unitparams")]
#[command(version)]
#[command(
    about = "Inspect and validate treatment-unit parameter documents",
    long_about = None
)]
struct Cli {
    /// Directory of <technology>.yaml documents (overrides UNITPARAMS_DATABASE)
    #[arg(long, global = true)]
    database: Option<PathBuf>,

    /// Emit debug logs on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List technologies and their process subtypes
    #[clap(visible_alias = "ls")]
    List,
    /// Print a technology's parameters resolved for the given subtypes
    Show {
        technology: String,
        /// Process subtype overlaid on `default` (repeatable, applied in order)
        #[arg(short, long = "subtype")]
        subtypes: Vec<String>,
        #[arg(short, long, value_enum, default_value_t = Format::Yaml)]
        format: Format,
    },
    /// Print one entry by dotted path, e.g. default.capital_cost.cost_factor
    Get { technology: String, path: String },
    /// Resolve removal fractions for solutes
    Removal {
        technology: String,
        /// Solute to resolve (repeatable); all tabulated solutes when omitted
        #[arg(long = "solute")]
        solutes: Vec<String>,
        #[arg(short, long = "subtype")]
        subtypes: Vec<String>,
        /// Fall back to default_removal_frac_mass_solute for untabulated solutes
        #[arg(long)]
        use_default_removal: bool,
    },
    /// Validate parameter documents
    Validate {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Yaml,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Yaml => OutputFormat::Yaml,
            Format::Json => OutputFormat::Json,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        let code = if e.kind() == std::io::ErrorKind::NotFound { 2 } else { 1 };
        std::process::exit(code);
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let location = DatabaseLocation::resolve(cli.database.as_deref());

    match cli.command {
        Commands::Validate { files } => validate(&files)?,
        Commands::List => {
            let db = unitparams::open_database(&location)?;
            for summary in unitparams::list(&db) {
                println!("{}: {}", summary.technology, summary.subtypes.join(", "));
            }
        }
        Commands::Show { technology, subtypes, format } => {
            let db = unitparams::open_database(&location)?;
            print!("{}", unitparams::show(&db, &technology, &subtypes, format.into())?);
        }
        Commands::Get { technology, path } => {
            let db = unitparams::open_database(&location)?;
            print!("{}", unitparams::get(&db, &technology, &path)?);
        }
        Commands::Removal { technology, solutes, subtypes, use_default_removal } => {
            let db = unitparams::open_database(&location)?;
            let options = RemovalOptions { technology, subtypes, solutes, use_default_removal };
            for row in unitparams::removal(&db, &options)? {
                match row.display_name {
                    Some(name) => println!("{}\t{}\t{}", row.solute, row.fraction, name),
                    None => println!("{}\t{}", row.solute, row.fraction),
                }
            }
        }
    }

    Ok(())
}

fn validate(files: &[PathBuf]) -> Result<(), AppError> {
    let outcome = unitparams::validate(files);
    outcome.diagnostics.emit();
    if !outcome.is_valid() {
        return Err(AppError::config_error(format!(
            "{} error(s) across {} document(s)",
            outcome.diagnostics.error_count(),
            outcome.checked
        )));
    }
    println!(
        "✅ {} document(s) valid ({} warning(s))",
        outcome.checked,
        outcome.diagnostics.warning_count()
    );
    Ok(())
}
