// std imports
use std::path::{Path, PathBuf};

// 3rd party imports
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info, warn, Level};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter};

// internal imports
use molweight::chemistry::amino_acid::calc_sequence_mass;
use molweight::chemistry::element::{ElementMassTable, ELEMENT_MASSES};
use molweight::chemistry::formula::compute_mass;
use molweight::entities::protein::Protein;

/// Formulas calculated by the demo
const DEMO_FORMULAS: [&'static str; 3] = ["C6 H12 O6", "H2 O", "C34 H46 Cl N3 O10"];

#[derive(Debug, Subcommand)]
enum Commands {
    /// Calculates the mass of a chemical formula, e.g. "C6 H12 O6"
    FormulaMass {
        /// Chemical formula, compounds may be separated by spaces
        formula: String,
        /// Optional mass table (`symbol,mass` per line) replacing the built-in element masses
        #[arg(long)]
        mass_table: Option<PathBuf>,
    },
    /// Calculates the average molecular weight of an amino acid sequence
    ProteinMass {
        /// Amino acid sequence in one letter code
        sequence: String,
        /// Number of disulfide bridges
        #[arg(long, default_value_t = 0)]
        disulfide_bonds: u32,
    },
    /// Reads a mass table and sums the masses of the given symbols
    MassTable {
        /// Path to the mass table (`symbol,mass` per line)
        path: PathBuf,
        /// Symbols to sum up, may be repeated
        #[arg(value_delimiter = ' ', num_args = 1..)]
        symbols: Vec<String>,
    },
    /// Runs the calculations for some well known proteins and molecules
    Demo {
        /// Optional mass table, if given 2 * H + He is calculated with it
        #[arg(long)]
        mass_table: Option<PathBuf>,
    },
}

#[derive(Debug, Parser)]
#[command(name = "molweight")]
struct Cli {
    /// Verbosity level
    /// 0 - Error
    /// 1 - Warn
    /// 2 - Info
    /// 3 - Debug
    /// > 3 - Trace
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let args = Cli::parse();

    let verbosity = match args.verbose {
        0 => Level::ERROR,
        1 => Level::WARN,
        2 => Level::INFO,
        3 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let filter = EnvFilter::from_default_env().add_directive(verbosity.into());

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    debug!("{:?}", args.command);

    match args.command {
        Commands::FormulaMass {
            formula,
            mass_table,
        } => {
            let mass = match mass_table {
                Some(path) => compute_mass(&formula, &read_mass_table(&path)?)?,
                None => compute_mass(&formula, &ELEMENT_MASSES)?,
            };
            println!("{}", mass);
        }
        Commands::ProteinMass {
            sequence,
            disulfide_bonds,
        } => {
            println!("{}", calc_sequence_mass(&sequence, disulfide_bonds)?);
        }
        Commands::MassTable { path, symbols } => {
            let table = read_mass_table(&path)?;
            let mut mass = 0.0;
            for symbol in symbols.iter() {
                mass += table
                    .get_mass(symbol)
                    .with_context(|| format!("{} not found in {}", symbol, path.display()))?;
            }
            println!("{}", mass);
        }
        Commands::Demo { mass_table } => {
            demo(mass_table)?;
        }
    }
    Ok(())
}

fn read_mass_table(path: &Path) -> Result<ElementMassTable> {
    let table = ElementMassTable::from_path(path)?;
    if table.is_empty() {
        warn!("Mass table {} is empty", path.display());
    }
    info!("Loaded {} element masses from {}", table.len(), path.display());
    Ok(table)
}

fn demo(mass_table: Option<PathBuf>) -> Result<()> {
    let galanin = Protein::new(
        "Galanin".to_owned(),
        "P22466".to_owned(),
        "GWTLNSAGYLLGPHAVGNHRSFSDKNGLTS".to_owned(),
    );
    let insulin_b_chain = Protein::new(
        "Insulin B chain".to_owned(),
        "P01308".to_owned(),
        "FVNQHLCGSHLVEALYLVCGERGFFYTPKT".to_owned(),
    );

    for (protein, disulfide_bonds) in [(&galanin, 0), (&insulin_b_chain, 1)] {
        info!("Calculating {}", protein);
        println!("{}", protein);
        println!("\tlength: {}", protein.get_length());
        println!("\tcontains CGSHLV: {}", protein.contains("CGSHLV"));
        println!(
            "\tmolecular weight ({} disulfide bonds): {}",
            disulfide_bonds,
            protein.get_molecular_weight(disulfide_bonds)?
        );
    }

    if let Some(path) = mass_table {
        let table = read_mass_table(&path)?;
        let hydrogen = table.get_mass("H").context("H not found in mass table")?;
        let helium = table.get_mass("He").context("He not found in mass table")?;
        println!("2 * H + He: {}", 2.0 * hydrogen + helium);
    }

    for formula in DEMO_FORMULAS.iter() {
        println!("{}: {}", formula, compute_mass(formula, &ELEMENT_MASSES)?);
    }
    Ok(())
}
