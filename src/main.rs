use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use tracing::info;

use minitree::prelude::*;

#[derive(Parser)]
#[command(name = "minitree")]
#[command(about = "Binary decision tree induction and validation")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// JSON file with the attribute and class label tables
    /// (defaults to the built-in risk assessment tables)
    #[arg(long, global = true)]
    codec: Option<PathBuf>,

    /// Impurity measure used to select splitting attributes
    #[arg(long, value_enum, default_value_t = ImpurityArg::Gini, global = true)]
    impurity: ImpurityArg,

    /// Enable verbose (debug-level) logging
    #[arg(long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(long, global = true)]
    quiet: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum ImpurityArg {
    Gini,
    Error,
    Entropy,
}

impl From<ImpurityArg> for Impurity {
    fn from(arg: ImpurityArg) -> Self {
        match arg {
            ImpurityArg::Gini => Impurity::Gini,
            ImpurityArg::Error => Impurity::ClassificationError,
            ImpurityArg::Entropy => Impurity::Entropy,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Classify unlabeled records and write `label, coverage, accuracy` lines
    Classify {
        /// Training file
        train: PathBuf,
        /// File of unlabeled records
        input: PathBuf,
        /// Output file
        output: PathBuf,
    },

    /// Report the percentage error on an independently labeled file
    Validate {
        /// Training file
        train: PathBuf,
        /// File of labeled records
        validation: PathBuf,
    },

    /// Report the error of the tree on its own training records
    TrainingError {
        /// Training file
        train: PathBuf,
    },

    /// Report the leave-one-out error over the training records
    LeaveOneOut {
        /// Training file
        train: PathBuf,
    },

    /// Print the tree built from the training records
    Tree {
        /// Training file
        train: PathBuf,

        /// Also write a Graphviz rendering of the tree to this path
        #[arg(long)]
        dot: Option<PathBuf>,
    },
}

fn load_session(cli: &Cli, train: &Path) -> Result<Session<LabelCodec>> {
    let codec = match &cli.codec {
        Some(path) => LabelCodec::from_json_file(path)
            .with_context(|| format!("failed to load codec {}", path.display()))?,
        None => LabelCodec::default(),
    };

    let learner = DecisionTreeBuilder::new()
        .impurity(cli.impurity.into())
        .build();

    let session = Session::load(codec, learner, train)
        .with_context(|| format!("failed to read training file {}", train.display()))?
        .verbose(cli.verbose);
    Ok(session)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match (cli.verbose, cli.quiet) {
        (true, _) => "debug",
        (_, true) => "error",
        _ => "info",
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match &cli.command {
        Command::Classify { train, input, output } => {
            let session = load_session(&cli, train)?;
            let n = session.classify_data(input, output)
                .with_context(|| format!("failed to classify {}", input.display()))?;
            info!(n_records = n, output = %output.display(), "classification written");
        },
        Command::Validate { train, validation } => {
            let session = load_session(&cli, train)?;
            let report = session.validate(validation)
                .with_context(|| format!("failed to validate {}", validation.display()))?;
            println!("{}", report.to_string().bold());
        },
        Command::TrainingError { train } => {
            let session = load_session(&cli, train)?;
            let report = session.training_error();
            println!(
                "{} {} / {} ({:.4})",
                "training error:".bold().green(),
                report.n_errors(),
                report.n_records(),
                report.rate(),
            );
        },
        Command::LeaveOneOut { train } => {
            let session = load_session(&cli, train)?;
            let report = session.leave_one_out();
            println!(
                "{} {} / {} ({:.4})",
                "leave-one-out error:".bold().yellow(),
                report.n_errors(),
                report.n_records(),
                report.rate(),
            );
        },
        Command::Tree { train, dot } => {
            let session = load_session(&cli, train)?;
            print!("{}", session.tree());
            if let Some(path) = dot {
                session.tree()
                    .to_dot_file(path)
                    .with_context(|| format!("failed to write {}", path.display()))?;
            }
        },
    }

    Ok(())
}
