use anyhow::Result;
use clap::{Parser, Subcommand};
use cli::runner::run_job;
use config::enums::SearchMethod;
use config::job::{
    load_job_config, ElementMatrixJob, ElementSearchJob, ElementTableJob, FractileJob, JobConfig,
};
use log::info;

#[derive(clap::ValueEnum, Clone, Debug, PartialEq)]
enum SearchMethodArgs {
    Triangle,
    Element,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert a text element table to an `.npy` element matrix. One element per
    /// line, `#` starts a comment line, trailing blank lines are ignored
    ElementMatrix {
        #[arg(long, required = true)]
        input_path: String,

        #[arg(long, required = true)]
        output_path: String,
    },

    /// Convert an `.npy` element matrix (integer or integral doubles) to a text
    /// element table
    ElementTable {
        #[arg(long, required = true)]
        input_path: String,

        #[arg(long, required = true)]
        output_path: String,
    },

    /// Find the element containing each point
    ElmtSearch {
        #[arg(long, required = true)]
        nodes_path: String,

        #[arg(long, required = true)]
        elements_path: String,

        #[arg(long, required = true)]
        points_path: String,

        #[arg(long, required = true)]
        output_path: String,

        #[arg(long, default_value_t = SearchMethodArgs::Element, value_enum)]
        method: SearchMethodArgs,
    },

    /// Print fractiles of an `.npy` vector
    Fractile {
        #[arg(long, required = true)]
        input_path: String,

        #[arg(long, required = true, num_args = 1..)]
        fractiles: Vec<f64>,
    },

    /// Run a job described by a YAML config
    Run {
        #[arg(long, required = true)]
        config: String,
    },
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(arg_required_else_help = true)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

fn job_from_command(command: Command) -> Result<JobConfig> {
    let job = match command {
        Command::ElementMatrix {
            input_path,
            output_path,
        } => JobConfig::ElementMatrix(ElementMatrixJob {
            input_path,
            output_path,
        }),
        Command::ElementTable {
            input_path,
            output_path,
        } => JobConfig::ElementTable(ElementTableJob {
            input_path,
            output_path,
        }),
        Command::ElmtSearch {
            nodes_path,
            elements_path,
            points_path,
            output_path,
            method,
        } => JobConfig::ElementSearch(ElementSearchJob {
            nodes_path,
            elements_path,
            points_path,
            output_path,
            method: match method {
                SearchMethodArgs::Triangle => SearchMethod::Triangle,
                SearchMethodArgs::Element => SearchMethod::Element,
            },
        }),
        Command::Fractile {
            input_path,
            fractiles,
        } => JobConfig::Fractile(FractileJob {
            input_path,
            fractiles,
        }),
        Command::Run { config } => {
            info!("Loading job config {}", config);
            load_job_config(&config)?
        }
    };
    Ok(job)
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let job = job_from_command(args.command)?;
    run_job(&job)
}
