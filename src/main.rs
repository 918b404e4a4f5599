use clap::{Parser, Subcommand};
use customer::{
    domain::OrchestratorMode,
    service::{mock::generator, orchestrator::Orchestrator},
};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "customer", version, about = "A customer address update CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to the customer seed CSV file to process
    #[arg(value_name = "CUSTOMERS_FILE")]
    customers: Option<String>,

    /// Path to the address updates CSV file to process
    #[arg(value_name = "UPDATES_FILE")]
    updates: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate dummy test data to a pair of files
    Generate {
        /// Customer seed output file path
        #[arg(short = 'c', long, default_value = "customers.csv", value_name = "FILE")]
        customers_output: String,

        /// Address updates output file path
        #[arg(short = 'u', long, default_value = "updates.csv", value_name = "FILE")]
        updates_output: String,

        /// Number of customers to generate
        #[arg(short = 'n', long, default_value = "10", value_name = "COUNT")]
        count: usize,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr; stdout is reserved for the final CSV readout.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Cli::parse();

    match args.command {
        Some(Commands::Generate {
            customers_output,
            updates_output,
            count,
        }) => {
            generator(&customers_output, &updates_output, count)?;
        }
        None => {
            let customers_file = args
                .customers
                .ok_or("Please provide a customers CSV file path or use 'generate' command")?;
            let updates_file = args
                .updates
                .ok_or("Please provide an updates CSV file path or use 'generate' command")?;

            let orchestrator = Orchestrator::new(OrchestratorMode::Csv {
                customers_file,
                updates_file,
            })
            .await;
            let final_states = orchestrator.process().await?;
            Orchestrator::output_csv(&final_states)?;
        }
    }

    Ok(())
}
