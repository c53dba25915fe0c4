use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use eyre::Result;

use claimdocs_cli::commands::{self, Outcome};
use claimdocs_cli::config::{self, CliConfig};
use claimdocs_core::client::ClientDetails;
use claimdocs_core::document_type::DocumentType;
use claimdocs_core::form::ClientForm;
use claimdocs_export::download::DirectoryDownload;

#[derive(Parser, Debug)]
#[command(name = "claimdocs")]
#[command(version, about = "Fill motor vehicle accident claim documents from client details")]
struct Cli {
    /// Config file (defaults to the per-user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate the selected documents (one → .docx, several → .zip)
    Generate {
        #[command(flatten)]
        client: ClientArgs,

        #[command(flatten)]
        output: OutputArgs,

        /// Document to generate: warrant, consent, demand or notice. Repeatable.
        #[arg(short, long = "doc")]
        docs: Vec<DocumentType>,
    },
    /// Generate all four documents as separate files
    All {
        #[command(flatten)]
        client: ClientArgs,

        #[command(flatten)]
        output: OutputArgs,

        /// Pause between successive files, in milliseconds
        #[arg(long)]
        pause_ms: Option<u64>,
    },
    /// Write the effective config to the config file
    InitConfig,
}

#[derive(Args, Debug)]
struct ClientArgs {
    /// Client's full name
    #[arg(long, default_value = "")]
    name: String,

    /// Client's email address
    #[arg(long, default_value = "")]
    email: String,

    /// Client's phone number
    #[arg(long, default_value = "")]
    phone: String,

    /// Client's identification number
    #[arg(long = "id-number", default_value = "")]
    id_number: String,
}

impl From<ClientArgs> for ClientForm {
    fn from(args: ClientArgs) -> Self {
        ClientForm::new(ClientDetails::new(
            args.name,
            args.email,
            args.phone,
            args.id_number,
        ))
    }
}

#[derive(Args, Debug)]
struct OutputArgs {
    /// Directory to write files into
    #[arg(short, long)]
    out: Option<PathBuf>,
}

impl OutputArgs {
    fn download(self, config: &CliConfig) -> DirectoryDownload {
        DirectoryDownload::new(self.out.unwrap_or_else(|| config.output_dir()))
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config_path = match cli.config {
        Some(path) => path,
        None => config::default_config_path()?,
    };
    let config = config::load_config(&config_path)?;

    let outcome = match cli.command {
        Command::Generate {
            client,
            output,
            docs,
        } => {
            let mut form = ClientForm::from(client);
            commands::generate(
                &mut form,
                &docs,
                output.download(&config),
                config.generator_options(),
            )
            .await
        }
        Command::All {
            client,
            output,
            pause_ms,
        } => {
            let mut config = config;
            if let Some(ms) = pause_ms {
                config.download_pause_ms = ms;
            }
            let mut form = ClientForm::from(client);
            commands::generate_all(&mut form, output.download(&config), config.generator_options())
                .await
        }
        Command::InitConfig => {
            config::save_config(&config, &config_path)?;
            println!("{}", config_path.display());
            return Ok(ExitCode::SUCCESS);
        }
    };

    report(&outcome);
    Ok(outcome.exit_code())
}

fn report(outcome: &Outcome) {
    match outcome {
        Outcome::Generated(_) if outcome.is_success() => println!("{}", outcome.message()),
        _ => eprintln!("{}", outcome.message()),
    }
}
