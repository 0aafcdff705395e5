use crate::server;
use clap::{Args, Parser, Subcommand};
use lead_intake::config::AppConfig;
use lead_intake::error::AppError;
use lead_intake::workflows::intake::{AttachmentStore, FsAttachmentStore, ResourceCatalog};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Chapter Lead Intake",
    about = "Run the chapter lead-intake service and inspect its resource catalog",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// List the resource catalog and verify every PDF is retrievable
    Resources(ResourcesArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ResourcesArgs {
    /// Override the configured resource attachment directory
    #[arg(long)]
    dir: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Resources(args) => run_resources_check(args),
    }
}

/// Every catalog title must map to a readable attachment at request time;
/// this surfaces a broken deploy before a lead hits the missing file.
fn run_resources_check(args: ResourcesArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let root = args.dir.unwrap_or(config.email.resource_dir);
    let attachments = FsAttachmentStore::new(root);
    let catalog = ResourceCatalog::standard();

    println!("Resource catalog ({})", attachments.root().display());
    let mut missing = 0usize;
    for entry in catalog.entries() {
        match attachments.fetch(entry.filename) {
            Ok(bytes) => println!("- {} -> {} ({} bytes)", entry.title, entry.filename, bytes.len()),
            Err(err) => {
                missing += 1;
                println!("- {} -> {} MISSING ({err})", entry.title, entry.filename);
            }
        }
    }

    if missing == 0 {
        println!("\nAll {} attachments retrievable", catalog.entries().len());
    } else {
        println!("\n{missing} attachment(s) missing");
    }

    Ok(())
}
