use clap::{Parser, Subcommand};
use std::path::PathBuf;

use entities::process::{entities_decode, entities_encode, entities_process};
use pak::process::{pak_list, pak_pack, pak_unpack};

#[derive(Parser)]
#[command(name = "qmap-cli")]
#[command(about = "CLI for Quake map data files", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Entity block operations (Convert)
    #[command(subcommand)]
    Entities(EntityCommands),
    /// PAK Operations (Unpack/Pack)
    #[command(subcommand)]
    Pak(PakCommands),
}

#[derive(Subcommand)]
enum EntityCommands {
    /// Decode a raw entity block to a JSON array
    Decode {
        /// Input entity block file (reads standard input when omitted)
        input: Option<PathBuf>,
        /// Output JSON file (optional, defaults to standard output)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Replace the raw `entities` field of a .bsp.json document with parsed records
    Process {
        /// Input JSON document (reads standard input when omitted)
        input: Option<PathBuf>,
        /// Output JSON file (optional, defaults to standard output)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Encode a JSON array of records back into an entity block
    Encode {
        /// Input JSON file
        input: PathBuf,
        /// Output entity block file (optional, defaults to standard output)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum PakCommands {
    /// Unpack a PAK archive
    Unpack {
        /// Input PAK file
        input: PathBuf,
        /// Output directory (optional, defaults to file name stem)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List the directory of a PAK archive
    List {
        /// Input PAK file
        input: PathBuf,
        /// Emit the directory as JSON
        #[arg(long)]
        json: bool,
    },
    /// Pack a directory into a PAK archive
    Pack {
        /// Input directory
        input: PathBuf,
        /// Output PAK file
        output: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Entities(cmd) => match cmd {
            EntityCommands::Decode { input, output } => entities_decode(input, output)?,
            EntityCommands::Process { input, output } => entities_process(input, output)?,
            EntityCommands::Encode { input, output } => entities_encode(input, output)?,
        },
        Commands::Pak(cmd) => match cmd {
            PakCommands::Unpack { input, output } => pak_unpack(input, output)?,
            PakCommands::List { input, json } => pak_list(input, *json)?,
            PakCommands::Pack { input, output } => pak_pack(input, output)?,
        },
    }

    Ok(())
}
