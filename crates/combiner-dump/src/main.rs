use clap::{Parser, Subcommand};
use std::process;

use combiner_dump::{decode_word, dump_preset, format_write, parse_word, Preset, WordKind};

#[derive(Parser)]
#[command(name = "combiner-dump")]
#[command(about = "Print NV2A register combiner method writes and decode raw words")]
#[command(long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Suppress log output (only show results and errors)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every method write a preset pipeline produces
    Preset {
        /// Pipeline to apply
        #[arg(value_enum)]
        preset: Preset,
    },
    /// Decode a raw register word
    Decode {
        /// Register layout to decode with
        #[arg(value_enum)]
        kind: WordKind,

        /// Word value, decimal or 0x-prefixed hex
        word: String,
    },
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging (suppressed if --quiet)
    if !cli.quiet {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }

    let result = match cli.command {
        Commands::Preset { preset } => dump_preset(preset).map(|writes| {
            for write in &writes {
                println!("{}", format_write(write));
            }
        }),
        Commands::Decode { kind, word } => parse_word(&word)
            .and_then(|value| decode_word(kind, value))
            .map(|fields| {
                let width = fields.iter().map(|f| f.name.len()).max().unwrap_or(0);
                for field in &fields {
                    println!("{:width$}  {}", field.name, field.value, width = width);
                }
            }),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
