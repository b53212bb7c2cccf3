use clap::{Parser, Subcommand};
use lightning::{
    commands::{lightning_combination, lightning_diff, render_diff, summarize_diff, DumpFormat},
    prelude::LightningError,
};

const INFO: &str = "\
lightning: packed diffs of aligned genome block sequences
usage: lightning [--help] <subcommand>

Subcommands:

  diff: classify each left block against the right sequence.
  combination: look up the combination index of a supporting-count pair.

Block specs: 'GGAA' is a valid block, '!GGNA' an invalid one, and
'GGAA+2' a valid block carrying two mixed tags.
";

#[derive(Parser)]
#[clap(name = "lightning")]
#[clap(about = INFO)]
struct Cli {
    #[arg(short, long, action = clap::ArgAction::Count)]
    debug: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    Diff {
        /// the reference sequence, as block specs
        #[arg(long, required = true, num_args = 1..)]
        left: Vec<String>,

        /// the sequence to compare, as block specs
        #[arg(long, required = true, num_args = 1..)]
        right: Vec<String>,

        /// also record the combination index of each position
        #[arg(long)]
        provenance: bool,

        /// output format
        #[arg(long, value_enum, default_value_t = DumpFormat::Type)]
        format: DumpFormat,
    },
    Combination {
        /// the first count of the pair
        first: u32,

        /// the second count of the pair
        second: u32,
    },
}

fn run() -> Result<(), LightningError> {
    let cli = Cli::parse();
    match &cli.command {
        Some(Commands::Diff {
            left,
            right,
            provenance,
            format,
        }) => {
            let (diff, report) =
                lightning_diff(left.as_slice(), right.as_slice(), *provenance)?.into_parts();
            print!("{}", render_diff(&diff, *format));
            if cli.debug > 0 {
                eprintln!("{}", summarize_diff(&diff));
                eprint!("{}", report);
            }
        }
        Some(Commands::Combination { first, second }) => {
            let (index, report) = lightning_combination(*first, *second).into_parts();
            println!("{}", index);
            if cli.debug > 0 {
                eprint!("{}", report);
            }
        }
        None => {
            println!("{}\n", INFO);
            std::process::exit(1);
        }
    }
    Ok(())
}

fn main() {
    match run() {
        Ok(_) => {}
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
