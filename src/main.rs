//! CLI entry point for evscribe
//!
//! Feeds an already-written unpacked event file through the external
//! rebuilder and stores the verbose result.

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use evscribe::{Convert, Rebuilder, ToolConfig};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let command = &args[1];

    match command.as_str() {
        "convert" => {
            if args.len() < 4 {
                eprintln!("Error: Missing input or output file path");
                eprintln!();
                print_usage();
                process::exit(1);
            }
            let input = PathBuf::from(&args[2]);
            let output = PathBuf::from(&args[3]);
            let config = args
                .get(4)
                .filter(|s| s.as_str() == "--config")
                .and_then(|_| args.get(5))
                .map(PathBuf::from);
            run_convert(input, output, config);
        }
        "--help" | "-h" => {
            print_usage();
        }
        _ => {
            eprintln!("Error: Unknown command '{}'", command);
            eprintln!();
            print_usage();
            process::exit(1);
        }
    }
}

fn print_usage() {
    println!("evscribe - typed writer for unpacked EMEVD event scripts");
    println!();
    println!("USAGE:");
    println!("    cargo run -- convert <unpacked.txt> <out.txt> [--config cfg.json]");
    println!();
    println!("COMMANDS:");
    println!("    convert <in> <out> [--config cfg.json]    Run the external rebuilder");
    println!("    --help, -h                                Show this help message");
    println!();
    println!("OPTIONS:");
    println!("    --config    JSON file with interpreter/rebuilder/templates paths");
    println!();
    println!("EXAMPLES:");
    println!("    cargo run -- convert m18_01_00_00.txt m18_01_00_00.verbose.txt");
}

fn run_convert(input: PathBuf, output: PathBuf, config_path: Option<PathBuf>) {
    let config = match config_path {
        Some(path) => match ToolConfig::from_file(Path::new(&path)) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: Failed to read config {}: {}", path.display(), e);
                process::exit(1);
            }
        },
        None => ToolConfig::default(),
    };

    let unpacked = match fs::read_to_string(&input) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error: Failed to read {}: {}", input.display(), e);
            process::exit(1);
        }
    };

    let rebuilder = Rebuilder::new(config);
    match rebuilder.convert(&unpacked) {
        Ok(verbose) => {
            if let Err(e) = fs::write(&output, verbose) {
                eprintln!("Error: Failed to write {}: {}", output.display(), e);
                process::exit(1);
            }
            println!("Wrote {}", output.display());
        }
        Err(e) => {
            eprintln!("Error: Conversion failed: {}", e);
            process::exit(1);
        }
    }
}
