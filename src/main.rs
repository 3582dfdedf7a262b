//! Android build artifact map CLI
//!
//! Entry point for the `artifact-map` command-line tool.

use android_artifact_map::{
    collect_build_outputs, create_split_artifact_meta, map_build_artifacts, read_path_list,
    report, select, ConfigOverrides, Preference, SelectionConfig,
};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::io;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "artifact-map")]
#[command(about = "Group Android build outputs by module, build type and flavour", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct Inputs {
    /// Collect .apk and .aab files below this directory instead of taking PATHS
    #[arg(long, conflicts_with = "paths")]
    dir: Option<PathBuf>,

    /// Build output paths (read from stdin, one per line, when omitted)
    paths: Vec<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the module/build type/flavour mapping
    Map {
        /// Output in human-readable format instead of JSON
        #[arg(long)]
        human: bool,

        #[command(flatten)]
        inputs: Inputs,
    },

    /// Print the artifact group a split APK belongs to
    Resolve {
        /// The split APK to resolve
        target: String,

        #[command(flatten)]
        inputs: Inputs,
    },

    /// Print the variants to deploy
    Select {
        /// Path to config file (default: .artifact-map.toml)
        #[arg(long, short = 'c')]
        config: Option<PathBuf>,

        /// Only variants of this module
        #[arg(long)]
        module: Option<String>,

        /// Only variants of this build type
        #[arg(long)]
        build_type: Option<String>,

        /// Only variants of this product flavour ("" for none)
        #[arg(long)]
        flavour: Option<String>,

        /// Deploy the bundle or the APKs when both exist (aab, apk)
        #[arg(long)]
        prefer: Option<Preference>,

        /// Output in human-readable format instead of JSON
        #[arg(long)]
        human: bool,

        #[command(flatten)]
        inputs: Inputs,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Map { human, inputs } => {
            run_map(human, inputs);
        }
        Commands::Resolve { target, inputs } => {
            run_resolve(&target, inputs);
        }
        Commands::Select {
            config,
            module,
            build_type,
            flavour,
            prefer,
            human,
            inputs,
        } => {
            let overrides = ConfigOverrides {
                module,
                build_type,
                product_flavour: flavour,
                prefer,
            };
            run_select(config, overrides, human, inputs);
        }
    }
}

fn read_inputs(inputs: Inputs) -> Vec<String> {
    if let Some(dir) = inputs.dir {
        return match collect_build_outputs(&dir) {
            Ok(paths) => paths,
            Err(e) => {
                eprintln!("Error scanning build outputs: {}", e);
                process::exit(1);
            }
        };
    }

    if !inputs.paths.is_empty() {
        return inputs.paths;
    }

    match read_path_list(io::stdin().lock()) {
        Ok(paths) => paths,
        Err(e) => {
            eprintln!("Error reading paths from stdin: {}", e);
            process::exit(1);
        }
    }
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error serializing output: {}", e);
            process::exit(1);
        }
    }
}

fn run_map(human: bool, inputs: Inputs) {
    let paths = read_inputs(inputs);
    let map = map_build_artifacts(&paths);

    if human {
        println!("{}", report::render_map(&map));
    } else {
        print_json(&map);
    }
}

fn run_resolve(target: &str, inputs: Inputs) {
    let paths = read_inputs(inputs);

    match create_split_artifact_meta(target, &paths) {
        Ok(meta) => print_json(&meta),
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    }
}

fn run_select(
    config_path: Option<PathBuf>,
    overrides: ConfigOverrides,
    human: bool,
    inputs: Inputs,
) {
    let config = match SelectionConfig::load(config_path.as_deref())
        .and_then(|config| config.with_overrides(overrides))
    {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            process::exit(1);
        }
    };

    let paths = read_inputs(inputs);
    let map = map_build_artifacts(&paths);
    let selected = select(&map, &config);

    if human {
        println!("{}", report::render_selection(&selected));
    } else {
        print_json(&selected);
    }

    // Exit with appropriate code
    if selected.is_empty() {
        process::exit(1);
    }
}
