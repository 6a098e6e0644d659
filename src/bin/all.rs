//! CLI for the branch prediction benchmark.
//!
//! Usage:
//!   branch-bench              # Random, cyclic and constant phases
//!   branch-bench --list       # List available sequences
//!   branch-bench random       # Run a single sequence
//!   branch-bench --help       # Show help

use branch_predict_bench::registry::build_registry;
use branch_predict_bench::utils::BenchConfig;
use std::env;
use std::process;

/// Raw value following a flag, exiting with a message if it is missing
fn flag_value<'a>(args: &'a [String], i: usize, flag: &str) -> &'a str {
    match args.get(i) {
        Some(value) => value,
        None => {
            eprintln!("Missing value for {}", flag);
            process::exit(1);
        }
    }
}

/// Parse the numeric value following a flag, exiting with a message on bad input
fn parse_number<T: std::str::FromStr>(args: &[String], i: usize, flag: &str) -> T {
    let raw = flag_value(args, i, flag);
    match raw.trim().parse::<T>() {
        Ok(value) => value,
        Err(_) => {
            eprintln!("Invalid value for {}: {}", flag, raw);
            process::exit(1);
        }
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let registry = build_registry();

    let mut show_list = false;
    let mut show_help = false;
    let mut config = BenchConfig::default();
    let mut sequence_filter: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--list" | "-l" => show_list = true,
            "--help" | "-h" => show_help = true,
            "--size" => {
                i += 1;
                config.sequence_len = parse_number(&args, i, "--size");
            }
            "--reps" => {
                i += 1;
                config.repetitions = parse_number(&args, i, "--reps");
            }
            "--seed" => {
                i += 1;
                config.seed = Some(parse_number(&args, i, "--seed"));
            }
            "--preview" => {
                i += 1;
                config.preview_len = parse_number(&args, i, "--preview");
            }
            "--all-variants" | "-a" => config.all_variants = true,
            "--no-pin" => config.pin = false,
            "--csv" => {
                i += 1;
                config.csv_path = Some(flag_value(&args, i, "--csv").to_string());
            }
            arg if !arg.starts_with('-') => {
                sequence_filter = Some(arg.to_string());
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
        i += 1;
    }

    if show_help {
        branch_predict_bench::tui::print_help();
        return;
    }

    if show_list {
        branch_predict_bench::tui::print_available_generators(&registry);
        return;
    }

    let generators: Vec<_> = match sequence_filter {
        Some(name) => match registry.find(&name) {
            Some(generator) => vec![generator],
            None => {
                eprintln!("Sequence '{}' not found.", name);
                eprintln!("Available: {:?}", registry.list_names());
                process::exit(1);
            }
        },
        None => registry.all().iter().map(|g| g.as_ref()).collect(),
    };

    if let Err(e) = branch_predict_bench::run_benchmarks(&generators, &config) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_csv_path_kept_verbatim() {
        let args = args(&["branch-bench", "--csv", " runs.csv "]);
        assert_eq!(flag_value(&args, 2, "--csv"), " runs.csv ");
    }

    #[test]
    fn test_numbers_are_trimmed() {
        let args = args(&["branch-bench", "--size", " 1000 "]);
        assert_eq!(parse_number::<usize>(&args, 2, "--size"), 1000);
    }
}
