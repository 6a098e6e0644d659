//! Text User Interface (TUI) utilities.
//!
//! Handles formatted output for the CLI.

use crate::control_flow::gray_point::bench::PassResult;
use crate::control_flow::gray_point::MapFn;
use crate::registry::{SequenceGenerator, SequenceRegistry};
use crate::utils::VariantInfo;
use terminal_size::{terminal_size, Width};

/// Get the current terminal width, constrained to a reasonable range
fn get_term_width() -> usize {
    if let Some((Width(w), _)) = terminal_size() {
        (w as usize).clamp(40, 200)
    } else {
        80
    }
}

/// Name shown for a variant, with the C compiler appended for C variants
pub fn display_name(variant: &VariantInfo<MapFn>) -> String {
    match (variant.name.starts_with("c-"), crate::utils::C_COMPILER_NAME) {
        (true, Some(compiler)) => format!("{} ({})", variant.name, compiler),
        _ => variant.name.to_string(),
    }
}

/// Print the application header
pub fn print_header() {
    let term_width = get_term_width().min(80);
    let title = " Branch Prediction Benchmark ";
    let padding = term_width.saturating_sub(title.len()) / 2;
    let right_padding = term_width.saturating_sub(padding + title.len());

    let border = "═".repeat(term_width);

    println!("╔{}╗", border);
    println!(
        "║{}{}{}║",
        " ".repeat(padding),
        title,
        " ".repeat(right_padding)
    );
    println!("╚{}╝", border);
    println!();
}

/// Print `f(i) = (x, y)` for every in-range index of each variant
pub fn print_mapping_tables(variants: &[VariantInfo<MapFn>]) {
    for (i, variant) in variants.iter().enumerate() {
        if i > 0 {
            print_separator();
        }
        println!("{} version: {}", display_name(variant), variant.description);
        for index in 0..4 {
            let p = (variant.function)(index);
            println!("f({}) = ({}, {})", index, p.x, p.y);
        }
    }
    println!();
}

/// Print the run parameters shared by every phase
pub fn print_run_info(sequence_len: usize, repetitions: usize, seed: u64, pinned: bool) {
    println!("SIZE OF SEQUENCE: {}", sequence_len);
    println!(
        "Repetitions: {}, seed: {}, CPU pinning: {}",
        repetitions,
        seed,
        if pinned { "on" } else { "off" }
    );
    println!();
}

/// Print the title block of one sequence phase
pub fn print_phase_header(generator: &dyn SequenceGenerator) {
    let headline = generator.headline();
    println!("{}", headline);
    println!("{}", "=".repeat(headline.len()));
}

/// Print the closing rule of one sequence phase
pub fn print_phase_footer(generator: &dyn SequenceGenerator) {
    println!("{}", "=".repeat(generator.headline().len()));
    println!();
}

/// `sequence: a, b, c, ...` with at most `n` elements, `...` only if cut
pub fn format_preview(sequence: &[usize], n: usize) -> String {
    let shown: Vec<String> = sequence.iter().take(n).map(|v| v.to_string()).collect();
    let mut line = format!("sequence: {}", shown.join(", "));
    if sequence.len() > n {
        line.push_str(if shown.is_empty() { "..." } else { ", ..." });
    }
    line
}

pub fn print_preview(sequence: &[usize], n: usize) {
    println!("{}", format_preview(sequence, n));
}

/// Print the line introducing a variant's passes within a phase
pub fn print_variant_title(generator: &dyn SequenceGenerator, variant: &VariantInfo<MapFn>) {
    println!("[{}] {} version:", generator.name(), display_name(variant));
}

/// `Result: (x,y), Elapsed time: N ms`, plus cycles when they were measured
pub fn format_pass(pass: &PassResult) -> String {
    let mut line = format!(
        "Result: {}, Elapsed time: {} ms",
        pass.point,
        pass.timing.millis()
    );
    if let Some(cycles) = pass.timing.cycles {
        line.push_str(&format!(
            ", {}: {}",
            crate::utils::bench::unit_name(),
            cycles
        ));
    }
    line
}

pub fn print_pass(pass: &PassResult) {
    println!("{}", format_pass(pass));
}

pub fn print_separator() {
    println!("{}", "-".repeat(37));
}

/// Print the help message
pub fn print_help() {
    println!("Usage: branch-bench [OPTIONS] [SEQUENCE]");
    println!();
    println!("Options:");
    println!("  --list, -l          List available sequence generators");
    println!("  --help, -h          Show this help message");
    println!("  --size N            Elements per sequence (default: 30000000)");
    println!("  --reps N            Timed passes per mapper and sequence (default: 5)");
    println!("  --seed N            Random seed for reproducible sequences (default: time-based)");
    println!("  --preview N         Sequence elements to print (default: 15)");
    println!("  --all-variants, -a  Also run the assembly and C mappers");
    println!("  --no-pin            Do not pin the thread to a CPU core");
    println!("  --csv PATH          Export raw per-pass timings to CSV");
    println!();
    println!("Arguments:");
    println!("  SEQUENCE            Name of a single sequence generator (omit for all)");
    println!();
    println!("Examples:");
    println!("  branch-bench                      # Random, cyclic and constant phases");
    println!("  branch-bench random               # Only the random phase");
    println!("  branch-bench --size 1000000 -a    # Smaller run, every variant");
    println!("  branch-bench --seed 12345         # Reproducible sequences");
    println!("  branch-bench --csv runs.csv       # Export raw timings to CSV");
}

/// Print the list of available sequence generators
pub fn print_available_generators(registry: &SequenceRegistry) {
    println!("Available sequences:");
    println!();
    for generator in registry.all() {
        println!("  {:<12} - {}", generator.name(), generator.description());
    }
}
