//! Benchmark orchestration and CSV export.
//!
//! For each selected sequence generator: build the sequence, preview it, then
//! time every mapper variant over it. One sequence lives at a time.

use super::bench::{phase_seed, seeded_rng, time_seed};
use super::timer::{measure_repetitions, BenchConfig};
use super::tui;
use crate::control_flow::gray_point::code::{core_variants, get_variants};
use crate::control_flow::gray_point::test::verify_all;
use crate::registry::SequenceGenerator;

/// Raw timing data for a single pass (used for CSV export)
pub struct RawTimingData {
    pub sequence_name: String,
    pub variant_name: String,
    pub input_size: usize,
    pub repetition: usize,
    pub elapsed_nanos: u128,
    pub cycles: Option<u64>,
    pub x: usize,
    pub y: usize,
}

/// Export timing data to CSV file
pub fn export_csv(path: &str, data: &[RawTimingData]) -> std::io::Result<()> {
    use std::io::Write;

    let mut file = std::io::BufWriter::new(std::fs::File::create(path)?);

    writeln!(
        file,
        "sequence,variant,compiler,input_size,repetition,elapsed_ns,elapsed_ms,cycles,x,y"
    )?;

    for entry in data {
        let compiler = if entry.variant_name.starts_with("c-") {
            crate::utils::C_COMPILER_NAME.unwrap_or("Unknown")
        } else {
            ""
        };

        writeln!(
            file,
            "{},{},{},{},{},{},{},{},{},{}",
            entry.sequence_name,
            entry.variant_name,
            compiler,
            entry.input_size,
            entry.repetition,
            entry.elapsed_nanos,
            entry.elapsed_nanos / 1_000_000,
            entry.cycles.map(|c| c.to_string()).unwrap_or_default(),
            entry.x,
            entry.y
        )?;
    }

    file.flush()
}

/// Run every phase in `generators` with the given configuration.
///
/// Mapper variants are verified against the reference table first; a mismatch
/// aborts the run before any timing.
pub fn run_benchmarks(
    generators: &[&dyn SequenceGenerator],
    config: &BenchConfig,
) -> Result<(), String> {
    verify_all()?;

    let variants = if config.all_variants {
        get_variants()
    } else {
        core_variants()
    };
    let seed = config.seed.unwrap_or_else(time_seed);

    tui::print_header();
    tui::print_mapping_tables(&variants);
    tui::print_run_info(config.sequence_len, config.repetitions, seed, config.pin);

    let mut raw_data = Vec::new();

    for generator in generators {
        let mut rng = seeded_rng(phase_seed(seed, generator.name()));
        let sequence = generator.generate(config.sequence_len, &mut rng);

        tui::print_phase_header(*generator);
        tui::print_preview(&sequence, config.preview_len);

        for (i, variant) in variants.iter().enumerate() {
            if i > 0 {
                tui::print_separator();
            }
            tui::print_variant_title(*generator, variant);

            let passes = measure_repetitions(&sequence, variant.function, config, |_, pass| {
                tui::print_pass(pass)
            });

            if config.csv_path.is_some() {
                raw_data.extend(passes.iter().enumerate().map(|(repetition, pass)| {
                    RawTimingData {
                        sequence_name: generator.name().to_string(),
                        variant_name: variant.name.to_string(),
                        input_size: sequence.len(),
                        repetition,
                        elapsed_nanos: pass.timing.elapsed.as_nanos(),
                        cycles: pass.timing.cycles,
                        x: pass.point.x,
                        y: pass.point.y,
                    }
                }));
            }
        }

        tui::print_phase_footer(*generator);
    }

    if let Some(path) = &config.csv_path {
        export_csv(path, &raw_data)
            .map_err(|e| format!("Failed to write CSV to '{}': {}", path, e))?;
        println!("Raw timings written to {}", path);
    }

    Ok(())
}
