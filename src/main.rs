//! filmprep: Movie Chart Data Preparation CLI
//!
//! Loads movie tables, keeps the films that qualify for the charts and writes
//! bar, scatter and line chart data as JSON.

use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use console::style;

use filmprep::cli::Cli;
use filmprep::pipeline::{
    aggregate_charts, convert_records, filter_stage, load_all, PreparedCharts,
};
use filmprep::report::{display_bar_preview, export_charts, ExportParams, PrepSummary};
use filmprep::utils::{
    create_stage_spinner, finish_with_success, finish_with_warning, print_banner,
    print_completion, print_config, print_count, print_info, print_step_header, print_step_time,
    print_success,
};

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = cli.to_config()?;
    let output_path = cli.output_path();
    let quiet = cli.quiet;

    if !quiet {
        print_banner(env!("CARGO_PKG_VERSION"));
        print_config(&cli.input, &output_path, &config);
    }

    // Step 1: Load raw rows
    if !quiet {
        print_step_header(1, "Load Data");
    }
    let step_start = Instant::now();
    let spinner = create_stage_spinner("Reading input files...", quiet);
    let raws = load_all(&cli.input)?;
    finish_with_success(&spinner, "Input loaded");
    if !quiet {
        print_count("row(s)", raws.len(), Some(&format!("in {} file(s)", cli.input.len())));
        print_step_time(step_start.elapsed());
    }

    // Step 2: Type conversion
    if !quiet {
        print_step_header(2, "Type Conversion");
    }
    let step_start = Instant::now();
    let spinner = create_stage_spinner("Converting records...", quiet);
    let conversion = convert_records(&raws, config.policy)?;
    if conversion.skipped > 0 {
        finish_with_warning(
            &spinner,
            &format!("Skipped {} malformed record(s)", conversion.skipped),
        );
    } else {
        finish_with_success(&spinner, "All records converted");
    }
    if !quiet {
        print_step_time(step_start.elapsed());
    }

    // Step 3: Filter
    if !quiet {
        print_step_header(3, "Filter");
    }
    let step_start = Instant::now();
    let (movies, counts) = filter_stage(raws.len(), conversion, &config.rules);
    if !quiet {
        print_count(
            "qualifying film(s)",
            movies.len(),
            Some(&format!(
                "({} - {}, budget & revenue > 0, genre & title present)",
                config.rules.first_year, config.rules.last_year
            )),
        );
        if movies.is_empty() {
            print_info("No films qualify; charts will be empty");
        }
        print_step_time(step_start.elapsed());
    }

    // Step 4: Aggregate
    if !quiet {
        print_step_header(4, "Aggregate");
    }
    let step_start = Instant::now();
    let spinner = create_stage_spinner("Building chart data...", quiet);
    let charts = aggregate_charts(&movies, &config);
    finish_with_success(&spinner, "Chart data built");
    if !quiet {
        print_step_time(step_start.elapsed());
    }

    let mut summary = PrepSummary::new(counts);
    if let Some(bars) = &charts.bar {
        summary.set_bar(bars);
    }
    if let Some(scatter) = &charts.scatter {
        summary.set_scatter(scatter);
    }
    if let Some(line) = &charts.line {
        summary.set_line(line);
    }
    let bars_for_preview = if quiet { None } else { charts.bar.clone() };

    // Step 5: Save output
    if !quiet {
        print_step_header(5, "Save Results");
    }
    let step_start = Instant::now();
    let spinner = create_stage_spinner("Writing chart data...", quiet);
    let inputs = cli.input_names();
    export_charts(
        PreparedCharts { counts, charts },
        &output_path,
        &ExportParams {
            input_files: &inputs,
            config: &config,
        },
    )?;
    finish_with_success(&spinner, &format!("Saved to {}", output_path.display()));

    if quiet {
        return Ok(());
    }

    print_step_time(step_start.elapsed());
    print_success("Chart data exported");

    summary.display();
    if let Some(bars) = bars_for_preview {
        display_bar_preview(&bars);
    }
    println!(
        "\n    {} {}",
        style("→").cyan(),
        style(output_path.display()).dim()
    );

    print_completion();

    Ok(())
}
