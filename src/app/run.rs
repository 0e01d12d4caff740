// LogSift - app/run.rs
//
// The filter pipeline: open input, parse line by line, apply criteria,
// write matches, report a summary.
// App layer: owns the file handles and wires core parsing, filtering,
// and export together.

use crate::core::export;
use crate::core::filter::FilterCriteria;
use crate::core::model::{Level, RunSummary};
use crate::core::parser;
use crate::util::error::{Result, RunError};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, ErrorKind, Write};
use std::path::PathBuf;
use std::time::Instant;

/// Everything a single filter run needs.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Input log file.
    pub input_path: PathBuf,

    /// Output file for matching records.
    pub output_path: PathBuf,

    /// Filter criteria applied to each valid record.
    pub criteria: FilterCriteria,
}

/// Execute a filter run.
///
/// Reads the input line by line, writing records that parse and match
/// the criteria to the output file. Returns counters for the summary
/// report.
///
/// A missing input file is a recognised condition, not a failure: the
/// run completes with a zeroed summary, and no output file is created.
/// Any other I/O problem is an error.
pub fn run(options: &RunOptions) -> Result<RunSummary> {
    let start = Instant::now();

    tracing::debug!(
        input = %options.input_path.display(),
        output = %options.output_path.display(),
        "Filter run starting"
    );

    // Open the input before creating the output, so a missing input
    // leaves no empty output file behind.
    let input = match File::open(&options.input_path) {
        Ok(f) => f,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::warn!(
                path = %options.input_path.display(),
                "Input file not found; reporting an empty run"
            );
            return Ok(RunSummary {
                output_file: options.output_path.clone(),
                duration: start.elapsed(),
                ..Default::default()
            });
        }
        Err(e) => return Err(RunError::io(&options.input_path, "open input file", e)),
    };

    let output = File::create(&options.output_path)
        .map_err(|e| RunError::io(&options.output_path, "create output file", e))?;
    let mut writer = BufWriter::new(output);

    let mut summary = RunSummary {
        output_file: options.output_path.clone(),
        ..Default::default()
    };

    for line in BufReader::new(input).lines() {
        let line = line.map_err(|e| RunError::io(&options.input_path, "read input line", e))?;
        summary.lines_read += 1;

        // Blank lines are skipped without counting as scanned or malformed.
        if line.trim().is_empty() {
            continue;
        }

        let record = match parser::parse_line(&line) {
            Some(record) => record,
            None => {
                summary.malformed += 1;
                continue;
            }
        };

        summary.valid_scanned += 1;
        *summary.by_level.entry(record.level).or_insert(0) += 1;

        if !options.criteria.matches(&record) {
            continue;
        }

        export::write_record(&mut writer, &record)
            .map_err(|e| RunError::io(&options.output_path, "write record", e))?;
        summary.written += 1;
    }

    writer
        .flush()
        .map_err(|e| RunError::io(&options.output_path, "flush output file", e))?;

    summary.duration = start.elapsed();

    for level in Level::all() {
        tracing::debug!(
            level = %level,
            count = summary.by_level.get(level).copied().unwrap_or(0),
            "Valid records by level"
        );
    }
    tracing::info!(
        lines = summary.lines_read,
        valid = summary.valid_scanned,
        written = summary.written,
        malformed = summary.malformed,
        duration_ms = summary.duration.as_millis() as u64,
        "Filter run complete"
    );

    Ok(summary)
}
