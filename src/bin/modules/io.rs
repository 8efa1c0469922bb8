use super::cli::OutputFormat;
use super::error::CliError;
use kenstone::SelectionResult;
use prettytable::*;
use serde_json::json;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;

pub fn read_samples(input_spec: &str) -> Result<Vec<Vec<f64>>, CliError> {
    let reader: Box<dyn BufRead> = if input_spec == "-" {
        Box::new(BufReader::new(io::stdin()))
    } else {
        let file = std::fs::File::open(input_spec).map_err(|e| CliError::Io {
            path: PathBuf::from(input_spec),
            source: e,
        })?;
        Box::new(BufReader::new(file))
    };

    let mut samples = Vec::new();
    for (line_no, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| CliError::SampleParse {
            source_name: input_spec.to_string(),
            details: format!("Error reading line {}: {}", line_no + 1, e),
        })?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let tokens: Vec<&str> = if trimmed.contains(',') {
            trimmed.split(',').map(str::trim).collect()
        } else {
            trimmed.split_whitespace().collect()
        };

        let mut features = Vec::with_capacity(tokens.len());
        for token in tokens {
            let value: f64 = token.parse().map_err(|_| CliError::SampleParse {
                source_name: input_spec.to_string(),
                details: format!("Line {}: invalid number: {}", line_no + 1, token),
            })?;
            features.push(value);
        }
        samples.push(features);
    }

    if samples.is_empty() {
        return Err(CliError::SampleParse {
            source_name: input_spec.to_string(),
            details: "No samples found".to_string(),
        });
    }

    Ok(samples)
}

pub fn get_writer(output_path: &Option<PathBuf>) -> Result<Box<dyn Write>, CliError> {
    match output_path {
        Some(path) => {
            let file = std::fs::File::create(path).map_err(|e| CliError::Io {
                path: path.clone(),
                source: e,
            })?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout())),
    }
}

pub fn write_results(
    mut writer: Box<dyn Write>,
    result: &SelectionResult,
    sample_count: usize,
    metric_name: &str,
    format: &OutputFormat,
    precision: usize,
    source_name: &str,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Pretty => write_pretty_tables(
            &mut writer,
            result,
            sample_count,
            metric_name,
            precision,
            source_name,
        ),
        OutputFormat::Csv => write_csv(&mut writer, result, precision),
        OutputFormat::Json => write_json(&mut writer, result, sample_count, metric_name, source_name),
    }
}

/// Separation shown for a selected row, if one was recorded for it.
///
/// The trace is shorter than the selection when the run was seeded: the offset lines the
/// last entries of the trace up with the greedily picked rows.
fn separation_for_row(result: &SelectionResult, row: usize) -> Option<f64> {
    let offset = result.selected.len() - result.separations.len();
    row.checked_sub(offset).map(|i| result.separations[i])
}

fn write_pretty_tables(
    writer: &mut dyn Write,
    result: &SelectionResult,
    sample_count: usize,
    metric_name: &str,
    precision: usize,
    source_name: &str,
) -> Result<(), CliError> {
    let box_format = format::FormatBuilder::new()
        .column_separator('│')
        .borders('│')
        .separators(
            &[format::LinePosition::Top],
            format::LineSeparator::new('─', '┬', '╭', '╮'),
        )
        .separators(
            &[format::LinePosition::Title],
            format::LineSeparator::new('═', '╪', '╞', '╡'),
        )
        .separators(
            &[format::LinePosition::Intern],
            format::LineSeparator::new('─', '┼', '├', '┤'),
        )
        .separators(
            &[format::LinePosition::Bottom],
            format::LineSeparator::new('─', '┴', '╰', '╯'),
        )
        .padding(1, 1)
        .build();

    let no_intern_format = format::FormatBuilder::new()
        .column_separator('│')
        .borders('│')
        .separators(
            &[format::LinePosition::Top],
            format::LineSeparator::new('─', '┬', '╭', '╮'),
        )
        .separators(
            &[format::LinePosition::Bottom],
            format::LineSeparator::new('─', '┴', '╰', '╯'),
        )
        .padding(1, 1)
        .build();

    let mut title_table = Table::new();
    title_table.set_format(box_format);
    title_table.add_row(row![bc->"Kennard-Stone Selection Results"]);
    title_table.print(writer)?;
    writeln!(writer)?;

    let remaining_list = result
        .remaining
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(", ");

    let mut summary_table = Table::new();
    summary_table.set_format(no_intern_format);
    summary_table.add_row(row![b->"Source File:", source_name]);
    summary_table.add_row(row![b->"Metric:", metric_name]);
    summary_table.add_row(row![b->"Total Samples:", sample_count]);
    summary_table.add_row(row![b->"Selected:", result.selected.len()]);
    summary_table.add_row(row![b->"Remaining:", result.remaining.len()]);
    summary_table.add_row(row![b->"Remaining Indices:", remaining_list]);
    summary_table.print(writer)?;
    writeln!(writer)?;

    let mut data_table = Table::new();
    data_table.set_format(box_format);
    data_table.set_titles(row![bc->"Step", bc->"Sample Index", bc->"Separation"]);

    for (step, &index) in result.selected.iter().enumerate() {
        let separation = match separation_for_row(result, step) {
            Some(value) => format!("{:.prec$}", value, prec = precision),
            None => "—".to_string(),
        };
        data_table.add_row(row![r->step + 1, r->index, r->separation]);
    }

    data_table.print(writer)?;

    Ok(())
}

fn write_csv(
    writer: &mut dyn Write,
    result: &SelectionResult,
    precision: usize,
) -> Result<(), CliError> {
    writeln!(writer, "set,order,index,separation")?;
    for (step, &index) in result.selected.iter().enumerate() {
        let separation = match separation_for_row(result, step) {
            Some(value) => format!("{:.prec$}", value, prec = precision),
            None => String::new(),
        };
        writeln!(writer, "selected,{},{},{}", step, index, separation)?;
    }
    for (order, &index) in result.remaining.iter().enumerate() {
        writeln!(writer, "remaining,{},{},", order, index)?;
    }
    Ok(())
}

fn write_json(
    writer: &mut dyn Write,
    result: &SelectionResult,
    sample_count: usize,
    metric_name: &str,
    source_name: &str,
) -> Result<(), CliError> {
    let document = json!({
        "source": source_name,
        "metric": metric_name,
        "sample_count": sample_count,
        "subset_size": result.selected.len(),
        "result": result,
    });
    serde_json::to_writer_pretty(&mut *writer, &document)?;
    writeln!(writer)?;
    Ok(())
}
