use super::cli::{Cli, MetricArg};
use super::error::CliError;
use super::io;
use indicatif::{ProgressBar, ProgressStyle};
use kenstone::{KennardStone, SelectorOptions, SubsetSize};

pub fn run(args: Cli) -> Result<(), CliError> {
    let samples = io::read_samples(&args.input)?;

    let size = match (args.selection.size, args.selection.fraction) {
        (Some(count), None) => SubsetSize::Count(count),
        (None, Some(fraction)) => SubsetSize::Fraction(fraction),
        _ => {
            return Err(CliError::Usage(
                "Exactly one of --size or --fraction is required".to_string(),
            ));
        }
    };

    let options = SelectorOptions {
        metric: args.selection.metric.into(),
        seeds: args.selection.seeds.clone(),
    };
    let selector = KennardStone::new().with_options(options);

    let source_name = if args.input == "-" {
        "stdin".to_string()
    } else {
        args.input.clone()
    };

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message("Selecting samples...");
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let result = selector.select_sized(&samples, size)?;

    pb.finish_and_clear();

    let metric_name = match args.selection.metric {
        MetricArg::Euclidean => "euclidean",
        MetricArg::SquaredEuclidean => "squared-euclidean",
        MetricArg::Manhattan => "manhattan",
        MetricArg::Chebyshev => "chebyshev",
    };

    let writer = io::get_writer(&args.output.output)?;
    io::write_results(
        writer,
        &result,
        samples.len(),
        metric_name,
        &args.output.format,
        args.output.precision,
        &source_name,
    )?;

    Ok(())
}
