use crate::config::models::{OutputFormat, OutputSettings};
use crate::error::Result;
use energycalc::core::sample::EnergySeries;
use std::io::Write;

pub fn write_series<W: Write>(
    series: &EnergySeries,
    settings: &OutputSettings,
    writer: W,
) -> Result<()> {
    match settings.format {
        OutputFormat::Table => write_table(series, settings.precision, writer),
        OutputFormat::Csv => write_csv(series, writer),
    }
}

/// Writes one right-aligned row per sample, then a summary line.
pub fn write_table<W: Write>(series: &EnergySeries, precision: usize, mut writer: W) -> Result<()> {
    let x_width = series
        .iter()
        .map(|s| s.x.to_string().len())
        .max()
        .unwrap_or(1)
        .max("x".len());
    let energy_width = series
        .iter()
        .map(|s| format!("{:.*}", precision, s.energy).len())
        .max()
        .unwrap_or(1)
        .max("energy".len());

    writeln!(writer, "{:>x_width$}  {:>energy_width$}", "x", "energy")?;
    for sample in series {
        writeln!(
            writer,
            "{:>x_width$}  {:>energy_width$.precision$}",
            sample.x, sample.energy
        )?;
    }

    if let Some(summary) = series.summary() {
        writeln!(writer)?;
        writeln!(
            writer,
            "{} point(s); min {:.p$} at x = {}; max {:.p$} at x = {}; mean {:.p$}",
            series.len(),
            summary.min.energy,
            summary.min.x,
            summary.max.energy,
            summary.max.x,
            summary.mean,
            p = precision,
        )?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes the series as CSV with an `x,energy` header, keeping full floating-point precision.
pub fn write_csv<W: Write>(series: &EnergySeries, writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for sample in series {
        csv_writer.serialize(sample)?;
    }
    csv_writer.flush()?;
    Ok(())
}
