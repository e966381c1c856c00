use crate::core::formula;
use crate::core::sample::{EnergySample, EnergySeries};
use crate::engine::config::RangeConfig;
use crate::engine::error::{EngineError, InvalidArgument};
use crate::engine::progress::{Progress, ProgressReporter};
use rayon::prelude::*;
use tracing::{debug, info, instrument, warn};

/// Evaluates `Energy(x)` for a single input.
///
/// # Errors
///
/// Returns [`InvalidArgument::NegativeInput`] when `x < 0`.
pub fn calculate(x: i64) -> Result<f64, EngineError> {
    let x = u64::try_from(x).map_err(|_| InvalidArgument::NegativeInput(x))?;
    Ok(formula::energy(x))
}

/// Evaluates `Energy(x)` for every integer in `[start, end]`, in increasing order.
///
/// The returned series holds exactly `end - start + 1` samples. Bounds are validated
/// before anything is evaluated.
///
/// # Errors
///
/// Returns [`InvalidArgument::NegativeStart`] when `start < 0` and
/// [`InvalidArgument::StartAfterEnd`] when `start > end`.
pub fn calculate_range(start: i64, end: i64) -> Result<EnergySeries, EngineError> {
    validate_range(start, end)?;
    let samples = (start..=end).map(sample_at).collect();
    Ok(EnergySeries::from_samples(samples))
}

/// Runs a configured range evaluation, reporting one task step per evaluated input.
#[instrument(skip_all, name = "range_workflow", fields(start = config.start, end = config.end))]
pub fn run(
    config: &RangeConfig,
    reporter: &ProgressReporter,
) -> Result<EnergySeries, EngineError> {
    let total_steps = validate_range(config.start, config.end).inspect_err(|e| {
        warn!("Rejected range [{}, {}]: {}", config.start, config.end, e);
    })?;

    info!(
        "Evaluating Energy(x) over {} point(s) ({}).",
        total_steps,
        if config.parallel { "parallel" } else { "sequential" }
    );
    reporter.report(Progress::PhaseStart {
        name: "Evaluating Energy(x)",
    });
    reporter.report(Progress::TaskStart { total_steps });

    let step = |x: i64| {
        let sample = sample_at(x);
        reporter.report(Progress::TaskIncrement);
        sample
    };

    let samples: Vec<EnergySample> = if config.parallel {
        (config.start..=config.end)
            .into_par_iter()
            .map(step)
            .collect()
    } else {
        (config.start..=config.end).map(step).collect()
    };

    reporter.report(Progress::TaskFinish);
    debug!("Collected {} sample(s).", samples.len());
    reporter.report(Progress::Message(format!(
        "Collected {} sample(s) for [{}, {}].",
        samples.len(),
        config.start,
        config.end
    )));
    reporter.report(Progress::PhaseFinish);

    Ok(EnergySeries::from_samples(samples))
}

/// Checks the range bounds and returns the number of points it covers.
fn validate_range(start: i64, end: i64) -> Result<u64, InvalidArgument> {
    if start < 0 {
        return Err(InvalidArgument::NegativeStart(start));
    }
    if start > end {
        return Err(InvalidArgument::StartAfterEnd { start, end });
    }
    Ok((end - start) as u64 + 1)
}

// Only called on validated, non-negative inputs.
#[inline]
fn sample_at(x: i64) -> EnergySample {
    EnergySample {
        x,
        energy: formula::energy(x as u64),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::formula::EnergyTerms;
    use crate::engine::config::RangeConfigBuilder;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Mutex;

    #[test]
    fn calculate_returns_finite_values() {
        for x in (0..10_000).chain([1 << 31, 1 << 52, i64::MAX]) {
            let value = calculate(x).unwrap();
            assert!(value.is_finite(), "non-finite at x = {x}");
        }
    }

    #[test]
    fn calculate_is_deterministic() {
        for x in [0, 1, 17, 4096, 99_999] {
            let a = calculate(x).unwrap();
            let b = calculate(x).unwrap();
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }

    #[test]
    fn calculate_rejects_negative_input() {
        assert_eq!(
            calculate(-1),
            Err(EngineError::InvalidArgument(InvalidArgument::NegativeInput(-1)))
        );
        assert!(calculate(i64::MIN).is_err());
    }

    #[test]
    fn even_inputs_include_the_parity_spike() {
        for x in [2i64, 4] {
            let terms = EnergyTerms::of(x as u64);
            let log_coefficient = 2.0 * ((x + 1) as f64).ln();
            assert!(terms.part2 >= log_coefficient, "x = {x}");
            assert_eq!(calculate(x).unwrap(), terms.total());
        }
    }

    #[test]
    fn odd_inputs_exclude_the_parity_spike() {
        for x in [1i64, 3] {
            let terms = EnergyTerms::of(x as u64);
            assert!(terms.part2 < 1e-60, "x = {x}");
            assert_eq!(calculate(x).unwrap(), terms.total());
        }
    }

    #[test]
    fn calculate_range_has_one_sample_per_input_in_order() {
        for (start, end) in [(0, 0), (0, 10), (7, 42), (1000, 1003)] {
            let series = calculate_range(start, end).unwrap();
            assert_eq!(series.len() as i64, end - start + 1);
            for (i, sample) in series.iter().enumerate() {
                assert_eq!(sample.x, start + i as i64);
                assert_eq!(sample.energy, calculate(sample.x).unwrap());
            }
        }
    }

    #[test]
    fn calculate_range_single_point() {
        let series = calculate_range(5, 5).unwrap();
        assert_eq!(
            series.samples(),
            &[EnergySample {
                x: 5,
                energy: calculate(5).unwrap()
            }]
        );
    }

    #[test]
    fn calculate_range_rejects_start_after_end() {
        assert_eq!(
            calculate_range(5, 3),
            Err(EngineError::InvalidArgument(
                InvalidArgument::StartAfterEnd { start: 5, end: 3 }
            ))
        );
    }

    #[test]
    fn calculate_range_rejects_negative_start() {
        assert_eq!(
            calculate_range(-1, 10),
            Err(EngineError::InvalidArgument(InvalidArgument::NegativeStart(-1)))
        );
    }

    #[test]
    fn negative_start_is_reported_before_ordering() {
        assert_eq!(
            calculate_range(-1, -5),
            Err(EngineError::InvalidArgument(InvalidArgument::NegativeStart(-1)))
        );
    }

    #[test]
    fn calculate_range_zero_to_two_matches_reference_values() {
        let expected = [
            (0, 103.49940782641468),
            (1, 110.6895608185436),
            (2, 111.82180793193533),
        ];
        let series = calculate_range(0, 2).unwrap();
        assert_eq!(series.len(), expected.len());
        for (sample, (x, energy)) in series.iter().zip(expected) {
            assert_eq!(sample.x, x);
            assert!((sample.energy - energy).abs() < 1e-9, "x = {x}");
        }
    }

    #[test]
    fn run_matches_calculate_range_sequentially_and_in_parallel() {
        let expected = calculate_range(0, 500).unwrap();
        for parallel in [false, true] {
            let config = RangeConfigBuilder::new()
                .start(0)
                .end(500)
                .parallel(parallel)
                .build()
                .unwrap();
            let series = run(&config, &ProgressReporter::new()).unwrap();
            assert_eq!(series, expected, "parallel = {parallel}");
        }
    }

    #[test]
    fn run_reports_one_increment_per_sample() {
        let increments = AtomicU64::new(0);
        let announced = Mutex::new(None);
        let reporter = ProgressReporter::with_callback(Box::new(|p| match p {
            Progress::TaskStart { total_steps } => *announced.lock().unwrap() = Some(total_steps),
            Progress::TaskIncrement => {
                increments.fetch_add(1, Ordering::SeqCst);
            }
            _ => {}
        }));

        let config = RangeConfigBuilder::new()
            .start(10)
            .end(59)
            .parallel(true)
            .build()
            .unwrap();
        let series = run(&config, &reporter).unwrap();
        drop(reporter);

        assert_eq!(series.len(), 50);
        assert_eq!(increments.load(Ordering::SeqCst), 50);
        assert_eq!(*announced.lock().unwrap(), Some(50));
    }

    #[test]
    fn run_reports_collected_sample_count_before_finishing() {
        let events = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|p| match p {
            Progress::Message(msg) => events.lock().unwrap().push(msg),
            Progress::PhaseFinish => events.lock().unwrap().push("<finish>".to_string()),
            _ => {}
        }));

        let config = RangeConfigBuilder::new().start(3).end(7).build().unwrap();
        run(&config, &reporter).unwrap();
        drop(reporter);

        assert_eq!(
            events.into_inner().unwrap(),
            vec!["Collected 5 sample(s) for [3, 7].", "<finish>"]
        );
    }

    #[test]
    fn run_rejects_invalid_range_without_reporting() {
        let events = AtomicU64::new(0);
        let reporter = ProgressReporter::with_callback(Box::new(|_| {
            events.fetch_add(1, Ordering::SeqCst);
        }));
        let config = RangeConfigBuilder::new().start(8).end(2).build().unwrap();

        assert!(matches!(
            run(&config, &reporter),
            Err(EngineError::InvalidArgument(InvalidArgument::StartAfterEnd { .. }))
        ));
        drop(reporter);
        assert_eq!(events.load(Ordering::SeqCst), 0);
    }
}
