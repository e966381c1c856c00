use serde::Serialize;

/// A single evaluated point of `Energy(x)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EnergySample {
    pub x: i64,
    pub energy: f64,
}

/// Aggregate statistics over an [`EnergySeries`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesSummary {
    pub min: EnergySample,
    pub max: EnergySample,
    pub mean: f64,
}

/// The result of evaluating `Energy(x)` over an inclusive range.
///
/// Samples are ordered by strictly increasing `x` with no gaps. The series is produced
/// wholesale by the range evaluator and is not modified afterwards.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EnergySeries {
    samples: Vec<EnergySample>,
}

impl EnergySeries {
    pub(crate) fn from_samples(samples: Vec<EnergySample>) -> Self {
        debug_assert!(samples.windows(2).all(|w| w[1].x == w[0].x + 1));
        Self { samples }
    }

    pub fn samples(&self) -> &[EnergySample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EnergySample> {
        self.samples.iter()
    }

    /// Splits the series into parallel sequences of inputs and energy values.
    pub fn unzip(&self) -> (Vec<i64>, Vec<f64>) {
        self.samples.iter().map(|s| (s.x, s.energy)).unzip()
    }

    /// Returns the lowest and highest samples and the mean energy, or `None` for an empty
    /// series. Ties keep the sample with the smallest `x`.
    pub fn summary(&self) -> Option<SeriesSummary> {
        let (first, rest) = self.samples.split_first()?;
        let mut min = *first;
        let mut max = *first;
        let mut sum = first.energy;
        for sample in rest {
            if sample.energy < min.energy {
                min = *sample;
            }
            if sample.energy > max.energy {
                max = *sample;
            }
            sum += sample.energy;
        }
        Some(SeriesSummary {
            min,
            max,
            mean: sum / self.samples.len() as f64,
        })
    }
}

impl<'a> IntoIterator for &'a EnergySeries {
    type Item = &'a EnergySample;
    type IntoIter = std::slice::Iter<'a, EnergySample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series_of(values: &[(i64, f64)]) -> EnergySeries {
        EnergySeries::from_samples(
            values
                .iter()
                .map(|&(x, energy)| EnergySample { x, energy })
                .collect(),
        )
    }

    #[test]
    fn unzip_separates_inputs_and_energies_in_order() {
        let series = series_of(&[(3, 1.5), (4, -2.0), (5, 8.25)]);
        let (xs, ys) = series.unzip();
        assert_eq!(xs, vec![3, 4, 5]);
        assert_eq!(ys, vec![1.5, -2.0, 8.25]);
    }

    #[test]
    fn summary_reports_extremes_and_mean() {
        let series = series_of(&[(0, 4.0), (1, 1.0), (2, 9.0), (3, 2.0)]);
        let summary = series.summary().unwrap();
        assert_eq!(summary.min, EnergySample { x: 1, energy: 1.0 });
        assert_eq!(summary.max, EnergySample { x: 2, energy: 9.0 });
        assert!((summary.mean - 4.0).abs() < 1e-12);
    }

    #[test]
    fn summary_keeps_earliest_sample_on_ties() {
        let series = series_of(&[(10, 5.0), (11, 5.0)]);
        let summary = series.summary().unwrap();
        assert_eq!(summary.min.x, 10);
        assert_eq!(summary.max.x, 10);
    }

    #[test]
    fn summary_of_empty_series_is_none() {
        assert!(EnergySeries::default().summary().is_none());
        assert!(EnergySeries::default().is_empty());
    }
}
