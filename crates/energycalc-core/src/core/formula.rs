use std::f64::consts::PI;
use std::hint::black_box;

const BASE_OFFSET: f64 = 35.0;
const BASE_AMPLITUDE: f64 = 15.0;

const SPIKE_LOG_SCALE: f64 = 2.0;
const SINE_SPIKE_EXPONENT: f64 = 2000.0;
const PARITY_SPIKE_EXPONENT: f64 = 2200.0;

const OSCILLATION_OFFSET: f64 = 48.0;

const DAMPING_PERIOD: f64 = 100_000.0;
const DAMPING_CENTER: i128 = 50;
const DAMPING_STRENGTH: f64 = -3.0;
const DAMPED_BASE: f64 = 800.0;
const DAMPED_AMPLITUDE: f64 = 150.0;

const PRIMARY_WEIGHT: f64 = 0.5;
const BACKGROUND_WEIGHT: f64 = 0.1;

/// The four intermediate parts of `Energy(x)` for a single input.
///
/// The final value is `0.5 * (part1 + part2) + 0.1 * (part3 + part4)`; see [`EnergyTerms::total`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyTerms {
    /// Base energy, `35 + 15 sin(sqrt(x))`.
    pub part1: f64,
    /// Spike energy, `2 ln(x + 1) * (term_a + term_b)`.
    pub part2: f64,
    /// Oscillating background, `48 + 30 sin(0.3x) + 12 cos(0.9x) + 5 sin(2.1x)`.
    pub part3: f64,
    /// Damped exponential, `(800 + 150 sin(0.001x)) * exp(-3 sin^2((pi / 1e5)(x - 50)))`.
    pub part4: f64,
}

impl EnergyTerms {
    pub fn of(x: u64) -> Self {
        Self {
            part1: base_term(x),
            part2: spike_term(x),
            part3: oscillation_term(x),
            part4: damped_exponential_term(x),
        }
    }

    #[inline]
    pub fn total(&self) -> f64 {
        PRIMARY_WEIGHT * (self.part1 + self.part2) + BACKGROUND_WEIGHT * (self.part3 + self.part4)
    }
}

/// Evaluates `Energy(x)` for an input that is already known to be non-negative.
#[inline]
pub fn energy(x: u64) -> f64 {
    EnergyTerms::of(x).total()
}

#[inline]
pub fn base_term(x: u64) -> f64 {
    let x = x as f64;
    BASE_OFFSET + BASE_AMPLITUDE * x.sqrt().sin()
}

/// `((sin(x) + 1) / 2)^2000`. Vanishes unless `sin(x)` is extremely close to 1.
#[inline]
pub fn sine_spike(x: u64) -> f64 {
    let base = ((x as f64).sin() + 1.0) / 2.0;
    base.powf(SINE_SPIKE_EXPONENT)
}

/// `((cos(x * pi) + 1) / 2)^2200`. One for even `x`, zero for odd `x`.
#[inline]
pub fn parity_spike(x: u64) -> f64 {
    let base = ((x as f64 * PI).cos() + 1.0) / 2.0;
    base.powf(PARITY_SPIKE_EXPONENT)
}

#[inline]
pub fn spike_term(x: u64) -> f64 {
    let log_coefficient = SPIKE_LOG_SCALE * (x as f64 + 1.0).ln();
    log_coefficient * (sine_spike(x) + parity_spike(x))
}

#[inline]
pub fn oscillation_term(x: u64) -> f64 {
    let x = x as f64;
    OSCILLATION_OFFSET + 30.0 * (x * 0.3).sin() + 12.0 * (x * 0.9).cos() + 5.0 * (x * 2.1).sin()
}

#[inline]
pub fn damped_exponential_term(x: u64) -> f64 {
    // The offset is taken in integer arithmetic so that `x < 50` stays exact.
    let shifted = (i128::from(x) - DAMPING_CENTER) as f64;
    let inner = ((PI / DAMPING_PERIOD) * shifted).sin();
    // Squared through libm `pow`; a plain multiply rounds differently for some inputs.
    let exponent = DAMPING_STRENGTH * inner.powf(black_box(2.0));
    let coefficient = DAMPED_BASE + DAMPED_AMPLITUDE * (x as f64 * 0.001).sin();
    coefficient * exponent.exp()
}
