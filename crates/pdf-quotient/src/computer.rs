//! Analytic quotient of two independent sampled PDFs
//!
//! For `Q = X / Y` with independent `X` and `Y`, the density is
//!
//! ```text
//! pQ(q) = ∫ pX(q·y) · pY(y) · |y| dy
//! ```
//!
//! Only positive values are considered, so `|y| = y`. The integral is
//! evaluated as a sum over the denominator samples, with `pX` linearly
//! interpolated (zero outside its support); the constant sample spacing of
//! `Y` is absorbed by the final normalisation. Each axis point is
//! independent, which lets the execution engine split the axis across
//! threads without changing the result.

use crate::config::{QuotientConfig, DEFAULT_AXIS_INTERVALS};
use crate::types::QuotientResult;
use pdf_core::{
    Error, ExecutionEngine, LinearInterpolator, Result, SampledPdf, SequentialEngine,
};
use tracing::{debug, instrument};

/// Slack applied when counting steps in the quotient range
const AXIS_EPSILON: f64 = 1e-9;

/// Computes the PDF of the ratio of two quantities
#[derive(Debug, Clone)]
pub struct QuotientComputer<E: ExecutionEngine = SequentialEngine> {
    config: QuotientConfig,
    engine: E,
}

impl QuotientComputer<SequentialEngine> {
    /// Create a computer that evaluates the axis on the calling thread
    pub fn new(config: QuotientConfig) -> Self {
        Self::with_engine(config, SequentialEngine)
    }
}

impl Default for QuotientComputer<SequentialEngine> {
    fn default() -> Self {
        Self::new(QuotientConfig::default())
    }
}

impl<E: ExecutionEngine> QuotientComputer<E> {
    /// Create a computer using the given execution engine
    pub fn with_engine(config: QuotientConfig, engine: E) -> Self {
        Self { config, engine }
    }

    /// Get the configuration
    pub fn config(&self) -> &QuotientConfig {
        &self.config
    }

    /// Get the execution engine
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// PDF of `numerator / denominator`
    ///
    /// Both inputs are normalised to unit area, then samples with a
    /// non-positive value or density are dropped.
    ///
    /// # Errors
    /// - [`Error::InvalidParameter`] for an invalid configuration or an axis
    ///   longer than `max_axis_points`
    /// - [`Error::Domain`] if an input has zero area or no positive
    ///   samples, the cap lies below the smallest quotient, the quotient
    ///   range is degenerate, or the quotient density is zero everywhere
    #[instrument(skip_all, fields(numerator = numerator.len(), denominator = denominator.len()))]
    pub fn compute(
        &self,
        numerator: &SampledPdf,
        denominator: &SampledPdf,
    ) -> Result<QuotientResult> {
        self.config.validate()?;

        let numer = PositiveSupport::from_pdf(numerator, "numerator")?;
        let denom = PositiveSupport::from_pdf(denominator, "denominator")?;
        let axis = QuotientAxis::span(&self.config, &numer, &denom)?;

        debug!(
            "Quotient parameters: min {:.6}, max {:.6}, step {:.6}, len {}",
            axis.q_min, axis.q_max, axis.step, axis.len
        );

        let numerator_samples = numer.len();
        let denominator_samples = denom.len();
        let pdf_x = LinearInterpolator::new(numer.x, numer.p)?;

        let density = self.engine.execute_batch(axis.len, |i| {
            let q = axis.value(i);
            denom
                .x
                .iter()
                .zip(&denom.p)
                .map(|(&y, &py)| pdf_x.eval(q * y) * py * y)
                .sum::<f64>()
        });

        let q: Vec<f64> = (0..axis.len).map(|i| axis.value(i)).collect();
        let pdf = SampledPdf::new(q, density)?.normalized()?;

        Ok(QuotientResult {
            pdf,
            q_min: axis.q_min,
            q_max: axis.q_max,
            step: axis.step,
            numerator_samples,
            denominator_samples,
        })
    }
}

/// Unit-area input restricted to strictly positive values and densities
#[derive(Debug)]
struct PositiveSupport {
    x: Vec<f64>,
    p: Vec<f64>,
}

impl PositiveSupport {
    fn from_pdf(pdf: &SampledPdf, role: &str) -> Result<Self> {
        let (x, p): (Vec<f64>, Vec<f64>) = pdf
            .normalized()?
            .iter()
            .filter(|&(x, p)| x > 0.0 && p > 0.0)
            .unzip();

        if x.is_empty() {
            return Err(Error::Domain(format!(
                "{role} PDF has no valid positive-support samples"
            )));
        }
        debug!(role, retained = x.len(), dropped = pdf.len() - x.len(), "filtered input");
        Ok(Self { x, p })
    }

    fn len(&self) -> usize {
        self.x.len()
    }

    // x is ascending and non-empty.
    fn min(&self) -> f64 {
        self.x[0]
    }

    fn max(&self) -> f64 {
        self.x[self.x.len() - 1]
    }
}

/// Evenly spaced quotient axis from `q_min`, ending exactly at `q_max`
#[derive(Debug, Clone, Copy, PartialEq)]
struct QuotientAxis {
    q_min: f64,
    q_max: f64,
    step: f64,
    len: usize,
}

impl QuotientAxis {
    fn span(
        config: &QuotientConfig,
        numer: &PositiveSupport,
        denom: &PositiveSupport,
    ) -> Result<Self> {
        let q_min = numer.min() / denom.max();
        let natural_max = numer.max() / denom.min();

        let q_max = match config.max_quotient {
            Some(cap) if cap < q_min => {
                return Err(Error::Domain(format!(
                    "maximum quotient {cap} is below the smallest quotient {q_min}"
                )));
            }
            Some(cap) => natural_max.min(cap),
            None => natural_max,
        };

        if !(q_max > q_min) {
            return Err(Error::Domain(format!(
                "quotient range [{q_min}, {q_max}] is degenerate"
            )));
        }

        let step = config
            .step_size
            .unwrap_or((q_max - q_min) / DEFAULT_AXIS_INTERVALS as f64);
        // A trailing partial step still reaches q_max.
        let intervals = ((q_max - q_min) / step - AXIS_EPSILON).ceil().max(1.0);

        if intervals + 1.0 > config.max_axis_points as f64 {
            return Err(Error::InvalidParameter(format!(
                "step {step} over [{q_min}, {q_max}] gives {} axis points, limit is {}",
                intervals + 1.0,
                config.max_axis_points
            )));
        }
        Ok(Self {
            q_min,
            q_max,
            step,
            len: intervals as usize + 1,
        })
    }

    fn value(&self, i: usize) -> f64 {
        if i + 1 >= self.len {
            self.q_max
        } else {
            self.q_min + i as f64 * self.step
        }
    }
}
