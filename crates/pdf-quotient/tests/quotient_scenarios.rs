//! End-to-end quotient scenarios

use approx::assert_relative_eq;
use pdf_core::{Distribution, Error, PdfEstimator, SampledPdf};
use pdf_interval::{quantile, ConfidenceLevel, InterQuantileRange};
use pdf_quotient::{compute_quotient, quotient, QuotientConfig};
use proptest::prelude::*;

#[test]
fn test_gaussian_over_narrow_gaussian_centres_on_ratio() {
    let offset = Distribution::Gaussian { mean: 10.0, std_dev: 0.5 }.build(800).unwrap();
    let age = Distribution::Gaussian { mean: 2.0, std_dev: 0.05 }.build(800).unwrap();

    let rate = quotient(QuotientConfig::default()).compute(&offset, &age).unwrap();
    let median = quantile(&rate.pdf, 0.5).unwrap();

    assert!((median - 5.0).abs() < 0.02, "median = {median}");
    let interval = InterQuantileRange::new(ConfidenceLevel::ONE_SIGMA)
        .estimate(&rate.pdf)
        .unwrap();
    assert!(interval.contains(5.0));
    // Relative spread of the ratio is dominated by the numerator's 5%.
    let half_width = interval.width() / 2.0;
    assert!(half_width > 0.2 && half_width < 0.35, "half width = {half_width}");
}

#[test]
fn test_compute_quotient_columns() {
    let pdf = compute_quotient(
        &[4.0, 5.0, 6.0],
        &[1.0, 1.0, 1.0],
        &[1.0, 1.5, 2.0],
        &[2.0, 2.0, 2.0],
        Some(0.01),
        None,
    )
    .unwrap();

    assert_relative_eq!(pdf.support().0, 2.0, epsilon = 1e-12);
    assert_eq!(pdf.len(), 401);
    assert!(pdf.is_normalized());
}

#[test]
fn test_compute_quotient_validates_columns() {
    assert!(matches!(
        compute_quotient(&[1.0, 2.0], &[1.0], &[1.0, 2.0], &[1.0, 1.0], None, None),
        Err(Error::InvalidInput(_))
    ));
    assert!(matches!(
        compute_quotient(&[1.0, 2.0], &[1.0, 1.0], &[1.0, 2.0], &[1.0, 1.0], Some(0.0), None),
        Err(Error::InvalidParameter(_))
    ));
}

#[test]
fn test_result_serializes() {
    let numer = SampledPdf::new(vec![1.0, 2.0], vec![1.0, 1.0]).unwrap();
    let denom = SampledPdf::new(vec![1.0, 2.0], vec![1.0, 1.0]).unwrap();
    let result = quotient(QuotientConfig::new().with_step_size(0.25))
        .compute(&numer, &denom)
        .unwrap();

    let json = serde_json::to_string(&result).unwrap();
    let back: pdf_quotient::QuotientResult = serde_json::from_str(&json).unwrap();
    assert_eq!(back.axis_len(), result.axis_len());
    assert_eq!(back.numerator_samples, 2);
    assert_relative_eq!(back.step, result.step, max_relative = 1e-12);
    assert_relative_eq!(back.pdf.area(), 1.0, epsilon = 1e-9);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_quotient_is_normalized_on_expected_range(
        numer_min in 0.5f64..10.0,
        numer_width in 0.5f64..10.0,
        denom_min in 0.5f64..5.0,
        denom_width in 0.5f64..5.0,
    ) {
        let numer = Distribution::Uniform { min: numer_min, max: numer_min + numer_width }
            .build(60)
            .unwrap();
        let denom = Distribution::Triangular {
            min: denom_min,
            mode: denom_min + denom_width / 2.0,
            max: denom_min + denom_width,
        }
        .build(60)
        .unwrap();

        let result = quotient(QuotientConfig::default()).compute(&numer, &denom).unwrap();
        let (low, high) = result.pdf.support();

        prop_assert!((result.pdf.area() - 1.0).abs() < 1e-9);
        prop_assert!(low > 0.0);
        prop_assert!(high <= result.q_max * (1.0 + 1e-9));
        prop_assert!(result.pdf.p().iter().all(|&v| v >= 0.0));
    }
}
