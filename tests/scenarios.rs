//! End-to-end scenarios across the workspace crates

use approx::assert_relative_eq;
use pdf_core::{read_table, write_table};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::Distribution as _;
use rand_distr::{Normal, Uniform};
use slip_pdf::prelude::*;
use slip_pdf::{compute_hpd, compute_iqr, compute_quotient};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn test_gaussian_one_sigma_by_both_methods() -> anyhow::Result<()> {
    init_tracing();
    let pdf = Distribution::Gaussian { mean: 5.0, std_dev: 0.3 }.build(1000)?;

    let (lower, upper) = compute_iqr(pdf.x(), pdf.p(), 68.0)?;
    assert!((lower - 4.7).abs() < 0.01 && (upper - 5.3).abs() < 0.01);

    let hpd = compute_hpd(pdf.x(), pdf.p(), 68.0)?;
    assert_eq!(hpd.cluster_count(), 1);
    assert!((hpd.lowest - lower).abs() < 0.01);
    assert!((hpd.highest - upper).abs() < 0.01);
    Ok(())
}

#[test]
fn test_uniform_quotient_plateau() -> anyhow::Result<()> {
    let numer = Distribution::Uniform { min: 4.0, max: 6.0 }.build(500)?;
    let denom = Distribution::Uniform { min: 1.0, max: 2.0 }.build(500)?;
    let rate = compute_quotient(numer.x(), numer.p(), denom.x(), denom.p(), None, None)?;

    let (low, high) = rate.support();
    assert_relative_eq!(low, 2.0, epsilon = 1e-9);
    assert!((high - 6.0).abs() < 0.01);
    assert!(rate.is_normalized());

    // Density peaks at 3 and falls off towards both ends of the support.
    let peak_at = rate
        .iter()
        .fold((0.0, f64::NEG_INFINITY), |best, (q, p)| if p > best.1 { (q, p) } else { best })
        .0;
    assert!((peak_at - 3.0).abs() < 0.05, "peak at {peak_at}");
    assert!(rate.p()[0] < 0.05 && rate.p()[rate.len() - 1] < 0.05);
    Ok(())
}

#[test]
fn test_slip_rate_from_sample_arrays() -> anyhow::Result<()> {
    init_tracing();
    let mut rng = ChaCha8Rng::seed_from_u64(2021);
    let offset_draws: Vec<f64> = Normal::new(30.0, 2.0)?
        .sample_iter(&mut rng)
        .take(20_000)
        .collect();
    let age_draws: Vec<f64> = Uniform::new(5.0, 7.0).sample_iter(&mut rng).take(20_000).collect();

    let offset = KdePdfBuilder::new(0.1).build(&offset_draws)?;
    let age = HistogramPdfBuilder::new(0.05)
        .with_smoothing(SmoothingKernel::Mean(3))
        .build(&age_draws)?;

    let rate = QuotientComputer::new(QuotientConfig::new().with_step_size(0.01)).compute(&offset, &age)?;
    assert!(rate.pdf.is_normalized());
    assert_relative_eq!(rate.step, 0.01);

    let interval = InterQuantileRange::new(ConfidenceLevel::ONE_SIGMA).estimate(&rate.pdf)?;
    let region = HighestPosteriorDensity::new(ConfidenceLevel::ONE_SIGMA).estimate(&rate.pdf)?;

    // Rate of 30 / 6 = 5 with roughly 11% relative spread.
    assert!((interval.median - 5.0).abs() < 0.1, "median {}", interval.median);
    assert!(interval.contains(5.0) && region.contains(5.0));
    assert_eq!(region.cluster_count(), 1);
    assert!(region.total_width() <= interval.width() + 2.0 * rate.step);
    Ok(())
}

#[test]
fn test_bimodal_hpd_through_table() -> anyhow::Result<()> {
    let x: Vec<f64> = (0..=400).map(|i| i as f64 * 0.05).collect();
    let p: Vec<f64> = x
        .iter()
        .map(|v| (-0.5 * ((v - 5.0) / 0.5).powi(2)).exp() + (-0.5 * ((v - 14.0) / 0.7).powi(2)).exp())
        .collect();
    let pdf = SampledPdf::new(x, p)?;

    let mut buffer = Vec::new();
    write_table(&pdf, &mut buffer)?;
    let text = String::from_utf8(buffer)?;
    assert!(text.starts_with("# Value,\tProbability\n"));

    let restored = read_table(text.as_bytes())?;
    assert_eq!(restored.len(), pdf.len());
    for ((x0, p0), (x1, p1)) in pdf.iter().zip(restored.iter()) {
        assert!((x0 - x1).abs() < 1e-6 && (p0 - p1).abs() < 1e-6);
    }

    let region = HighestPosteriorDensity::new(ConfidenceLevel::NINETY_FIVE).estimate(&restored)?;
    assert!(region.is_multimodal());
    assert_eq!(region.cluster_count(), 2);
    assert!(region.contains(5.0) && region.contains(14.0) && !region.contains(9.5));
    Ok(())
}

#[test]
fn test_quotient_file_round_trip() -> anyhow::Result<()> {
    let offset = Distribution::Triangular { min: 8.0, mode: 10.0, max: 13.0 }.build(200)?;
    let age = Distribution::Trapezoidal {
        min: 1.5,
        plateau_start: 2.0,
        plateau_end: 2.5,
        max: 3.0,
    }
    .build(200)?;
    let rate = QuotientComputer::new(QuotientConfig::new().with_max_quotient(7.0)).compute(&offset, &age)?;
    assert!(rate.q_max <= 7.0);

    let path = std::env::temp_dir().join(format!("slip_pdf_rate_{}.txt", std::process::id()));
    save_table(&rate.pdf, &path)?;
    let loaded = load_table(&path)?;
    std::fs::remove_file(&path)?;

    let before = InterQuantileRange::new(ConfidenceLevel::NINETY_FIVE).estimate(&rate.pdf)?;
    let after = InterQuantileRange::new(ConfidenceLevel::NINETY_FIVE).estimate(&loaded)?;
    assert!((before.lower - after.lower).abs() < 1e-3);
    assert!((before.upper - after.upper).abs() < 1e-3);
    Ok(())
}
