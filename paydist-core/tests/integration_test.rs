use paydist_core::{
    analyze, analyze_file, export_json, load_samples, pdf_figure, write_report, BandFactors,
    BinningStrategy, PaydistError, TextRole,
};
use std::io::Write;
use tempfile::NamedTempFile;

const REFERENCE: &str = "10,20,20\n30,30,30\n40 40 40 40\n";

fn write_fixture(body: &str) -> NamedTempFile {
    let mut tmp = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .unwrap();
    tmp.write_all(body.as_bytes()).unwrap();
    tmp.flush().unwrap();
    tmp
}

#[test]
fn reference_file_end_to_end() {
    let tmp = write_fixture(REFERENCE);
    let report = analyze_file(
        tmp.path(),
        BinningStrategy::FreedmanDiaconis,
        BandFactors::default(),
    )
    .unwrap();
    assert_eq!(report.binning.bins, 2);
    assert_eq!(report.binning.bin_width, Some(16));
    assert_eq!(report.distribution.edges, vec![10.0, 25.0, 40.0]);
    assert_eq!(report.distribution.counts, vec![3, 7]);
    assert_eq!(report.stats.mean, 28.0);
    assert_eq!(report.samples.mean, 30.0);
    assert_eq!(report.source.as_ref().unwrap().sample_count, 10);
}

#[test]
fn reruns_are_identical() {
    let tmp = write_fixture(REFERENCE);
    let run = || {
        let r = analyze_file(
            tmp.path(),
            BinningStrategy::FreedmanDiaconis,
            BandFactors::default(),
        )
        .unwrap();
        let mut out = Vec::new();
        write_report(&mut out, &r).unwrap();
        (serde_json::to_string(&r.distribution).unwrap(), out)
    };
    assert_eq!(run(), run());
}

#[test]
fn zero_variance_file_is_degenerate() {
    let tmp = write_fixture("50000\n50000\n50000\n50000\n");
    let err = analyze_file(
        tmp.path(),
        BinningStrategy::FreedmanDiaconis,
        BandFactors::default(),
    )
    .unwrap_err();
    assert!(matches!(err, PaydistError::DegenerateDistribution { n: 4, .. }));
}

#[test]
fn zero_variance_still_renders_with_fixed_bins() {
    let tmp = write_fixture("7\n7\n7\n");
    let report = analyze_file(tmp.path(), BinningStrategy::Fixed(30), BandFactors::default()).unwrap();
    assert_eq!(report.distribution.bins(), 30);
    assert_eq!(report.distribution.counts.iter().sum::<u64>(), 3);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_samples(&dir.path().join("data9-1.csv")).unwrap_err();
    assert!(matches!(err, PaydistError::Io(_)));
}

#[test]
fn non_numeric_file_is_parse_error() {
    let tmp = write_fixture("100,200\n300,abc\n");
    let err = analyze_file(
        tmp.path(),
        BinningStrategy::FreedmanDiaconis,
        BandFactors::default(),
    )
    .unwrap_err();
    assert!(matches!(err, PaydistError::Parse { line: 2, .. }));
}

#[test]
fn salary_like_dataset() {
    // deterministic skewed sample in the tens of thousands
    let values: Vec<f64> = (1..=500)
        .map(|i| 18_000.0 + 40_000.0 * ((i as f64) / 500.0).powf(1.7))
        .collect();
    let report = analyze(&values, BinningStrategy::FreedmanDiaconis, BandFactors::default()).unwrap();
    let min = report.samples.min;
    let max = report.samples.max;
    assert!(report.binning.bins >= 2);
    assert!(report.stats.weighted_mean >= min && report.stats.weighted_mean <= max);
    assert!(report.stats.lower < report.stats.mean && report.stats.mean < report.stats.upper);
    assert!(report.stats.band_percent > 0.0 && report.stats.band_percent <= 100.0);

    let fig = pdf_figure(&report.distribution, &report.stats);
    assert_eq!(fig.bars.len(), report.binning.bins);
    assert!(fig
        .annotation(TextRole::Headline)
        .unwrap()
        .starts_with(&format!("{:.1}%", report.stats.band_percent)));
}

#[test]
fn json_export_contains_source() {
    let tmp = write_fixture(REFERENCE);
    let report = analyze_file(
        tmp.path(),
        BinningStrategy::FreedmanDiaconis,
        BandFactors::default(),
    )
    .unwrap();
    let out = tempfile::tempdir().unwrap();
    let path = out.path().join("report.json");
    export_json(&path, &report).unwrap();
    let v: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(v["source"]["sample_count"], 10);
    assert_eq!(v["samples"]["count"], 10);
}
