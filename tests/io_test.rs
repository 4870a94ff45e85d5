//! CSV input tests

use binmetrics::{read_scored_csv, score, Metric, ScoreOutput};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_read_and_score() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("scores.csv");
    fs::write(&path, "label,score\n1,0.9\n0,0.2\n1,0.6\n0,0.4\n").unwrap();

    let data = read_scored_csv(&path, "label", "score").unwrap();
    assert_eq!(data.len(), 4);

    let out = score(&data.y_true, &data.y_predict, None, Metric::Accuracy).unwrap();
    assert_eq!(out, ScoreOutput::Scalar(1.0));
}

#[test]
fn test_read_percentile_sweep() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("ranked.csv");

    let mut contents = String::from("y,p\n");
    for i in 0..200 {
        let label = u8::from(i % 4 == 3);
        contents.push_str(&format!("{},{}\n", label, (i as f64) / 200.0));
    }
    fs::write(&path, contents).unwrap();

    let data = read_scored_csv(&path, "y", "p").unwrap();
    let out = score(&data.y_true, &data.y_predict, Some(25.0), Metric::Lift).unwrap();
    assert_eq!(out.into_vec().len(), 99);
}

#[test]
fn test_invalid_cell() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.csv");
    fs::write(&path, "label,score\n1,high\n").unwrap();

    let err = read_scored_csv(&path, "label", "score").unwrap_err();
    assert!(err.to_string().contains("column score"));
}

#[test]
fn test_missing_file() {
    let dir = tempdir().unwrap();
    assert!(read_scored_csv(dir.path().join("none.csv"), "label", "score").is_err());
}
