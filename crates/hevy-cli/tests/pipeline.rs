//! Integration tests for the pipeline module.

use std::fs;
use std::path::{Path, PathBuf};

use hevy_cli::pipeline::{
    PipelineConfig, PlainTextFile, load_lookup_table, map_stage, parse_stage, run_pipeline,
};
use hevy_cli::summary::{lookup_listing, mapping_table};
use hevy_ingest::TextSource;
use hevy_model::{Confidence, ParseOptions, UnmappedPolicy};

const LOG: &str = "\
Workout: Full Body Strength
Date: 2024-01-15

Exercise: Bench Press
Sets: 3
Reps: 8, 8, 8
Weight: 135, 135, 140

Exercise: Cossack Squat Hold
Sets: 2
Reps: 6, 6

Exercise: Sandbag Carry
Sets: 1
";

fn unique_temp_dir(name: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!(
        "hevy-import-{}-{}-{}",
        name,
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write(dir: &Path, name: &str, contents: &[u8]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn runs_all_stages_from_file() {
    let dir = unique_temp_dir("pipeline");
    let path = write(&dir, "log.txt", LOG.as_bytes());

    let output = run_pipeline(&PlainTextFile::new(&path), &PipelineConfig::default())
        .expect("run pipeline");

    assert_eq!(output.workout.exercises.len(), 3);
    assert_eq!(output.mapped.exercises[0].confidence(), Confidence::Exact);
    // "squat" is contained in the name; "squats" is not.
    assert_eq!(output.mapped.exercises[1].canonical_id(), Some("squats"));
    assert_eq!(output.mapped.exercises[1].confidence(), Confidence::Partial);
    assert_eq!(output.report.unmapped(), ["Sandbag Carry".to_string()]);

    let indices: Vec<usize> = output.payload.exercises.iter().map(|e| e.index).collect();
    assert_eq!(indices, vec![0, 1, 2]);
    assert_eq!(output.payload.exercises[2].exercise_template_id, None);

    let stats = serde_json::to_string_pretty(&output.report.stats()).unwrap();
    insta::assert_snapshot!(stats, @r#"
    {
      "total": 3,
      "mapped": 2,
      "unmapped": 1
    }
    "#);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn strict_policy_rejects_unmapped() {
    let dir = unique_temp_dir("strict");
    let path = write(&dir, "log.txt", LOG.as_bytes());
    let config = PipelineConfig {
        unmapped_policy: UnmappedPolicy::Reject,
        ..PipelineConfig::default()
    };

    let error = run_pipeline(&PlainTextFile::new(&path), &config).expect_err("strict fails");
    let message = format!("{error:#}");
    assert!(message.contains("Sandbag Carry"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn missing_file_is_a_decode_error() {
    let source = PlainTextFile::new("/nonexistent/hevy-import/log.txt");
    let error = source.read_text().expect_err("missing file");
    assert!(error.to_string().starts_with("failed to decode workout document"));
}

#[test]
fn binary_file_is_rejected() {
    let dir = unique_temp_dir("binary");
    let path = write(&dir, "scan.pdf", &[0x25, 0x50, 0x44, 0x46, 0xff, 0xfe, 0x00]);

    let result = parse_stage(&PlainTextFile::new(&path), &ParseOptions::default());
    assert!(result.is_err());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn custom_table_from_file() {
    let dir = unique_temp_dir("table");
    let table_path = write(
        &dir,
        "table.json",
        br#"[{"key": "sandbag carry", "id": "sandbag_carry", "title": "Sandbag Carry"}]"#,
    );

    let table = load_lookup_table(Some(table_path.as_path())).expect("load table");
    let workout = parse_stage(LOG, &ParseOptions::default()).expect("parse");
    let (report, mapped) = map_stage(&workout, &table);

    assert_eq!(report.stats().mapped, 1);
    assert_eq!(mapped.exercises[2].canonical_id(), Some("sandbag_carry"));
    assert_eq!(mapped.exercises[0].confidence(), Confidence::Unmapped);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn invalid_table_file_fails() {
    let dir = unique_temp_dir("bad-table");
    let table_path = write(&dir, "table.json", b"[{\"key\": \"\", \"id\": \"x\", \"title\": \"X\"}]");

    let error = load_lookup_table(Some(table_path.as_path())).expect_err("invalid table");
    assert!(format!("{error:#}").contains("empty key"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn default_table_is_builtin() {
    let table = load_lookup_table(None).expect("builtin table");
    assert_eq!(table.len(), 21);
}

#[test]
fn summary_tables_render() {
    let workout = parse_stage(LOG, &ParseOptions::default()).expect("parse");
    let (report, _) = map_stage(&workout, &load_lookup_table(None).unwrap());

    let rendered = mapping_table(&report).to_string();
    assert!(rendered.contains("bench_press"));
    assert!(rendered.contains("unmapped"));
    assert!(rendered.contains("2/3 mapped"));

    let listing = lookup_listing(&load_lookup_table(None).unwrap()).to_string();
    assert!(listing.contains("overhead press"));
}
