use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use arrow::array::{Float32Builder, Int32Array, ListBuilder};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use sample_lens::{Bunch, Samples};
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_json_bunch() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        &dir,
        "iris.json",
        r#"{
            "data": [[5.1, 3.5], [7.0, 3.2], [6.3, 3.3]],
            "target": [0, 1, 2],
            "feature_names": ["sepal length (cm)", "sepal width (cm)"],
            "target_names": ["setosa", "versicolor"]
        }"#,
    );

    let bunch = Bunch::from_file(&path).unwrap();
    assert_eq!(bunch.len(), 3);
    assert_eq!(bunch.data[1], vec![7.0, 3.2]);

    let samples = Samples::load_from_bunch(&bunch).unwrap();
    // index 2 has no target name and falls back to "2"
    assert_eq!(samples.get_classes(), vec!["setosa", "versicolor", "2"]);
    assert_eq!(
        samples.get_samples_for_class("setosa").unwrap()[0].to_string(),
        "setosa - sepal length (cm): 5.1, sepal width (cm): 3.5"
    );
}

#[test]
fn test_json_bunch_without_names() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(&dir, "digits.json", r#"{"data": [[0.0, 1.0], [2.0, 3.0]], "target": [7, 3]}"#);

    let samples = Samples::load_from_bunch(&Bunch::from_file(&path).unwrap()).unwrap();
    assert_eq!(samples.get_classes(), vec!["7", "3"]);
    assert_eq!(samples.get_all_samples()[1].to_string(), "3 - 2, 3");
}

#[test]
fn test_json_malformed() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(&dir, "broken.json", r#"{"data": [[1.0]]}"#);
    let err = Bunch::from_file(&path).unwrap_err();
    assert!(format!("{err:#}").contains("parsing JSON bunch"));
}

#[test]
fn test_csv_with_text_labels() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        &dir,
        "iris.csv",
        "sepal_length,sepal_width,species\n\
         5.1,3.5,setosa\n\
         7.0,3.2,versicolor\n\
         4.9,3.0,setosa\n",
    );

    let bunch = Bunch::from_file(&path).unwrap();
    assert_eq!(bunch.target, vec![0, 1, 0]);
    assert_eq!(
        bunch.target_names,
        Some(vec!["setosa".to_string(), "versicolor".to_string()])
    );
    assert_eq!(
        bunch.feature_names,
        Some(vec!["sepal_length".to_string(), "sepal_width".to_string()])
    );
    assert_eq!(bunch.data[2], vec![4.9, 3.0]);
}

#[test]
fn test_csv_with_target_column() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(&dir, "wine.csv", "target,alcohol,ash\n0,14.2,2.4\n1,12.3,2.1\n");

    let bunch = Bunch::from_file(&path).unwrap();
    assert_eq!(bunch.target, vec![0, 1]);
    assert_eq!(bunch.target_names, None);
    assert_eq!(
        bunch.feature_names,
        Some(vec!["alcohol".to_string(), "ash".to_string()])
    );
    assert_eq!(bunch.data[0], vec![14.2, 2.4]);
}

#[test]
fn test_csv_rejects_non_numeric_feature() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(&dir, "bad.csv", "a,target\n1.0,0\nabc,1\n");
    let err = Bunch::from_file(&path).unwrap_err();
    assert!(format!("{err:#}").contains("'abc' is not a number"));
}

#[test]
fn test_parquet_bunch() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bunch.parquet");

    let mut data_builder = ListBuilder::new(Float32Builder::new());
    for row in [[1.0f32, 2.0], [3.0, 4.0], [5.0, 6.0]] {
        for v in row {
            data_builder.values().append_value(v);
        }
        data_builder.append(true);
    }
    let metadata = HashMap::from([
        ("feature_names".to_string(), r#"["x", "y"]"#.to_string()),
        ("target_names".to_string(), r#"["low", "high"]"#.to_string()),
    ]);
    let schema = Arc::new(
        Schema::new(vec![
            Field::new(
                "data",
                DataType::List(Arc::new(Field::new("item", DataType::Float32, true))),
                false,
            ),
            Field::new("target", DataType::Int32, false),
        ])
        .with_metadata(metadata),
    );
    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(data_builder.finish()),
            Arc::new(Int32Array::from(vec![0, 1, 1])),
        ],
    )
    .unwrap();
    let file = std::fs::File::create(&path).unwrap();
    let mut writer = ArrowWriter::try_new(file, schema, None).unwrap();
    writer.write(&batch).unwrap();
    writer.close().unwrap();

    let bunch = Bunch::from_file(&path).unwrap();
    assert_eq!(bunch.target, vec![0, 1, 1]);
    assert_eq!(bunch.data[2], vec![5.0, 6.0]);
    assert_eq!(bunch.feature_names, Some(vec!["x".to_string(), "y".to_string()]));

    let samples = Samples::load_from_bunch(&bunch).unwrap();
    assert_eq!(samples.get_classes(), vec!["low", "high"]);
    assert_eq!(samples.get_samples_for_class("high").unwrap().len(), 2);
}

#[test]
fn test_unsupported_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(&dir, "bunch.txt", "");
    let err = Bunch::from_file(&path).unwrap_err();
    assert!(format!("{err:#}").contains("Unsupported file extension: .txt"));
}
