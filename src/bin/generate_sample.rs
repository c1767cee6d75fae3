use std::collections::HashMap;
use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{Float64Builder, Int64Array, ListBuilder};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use log::info;
use parquet::arrow::ArrowWriter;

use sample_lens::data::loader::{DATA_COLUMN, FEATURE_NAMES_KEY, TARGET_COLUMN, TARGET_NAMES_KEY};

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// Per-class (mean, std) of the four iris measurements, in cm.
const CLASSES: [(&str, [(f64, f64); 4]); 3] = [
    ("setosa", [(5.01, 0.35), (3.43, 0.38), (1.46, 0.17), (0.25, 0.11)]),
    ("versicolor", [(5.94, 0.52), (2.77, 0.31), (4.26, 0.47), (1.33, 0.20)]),
    ("virginica", [(6.59, 0.64), (2.97, 0.32), (5.55, 0.55), (2.03, 0.27)]),
];

const FEATURES: [&str; 4] = [
    "sepal length (cm)",
    "sepal width (cm)",
    "petal length (cm)",
    "petal width (cm)",
];

const ROWS_PER_CLASS: usize = 50;

fn main() -> Result<()> {
    env_logger::init();
    let mut rng = SimpleRng::new(42);

    let mut data_builder = ListBuilder::new(Float64Builder::new());
    let mut targets: Vec<i64> = Vec::new();

    for (class_index, (_, stats)) in CLASSES.iter().enumerate() {
        for _ in 0..ROWS_PER_CLASS {
            let values = data_builder.values();
            for &(mean, std_dev) in stats {
                // Measurements are never negative.
                values.append_value(rng.gauss(mean, std_dev).max(0.1));
            }
            data_builder.append(true);
            targets.push(class_index as i64);
        }
    }
    let data_array = data_builder.finish();
    let target_array = Int64Array::from(targets);

    let class_names: Vec<&str> = CLASSES.iter().map(|(name, _)| *name).collect();
    let metadata = HashMap::from([
        (
            FEATURE_NAMES_KEY.to_string(),
            serde_json::to_string(&FEATURES).context("encoding feature names")?,
        ),
        (
            TARGET_NAMES_KEY.to_string(),
            serde_json::to_string(&class_names).context("encoding target names")?,
        ),
    ]);

    let schema = Arc::new(
        Schema::new(vec![
            Field::new(
                DATA_COLUMN,
                DataType::List(Arc::new(Field::new("item", DataType::Float64, true))),
                false,
            ),
            Field::new(TARGET_COLUMN, DataType::Int64, false),
        ])
        .with_metadata(metadata),
    );

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![Arc::new(data_array), Arc::new(target_array)],
    )
    .context("building record batch")?;

    // Write Parquet
    let output_path = "sample_data.parquet";
    let file = std::fs::File::create(output_path).context("creating output file")?;
    let mut writer = ArrowWriter::try_new(file, schema, None).context("creating writer")?;
    writer.write(&batch).context("writing batch")?;
    writer.close().context("closing writer")?;

    info!(
        "Wrote {} samples ({} classes, {} features) to {output_path}",
        ROWS_PER_CLASS * CLASSES.len(),
        CLASSES.len(),
        FEATURES.len()
    );
    println!("Wrote {output_path}");
    Ok(())
}
