use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{ArrayRef, Float64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

const N_PARTS: usize = 40;

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

enum ColumnData {
    Text(Vec<Option<String>>),
    Number(Vec<Option<f64>>),
}

impl ColumnData {
    fn csv_cell(&self, row: usize) -> String {
        match self {
            ColumnData::Text(v) => v[row].clone().unwrap_or_default(),
            ColumnData::Number(v) => v[row].map(|x| format!("{x:.3}")).unwrap_or_default(),
        }
    }

    fn to_arrow(&self) -> (DataType, ArrayRef) {
        match self {
            ColumnData::Text(v) => (
                DataType::Utf8,
                Arc::new(StringArray::from(v.clone())) as ArrayRef,
            ),
            ColumnData::Number(v) => (
                DataType::Float64,
                Arc::new(Float64Array::from(v.clone())) as ArrayRef,
            ),
        }
    }
}

/// Three width readings per part; roughly one reading in 25 left blank.
fn widths(rng: &mut SimpleRng, mean: f64, sd: f64) -> [ColumnData; 3] {
    let mut column = || {
        ColumnData::Number(
            (0..N_PARTS)
                .map(|_| {
                    let v = rng.gauss(mean, sd);
                    (rng.next_f64() > 0.04).then_some((v * 1000.0).round() / 1000.0)
                })
                .collect(),
        )
    };
    [column(), column(), column()]
}

fn push_widths(columns: &mut Vec<(String, ColumnData)>, prefix: &str, data: [ColumnData; 3]) {
    for (i, col) in data.into_iter().enumerate() {
        columns.push((format!("{prefix} W{}", i + 1), col));
    }
}

fn blank() -> ColumnData {
    ColumnData::Text(vec![None; N_PARTS])
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    let mut columns: Vec<(String, ColumnData)> = Vec::new();
    columns.push((
        "Part No".into(),
        ColumnData::Text((0..N_PARTS).map(|i| Some(format!("P-{:04}", i + 1))).collect()),
    ));
    columns.push((
        "Shift".into(),
        ColumnData::Text((0..N_PARTS).map(|i| Some(["A", "B"][i % 2].to_string())).collect()),
    ));
    push_widths(&mut columns, "Molding", widths(&mut rng, 81.60, 0.15));
    columns.push(("Unnamed: 5".into(), blank()));
    push_widths(&mut columns, "Painting", widths(&mut rng, 81.75, 0.12));
    columns.push((
        "Oven Temp".into(),
        ColumnData::Number(
            (0..N_PARTS)
                .map(|_| Some((rng.gauss(180.0, 2.0) * 10.0).round() / 10.0))
                .collect(),
        ),
    ));
    columns.push((
        "Line Speed".into(),
        ColumnData::Number(
            (0..N_PARTS)
                .map(|_| Some((rng.gauss(4.0, 0.1) * 100.0).round() / 100.0))
                .collect(),
        ),
    ));
    columns.push((
        "Operator".into(),
        ColumnData::Text(
            (0..N_PARTS)
                .map(|i| Some(["Alice", "Bob", "Chen"][i % 3].to_string()))
                .collect(),
        ),
    ));
    columns.push(("Unnamed: 12".into(), blank()));
    columns.push(("Unnamed: 13".into(), blank()));
    push_widths(&mut columns, "PaintingWithoutOven", widths(&mut rng, 81.70, 0.14));
    columns.push(("Unnamed: 17".into(), blank()));
    push_widths(&mut columns, "MoldingPlusOven", widths(&mut rng, 81.55, 0.18));
    columns.push(("Remarks".into(), blank()));

    // CSV
    let csv_path = "sample_measurements.csv";
    let mut writer = csv::Writer::from_path(csv_path).context("creating CSV")?;
    writer.write_record(columns.iter().map(|(name, _)| name.as_str()))?;
    for row in 0..N_PARTS {
        writer.write_record(columns.iter().map(|(_, col)| col.csv_cell(row)))?;
    }
    writer.flush()?;

    // Parquet
    let (fields, arrays): (Vec<Field>, Vec<ArrayRef>) = columns
        .iter()
        .map(|(name, col)| {
            let (data_type, array) = col.to_arrow();
            (Field::new(name, data_type, true), array)
        })
        .unzip();
    let schema = Arc::new(Schema::new(fields));
    let batch = RecordBatch::try_new(schema.clone(), arrays).context("building record batch")?;

    let parquet_path = "sample_measurements.parquet";
    let file = std::fs::File::create(parquet_path).context("creating parquet file")?;
    let mut parquet_writer = ArrowWriter::try_new(file, schema, None)?;
    parquet_writer.write(&batch)?;
    parquet_writer.close()?;

    println!(
        "Wrote {N_PARTS} parts x {} columns to {csv_path} and {parquet_path}",
        columns.len()
    );
    Ok(())
}
