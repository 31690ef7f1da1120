//! CSV batch evaluation.
//!
//! Reads performance records as CSV rows and writes one recommendation row
//! per record. Expected input headers:
//!
//! `sets,reps,weight,rating,equipment,compound,exercise_name,exercise_id`
//!
//! `exercise_name` and `exercise_id` may be left empty.

use crate::engine::ProgressionEngine;
use crate::{PerformanceRecord, Result, TrainingStyle};
use std::io::{Read, Write};

/// A row in the CSV output
#[derive(Debug, serde::Serialize)]
struct ResultRow<'a> {
    exercise_name: &'a str,
    exercise_id: Option<u32>,
    weight: f64,
    reps: u32,
    rating: u8,
    new_weight: f64,
    new_reps: u32,
    deload: bool,
    suggested_exercise_id: Option<u32>,
    suggestion: Option<&'a str>,
}

/// Evaluate every record in `input`, writing results to `output`
///
/// Returns the number of records processed. A malformed row aborts the batch
/// with the CSV error, which names the offending line.
pub fn evaluate_csv<R: Read, W: Write>(
    input: R,
    output: W,
    style: TrainingStyle,
    engine: &ProgressionEngine<'_>,
) -> Result<usize> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(input);
    let mut writer = csv::Writer::from_writer(output);

    let mut count = 0;
    for row in reader.deserialize() {
        let record: PerformanceRecord = row?;
        let result = engine.calculate(&record, style);

        writer.serialize(ResultRow {
            exercise_name: &record.exercise_name,
            exercise_id: record.exercise_id,
            weight: record.weight,
            reps: record.reps,
            rating: record.rating,
            new_weight: result.new_weight,
            new_reps: result.new_reps,
            deload: result.deload,
            suggested_exercise_id: result
                .suggestion
                .as_ref()
                .and_then(|s| s.suggested_exercise_id),
            suggestion: result.suggestion.as_ref().map(|s| s.message.as_str()),
        })?;
        count += 1;
    }

    writer.flush()?;
    tracing::info!("Evaluated {} records", count);
    Ok(count)
}
