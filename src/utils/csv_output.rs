use std::io::Write;

use crate::core::Observation;
use crate::error::SampleError;
use crate::estimators::{EstimationResult, Method};
use crate::streams::ObservationStream;

pub const CSV_HEADER: [&str; 3] = ["x", "y", "z"];

/// Shortest round-trip rendering, keeping a trailing `.0` on integral values
/// so that every column reads as a float.
pub fn format_float(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else if v.is_infinite() {
        if v > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if v.fract() == 0.0 && v.abs() < 1e16 {
        format!("{v:.1}")
    } else {
        format!("{v}")
    }
}

/// `method, estimate_z0, estimate_z1, effect`.
pub fn format_result_line(method: Method, result: &EstimationResult) -> String {
    let mut fields = vec![method.to_string()];
    fields.extend(result.to_array().iter().map(|v| format_float(*v)));
    fields.join(", ")
}

fn record(observation: &Observation) -> [String; 3] {
    [
        format_float(observation.x),
        format_float(observation.y),
        (observation.arm.indicator() as u8).to_string(),
    ]
}

/// Writes the `x,y,z` header followed by every observation of `stream`.
/// Returns the number of records written.
pub fn write_sample<W: Write>(
    writer: W,
    stream: &mut dyn ObservationStream,
) -> Result<usize, SampleError> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(CSV_HEADER)?;
    let mut written = 0;
    while stream.has_more_observations() {
        let Some(observation) = stream.next_observation() else {
            break;
        };
        out.write_record(record(&observation?))?;
        written += 1;
    }
    out.flush()?;
    Ok(written)
}
