//! Planar paths for plotting collaborators.
//!
//! Axis 0 is `x` and axis 1 is `y`. Missing axes read as zero, so a
//! one-dimensional trial lies on the `x` axis.

use jerkcheck_sim::sample;

use crate::TrialRecord;

/// Sampling interval conventionally used for plots, in seconds.
pub const PLOT_DT: f64 = 0.001;

/// Returns the `(x, y)` path of a valid trial sampled at `dt`.
///
/// Invalid trials have no path.
///
/// # Errors
///
/// Returns an error if the trial's trajectory cannot be sampled at `dt`.
pub fn xy(record: &TrialRecord, dt: f64) -> Result<Option<Vec<[f64; 2]>>, sample::Error> {
    if !record.is_valid() {
        return Ok(None);
    }

    let Some(sampled) = record.resample(dt)? else {
        return Ok(None);
    };

    let coordinate = |axis: usize, index: usize| {
        sampled
            .axes
            .get(axis)
            .map_or(0.0, |samples| samples.position[index])
    };

    Ok(Some(
        (0..sampled.len())
            .map(|index| [coordinate(0, index), coordinate(1, index)])
            .collect(),
    ))
}

/// Returns the paths of every valid trial in `records`, in order.
///
/// # Errors
///
/// Returns the first sampling error encountered.
pub fn xy_paths<'a, I>(records: I, dt: f64) -> Result<Vec<Vec<[f64; 2]>>, sample::Error>
where
    I: IntoIterator<Item = &'a TrialRecord>,
{
    records
        .into_iter()
        .filter_map(|record| xy(record, dt).transpose())
        .collect()
}
