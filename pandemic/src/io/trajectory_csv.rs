use std::path::Path;

use anyhow::Context;
use serde::Serialize;

use crate::model::trajectory::Trajectory;

/// Write one header row plus one row per simulated day.
pub fn write_trajectory<W: std::io::Write, R: Serialize>(
    out: W,
    trajectory: &Trajectory<R>,
) -> anyhow::Result<()> {
    let mut wtr = csv::WriterBuilder::new().has_headers(true).from_writer(out);
    for record in trajectory.records() {
        wtr.serialize(record)?;
    }
    wtr.flush().context("flush trajectory csv failed")?;
    Ok(())
}

pub fn write_trajectory_csv<R: Serialize>(
    path: impl AsRef<Path>,
    trajectory: &Trajectory<R>,
) -> anyhow::Result<()> {
    let path = path.as_ref();
    let file = std::fs::File::create(path)
        .with_context(|| format!("create trajectory csv failed (path={:?})", path))?;
    write_trajectory(file, trajectory)
        .with_context(|| format!("write trajectory csv failed (path={:?})", path))
}
