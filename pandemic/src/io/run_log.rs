use anyhow::Context;

use crate::model::trajectory::{DailyRecord, Trajectory};

/// Header fields of a run log.
#[derive(Debug, Clone)]
pub struct RunLogHeader<'a> {
    pub run_id: &'a str,
    pub scenario: &'a str,
    pub model: &'a str,
    pub total_population: f64,
}

/// Write `run_<run_id>.txt` into `out_dir` and return its path.
pub fn write_run_log<R: DailyRecord>(
    out_dir: impl AsRef<std::path::Path>,
    header: &RunLogHeader<'_>,
    trajectory: &Trajectory<R>,
) -> anyhow::Result<std::path::PathBuf> {
    use std::io::Write;

    std::fs::create_dir_all(out_dir.as_ref()).context("create logs dir failed")?;
    let path = out_dir.as_ref().join(format!("run_{}.txt", header.run_id));
    let file = std::fs::File::create(&path)
        .with_context(|| format!("create run log file failed (path={:?})", path))?;
    let mut f = std::io::BufWriter::new(file);

    let episodes = trajectory.lockdown_episodes();
    writeln!(f, "run_id={}", header.run_id)?;
    writeln!(f, "scenario={}", header.scenario)?;
    writeln!(f, "model={}", header.model)?;
    writeln!(f, "population={:.0}", header.total_population)?;
    writeln!(f, "duration_days={}", trajectory.len())?;
    writeln!(f, "lockdown_episodes={:?}", episodes)?;
    writeln!(f, "total_lockdown_days={}", episodes.iter().sum::<u32>())?;
    writeln!(f)?;
    writeln!(f, "day,susceptible,infectious,removed,vaccinated,incidence,lockdown")?;

    for (idx, r) in trajectory.iter().enumerate() {
        anyhow::ensure!(r.day() as usize == idx, "trajectory day mismatch at row {}", idx);
        writeln!(
            f,
            "{},{:.0},{:.0},{:.0},{:.0},{:.6},{}",
            r.day(),
            r.susceptible(),
            r.infectious(),
            r.removed(),
            r.vaccinated(),
            r.incidence(),
            u8::from(r.lockdown_day()),
        )?;
    }
    f.flush().context("flush run log failed")?;

    Ok(path)
}
