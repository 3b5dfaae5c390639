use serde::{Deserialize, Serialize};

use crate::model::trajectory::{DailyRecord, Trajectory};

/// Headline numbers of a finished run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub days: usize,
    pub peak_incidence: f64,
    pub peak_day: u32,
    pub final_susceptible: f64,
    pub final_infectious: f64,
    pub final_removed: f64,
    pub final_vaccinated: f64,
    pub lockdown_episodes: Vec<u32>,
    /// Sum of completed episodes; an episode still open at the end is not included.
    pub total_lockdown_days: u32,
}

impl RunSummary {
    pub fn from_trajectory<R: DailyRecord>(trajectory: &Trajectory<R>) -> Self {
        // First maximum wins on ties.
        let (peak_day, peak_incidence) = trajectory
            .iter()
            .fold((0, f64::NEG_INFINITY), |(day, best), r| {
                if r.incidence() > best {
                    (r.day(), r.incidence())
                } else {
                    (day, best)
                }
            });
        let episodes = trajectory.lockdown_episodes().to_vec();
        let last = trajectory.last();

        Self {
            days: trajectory.len(),
            peak_incidence: if trajectory.is_empty() { 0.0 } else { peak_incidence },
            peak_day,
            final_susceptible: last.map(|r| r.susceptible()).unwrap_or(0.0),
            final_infectious: last.map(|r| r.infectious()).unwrap_or(0.0),
            final_removed: last.map(|r| r.removed()).unwrap_or(0.0),
            final_vaccinated: last.map(|r| r.vaccinated()).unwrap_or(0.0),
            total_lockdown_days: episodes.iter().sum(),
            lockdown_episodes: episodes,
        }
    }
}
