use serde::{Deserialize, Serialize};

use crate::model::params::Mode;

/// Read access shared by the per-day records of both models.
pub trait DailyRecord {
    fn day(&self) -> u32;
    fn susceptible(&self) -> f64;
    fn infectious(&self) -> f64;
    fn removed(&self) -> f64;
    /// 7-day incidence per 100k.
    fn incidence(&self) -> f64;

    fn vaccinated(&self) -> f64 {
        0.0
    }

    /// Days spent in lockdown count towards an episode.
    fn lockdown_day(&self) -> bool {
        false
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SirsRecord {
    pub day: u32,
    pub susceptible: f64,
    pub infectious: f64,
    pub removed: f64,
    pub incidence: f64,
}

impl DailyRecord for SirsRecord {
    fn day(&self) -> u32 {
        self.day
    }

    fn susceptible(&self) -> f64 {
        self.susceptible
    }

    fn infectious(&self) -> f64 {
        self.infectious
    }

    fn removed(&self) -> f64 {
        self.removed
    }

    fn incidence(&self) -> f64 {
        self.incidence
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContainmentRecord {
    pub day: u32,
    pub susceptible: f64,
    pub infectious: f64,
    pub removed: f64,
    pub vaccinated: f64,
    pub incidence: f64,
    pub high_risk_fraction: f64,
    /// Controller mode at the end of the day.
    pub mode: Mode,
    /// Whether the day was counted towards a lockdown episode.
    pub lockdown_day: bool,
}

impl DailyRecord for ContainmentRecord {
    fn day(&self) -> u32 {
        self.day
    }

    fn susceptible(&self) -> f64 {
        self.susceptible
    }

    fn infectious(&self) -> f64 {
        self.infectious
    }

    fn removed(&self) -> f64 {
        self.removed
    }

    fn incidence(&self) -> f64 {
        self.incidence
    }

    fn vaccinated(&self) -> f64 {
        self.vaccinated
    }

    fn lockdown_day(&self) -> bool {
        self.lockdown_day
    }
}

/// Output of one simulation run. Built by the run loop, read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trajectory<R> {
    records: Vec<R>,
    /// Length in days of every completed lockdown episode, in order.
    /// Always empty for the basic SIRS model.
    lockdown_episodes: Vec<u32>,
}

impl<R> Trajectory<R> {
    pub(crate) fn new(records: Vec<R>, lockdown_episodes: Vec<u32>) -> Self {
        Self { records, lockdown_episodes }
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn lockdown_episodes(&self) -> &[u32] {
        &self.lockdown_episodes
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn first(&self) -> Option<&R> {
        self.records.first()
    }

    pub fn last(&self) -> Option<&R> {
        self.records.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.records.iter()
    }

    /// Extract one column, e.g. `traj.series(|r| r.incidence)`.
    pub fn series<T>(&self, f: impl Fn(&R) -> T) -> Vec<T> {
        self.records.iter().map(f).collect()
    }
}

impl<R: DailyRecord> Trajectory<R> {
    pub fn days(&self) -> Vec<u32> {
        self.series(R::day)
    }

    pub fn susceptible(&self) -> Vec<f64> {
        self.series(R::susceptible)
    }

    pub fn infectious(&self) -> Vec<f64> {
        self.series(R::infectious)
    }

    pub fn removed(&self) -> Vec<f64> {
        self.series(R::removed)
    }

    pub fn vaccinated(&self) -> Vec<f64> {
        self.series(R::vaccinated)
    }

    pub fn incidence(&self) -> Vec<f64> {
        self.series(R::incidence)
    }
}

impl<'a, R> IntoIterator for &'a Trajectory<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
