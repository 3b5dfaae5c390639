use serde::{Deserialize, Serialize};

use crate::error::{ensure_param, Result};
use crate::incidence::daily_case_threshold;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Disease {
    pub reproduction_number: f64, // R0
    pub infectivity_rate: f64,    // gamma (per day)
    pub immunity_days: f64,       // mean duration of immunity; 1e10 ~ lasting
}

impl Disease {
    pub fn new(reproduction_number: f64, infectivity_rate: f64, immunity_days: f64) -> Self {
        Self { reproduction_number, infectivity_rate, immunity_days }
    }

    /// delta = 1 / immunity duration (R -> S and V -> S per day)
    pub fn waning_rate(&self) -> f64 {
        1.0 / self.immunity_days
    }

    pub fn check(&self) -> Result<()> {
        ensure_param!(
            self.reproduction_number.is_finite() && self.reproduction_number > 0.0,
            "reproduction_number",
            "must be finite and > 0, got {}",
            self.reproduction_number
        );
        ensure_param!(
            self.infectivity_rate.is_finite() && self.infectivity_rate > 0.0,
            "infectivity_rate",
            "must be finite and > 0, got {}",
            self.infectivity_rate
        );
        ensure_param!(
            self.immunity_days > 0.0,
            "immunity_days",
            "must be > 0, got {}",
            self.immunity_days
        );
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Population {
    pub total: f64,
    pub infectious: f64,
    pub removed: f64,
}

impl Population {
    pub fn new(total: f64, infectious: f64, removed: f64) -> Self {
        Self { total, infectious, removed }
    }

    pub fn susceptible(&self) -> f64 {
        self.total - self.infectious - self.removed
    }

    pub fn check(&self) -> Result<()> {
        ensure_param!(
            self.total.is_finite() && self.total > 0.0,
            "total",
            "population must be finite and > 0, got {}",
            self.total
        );
        ensure_param!(
            self.infectious.is_finite() && self.infectious >= 0.0,
            "infectious",
            "must be finite and >= 0, got {}",
            self.infectious
        );
        ensure_param!(
            self.removed.is_finite() && self.removed >= 0.0,
            "removed",
            "must be finite and >= 0, got {}",
            self.removed
        );
        ensure_param!(
            self.susceptible() >= 0.0,
            "removed",
            "infectious + removed ({}) exceeds population ({})",
            self.infectious + self.removed,
            self.total
        );
        Ok(())
    }
}

/// Population with a tracked high-risk subgroup, used by the containment model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StratifiedPopulation {
    #[serde(flatten)]
    pub base: Population,
    /// Observed 7-day incidence per 100k, reported as day 0.
    pub initial_incidence: f64,
    pub high_risk_fraction: f64,
    /// Share of susceptibles willing to be vaccinated.
    pub vaccination_readiness: f64,
}

impl StratifiedPopulation {
    pub fn new(
        base: Population,
        initial_incidence: f64,
        high_risk_fraction: f64,
        vaccination_readiness: f64,
    ) -> Self {
        Self { base, initial_incidence, high_risk_fraction, vaccination_readiness }
    }

    pub fn check(&self) -> Result<()> {
        self.base.check()?;
        ensure_param!(
            self.initial_incidence.is_finite() && self.initial_incidence >= 0.0,
            "initial_incidence",
            "must be finite and >= 0, got {}",
            self.initial_incidence
        );
        ensure_param!(
            (0.0..=1.0).contains(&self.high_risk_fraction),
            "high_risk_fraction",
            "must lie in [0, 1], got {}",
            self.high_risk_fraction
        );
        ensure_param!(
            (0.0..=1.0).contains(&self.vaccination_readiness),
            "vaccination_readiness",
            "must lie in [0, 1], got {}",
            self.vaccination_readiness
        );
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vaccine {
    /// People vaccinated per day.
    pub daily_capacity: f64,
    pub doses_required: u32,
    pub efficacy: f64,
}

impl Vaccine {
    pub fn new(daily_capacity: f64, doses_required: u32, efficacy: f64) -> Self {
        Self { daily_capacity, doses_required, efficacy }
    }

    pub fn check(&self) -> Result<()> {
        ensure_param!(
            self.daily_capacity.is_finite() && self.daily_capacity >= 0.0,
            "daily_capacity",
            "must be finite and >= 0, got {}",
            self.daily_capacity
        );
        ensure_param!(self.doses_required >= 1, "doses_required", "must be >= 1, got 0");
        ensure_param!(
            (0.0..=1.0).contains(&self.efficacy),
            "efficacy",
            "must lie in [0, 1], got {}",
            self.efficacy
        );
        Ok(())
    }

    /// Fully protected people per day of capacity.
    pub fn daily_courses(&self) -> f64 {
        self.daily_capacity / self.doses_required as f64
    }
}

/// Vaccination campaign with onset and delayed protection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VaccineRollout {
    #[serde(flatten)]
    pub vaccine: Vaccine,
    /// Days until a dose gives full protection.
    pub delay_days: u32,
    /// 0 if the campaign is already running.
    pub start_day: u32,
    pub initially_vaccinated: f64,
}

impl VaccineRollout {
    pub fn new(vaccine: Vaccine, delay_days: u32, start_day: u32, initially_vaccinated: f64) -> Self {
        Self { vaccine, delay_days, start_day, initially_vaccinated }
    }

    /// Protection from the campaign shows up strictly after this day.
    pub fn first_effective_day(&self) -> u32 {
        self.delay_days.saturating_add(self.start_day)
    }

    pub fn check(&self) -> Result<()> {
        self.vaccine.check()?;
        ensure_param!(
            self.initially_vaccinated.is_finite() && self.initially_vaccinated >= 0.0,
            "initially_vaccinated",
            "must be finite and >= 0, got {}",
            self.initially_vaccinated
        );
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Normal,
    Lockdown,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Normal => "normal",
            Mode::Lockdown => "lockdown",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lockdown controller settings. Thresholds are 7-day incidence per 100k.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LockdownPolicy {
    pub critical_incidence: f64,
    pub subcritical_incidence: f64,
    pub normal_reproduction_number: f64,
    pub lockdown_reproduction_number: f64,
    /// Mode on day 0. The run loop owns the live mode from there on.
    #[serde(default)]
    pub initial_mode: Mode,
}

impl LockdownPolicy {
    pub fn new(
        critical_incidence: f64,
        subcritical_incidence: f64,
        normal_reproduction_number: f64,
        lockdown_reproduction_number: f64,
        initial_mode: Mode,
    ) -> Self {
        Self {
            critical_incidence,
            subcritical_incidence,
            normal_reproduction_number,
            lockdown_reproduction_number,
            initial_mode,
        }
    }

    pub fn reproduction_number(&self, mode: Mode) -> f64 {
        match mode {
            Mode::Normal => self.normal_reproduction_number,
            Mode::Lockdown => self.lockdown_reproduction_number,
        }
    }

    /// Daily new cases above which a lockdown is imposed.
    pub fn critical_cases(&self, total_population: f64) -> f64 {
        daily_case_threshold(self.critical_incidence, total_population)
    }

    /// Daily new cases below which a lockdown is lifted.
    pub fn subcritical_cases(&self, total_population: f64) -> f64 {
        daily_case_threshold(self.subcritical_incidence, total_population)
    }

    pub fn check(&self) -> Result<()> {
        ensure_param!(
            self.critical_incidence.is_finite() && self.critical_incidence >= 0.0,
            "critical_incidence",
            "must be finite and >= 0, got {}",
            self.critical_incidence
        );
        ensure_param!(
            self.subcritical_incidence.is_finite() && self.subcritical_incidence >= 0.0,
            "subcritical_incidence",
            "must be finite and >= 0, got {}",
            self.subcritical_incidence
        );
        ensure_param!(
            self.normal_reproduction_number.is_finite() && self.normal_reproduction_number > 0.0,
            "normal_reproduction_number",
            "must be finite and > 0, got {}",
            self.normal_reproduction_number
        );
        ensure_param!(
            self.lockdown_reproduction_number.is_finite() && self.lockdown_reproduction_number > 0.0,
            "lockdown_reproduction_number",
            "must be finite and > 0, got {}",
            self.lockdown_reproduction_number
        );
        Ok(())
    }
}

/// Runs are at least one day long.
pub fn check_duration(duration_days: u32) -> Result<()> {
    ensure_param!(duration_days >= 1, "duration_days", "must be >= 1, got {}", duration_days);
    Ok(())
}
