//! SIRV model with a lockdown controller.
//!
//! The controller switches the reproduction number between a normal and a
//! lockdown level using two thresholds on daily new cases: a lockdown starts
//! when new cases in the high-risk group exceed the critical level and ends
//! once total new cases fall below the subcritical level. Trigger checks run
//! once per day, after that day's new cases are known.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::Result;
use crate::incidence::{effective_reproduction_number, new_infections, weekly_incidence_per_100k};
use crate::model::params::{
    check_duration, Disease, LockdownPolicy, Mode, StratifiedPopulation, VaccineRollout,
};
use crate::model::trajectory::{ContainmentRecord, Trajectory};

/// Compartments carried from one day to the next.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContainmentState {
    pub s: f64,
    pub i: f64,
    pub r: f64,
    pub v: f64,
    /// Share of the susceptibles belonging to the high-risk group.
    pub high_risk_fraction: f64,
}

/// Lockdown controller state. Local to one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controller {
    pub mode: Mode,
    /// Days counted in the episode currently open.
    pub episode_days: u32,
}

impl Controller {
    pub fn new(mode: Mode) -> Self {
        Self { mode, episode_days: 0 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepOutcome {
    pub state: ContainmentState,
    pub controller: Controller,
    pub new_cases: f64,
    pub vaccinated_today: f64,
    /// Whether this day counted towards a lockdown episode.
    pub lockdown_day: bool,
    /// Length of the episode that ended today, if any.
    pub closed_episode: Option<u32>,
}

/// Values fixed from the initial population when the model is built.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Thresholds {
    critical_high_risk: f64,
    subcritical: f64,
    max_vaccinated: f64,
    protected_high_risk: f64,
    daily_courses: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContainmentModel {
    pub disease: Disease,
    pub population: StratifiedPopulation,
    pub rollout: VaccineRollout,
    pub lockdown: LockdownPolicy,
    thresholds: Thresholds,
}

impl ContainmentModel {
    pub fn new(
        disease: Disease,
        population: StratifiedPopulation,
        rollout: VaccineRollout,
        lockdown: LockdownPolicy,
    ) -> Result<Self> {
        disease.check()?;
        population.check()?;
        rollout.check()?;
        lockdown.check()?;

        let n = population.base.total;
        let s0 = population.base.susceptible();
        let hr0 = population.high_risk_fraction;
        let readiness = population.vaccination_readiness;
        let efficacy = rollout.vaccine.efficacy;

        // Willing pool and the protected-pool threshold are sized once from
        // the initial susceptibles, not the current ones.
        let thresholds = Thresholds {
            critical_high_risk: lockdown.critical_cases(n) * hr0,
            subcritical: lockdown.subcritical_cases(n),
            max_vaccinated: s0 * readiness,
            protected_high_risk: s0 * hr0 * ((1.0 - readiness) + readiness * (1.0 - efficacy)),
            daily_courses: rollout.vaccine.daily_courses(),
        };

        Ok(Self { disease, population, rollout, lockdown, thresholds })
    }

    pub fn initial_state(&self) -> ContainmentState {
        let base = &self.population.base;
        ContainmentState {
            s: base.susceptible(),
            i: base.infectious,
            r: base.removed,
            v: self.rollout.initially_vaccinated,
            high_risk_fraction: self.population.high_risk_fraction,
        }
    }

    pub fn initial_controller(&self) -> Controller {
        Controller::new(self.lockdown.initial_mode)
    }

    /// Upper bound on the vaccinated compartment.
    pub fn max_vaccinated(&self) -> f64 {
        self.thresholds.max_vaccinated
    }

    /// Daily new cases below which a lockdown is lifted.
    pub fn subcritical_cases(&self) -> f64 {
        self.thresholds.subcritical
    }

    /// Advance one day (`day >= 1`).
    pub fn step(&self, day: u32, state: ContainmentState, controller: Controller) -> StepOutcome {
        let n = self.population.base.total;
        let gamma = self.disease.infectivity_rate;
        let delta = self.disease.waning_rate();
        let efficacy = self.rollout.vaccine.efficacy;
        let th = &self.thresholds;
        let ContainmentState { s, i, r, v, high_risk_fraction: hr } = state;
        let Controller { mut mode, mut episode_days } = controller;

        // Regime in force at the start of the day.
        let mut r_eff = self.lockdown.reproduction_number(mode);

        let new_cases = new_infections(gamma, r_eff, s, i, n);
        let new_high_risk = new_cases * hr;

        // A lockdown imposed today only lowers R from tomorrow on.
        if new_high_risk > th.critical_high_risk && mode != Mode::Lockdown {
            mode = Mode::Lockdown;
            debug!(day, new_cases, "lockdown imposed");
        }

        let lockdown_day = mode == Mode::Lockdown;
        if lockdown_day {
            episode_days += 1;
        }

        let mut closed_episode = None;
        if new_cases < th.subcritical && mode == Mode::Lockdown {
            mode = Mode::Normal;
            r_eff = self.lockdown.normal_reproduction_number;
            closed_episode = Some(episode_days);
            debug!(day, new_cases, episode_days, "lockdown lifted");
            episode_days = 0;
        }

        let vaccinated_today = if v < th.max_vaccinated && day > self.rollout.first_effective_day() {
            th.daily_courses.min(s).min(th.max_vaccinated - v)
        } else {
            0.0
        };

        let ds = -gamma * r_eff * i * s / n - efficacy * vaccinated_today + delta * (r + v);
        let di = gamma * (effective_reproduction_number(r_eff, s, n) - 1.0) * i;
        let dr = gamma * i - delta * r;

        let v_next = (v + vaccinated_today - delta * v).max(0.0);
        let s_next = (s + ds).max(0.0);
        let i_next = (i + di).max(0.0);
        let r_next = (r + dr).max(0.0);

        // High-risk susceptibles: those left after today's infections, then
        // vaccinated first once the pool exceeds the part vaccination cannot
        // protect (unwilling or failed).
        let mut s_high_risk = hr * s - di * hr;
        if s_high_risk > th.protected_high_risk {
            s_high_risk = s_high_risk - vaccinated_today + delta * v_next + delta * r_next;
        }
        let hr_next = if s_next > 0.0 {
            (s_high_risk.max(0.0) / s_next).min(1.0)
        } else {
            hr
        };

        StepOutcome {
            state: ContainmentState {
                s: s_next,
                i: i_next,
                r: r_next,
                v: v_next,
                high_risk_fraction: hr_next,
            },
            controller: Controller { mode, episode_days },
            new_cases,
            vaccinated_today,
            lockdown_day,
            closed_episode,
        }
    }

    /// Run for `duration_days` days, day 0 being the initial state.
    pub fn simulate(&self, duration_days: u32) -> Result<Trajectory<ContainmentRecord>> {
        check_duration(duration_days)?;
        let n = self.population.base.total;

        let mut state = self.initial_state();
        let mut controller = self.initial_controller();
        let mut records = Vec::with_capacity(duration_days as usize);
        let mut episodes = Vec::new();

        records.push(ContainmentRecord {
            day: 0,
            susceptible: state.s,
            infectious: state.i,
            removed: state.r,
            vaccinated: state.v,
            incidence: self.population.initial_incidence,
            high_risk_fraction: state.high_risk_fraction,
            mode: controller.mode,
            lockdown_day: false,
        });

        for day in 1..duration_days {
            let out = self.step(day, state, controller);
            state = out.state;
            controller = out.controller;
            if let Some(len) = out.closed_episode {
                episodes.push(len);
            }
            records.push(ContainmentRecord {
                day,
                susceptible: state.s,
                infectious: state.i,
                removed: state.r,
                vaccinated: state.v,
                incidence: weekly_incidence_per_100k(out.new_cases, n),
                high_risk_fraction: state.high_risk_fraction,
                mode: controller.mode,
                lockdown_day: out.lockdown_day,
            });
        }

        info!(
            days = duration_days,
            episodes = episodes.len(),
            final_mode = %controller.mode,
            open_episode_days = controller.episode_days,
            "containment run complete"
        );
        Ok(Trajectory::new(records, episodes))
    }
}
