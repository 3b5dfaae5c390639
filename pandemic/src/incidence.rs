/// Population size the lockdown thresholds are quoted against.
pub const REFERENCE_POPULATION: f64 = 7e5;

const PER_100K: f64 = 1e5;
const DAYS_PER_WEEK: f64 = 7.0;

/// 7-day incidence per 100k from one day's new cases.
///
/// A single day's flow scaled by 7, not a trailing window sum.
/// incidence = new_cases * 7 * 1e5 / N
pub fn weekly_incidence_per_100k(new_cases: f64, total_population: f64) -> f64 {
    new_cases * DAYS_PER_WEEK * PER_100K / total_population
}

/// Convert a threshold in 7-day incidence per 100k into daily new cases for a
/// population of `total_population`.
pub fn daily_case_threshold(per_100k_weekly: f64, total_population: f64) -> f64 {
    per_100k_weekly * (total_population / REFERENCE_POPULATION)
}

/// New infections over one day: gamma * R * S * I / N
pub fn new_infections(gamma: f64, r: f64, s: f64, i: f64, n: f64) -> f64 {
    gamma * r * s * i / n
}

/// Effective reproduction number R * S / N.
pub fn effective_reproduction_number(r: f64, susceptible: f64, total_population: f64) -> f64 {
    r * susceptible / total_population
}
