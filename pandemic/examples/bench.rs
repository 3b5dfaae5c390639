use std::time::Instant;

use pandemic::Scenario;

fn main() -> anyhow::Result<()> {
    let scenarios = [Scenario::germany_sirs(), Scenario::germany_containment()];
    let repeats = 200;

    println!("model,days,repeats,total_ms,per_run_us");
    for scenario in &scenarios {
        let start = Instant::now();
        let mut days = 0;
        for _ in 0..repeats {
            days = scenario.run()?.len();
        }
        let elapsed = start.elapsed();
        let total_ms = elapsed.as_secs_f64() * 1000.0;
        println!(
            "{},{},{},{:.3},{:.1}",
            scenario.model_kind(),
            days,
            repeats,
            total_ms,
            total_ms * 1000.0 / repeats as f64
        );
    }

    Ok(())
}
