use pandemic::Scenario;

/// Days in lockdown for a range of critical incidences, one thread per run.
fn main() -> anyhow::Result<()> {
    let Scenario::Containment(base) = Scenario::germany_containment() else {
        anyhow::bail!("expected a containment scenario");
    };
    let criticals = [50.0, 100.0, 150.0, 215.0, 300.0];

    let results: Vec<anyhow::Result<(f64, Vec<u32>)>> = std::thread::scope(|scope| {
        let handles: Vec<_> = criticals
            .iter()
            .map(|&critical| {
                let mut scenario = base.clone();
                scenario.lockdown.critical_incidence = critical;
                scope.spawn(move || -> anyhow::Result<(f64, Vec<u32>)> {
                    let run = Scenario::Containment(scenario).run()?;
                    Ok((critical, run.lockdown_episodes().to_vec()))
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().map_err(|_| anyhow::anyhow!("sweep worker panicked"))?)
            .collect()
    });

    println!("critical_incidence,episodes,total_lockdown_days");
    for res in results {
        let (critical, episodes) = res?;
        println!("{:.0},{},{}", critical, episodes.len(), episodes.iter().sum::<u32>());
    }

    Ok(())
}
