use pandemic::{Disease, Population, SirsModel, Vaccine};

fn main() -> anyhow::Result<()> {
    let covid = Disease::new(3.0, 0.1, 365.0);
    let germany = Population::new(83_900_000.0, 1_000.0, 0.0);
    let vaccine = Vaccine::new(200_000.0, 2, 0.9);

    let model = SirsModel::new(covid, germany, vaccine)?;
    let traj = model.simulate(1800)?;

    // Millions of people, every 30th day
    println!("day,susceptible_m,infectious_m,removed_m,incidence");
    for r in traj.iter().step_by(30) {
        println!(
            "{},{:.3},{:.3},{:.3},{:.1}",
            r.day,
            r.susceptible / 1e6,
            r.infectious / 1e6,
            r.removed / 1e6,
            r.incidence
        );
    }

    Ok(())
}
