use lorenz_diffeq::{Session, SimConfig, SimError};

fn main() -> Result<(), SimError> {
    let config = SimConfig::default().with_steps_per_frame(10);
    let mut session = Session::new(config)?;
    session.resume();

    // 100 ticks of 10 steps each: t = 0 .. 10
    println!(
        "{:>10} {:>12} {:>12} {:>12}",
        "t", "x", "y", "z"
    );
    for _ in 0..100 {
        session.advance_frame()?;
        let x = session.state();
        println!(
            "{:10.3} {:12.6} {:12.6} {:12.6}",
            session.time(),
            x.x,
            x.y,
            x.z
        );
    }

    println!(
        "\n{} points retained (bound {})",
        session.trajectory().len(),
        session.config().max_points
    );
    Ok(())
}
