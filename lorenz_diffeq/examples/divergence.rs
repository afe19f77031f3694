//! Demonstrates divergence handling: an extreme step size blows up within
//! a few steps, the session auto-pauses, and the record stays finite.

use lorenz_diffeq::{Session, SimConfig, SimError};

fn main() -> Result<(), SimError> {
    let mut session = Session::new(SimConfig::default().with_dt(1000.0))?;
    session.resume();

    loop {
        match session.step() {
            Ok(()) => println!(
                "t = {:8.1}  |x| = {:.3e}",
                session.time(),
                session.state().x.abs()
            ),
            Err(e) => {
                println!("halted: {e}");
                break;
            }
        }
    }

    println!(
        "session paused: {}, {} finite points retained",
        !session.is_running(),
        session.trajectory().len()
    );
    Ok(())
}
