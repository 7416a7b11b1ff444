//! Drops the bouncing ball through a co-simulation master loop and prints
//! the trajectory at each communication point.

use tether_core::Status;
use tether_models::BounceModel;
use tether_slave::{SimulationMode, Slave, TracingSink};

fn main() {
    let mut slave = Slave::instantiate(
        "ball",
        SimulationMode::CoSimulation,
        BounceModel,
        Box::new(TracingSink),
        false,
    )
    .expect("instantiation should succeed");

    assert_eq!(slave.setup_experiment(false, 0.0, 0.0, true, 2.0), Status::Ok);
    assert_eq!(slave.enter_initialization_mode(), Status::Ok);
    assert_eq!(slave.exit_initialization_mode(), Status::Ok);

    let step = 0.01;
    println!("{:>8}  {:>12}  {:>12}  {:>7}", "time", "position", "velocity", "bounces");

    for count in 0..200 {
        let start = f64::from(count) * step;
        if slave.do_step(start, step, true) != Status::Ok {
            eprintln!("step at t = {start} failed");
            break;
        }

        let mut state = [0.0; 2];
        slave.get_real(&[BounceModel::POSITION, BounceModel::VELOCITY], &mut state);
        let mut bounces = [0];
        slave.get_integer(&[BounceModel::BOUNCE_COUNT], &mut bounces);

        println!(
            "{:>8.3}  {:>12.6}  {:>12.6}  {:>7}",
            start + step,
            state[0],
            state[1],
            bounces[0]
        );
    }
}
