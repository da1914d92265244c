//! Interactive console for the car wash queue
//!
//! Displays a menu, reads one command per iteration, and dispatches
//! it against a single wash station. All failures are reported as
//! user-visible messages; the process always exits successfully.

use std::io;

use carwash_queue::{QueueOperation, WashStation};

mod shell;

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut station = WashStation::new();

    // The wash opens with a few cars already waiting
    for car in ["Tesla Model 3", "BMW X5", "Ford Mustang"] {
        station.apply_operation(QueueOperation::Add {
            car: car.to_string(),
        });
    }

    println!("Car wash queue initialized.");
    println!("Initial cars added to the queue: Tesla Model 3, BMW X5, Ford Mustang.");

    let stdin = io::stdin();
    let stdout = io::stdout();
    shell::run(&mut station, &mut stdin.lock(), &mut stdout.lock())
}
