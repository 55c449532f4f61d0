use std::path::PathBuf;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use train_ledger::queries::LedgerQueries;
use train_ledger::store::{TrainProvider, load_snapshot};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let Some(path) = std::env::args().nth(1).map(PathBuf::from) else {
        eprintln!("usage: train-ledger <snapshot.json>");
        return ExitCode::FAILURE;
    };

    let store = match load_snapshot(&path) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Failed to load snapshot {}: {e}", path.display());
            return ExitCode::FAILURE;
        }
    };
    println!("Loaded {} trains from {}", store.len(), path.display());

    let queries = LedgerQueries::new(&store);
    for train in store.all_trains() {
        let route = train.route();
        // Routes are non-empty by construction.
        let origin = route[0];
        let terminus = route[route.len() - 1];

        println!();
        println!(
            "Train {} {} -> {}, departs {}, {} seats",
            train.id(),
            origin,
            terminus,
            train.departure().format("%H:%M"),
            train.total_seats(),
        );

        match queries.available_seats(train.id(), origin, terminus) {
            Ok(seats) => println!("  available over the full route: {seats}"),
            Err(e) => println!("  available over the full route: {e}"),
        }
        match queries.oldest_age(train.id()) {
            Ok(age) => println!("  oldest passenger: {age}"),
            Err(e) => println!("  oldest passenger: {e}"),
        }
        for &station in route {
            match queries.boarding_count(train.id(), station) {
                Ok(count) => println!("  boarding at {station}: {count}"),
                Err(e) => println!("  boarding at {station}: {e}"),
            }
        }
    }

    ExitCode::SUCCESS
}
