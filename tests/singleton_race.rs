//! Racing first access to the database singleton.
//!
//! Lives in its own test binary so no earlier call has opened the connection.

use std::sync::{Arc, Barrier};

use design_patterns::creational::singleton::real_world_02::Database;

const THREADS: usize = 32;

#[test]
fn racing_first_callers_share_one_connection() {
    assert_eq!(Database::constructions(), 0);

    let barrier = Barrier::new(THREADS);
    let handles: Vec<Arc<Database>> = crossbeam::scope(|s| {
        let workers: Vec<_> = (0..THREADS)
            .map(|_| {
                s.spawn(|_| {
                    barrier.wait();
                    Database::instance()
                })
            })
            .collect();
        workers.into_iter().map(|w| w.join().unwrap()).collect()
    })
    .unwrap();

    assert_eq!(Database::constructions(), 1);
    assert!(handles.iter().all(|db| Arc::ptr_eq(db, &handles[0])));
}
