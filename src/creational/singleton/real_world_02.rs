// Singleton - database connection.
// Creation is a check-and-create under a global lock so racing first callers
// still end up with one connection.

use std::collections::VecDeque;
use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use tracing::{debug, trace};

use crate::Result;

static INSTANCE: Mutex<Option<Arc<Database>>> = Mutex::new(None);
static CONSTRUCTED: AtomicUsize = AtomicUsize::new(0);

/// Oldest queries are dropped past this many.
pub const JOURNAL_CAPACITY: usize = 64;

#[derive(Debug)]
pub struct Database {
    journal: Mutex<VecDeque<String>>,
}

impl Database {
    fn connect() -> Self {
        CONSTRUCTED.fetch_add(1, Ordering::SeqCst);
        debug!("opening database connection");
        Self {
            journal: Mutex::new(VecDeque::with_capacity(JOURNAL_CAPACITY)),
        }
    }

    pub fn instance() -> Arc<Database> {
        let mut slot = INSTANCE.lock().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(slot.get_or_insert_with(|| Arc::new(Database::connect())))
    }

    /// Number of connections ever opened in this process.
    pub fn constructions() -> usize {
        CONSTRUCTED.load(Ordering::SeqCst)
    }

    /// Every query of the process funnels through here.
    pub fn query(&self, sql: &str) {
        trace!(sql, "query");
        let mut journal = self.journal.lock().unwrap_or_else(PoisonError::into_inner);
        if journal.len() == JOURNAL_CAPACITY {
            journal.pop_front();
        }
        journal.push_back(sql.to_string());
    }

    pub fn journal(&self) -> Vec<String> {
        let journal = self.journal.lock().unwrap_or_else(PoisonError::into_inner);
        journal.iter().cloned().collect()
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let db1 = Database::instance();
    let db2 = Database::instance();

    db1.query("SELECT Title, Body, Date FROM Page");
    db1.query("SELECT Name FROM Author");

    if Arc::ptr_eq(&db1, &db2) {
        writeln!(out, "Variable 'db1' holds the same object as variable 'db2'.")?;
    } else {
        writeln!(out, "Variable 'db1' does not hold the same object as variable 'db2'.")?;
    }
    Ok(())
}
