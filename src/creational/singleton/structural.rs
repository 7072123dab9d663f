// Singleton - structural skeleton.

use std::io::Write;
use std::sync::OnceLock;

use crate::Result;

#[derive(Debug)]
pub struct Singleton {
    _private: (),
}

impl Singleton {
    pub fn instance() -> &'static Singleton {
        static INSTANCE: OnceLock<Singleton> = OnceLock::new();
        INSTANCE.get_or_init(|| Singleton { _private: () })
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let s1 = Singleton::instance();
    let s2 = Singleton::instance();

    if std::ptr::eq(s1, s2) {
        writeln!(out, "Objects are the same instance")?;
    }
    Ok(())
}
