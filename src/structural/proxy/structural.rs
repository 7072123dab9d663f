// Proxy - structural skeleton.
// The real subject is only built on the first request.

use std::cell::OnceCell;
use std::io::Write;

use crate::Result;

pub trait Subject {
    fn request(&self, out: &mut dyn Write) -> Result<()>;
}

#[derive(Debug)]
pub struct RealSubject;

impl Subject for RealSubject {
    fn request(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Called RealSubject.Request()")?;
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct Proxy {
    real_subject: OnceCell<RealSubject>,
}

impl Proxy {
    pub fn is_created(&self) -> bool {
        self.real_subject.get().is_some()
    }
}

impl Subject for Proxy {
    fn request(&self, out: &mut dyn Write) -> Result<()> {
        self.real_subject.get_or_init(|| RealSubject).request(out)
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let proxy = Proxy::default();
    proxy.request(out)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output() {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Called RealSubject.Request()\n\n");
    }

    #[test]
    fn test_created_lazily() {
        let proxy = Proxy::default();
        assert!(!proxy.is_created());
        proxy.request(&mut Vec::new()).unwrap();
        assert!(proxy.is_created());
    }
}
