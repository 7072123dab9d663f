// Singleton - load balancer.
// Every caller shares one balancer; requests go to a random server.

use std::fmt;
use std::io::Write;
use std::sync::OnceLock;

use rand::Rng;

use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Server {
    pub name: String,
    pub ip: String,
}

impl fmt::Display for Server {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.name, self.ip)
    }
}

#[derive(Debug)]
pub struct LoadBalancer {
    servers: Vec<Server>,
}

impl LoadBalancer {
    pub fn global() -> &'static LoadBalancer {
        static BALANCER: OnceLock<LoadBalancer> = OnceLock::new();
        BALANCER.get_or_init(|| LoadBalancer {
            servers: (1..=5)
                .map(|n| Server {
                    name: format!("Server{n}"),
                    ip: format!("120.14.220.{}", 10 + n),
                })
                .collect(),
        })
    }

    pub fn servers(&self) -> &[Server] {
        &self.servers
    }

    pub fn next_server(&self) -> &Server {
        self.next_server_with(&mut rand::thread_rng())
    }

    pub fn next_server_with<R: Rng + ?Sized>(&self, rng: &mut R) -> &Server {
        &self.servers[rng.gen_range(0..self.servers.len())]
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let b1 = LoadBalancer::global();
    let b2 = LoadBalancer::global();
    let b3 = LoadBalancer::global();
    let b4 = LoadBalancer::global();

    if std::ptr::eq(b1, b2) && std::ptr::eq(b2, b3) && std::ptr::eq(b3, b4) {
        writeln!(out, "Same instance")?;
        writeln!(out)?;
    }

    let balancer = LoadBalancer::global();
    for _ in 0..15 {
        writeln!(out, "Dispatch request to: {}", balancer.next_server())?;
    }

    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_output_shape() {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 18);
        assert_eq!(lines[0], "Same instance");
        assert_eq!(lines[1], "");
        assert!(lines[2..17]
            .iter()
            .all(|line| line.starts_with("Dispatch request to: Server")));
        assert_eq!(lines[17], "");
    }

    #[test]
    fn test_server_list() {
        let servers = LoadBalancer::global().servers();
        assert_eq!(servers.len(), 5);
        assert_eq!(servers[2].to_string(), "Server3 [120.14.220.13]");
    }

    #[test]
    fn test_seeded_dispatch_stays_in_pool() {
        let balancer = LoadBalancer::global();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let server = balancer.next_server_with(&mut rng);
            assert!(balancer.servers().contains(server));
        }
    }
}
