// Factory Method - social network posters.
// `post` is fixed in the trait; the connector it talks to comes from the
// factory method each poster overrides.

use std::io::Write;

use tracing::debug;

use crate::Result;

pub trait SocialNetworkConnector {
    fn log_in(&self, out: &mut dyn Write) -> Result<()>;
    fn log_out(&self, out: &mut dyn Write) -> Result<()>;
    fn create_post(&self, content: &str, out: &mut dyn Write) -> Result<()>;
}

pub trait SocialNetworkPoster {
    fn social_network(&self) -> Box<dyn SocialNetworkConnector>;

    fn post(&self, content: &str, out: &mut dyn Write) -> Result<()> {
        let network = self.social_network();
        network.log_in(out)?;
        network.create_post(content, out)?;
        network.log_out(out)
    }
}

/// Shared shape of both connectors: who logs in, and whose timeline it is.
struct HttpConnector {
    network: &'static str,
    user: String,
    password: String,
}

impl SocialNetworkConnector for HttpConnector {
    fn log_in(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(
            out,
            "Send HTTP API request to log in user {} with password {}.",
            self.user, self.password
        )?;
        Ok(())
    }

    fn log_out(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Send HTTP API request to log out user {}.", self.user)?;
        Ok(())
    }

    fn create_post(&self, content: &str, out: &mut dyn Write) -> Result<()> {
        debug!(network = self.network, content, "creating post");
        writeln!(
            out,
            "Send HTTP API requests to create a post in {} timeline.",
            self.network
        )?;
        Ok(())
    }
}

pub struct FacebookPoster {
    login: String,
    password: String,
}

impl FacebookPoster {
    pub fn new(login: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            password: password.into(),
        }
    }
}

impl SocialNetworkPoster for FacebookPoster {
    fn social_network(&self) -> Box<dyn SocialNetworkConnector> {
        Box::new(HttpConnector {
            network: "Facebook",
            user: self.login.clone(),
            password: self.password.clone(),
        })
    }
}

pub struct LinkedInPoster {
    email: String,
    password: String,
}

impl LinkedInPoster {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl SocialNetworkPoster for LinkedInPoster {
    fn social_network(&self) -> Box<dyn SocialNetworkConnector> {
        Box::new(HttpConnector {
            network: "LinkedIn",
            user: self.email.clone(),
            password: self.password.clone(),
        })
    }
}

pub struct Application {
    creator: Box<dyn SocialNetworkPoster>,
}

impl Application {
    pub fn new(creator: Box<dyn SocialNetworkPoster>) -> Self {
        Self { creator }
    }

    pub fn post(&self, out: &mut dyn Write) -> Result<()> {
        self.creator.post("Hello world!", out)?;
        self.creator.post("I had a large hamburger this morning!", out)
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "Testing Facebook:")?;
    Application::new(Box::new(FacebookPoster::new("john.smith", "Test@123"))).post(out)?;

    writeln!(out)?;

    writeln!(out, "Testing LinkedIn:")?;
    Application::new(Box::new(LinkedInPoster::new(
        "john.smith@example.com",
        "Test@123",
    )))
    .post(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_post_sequence() {
        let mut out = Vec::new();
        LinkedInPoster::new("ann@example.com", "pw")
            .post("hi", &mut out)
            .unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Send HTTP API request to log in user ann@example.com with password pw.\n\
             Send HTTP API requests to create a post in LinkedIn timeline.\n\
             Send HTTP API request to log out user ann@example.com.\n"
        );
    }

    #[test]
    fn test_application_posts_twice() {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("Facebook timeline").count(), 2);
        assert_eq!(text.matches("LinkedIn timeline").count(), 2);
    }
}
