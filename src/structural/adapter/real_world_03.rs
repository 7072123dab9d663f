// Adapter - Slack behind an email-shaped notification interface.

use std::io::Write;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::Result;

static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<.*?>").unwrap());

/// Removes HTML tags, leaving their text content.
pub fn strip_tags(source: &str) -> String {
    TAG.replace_all(source, "").into_owned()
}

pub trait Notification {
    fn send(&self, title: &str, message: &str, out: &mut dyn Write) -> Result<()>;
}

pub struct EmailNotification {
    admin_email: String,
}

impl EmailNotification {
    pub fn new(admin_email: impl Into<String>) -> Self {
        Self {
            admin_email: admin_email.into(),
        }
    }
}

impl Notification for EmailNotification {
    fn send(&self, title: &str, message: &str, out: &mut dyn Write) -> Result<()> {
        writeln!(
            out,
            "Sent email with title '{title}' to '{}' that says '{message}'.",
            self.admin_email
        )?;
        Ok(())
    }
}

/// Third-party client with its own vocabulary.
pub struct SlackApi {
    login: String,
    api_key: String,
}

impl SlackApi {
    pub fn new(login: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            api_key: api_key.into(),
        }
    }

    pub fn log_in(&self, out: &mut dyn Write) -> Result<()> {
        tracing::trace!(login = %self.login, key_len = self.api_key.len(), "slack login");
        writeln!(out, "Logged in to a slack account '{}'.", self.login)?;
        Ok(())
    }

    pub fn send_message(&self, chat_id: &str, message: &str, out: &mut dyn Write) -> Result<()> {
        writeln!(
            out,
            "Posted following message into the '{chat_id}' chat: '{message}'."
        )?;
        Ok(())
    }
}

pub struct SlackNotification {
    api: SlackApi,
    chat_id: String,
}

impl SlackNotification {
    pub fn new(api: SlackApi, chat_id: impl Into<String>) -> Self {
        Self {
            api,
            chat_id: chat_id.into(),
        }
    }
}

impl Notification for SlackNotification {
    fn send(&self, title: &str, message: &str, out: &mut dyn Write) -> Result<()> {
        let slack_message = format!("#{title}# {}", strip_tags(message));
        self.api.log_in(out)?;
        self.api.send_message(&self.chat_id, &slack_message, out)
    }
}

pub fn send_alert(notification: &dyn Notification, out: &mut dyn Write) -> Result<()> {
    notification.send(
        "Website is down!",
        "<strong style='color:red;font-size:50px;'>Alert!</strong> Our website is not responding. Call admins and bring it up!",
        out,
    )
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    writeln!(
        out,
        "Client code is designed correctly and works with email notifications:"
    )?;
    send_alert(&EmailNotification::new("john.smith@example.com"), out)?;

    writeln!(out)?;

    writeln!(out, "The same client code can work with other classes via adapter:")?;
    let slack = SlackNotification::new(
        SlackApi::new("john.smith", "xxxxxxxxxx"),
        "Example.com Developers",
    );
    send_alert(&slack, out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_tags() {
        assert_eq!(strip_tags("<b>bold</b> and <i>it</i>"), "bold and it");
        assert_eq!(strip_tags("no tags"), "no tags");
    }

    #[test]
    fn test_slack_message() {
        let mut out = Vec::new();
        let slack = SlackNotification::new(SlackApi::new("ann", "k"), "ops");
        send_alert(&slack, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Logged in to a slack account 'ann'.\n\
             Posted following message into the 'ops' chat: '#Website is down!# Alert! Our website is not responding. Call admins and bring it up!'.\n"
        );
    }

    #[test]
    fn test_email_keeps_markup() {
        let mut out = Vec::new();
        send_alert(&EmailNotification::new("ops@example.com"), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("to 'ops@example.com' that says '<strong"));
    }
}
