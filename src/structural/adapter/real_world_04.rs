// Adapter - third-party auth SDKs.
// Facebook's SDK already matches `AuthService`; Twitter's is wrapped.

use std::io::Write;

use crate::Result;

pub trait AuthService {
    fn present_auth_flow(&self, out: &mut dyn Write) -> Result<()>;
}

pub struct FacebookAuthSdk;

impl FacebookAuthSdk {
    pub fn present_auth_flow(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Facebook WebView has been shown.")?;
        Ok(())
    }
}

impl AuthService for FacebookAuthSdk {
    fn present_auth_flow(&self, out: &mut dyn Write) -> Result<()> {
        FacebookAuthSdk::present_auth_flow(self, out)
    }
}

pub struct TwitterAuthSdk;

impl TwitterAuthSdk {
    pub fn start_authorization(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Twitter WebView has been shown. Users will be happy :)")?;
        Ok(())
    }
}

impl AuthService for TwitterAuthSdk {
    fn present_auth_flow(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(
            out,
            "The Adapter is called! Redirecting to the original method..."
        )?;
        self.start_authorization(out)
    }
}

pub fn start_authorization(service: &dyn AuthService, out: &mut dyn Write) -> Result<()> {
    service.present_auth_flow(out)
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "Starting an authorization via Facebook")?;
    start_authorization(&FacebookAuthSdk, out)?;

    writeln!(out)?;

    writeln!(out, "Starting an authorization via Twitter.")?;
    start_authorization(&TwitterAuthSdk, out)
}
