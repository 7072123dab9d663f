// Factory Method - cross-platform dialogs.
// The dialog owns the rendering logic; subclasses only pick the button.

use std::io::{self, Write};

use crate::Result;

pub trait Button {
    fn on_click(&self, action: &mut dyn FnMut(&str) -> io::Result<()>) -> io::Result<()>;
    fn render(&self, out: &mut dyn Write) -> io::Result<()>;
}

pub struct WindowsButton;

impl Button for WindowsButton {
    fn on_click(&self, action: &mut dyn FnMut(&str) -> io::Result<()>) -> io::Result<()> {
        action("Binds a native OS click event.")
    }

    fn render(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Renders a button in Windows style.")
    }
}

pub struct WebButton;

impl Button for WebButton {
    fn on_click(&self, action: &mut dyn FnMut(&str) -> io::Result<()>) -> io::Result<()> {
        action("Binds a web browser click event.")
    }

    fn render(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Renders a button in HTML style.")
    }
}

pub trait Dialog {
    fn create_button(&self) -> Box<dyn Button>;

    /// Business logic that only knows the abstract button.
    fn render(&self, out: &mut dyn Write) -> Result<()> {
        let ok_button = self.create_button();
        ok_button.on_click(&mut |message: &str| writeln!(out, "{message}"))?;
        ok_button.render(out)?;
        Ok(())
    }
}

pub struct WindowsDialog;

impl Dialog for WindowsDialog {
    fn create_button(&self) -> Box<dyn Button> {
        Box::new(WindowsButton)
    }
}

pub struct WebDialog;

impl Dialog for WebDialog {
    fn create_button(&self) -> Box<dyn Button> {
        Box::new(WebButton)
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "Rendering components in Windows style.")?;
    WindowsDialog.render(out)?;

    writeln!(out)?;

    writeln!(out, "Rendering components in Web style.")?;
    WebDialog.render(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_web_dialog() {
        let mut out = Vec::new();
        WebDialog.render(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Binds a web browser click event.\nRenders a button in HTML style.\n"
        );
    }

    #[test]
    fn test_click_handler_receives_message() {
        let mut seen = Vec::new();
        WindowsButton
            .on_click(&mut |message: &str| {
                seen.push(message.to_string());
                Ok(())
            })
            .unwrap();
        assert_eq!(seen, ["Binds a native OS click event."]);
    }
}
