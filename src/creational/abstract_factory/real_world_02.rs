// Abstract Factory - GUI widgets.
// The application picks a factory for the current platform once, at startup,
// and paints widgets through the abstract interfaces only.

use std::io::Write;

use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Windows,
    MacOs,
}

impl Theme {
    fn label(self) -> &'static str {
        match self {
            Theme::Windows => "Windows",
            Theme::MacOs => "MacOS",
        }
    }
}

pub trait Button {
    fn theme(&self) -> Theme;

    fn paint(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Paints a button in {} style.", self.theme().label())?;
        Ok(())
    }
}

pub trait Checkbox {
    fn theme(&self) -> Theme;

    fn paint(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Paints a checkbox in {} style.", self.theme().label())?;
        Ok(())
    }
}

pub struct WinButton;
pub struct MacButton;
pub struct WinCheckbox;
pub struct MacCheckbox;

impl Button for WinButton {
    fn theme(&self) -> Theme {
        Theme::Windows
    }
}

impl Button for MacButton {
    fn theme(&self) -> Theme {
        Theme::MacOs
    }
}

impl Checkbox for WinCheckbox {
    fn theme(&self) -> Theme {
        Theme::Windows
    }
}

impl Checkbox for MacCheckbox {
    fn theme(&self) -> Theme {
        Theme::MacOs
    }
}

pub trait GuiFactory {
    fn create_button(&self) -> Box<dyn Button>;
    fn create_checkbox(&self) -> Box<dyn Checkbox>;
}

pub struct WinFactory;

impl GuiFactory for WinFactory {
    fn create_button(&self) -> Box<dyn Button> {
        Box::new(WinButton)
    }
    fn create_checkbox(&self) -> Box<dyn Checkbox> {
        Box::new(WinCheckbox)
    }
}

pub struct MacFactory;

impl GuiFactory for MacFactory {
    fn create_button(&self) -> Box<dyn Button> {
        Box::new(MacButton)
    }
    fn create_checkbox(&self) -> Box<dyn Checkbox> {
        Box::new(MacCheckbox)
    }
}

pub struct Application {
    button: Box<dyn Button>,
    checkbox: Box<dyn Checkbox>,
}

impl Application {
    pub fn new(factory: &dyn GuiFactory) -> Self {
        Self {
            button: factory.create_button(),
            checkbox: factory.create_checkbox(),
        }
    }

    pub fn paint(&self, out: &mut dyn Write) -> Result<()> {
        self.button.paint(out)?;
        self.checkbox.paint(out)
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "Rendering components in Windows style.")?;
    Application::new(&WinFactory).paint(out)?;

    writeln!(out)?;

    writeln!(out, "Rendering components in MacOS style.")?;
    Application::new(&MacFactory).paint(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paint_both_themes() {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines,
            vec![
                "Rendering components in Windows style.",
                "Paints a button in Windows style.",
                "Paints a checkbox in Windows style.",
                "",
                "Rendering components in MacOS style.",
                "Paints a button in MacOS style.",
                "Paints a checkbox in MacOS style.",
            ]
        );
    }

    #[test]
    fn test_widgets_share_theme() {
        let factories: [&dyn GuiFactory; 2] = [&WinFactory, &MacFactory];
        for factory in factories {
            assert_eq!(
                factory.create_button().theme(),
                factory.create_checkbox().theme()
            );
        }
    }
}
