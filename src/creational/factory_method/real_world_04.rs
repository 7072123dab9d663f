// Factory Method - presentation projectors.
// Switching transport creates a new projector through the factory method and
// carries the current page over to it.

use std::io::Write;

use crate::Result;

pub trait Projector {
    fn transport(&self) -> &'static str;
    fn current_page(&self) -> u32;
    fn update(&mut self, page: u32);

    fn present(&self, info: &str, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Info is presented over {}: {info}", self.transport())?;
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct WifiProjector {
    page: u32,
}

impl Projector for WifiProjector {
    fn transport(&self) -> &'static str {
        "Wifi"
    }
    fn current_page(&self) -> u32 {
        self.page
    }
    fn update(&mut self, page: u32) {
        self.page = page;
    }
}

#[derive(Debug, Default)]
pub struct BluetoothProjector {
    page: u32,
}

impl Projector for BluetoothProjector {
    fn transport(&self) -> &'static str {
        "Bluetooth"
    }
    fn current_page(&self) -> u32 {
        self.page
    }
    fn update(&mut self, page: u32) {
        self.page = page;
    }
}

pub trait ProjectorFactory {
    fn create_projector(&self) -> Box<dyn Projector>;

    fn synced_projector(&self, previous: &dyn Projector) -> Box<dyn Projector> {
        let mut projector = self.create_projector();
        projector.update(previous.current_page());
        projector
    }
}

pub struct WifiFactory;

impl ProjectorFactory for WifiFactory {
    fn create_projector(&self) -> Box<dyn Projector> {
        Box::new(WifiProjector::default())
    }
}

pub struct BluetoothFactory;

impl ProjectorFactory for BluetoothFactory {
    fn create_projector(&self) -> Box<dyn Projector> {
        Box::new(BluetoothProjector::default())
    }
}

#[derive(Default)]
pub struct Application {
    current: Option<Box<dyn Projector>>,
}

impl Application {
    pub fn present(
        &mut self,
        info: &str,
        factory: &dyn ProjectorFactory,
        out: &mut dyn Write,
    ) -> Result<()> {
        let projector = match self.current.as_deref() {
            Some(previous) => factory.synced_projector(previous),
            None => factory.create_projector(),
        };
        self.current.insert(projector).present(info, out)
    }

    pub fn turn_to(&mut self, page: u32) {
        if let Some(projector) = self.current.as_mut() {
            projector.update(page);
        }
    }

    pub fn current_page(&self) -> Option<u32> {
        self.current.as_ref().map(|projector| projector.current_page())
    }

    pub fn transport(&self) -> Option<&'static str> {
        self.current.as_ref().map(|projector| projector.transport())
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let mut app = Application::default();
    let info = "Very important info of the presentation.";

    writeln!(out, "Testing Wifi:")?;
    app.present(info, &WifiFactory, out)?;
    app.turn_to(3);

    writeln!(out)?;

    writeln!(out, "Testing Bluetooth:")?;
    app.present(info, &BluetoothFactory, out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output() {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Testing Wifi:\n\
             Info is presented over Wifi: Very important info of the presentation.\n\
             \n\
             Testing Bluetooth:\n\
             Info is presented over Bluetooth: Very important info of the presentation.\n"
        );
    }

    #[test]
    fn test_switching_keeps_page() {
        let mut sink = Vec::new();
        let mut app = Application::default();
        assert_eq!(app.current_page(), None);

        app.present("slides", &WifiFactory, &mut sink).unwrap();
        app.turn_to(7);
        app.present("slides", &BluetoothFactory, &mut sink).unwrap();

        assert_eq!(app.current_page(), Some(7));
    }

    struct BrokenSink;

    impl Write for BrokenSink {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_failed_present_keeps_new_projector() {
        let mut sink = Vec::new();
        let mut app = Application::default();
        app.present("slides", &WifiFactory, &mut sink).unwrap();
        app.turn_to(4);

        assert!(app.present("slides", &BluetoothFactory, &mut BrokenSink).is_err());
        assert_eq!(app.transport(), Some("Bluetooth"));
        assert_eq!(app.current_page(), Some(4));

        sink.clear();
        app.turn_to(5);
        app.present("slides", &WifiFactory, &mut sink).unwrap();
        assert_eq!(app.transport(), Some("Wifi"));
        assert_eq!(app.current_page(), Some(5));
    }
}
