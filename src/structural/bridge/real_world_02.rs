// Bridge - remotes over devices.
// Remotes are the abstraction and devices the implementation; any remote
// drives any device.

use std::io::Write;

use crate::Result;

const RULE: &str = "--------------------------------------------------";

/// State every device carries. Volume is kept within `[0, 100]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceState {
    on: bool,
    volume: i32,
    channel: i32,
}

impl Default for DeviceState {
    fn default() -> Self {
        Self {
            on: false,
            volume: 30,
            channel: 1,
        }
    }
}

pub trait Device {
    fn label(&self) -> &'static str;
    fn state(&self) -> &DeviceState;
    fn state_mut(&mut self) -> &mut DeviceState;

    fn is_enabled(&self) -> bool {
        self.state().on
    }
    fn enable(&mut self) {
        self.state_mut().on = true;
    }
    fn disable(&mut self) {
        self.state_mut().on = false;
    }
    fn volume(&self) -> i32 {
        self.state().volume
    }
    fn set_volume(&mut self, volume: i32) {
        self.state_mut().volume = volume.clamp(0, 100);
    }
    fn channel(&self) -> i32 {
        self.state().channel
    }
    fn set_channel(&mut self, channel: i32) {
        self.state_mut().channel = channel;
    }

    fn print_status(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{RULE}")?;
        writeln!(out, "| I'm {}.", self.label())?;
        let power = if self.is_enabled() { "enabled" } else { "disabled" };
        writeln!(out, "| I'm {power}.")?;
        writeln!(out, "| Current volume is {}%.", self.volume())?;
        writeln!(out, "| Current channel is {}.", self.channel())?;
        writeln!(out, "{RULE}")?;
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct Radio {
    state: DeviceState,
}

impl Device for Radio {
    fn label(&self) -> &'static str {
        "Radio"
    }
    fn state(&self) -> &DeviceState {
        &self.state
    }
    fn state_mut(&mut self) -> &mut DeviceState {
        &mut self.state
    }
}

#[derive(Debug, Default)]
pub struct Tv {
    state: DeviceState,
}

impl Device for Tv {
    fn label(&self) -> &'static str {
        "TV set"
    }
    fn state(&self) -> &DeviceState {
        &self.state
    }
    fn state_mut(&mut self) -> &mut DeviceState {
        &mut self.state
    }
}

pub trait Remote {
    fn device(&mut self) -> &mut dyn Device;

    fn power(&mut self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Remote: power toggle.")?;
        let device = self.device();
        if device.is_enabled() {
            device.disable();
        } else {
            device.enable();
        }
        Ok(())
    }

    fn volume_down(&mut self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Remote: volume down.")?;
        let device = self.device();
        device.set_volume(device.volume() - 10);
        Ok(())
    }

    fn volume_up(&mut self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Remote: volume up.")?;
        let device = self.device();
        device.set_volume(device.volume() + 10);
        Ok(())
    }

    fn channel_down(&mut self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Remote: channel down.")?;
        let device = self.device();
        device.set_channel(device.channel() - 1);
        Ok(())
    }

    fn channel_up(&mut self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Remote: channel up.")?;
        let device = self.device();
        device.set_channel(device.channel() + 1);
        Ok(())
    }
}

pub struct BasicRemote<'a> {
    device: &'a mut dyn Device,
}

impl<'a> BasicRemote<'a> {
    pub fn new(device: &'a mut dyn Device) -> Self {
        Self { device }
    }
}

impl Remote for BasicRemote<'_> {
    fn device(&mut self) -> &mut dyn Device {
        &mut *self.device
    }
}

pub struct AdvancedRemote<'a> {
    device: &'a mut dyn Device,
}

impl<'a> AdvancedRemote<'a> {
    pub fn new(device: &'a mut dyn Device) -> Self {
        Self { device }
    }

    pub fn mute(&mut self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Remote: mute.")?;
        self.device.set_volume(0);
        Ok(())
    }
}

impl Remote for AdvancedRemote<'_> {
    fn device(&mut self) -> &mut dyn Device {
        &mut *self.device
    }
}

pub fn test_device(device: &mut dyn Device, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "Tests with basic remote.")?;
    BasicRemote::new(device).power(out)?;
    device.print_status(out)?;

    writeln!(out)?;

    writeln!(out, "Tests with advanced remote.")?;
    let mut advanced = AdvancedRemote::new(device);
    advanced.power(out)?;
    advanced.mute(out)?;
    device.print_status(out)
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    test_device(&mut Radio::default(), out)?;

    writeln!(out)?;

    test_device(&mut Tv::default(), out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radio_session() {
        let mut out = Vec::new();
        test_device(&mut Radio::default(), &mut out).unwrap();
        let expected = format!(
            "Tests with basic remote.\n\
             Remote: power toggle.\n\
             {RULE}\n| I'm Radio.\n| I'm enabled.\n| Current volume is 30%.\n| Current channel is 1.\n{RULE}\n\
             \n\
             Tests with advanced remote.\n\
             Remote: power toggle.\n\
             Remote: mute.\n\
             {RULE}\n| I'm Radio.\n| I'm disabled.\n| Current volume is 0%.\n| Current channel is 1.\n{RULE}\n"
        );
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn test_tv_label() {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("| I'm TV set.").count(), 2);
        assert_eq!(text.matches("| I'm Radio.").count(), 2);
    }

    #[test]
    fn test_volume_is_clamped() {
        let mut tv = Tv::default();
        let mut sink = Vec::new();
        {
            let mut remote = BasicRemote::new(&mut tv);
            for _ in 0..10 {
                remote.volume_up(&mut sink).unwrap();
            }
        }
        assert_eq!(tv.volume(), 100);

        tv.set_volume(-5);
        assert_eq!(tv.volume(), 0);
    }

    #[test]
    fn test_channel_buttons() {
        let mut radio = Radio::default();
        let mut sink = Vec::new();
        let mut remote = AdvancedRemote::new(&mut radio);
        remote.channel_up(&mut sink).unwrap();
        remote.channel_up(&mut sink).unwrap();
        remote.channel_down(&mut sink).unwrap();
        remote.volume_down(&mut sink).unwrap();
        assert_eq!(radio.channel(), 2);
        assert_eq!(radio.volume(), 20);
    }
}
