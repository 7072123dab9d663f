// Builder - vehicle shop.
// The shop (director) always assembles frame, engine, wheels and doors in the
// same order; each builder decides what those parts are.

use std::collections::HashMap;
use std::io::Write;

use crate::{PatternError, Result};

#[derive(Debug, Clone)]
pub struct Vehicle {
    vehicle_type: String,
    parts: HashMap<String, String>,
}

impl Vehicle {
    pub fn new(vehicle_type: impl Into<String>) -> Self {
        Self {
            vehicle_type: vehicle_type.into(),
            parts: HashMap::new(),
        }
    }

    pub fn vehicle_type(&self) -> &str {
        &self.vehicle_type
    }

    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.parts.insert(key.to_string(), value.into());
    }

    pub fn part(&self, key: &str) -> Result<&str> {
        self.parts
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| PatternError::unknown_key("vehicle part", key))
    }

    pub fn show(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{:>12}: {}", "Vehicle Type", self.vehicle_type)?;
        writeln!(out, "{:>12}: {}", "Frame", self.part("frame")?)?;
        writeln!(out, "{:>12}: {}", "Engine", self.part("engine")?)?;
        writeln!(out, "{:>12}: {}", "#Wheels", self.part("wheels")?)?;
        writeln!(out, "{:>12}: {}", "#Doors", self.part("doors")?)?;
        writeln!(out)?;
        Ok(())
    }
}

pub trait VehicleBuilder {
    fn vehicle(&self) -> &Vehicle;
    fn build_frame(&mut self);
    fn build_engine(&mut self);
    fn build_wheels(&mut self);
    fn build_doors(&mut self);
}

/// Concrete builders differ only in the part values they install.
macro_rules! vehicle_builder {
    (
        $name:ident,
        $kind:literal,
        frame: $frame:literal,
        engine: $engine:literal,
        wheels: $wheels:literal,
        doors: $doors:literal
    ) => {
        pub struct $name {
            vehicle: Vehicle,
        }

        impl $name {
            pub fn new() -> Self {
                Self {
                    vehicle: Vehicle::new($kind),
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl VehicleBuilder for $name {
            fn vehicle(&self) -> &Vehicle {
                &self.vehicle
            }
            fn build_frame(&mut self) {
                self.vehicle.set("frame", $frame);
            }
            fn build_engine(&mut self) {
                self.vehicle.set("engine", $engine);
            }
            fn build_wheels(&mut self) {
                self.vehicle.set("wheels", $wheels);
            }
            fn build_doors(&mut self) {
                self.vehicle.set("doors", $doors);
            }
        }
    };
}

vehicle_builder!(
    MotorCycleBuilder,
    "MotorCycle",
    frame: "MotorCycle Frame",
    engine: "500 cc",
    wheels: "2",
    doors: "0"
);
vehicle_builder!(CarBuilder, "Car", frame: "Car Frame", engine: "2500 cc", wheels: "4", doors: "4");
vehicle_builder!(
    ScooterBuilder,
    "Scooter",
    frame: "Scooter Frame",
    engine: "50 cc",
    wheels: "2",
    doors: "0"
);

pub struct Shop;

impl Shop {
    pub fn construct(builder: &mut dyn VehicleBuilder) {
        builder.build_frame();
        builder.build_engine();
        builder.build_wheels();
        builder.build_doors();
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let mut builders: Vec<Box<dyn VehicleBuilder>> = vec![
        Box::new(MotorCycleBuilder::new()),
        Box::new(CarBuilder::new()),
        Box::new(ScooterBuilder::new()),
    ];

    for builder in builders.iter_mut() {
        Shop::construct(builder.as_mut());
        builder.vehicle().show(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_motorcycle_display() {
        let mut builder = MotorCycleBuilder::new();
        Shop::construct(&mut builder);

        let mut out = Vec::new();
        builder.vehicle().show(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Vehicle Type: MotorCycle\n       Frame: MotorCycle Frame\n      Engine: 500 cc\n     #Wheels: 2\n      #Doors: 0\n\n"
        );
    }

    #[test]
    fn test_unbuilt_vehicle_fails_lookup() {
        let builder = CarBuilder::new();
        let err = builder.vehicle().part("engine").unwrap_err();
        assert!(matches!(err, PatternError::UnknownKey { key, .. } if key == "engine"));
    }

    #[test]
    fn test_car_parts() {
        let mut builder = CarBuilder::new();
        Shop::construct(&mut builder);
        let car = builder.vehicle();

        assert_eq!(car.vehicle_type(), "Car");
        assert_eq!(car.part("engine").unwrap(), "2500 cc");
        assert_eq!(car.part("doors").unwrap(), "4");
    }
}
