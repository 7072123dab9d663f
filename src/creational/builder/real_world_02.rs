// Builder - cars and their manuals.
// One director, two builders with unrelated products. The builder trait only
// asks that a product be a `DomainModel`.

use std::fmt;
use std::io::Write;

use crate::Result;

/// Marker for anything a builder may hand back.
pub trait DomainModel: fmt::Display {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Engine {
    #[default]
    City,
    Sport,
    Suv,
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Engine::City => "CityEngine",
            Engine::Sport => "SportEngine",
            Engine::Suv => "SuvEngine",
        };
        f.write_str(name)
    }
}

/// The configuration both builders accumulate between `reset` and `result`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarSpec {
    pub seats: u32,
    pub engine: Engine,
    pub trip_computer: bool,
    pub gps: bool,
}

impl Default for CarSpec {
    fn default() -> Self {
        Self {
            seats: 2,
            engine: Engine::City,
            trip_computer: false,
            gps: false,
        }
    }
}

impl CarSpec {
    fn describe(&self, f: &mut fmt::Formatter<'_>, kind: &str) -> fmt::Result {
        write!(
            f,
            "{kind} -> Seats: {}, Engine: {}; TripComputer: {}; GPS: {}.",
            self.seats, self.engine, self.trip_computer, self.gps
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Car {
    pub spec: CarSpec,
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.spec.describe(f, "Car")
    }
}

impl DomainModel for Car {}

/// Every car ships with a manual matching its configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manual {
    pub spec: CarSpec,
}

impl fmt::Display for Manual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.spec.describe(f, "Manual")
    }
}

impl DomainModel for Manual {}

pub trait Builder {
    type Output: DomainModel;

    fn reset(&mut self);
    fn set_seats(&mut self, seats: u32);
    fn set_engine(&mut self, engine: Engine);
    fn set_trip_computer(&mut self, enabled: bool);
    fn set_gps(&mut self, enabled: bool);

    /// Hands back the product and resets, ready for the next one.
    fn result(&mut self) -> Self::Output;
}

#[derive(Debug, Default)]
pub struct CarBuilder {
    spec: CarSpec,
}

impl CarBuilder {
    pub fn pending(&self) -> &CarSpec {
        &self.spec
    }
}

impl Builder for CarBuilder {
    type Output = Car;

    fn reset(&mut self) {
        self.spec = CarSpec::default();
    }
    fn set_seats(&mut self, seats: u32) {
        self.spec.seats = seats;
    }
    fn set_engine(&mut self, engine: Engine) {
        self.spec.engine = engine;
    }
    fn set_trip_computer(&mut self, enabled: bool) {
        self.spec.trip_computer = enabled;
    }
    fn set_gps(&mut self, enabled: bool) {
        self.spec.gps = enabled;
    }

    fn result(&mut self) -> Car {
        let car = Car { spec: self.spec };
        self.reset();
        car
    }
}

#[derive(Debug, Default)]
pub struct ManualBuilder {
    spec: CarSpec,
}

impl ManualBuilder {
    pub fn pending(&self) -> &CarSpec {
        &self.spec
    }
}

impl Builder for ManualBuilder {
    type Output = Manual;

    fn reset(&mut self) {
        self.spec = CarSpec::default();
    }
    // Documents the seat features.
    fn set_seats(&mut self, seats: u32) {
        self.spec.seats = seats;
    }
    // Adds engine instructions.
    fn set_engine(&mut self, engine: Engine) {
        self.spec.engine = engine;
    }
    fn set_trip_computer(&mut self, enabled: bool) {
        self.spec.trip_computer = enabled;
    }
    fn set_gps(&mut self, enabled: bool) {
        self.spec.gps = enabled;
    }

    fn result(&mut self) -> Manual {
        let manual = Manual { spec: self.spec };
        self.reset();
        manual
    }
}

pub struct Director;

impl Director {
    pub fn construct_city_car<B: Builder>(&self, builder: &mut B) {
        builder.reset();
        builder.set_seats(4);
        builder.set_engine(Engine::City);
        builder.set_trip_computer(false);
        builder.set_gps(false);
    }

    pub fn construct_sport_car<B: Builder>(&self, builder: &mut B) {
        builder.reset();
        builder.set_seats(2);
        builder.set_engine(Engine::Sport);
        builder.set_trip_computer(true);
        builder.set_gps(false);
    }

    pub fn construct_suv_car<B: Builder>(&self, builder: &mut B) {
        builder.reset();
        builder.set_seats(4);
        builder.set_engine(Engine::Suv);
        builder.set_trip_computer(false);
        builder.set_gps(true);
    }
}

fn make<B: Builder>(builder: &mut B, out: &mut dyn Write) -> Result<()> {
    let director = Director;

    director.construct_city_car(builder);
    writeln!(out, "{}", builder.result())?;

    director.construct_sport_car(builder);
    writeln!(out, "{}", builder.result())?;

    director.construct_suv_car(builder);
    writeln!(out, "{}", builder.result())?;
    Ok(())
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "Make car:")?;
    make(&mut CarBuilder::default(), out)?;

    writeln!(out)?;

    writeln!(out, "Make manual:")?;
    make(&mut ManualBuilder::default(), out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_value_wins() {
        let mut builder = CarBuilder::default();
        builder.set_seats(7);
        builder.set_seats(5);
        builder.set_engine(Engine::Sport);
        builder.set_engine(Engine::Suv);
        builder.set_gps(true);

        let car = builder.result();
        assert_eq!(car.spec.seats, 5);
        assert_eq!(car.spec.engine, Engine::Suv);
        assert!(car.spec.gps);
        assert!(!car.spec.trip_computer);
    }

    #[test]
    fn test_result_resets_builder() {
        let mut builder = ManualBuilder::default();
        Director.construct_suv_car(&mut builder);
        assert_ne!(*builder.pending(), CarSpec::default());

        let _ = builder.result();
        assert_eq!(*builder.pending(), CarSpec::default());

        let mut car_builder = CarBuilder::default();
        Director.construct_sport_car(&mut car_builder);
        let _ = car_builder.result();
        assert_eq!(*car_builder.pending(), CarSpec::default());
    }

    #[test]
    fn test_output() {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Make car:");
        assert_eq!(
            lines[1],
            "Car -> Seats: 4, Engine: CityEngine; TripComputer: false; GPS: false."
        );
        assert_eq!(
            lines[2],
            "Car -> Seats: 2, Engine: SportEngine; TripComputer: true; GPS: false."
        );
        assert_eq!(
            lines[8],
            "Manual -> Seats: 4, Engine: SuvEngine; TripComputer: false; GPS: true."
        );
    }
}
