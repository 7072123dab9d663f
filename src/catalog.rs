//! Registry of every runnable scenario.
//!
//! Ids are `<pattern>/<variant>`, e.g. `builder/real-world-03`. Lookups are
//! case-insensitive and accept `_` or spaces in place of `-`.

use std::fmt;
use std::io::Write;

use clap::ValueEnum;
use serde::Serialize;

use crate::{creational, structural, PatternError, Result};

pub type RunFn = fn(&mut dyn Write) -> Result<()>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Creational,
    Structural,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Creational => "Creational",
            Self::Structural => "Structural",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Pattern {
    AbstractFactory,
    Builder,
    FactoryMethod,
    Prototype,
    Singleton,
    Adapter,
    Bridge,
    Composite,
    Decorator,
    Facade,
    Flyweight,
    Proxy,
}

impl Pattern {
    pub const ALL: [Pattern; 12] = [
        Pattern::AbstractFactory,
        Pattern::Builder,
        Pattern::FactoryMethod,
        Pattern::Prototype,
        Pattern::Singleton,
        Pattern::Adapter,
        Pattern::Bridge,
        Pattern::Composite,
        Pattern::Decorator,
        Pattern::Facade,
        Pattern::Flyweight,
        Pattern::Proxy,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::AbstractFactory => "Abstract Factory",
            Self::Builder => "Builder",
            Self::FactoryMethod => "Factory Method",
            Self::Prototype => "Prototype",
            Self::Singleton => "Singleton",
            Self::Adapter => "Adapter",
            Self::Bridge => "Bridge",
            Self::Composite => "Composite",
            Self::Decorator => "Decorator",
            Self::Facade => "Facade",
            Self::Flyweight => "Flyweight",
            Self::Proxy => "Proxy",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Self::AbstractFactory => "abstract-factory",
            Self::Builder => "builder",
            Self::FactoryMethod => "factory-method",
            Self::Prototype => "prototype",
            Self::Singleton => "singleton",
            Self::Adapter => "adapter",
            Self::Bridge => "bridge",
            Self::Composite => "composite",
            Self::Decorator => "decorator",
            Self::Facade => "facade",
            Self::Flyweight => "flyweight",
            Self::Proxy => "proxy",
        }
    }

    pub const fn category(self) -> Category {
        match self {
            Self::AbstractFactory
            | Self::Builder
            | Self::FactoryMethod
            | Self::Prototype
            | Self::Singleton => Category::Creational,
            _ => Category::Structural,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Variant {
    #[serde(rename = "structural")]
    Structural,
    #[serde(rename = "real-world")]
    RealWorld,
    #[serde(rename = "real-world-01")]
    RealWorld01,
    #[serde(rename = "real-world-02")]
    RealWorld02,
    #[serde(rename = "real-world-03")]
    RealWorld03,
    #[serde(rename = "real-world-04")]
    RealWorld04,
}

impl Variant {
    pub fn label(self) -> &'static str {
        match self {
            Self::Structural => "Structural",
            Self::RealWorld => "RealWorld",
            Self::RealWorld01 => "RealWorld01",
            Self::RealWorld02 => "RealWorld02",
            Self::RealWorld03 => "RealWorld03",
            Self::RealWorld04 => "RealWorld04",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Self::Structural => "structural",
            Self::RealWorld => "real-world",
            Self::RealWorld01 => "real-world-01",
            Self::RealWorld02 => "real-world-02",
            Self::RealWorld03 => "real-world-03",
            Self::RealWorld04 => "real-world-04",
        }
    }
}

#[derive(Clone, Copy, Serialize)]
pub struct Example {
    pub id: &'static str,
    pub category: Category,
    pub pattern: Pattern,
    pub variant: Variant,
    pub summary: &'static str,
    #[serde(skip)]
    pub run: RunFn,
}

impl fmt::Debug for Example {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Example")
            .field("id", &self.id)
            .field("category", &self.category)
            .field("summary", &self.summary)
            .finish_non_exhaustive()
    }
}

impl Example {
    pub fn heading(&self) -> String {
        format!("{} ({})", self.pattern.name(), self.variant.label())
    }
}

macro_rules! example {
    ($pattern:ident, $variant:ident, $id:literal, $run:path, $summary:literal) => {
        Example {
            id: $id,
            category: Pattern::$pattern.category(),
            pattern: Pattern::$pattern,
            variant: Variant::$variant,
            summary: $summary,
            run: $run,
        }
    };
}

use creational::{abstract_factory, builder, factory_method, prototype, singleton};
use structural::{adapter, bridge, composite, decorator, facade, flyweight, proxy};

static EXAMPLES: &[Example] = &[
    example!(
        AbstractFactory,
        Structural,
        "abstract-factory/structural",
        abstract_factory::structural::run,
        "Two factories, two product families"
    ),
    example!(
        AbstractFactory,
        RealWorld,
        "abstract-factory/real-world",
        abstract_factory::real_world::run,
        "Animal worlds per continent"
    ),
    example!(
        AbstractFactory,
        RealWorld02,
        "abstract-factory/real-world-02",
        abstract_factory::real_world_02::run,
        "Windows and macOS widget families"
    ),
    example!(
        AbstractFactory,
        RealWorld03,
        "abstract-factory/real-world-03",
        abstract_factory::real_world_03::run,
        "Twig and PHP page templates"
    ),
    example!(
        AbstractFactory,
        RealWorld04,
        "abstract-factory/real-world-04",
        abstract_factory::real_world_04::run,
        "Student and teacher auth views"
    ),
    example!(
        Builder,
        Structural,
        "builder/structural",
        builder::structural::run,
        "Director driving two builders"
    ),
    example!(Builder, RealWorld, "builder/real-world", builder::real_world::run, "Vehicle shop"),
    example!(
        Builder,
        RealWorld02,
        "builder/real-world-02",
        builder::real_world_02::run,
        "Cars and their manuals"
    ),
    example!(
        Builder,
        RealWorld03,
        "builder/real-world-03",
        builder::real_world_03::run,
        "MySQL and Postgres query builders"
    ),
    example!(
        Builder,
        RealWorld04,
        "builder/real-world-04",
        builder::real_world_04::run,
        "Realm and CoreData query operations"
    ),
    example!(
        FactoryMethod,
        Structural,
        "factory-method/structural",
        factory_method::structural::run,
        "Creators choosing products"
    ),
    example!(
        FactoryMethod,
        RealWorld,
        "factory-method/real-world",
        factory_method::real_world::run,
        "Resume and report pages"
    ),
    example!(
        FactoryMethod,
        RealWorld02,
        "factory-method/real-world-02",
        factory_method::real_world_02::run,
        "Dialogs creating their buttons"
    ),
    example!(
        FactoryMethod,
        RealWorld03,
        "factory-method/real-world-03",
        factory_method::real_world_03::run,
        "Social network posters"
    ),
    example!(
        FactoryMethod,
        RealWorld04,
        "factory-method/real-world-04",
        factory_method::real_world_04::run,
        "Wifi and Bluetooth projectors"
    ),
    example!(
        Prototype,
        Structural,
        "prototype/structural",
        prototype::structural::run,
        "Cloning concrete prototypes"
    ),
    example!(
        Prototype,
        RealWorld,
        "prototype/real-world",
        prototype::real_world::run,
        "Color manager"
    ),
    example!(
        Prototype,
        RealWorld01,
        "prototype/real-world-01",
        prototype::real_world_01::run,
        "Color manager, value-typed"
    ),
    example!(
        Prototype,
        RealWorld02,
        "prototype/real-world-02",
        prototype::real_world_02::run,
        "Shape cache"
    ),
    example!(
        Prototype,
        RealWorld03,
        "prototype/real-world-03",
        prototype::real_world_03::run,
        "Page copies sharing an author"
    ),
    example!(
        Prototype,
        RealWorld04,
        "prototype/real-world-04",
        prototype::real_world_04::run,
        "Page copies with comment objects"
    ),
    example!(
        Singleton,
        Structural,
        "singleton/structural",
        singleton::structural::run,
        "One instance via OnceLock"
    ),
    example!(
        Singleton,
        RealWorld,
        "singleton/real-world",
        singleton::real_world::run,
        "Load balancer"
    ),
    example!(
        Singleton,
        RealWorld02,
        "singleton/real-world-02",
        singleton::real_world_02::run,
        "Lock-guarded database connection"
    ),
    example!(
        Singleton,
        RealWorld03,
        "singleton/real-world-03",
        singleton::real_world_03::run,
        "Logger and config"
    ),
    example!(
        Singleton,
        RealWorld04,
        "singleton/real-world-04",
        singleton::real_world_04::run,
        "Friends chat service"
    ),
    example!(
        Adapter,
        Structural,
        "adapter/structural",
        adapter::structural::run,
        "Adaptee behind a target"
    ),
    example!(
        Adapter,
        RealWorld,
        "adapter/real-world",
        adapter::real_world::run,
        "Chemical databank"
    ),
    example!(
        Adapter,
        RealWorld01,
        "adapter/real-world-01",
        adapter::real_world_01::run,
        "Chemical databank, eager adapter"
    ),
    example!(
        Adapter,
        RealWorld02,
        "adapter/real-world-02",
        adapter::real_world_02::run,
        "Square pegs, round holes"
    ),
    example!(
        Adapter,
        RealWorld03,
        "adapter/real-world-03",
        adapter::real_world_03::run,
        "Slack as an email notification"
    ),
    example!(
        Adapter,
        RealWorld04,
        "adapter/real-world-04",
        adapter::real_world_04::run,
        "Facebook and Twitter auth SDKs"
    ),
    example!(
        Bridge,
        Structural,
        "bridge/structural",
        bridge::structural::run,
        "Abstraction over two implementors"
    ),
    example!(
        Bridge,
        RealWorld01,
        "bridge/real-world-01",
        bridge::real_world_01::run,
        "Customers over a data object"
    ),
    example!(
        Bridge,
        RealWorld02,
        "bridge/real-world-02",
        bridge::real_world_02::run,
        "Remotes over radio and TV"
    ),
    example!(
        Bridge,
        RealWorld03,
        "bridge/real-world-03",
        bridge::real_world_03::run,
        "Pages over HTML and JSON renderers"
    ),
    example!(
        Bridge,
        RealWorld04,
        "bridge/real-world-04",
        bridge::real_world_04::run,
        "View controllers over sharing services"
    ),
    example!(
        Composite,
        Structural,
        "composite/structural",
        composite::structural::run,
        "Tree of leaves and composites"
    ),
    example!(
        Composite,
        RealWorld,
        "composite/real-world",
        composite::real_world::run,
        "Drawing elements"
    ),
    example!(
        Decorator,
        Structural,
        "decorator/structural",
        decorator::structural::run,
        "Stacked decorators"
    ),
    example!(
        Decorator,
        RealWorld,
        "decorator/real-world",
        decorator::real_world::run,
        "Borrowable library items"
    ),
    example!(
        Facade,
        Structural,
        "facade/structural",
        facade::structural::run,
        "Facade over four subsystems"
    ),
    example!(
        Facade,
        RealWorld,
        "facade/real-world",
        facade::real_world::run,
        "Mortgage eligibility"
    ),
    example!(
        Flyweight,
        Structural,
        "flyweight/structural",
        flyweight::structural::run,
        "Shared and unshared flyweights"
    ),
    example!(
        Flyweight,
        RealWorld,
        "flyweight/real-world",
        flyweight::real_world::run,
        "Document characters"
    ),
    example!(
        Proxy,
        Structural,
        "proxy/structural",
        proxy::structural::run,
        "Lazily created real subject"
    ),
    example!(Proxy, RealWorld, "proxy/real-world", proxy::real_world::run, "Math proxy"),
];

fn normalize(key: &str) -> String {
    key.trim().to_lowercase().replace(['_', ' '], "-")
}

pub fn all() -> &'static [Example] {
    EXAMPLES
}

pub fn find(id: &str) -> Result<&'static Example> {
    let wanted = normalize(id);
    EXAMPLES
        .iter()
        .find(|example| example.id == wanted)
        .ok_or_else(|| PatternError::UnknownExample(id.to_string()))
}

/// Every variant of one pattern, in catalog order.
pub fn by_pattern(name: &str) -> Result<Vec<&'static Example>> {
    let wanted = normalize(name);
    let pattern = Pattern::ALL
        .into_iter()
        .find(|pattern| pattern.slug() == wanted)
        .ok_or_else(|| PatternError::UnknownPattern(name.to_string()))?;
    Ok(EXAMPLES
        .iter()
        .filter(|example| example.pattern == pattern)
        .collect())
}

pub fn by_category(category: Category) -> impl Iterator<Item = &'static Example> {
    EXAMPLES.iter().filter(move |example| example.category == category)
}

/// Runs one example into memory and returns what it wrote.
pub fn capture(example: &Example) -> Result<String> {
    let mut out = Vec::new();
    (example.run)(&mut out)?;
    Ok(String::from_utf8_lossy(&out).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_follow_pattern_and_variant() {
        for example in all() {
            let expected = format!("{}/{}", example.pattern.slug(), example.variant.slug());
            assert_eq!(example.id, expected);
            assert_eq!(example.category, example.pattern.category());
        }
    }

    #[test]
    fn test_ids_unique() {
        let ids: HashSet<_> = all().iter().map(|example| example.id).collect();
        assert_eq!(ids.len(), all().len());
    }

    #[test]
    fn test_every_pattern_has_a_structural_variant() {
        for pattern in Pattern::ALL {
            let variants = by_pattern(pattern.slug()).unwrap();
            assert_eq!(variants[0].variant, Variant::Structural, "{}", pattern.name());
        }
    }

    #[test]
    fn test_lookup_is_forgiving() {
        assert_eq!(find(" Builder/Real_World_03 ").unwrap().id, "builder/real-world-03");
        assert_eq!(by_pattern("Abstract Factory").unwrap().len(), 5);
        assert_eq!(by_pattern("factory_method").unwrap().len(), 5);
    }

    #[test]
    fn test_lookup_errors() {
        assert!(matches!(find("builder/real-world-09"), Err(PatternError::UnknownExample(_))));
        assert!(matches!(by_pattern("observer"), Err(PatternError::UnknownPattern(_))));
    }

    #[test]
    fn test_heading() {
        let example = find("builder/real-world-03").unwrap();
        assert_eq!(example.heading(), "Builder (RealWorld03)");
    }

    #[test]
    fn test_category_counts() {
        assert_eq!(by_category(Category::Creational).count(), 26);
        assert_eq!(by_category(Category::Structural).count(), 21);
    }

    #[test]
    fn test_capture() {
        let text = capture(find("proxy/real-world").unwrap()).unwrap();
        assert!(text.starts_with("4 + 2 = 6\n"));
    }
}
