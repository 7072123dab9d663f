// Decorator - structural skeleton.

use std::io::Write;

use crate::Result;

pub trait Component {
    fn operation(&self, out: &mut dyn Write) -> Result<()>;
}

pub struct ConcreteComponent;

impl Component for ConcreteComponent {
    fn operation(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "ConcreteComponent.Operation()")?;
        Ok(())
    }
}

/// Adds state.
pub struct ConcreteDecoratorA {
    component: Box<dyn Component>,
    added_state: &'static str,
}

impl ConcreteDecoratorA {
    pub fn new(component: Box<dyn Component>) -> Self {
        Self {
            component,
            added_state: "New State",
        }
    }

    pub fn added_state(&self) -> &str {
        self.added_state
    }
}

impl Component for ConcreteDecoratorA {
    fn operation(&self, out: &mut dyn Write) -> Result<()> {
        self.component.operation(out)?;
        writeln!(out, "ConcreteDecoratorA.Operation()")?;
        Ok(())
    }
}

/// Adds behaviour.
pub struct ConcreteDecoratorB {
    component: Box<dyn Component>,
}

impl ConcreteDecoratorB {
    pub fn new(component: Box<dyn Component>) -> Self {
        Self { component }
    }

    fn added_behavior(&self) {
        tracing::trace!("ConcreteDecoratorB added behaviour");
    }
}

impl Component for ConcreteDecoratorB {
    fn operation(&self, out: &mut dyn Write) -> Result<()> {
        self.component.operation(out)?;
        self.added_behavior();
        writeln!(out, "ConcreteDecoratorB.Operation()")?;
        Ok(())
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let c = Box::new(ConcreteComponent);
    let d1 = Box::new(ConcreteDecoratorA::new(c));
    let d2 = ConcreteDecoratorB::new(d1);

    d2.operation(out)?;
    writeln!(out)?;
    Ok(())
}
