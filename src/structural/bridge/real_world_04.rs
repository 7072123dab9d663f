// Bridge - view controllers and sharing services.

use std::fmt;
use std::io::Write;

use crate::Result;

pub trait Content: fmt::Display {
    fn title(&self) -> &str;
    fn images(&self) -> &[String];
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoodDomainModel {
    pub title: String,
    pub images: Vec<String>,
    pub calories: u32,
}

impl fmt::Display for FoodDomainModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Food Model")
    }
}

impl Content for FoodDomainModel {
    fn title(&self) -> &str {
        &self.title
    }

    fn images(&self) -> &[String] {
        &self.images
    }
}

pub trait SharingService {
    fn share(&self, content: &dyn Content, out: &mut dyn Write) -> Result<()>;
}

pub struct FacebookSharingService;

impl SharingService for FacebookSharingService {
    fn share(&self, content: &dyn Content, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Service: {content} was posted to the Facebook.")?;
        Ok(())
    }
}

pub struct InstagramSharingService;

impl SharingService for InstagramSharingService {
    fn share(&self, content: &dyn Content, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Service: {content} was posted to the Instagram.")?;
        Ok(())
    }
}

pub trait SharingSupportable {
    fn accept(&mut self, service: Box<dyn SharingService>);
    fn update(&self, content: &dyn Content, out: &mut dyn Write) -> Result<()>;
}

/// Common body of every view controller; only the name differs.
pub struct ViewController {
    name: &'static str,
    service: Option<Box<dyn SharingService>>,
}

impl ViewController {
    pub fn photo() -> Self {
        Self {
            name: "PhotoViewController",
            service: None,
        }
    }

    pub fn feed() -> Self {
        Self {
            name: "FeedViewController",
            service: None,
        }
    }
}

impl SharingSupportable for ViewController {
    fn accept(&mut self, service: Box<dyn SharingService>) {
        self.service = Some(service);
    }

    fn update(&self, content: &dyn Content, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{}: User selected a {content} to share.", self.name)?;
        match &self.service {
            Some(service) => service.share(content, out),
            None => Ok(()),
        }
    }
}

pub fn push(container: &mut dyn SharingSupportable, out: &mut dyn Write) -> Result<()> {
    let model = FoodDomainModel {
        title: "This food is so various and delicious!".to_string(),
        images: vec!["food_1.png".to_string(), "food_2.png".to_string()],
        calories: 47,
    };

    container.accept(Box::new(FacebookSharingService));
    container.update(&model, out)?;

    container.accept(Box::new(InstagramSharingService));
    container.update(&model, out)
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "Client: Pushing Photo View Controller...")?;
    push(&mut ViewController::photo(), out)?;

    writeln!(out)?;

    writeln!(out, "Client: Pushing Feed View Controller...")?;
    push(&mut ViewController::feed(), out)
}
