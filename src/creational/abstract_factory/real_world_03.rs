// Abstract Factory - template engines.
// A factory hands out title/page templates and the renderer that understands
// their placeholder syntax. A foreign renderer leaves placeholders untouched.

use std::io::Write;

use crate::Result;

pub trait TitleTemplate {
    fn template(&self) -> String;
}

pub trait PageTemplate {
    fn template(&self) -> String;
}

pub trait TemplateRenderer {
    fn render(&self, template: &str, arguments: &[(&str, &str)]) -> String;
}

pub trait TemplateFactory {
    fn create_title_template(&self) -> Box<dyn TitleTemplate>;
    fn create_page_template(&self) -> Box<dyn PageTemplate>;
    fn renderer(&self) -> Box<dyn TemplateRenderer>;
}

// ============================================================================
// Twig family
// ============================================================================

pub struct TwigTitleTemplate;

impl TitleTemplate for TwigTitleTemplate {
    fn template(&self) -> String {
        "<Twig.Title>@[Title]</Twig.Title>".to_string()
    }
}

pub struct TwigPageTemplate {
    title: Box<dyn TitleTemplate>,
}

impl PageTemplate for TwigPageTemplate {
    fn template(&self) -> String {
        format!(
            "<Twig.Page>\n\t{}\n\t<Twig.Content>@[Content]</Twig.Content>\n</Twig.Page>",
            self.title.template()
        )
    }
}

pub struct TwigRenderer;

impl TemplateRenderer for TwigRenderer {
    fn render(&self, template: &str, arguments: &[(&str, &str)]) -> String {
        arguments.iter().fold(template.to_string(), |acc, (key, value)| {
            acc.replace(&format!("@[{key}]"), value)
        })
    }
}

pub struct TwigTemplateFactory;

impl TemplateFactory for TwigTemplateFactory {
    fn create_title_template(&self) -> Box<dyn TitleTemplate> {
        Box::new(TwigTitleTemplate)
    }

    fn create_page_template(&self) -> Box<dyn PageTemplate> {
        Box::new(TwigPageTemplate {
            title: self.create_title_template(),
        })
    }

    fn renderer(&self) -> Box<dyn TemplateRenderer> {
        Box::new(TwigRenderer)
    }
}

// ============================================================================
// PHP family
// ============================================================================

pub struct PhpTitleTemplate;

impl TitleTemplate for PhpTitleTemplate {
    fn template(&self) -> String {
        "<PHP.Title>$(Title)</PHP.Title>".to_string()
    }
}

pub struct PhpPageTemplate {
    title: Box<dyn TitleTemplate>,
}

impl PageTemplate for PhpPageTemplate {
    fn template(&self) -> String {
        format!(
            "<PHP.Page>\n\t{}\n\t<PHP.Content>$(Content)</PHP.Content>\n</PHP.Page>",
            self.title.template()
        )
    }
}

pub struct PhpRenderer;

impl TemplateRenderer for PhpRenderer {
    fn render(&self, template: &str, arguments: &[(&str, &str)]) -> String {
        arguments.iter().fold(template.to_string(), |acc, (key, value)| {
            acc.replace(&format!("$({key})"), value)
        })
    }
}

pub struct PhpTemplateFactory;

impl TemplateFactory for PhpTemplateFactory {
    fn create_title_template(&self) -> Box<dyn TitleTemplate> {
        Box::new(PhpTitleTemplate)
    }

    fn create_page_template(&self) -> Box<dyn PageTemplate> {
        Box::new(PhpPageTemplate {
            title: self.create_title_template(),
        })
    }

    fn renderer(&self) -> Box<dyn TemplateRenderer> {
        Box::new(PhpRenderer)
    }
}

// ============================================================================
// Client
// ============================================================================

pub struct Page {
    pub title: String,
    pub content: String,
}

impl Page {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    pub fn render(&self, factory: &dyn TemplateFactory) -> String {
        let template = factory.create_page_template();
        let renderer = factory.renderer();

        renderer.render(
            &template.template(),
            &[("Title", self.title.as_str()), ("Content", self.content.as_str())],
        )
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let page = Page::new("Sample page", "This is the body.");

    writeln!(out, "Testing rendering with the Twig:")?;
    writeln!(out, "{}", page.render(&TwigTemplateFactory))?;

    writeln!(out)?;

    writeln!(out, "Testing rendering with the PHP:")?;
    writeln!(out, "{}", page.render(&PhpTemplateFactory))?;
    Ok(())
}
