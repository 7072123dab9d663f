// Bridge - pages and renderers.
// Pages decide what to show, renderers decide the markup; either side can
// change without touching the other.

use std::io::Write;
use std::rc::Rc;

use crate::Result;

pub trait Renderer {
    fn render_title(&self, title: &str) -> String;
    fn render_text_block(&self, text: &str) -> String;
    fn render_image(&self, url: &str) -> String;
    fn render_link(&self, url: &str, title: &str) -> String;
    fn render_header(&self) -> String;
    fn render_footer(&self) -> String;
    fn render_parts(&self, parts: &[String]) -> String;
}

pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn render_title(&self, title: &str) -> String {
        format!("<h1>{title}</h1>")
    }

    fn render_text_block(&self, text: &str) -> String {
        format!("<div class='text'>{text}</div>")
    }

    fn render_image(&self, url: &str) -> String {
        format!("<img src='{url}' />")
    }

    fn render_link(&self, url: &str, title: &str) -> String {
        format!("<a href='{url}'>{title}</a>")
    }

    fn render_header(&self) -> String {
        "<html><body>".to_string()
    }

    fn render_footer(&self) -> String {
        "</body></html>".to_string()
    }

    fn render_parts(&self, parts: &[String]) -> String {
        parts.join("\n")
    }
}

pub struct JsonRenderer;

/// JSON string literal, quotes and escapes included.
fn quoted(value: &str) -> String {
    serde_json::Value::from(value).to_string()
}

impl Renderer for JsonRenderer {
    fn render_title(&self, title: &str) -> String {
        format!("\"title\": {}", quoted(title))
    }

    fn render_text_block(&self, text: &str) -> String {
        format!("\"text\": {}", quoted(text))
    }

    fn render_image(&self, url: &str) -> String {
        format!("\"img\": {}", quoted(url))
    }

    fn render_link(&self, url: &str, title: &str) -> String {
        format!(
            "\"link\": {{ \"href\": {}, \"title\": {} }}",
            quoted(url),
            quoted(title)
        )
    }

    fn render_header(&self) -> String {
        String::new()
    }

    fn render_footer(&self) -> String {
        String::new()
    }

    fn render_parts(&self, parts: &[String]) -> String {
        let body: Vec<&str> = parts
            .iter()
            .map(String::as_str)
            .filter(|part| !part.is_empty())
            .collect();
        format!("{{\n{}\n}}", body.join(",\n"))
    }
}

pub trait Page {
    fn change_renderer(&mut self, renderer: Rc<dyn Renderer>);
    fn view(&self) -> String;
}

pub struct SimplePage {
    renderer: Rc<dyn Renderer>,
    title: String,
    content: String,
}

impl SimplePage {
    pub fn new(renderer: Rc<dyn Renderer>, title: &str, content: &str) -> Self {
        Self {
            renderer,
            title: title.to_string(),
            content: content.to_string(),
        }
    }
}

impl Page for SimplePage {
    fn change_renderer(&mut self, renderer: Rc<dyn Renderer>) {
        self.renderer = renderer;
    }

    fn view(&self) -> String {
        let r = &self.renderer;
        r.render_parts(&[
            r.render_header(),
            r.render_title(&self.title),
            r.render_text_block(&self.content),
            r.render_footer(),
        ])
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub price: f32,
}

pub struct ProductPage {
    renderer: Rc<dyn Renderer>,
    product: Product,
}

impl ProductPage {
    pub fn new(renderer: Rc<dyn Renderer>, product: Product) -> Self {
        Self { renderer, product }
    }
}

impl Page for ProductPage {
    fn change_renderer(&mut self, renderer: Rc<dyn Renderer>) {
        self.renderer = renderer;
    }

    fn view(&self) -> String {
        let r = &self.renderer;
        let p = &self.product;
        r.render_parts(&[
            r.render_header(),
            r.render_title(&p.title),
            r.render_text_block(&p.description),
            r.render_image(&p.image),
            r.render_link(&format!("/cart/add/{}", p.id), "Add to cart"),
            r.render_footer(),
        ])
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let html: Rc<dyn Renderer> = Rc::new(HtmlRenderer);
    let json: Rc<dyn Renderer> = Rc::new(JsonRenderer);

    let mut simple_page = SimplePage::new(Rc::clone(&html), "Home", "Welcome to our website!");
    writeln!(out, "HTML view of a simple content page:")?;
    writeln!(out, "{}", simple_page.view())?;
    writeln!(out)?;

    simple_page.change_renderer(Rc::clone(&json));
    writeln!(
        out,
        "JSON view of a simple content page, rendered with the same client code:"
    )?;
    writeln!(out, "{}", simple_page.view())?;
    writeln!(out)?;

    let product = Product {
        id: "123".to_string(),
        title: "Star Wars, episode1".to_string(),
        description: "A long time ago in a galaxy far, far away...".to_string(),
        image: "/images/star-wars.jpeg".to_string(),
        price: 39.95,
    };

    let mut product_page = ProductPage::new(html, product);
    writeln!(out, "HTML view of a product page, same client code:")?;
    writeln!(out, "{}", product_page.view())?;
    writeln!(out)?;

    product_page.change_renderer(json);
    writeln!(out, "JSON view of a product page, with the same client code:")?;
    writeln!(out, "{}", product_page.view())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_page_views() {
        let mut page = SimplePage::new(Rc::new(HtmlRenderer), "Home", "Welcome to our website!");
        assert_eq!(
            page.view(),
            "<html><body>\n<h1>Home</h1>\n<div class='text'>Welcome to our website!</div>\n</body></html>"
        );

        page.change_renderer(Rc::new(JsonRenderer));
        assert_eq!(
            page.view(),
            "{\n\"title\": \"Home\",\n\"text\": \"Welcome to our website!\"\n}"
        );
    }

    #[test]
    fn test_product_json_is_valid() {
        let page = ProductPage::new(
            Rc::new(JsonRenderer),
            Product {
                id: "7".into(),
                title: "Say \"hi\"".into(),
                description: "d".into(),
                image: "/i.png".into(),
                price: 1.0,
            },
        );
        let value: serde_json::Value = serde_json::from_str(&page.view()).unwrap();
        assert_eq!(value["title"], "Say \"hi\"");
        assert_eq!(value["link"]["href"], "/cart/add/7");
    }

    #[test]
    fn test_headings() {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("HTML view of a simple content page:\n<html><body>\n"));
        assert!(text.contains("\n\nJSON view of a product page, with the same client code:\n{\n"));
        assert!(text.contains("<a href='/cart/add/123'>Add to cart</a>"));
        assert!(text
            .ends_with("\"link\": { \"href\": \"/cart/add/123\", \"title\": \"Add to cart\" }\n}\n"));
    }
}
