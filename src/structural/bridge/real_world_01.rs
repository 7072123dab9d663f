// Bridge - customers business object over a data object.
// The cursor stays on a valid record and deleting removes the named customer.

use std::io::Write;

use crate::{PatternError, Result};

pub trait DataObject {
    fn next_record(&mut self);
    fn prior_record(&mut self);
    fn add_record(&mut self, customer: &str);
    fn delete_record(&mut self, customer: &str) -> Result<()>;
    fn current_record(&self) -> Option<&str>;
    fn show_record(&self, out: &mut dyn Write) -> Result<()>;
    fn show_all_records(&self, out: &mut dyn Write) -> Result<()>;
}

#[derive(Debug)]
pub struct CustomersDataObject {
    customers: Vec<String>,
    city: String,
    current: usize,
}

impl CustomersDataObject {
    pub fn new(city: impl Into<String>) -> Self {
        Self {
            customers: ["Jim Jones", "Samual Jackson", "Allen Good", "Ann Stills", "Lisa Giolani"]
                .into_iter()
                .map(String::from)
                .collect(),
            city: city.into(),
            current: 0,
        }
    }
}

impl DataObject for CustomersDataObject {
    fn next_record(&mut self) {
        if self.current + 1 < self.customers.len() {
            self.current += 1;
        }
    }

    fn prior_record(&mut self) {
        self.current = self.current.saturating_sub(1);
    }

    fn add_record(&mut self, customer: &str) {
        self.customers.push(customer.to_string());
    }

    fn delete_record(&mut self, customer: &str) -> Result<()> {
        let index = self
            .customers
            .iter()
            .position(|c| c == customer)
            .ok_or_else(|| PatternError::unknown_key("customer", customer))?;
        self.customers.remove(index);
        self.current = self.current.min(self.customers.len().saturating_sub(1));
        Ok(())
    }

    fn current_record(&self) -> Option<&str> {
        self.customers.get(self.current).map(String::as_str)
    }

    fn show_record(&self, out: &mut dyn Write) -> Result<()> {
        if let Some(customer) = self.current_record() {
            writeln!(out, "{customer}")?;
        }
        Ok(())
    }

    fn show_all_records(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Customer City: {}", self.city)?;
        for customer in &self.customers {
            writeln!(out, "  {customer}")?;
        }
        Ok(())
    }
}

/// The abstraction: business operations forwarded to whichever data object is plugged in.
pub struct Customers {
    data: Box<dyn DataObject>,
}

impl Customers {
    pub fn new(data: Box<dyn DataObject>) -> Self {
        Self { data }
    }

    pub fn set_data_object(&mut self, data: Box<dyn DataObject>) {
        self.data = data;
    }

    pub fn next(&mut self) {
        self.data.next_record();
    }

    pub fn prior(&mut self) {
        self.data.prior_record();
    }

    pub fn add(&mut self, customer: &str) {
        self.data.add_record(customer);
    }

    pub fn delete(&mut self, customer: &str) -> Result<()> {
        self.data.delete_record(customer)
    }

    pub fn current(&self) -> Option<&str> {
        self.data.current_record()
    }

    pub fn show(&self, out: &mut dyn Write) -> Result<()> {
        self.data.show_record(out)
    }

    pub fn show_all(&self, out: &mut dyn Write) -> Result<()> {
        self.data.show_all_records(out)
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let mut customers = Customers::new(Box::new(CustomersDataObject::new("Chicago")));

    customers.show(out)?;
    customers.next();
    customers.show(out)?;
    customers.next();
    customers.show(out)?;
    customers.add("Henry Velasquez");

    writeln!(out)?;

    customers.show_all(out)
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
            "Jim Jones\nSamual Jackson\nAllen Good\n\n\
             Customer City: Chicago\n  Jim Jones\n  Samual Jackson\n  Allen Good\n  Ann Stills\n  Lisa Giolani\n  Henry Velasquez\n"
        );
    }

    #[test]
    fn test_cursor_stays_in_range() {
        let mut customers = Customers::new(Box::new(CustomersDataObject::new("Boston")));
        customers.prior();
        assert_eq!(customers.current(), Some("Jim Jones"));

        for _ in 0..10 {
            customers.next();
        }
        assert_eq!(customers.current(), Some("Lisa Giolani"));
    }

    #[test]
    fn test_delete_removes_customer() {
        let mut customers = Customers::new(Box::new(CustomersDataObject::new("Boston")));
        for _ in 0..4 {
            customers.next();
        }
        customers.delete("Lisa Giolani").unwrap();
        assert_eq!(customers.current(), Some("Ann Stills"));
        assert!(customers.delete("Lisa Giolani").is_err());
    }

    #[test]
    fn test_swapping_data_object() {
        let mut customers = Customers::new(Box::new(CustomersDataObject::new("Boston")));
        let mut replacement = CustomersDataObject::new("Denver");
        replacement.next_record();
        customers.set_data_object(Box::new(replacement));
        assert_eq!(customers.current(), Some("Samual Jackson"));
    }
}
