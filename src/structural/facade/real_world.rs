// Facade - mortgage application.
// `Mortgage` hides the bank, loan and credit checks behind one eligibility call.

use std::io::Write;

use tracing::debug;

use crate::Result;

#[derive(Debug, Clone)]
pub struct Customer {
    pub name: String,
    pub savings: f64,
    pub bad_loans: u32,
    pub credit_score: u32,
}

impl Customer {
    pub fn new(name: &str, savings: f64, bad_loans: u32, credit_score: u32) -> Self {
        Self {
            name: name.to_string(),
            savings,
            bad_loans,
            credit_score,
        }
    }
}

/// Formats an amount as US dollars, e.g. `$125,000.00`.
pub fn format_currency(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let digits = (cents / 100).to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{sign}${grouped}.{:02}", cents % 100)
}

#[derive(Debug, Default)]
pub struct Bank;

impl Bank {
    /// A fifth of the loan must be covered by savings.
    pub fn has_sufficient_savings(
        &self,
        c: &Customer,
        amount: f64,
        out: &mut dyn Write,
    ) -> Result<bool> {
        writeln!(out, "Check bank for {}", c.name)?;
        Ok(c.savings >= amount * 0.2)
    }
}

#[derive(Debug, Default)]
pub struct Loan;

impl Loan {
    pub fn has_no_bad_loans(&self, c: &Customer, out: &mut dyn Write) -> Result<bool> {
        writeln!(out, "Check loans for {}", c.name)?;
        Ok(c.bad_loans == 0)
    }
}

#[derive(Debug, Default)]
pub struct Credit;

impl Credit {
    pub fn has_good_credit(&self, c: &Customer, out: &mut dyn Write) -> Result<bool> {
        writeln!(out, "Check credit for {}", c.name)?;
        Ok(c.credit_score >= 650)
    }
}

#[derive(Debug, Default)]
pub struct Mortgage {
    bank: Bank,
    loan: Loan,
    credit: Credit,
}

impl Mortgage {
    /// Checks stop at the first failure.
    pub fn is_eligible(
        &self,
        customer: &Customer,
        amount: f64,
        out: &mut dyn Write,
    ) -> Result<bool> {
        writeln!(out, "{} applies for {} loan", customer.name, format_currency(amount))?;
        writeln!(out)?;

        let eligible = self.bank.has_sufficient_savings(customer, amount, out)?
            && self.loan.has_no_bad_loans(customer, out)?
            && self.credit.has_good_credit(customer, out)?;

        debug!(customer = %customer.name, amount, eligible, "mortgage decision");
        Ok(eligible)
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let mortgage = Mortgage::default();
    let customer = Customer::new("Ann McKinsey", 40_000.0, 0, 720);

    let eligible = mortgage.is_eligible(&customer, 125_000.0, out)?;

    writeln!(out)?;
    writeln!(
        out,
        "{} has been {}",
        customer.name,
        if eligible { "Approved" } else { "Rejected" }
    )?;
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
            "Ann McKinsey applies for $125,000.00 loan\n\
             \n\
             Check bank for Ann McKinsey\n\
             Check loans for Ann McKinsey\n\
             Check credit for Ann McKinsey\n\
             \n\
             Ann McKinsey has been Approved\n"
        );
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(999.5), "$999.50");
        assert_eq!(format_currency(1_000.0), "$1,000.00");
        assert_eq!(format_currency(1_234_567.891), "$1,234,567.89");
        assert_eq!(format_currency(-42.0), "-$42.00");
    }

    #[test]
    fn test_rejection_stops_at_first_failed_check() {
        let mut out = Vec::new();
        let customer = Customer::new("Bob", 100.0, 0, 800);
        let eligible = Mortgage::default()
            .is_eligible(&customer, 50_000.0, &mut out)
            .unwrap();

        assert!(!eligible);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Check bank for Bob"));
        assert!(!text.contains("Check loans"));
    }
}
