//! Fixed-rate loan amortization.
//!
//! Pure and deterministic: the page binding parses the inputs, calls
//! [`LoanTerms::quote`] on every change and either shows the four formatted
//! figures or hides the result when there is nothing to show.

use crate::format::NumberFormat;
use thiserror::Error;

pub const ALLOWED_TERMS: &[u32] = &[12, 24, 36, 48, 60];

#[derive(Debug, Error, Clone, PartialEq)]
pub enum LoanError {
    #[error("unsupported loan term: {0} months")]
    UnsupportedTerm(u32),
    #[error("invalid annual rate: {0}")]
    InvalidRate(f64),
}

/// A term in months that is one of the allowed durations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Term(u32);

impl Term {
    pub fn months(self) -> u32 {
        self.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoanTerms {
    pub min_principal: f64,
    pub max_principal: f64,
    pub annual_rate: f64,
    pub terms: &'static [u32],
    pub default_term: u32,
}

impl Default for LoanTerms {
    fn default() -> Self {
        Self {
            min_principal: 1000.0,
            max_principal: 50000.0,
            annual_rate: 0.07,
            terms: ALLOWED_TERMS,
            default_term: 24,
        }
    }
}

/// Computed schedule totals for one principal/term pair.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quote {
    pub principal: f64,
    pub months: u32,
    pub monthly_rate: f64,
    pub payment: f64,
    pub total_payment: f64,
    pub total_interest: f64,
}

/// The four figures shown to the user, grouped and without decimals.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormattedQuote {
    pub monthly_payment: String,
    pub principal: String,
    pub total_interest: String,
    pub total_payment: String,
}

impl LoanTerms {
    pub fn with_rate(self, annual_rate: f64) -> Result<Self, LoanError> {
        if !annual_rate.is_finite() || annual_rate < 0.0 {
            return Err(LoanError::InvalidRate(annual_rate));
        }
        Ok(Self {
            annual_rate,
            ..self
        })
    }

    pub fn term(&self, months: u32) -> Result<Term, LoanError> {
        if months > 0 && self.terms.contains(&months) {
            Ok(Term(months))
        } else {
            Err(LoanError::UnsupportedTerm(months))
        }
    }

    pub fn default_term(&self) -> Result<Term, LoanError> {
        self.term(self.default_term)
    }

    pub fn clamp_principal(&self, principal: f64) -> f64 {
        principal.clamp(self.min_principal, self.max_principal)
    }

    /// `None` when the principal is missing, not a number, zero or below the
    /// minimum. Amounts above the maximum are capped to it.
    pub fn quote(&self, principal: Option<f64>, term: Term) -> Option<Quote> {
        let principal = principal.filter(|p| p.is_finite() && *p > 0.0)?;
        if principal < self.min_principal {
            return None;
        }
        let principal = principal.min(self.max_principal);
        let months = term.months();
        let monthly_rate = self.annual_rate / 12.0;
        let payment = amortized_payment(principal, monthly_rate, months);
        let total_payment = payment * months as f64;
        Some(Quote {
            principal,
            months,
            monthly_rate,
            payment,
            total_payment,
            total_interest: total_payment - principal,
        })
    }
}

impl Quote {
    pub fn formatted(&self, fmt: &NumberFormat) -> FormattedQuote {
        FormattedQuote {
            monthly_payment: fmt.integer(self.payment),
            principal: fmt.integer(self.principal),
            total_interest: fmt.integer(self.total_interest),
            total_payment: fmt.integer(self.total_payment),
        }
    }
}

/// `A = P·i·(1+i)^n / ((1+i)^n − 1)`, or `P / n` at a zero rate.
pub fn amortized_payment(principal: f64, monthly_rate: f64, months: u32) -> f64 {
    if months == 0 {
        return 0.0;
    }
    let n = months as f64;
    if monthly_rate == 0.0 {
        return principal / n;
    }
    let growth = (1.0 + monthly_rate).powf(n);
    principal * monthly_rate * growth / (growth - 1.0)
}

/// Leading decimal number of an input field value, ignoring trailing junk
/// (`"12500 lei"` → `12500`). `None` when no number starts the text.
pub fn parse_principal(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;
    for (i, c) in s.char_indices() {
        match c {
            '+' | '-' if i == 0 => {}
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end = i + c.len_utf8();
    }
    if !seen_digit {
        return None;
    }
    s[..end]
        .trim_end_matches('.')
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}
