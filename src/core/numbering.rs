use chrono::{Datelike, NaiveDate};

use super::error::FacturaError;

/// Gapless invoice number sequence for one serie.
///
/// Generates numbers in the format `{serie}-{year}-{sequential}`,
/// e.g. "A-2026-0001", "A-2026-0002".
///
/// Verifactu (RD 1007/2023) and RD 1619/2012 Art. 6.1.a require
/// correlative, gapless numbering within each serie; rectificative
/// invoices must be issued in a serie of their own.
#[derive(Debug, Clone)]
pub struct SerieFactura {
    serie: String,
    year: i32,
    next_number: u64,
    zero_pad: usize,
}

impl SerieFactura {
    /// Create a new sequence starting at 1.
    ///
    /// The serie must be non-empty uppercase letters and digits.
    pub fn new(serie: impl Into<String>, year: i32) -> Result<Self, FacturaError> {
        Self::starting_at(serie, year, 1)
    }

    /// Create a sequence continuing from a given number (e.g. restored
    /// from the persistence layer).
    pub fn starting_at(
        serie: impl Into<String>,
        year: i32,
        next_number: u64,
    ) -> Result<Self, FacturaError> {
        let serie = serie.into();
        if serie.is_empty()
            || !serie
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        {
            return Err(FacturaError::Numbering(format!(
                "serie must be non-empty uppercase letters and digits, got: '{serie}'"
            )));
        }
        if next_number == 0 {
            return Err(FacturaError::Numbering(
                "sequence numbers start at 1".into(),
            ));
        }
        Ok(Self {
            serie,
            year,
            next_number,
            zero_pad: 4,
        })
    }

    /// Set zero-padding width (default: 4, so "0001").
    pub fn with_padding(mut self, width: usize) -> Self {
        self.zero_pad = width;
        self
    }

    /// Generate the next invoice number, consuming it.
    pub fn next_number(&mut self) -> String {
        let numero = self.peek();
        self.next_number += 1;
        numero
    }

    /// Preview the next number without consuming it.
    pub fn peek(&self) -> String {
        format!(
            "{}-{}-{:0>width$}",
            self.serie,
            self.year,
            self.next_number,
            width = self.zero_pad
        )
    }

    /// The serie identifier.
    pub fn serie(&self) -> &str {
        &self.serie
    }

    /// The current year of the sequence.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The next number that will be issued (without serie/formatting).
    pub fn next_raw(&self) -> u64 {
        self.next_number
    }

    /// Advance to a new year, resetting the counter to 1.
    pub fn advance_year(&mut self, new_year: i32) -> Result<(), FacturaError> {
        if new_year <= self.year {
            return Err(FacturaError::Numbering(format!(
                "new year {new_year} must be greater than current year {}",
                self.year
            )));
        }
        self.year = new_year;
        self.next_number = 1;
        Ok(())
    }

    /// Auto-advance year if the given issue date is in a later year.
    /// Returns true if the year was advanced.
    pub fn auto_advance(&mut self, fecha: NaiveDate) -> bool {
        let fecha_year = fecha.year();
        if fecha_year > self.year {
            self.year = fecha_year;
            self.next_number = 1;
            true
        } else {
            false
        }
    }

    /// Derive the rectificative serie for this one ("R" prefix),
    /// starting at 1 in the same year.
    pub fn serie_rectificativa(&self) -> Self {
        Self {
            serie: format!("R{}", self.serie),
            year: self.year,
            next_number: 1,
            zero_pad: self.zero_pad,
        }
    }
}
