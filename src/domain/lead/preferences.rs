//! Property preferences inferred from the conversation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether the visitor wants to rent or buy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Purpose {
    Rent,
    Buy,
}

impl fmt::Display for Purpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Purpose::Rent => "Rent",
            Purpose::Buy => "Buy",
        };
        write!(f, "{}", s)
    }
}

/// One of the four preference slots the questionnaire fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreferenceField {
    Unit,
    Purpose,
    Budget,
    Area,
}

/// The four-field structure the conversation aims to fill.
///
/// # Invariants
///
/// - A populated field is never cleared or replaced; the `fill_*` methods
///   only write into empty slots.
/// - Text slots never hold an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    unit: Option<String>,
    #[serde(default)]
    purpose: Option<Purpose>,
    #[serde(default)]
    budget: Option<String>,
    #[serde(default)]
    area: Option<String>,
}

impl Preferences {
    /// Creates preferences with every field unset.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unit(&self) -> Option<&str> {
        self.unit.as_deref()
    }

    pub fn purpose(&self) -> Option<Purpose> {
        self.purpose
    }

    pub fn budget(&self) -> Option<&str> {
        self.budget.as_deref()
    }

    pub fn area(&self) -> Option<&str> {
        self.area.as_deref()
    }

    /// Returns true if the given slot holds a value.
    pub fn is_set(&self, field: PreferenceField) -> bool {
        match field {
            PreferenceField::Unit => self.unit.is_some(),
            PreferenceField::Purpose => self.purpose.is_some(),
            PreferenceField::Budget => self.budget.is_some(),
            PreferenceField::Area => self.area.is_some(),
        }
    }

    /// Returns true once all four slots are filled.
    pub fn is_complete(&self) -> bool {
        self.unit.is_some() && self.purpose.is_some() && self.budget.is_some() && self.area.is_some()
    }

    /// Sets `unit` if it is still empty. Returns true if the value was taken.
    pub fn fill_unit(&mut self, value: impl Into<String>) -> bool {
        fill_text(&mut self.unit, value.into())
    }

    /// Sets `purpose` if it is still empty. Returns true if the value was taken.
    pub fn fill_purpose(&mut self, value: Purpose) -> bool {
        if self.purpose.is_some() {
            return false;
        }
        self.purpose = Some(value);
        true
    }

    /// Sets `budget` if it is still empty. Returns true if the value was taken.
    pub fn fill_budget(&mut self, value: impl Into<String>) -> bool {
        fill_text(&mut self.budget, value.into())
    }

    /// Sets `area` if it is still empty. Returns true if the value was taken.
    pub fn fill_area(&mut self, value: impl Into<String>) -> bool {
        fill_text(&mut self.area, value.into())
    }
}

fn fill_text(slot: &mut Option<String>, value: String) -> bool {
    if slot.is_some() || value.trim().is_empty() {
        return false;
    }
    *slot = Some(value);
    true
}
