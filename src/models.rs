//! Menu Models
//!
//! Pizza records, sort state, and the raw form submission shape.

use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

use crate::config::{IMAGE_DIR, MAX_HEAT, MIN_HEAT, MIN_TOPPINGS, PHOTO_EXT};
use crate::error::{MenuError, MenuResult};

/// One pizza on the menu
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PizzaEntry {
    /// Unique across the menu (exact, case-sensitive)
    pub name: String,
    #[serde(deserialize_with = "de_price")]
    pub price: f64,
    /// Spiciness, 1..=3 for accepted entries
    #[serde(deserialize_with = "de_heat")]
    pub heat: i32,
    pub toppings: Vec<String>,
    /// Photo identifier, see `photo_src`
    pub photo: String,
}

impl PizzaEntry {
    pub fn new(name: &str, price: f64, heat: i32, toppings: &[&str], photo: &str) -> Self {
        Self {
            name: name.to_string(),
            price,
            heat,
            toppings: toppings.iter().map(|t| t.to_string()).collect(),
            photo: photo.to_string(),
        }
    }

    /// Check the entry before it is offered to the menu
    pub fn validate(&self) -> MenuResult<()> {
        if self.name.is_empty() {
            return Err(MenuError::EmptyName);
        }
        if self.heat < MIN_HEAT || self.heat > MAX_HEAT {
            return Err(MenuError::HeatOutOfRange(self.heat));
        }
        if self.toppings.len() < MIN_TOPPINGS {
            return Err(MenuError::TooFewToppings(self.toppings.len()));
        }
        Ok(())
    }

    pub fn photo_src(&self) -> String {
        photo_src(&self.photo)
    }
}

/// Image path for a photo identifier
pub fn photo_src(photo: &str) -> String {
    format!("{}/{}.{}", IMAGE_DIR, photo, PHOTO_EXT)
}

// Older sessions stored the raw form strings ("10", "2"), so both numbers
// and numeric strings are accepted on the way in.
#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Int(i64),
    Float(f64),
    Text(String),
}

fn de_price<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Int(v) => Ok(v as f64),
        NumberOrText::Float(v) => Ok(v),
        NumberOrText::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| serde::de::Error::custom(format!("invalid price \"{}\"", s))),
    }
}

fn de_heat<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i32, D::Error> {
    match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Int(v) => i32::try_from(v)
            .map_err(|_| serde::de::Error::custom(format!("heat {} out of range", v))),
        NumberOrText::Float(v) => Err(serde::de::Error::custom(format!("heat {} is not an integer", v))),
        NumberOrText::Text(s) => s
            .trim()
            .parse::<i32>()
            .map_err(|_| serde::de::Error::custom(format!("invalid heat \"{}\"", s))),
    }
}

/// Column the menu can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Name,
    Price,
    Heat,
}

impl SortField {
    pub const ALL: [SortField; 3] = [SortField::Name, SortField::Price, SortField::Heat];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::Price => "price",
            SortField::Heat => "heat",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortField::Name => "Name",
            SortField::Price => "Price",
            SortField::Heat => "Heat",
        }
    }
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(SortField::Name),
            "price" => Ok(SortField::Price),
            "heat" => Ok(SortField::Heat),
            other => Err(format!("unknown sort field \"{}\"", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flip(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Transient sort toggle state, never persisted.
///
/// A session starts with no field picked, so the first sort of any column,
/// name included, is ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    pub field: Option<SortField>,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field: Some(field), direction }
    }

    /// Same field flips the direction, a new field starts ascending
    pub fn toggle(&mut self, field: SortField) {
        if self.field == Some(field) {
            self.direction = self.direction.flip();
        } else {
            self.field = Some(field);
            self.direction = SortDirection::Ascending;
        }
    }
}

/// Raw values collected by the pizza form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PizzaForm {
    pub name: String,
    pub price: String,
    pub heat: String,
    pub toppings: Vec<String>,
    pub photo: String,
}

impl PizzaForm {
    /// Coerce the raw form values into an entry.
    ///
    /// Unparsable heat becomes 0 so that validation rejects it.
    pub fn into_entry(self) -> MenuResult<PizzaEntry> {
        let price = self
            .price
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite())
            .ok_or_else(|| MenuError::InvalidPrice(self.price.clone()))?;
        let heat = self.heat.trim().parse::<i32>().unwrap_or(0);
        Ok(PizzaEntry {
            name: self.name.trim().to_string(),
            price,
            heat,
            toppings: self.toppings,
            photo: self.photo,
        })
    }
}
