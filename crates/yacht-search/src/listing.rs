//! Listing and professional rows as stored, and the view-models the result
//! pages render. Missing upstream values become display defaults here so
//! pages never have to deal with nulls.

use serde::{Deserialize, Serialize};

use crate::mode::ServiceCategory;

pub const POA: &str = "POA";
pub const LOCATION_TBC: &str = "Location TBC";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingKind {
    #[default]
    Sale,
    Charter,
}

/// A yacht listing as it comes out of storage. Every column but `id` may be
/// missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListingRow {
    pub id: String,
    #[serde(default)]
    pub kind: ListingKind,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub builder: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub year: Option<u16>,
    #[serde(default)]
    pub length_m: Option<f32>,
    #[serde(default)]
    pub berths: Option<u8>,
    #[serde(default)]
    pub location: Option<String>,
    /// Price in minor currency units (cents). `None` means price on application.
    #[serde(default)]
    pub price_minor: Option<i64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub seller: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

/// Display-ready listing.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingCard {
    pub id: String,
    pub kind: ListingKind,
    pub title: String,
    pub subtitle: String,
    pub location: String,
    pub price: String,
    pub berths: u8,
    pub length_m: f32,
    pub description: String,
    pub seller: String,
    pub featured: bool,
}

impl From<&ListingRow> for ListingCard {
    fn from(row: &ListingRow) -> Self {
        let title = row
            .name
            .clone()
            .or_else(|| row.model.clone())
            .unwrap_or_default();

        let mut parts = Vec::new();
        match (&row.builder, &row.model) {
            (Some(b), Some(m)) => parts.push(format!("{b} {m}")),
            (Some(b), None) => parts.push(b.clone()),
            (None, Some(m)) => parts.push(m.clone()),
            (None, None) => {}
        }
        if let Some(y) = row.year {
            parts.push(y.to_string());
        }
        if let Some(len) = row.length_m {
            parts.push(format!("{len:.1} m"));
        }

        let mut price = match row.price_minor {
            Some(minor) => format_price(minor, row.currency.as_deref().unwrap_or("EUR")),
            None => POA.to_string(),
        };
        if row.kind == ListingKind::Charter && row.price_minor.is_some() {
            price.push_str(" / week");
        }

        Self {
            id: row.id.clone(),
            kind: row.kind,
            title,
            subtitle: parts.join(" · "),
            location: row
                .location
                .clone()
                .filter(|l| !l.trim().is_empty())
                .unwrap_or_else(|| LOCATION_TBC.to_string()),
            price,
            berths: row.berths.unwrap_or(0),
            length_m: row.length_m.unwrap_or(0.0),
            description: row.description.clone().unwrap_or_default(),
            seller: row.seller.clone().unwrap_or_default(),
            featured: row.featured,
        }
    }
}

/// A marine professional (broker, surveyor, ...) profile row.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfessionalRow {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category: ServiceCategory,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProfessionalCard {
    pub id: String,
    pub name: String,
    pub category: ServiceCategory,
    pub category_label: String,
    pub location: String,
    pub description: String,
    pub website: String,
}

impl From<&ProfessionalRow> for ProfessionalCard {
    fn from(row: &ProfessionalRow) -> Self {
        let category_label = if row.category.is_all() {
            "Marine professional".to_string()
        } else {
            row.category.label().to_string()
        };
        Self {
            id: row.id.clone(),
            name: row.name.clone().unwrap_or_default(),
            category: row.category,
            category_label,
            location: row
                .location
                .clone()
                .unwrap_or_else(|| "Worldwide".to_string()),
            description: row.description.clone().unwrap_or_default(),
            website: row.website.clone().unwrap_or_default(),
        }
    }
}

/// Format a minor-unit amount as whole major units with thousands
/// separators: `125000000, "EUR"` → `"€1,250,000"`.
pub fn format_price(minor: i64, currency: &str) -> String {
    let major = minor / 100;
    let digits = major.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if major < 0 { "-" } else { "" };
    match currency_symbol(currency) {
        Some(sym) => format!("{sign}{sym}{grouped}"),
        None => format!("{sign}{} {grouped}", currency.to_uppercase()),
    }
}

fn currency_symbol(code: &str) -> Option<&'static str> {
    match code.to_ascii_uppercase().as_str() {
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        "USD" => Some("$"),
        _ => None,
    }
}
