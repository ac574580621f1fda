//! Vehicle display helpers.
//!
//! The booking form and quick-add modal collect year/make/model as free text;
//! these helpers derive the canonical label shown everywhere else in the app.

/// "2019 Subaru Outback"-style display label.
pub fn vehicle_label(year: i16, make: &str, model: &str) -> String {
    format!("{} {} {}", year, make.trim(), model.trim())
        .trim()
        .to_string()
}

/// VINs are stored uppercase with separators removed.
pub fn normalize_vin(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}
