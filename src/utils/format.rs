use crate::domain::model::{Address, Parcel};
use std::collections::HashMap;

/// "FIRST LAST - Company" style display name; whichever parts are present.
pub fn format_address_name(address: &Address) -> String {
    match (&address.person_name, &address.company_name) {
        (Some(person), Some(company)) => format!("{} - {}", person, company),
        (Some(person), None) => person.clone(),
        (None, Some(company)) => company.clone(),
        (None, None) => String::new(),
    }
}

/// Single-line postal rendering of an address, resolving the country code
/// through the reference-data country map when available.
pub fn format_full_address(address: &Address, countries: &HashMap<String, String>) -> String {
    let country = address.country_code.as_ref().map(|code| {
        countries
            .get(code)
            .cloned()
            .unwrap_or_else(|| code.clone())
    });

    [
        address.address_line1.clone(),
        address.address_line2.clone(),
        address.city.clone(),
        address.state_code.clone(),
        address.postal_code.clone(),
        country,
    ]
    .into_iter()
    .flatten()
    .filter(|part| !part.is_empty())
    .collect::<Vec<_>>()
    .join(", ")
}

pub fn format_dimension(parcel: &Parcel) -> String {
    match (parcel.length, parcel.width, parcel.height) {
        (Some(length), Some(width), Some(height)) => {
            let unit = parcel.dimension_unit.as_deref().unwrap_or("CM");
            format!("Dimensions: {} x {} x {} {}", length, width, height, unit)
        }
        _ => "Dimensions: none".to_string(),
    }
}

pub fn format_weight(parcel: &Parcel) -> String {
    match parcel.weight {
        Some(weight) => {
            let unit = parcel.weight_unit.as_deref().unwrap_or("KG");
            format!("Weight: {} {}", weight, unit)
        }
        None => "Weight: none".to_string(),
    }
}

/// Prettifies a snake_case service code for display
/// ("canadapost_regular_parcel" -> "Canadapost Regular Parcel").
pub fn format_ref(reference: &str) -> String {
    reference
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
