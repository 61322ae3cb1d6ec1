//! Closed input catalogs for the advisory form.
//!
//! Districts and seasons are fixed sets matching what the upstream Odisha
//! yield model was trained on; crops are listed per season. Membership is
//! advisory -- it feeds form dropdowns and the CLI catalog command -- and
//! is deliberately not enforced by the validator, since the upstream
//! model rejects unknown names with its own error string.

/// The 30 districts of Odisha.
pub const DISTRICTS: &[&str] = &[
    "Angul",
    "Balangir",
    "Balasore",
    "Bargarh",
    "Bhadrak",
    "Boudh",
    "Cuttack",
    "Deogarh",
    "Dhenkanal",
    "Gajapati",
    "Ganjam",
    "Jagatsinghpur",
    "Jajpur",
    "Jharsuguda",
    "Kalahandi",
    "Kandhamal",
    "Kendrapara",
    "Keonjhar",
    "Khordha",
    "Koraput",
    "Malkangiri",
    "Mayurbhanj",
    "Nabarangpur",
    "Nayagarh",
    "Nuapada",
    "Puri",
    "Rayagada",
    "Sambalpur",
    "Subarnapur",
    "Sundargarh",
];

/// Cropping seasons, in calendar order.
pub const SEASONS: &[&str] = &["Kharif", "Rabi", "Summer"];

const KHARIF_CROPS: &[&str] = &[
    "Rice", "Maize", "Ragi", "Arhar", "Groundnut", "Cotton", "Sugarcane", "Turmeric",
];

const RABI_CROPS: &[&str] = &[
    "Wheat", "Mustard", "Gram", "Horse Gram", "Potato", "Sunflower",
];

const SUMMER_CROPS: &[&str] = &["Rice", "Moong", "Sesamum", "Groundnut"];

/// Returns the crops grown in the given season, or `None` for an unknown
/// season name. Matching is case-sensitive, like the form dropdowns.
pub fn crops_for_season(season: &str) -> Option<&'static [&'static str]> {
    match season {
        "Kharif" => Some(KHARIF_CROPS),
        "Rabi" => Some(RABI_CROPS),
        "Summer" => Some(SUMMER_CROPS),
        _ => None,
    }
}

pub fn is_known_district(district: &str) -> bool {
    DISTRICTS.contains(&district)
}

pub fn is_known_season(season: &str) -> bool {
    SEASONS.contains(&season)
}
