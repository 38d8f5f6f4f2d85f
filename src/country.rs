//! Country dial codes offered on the sign-up form.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Country {
    /// ISO 3166-1 alpha-2.
    pub code: &'static str,
    pub name: &'static str,
    pub dial_code: &'static str,
}

const COUNTRIES: &[Country] = &[
    Country {
        code: "US",
        name: "United States",
        dial_code: "+1",
    },
    Country {
        code: "CA",
        name: "Canada",
        dial_code: "+1",
    },
    Country {
        code: "GB",
        name: "United Kingdom",
        dial_code: "+44",
    },
    Country {
        code: "AU",
        name: "Australia",
        dial_code: "+61",
    },
    Country {
        code: "DE",
        name: "Germany",
        dial_code: "+49",
    },
    Country {
        code: "FR",
        name: "France",
        dial_code: "+33",
    },
    Country {
        code: "JP",
        name: "Japan",
        dial_code: "+81",
    },
    Country {
        code: "CN",
        name: "China",
        dial_code: "+86",
    },
    Country {
        code: "IN",
        name: "India",
        dial_code: "+91",
    },
    Country {
        code: "BR",
        name: "Brazil",
        dial_code: "+55",
    },
    Country {
        code: "MX",
        name: "Mexico",
        dial_code: "+52",
    },
    Country {
        code: "IT",
        name: "Italy",
        dial_code: "+39",
    },
    Country {
        code: "ES",
        name: "Spain",
        dial_code: "+34",
    },
    Country {
        code: "KR",
        name: "South Korea",
        dial_code: "+82",
    },
    Country {
        code: "RU",
        name: "Russia",
        dial_code: "+7",
    },
];

pub fn all() -> &'static [Country] {
    COUNTRIES
}

/// The form's initial selection.
pub fn default_country() -> Country {
    COUNTRIES[0]
}

pub fn by_code(code: &str) -> Option<Country> {
    COUNTRIES
        .iter()
        .find(|c| c.code.eq_ignore_ascii_case(code))
        .copied()
}

/// Case-insensitive match on name or ISO code, substring match on dial code.
pub fn search(query: &str) -> Vec<Country> {
    let query = query.trim();
    if query.is_empty() {
        return COUNTRIES.to_vec();
    }
    let lowered = query.to_lowercase();
    COUNTRIES
        .iter()
        .filter(|c| {
            c.name.to_lowercase().contains(&lowered)
                || c.code.to_lowercase().contains(&lowered)
                || c.dial_code.contains(query)
        })
        .copied()
        .collect()
}

/// Phone number as passed to sign-up: dial code immediately followed by the
/// local number.
pub fn format_phone(country: &Country, local_number: &str) -> String {
    format!("{}{}", country.dial_code, local_number)
}
