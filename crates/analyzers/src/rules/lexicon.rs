//! Fixed term catalogs used by the pattern checks.

/// Jurisdictions commonly associated with regulatory arbitrage in deal
/// documents. Matched whole-word, case-insensitive.
pub static OFFSHORE_JURISDICTIONS: &[&str] = &[
    "Cayman Islands",
    "British Virgin Islands",
    "Bermuda",
    "Isle of Man",
    "Jersey",
    "Guernsey",
    "Cyprus",
    "Malta",
    "Mauritius",
    "Seychelles",
    "Panama",
    "Belize",
    "Liechtenstein",
    "Marshall Islands",
    "Vanuatu",
];

/// Vague, non-committal terms. Flagged only when used excessively.
pub static WEASEL_WORDS: &[&str] = &[
    "reasonable efforts",
    "commercially reasonable",
    "best efforts",
    "substantially",
    "materially",
    "approximately",
    "generally",
    "customary",
    "appropriate",
    "satisfactory",
    "from time to time",
    "as applicable",
    "mutually agreed",
];

/// Phrases indicating disclosures deferred past signing.
pub static HIGH_RISK_PHRASES: &[&str] = &[
    "to be provided",
    "to be determined",
    "to be agreed",
    "to be disclosed",
    "subject to completion",
    "under negotiation",
    "pending review",
    "not yet available",
];

/// Indicators that schedules or exhibits are incomplete. The schedules check
/// stops at the first one found.
pub static MISSING_SCHEDULE_INDICATORS: &[&str] = &[
    "being finalized",
    "to be provided",
    "being compiled",
    "will be attached",
    "to be determined",
];
