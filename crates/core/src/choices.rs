//! Display text for consent record codes.
//!
//! Consent records carry numeric codes for their type and, optionally, the patient's code
//! status. These tables map the codes to the text shown in the panel header.

/// One code and its display text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Choice {
    pub id: u32,
    pub text: &'static str,
}

pub const CONSENT_TYPE_CHOICES: &[Choice] = &[
    Choice {
        id: 1,
        text: "Consent for Admission",
    },
    Choice {
        id: 2,
        text: "Patient Code Status",
    },
    Choice {
        id: 3,
        text: "Consent for Procedure",
    },
    Choice {
        id: 4,
        text: "High Risk Consent",
    },
    Choice {
        id: 5,
        text: "Others",
    },
];

pub const CONSENT_PATIENT_CODE_STATUS_CHOICES: &[Choice] = &[
    Choice {
        id: 1,
        text: "Do Not Hospitalise (DNH)",
    },
    Choice {
        id: 2,
        text: "Do Not Resuscitate (DNR)",
    },
    Choice {
        id: 3,
        text: "Comfort Care Only",
    },
    Choice {
        id: 4,
        text: "Active treatment",
    },
];

fn lookup(choices: &[Choice], id: u32) -> Option<&'static str> {
    choices.iter().find(|c| c.id == id).map(|c| c.text)
}

/// Text for a consent type code, or `None` for an unknown code.
pub fn consent_type_text(id: u32) -> Option<&'static str> {
    lookup(CONSENT_TYPE_CHOICES, id)
}

/// Text for a patient code status code, or `None` for an unknown code.
pub fn patient_code_status_text(id: u32) -> Option<&'static str> {
    lookup(CONSENT_PATIENT_CODE_STATUS_CHOICES, id)
}
