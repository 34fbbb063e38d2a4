use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

pub const NAIVE_DATE_FMT: &str = "%Y-%m-%d";

/// One candidate's application form, filled incrementally by the UI.
///
/// Every field is optional and carried as the raw form string; no
/// cross-field rules are enforced at this layer. Unset fields are omitted
/// from the wire form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthplace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthdate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telephone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub citizenship: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sex: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub study: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personal_id_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_surname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_telephone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_email: Option<String>,
}

impl CandidateData {
    /// Shallow merge: fields set on `patch` replace the current value,
    /// unset fields leave it untouched.
    pub fn merge(&mut self, patch: CandidateData) {
        if let Some(name) = patch.name {
            self.name = Some(name);
        }
        if let Some(surname) = patch.surname {
            self.surname = Some(surname);
        }
        if let Some(birthplace) = patch.birthplace {
            self.birthplace = Some(birthplace);
        }
        if let Some(birthdate) = patch.birthdate {
            self.birthdate = Some(birthdate);
        }
        if let Some(address) = patch.address {
            self.address = Some(address);
        }
        if let Some(telephone) = patch.telephone {
            self.telephone = Some(telephone);
        }
        if let Some(citizenship) = patch.citizenship {
            self.citizenship = Some(citizenship);
        }
        if let Some(email) = patch.email {
            self.email = Some(email);
        }
        if let Some(sex) = patch.sex {
            self.sex = Some(sex);
        }
        if let Some(study) = patch.study {
            self.study = Some(study);
        }
        if let Some(personal_id_number) = patch.personal_id_number {
            self.personal_id_number = Some(personal_id_number);
        }
        if let Some(parent_name) = patch.parent_name {
            self.parent_name = Some(parent_name);
        }
        if let Some(parent_surname) = patch.parent_surname {
            self.parent_surname = Some(parent_surname);
        }
        if let Some(parent_telephone) = patch.parent_telephone {
            self.parent_telephone = Some(parent_telephone);
        }
        if let Some(parent_email) = patch.parent_email {
            self.parent_email = Some(parent_email);
        }
    }

    /// Whether the fields required for submission are all present.
    pub fn is_filled(&self) -> bool {
        self.name.is_some()
            && self.surname.is_some()
            && self.birthplace.is_some()
            && self.birthdate.is_some()
            && self.address.is_some()
            && self.telephone.is_some()
            && self.citizenship.is_some()
            && self.email.is_some()
            && self.personal_id_number.is_some()
    }

    /// The birthdate form string as a date, if set.
    pub fn parsed_birthdate(&self) -> Result<Option<NaiveDate>, ApiError> {
        match self.birthdate.as_deref() {
            None => Ok(None),
            Some(raw) => NaiveDate::parse_from_str(raw, NAIVE_DATE_FMT)
                .map(Some)
                .map_err(|e| ApiError::wrap(e, "Invalid birthdate")),
        }
    }
}

/// Identifies one candidate in list views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidatePreview {
    pub application_id: i32,
    pub name: String,
    pub surname: String,
    pub study: String,
}

/// Credentials of an existing candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateLogin {
    pub application_id: i32,
    pub password: String,
}

/// Registration payload for the admin create endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCandidate {
    pub application_id: i32,
    pub personal_id_number: String,
}

/// [`CreateCandidate`] plus the initial password, serialized flat so the
/// wire shape matches the registration endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCandidateLogin {
    #[serde(flatten)]
    pub create: CreateCandidate,
    pub password: String,
}
