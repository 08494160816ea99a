//! # Temp-Load Submission Payload
//!
//! The JSON body posted to `/api/temp-loads/create`. It renames and reshapes
//! the form: `destinationCountry` becomes `destCountry`, `weightKg` becomes
//! `weight`, `materialType` becomes `material`, the HSN code becomes the
//! optional `materialHSNCode`, and the load-type label becomes its wire code.

use serde::{Deserialize, Serialize};

use crate::fingerprint::DeviceFingerprint;
use crate::reference::LoadTypeCode;
use crate::validate::ValidatedLoad;

/// Top-level request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    /// Correlates this temp load with the sign-in that follows.
    pub device_hash: DeviceFingerprint,
    /// The load itself.
    pub load_data: LoadData,
}

/// The load description inside [`SubmissionPayload`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadData {
    /// Origin country name.
    pub source_country: String,
    /// Destination country name.
    pub dest_country: String,
    /// `YYYY-MM-DD`.
    pub scheduled_date: String,
    /// The weight text as entered, in kilograms.
    pub weight: String,
    /// Material description.
    pub material: String,
    /// Omitted from the JSON when no HSN code was supplied.
    #[serde(
        rename = "materialHSNCode",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub material_hsn_code: Option<String>,
    /// Wire code of the selected load type.
    pub load_type: LoadTypeCode,
}

impl SubmissionPayload {
    /// Build the payload for a validated load.
    pub fn new(device_hash: DeviceFingerprint, load: &ValidatedLoad) -> Self {
        let form = load.form();
        Self {
            device_hash,
            load_data: LoadData {
                source_country: form.source_country.clone(),
                dest_country: form.destination_country.clone(),
                scheduled_date: form.scheduled_date.clone(),
                weight: form.weight_kg.clone(),
                material: form.material_type.clone(),
                material_hsn_code: load.hsn_code().map(str::to_string),
                load_type: load.load_type(),
            },
        }
    }
}
