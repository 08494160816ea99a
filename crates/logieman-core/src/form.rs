//! # Form State
//!
//! `LoadFormState` is the single mutable record behind one mounted
//! "post a load" form. It is created empty, mutated one field at a time,
//! and discarded after a successful or abandoned submission.
//!
//! `FieldErrors` is recomputed wholesale by each validation pass and
//! cleared one field at a time as the user edits.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The fields of the load form, in form-declaration order.
///
/// The derived `Ord` follows declaration order; focus after a failed
/// validation goes to the smallest failing field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    /// Origin country select.
    SourceCountry,
    /// Destination country select.
    DestinationCountry,
    /// Weight in kilograms, free text.
    WeightKg,
    /// Load-type select.
    LoadType,
    /// Material description.
    MaterialType,
    /// Pickup date, `YYYY-MM-DD`.
    ScheduledDate,
    /// Optional HSN commodity code.
    HsnCode,
}

impl FormField {
    /// All fields, in declaration order.
    pub const ALL: [FormField; 7] = [
        Self::SourceCountry,
        Self::DestinationCountry,
        Self::WeightKg,
        Self::LoadType,
        Self::MaterialType,
        Self::ScheduledDate,
        Self::HsnCode,
    ];

    /// The camelCase name used in JSON and error maps.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SourceCountry => "sourceCountry",
            Self::DestinationCountry => "destinationCountry",
            Self::WeightKg => "weightKg",
            Self::LoadType => "loadType",
            Self::MaterialType => "materialType",
            Self::ScheduledDate => "scheduledDate",
            Self::HsnCode => "hsnCode",
        }
    }
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FormField {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| CoreError::UnknownField(s.to_string()))
    }
}

/// Raw form values as the user typed or selected them.
///
/// Every value is kept as text; coercion happens in the validator.
/// `hsn_code` is optional: absent, `null` and `""` all mean "not supplied".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadFormState {
    /// Source country code.
    #[serde(default)]
    pub source_country: String,
    /// Destination country code.
    #[serde(default)]
    pub destination_country: String,
    /// Weight in kilograms, as typed.
    #[serde(default)]
    pub weight_kg: String,
    /// Load type selection.
    #[serde(default)]
    pub load_type: String,
    /// Material type selection.
    #[serde(default)]
    pub material_type: String,
    /// Scheduled date, as typed.
    #[serde(default)]
    pub scheduled_date: String,
    /// Optional HSN code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hsn_code: Option<String>,
}

impl LoadFormState {
    /// An empty form, as at mount.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read one field. An unset HSN code reads as `""`.
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::SourceCountry => &self.source_country,
            FormField::DestinationCountry => &self.destination_country,
            FormField::WeightKg => &self.weight_kg,
            FormField::LoadType => &self.load_type,
            FormField::MaterialType => &self.material_type,
            FormField::ScheduledDate => &self.scheduled_date,
            FormField::HsnCode => self.hsn_code.as_deref().unwrap_or(""),
        }
    }

    /// Overwrite one field.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::SourceCountry => self.source_country = value,
            FormField::DestinationCountry => self.destination_country = value,
            FormField::WeightKg => self.weight_kg = value,
            FormField::LoadType => self.load_type = value,
            FormField::MaterialType => self.material_type = value,
            FormField::ScheduledDate => self.scheduled_date = value,
            FormField::HsnCode => self.hsn_code = Some(value),
        }
    }

    /// The HSN code when one was actually supplied.
    pub fn supplied_hsn_code(&self) -> Option<&str> {
        self.hsn_code.as_deref().filter(|code| !code.is_empty())
    }
}

/// Sparse map from field to a single human-readable message.
///
/// Iteration follows form-declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<FormField, String>);

impl FieldErrors {
    /// An empty error map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message for `field` unless one is already present.
    ///
    /// The first message recorded for a field wins.
    pub fn insert(&mut self, field: FormField, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    /// Drop the message for `field`, if any.
    pub fn clear(&mut self, field: FormField) -> Option<String> {
        self.0.remove(&field)
    }

    /// The message recorded for `field`.
    pub fn get(&self, field: FormField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    /// Whether `field` has a message.
    pub fn contains(&self, field: FormField) -> bool {
        self.0.contains_key(&field)
    }

    /// The earliest failing field in declaration order.
    pub fn first_invalid(&self) -> Option<FormField> {
        self.0.keys().next().copied()
    }

    /// True when every field passed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of failing fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `(field, message)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}
