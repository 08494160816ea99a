//! # Field Validator
//!
//! Maps a `LoadFormState` snapshot to either a [`ValidatedLoad`] or a
//! [`FieldErrors`] map with at least one entry.
//!
//! Each field is checked independently and only its first failing rule is
//! reported. The one cross-field rule (source and destination differ) is
//! attached to `destinationCountry` and only fires when both countries are
//! individually valid.
//!
//! The scheduled date is compared against a caller-supplied `today` so the
//! rule is testable; [`validate_today`] uses the local calendar date.

use chrono::NaiveDate;

use crate::form::{FieldErrors, FormField, LoadFormState};
use crate::reference::{is_known_country, is_known_load_type, LoadTypeCode};

/// A form snapshot that passed every rule, with its coerced values.
///
/// Only [`validate`] constructs this type.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedLoad {
    form: LoadFormState,
    weight_kg: f64,
    load_type: LoadTypeCode,
    scheduled_date: NaiveDate,
}

impl ValidatedLoad {
    /// The form values exactly as submitted.
    pub fn form(&self) -> &LoadFormState {
        &self.form
    }

    /// Parsed weight in kilograms, always positive and finite.
    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    /// Wire code of the selected load type.
    pub fn load_type(&self) -> LoadTypeCode {
        self.load_type
    }

    /// Pickup date, never before the validation day.
    pub fn scheduled_date(&self) -> NaiveDate {
        self.scheduled_date
    }

    /// The HSN code, when one was supplied.
    pub fn hsn_code(&self) -> Option<&str> {
        self.form.supplied_hsn_code()
    }
}

/// Validate `form` against the rules, treating `today` as the earliest
/// acceptable scheduled date.
pub fn validate(form: &LoadFormState, today: NaiveDate) -> Result<ValidatedLoad, FieldErrors> {
    let mut errors = FieldErrors::new();

    let source_ok = check_country(
        &form.source_country,
        "Please select a source country",
        FormField::SourceCountry,
        &mut errors,
    );
    let destination_ok = check_country(
        &form.destination_country,
        "Please select a destination country",
        FormField::DestinationCountry,
        &mut errors,
    );
    if source_ok && destination_ok && form.source_country == form.destination_country {
        errors.insert(
            FormField::DestinationCountry,
            "Destination must be different from source",
        );
    }

    let weight = check_weight(&form.weight_kg, &mut errors);
    let load_type = check_load_type(&form.load_type, &mut errors);

    if form.material_type.encode_utf16().count() < 2 {
        errors.insert(
            FormField::MaterialType,
            "Material type must be at least 2 characters",
        );
    }

    let scheduled = check_scheduled_date(&form.scheduled_date, today, &mut errors);

    if let Some(code) = form.supplied_hsn_code() {
        if !is_hsn_code(code) {
            errors.insert(FormField::HsnCode, "HSN code must be 4-8 digits if provided");
        }
    }

    match (weight, load_type, scheduled) {
        (Some(weight_kg), Some(load_type), Some(scheduled_date)) if errors.is_empty() => {
            Ok(ValidatedLoad {
                form: form.clone(),
                weight_kg,
                load_type,
                scheduled_date,
            })
        }
        _ => Err(errors),
    }
}

/// Validate `form` against the local calendar date.
pub fn validate_today(form: &LoadFormState) -> Result<ValidatedLoad, FieldErrors> {
    validate(form, chrono::Local::now().date_naive())
}

fn check_country(
    value: &str,
    missing: &str,
    field: FormField,
    errors: &mut FieldErrors,
) -> bool {
    if value.is_empty() {
        errors.insert(field, missing);
        false
    } else if !is_known_country(value) {
        errors.insert(field, "Please select a valid country");
        false
    } else {
        true
    }
}

/// Numeric coercion of the weight text. Blank text counts as zero.
fn check_weight(value: &str, errors: &mut FieldErrors) -> Option<f64> {
    let trimmed = value.trim();
    let parsed = if trimmed.is_empty() {
        Some(0.0)
    } else {
        trimmed.parse::<f64>().ok()
    };

    let Some(n) = parsed.filter(|n| n.is_finite()) else {
        errors.insert(FormField::WeightKg, "Enter a valid weight");
        return None;
    };
    if n <= 0.0 {
        errors.insert(FormField::WeightKg, "Weight must be greater than 0");
        return None;
    }
    Some(n)
}

fn check_load_type(value: &str, errors: &mut FieldErrors) -> Option<LoadTypeCode> {
    if value.is_empty() {
        errors.insert(FormField::LoadType, "Please select a load type");
        return None;
    }
    if !is_known_load_type(value) {
        errors.insert(FormField::LoadType, "Please select a valid load type");
        return None;
    }
    LoadTypeCode::from_label(value)
}

fn check_scheduled_date(
    value: &str,
    today: NaiveDate,
    errors: &mut FieldErrors,
) -> Option<NaiveDate> {
    let Some((year, month, day)) = split_iso_date(value) else {
        errors.insert(FormField::ScheduledDate, "Use format YYYY-MM-DD");
        return None;
    };
    let Some(date) = NaiveDate::from_ymd_opt(year, month, day) else {
        errors.insert(FormField::ScheduledDate, "Enter a valid calendar date");
        return None;
    };
    if date < today {
        errors.insert(
            FormField::ScheduledDate,
            "Scheduled date cannot be in the past",
        );
        return None;
    }
    Some(date)
}

/// Shape check for `^\d{4}-\d{2}-\d{2}$`, returning the numeric parts.
fn split_iso_date(s: &str) -> Option<(i32, u32, u32)> {
    let bytes = s.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    let (y, m, d) = (&s[0..4], &s[5..7], &s[8..10]);
    if !all_ascii_digits(y) || !all_ascii_digits(m) || !all_ascii_digits(d) {
        return None;
    }
    Some((y.parse().ok()?, m.parse().ok()?, d.parse().ok()?))
}

/// Shape check for `^\d{4,8}$`.
fn is_hsn_code(s: &str) -> bool {
    (4..=8).contains(&s.len()) && all_ascii_digits(s)
}

fn all_ascii_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 10).unwrap()
    }

    fn valid_form() -> LoadFormState {
        LoadFormState {
            source_country: "India".into(),
            destination_country: "Nepal".into(),
            weight_kg: "1500".into(),
            load_type: "Full Truckload (FTL)".into(),
            material_type: "Cotton bales".into(),
            scheduled_date: "2026-03-12".into(),
            hsn_code: None,
        }
    }

    fn errors_for(form: &LoadFormState) -> FieldErrors {
        validate(form, today()).unwrap_err()
    }

    #[test]
    fn valid_form_is_accepted_with_coerced_values() {
        let load = validate(&valid_form(), today()).unwrap();
        assert_eq!(load.weight_kg(), 1500.0);
        assert_eq!(load.load_type(), LoadTypeCode::Ftl);
        assert_eq!(
            load.scheduled_date(),
            NaiveDate::from_ymd_opt(2026, 3, 12).unwrap()
        );
        assert_eq!(load.hsn_code(), None);
        assert_eq!(load.form(), &valid_form());
    }

    #[test]
    fn empty_form_reports_every_required_field() {
        let errors = errors_for(&LoadFormState::new());
        assert_eq!(
            errors.get(FormField::SourceCountry),
            Some("Please select a source country")
        );
        assert_eq!(
            errors.get(FormField::DestinationCountry),
            Some("Please select a destination country")
        );
        assert_eq!(
            errors.get(FormField::WeightKg),
            Some("Weight must be greater than 0")
        );
        assert_eq!(errors.get(FormField::LoadType), Some("Please select a load type"));
        assert!(errors.contains(FormField::MaterialType));
        assert_eq!(errors.get(FormField::ScheduledDate), Some("Use format YYYY-MM-DD"));
        assert!(!errors.contains(FormField::HsnCode));
        assert_eq!(errors.first_invalid(), Some(FormField::SourceCountry));
    }

    #[test]
    fn empty_source_country_is_reported() {
        let mut form = valid_form();
        form.source_country.clear();
        let errors = errors_for(&form);
        assert_eq!(
            errors.get(FormField::SourceCountry),
            Some("Please select a source country")
        );
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn unknown_country_is_reported() {
        let mut form = valid_form();
        form.destination_country = "Atlantis".into();
        let errors = errors_for(&form);
        assert_eq!(
            errors.get(FormField::DestinationCountry),
            Some("Please select a valid country")
        );
    }

    #[test]
    fn same_country_error_lands_on_destination_only() {
        let mut form = valid_form();
        form.source_country = "India".into();
        form.destination_country = "India".into();
        let errors = errors_for(&form);
        assert_eq!(errors.len(), 1);
        assert!(!errors.contains(FormField::SourceCountry));
        assert_eq!(
            errors.get(FormField::DestinationCountry),
            Some("Destination must be different from source")
        );
    }

    #[test]
    fn same_invalid_country_reports_validity_not_equality() {
        let mut form = valid_form();
        form.source_country = "Atlantis".into();
        form.destination_country = "Atlantis".into();
        let errors = errors_for(&form);
        assert_eq!(
            errors.get(FormField::DestinationCountry),
            Some("Please select a valid country")
        );
        assert_eq!(
            errors.get(FormField::SourceCountry),
            Some("Please select a valid country")
        );
    }

    #[test]
    fn weight_boundaries() {
        let mut form = valid_form();

        form.weight_kg = "0".into();
        assert_eq!(
            errors_for(&form).get(FormField::WeightKg),
            Some("Weight must be greater than 0")
        );

        form.weight_kg = "0.01".into();
        assert!(validate(&form, today()).is_ok());

        form.weight_kg = "abc".into();
        assert_eq!(
            errors_for(&form).get(FormField::WeightKg),
            Some("Enter a valid weight")
        );

        form.weight_kg = "-5".into();
        assert_eq!(
            errors_for(&form).get(FormField::WeightKg),
            Some("Weight must be greater than 0")
        );
    }

    #[test]
    fn non_finite_weight_is_rejected() {
        let mut form = valid_form();
        for text in ["inf", "NaN", "1e999"] {
            form.weight_kg = text.into();
            assert_eq!(
                errors_for(&form).get(FormField::WeightKg),
                Some("Enter a valid weight"),
                "{text}"
            );
        }
    }

    #[test]
    fn weight_tolerates_surrounding_whitespace() {
        let mut form = valid_form();
        form.weight_kg = " 12.5 ".into();
        assert_eq!(validate(&form, today()).unwrap().weight_kg(), 12.5);
    }

    #[test]
    fn load_type_must_be_a_known_label() {
        let mut form = valid_form();
        form.load_type = "FTL".into();
        assert_eq!(
            errors_for(&form).get(FormField::LoadType),
            Some("Please select a valid load type")
        );
        form.load_type = "Less Than Truckload (LTL)".into();
        assert_eq!(
            validate(&form, today()).unwrap().load_type(),
            LoadTypeCode::Ltl
        );
    }

    #[test]
    fn material_needs_two_characters() {
        let mut form = valid_form();
        form.material_type = "x".into();
        assert_eq!(
            errors_for(&form).get(FormField::MaterialType),
            Some("Material type must be at least 2 characters")
        );
        form.material_type = "ok".into();
        assert!(validate(&form, today()).is_ok());
    }

    #[test]
    fn today_is_accepted_and_yesterday_rejected() {
        let mut form = valid_form();
        form.scheduled_date = "2026-03-10".into();
        assert!(validate(&form, today()).is_ok());

        form.scheduled_date = "2026-03-09".into();
        assert_eq!(
            errors_for(&form).get(FormField::ScheduledDate),
            Some("Scheduled date cannot be in the past")
        );
    }

    #[test]
    fn malformed_date_fails_the_format_check_first() {
        let mut form = valid_form();
        for text in ["2024/01/01", "2026-3-12", "12-03-2026", "2026-03-12T00:00", ""] {
            form.scheduled_date = text.into();
            assert_eq!(
                errors_for(&form).get(FormField::ScheduledDate),
                Some("Use format YYYY-MM-DD"),
                "{text:?}"
            );
        }
    }

    #[test]
    fn impossible_calendar_date_is_rejected() {
        let mut form = valid_form();
        for text in ["2027-02-30", "2027-13-01", "2027-00-10"] {
            form.scheduled_date = text.into();
            assert_eq!(
                errors_for(&form).get(FormField::ScheduledDate),
                Some("Enter a valid calendar date"),
                "{text}"
            );
        }
    }

    #[test]
    fn hsn_code_is_optional_and_shape_checked() {
        let mut form = valid_form();

        form.hsn_code = None;
        assert!(validate(&form, today()).is_ok());

        form.hsn_code = Some(String::new());
        assert!(validate(&form, today()).is_ok());

        form.hsn_code = Some("1234".into());
        assert_eq!(validate(&form, today()).unwrap().hsn_code(), Some("1234"));

        form.hsn_code = Some("12345678".into());
        assert!(validate(&form, today()).is_ok());

        for bad in ["123", "123456789", "12a4", "１２３４"] {
            form.hsn_code = Some(bad.into());
            assert_eq!(
                errors_for(&form).get(FormField::HsnCode),
                Some("HSN code must be 4-8 digits if provided"),
                "{bad}"
            );
        }
    }

    #[test]
    fn focus_goes_to_first_invalid_field() {
        let mut form = valid_form();
        form.hsn_code = Some("1".into());
        form.material_type.clear();
        form.weight_kg = "abc".into();
        let errors = errors_for(&form);
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.first_invalid(), Some(FormField::WeightKg));
    }

    fn arb_valid_form() -> impl Strategy<Value = LoadFormState> {
        let countries = crate::reference::COUNTRIES;
        (
            0..countries.len(),
            1..countries.len(),
            1u32..100_000,
            prop::sample::select(crate::reference::LOAD_TYPES.to_vec()),
            "[A-Za-z ]{2,30}",
            0i64..3650,
            prop::option::of("[0-9]{4,8}"),
        )
            .prop_map(move |(src, offset, weight, load_type, material, days, hsn)| {
                let dst = (src + offset) % countries.len();
                LoadFormState {
                    source_country: countries[src].to_string(),
                    destination_country: countries[dst].to_string(),
                    weight_kg: format!("{}.{:02}", weight / 100, weight % 100),
                    load_type: load_type.to_string(),
                    material_type: material,
                    scheduled_date: (today() + chrono::Duration::days(days))
                        .format("%Y-%m-%d")
                        .to_string(),
                    hsn_code: hsn,
                }
            })
    }

    proptest! {
        /// Any form whose fields individually satisfy their rules, with
        /// distinct countries, is accepted.
        #[test]
        fn well_formed_forms_are_accepted(form in arb_valid_form()) {
            let result = validate(&form, today());
            prop_assert!(result.is_ok(), "rejected: {:?}", result.err());
        }

        /// Arbitrary text never panics and a rejection always names a field.
        #[test]
        fn arbitrary_input_never_panics(
            weight in ".{0,12}",
            date in ".{0,12}",
            hsn in prop::option::of(".{0,10}"),
        ) {
            let mut form = valid_form();
            form.weight_kg = weight;
            form.scheduled_date = date;
            form.hsn_code = hsn;
            if let Err(errors) = validate(&form, today()) {
                prop_assert!(errors.first_invalid().is_some());
            }
        }
    }
}
