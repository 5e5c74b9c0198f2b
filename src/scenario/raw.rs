//! Raw form values and the repair step that turns them into [`ScenarioInputs`]
//!
//! Nothing here rejects input. Empty or unparseable text falls back to the
//! field default, out-of-range numbers are clamped to the nearest bound, and a
//! bad or future loan date becomes `today`.

use chrono::NaiveDate;
use log::debug;
use serde::{Deserialize, Serialize};

use super::bounds::{self, FieldBounds};
use super::inputs::ScenarioInputs;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Form fields exactly as entered, keyed by their query-string names
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawInputs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_home_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loan_origination_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loan_amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interest_rate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mortgage_term: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_residence: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hoa: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_taxes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insurance: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintenance: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rental_price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rent_increase: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub management_fee: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rental_tax_rate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home_appreciation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_inflation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selling_fees: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capital_gains_tax: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub investment_return: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub years_to_hold: Option<String>,
}

impl RawInputs {
    /// Repair every field into range and build the projection snapshot
    pub fn validate(&self, today: NaiveDate) -> ScenarioInputs {
        ScenarioInputs {
            purchase_price: repair_number(self.purchase_price.as_deref(), &bounds::PURCHASE_PRICE),
            current_home_value: repair_number(
                self.current_home_value.as_deref(),
                &bounds::CURRENT_HOME_VALUE,
            ),
            loan_origination_date: repair_date(self.loan_origination_date.as_deref(), today),
            original_loan_amount: repair_number(self.loan_amount.as_deref(), &bounds::LOAN_AMOUNT),
            interest_rate: repair_number(self.interest_rate.as_deref(), &bounds::INTEREST_RATE),
            mortgage_term_years: repair_whole(self.mortgage_term.as_deref(), &bounds::MORTGAGE_TERM),
            primary_residence: parse_flag(self.primary_residence.as_deref()),
            monthly_hoa: repair_number(self.hoa.as_deref(), &bounds::HOA),
            monthly_property_taxes: repair_number(
                self.property_taxes.as_deref(),
                &bounds::PROPERTY_TAXES,
            ),
            monthly_insurance: repair_number(self.insurance.as_deref(), &bounds::INSURANCE),
            monthly_maintenance: repair_number(self.maintenance.as_deref(), &bounds::MAINTENANCE),
            monthly_rent: repair_number(self.rental_price.as_deref(), &bounds::RENTAL_PRICE),
            annual_rent_increase: repair_number(
                self.rent_increase.as_deref(),
                &bounds::RENT_INCREASE,
            ),
            management_fee: repair_number(self.management_fee.as_deref(), &bounds::MANAGEMENT_FEE),
            rental_income_tax_rate: repair_number(
                self.rental_tax_rate.as_deref(),
                &bounds::RENTAL_TAX_RATE,
            ),
            home_appreciation: repair_number(
                self.home_appreciation.as_deref(),
                &bounds::HOME_APPRECIATION,
            ),
            cost_inflation: repair_number(self.cost_inflation.as_deref(), &bounds::COST_INFLATION),
            selling_fee_rate: repair_number(self.selling_fees.as_deref(), &bounds::SELLING_FEES),
            capital_gains_tax_rate: repair_number(
                self.capital_gains_tax.as_deref(),
                &bounds::CAPITAL_GAINS_TAX,
            ),
            investment_return: repair_number(
                self.investment_return.as_deref(),
                &bounds::INVESTMENT_RETURN,
            ),
            years_to_hold: repair_whole(self.years_to_hold.as_deref(), &bounds::YEARS_TO_HOLD),
        }
    }

    /// Layer `overrides` on top of `self`; any field set in `overrides` wins
    pub fn overlay(self, overrides: RawInputs) -> RawInputs {
        RawInputs {
            purchase_price: overrides.purchase_price.or(self.purchase_price),
            current_home_value: overrides.current_home_value.or(self.current_home_value),
            loan_origination_date: overrides.loan_origination_date.or(self.loan_origination_date),
            loan_amount: overrides.loan_amount.or(self.loan_amount),
            interest_rate: overrides.interest_rate.or(self.interest_rate),
            mortgage_term: overrides.mortgage_term.or(self.mortgage_term),
            primary_residence: overrides.primary_residence.or(self.primary_residence),
            hoa: overrides.hoa.or(self.hoa),
            property_taxes: overrides.property_taxes.or(self.property_taxes),
            insurance: overrides.insurance.or(self.insurance),
            maintenance: overrides.maintenance.or(self.maintenance),
            rental_price: overrides.rental_price.or(self.rental_price),
            rent_increase: overrides.rent_increase.or(self.rent_increase),
            management_fee: overrides.management_fee.or(self.management_fee),
            rental_tax_rate: overrides.rental_tax_rate.or(self.rental_tax_rate),
            home_appreciation: overrides.home_appreciation.or(self.home_appreciation),
            cost_inflation: overrides.cost_inflation.or(self.cost_inflation),
            selling_fees: overrides.selling_fees.or(self.selling_fees),
            capital_gains_tax: overrides.capital_gains_tax.or(self.capital_gains_tax),
            investment_return: overrides.investment_return.or(self.investment_return),
            years_to_hold: overrides.years_to_hold.or(self.years_to_hold),
        }
    }
}

impl From<&ScenarioInputs> for RawInputs {
    fn from(inputs: &ScenarioInputs) -> Self {
        let num = |v: f64| Some(v.to_string());
        RawInputs {
            purchase_price: num(inputs.purchase_price),
            current_home_value: num(inputs.current_home_value),
            loan_origination_date: Some(inputs.loan_origination_date.format(DATE_FORMAT).to_string()),
            loan_amount: num(inputs.original_loan_amount),
            interest_rate: num(inputs.interest_rate),
            mortgage_term: Some(inputs.mortgage_term_years.to_string()),
            primary_residence: Some(inputs.primary_residence.to_string()),
            hoa: num(inputs.monthly_hoa),
            property_taxes: num(inputs.monthly_property_taxes),
            insurance: num(inputs.monthly_insurance),
            maintenance: num(inputs.monthly_maintenance),
            rental_price: num(inputs.monthly_rent),
            rent_increase: num(inputs.annual_rent_increase),
            management_fee: num(inputs.management_fee),
            rental_tax_rate: num(inputs.rental_income_tax_rate),
            home_appreciation: num(inputs.home_appreciation),
            cost_inflation: num(inputs.cost_inflation),
            selling_fees: num(inputs.selling_fee_rate),
            capital_gains_tax: num(inputs.capital_gains_tax_rate),
            investment_return: num(inputs.investment_return),
            years_to_hold: Some(inputs.years_to_hold.to_string()),
        }
    }
}

/// Parse a number as typed into a form: tolerates `$`, `%`, thousands commas
/// and surrounding whitespace
fn parse_number(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| !matches!(c, '$' | ',' | '%' | '_') && !c.is_whitespace())
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok()
}

fn repair_number(raw: Option<&str>, field: &FieldBounds) -> f64 {
    let Some(text) = raw else {
        return field.default;
    };

    let value = match parse_number(text) {
        Some(v) if v.is_nan() => {
            debug!("{}: {:?} is not a number, using default {}", field.key, text, field.default);
            return field.default;
        }
        Some(v) => v,
        None => {
            if !text.trim().is_empty() {
                debug!("{}: {:?} is not a number, using default {}", field.key, text, field.default);
            }
            return field.default;
        }
    };

    let clamped = value.clamp(field.min, field.max);
    if clamped != value {
        debug!("{}: {} clamped to {}", field.key, value, clamped);
    }
    clamped
}

/// Like [`repair_number`] but for counts of whole years
fn repair_whole(raw: Option<&str>, field: &FieldBounds) -> u32 {
    let value = repair_number(raw, field);
    let rounded = value.round();
    if rounded != value {
        debug!("{}: {} rounded to {}", field.key, value, rounded);
    }
    rounded.clamp(field.min, field.max) as u32
}

fn repair_date(raw: Option<&str>, today: NaiveDate) -> NaiveDate {
    let Some(text) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return today;
    };

    match NaiveDate::parse_from_str(text, DATE_FORMAT) {
        Ok(date) if date <= today => date,
        Ok(date) => {
            debug!("loanOriginationDate: {} is in the future, using {}", date, today);
            today
        }
        Err(e) => {
            debug!("loanOriginationDate: {:?} is not a date ({}), using {}", text, e, today);
            today
        }
    }
}

fn parse_flag(raw: Option<&str>) -> bool {
    raw.map(|s| {
        let s = s.trim();
        ["true", "1", "on", "yes"].iter().any(|t| s.eq_ignore_ascii_case(t))
    })
    .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn test_empty_form_uses_defaults() {
        let inputs = RawInputs::default().validate(today());

        assert_eq!(inputs.purchase_price, bounds::PURCHASE_PRICE.default);
        assert_eq!(inputs.interest_rate, bounds::INTEREST_RATE.default);
        assert_eq!(inputs.mortgage_term_years, 30);
        assert_eq!(inputs.years_to_hold, 10);
        assert_eq!(inputs.loan_origination_date, today());
        assert!(!inputs.primary_residence);
    }

    #[test]
    fn test_garbage_text_uses_default() {
        let raw = RawInputs {
            interest_rate: Some("abc".into()),
            rental_price: Some("".into()),
            cost_inflation: Some("NaN".into()),
            ..Default::default()
        };
        let inputs = raw.validate(today());

        assert_eq!(inputs.interest_rate, 4.0);
        assert_eq!(inputs.monthly_rent, 2_000.0);
        assert_eq!(inputs.cost_inflation, 2.5);
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        let raw = RawInputs {
            interest_rate: Some("45".into()),
            home_appreciation: Some("-35".into()),
            purchase_price: Some("-10".into()),
            investment_return: Some("inf".into()),
            ..Default::default()
        };
        let inputs = raw.validate(today());

        assert_eq!(inputs.interest_rate, 30.0);
        assert_eq!(inputs.home_appreciation, -20.0);
        assert_eq!(inputs.purchase_price, 0.0);
        assert_eq!(inputs.investment_return, 30.0);
    }

    #[test]
    fn test_whole_year_fields_round_then_clamp() {
        let raw = RawInputs {
            years_to_hold: Some("7.6".into()),
            mortgage_term: Some("0".into()),
            ..Default::default()
        };
        let inputs = raw.validate(today());

        assert_eq!(inputs.years_to_hold, 8);
        assert_eq!(inputs.mortgage_term_years, 1);

        let raw = RawInputs { years_to_hold: Some("99".into()), ..Default::default() };
        assert_eq!(raw.validate(today()).years_to_hold, 30);
    }

    #[test]
    fn test_formatted_money_is_accepted() {
        let raw = RawInputs {
            current_home_value: Some(" $412,500 ".into()),
            selling_fees: Some("5.5%".into()),
            ..Default::default()
        };
        let inputs = raw.validate(today());

        assert_eq!(inputs.current_home_value, 412_500.0);
        assert_eq!(inputs.selling_fee_rate, 5.5);
    }

    #[test]
    fn test_bad_or_future_date_becomes_today() {
        let future = RawInputs {
            loan_origination_date: Some("2030-01-01".into()),
            ..Default::default()
        };
        assert_eq!(future.validate(today()).loan_origination_date, today());

        let invalid = RawInputs {
            loan_origination_date: Some("2021-02-30".into()),
            ..Default::default()
        };
        assert_eq!(invalid.validate(today()).loan_origination_date, today());

        let past = RawInputs {
            loan_origination_date: Some("2015-09-01".into()),
            ..Default::default()
        };
        assert_eq!(
            past.validate(today()).loan_origination_date,
            NaiveDate::from_ymd_opt(2015, 9, 1).unwrap()
        );
    }

    #[test]
    fn test_primary_residence_flag() {
        for (text, expected) in [("on", true), ("TRUE", true), ("1", true), ("no", false), ("", false)] {
            let raw = RawInputs { primary_residence: Some(text.into()), ..Default::default() };
            assert_eq!(raw.validate(today()).primary_residence, expected, "{text:?}");
        }
    }

    #[test]
    fn test_overlay_prefers_overrides() {
        let base = RawInputs {
            interest_rate: Some("5".into()),
            hoa: Some("100".into()),
            ..Default::default()
        };
        let overrides = RawInputs { interest_rate: Some("6.25".into()), ..Default::default() };

        let merged = base.overlay(overrides);
        assert_eq!(merged.interest_rate.as_deref(), Some("6.25"));
        assert_eq!(merged.hoa.as_deref(), Some("100"));
    }

    #[test]
    fn test_validated_inputs_survive_raw_round_trip() {
        let raw = RawInputs {
            loan_origination_date: Some("2019-04-01".into()),
            primary_residence: Some("on".into()),
            cost_inflation: Some("2.75".into()),
            ..Default::default()
        };
        let inputs = raw.validate(today());

        let again = RawInputs::from(&inputs).validate(today());
        assert_eq!(again, inputs);
    }
}
