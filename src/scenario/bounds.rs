//! Defaults and allowed ranges for every numeric form field
//!
//! Keys match the query-string keys of [`RawInputs`](super::RawInputs).

/// Default and inclusive range for one numeric field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldBounds {
    pub key: &'static str,
    pub default: f64,
    pub min: f64,
    pub max: f64,
}

impl FieldBounds {
    const fn new(key: &'static str, default: f64, min: f64, max: f64) -> Self {
        Self { key, default, min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

const MAX_PRICE: f64 = 100_000_000.0;
const MAX_MONTHLY_COST: f64 = 100_000.0;

pub const PURCHASE_PRICE: FieldBounds = FieldBounds::new("purchasePrice", 300_000.0, 0.0, MAX_PRICE);
pub const CURRENT_HOME_VALUE: FieldBounds =
    FieldBounds::new("currentHomeValue", 400_000.0, 0.0, MAX_PRICE);
pub const LOAN_AMOUNT: FieldBounds = FieldBounds::new("loanAmount", 240_000.0, 0.0, MAX_PRICE);
pub const INTEREST_RATE: FieldBounds = FieldBounds::new("interestRate", 4.0, 0.0, 30.0);
pub const MORTGAGE_TERM: FieldBounds = FieldBounds::new("mortgageTerm", 30.0, 1.0, 50.0);
pub const HOA: FieldBounds = FieldBounds::new("hoa", 0.0, 0.0, MAX_MONTHLY_COST);
pub const PROPERTY_TAXES: FieldBounds =
    FieldBounds::new("propertyTaxes", 350.0, 0.0, MAX_MONTHLY_COST);
pub const INSURANCE: FieldBounds = FieldBounds::new("insurance", 120.0, 0.0, MAX_MONTHLY_COST);
pub const MAINTENANCE: FieldBounds = FieldBounds::new("maintenance", 150.0, 0.0, MAX_MONTHLY_COST);
pub const RENTAL_PRICE: FieldBounds = FieldBounds::new("rentalPrice", 2_000.0, 0.0, 1_000_000.0);
pub const RENT_INCREASE: FieldBounds = FieldBounds::new("rentIncrease", 3.0, -20.0, 30.0);
pub const MANAGEMENT_FEE: FieldBounds = FieldBounds::new("managementFee", 8.0, 0.0, 100.0);
pub const RENTAL_TAX_RATE: FieldBounds = FieldBounds::new("rentalTaxRate", 22.0, 0.0, 100.0);
pub const HOME_APPRECIATION: FieldBounds = FieldBounds::new("homeAppreciation", 3.0, -20.0, 30.0);
pub const COST_INFLATION: FieldBounds = FieldBounds::new("costInflation", 2.5, -20.0, 30.0);
pub const SELLING_FEES: FieldBounds = FieldBounds::new("sellingFees", 6.0, 0.0, 100.0);
pub const CAPITAL_GAINS_TAX: FieldBounds = FieldBounds::new("capitalGainsTax", 15.0, 0.0, 100.0);
pub const INVESTMENT_RETURN: FieldBounds = FieldBounds::new("investmentReturn", 7.0, -20.0, 30.0);
pub const YEARS_TO_HOLD: FieldBounds = FieldBounds::new("yearsToHold", 10.0, 1.0, 30.0);

/// All numeric fields, in form order
pub static FIELDS: [FieldBounds; 19] = [
    PURCHASE_PRICE,
    CURRENT_HOME_VALUE,
    LOAN_AMOUNT,
    INTEREST_RATE,
    MORTGAGE_TERM,
    HOA,
    PROPERTY_TAXES,
    INSURANCE,
    MAINTENANCE,
    RENTAL_PRICE,
    RENT_INCREASE,
    MANAGEMENT_FEE,
    RENTAL_TAX_RATE,
    HOME_APPRECIATION,
    COST_INFLATION,
    SELLING_FEES,
    CAPITAL_GAINS_TAX,
    INVESTMENT_RETURN,
    YEARS_TO_HOLD,
];

/// Look up the bounds for a query-string key
pub fn bounds_for(key: &str) -> Option<&'static FieldBounds> {
    FIELDS.iter().find(|field| field.key == key)
}
