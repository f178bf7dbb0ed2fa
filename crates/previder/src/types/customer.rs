//! Customer types

use serde::{Deserialize, Serialize};

/// A (sub-)customer account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Customer id, 24 characters
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    /// Display name
    pub name: String,
    /// Account name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_name: Option<String>,
    /// Verification state of the account
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification_status: Option<String>,
    /// City
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// ISO country code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    /// Preferred language
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Whether the customer is a partner that owns sub-customers
    #[serde(default)]
    pub partner: bool,
    /// Whether prices are hidden from the customer
    #[serde(default)]
    pub hiding_prices: bool,
    /// Purchase order number printed on invoices
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_order_number: Option<String>,
    /// Whether invoices go to the partner
    #[serde(default)]
    pub invoice_to_partner: bool,
}

/// Customer with address and hierarchy details.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerExt {
    /// Base customer fields
    #[serde(flatten)]
    pub customer: Customer,
    /// Street
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// House number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_number: Option<String>,
    /// Postal code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
    /// Chamber of commerce number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coc_number: Option<String>,
    /// Parent customer id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    /// Parent customer name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_name: Option<String>,
    /// Ids from the root customer down to the parent
    #[serde(default)]
    pub parent_tree: Vec<String>,
    /// Account type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_type: Option<String>,
}

/// Body for creating or updating a customer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerCreate {
    /// Display name
    pub name: String,
    /// Account name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_name: Option<String>,
    /// Street
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// House number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_number: Option<String>,
    /// Postal code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
    /// City
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// ISO country code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    /// Preferred language
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Chamber of commerce number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coc_number: Option<String>,
    /// Whether the customer is a partner
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub partner: bool,
}
