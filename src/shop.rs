//! shop resources returned by the update mutations

use serde::{Deserialize, Serialize};

/// shop settings selected by `shopSettingsUpdate`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopSettings {
    pub header_text: Option<String>,
    pub description: Option<String>,
    pub include_taxes_in_prices: Option<bool>,
    pub display_gross_prices: Option<bool>,
    pub charge_taxes_on_shipping: Option<bool>,
    pub track_inventory_by_default: Option<bool>,
    pub default_weight_unit: Option<String>,
    pub automatic_fulfillment_digital_products: Option<bool>,
    pub default_digital_max_downloads: Option<i64>,
    pub default_digital_url_valid_days: Option<i64>,
    pub default_mail_sender_name: Option<String>,
    pub default_mail_sender_address: Option<String>,
    pub customer_set_password_url: Option<String>,
}

/// site domain selected by `shopDomainUpdate`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopDomain {
    pub host: String,
    pub ssl_enabled: bool,
    pub url: String,
}

/// company address selected by `shopAddressUpdate`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub street_address1: String,
    #[serde(default)]
    pub street_address2: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub city_area: String,
    #[serde(default)]
    pub postal_code: String,
    pub country: Country,
    #[serde(default)]
    pub country_area: String,
    pub phone: Option<String>,
    pub is_default_shipping_address: Option<bool>,
    pub is_default_billing_address: Option<bool>,
}

/// country of an [`Address`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    /// iso 3166-1 alpha-2 code
    pub code: String,
    pub country: String,
}
