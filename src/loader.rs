//! catalog loader
//!
//! one method per saleor entity. create methods merge caller overrides onto a
//! fixed default input and return the new id; update methods send the
//! overrides as the whole input and return the updated resource.

use crate::client::Client;
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::merge::{override_defaults, Variables};
use crate::mutations;
use crate::operation::Mutation;
use crate::shop::{Address, ShopDomain, ShopSettings};
use crate::upload::UploadPayload;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::path::Path;

/// mutation facade for populating a saleor catalog
///
/// # example
///
/// ```no_run
/// use saleor_loader::{CatalogLoader, ClientConfig};
/// use serde_json::json;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let loader = CatalogLoader::new(ClientConfig::new("token"))?;
/// let product_type = loader.create_product_type(json!({"name": "shoes"}))?;
/// let product = loader.create_product(&product_type, json!({"name": "runner", "sku": "RUN-1"}))?;
/// loader.create_product_image(&product, "runner.png")?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct CatalogLoader {
    client: Client,
}

impl CatalogLoader {
    /// create a loader with a new client
    pub fn new(config: ClientConfig) -> Result<Self> {
        Ok(Self::from_client(Client::new(config)?))
    }

    /// wrap an existing client
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }

    /// the underlying request executor
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// update shop settings; see saleor's `ShopSettingsInput`
    pub fn update_shop_settings(&self, overrides: Value) -> Result<ShopSettings> {
        self.update(&mutations::SHOP_SETTINGS_UPDATE, overrides)
    }

    /// update the shop domain; see saleor's `SiteDomainInput`
    pub fn update_shop_domain(&self, overrides: Value) -> Result<ShopDomain> {
        self.update(&mutations::SHOP_DOMAIN_UPDATE, overrides)
    }

    /// update the shop company address; see saleor's `AddressInput`
    pub fn update_shop_address(&self, overrides: Value) -> Result<Address> {
        self.update(&mutations::SHOP_ADDRESS_UPDATE, overrides)
    }

    /// create a warehouse and return its id
    ///
    /// overriding `address` replaces the whole default address.
    pub fn create_warehouse(&self, overrides: Value) -> Result<String> {
        self.create(
            &mutations::CREATE_WAREHOUSE,
            mutations::warehouse_defaults(),
            overrides,
            Variables::new(),
        )
    }

    /// create a shipping zone and return its id
    pub fn create_shipping_zone(&self, overrides: Value) -> Result<String> {
        self.create(
            &mutations::CREATE_SHIPPING_ZONE,
            mutations::shipping_zone_defaults(),
            overrides,
            Variables::new(),
        )
    }

    /// create an attribute and return its id
    pub fn create_attribute(&self, overrides: Value) -> Result<String> {
        self.create(
            &mutations::CREATE_ATTRIBUTE,
            mutations::attribute_defaults(),
            overrides,
            Variables::new(),
        )
    }

    /// add a value to an attribute; returns the attribute id
    pub fn create_attribute_value(&self, attribute_id: &str, overrides: Value) -> Result<String> {
        let mut extra = Variables::new();
        extra.insert("attribute".to_string(), Value::from(attribute_id));
        self.create(
            &mutations::CREATE_ATTRIBUTE_VALUE,
            mutations::attribute_value_defaults(),
            overrides,
            extra,
        )
    }

    /// create a product type and return its id
    pub fn create_product_type(&self, overrides: Value) -> Result<String> {
        self.create(
            &mutations::CREATE_PRODUCT_TYPE,
            mutations::product_type_defaults(),
            overrides,
            Variables::new(),
        )
    }

    /// create a category and return its id
    pub fn create_category(&self, overrides: Value) -> Result<String> {
        self.create(
            &mutations::CREATE_CATEGORY,
            mutations::category_defaults(),
            overrides,
            Variables::new(),
        )
    }

    /// create a product of type `product_type_id` and return its id
    pub fn create_product(&self, product_type_id: &str, overrides: Value) -> Result<String> {
        self.create(
            &mutations::CREATE_PRODUCT,
            mutations::product_defaults(product_type_id),
            overrides,
            Variables::new(),
        )
    }

    /// create a variant of `product_id` and return its id
    pub fn create_product_variant(&self, product_id: &str, overrides: Value) -> Result<String> {
        self.create(
            &mutations::CREATE_PRODUCT_VARIANT,
            mutations::product_variant_defaults(product_id),
            overrides,
            Variables::new(),
        )
    }

    /// upload an image for a product and return the image id
    pub fn create_product_image(
        &self,
        product_id: &str,
        file_path: impl AsRef<Path>,
    ) -> Result<String> {
        let mutation = &mutations::CREATE_PRODUCT_IMAGE;
        let variables =
            mutation.variables(mutations::product_image_defaults(product_id), Variables::new());
        let payload = UploadPayload::product_image(mutation, variables, file_path)?;
        self.upload(mutation, payload)
    }

    /// upload a prepared payload for `mutation` and return the created id
    pub fn upload(&self, mutation: &Mutation, payload: UploadPayload) -> Result<String> {
        tracing::debug!(
            mutation = mutation.name,
            file = payload.file_name(),
            bytes = payload.file_len(),
            "uploading file"
        );
        let response = self.client.execute_upload(payload, None)?;
        into_id(mutation, mutation.extract(response)?)
    }

    /// run `mutation` with `overrides` merged onto `defaults`; returns the id
    pub fn create(
        &self,
        mutation: &Mutation,
        mut defaults: Variables,
        overrides: Value,
        extra: Variables,
    ) -> Result<String> {
        override_defaults(&mut defaults, into_overrides(overrides)?);
        let result = self.run(mutation, mutation.variables(defaults, extra))?;
        into_id(mutation, result)
    }

    /// run `mutation` with `overrides` as the whole input
    pub fn update<T: DeserializeOwned>(&self, mutation: &Mutation, overrides: Value) -> Result<T> {
        let input = into_overrides(overrides)?;
        let result = self.run(mutation, mutation.variables(input, Variables::new()))?;
        Ok(serde_json::from_value(result)?)
    }

    fn run(&self, mutation: &Mutation, variables: Variables) -> Result<Value> {
        tracing::debug!(mutation = mutation.name, "executing mutation");
        let response = self
            .client
            .execute(mutation.query, Some(Value::Object(variables)), None)?;
        mutation.extract(response)
    }
}

fn into_overrides(overrides: Value) -> Result<Variables> {
    match overrides {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Variables::new()),
        other => Err(Error::Input(format!(
            "overrides must be a json object, got {other}"
        ))),
    }
}

fn into_id(mutation: &Mutation, value: Value) -> Result<String> {
    match value {
        Value::String(id) => Ok(id),
        other => Err(Error::Response(format!(
            "expected string id at `data.{}.{}`, got {other}",
            mutation.name,
            mutation.result_path.join(".")
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_into_overrides() {
        assert!(into_overrides(Value::Null).unwrap().is_empty());
        assert_eq!(into_overrides(json!({"name": "x"})).unwrap()["name"], "x");
        assert!(matches!(into_overrides(json!(["name"])), Err(Error::Input(_))));
    }

    #[test]
    fn test_into_id_requires_string() {
        assert_eq!(
            into_id(&mutations::CREATE_CATEGORY, json!("Q2F0ZWdvcnk6MQ==")).unwrap(),
            "Q2F0ZWdvcnk6MQ=="
        );
        let err = into_id(&mutations::CREATE_CATEGORY, json!(1)).unwrap_err();
        assert!(err.to_string().contains("data.categoryCreate.category.id"));
    }

    #[test]
    fn test_invalid_overrides_fail_before_sending() {
        // nothing listens on this port; reaching the network would surface an http error
        let loader = CatalogLoader::new(
            ClientConfig::new("token").with_endpoint("http://127.0.0.1:9/graphql/"),
        )
        .unwrap();
        let err = loader.create_category(json!("shoes")).unwrap_err();
        assert!(matches!(err, Error::Input(_)));
    }
}
