//! saleor catalog mutations
//!
//! fixed query documents and default inputs for every entity the loader
//! creates or updates.

use crate::merge::Variables;
use crate::operation::Mutation;
use serde_json::{json, Value};

/// `shopSettingsUpdate`, returns the updated settings
pub const SHOP_SETTINGS_UPDATE: Mutation = Mutation {
    name: "shopSettingsUpdate",
    query: r#"
        mutation ShopSettingsUpdate($input: ShopSettingsInput!) {
          shopSettingsUpdate(input: $input) {
            shop {
              headerText
              description
              includeTaxesInPrices
              displayGrossPrices
              chargeTaxesOnShipping
              trackInventoryByDefault
              defaultWeightUnit
              automaticFulfillmentDigitalProducts
              defaultDigitalMaxDownloads
              defaultDigitalUrlValidDays
              defaultMailSenderName
              defaultMailSenderAddress
              customerSetPasswordUrl
            }
            shopErrors {
              field
              message
              code
            }
          }
        }
    "#,
    input_variable: Some("input"),
    errors_field: "shopErrors",
    result_path: &["shop"],
};

/// `shopDomainUpdate`, returns the site domain
pub const SHOP_DOMAIN_UPDATE: Mutation = Mutation {
    name: "shopDomainUpdate",
    query: r#"
        mutation ShopDomainUpdate($siteDomainInput: SiteDomainInput!) {
          shopDomainUpdate(input: $siteDomainInput) {
            shop {
              domain {
                host
                sslEnabled
                url
              }
            }
            shopErrors {
              field
              message
              code
            }
          }
        }
    "#,
    input_variable: Some("siteDomainInput"),
    errors_field: "shopErrors",
    result_path: &["shop", "domain"],
};

/// `shopAddressUpdate`, returns the company address
pub const SHOP_ADDRESS_UPDATE: Mutation = Mutation {
    name: "shopAddressUpdate",
    query: r#"
        mutation ShopAddressUpdate($addressInput: AddressInput!) {
          shopAddressUpdate(input: $addressInput) {
            shop {
              companyAddress {
                id
                firstName
                lastName
                companyName
                streetAddress1
                streetAddress2
                city
                cityArea
                postalCode
                country {
                  code
                  country
                }
                countryArea
                phone
                isDefaultShippingAddress
                isDefaultBillingAddress
              }
            }
            shopErrors {
              field
              message
              code
            }
          }
        }
    "#,
    input_variable: Some("addressInput"),
    errors_field: "shopErrors",
    result_path: &["shop", "companyAddress"],
};

/// `createWarehouse`, returns the warehouse id
pub const CREATE_WAREHOUSE: Mutation = Mutation {
    name: "createWarehouse",
    query: r#"
        mutation createWarehouse($input: WarehouseCreateInput!) {
          createWarehouse(input: $input) {
            warehouse {
              id
            }
            warehouseErrors {
              field
              message
              code
            }
          }
        }
    "#,
    input_variable: Some("input"),
    errors_field: "warehouseErrors",
    result_path: &["warehouse", "id"],
};

/// `shippingZoneCreate`, returns the shipping zone id
pub const CREATE_SHIPPING_ZONE: Mutation = Mutation {
    name: "shippingZoneCreate",
    query: r#"
        mutation createShippingZone($input: ShippingZoneCreateInput!) {
          shippingZoneCreate(input: $input) {
            shippingZone {
              id
            }
            shippingErrors {
              field
              message
              code
            }
          }
        }
    "#,
    input_variable: Some("input"),
    errors_field: "shippingErrors",
    result_path: &["shippingZone", "id"],
};

/// `attributeCreate`, returns the attribute id
pub const CREATE_ATTRIBUTE: Mutation = Mutation {
    name: "attributeCreate",
    query: r#"
        mutation createAttribute($input: AttributeCreateInput!) {
          attributeCreate(input: $input) {
            attribute {
              id
            }
            productErrors {
              field
              message
              code
            }
          }
        }
    "#,
    input_variable: Some("input"),
    errors_field: "productErrors",
    result_path: &["attribute", "id"],
};

/// returns the id of the attribute the value was added to
pub const CREATE_ATTRIBUTE_VALUE: Mutation = Mutation {
    name: "attributeValueCreate",
    query: r#"
        mutation createAttributeValue($input: AttributeValueCreateInput!, $attribute: ID!) {
          attributeValueCreate(input: $input, attribute: $attribute) {
            attribute {
              id
            }
            productErrors {
              field
              message
              code
            }
          }
        }
    "#,
    input_variable: Some("input"),
    errors_field: "productErrors",
    result_path: &["attribute", "id"],
};

/// `productTypeCreate`, returns the product type id
pub const CREATE_PRODUCT_TYPE: Mutation = Mutation {
    name: "productTypeCreate",
    query: r#"
        mutation createProductType($input: ProductTypeInput!) {
          productTypeCreate(input: $input) {
            productType {
              id
            }
            productErrors {
              field
              message
              code
            }
          }
        }
    "#,
    input_variable: Some("input"),
    errors_field: "productErrors",
    result_path: &["productType", "id"],
};

/// `categoryCreate`, returns the category id
pub const CREATE_CATEGORY: Mutation = Mutation {
    name: "categoryCreate",
    query: r#"
        mutation createCategory($input: CategoryInput!) {
          categoryCreate(input: $input) {
            category {
              id
            }
            productErrors {
              field
              message
              code
            }
          }
        }
    "#,
    input_variable: Some("input"),
    errors_field: "productErrors",
    result_path: &["category", "id"],
};

/// `productCreate`, returns the product id
pub const CREATE_PRODUCT: Mutation = Mutation {
    name: "productCreate",
    query: r#"
        mutation createProduct($input: ProductCreateInput!) {
          productCreate(input: $input) {
            product {
              id
            }
            productErrors {
              field
              message
              code
            }
          }
        }
    "#,
    input_variable: Some("input"),
    errors_field: "productErrors",
    result_path: &["product", "id"],
};

/// `productVariantCreate`, returns the variant id
pub const CREATE_PRODUCT_VARIANT: Mutation = Mutation {
    name: "productVariantCreate",
    query: r#"
        mutation createProductVariant($input: ProductVariantCreateInput!) {
          productVariantCreate(input: $input) {
            productVariant {
              id
            }
            productErrors {
              field
              message
              code
            }
          }
        }
    "#,
    input_variable: Some("input"),
    errors_field: "productErrors",
    result_path: &["productVariant", "id"],
};

/// sent as a multipart upload; `image` is the `"0"` placeholder
pub const CREATE_PRODUCT_IMAGE: Mutation = Mutation {
    name: "productImageCreate",
    query: r#"
        mutation ProductImageCreate($product: ID!, $image: Upload!, $alt: String) {
          productImageCreate(input: {alt: $alt, image: $image, product: $product}) {
            image {
              id
            }
            productErrors {
              field
              message
              code
            }
          }
        }
    "#,
    input_variable: None,
    errors_field: "productErrors",
    result_path: &["image", "id"],
};

/// every mutation the loader knows about
pub const ALL: &[&Mutation] = &[
    &SHOP_SETTINGS_UPDATE,
    &SHOP_DOMAIN_UPDATE,
    &SHOP_ADDRESS_UPDATE,
    &CREATE_WAREHOUSE,
    &CREATE_SHIPPING_ZONE,
    &CREATE_ATTRIBUTE,
    &CREATE_ATTRIBUTE_VALUE,
    &CREATE_PRODUCT_TYPE,
    &CREATE_CATEGORY,
    &CREATE_PRODUCT,
    &CREATE_PRODUCT_VARIANT,
    &CREATE_PRODUCT_IMAGE,
];

fn object(value: Value) -> Variables {
    match value {
        Value::Object(map) => map,
        _ => Variables::new(),
    }
}

/// default warehouse input, addressed in switzerland
pub fn warehouse_defaults() -> Variables {
    object(json!({
        "companyName": "The Fake Company",
        "email": "fake@example.com",
        "name": "fake warehouse",
        "address": {
            "streetAddress1": "a fake street adress",
            "city": "Fake City",
            "postalCode": "1024",
            "country": "CH"
        }
    }))
}

/// default shipping zone covering `CH`
pub fn shipping_zone_defaults() -> Variables {
    object(json!({
        "name": "CH",
        "countries": ["CH"],
        "default": false
    }))
}

/// default dropdown attribute
pub fn attribute_defaults() -> Variables {
    object(json!({
        "inputType": "DROPDOWN",
        "name": "default"
    }))
}

/// default attribute value
pub fn attribute_value_defaults() -> Variables {
    object(json!({"name": "default"}))
}

/// default physical product type without variants
pub fn product_type_defaults() -> Variables {
    object(json!({
        "name": "default",
        "hasVariants": false,
        "productAttributes": [],
        "variantAttributes": [],
        "isDigital": false
    }))
}

/// default top-level category
pub fn category_defaults() -> Variables {
    object(json!({"name": "default"}))
}

/// default product of type `product_type_id`
pub fn product_defaults(product_type_id: &str) -> Variables {
    object(json!({
        "name": "default",
        "description": "default",
        "productType": product_type_id,
        "basePrice": 0.0,
        "sku": "default"
    }))
}

/// default variant of `product_id`
pub fn product_variant_defaults(product_id: &str) -> Variables {
    object(json!({
        "product": product_id,
        "sku": "0",
        "attributes": []
    }))
}

/// upload placeholder referenced by the multipart `map` part
pub const IMAGE_PLACEHOLDER: &str = "0";

/// image variables for `product_id`, with the upload placeholder
pub fn product_image_defaults(product_id: &str) -> Variables {
    object(json!({
        "product": product_id,
        "image": IMAGE_PLACEHOLDER,
        "alt": ""
    }))
}
