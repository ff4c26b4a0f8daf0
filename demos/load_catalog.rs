use saleor_loader::{CatalogLoader, ClientConfig};
use serde_json::json;
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ClientConfig::from_env()?;
    let loader = CatalogLoader::new(config)?;

    let warehouse = loader.create_warehouse(json!({"name": "main warehouse"}))?;
    let zone = loader.create_shipping_zone(json!({"name": "Switzerland"}))?;
    println!("warehouse: {warehouse}, shipping zone: {zone}");

    let color = loader.create_attribute(json!({"name": "color"}))?;
    for value in ["red", "blue"] {
        loader.create_attribute_value(&color, json!({"name": value}))?;
    }

    let product_type = loader.create_product_type(json!({
        "name": "shoes",
        "hasVariants": true,
        "variantAttributes": [color]
    }))?;
    let category = loader.create_category(json!({"name": "footwear"}))?;
    let product = loader.create_product(
        &product_type,
        json!({"name": "runner", "sku": "RUN", "category": category}),
    )?;
    let variant = loader.create_product_variant(&product, json!({"sku": "RUN-RED"}))?;
    println!("product: {product}, variant: {variant}");

    if let Ok(image) = env::var("SALEOR_IMAGE_PATH") {
        let image_id = loader.create_product_image(&product, image)?;
        println!("image: {image_id}");
    }

    Ok(())
}
