use saleor_loader::{CatalogLoader, ClientConfig, TOKEN_ENV};
use serde_json::json;

#[cfg_attr(miri, ignore)]
#[test]
fn smoke_create_category() {
    if std::env::var_os(TOKEN_ENV).is_none() {
        return;
    }
    let config = match ClientConfig::from_env() {
        Ok(config) => config,
        Err(_) => return,
    };

    let loader = CatalogLoader::new(config).expect("loader");
    let id = loader
        .create_category(json!({"name": format!("smoke-{}", std::process::id())}))
        .expect("category create");

    assert!(!id.is_empty());
}
