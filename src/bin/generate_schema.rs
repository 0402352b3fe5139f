//! Generate JSON Schema for catalog extension files
//!
//! The schema describes the file accepted by `popular-settings --catalog`.
//!
//! Usage:
//!   cargo run --features dev-bins --bin generate_schema > catalog-schema.json

use popular_settings::settings::catalog::CatalogFile;
use schemars::schema_for;

fn main() {
    let schema = schema_for!(CatalogFile);
    let output = serde_json::to_string_pretty(&schema).expect("Failed to serialize schema");
    println!("{}", output);
}
