// src/bin/write_openapi_snapshot.rs
use anyhow::Result;
use std::{env, path::PathBuf};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let output_path = env::var("OPENAPI_SNAPSHOT_PATH")
        .map_or_else(|_| PathBuf::from("spec/openapi.json"), PathBuf::from);
    let public_base_url = env::var("PUBLIC_BASE_URL").ok();
    newsroom_core::presentation::http::openapi::write_openapi_snapshot(
        &output_path,
        public_base_url.as_deref(),
    )?;
    println!("OpenAPI snapshot written to {}", output_path.display());
    Ok(())
}
