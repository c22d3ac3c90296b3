use anyhow::Result;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let path = profile_service::presentation::http::openapi::write_openapi_snapshot()?;
    println!("OpenAPI snapshot written to {}", path.display());
    Ok(())
}
