use server::openapi::ApiDoc;
use utoipa::OpenApi;

/// Print the decision API's OpenAPI document, or write it to the path given
/// as the first argument.
fn main() -> anyhow::Result<()> {
    let spec = ApiDoc::openapi().to_pretty_json()?;
    match std::env::args().nth(1) {
        Some(path) => std::fs::write(&path, spec)?,
        None => println!("{spec}"),
    }
    Ok(())
}
