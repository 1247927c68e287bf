//! Print the OpenAPI document as JSON.

use std::io;

use detail_relay::doc::ApiDoc;
use utoipa::OpenApi;

fn main() -> io::Result<()> {
    let json = ApiDoc::openapi()
        .to_pretty_json()
        .map_err(|err| io::Error::other(format!("serialise OpenAPI document: {err}")))?;
    println!("{json}");
    Ok(())
}
