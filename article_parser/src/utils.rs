use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

pub fn save_json<T: Serialize>(data: &T, path: &Path) -> anyhow::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(serde_json::to_string_pretty(data)?.as_bytes())?;
    tracing::info!(path = %path.display(), "result written");
    Ok(())
}

pub fn read_html(path: &Path) -> anyhow::Result<String> {
    let bytes = std::fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Accepts only absolute `http`/`https` URLs.
pub fn validate_url(raw: &str) -> Option<url::Url> {
    let url = url::Url::parse(raw.trim()).ok()?;
    matches!(url.scheme(), "http" | "https").then_some(url)
}
