use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ReleaseResponse {
    pub id: u64,
    pub upload_url: String,
}

#[derive(Debug, Deserialize)]
pub struct AssetResponse {
    pub name: String,
    pub browser_download_url: String,
}
