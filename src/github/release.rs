use super::{repository::Repository, tag::Tag, Error};
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Release {
    pub id: u64,
    pub repository: Repository,
    pub tag: Tag,
    pub upload_url: String,
}

impl Release {
    pub fn new(
        id: u64,
        repository: Repository,
        tag: Tag,
        upload_url: impl Into<String>,
    ) -> Self {
        Release {
            id,
            repository,
            tag,
            upload_url: upload_url.into(),
        }
    }

    /// The asset endpoint for `name`.
    ///
    /// GitHub hands out the upload url as an RFC 6570 template such as
    /// `.../assets{?name,label}`; the template part is dropped and replaced
    /// by an encoded `name` query parameter.
    pub fn asset_url(&self, name: &str) -> Result<Url, Error> {
        let base = match self.upload_url.find('{') {
            Some(index) => &self.upload_url[..index],
            None => &self.upload_url,
        };

        let mut url = Url::parse(base).map_err(|cause| Error::UploadUrl {
            url: self.upload_url.to_owned(),
            cause,
        })?;
        url.query_pairs_mut().clear().append_pair("name", name);

        Ok(url)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedAsset {
    pub name: String,
    pub url: String,
    pub checksum: String,
}

impl UploadedAsset {
    pub fn new(
        name: impl Into<String>,
        url: impl Into<String>,
        checksum: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            checksum: checksum.into(),
        }
    }
}
