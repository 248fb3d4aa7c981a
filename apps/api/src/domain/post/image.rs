use serde::Deserialize;

const IMAGE_CDN: &str = "https://cdn.sanity.io/images";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AssetRef {
    #[serde(rename = "_ref", default)]
    pub reference: Option<String>,
    /// Present when the query dereferenced the asset document.
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ImageRef {
    #[serde(default)]
    pub asset: Option<AssetRef>,
    #[serde(default)]
    pub alt: Option<String>,
}

/// Builds CDN URLs for image assets of one project/dataset.
#[derive(Debug, Clone)]
pub struct ImageUrlBuilder {
    project_id: String,
    dataset: String,
}

impl ImageUrlBuilder {
    pub fn new(project_id: impl Into<String>, dataset: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            dataset: dataset.into(),
        }
    }

    pub fn url(&self, image: &ImageRef, width: Option<u32>) -> Option<String> {
        let asset = image.asset.as_ref()?;
        let base = match asset.url.as_deref() {
            Some(url) if !url.is_empty() => url.to_string(),
            _ => self.url_for_reference(asset.reference.as_deref()?)?,
        };
        Some(match width {
            Some(width) => format!("{}?w={}", base, width),
            None => base,
        })
    }

    /// `image-<id>-<width>x<height>-<ext>` becomes `<cdn>/<project>/<dataset>/<id>-<width>x<height>.<ext>`.
    fn url_for_reference(&self, reference: &str) -> Option<String> {
        let rest = reference.strip_prefix("image-")?;
        let (stem, extension) = rest.rsplit_once('-')?;
        let (id, dimensions) = stem.rsplit_once('-')?;
        let (w, h) = dimensions.split_once('x')?;
        let numeric = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
        if id.is_empty() || extension.is_empty() || !numeric(w) || !numeric(h) {
            return None;
        }
        Some(format!(
            "{}/{}/{}/{}.{}",
            IMAGE_CDN, self.project_id, self.dataset, stem, extension
        ))
    }
}
