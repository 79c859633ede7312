use crate::core::geo::TileCoord;

/// Trait representing anything that can produce tile URLs for a given coordinate.
pub trait TileSource: Send + Sync {
    /// Build a URL for the requested `coord`.
    fn url(&self, coord: TileCoord) -> String;
}

/// Tile source driven by a URL template containing literal `{z}`, `{x}`,
/// `{y}` tokens.
///
/// Substitution is a single pass: each token is replaced by its decimal
/// value, absent tokens are a no-op, and a template without any tokens is
/// returned as-is.
pub struct TemplateSource {
    template: String,
    subdomains: Vec<&'static str>,
}

impl TemplateSource {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            subdomains: Vec::new(),
        }
    }

    /// Rotates a `{s}` token over the given subdomains. The pick depends
    /// only on the tile coordinate, so it is stable across render passes.
    pub fn with_subdomains(mut self, subdomains: Vec<&'static str>) -> Self {
        self.subdomains = subdomains;
        self
    }

    /// Template for the public OpenStreetMap servers.
    pub fn openstreetmap() -> Self {
        Self::new("https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png")
            .with_subdomains(vec!["a", "b", "c"])
    }
}

impl TileSource for TemplateSource {
    fn url(&self, coord: TileCoord) -> String {
        let mut url = self
            .template
            .replace("{z}", &coord.z.to_string())
            .replace("{x}", &coord.x.to_string())
            .replace("{y}", &coord.y.to_string());
        if !self.subdomains.is_empty() {
            let idx = ((coord.x + coord.y) % self.subdomains.len() as u32) as usize;
            url = url.replace("{s}", self.subdomains[idx]);
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_substitution() {
        let source = TemplateSource::new("http://t/{z}/{x}/{y}.png");
        assert_eq!(source.url(TileCoord::new(1, 2, 3)), "http://t/3/1/2.png");
    }

    #[test]
    fn test_missing_tokens_are_noop() {
        let source = TemplateSource::new("http://t/static.png");
        assert_eq!(source.url(TileCoord::new(1, 2, 3)), "http://t/static.png");

        let source = TemplateSource::new("http://t/{z}/fixed.png");
        assert_eq!(source.url(TileCoord::new(1, 2, 3)), "http://t/3/fixed.png");
    }

    #[test]
    fn test_subdomain_rotation_is_stable() {
        let source = TemplateSource::openstreetmap();
        let url = source.url(TileCoord::new(4, 5, 6));
        assert_eq!(url, source.url(TileCoord::new(4, 5, 6)));
        assert!(url.starts_with("https://a.")
            || url.starts_with("https://b.")
            || url.starts_with("https://c."));
        assert!(url.ends_with("/6/4/5.png"));
    }
}
