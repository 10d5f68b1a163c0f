use url::Url;

/// Checks link destinations.
pub trait UrlCheck {
    fn is_absolute_url(&self, text: &str) -> bool;
}

/// [`UrlCheck`] requiring a parseable URL with both a scheme and a host.
#[derive(Debug, Clone, Copy, Default)]
pub struct AbsoluteUrl;

impl UrlCheck for AbsoluteUrl {
    fn is_absolute_url(&self, text: &str) -> bool {
        let text = text.trim();
        !text.is_empty() && Url::parse(text).is_ok_and(|url| url.has_host())
    }
}
