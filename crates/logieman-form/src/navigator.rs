//! Post-submission redirect.

use std::sync::Arc;

use logieman_core::DeviceFingerprint;
use url::Url;

/// Performs client-side navigation.
pub trait Navigator: Send + Sync {
    fn navigate(&self, url: &Url);
}

impl<N: Navigator + ?Sized> Navigator for &N {
    fn navigate(&self, url: &Url) {
        (**self).navigate(url);
    }
}

impl<N: Navigator + ?Sized> Navigator for Arc<N> {
    fn navigate(&self, url: &Url) {
        (**self).navigate(url);
    }
}

/// The dashboard sign-in URL that picks the posted load back up:
/// `<base>/signin?redirect=post-load&deviceFingerprint=<fingerprint>`.
///
/// Any query or fragment on `base` is dropped; a path on `base` is kept.
pub fn redirect_url(base: &Url, fingerprint: &DeviceFingerprint) -> Url {
    let mut url = base.clone();
    let path = format!("{}/signin", base.path().trim_end_matches('/'));
    url.set_path(&path);
    url.set_fragment(None);
    url.set_query(None);
    url.query_pairs_mut()
        .append_pair("redirect", "post-load")
        .append_pair("deviceFingerprint", fingerprint.as_str());
    url
}
