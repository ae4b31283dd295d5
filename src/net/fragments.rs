//! Navbar/footer fragment injection.
//!
//! Fragments are fetched one at a time and each placeholder's outer HTML is
//! replaced before the next request starts. Elements inside the fragments
//! (`nav-list`, `theme-toggle`, ...) do not exist until [`inject_all`]
//! returns `Ok`, so all dependent setup waits on it.
//!
//! The sequencing runs over two seams: [`FragmentSource`] fetches markup and
//! [`FragmentHost`] swaps it into the page. The browser implementations are
//! [`FetchSource`] and `web_sys::Document`.
//!
//! ERROR HANDLING
//! ==============
//! No retry. The first failure stops the sequence and is returned; anything
//! injected before it stays on the page. A non-2xx answer is a failure, so an
//! error page is never injected as the navbar.

use std::future::Future;

use crate::config::SiteConfig;
use crate::error::SiteError;
use crate::net::is_success;

#[cfg(test)]
#[path = "fragments_test.rs"]
mod fragments_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fragment {
    Navbar,
    Footer,
}

/// Injection order.
pub const FRAGMENTS: [Fragment; 2] = [Fragment::Navbar, Fragment::Footer];

impl Fragment {
    pub fn name(self) -> &'static str {
        match self {
            Self::Navbar => "navbar",
            Self::Footer => "footer",
        }
    }

    /// Id of the element the fragment replaces, e.g. `navbar-placeholder`.
    pub fn placeholder_id(self) -> String {
        format!("{}-placeholder", self.name())
    }
}

/// A fetched fragment before its status is checked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FragmentResponse {
    pub status: u16,
    /// Response text. Sources may leave it empty for non-2xx answers.
    pub body: String,
}

/// Fetches fragment markup.
pub trait FragmentSource {
    /// GET `url`. Any answer is `Ok`; only a request that produced no
    /// response is an `Err`.
    fn fetch(&self, url: &str) -> impl Future<Output = Result<FragmentResponse, SiteError>>;
}

/// The page the fragments are injected into.
pub trait FragmentHost {
    /// Replace the element `placeholder_id` (including itself) with `html`.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::MissingElement`] when there is no such element.
    fn replace_placeholder(&self, placeholder_id: &str, html: &str) -> Result<(), SiteError>;
}

/// Fetch `fragment` and swap it in for its placeholder.
///
/// # Errors
///
/// Returns an error if the request fails, answers non-2xx, or the placeholder
/// is missing.
pub async fn inject<S, H>(source: &S, host: &H, config: &SiteConfig, fragment: Fragment) -> Result<(), SiteError>
where
    S: FragmentSource,
    H: FragmentHost,
{
    let url = config.fragment_url(fragment.name());
    let resp = source.fetch(&url).await?;
    if !is_success(resp.status) {
        return Err(SiteError::FragmentStatus { url, status: resp.status });
    }
    host.replace_placeholder(&fragment.placeholder_id(), &resp.body)?;
    log::debug!("injected {url}");
    Ok(())
}

/// Inject every fragment in order.
///
/// # Errors
///
/// Returns the first failure; later fragments are not requested.
pub async fn inject_all<S, H>(source: &S, host: &H, config: &SiteConfig) -> Result<(), SiteError>
where
    S: FragmentSource,
    H: FragmentHost,
{
    for fragment in FRAGMENTS {
        inject(source, host, config, fragment).await?;
    }
    Ok(())
}

/// Fetches fragments with `fetch`.
#[cfg(feature = "browser")]
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchSource;

#[cfg(feature = "browser")]
impl FragmentSource for FetchSource {
    async fn fetch(&self, url: &str) -> Result<FragmentResponse, SiteError> {
        let fetch_failed = |e: gloo_net::Error| SiteError::Fetch { url: url.to_owned(), message: e.to_string() };
        let resp = gloo_net::http::Request::get(url).send().await.map_err(fetch_failed)?;
        let status = resp.status();
        let body = if is_success(status) { resp.text().await.map_err(fetch_failed)? } else { String::new() };
        Ok(FragmentResponse { status, body })
    }
}

#[cfg(feature = "browser")]
impl FragmentHost for web_sys::Document {
    fn replace_placeholder(&self, placeholder_id: &str, html: &str) -> Result<(), SiteError> {
        let placeholder = self.get_element_by_id(placeholder_id).ok_or_else(|| SiteError::missing(placeholder_id))?;
        placeholder.set_outer_html(html);
        Ok(())
    }
}
