use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use futures::executor::block_on;

use super::*;

const NAVBAR_URL: &str = "/components/navbar.html";
const FOOTER_URL: &str = "/components/footer.html";

/// In-memory server plus page. Every fetch and swap is recorded in one log
/// so the interleaving can be asserted.
#[derive(Default)]
struct FakeSite {
    responses: HashMap<String, Result<FragmentResponse, SiteError>>,
    placeholders: RefCell<HashSet<String>>,
    injected: RefCell<HashMap<String, String>>,
    events: RefCell<Vec<String>>,
}

impl FakeSite {
    fn with_placeholders() -> Self {
        let site = Self::default();
        site.placeholders.borrow_mut().extend(["navbar-placeholder".to_owned(), "footer-placeholder".to_owned()]);
        site
    }

    fn serve(mut self, url: &str, status: u16, body: &str) -> Self {
        self.responses.insert(url.to_owned(), Ok(FragmentResponse { status, body: body.to_owned() }));
        self
    }

    fn fail(mut self, url: &str, message: &str) -> Self {
        self.responses
            .insert(url.to_owned(), Err(SiteError::Fetch { url: url.to_owned(), message: message.to_owned() }));
        self
    }

    fn events(&self) -> Vec<String> {
        self.events.borrow().clone()
    }
}

impl FragmentSource for FakeSite {
    async fn fetch(&self, url: &str) -> Result<FragmentResponse, SiteError> {
        self.events.borrow_mut().push(format!("fetch {url}"));
        self.responses.get(url).cloned().unwrap_or(Ok(FragmentResponse { status: 404, body: String::new() }))
    }
}

impl FragmentHost for FakeSite {
    fn replace_placeholder(&self, placeholder_id: &str, html: &str) -> Result<(), SiteError> {
        self.events.borrow_mut().push(format!("swap {placeholder_id}"));
        if !self.placeholders.borrow_mut().remove(placeholder_id) {
            return Err(SiteError::missing(placeholder_id));
        }
        self.injected.borrow_mut().insert(placeholder_id.to_owned(), html.to_owned());
        Ok(())
    }
}

fn run(site: &FakeSite) -> Result<(), SiteError> {
    block_on(inject_all(site, site, &SiteConfig::default()))
}

#[test]
fn navbar_is_injected_before_footer() {
    assert_eq!(FRAGMENTS, [Fragment::Navbar, Fragment::Footer]);
}

#[test]
fn placeholder_ids_follow_name() {
    assert_eq!(Fragment::Navbar.placeholder_id(), "navbar-placeholder");
    assert_eq!(Fragment::Footer.placeholder_id(), "footer-placeholder");
}

#[test]
fn fragment_urls_use_components_dir() {
    let cfg = SiteConfig::default();
    assert_eq!(cfg.fragment_url(Fragment::Navbar.name()), NAVBAR_URL);
    assert_eq!(cfg.fragment_url(Fragment::Footer.name()), FOOTER_URL);
}

#[test]
fn navbar_is_swapped_in_before_footer_is_requested() {
    let site = FakeSite::with_placeholders().serve(NAVBAR_URL, 200, "<nav></nav>").serve(FOOTER_URL, 200, "<footer></footer>");

    assert_eq!(run(&site), Ok(()));
    assert_eq!(
        site.events(),
        [
            "fetch /components/navbar.html",
            "swap navbar-placeholder",
            "fetch /components/footer.html",
            "swap footer-placeholder",
        ]
    );
    assert_eq!(site.injected.borrow().get("navbar-placeholder").map(String::as_str), Some("<nav></nav>"));
    assert_eq!(site.injected.borrow().get("footer-placeholder").map(String::as_str), Some("<footer></footer>"));
}

#[test]
fn failed_navbar_fetch_stops_before_footer() {
    let site = FakeSite::with_placeholders().fail(NAVBAR_URL, "offline").serve(FOOTER_URL, 200, "<footer></footer>");

    assert_eq!(run(&site), Err(SiteError::Fetch { url: NAVBAR_URL.to_owned(), message: "offline".to_owned() }));
    assert_eq!(site.events(), ["fetch /components/navbar.html"]);
    assert!(site.injected.borrow().is_empty());
}

#[test]
fn error_status_is_not_injected() {
    let site = FakeSite::with_placeholders().serve(NAVBAR_URL, 404, "<h1>Not Found</h1>");

    assert_eq!(run(&site), Err(SiteError::FragmentStatus { url: NAVBAR_URL.to_owned(), status: 404 }));
    assert_eq!(site.events(), ["fetch /components/navbar.html"]);
    assert!(site.injected.borrow().is_empty());
}

#[test]
fn failed_footer_keeps_injected_navbar() {
    let site = FakeSite::with_placeholders().serve(NAVBAR_URL, 200, "<nav></nav>").serve(FOOTER_URL, 500, "");

    assert_eq!(run(&site), Err(SiteError::FragmentStatus { url: FOOTER_URL.to_owned(), status: 500 }));
    assert_eq!(site.injected.borrow().len(), 1);
    assert!(site.injected.borrow().contains_key("navbar-placeholder"));
}

#[test]
fn missing_navbar_placeholder_stops_before_footer() {
    let site = FakeSite::default().serve(NAVBAR_URL, 200, "<nav></nav>").serve(FOOTER_URL, 200, "<footer></footer>");

    assert_eq!(run(&site), Err(SiteError::missing("navbar-placeholder")));
    assert_eq!(site.events(), ["fetch /components/navbar.html", "swap navbar-placeholder"]);
}

#[test]
fn any_2xx_is_injected() {
    let site = FakeSite::with_placeholders().serve(NAVBAR_URL, 203, "<nav></nav>").serve(FOOTER_URL, 299, "<footer></footer>");

    assert_eq!(run(&site), Ok(()));
    assert_eq!(site.injected.borrow().len(), 2);
}
