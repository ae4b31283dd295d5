//! Login page: Basic-auth form submission.
//!
//! The form markup is static on the login page. [`LoginForm::find`] returns
//! `None` on every other page, so the submit listener is only installed where
//! `#username` exists.

use std::rc::Rc;

use web_sys::{Document, Element, HtmlInputElement, Window};

use crate::config::SiteConfig;
use crate::consts::{
    CELEBRATION_TEXT, FIELD_ERROR_CLASSES, LOGIN_BOX_ID, LOGIN_ERROR_CLASSES, LOGIN_ERROR_ID, PASSWORD_ID, USERNAME_ID,
};
use crate::error::SiteError;
use crate::net::api::FetchTransport;
use crate::state::login::{LoginOutcome, LoginView, submit};
use crate::util::dom::{add_classes, optional_element, remove_classes, required_element, required_input};
use crate::util::listener::listen;

#[derive(Clone)]
pub struct LoginForm {
    window: Window,
    doc: Document,
    username: HtmlInputElement,
    password: HtmlInputElement,
    login_box: Element,
}

impl LoginForm {
    /// Bind to the login form, or `None` when this page has no `#username`.
    ///
    /// # Errors
    ///
    /// Returns an error if `#username` exists but `#password` or `#loginBox`
    /// does not.
    pub fn find(window: Window, doc: &Document) -> Result<Option<Self>, SiteError> {
        if optional_element(doc, USERNAME_ID).is_none() {
            return Ok(None);
        }
        Ok(Some(Self {
            window,
            doc: doc.clone(),
            username: required_input(doc, USERNAME_ID)?,
            password: required_input(doc, PASSWORD_ID)?,
            login_box: required_element(doc, LOGIN_BOX_ID)?,
        }))
    }

    fn error_element(&self) -> Option<Element> {
        optional_element(&self.doc, LOGIN_ERROR_ID)
    }

    /// Intercept form submission and run the login flow.
    ///
    /// # Errors
    ///
    /// Returns an error if the listener cannot be registered.
    pub fn install(self, config: &SiteConfig) -> Result<(), SiteError> {
        let hostname = self.window.location().hostname()?;
        let endpoint: Rc<str> = Rc::from(config.login_endpoint_for(&hostname));
        let success_href: Rc<str> = Rc::from(config.login_success_href.as_str());
        let doc = self.doc.clone();

        listen(&doc, "submit", false, move |event| {
            event.prevent_default();
            let form = self.clone();
            let endpoint = Rc::clone(&endpoint);
            let success_href = Rc::clone(&success_href);
            wasm_bindgen_futures::spawn_local(async move {
                match submit(&form, &FetchTransport, &endpoint, &success_href).await {
                    Ok(LoginOutcome::Invalid) => log::debug!("login form incomplete"),
                    Ok(outcome) => log::debug!("login finished: {outcome:?}"),
                    Err(e) => log::error!("login form failed: {e}"),
                }
            });
            Ok(())
        })
    }
}

impl LoginView for LoginForm {
    fn field_values(&self) -> (String, String) {
        (self.username.value(), self.password.value())
    }

    fn clear_fields(&self) {
        self.username.set_value("");
        self.password.set_value("");
    }

    fn error_text(&self) -> Option<String> {
        self.error_element().and_then(|el| el.text_content())
    }

    fn show_error(&self, text: &str) -> Result<(), SiteError> {
        if let Some(existing) = self.error_element() {
            existing.set_text_content(Some(text));
            return Ok(());
        }
        let error = self.doc.create_element("div")?;
        error.set_id(LOGIN_ERROR_ID);
        error.set_class_name(LOGIN_ERROR_CLASSES);
        error.set_text_content(Some(text));
        self.login_box.insert_before(&error, self.login_box.first_child().as_ref())?;
        Ok(())
    }

    fn clear_error(&self) -> Result<(), SiteError> {
        if let Some(existing) = self.error_element() {
            existing.remove();
        }
        Ok(())
    }

    fn set_fields_invalid(&self, invalid: bool) -> Result<(), SiteError> {
        for field in [&self.username, &self.password] {
            if invalid {
                add_classes(field, FIELD_ERROR_CLASSES)?;
            } else {
                remove_classes(field, FIELD_ERROR_CLASSES)?;
            }
        }
        Ok(())
    }

    fn celebrate(&self) -> Result<(), SiteError> {
        self.window.alert_with_message(CELEBRATION_TEXT)?;
        Ok(())
    }

    fn navigate(&self, href: &str) -> Result<(), SiteError> {
        self.window.location().set_href(href)?;
        Ok(())
    }
}
