use thiserror::Error;

use crate::config::{ContactId, MESSAGING_DOMAIN};
use crate::view_state::ViewAction;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("please enter your name")]
    MissingName,
    #[error("please enter your phone number")]
    MissingPhone,
    #[error("could not open the messaging app: {0}")]
    Launch(String),
}

/// A filled-in booking form. Both fields are non-empty after trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRequest {
    name: String,
    phone: String,
}

impl BookingRequest {
    pub fn new(name: &str, phone: &str) -> Result<Self, BookingError> {
        let name = name.trim();
        let phone = phone.trim();
        if name.is_empty() {
            return Err(BookingError::MissingName);
        }
        if phone.is_empty() {
            return Err(BookingError::MissingPhone);
        }
        Ok(Self {
            name: name.to_string(),
            phone: phone.to_string(),
        })
    }

    #[cfg(test)]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[cfg(test)]
    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn message(&self, practice: &str) -> String {
        format!(
            "Hello {practice} Clinic,\n\n\
             I would like to request an appointment.\n\n\
             *Name:* {}\n\
             *Phone:* {}\n\n\
             Please let me know the available slots. Thank you!",
            self.name, self.phone
        )
    }

    /// Deep link that opens a chat with `contact`, pre-filled with the
    /// request message.
    pub fn deep_link(&self, practice: &str, contact: &ContactId) -> String {
        format!(
            "https://{}/{}?text={}",
            MESSAGING_DOMAIN,
            contact,
            urlencoding::encode(&self.message(practice))
        )
    }
}

/// Something that can open a link outside the page.
pub trait LinkOpener {
    fn open(&self, url: &str) -> Result<(), BookingError>;
}

/// Opens links in a new browser tab.
pub struct NewTab;

impl LinkOpener for NewTab {
    fn open(&self, url: &str) -> Result<(), BookingError> {
        let window =
            web_sys::window().ok_or_else(|| BookingError::Launch("no window".to_string()))?;
        match window.open_with_url_and_target(url, "_blank") {
            Ok(_) => Ok(()),
            Err(err) => Err(BookingError::Launch(format!("{err:?}"))),
        }
    }
}

/// Validates the form and hands the request off to the messaging client.
/// Nothing is opened when validation fails.
pub fn submit<O: LinkOpener + ?Sized>(
    name: &str,
    phone: &str,
    practice: &str,
    contact: &ContactId,
    opener: &O,
) -> Result<BookingRequest, BookingError> {
    let request = BookingRequest::new(name, phone)?;
    let link = request.deep_link(practice, contact);
    opener.open(&link)?;
    log::info!("booking request handed off to {}", MESSAGING_DOMAIN);
    Ok(request)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Sent,
    /// Nothing was opened; the notice is shown under the form.
    Rejected(String),
}

impl Outcome {
    /// Page-state change that follows the submission, if any.
    pub fn view_action(&self) -> Option<ViewAction> {
        match self {
            Outcome::Sent => Some(ViewAction::BookingSent),
            Outcome::Rejected(_) => None,
        }
    }
}

/// Contents of the booking form between edits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingForm {
    pub name: String,
    pub phone: String,
    pub notice: Option<String>,
}

impl BookingForm {
    /// Submits the form. A sent request clears every field; a rejected one
    /// keeps the input and records the notice.
    pub fn submit<O: LinkOpener + ?Sized>(
        &mut self,
        practice: &str,
        contact: &ContactId,
        opener: &O,
    ) -> Outcome {
        match submit(&self.name, &self.phone, practice, contact, opener) {
            Ok(_) => {
                *self = Self::default();
                Outcome::Sent
            }
            Err(err) => {
                match err {
                    BookingError::Launch(_) => log::error!("{err}"),
                    _ => log::warn!("booking form rejected: {err}"),
                }
                let notice = err.to_string();
                self.notice = Some(notice.clone());
                Outcome::Rejected(notice)
            }
        }
    }

    /// The modal was closed without sending.
    pub fn dismiss(&mut self) {
        self.notice = None;
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::view_state::ViewState;

    const PRACTICE: &str = "Dr. Chhavi Chaudhary";

    #[derive(Default)]
    struct RecordingOpener {
        opened: RefCell<Vec<String>>,
        fail: bool,
    }

    impl LinkOpener for RecordingOpener {
        fn open(&self, url: &str) -> Result<(), BookingError> {
            if self.fail {
                return Err(BookingError::Launch("popup blocked".into()));
            }
            self.opened.borrow_mut().push(url.to_string());
            Ok(())
        }
    }

    fn contact() -> ContactId {
        ContactId::parse("919457888496").unwrap()
    }

    fn text_param(link: &str) -> String {
        let (_, encoded) = link.split_once("?text=").unwrap();
        urlencoding::decode(encoded).unwrap().into_owned()
    }

    #[test]
    fn link_carries_the_filled_template() {
        let opener = RecordingOpener::default();
        let mut state = ViewState::default().apply(ViewAction::OpenBooking);

        submit("Asha Rao", "9876543210", PRACTICE, &contact(), &opener).unwrap();
        state = state.apply(ViewAction::BookingSent);

        let opened = opener.opened.borrow();
        assert_eq!(opened.len(), 1);
        assert!(opened[0].starts_with("https://wa.me/919457888496?text="));
        assert_eq!(
            text_param(&opened[0]),
            "Hello Dr. Chhavi Chaudhary Clinic,\n\n\
             I would like to request an appointment.\n\n\
             *Name:* Asha Rao\n\
             *Phone:* 9876543210\n\n\
             Please let me know the available slots. Thank you!"
        );
        assert!(!state.booking_modal_open);
    }

    #[test]
    fn message_is_percent_encoded() {
        let request = BookingRequest::new("Asha Rao", "+91 98765").unwrap();
        let link = request.deep_link(PRACTICE, &contact());
        let (_, query) = link.split_once('?').unwrap();
        assert!(!query.contains(' '));
        assert!(!query.contains('\n'));
        assert!(query.contains("%2B91%2098765"));
    }

    #[test]
    fn empty_name_never_opens_a_link() {
        let opener = RecordingOpener::default();
        let err = submit("   ", "9876543210", PRACTICE, &contact(), &opener).unwrap_err();
        assert_eq!(err, BookingError::MissingName);
        assert!(opener.opened.borrow().is_empty());
    }

    #[test]
    fn empty_phone_never_opens_a_link() {
        let opener = RecordingOpener::default();
        let err = submit("Asha Rao", "", PRACTICE, &contact(), &opener).unwrap_err();
        assert_eq!(err, BookingError::MissingPhone);
        assert!(opener.opened.borrow().is_empty());
    }

    #[test]
    fn fields_are_trimmed_but_phone_is_free_form() {
        let request = BookingRequest::new("  Asha Rao ", " call me at 98765 ").unwrap();
        assert_eq!(request.name(), "Asha Rao");
        assert_eq!(request.phone(), "call me at 98765");
    }

    #[test]
    fn launch_failure_is_reported() {
        let opener = RecordingOpener {
            fail: true,
            ..Default::default()
        };
        let err = submit("Asha Rao", "9876543210", PRACTICE, &contact(), &opener).unwrap_err();
        assert!(matches!(err, BookingError::Launch(_)));
    }

    fn filled(name: &str, phone: &str) -> BookingForm {
        BookingForm {
            name: name.into(),
            phone: phone.into(),
            notice: None,
        }
    }

    #[test]
    fn sent_form_clears_fields_and_closes_modal() {
        let opener = RecordingOpener::default();
        let mut form = filled("Asha Rao", "9876543210");
        form.notice = Some("please enter your name".into());

        let outcome = form.submit(PRACTICE, &contact(), &opener);

        assert_eq!(outcome, Outcome::Sent);
        assert_eq!(form, BookingForm::default());
        assert_eq!(opener.opened.borrow().len(), 1);

        let state = ViewState::default().apply(ViewAction::OpenBooking);
        let action = outcome.view_action().unwrap();
        assert_eq!(action, ViewAction::BookingSent);
        assert!(!state.apply(action).booking_modal_open);
    }

    #[test]
    fn rejected_form_keeps_input_and_modal() {
        let opener = RecordingOpener::default();
        let mut form = filled("", "9876543210");

        let outcome = form.submit(PRACTICE, &contact(), &opener);

        assert_eq!(outcome, Outcome::Rejected("please enter your name".into()));
        assert_eq!(outcome.view_action(), None);
        assert_eq!(form.phone, "9876543210");
        assert_eq!(form.notice.as_deref(), Some("please enter your name"));
        assert!(opener.opened.borrow().is_empty());
    }

    #[test]
    fn launch_failure_keeps_input_and_modal() {
        let opener = RecordingOpener {
            fail: true,
            ..Default::default()
        };
        let mut form = filled("Asha Rao", "9876543210");

        let outcome = form.submit(PRACTICE, &contact(), &opener);

        assert!(matches!(outcome, Outcome::Rejected(_)));
        assert_eq!(outcome.view_action(), None);
        assert_eq!(form.name, "Asha Rao");
        assert_eq!(form.phone, "9876543210");
        assert!(form.notice.is_some());
    }

    #[test]
    fn dismiss_drops_the_notice_only() {
        let opener = RecordingOpener::default();
        let mut form = filled("Asha Rao", " ");
        form.submit(PRACTICE, &contact(), &opener);
        assert!(form.notice.is_some());

        form.dismiss();

        assert_eq!(form, filled("Asha Rao", " "));
    }
}
