use std::rc::Rc;

use yew::prelude::*;

use crate::config::SCROLLED_THRESHOLD;

/// Page-level UI state shared by the navigation bar, the mobile menu and the
/// booking modal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewState {
    pub scrolled: bool,
    pub mobile_menu_open: bool,
    pub booking_modal_open: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewAction {
    /// Latest vertical scroll offset of the window.
    Scrolled(f64),
    ToggleMenu,
    /// A navigation item was selected.
    Navigate,
    OpenBooking,
    /// "Book" pressed inside the mobile menu: close the menu and open the
    /// modal in one step.
    BookFromMenu,
    CloseBooking,
    /// The booking form was handed off to the messaging client.
    BookingSent,
}

pub fn is_scrolled(offset: f64) -> bool {
    offset > SCROLLED_THRESHOLD
}

impl ViewState {
    pub fn apply(self, action: ViewAction) -> Self {
        match action {
            ViewAction::Scrolled(offset) => Self {
                scrolled: is_scrolled(offset),
                ..self
            },
            ViewAction::ToggleMenu => Self {
                mobile_menu_open: !self.mobile_menu_open,
                ..self
            },
            ViewAction::Navigate => self.close_menu(),
            ViewAction::OpenBooking => self.open_booking(),
            ViewAction::BookFromMenu => self.close_menu().open_booking(),
            ViewAction::CloseBooking | ViewAction::BookingSent => Self {
                booking_modal_open: false,
                ..self
            },
        }
    }

    fn close_menu(self) -> Self {
        Self {
            mobile_menu_open: false,
            ..self
        }
    }

    fn open_booking(self) -> Self {
        Self {
            booking_modal_open: true,
            ..self
        }
    }
}

impl Reducible for ViewState {
    type Action = ViewAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = (*self).apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn any_state() -> impl Strategy<Value = ViewState> {
        (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(s, m, b)| ViewState {
            scrolled: s,
            mobile_menu_open: m,
            booking_modal_open: b,
        })
    }

    #[test]
    fn starts_at_top_with_everything_closed() {
        let state = ViewState::default();
        assert!(!state.scrolled);
        assert!(!state.mobile_menu_open);
        assert!(!state.booking_modal_open);
    }

    #[test]
    fn threshold_is_exclusive() {
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
        let state = ViewState::default()
            .apply(ViewAction::Scrolled(120.0))
            .apply(ViewAction::Scrolled(50.0));
        assert!(!state.scrolled);
    }

    #[test]
    fn toggle_menu_flips_only_the_menu() {
        let state = ViewState::default().apply(ViewAction::ToggleMenu);
        assert_eq!(
            state,
            ViewState {
                mobile_menu_open: true,
                ..ViewState::default()
            }
        );
        assert_eq!(state.apply(ViewAction::ToggleMenu), ViewState::default());
    }

    #[test]
    fn submit_and_close_both_close_the_modal() {
        let open = ViewState::default().apply(ViewAction::OpenBooking);
        assert!(!open.apply(ViewAction::BookingSent).booking_modal_open);
        assert!(!open.apply(ViewAction::CloseBooking).booking_modal_open);
    }

    #[test]
    fn reducer_keeps_the_same_rc_when_nothing_changes() {
        let state = Rc::new(ViewState::default());
        let next = state.clone().reduce(ViewAction::Scrolled(10.0));
        assert!(Rc::ptr_eq(&state, &next));
        let next = state.clone().reduce(ViewAction::Scrolled(200.0));
        assert!(!Rc::ptr_eq(&state, &next));
        assert!(next.scrolled);
    }

    proptest! {
        #[test]
        fn scrolled_tracks_latest_offset(offsets in prop::collection::vec(-100.0f64..2000.0, 1..40)) {
            let mut state = ViewState::default();
            for offset in offsets {
                state = state.apply(ViewAction::Scrolled(offset));
                prop_assert_eq!(state.scrolled, offset > 50.0);
            }
        }

        #[test]
        fn booking_from_menu_always_lands_closed_menu_open_modal(state in any_state()) {
            let next = state.apply(ViewAction::BookFromMenu);
            prop_assert!(!next.mobile_menu_open);
            prop_assert!(next.booking_modal_open);
            prop_assert_eq!(next.scrolled, state.scrolled);
        }

        #[test]
        fn navigate_closes_menu_and_leaves_modal(state in any_state()) {
            let next = state.apply(ViewAction::Navigate);
            prop_assert!(!next.mobile_menu_open);
            prop_assert_eq!(next.booking_modal_open, state.booking_modal_open);
        }

        #[test]
        fn open_booking_is_idempotent(state in any_state()) {
            let once = state.apply(ViewAction::OpenBooking);
            prop_assert_eq!(once.apply(ViewAction::OpenBooking), once);
        }
    }
}
