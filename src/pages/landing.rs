use std::rc::Rc;

use web_sys::Event;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::booking_modal::BookingModal;
use crate::components::clinics::Clinics;
use crate::components::expertise::Expertise;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::nav::{MobileMenu, Nav};
use crate::components::stats::Stats;
use crate::config::ContactId;
use crate::content::SiteContent;
use crate::navigation;
use crate::view_state::{ViewAction, ViewState};

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub content: Rc<SiteContent>,
    pub contact: ContactId,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let view = use_reducer_eq(ViewState::default);

    {
        let view = view.clone();
        use_event_with_window("scroll", move |_: Event| {
            if let Some(window) = web_sys::window() {
                let offset = window.scroll_y().unwrap_or(0.0);
                view.dispatch(ViewAction::Scrolled(offset));
            }
        });
    }

    // The page may be restored mid-scroll, so read the offset once on mount.
    {
        let view = view.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    view.dispatch(ViewAction::Scrolled(window.scroll_y().unwrap_or(0.0)));
                }
                || ()
            },
            (),
        );
    }

    let dispatch = |action: ViewAction| {
        let view = view.clone();
        Callback::from(move |_: ()| view.dispatch(action))
    };

    let on_navigate = {
        let view = view.clone();
        Callback::from(move |id: &'static str| {
            view.dispatch(ViewAction::Navigate);
            navigation::navigate_to(id);
        })
    };

    let on_view_action = {
        let view = view.clone();
        Callback::from(move |action: ViewAction| view.dispatch(action))
    };

    let content = &props.content;
    let doctor_name = AttrValue::from(content.doctor_name.clone());

    html! {
        <div class="landing-page">
            <Nav
                doctor_name={doctor_name.clone()}
                specialty={content.specialty.clone()}
                scrolled={view.scrolled}
                menu_open={view.mobile_menu_open}
                on_navigate={on_navigate.clone()}
                on_toggle_menu={dispatch(ViewAction::ToggleMenu)}
                on_book={dispatch(ViewAction::OpenBooking)}
            />
            <MobileMenu
                open={view.mobile_menu_open}
                on_navigate={on_navigate.clone()}
                on_book={dispatch(ViewAction::BookFromMenu)}
            />
            <Hero
                hero={content.hero.clone()}
                profile={content.profile_image.clone()}
                on_book={dispatch(ViewAction::OpenBooking)}
                on_navigate={on_navigate}
            />
            <Stats stats={content.stats.clone()} />
            <Expertise expertise={content.expertise.clone()} />
            <Clinics
                clinics={content.clinics.clone()}
                on_book={dispatch(ViewAction::OpenBooking)}
            />
            <Footer doctor_name={doctor_name.clone()} footer={content.footer.clone()} />
            <BookingModal
                open={view.booking_modal_open}
                practice={doctor_name}
                contact={props.contact.clone()}
                on_action={on_view_action}
            />
        </div>
    }
}
