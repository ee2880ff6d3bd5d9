use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::booking::{BookingForm, NewTab};
use crate::components::icons::{Glyph, Icon};
use crate::config::ContactId;
use crate::view_state::ViewAction;

#[derive(Properties, PartialEq)]
pub struct BookingModalProps {
    pub open: bool,
    pub practice: AttrValue,
    pub contact: ContactId,
    /// Receives `CloseBooking` on dismissal and `BookingSent` after a hand-off.
    pub on_action: Callback<ViewAction>,
}

#[function_component(BookingModal)]
pub fn booking_modal(props: &BookingModalProps) -> Html {
    let form = use_state(BookingForm::default);

    let oninput_name = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.name = input.value();
            form.set(next);
        })
    };

    let oninput_phone = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.phone = input.value();
            form.set(next);
        })
    };

    let onsubmit = {
        let form = form.clone();
        let practice = props.practice.clone();
        let contact = props.contact.clone();
        let on_action = props.on_action.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut next = (*form).clone();
            let outcome = next.submit(&practice, &contact, &NewTab);
            form.set(next);
            if let Some(action) = outcome.view_action() {
                on_action.emit(action);
            }
        })
    };

    let close = {
        let form = form.clone();
        let on_action = props.on_action.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*form).clone();
            next.dismiss();
            form.set(next);
            on_action.emit(ViewAction::CloseBooking);
        })
    };

    html! {
        <div class={classes!("booking-modal", props.open.then(|| "booking-modal-open"))}>
            <div class="booking-backdrop" onclick={close.clone()}></div>
            <div class="booking-dialog" role="dialog" aria-modal="true">
                <button class="booking-close" onclick={close} aria-label="Close">
                    <Icon glyph={Glyph::Close} />
                </button>
                <div class="booking-header">
                    <h3>{"Request Appointment"}</h3>
                    <p>{"Our team will confirm your slot shortly."}</p>
                </div>
                <form class="booking-form" onsubmit={onsubmit}>
                    <input
                        name="name"
                        type="text"
                        required={true}
                        placeholder="FULL NAME"
                        value={form.name.clone()}
                        oninput={oninput_name}
                    />
                    <input
                        name="phone"
                        type="tel"
                        required={true}
                        placeholder="PHONE NUMBER"
                        value={form.phone.clone()}
                        oninput={oninput_phone}
                    />
                    {
                        if let Some(message) = &form.notice {
                            html! { <p class="booking-notice">{ message.clone() }</p> }
                        } else {
                            html! {}
                        }
                    }
                    <button type="submit" class="booking-submit">{"Confirm Slot"}</button>
                </form>
            </div>
        </div>
    }
}
