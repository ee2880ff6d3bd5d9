use std::rc::Rc;

use log::{error, info, Level};
use yew::prelude::*;

mod booking;
mod config;
mod content;
mod navigation;
mod reveal;
mod view_state;

mod components {
    pub mod booking_modal;
    pub mod clinics;
    pub mod expertise;
    pub mod footer;
    pub mod hero;
    pub mod icons;
    pub mod nav;
    pub mod stats;
}
mod pages {
    pub mod landing;
}

use config::ContactId;
use content::SiteContent;
use pages::landing::Landing;

#[derive(Properties, PartialEq)]
struct AppProps {
    content: Rc<SiteContent>,
    contact: ContactId,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    html! {
        <Landing content={props.content.clone()} contact={props.contact.clone()} />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");

    let content = match SiteContent::load() {
        Ok(content) => content,
        Err(err) => {
            error!("site content is invalid: {err}");
            return;
        }
    };
    let contact = match ContactId::clinic() {
        Ok(contact) => contact,
        Err(err) => {
            error!("booking contact is misconfigured: {err}");
            return;
        }
    };

    yew::Renderer::<App>::with_props(AppProps {
        content: Rc::new(content),
        contact,
    })
    .render();
}
