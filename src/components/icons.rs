use yew::prelude::*;

use crate::content::Icon as ServiceIcon;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Activity,
    User,
    Stethoscope,
    HeartPulse,
    CheckCircle,
    Menu,
    Close,
}

impl From<ServiceIcon> for Glyph {
    fn from(icon: ServiceIcon) -> Self {
        match icon {
            ServiceIcon::Activity => Glyph::Activity,
            ServiceIcon::User => Glyph::User,
            ServiceIcon::Stethoscope => Glyph::Stethoscope,
            ServiceIcon::HeartPulse => Glyph::HeartPulse,
            ServiceIcon::CheckCircle => Glyph::CheckCircle,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub glyph: Glyph,
    #[prop_or(24)]
    pub size: u32,
    #[prop_or_default]
    pub class: Classes,
}

// Outline glyphs on a 24x24 grid.
#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    let paths = match props.glyph {
        Glyph::Activity => html! {
            <path d="M22 12h-4l-3 9L9 3l-3 9H2" />
        },
        Glyph::User => html! {
            <>
                <path d="M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2" />
                <circle cx="12" cy="7" r="4" />
            </>
        },
        Glyph::Stethoscope => html! {
            <>
                <path d="M4.8 2.3A.3.3 0 1 0 5 2H4a2 2 0 0 0-2 2v5a6 6 0 0 0 6 6a6 6 0 0 0 6-6V4a2 2 0 0 0-2-2h-1a.2.2 0 1 0 .3.3" />
                <path d="M8 15v1a6 6 0 0 0 6 6a6 6 0 0 0 6-6v-4" />
                <circle cx="20" cy="10" r="2" />
            </>
        },
        Glyph::HeartPulse => html! {
            <>
                <path d="M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z" />
                <path d="M3.22 12H9.5l.5-1 2 4.5 2-7 1.5 3.5h5.27" />
            </>
        },
        Glyph::CheckCircle => html! {
            <>
                <circle cx="12" cy="12" r="10" />
                <path d="m9 12 2 2 4-4" />
            </>
        },
        Glyph::Menu => html! {
            <>
                <line x1="4" x2="20" y1="6" y2="6" />
                <line x1="4" x2="20" y1="12" y2="12" />
                <line x1="4" x2="20" y1="18" y2="18" />
            </>
        },
        Glyph::Close => html! {
            <>
                <path d="M18 6 6 18" />
                <path d="m6 6 12 12" />
            </>
        },
    };

    let size = props.size.to_string();
    html! {
        <svg
            class={classes!("icon", props.class.clone())}
            width={size.clone()}
            height={size}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            { paths }
        </svg>
    }
}
