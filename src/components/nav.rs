use yew::prelude::*;

use crate::components::icons::{Glyph, Icon};
use crate::navigation::scroll_to_top;

/// Label and target section id of each in-page navigation item.
pub const NAV_ITEMS: [(&str, &str); 2] = [("Expertise", "expertise"), ("Clinics", "clinics")];

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub doctor_name: AttrValue,
    pub specialty: AttrValue,
    pub scrolled: bool,
    pub menu_open: bool,
    pub on_navigate: Callback<&'static str>,
    pub on_toggle_menu: Callback<()>,
    pub on_book: Callback<()>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let toggle_menu = {
        let on_toggle_menu = props.on_toggle_menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle_menu.emit(());
        })
    };

    let book = {
        let on_book = props.on_book.clone();
        Callback::from(move |_: MouseEvent| on_book.emit(()))
    };

    html! {
        <nav class={classes!("top-nav", props.scrolled.then(|| "scrolled"))}>
            <div class="nav-content">
                <div class="nav-logo" onclick={Callback::from(|_: MouseEvent| scroll_to_top())}>
                    <div class="nav-logo-mark">
                        <Icon glyph={Glyph::Activity} />
                    </div>
                    <div>
                        <h1 class="nav-title">{ props.doctor_name.clone() }</h1>
                        <span class="nav-specialty">{ props.specialty.clone() }</span>
                    </div>
                </div>

                <div class="nav-right">
                    {
                        NAV_ITEMS.iter().map(|&(label, id)| {
                            let on_navigate = props.on_navigate.clone();
                            html! {
                                <button
                                    key={id}
                                    class="nav-link"
                                    onclick={Callback::from(move |_: MouseEvent| on_navigate.emit(id))}
                                >
                                    { label }
                                </button>
                            }
                        }).collect::<Html>()
                    }
                    <button class="nav-book-button" onclick={book}>{"Book Now"}</button>
                </div>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                    <Icon glyph={if props.menu_open { Glyph::Close } else { Glyph::Menu }} />
                </button>
            </div>
        </nav>
    }
}

#[derive(Properties, PartialEq)]
pub struct MobileMenuProps {
    pub open: bool,
    pub on_navigate: Callback<&'static str>,
    /// Closes the menu and opens the booking modal.
    pub on_book: Callback<()>,
}

#[function_component(MobileMenu)]
pub fn mobile_menu(props: &MobileMenuProps) -> Html {
    let book = {
        let on_book = props.on_book.clone();
        Callback::from(move |_: MouseEvent| on_book.emit(()))
    };

    html! {
        <div class={classes!("mobile-menu", props.open.then(|| "mobile-menu-open"))}>
            {
                NAV_ITEMS.iter().map(|&(label, id)| {
                    let on_navigate = props.on_navigate.clone();
                    html! {
                        <button
                            key={id}
                            class="mobile-menu-link"
                            onclick={Callback::from(move |_: MouseEvent| on_navigate.emit(id))}
                        >
                            { label }
                        </button>
                    }
                }).collect::<Html>()
            }
            <button class="mobile-menu-book" onclick={book}>{"Book Now"}</button>
        </div>
    }
}
