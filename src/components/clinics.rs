use yew::prelude::*;

use crate::content::{Clinic, Theme};
use crate::reveal::{Direction, Reveal};

#[derive(Properties, PartialEq)]
pub struct ClinicsProps {
    pub clinics: Vec<Clinic>,
    pub on_book: Callback<()>,
}

/// Cards alternate the side they slide in from.
pub fn card_direction(index: usize) -> Direction {
    if index % 2 == 0 {
        Direction::Right
    } else {
        Direction::Left
    }
}

fn theme_class(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "clinic-card-light",
        Theme::Dark => "clinic-card-dark",
    }
}

#[function_component(Clinics)]
pub fn clinics(props: &ClinicsProps) -> Html {
    html! {
        <section id="clinics" class="clinics">
            <div class="section-inner clinics-grid">
                {
                    props.clinics.iter().enumerate().map(|(i, clinic)| {
                        let on_book = props.on_book.clone();
                        html! {
                            <Reveal
                                key={clinic.id.clone()}
                                direction={card_direction(i)}
                                delay={i as u32 * 100}
                            >
                                <div class={classes!("clinic-card", theme_class(clinic.theme))}>
                                    <h4>{ clinic.name.clone() }</h4>
                                    <p class="clinic-status">{ clinic.status.clone() }</p>
                                    <p class="clinic-detail">{ clinic.address.clone() }</p>
                                    <p class="clinic-detail clinic-hours">{ clinic.hours.clone() }</p>
                                    <button
                                        class="clinic-book"
                                        onclick={Callback::from(move |_: MouseEvent| on_book.emit(()))}
                                    >
                                        {"Book Appointment"}
                                    </button>
                                </div>
                            </Reveal>
                        }
                    }).collect::<Html>()
                }
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cards_alternate_from_the_right() {
        let directions: Vec<_> = (0..4).map(card_direction).collect();
        assert_eq!(
            directions,
            [Direction::Right, Direction::Left, Direction::Right, Direction::Left]
        );
    }
}
