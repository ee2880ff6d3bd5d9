use yew::prelude::*;

use crate::content::{HeroCopy, ProfileImage, Segment};
use crate::reveal::{Direction, Reveal};

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub hero: HeroCopy,
    pub profile: ProfileImage,
    pub on_book: Callback<()>,
    pub on_navigate: Callback<&'static str>,
}

fn render_segment(segment: &Segment) -> Html {
    match segment {
        Segment::Plain(text) => html! { <>{ text.clone() }</> },
        Segment::Emphasis { class, text } => html! {
            <span class={class.clone()}>{ text.clone() }</span>
        },
    }
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let book = {
        let on_book = props.on_book.clone();
        Callback::from(move |_: MouseEvent| on_book.emit(()))
    };
    let clinics = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit("clinics"))
    };

    html! {
        <section class="hero">
            <div class="hero-grid">
                <div class="hero-copy">
                    <Reveal delay={100}>
                        <div class="hero-badge">{ props.hero.badge.clone() }</div>
                    </Reveal>
                    <Reveal delay={200}>
                        <h1 class="hero-title">
                            { for props.hero.title.segments().iter().map(render_segment) }
                        </h1>
                    </Reveal>
                    <Reveal delay={300}>
                        <p class="hero-description">{ props.hero.description.clone() }</p>
                    </Reveal>
                    <Reveal delay={400} class={classes!("hero-actions")}>
                        <button class="hero-cta" onclick={book}>{"Start Recovery"}</button>
                        <button class="hero-secondary" onclick={clinics}>{"Our Clinics"}</button>
                    </Reveal>
                </div>
                <div class="hero-portrait">
                    <Reveal direction={Direction::Left} delay={500}>
                        <div class="portrait-frame">
                            <img src={props.profile.src.clone()} alt={props.profile.alt.clone()} />
                        </div>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}
