use yew::prelude::*;

use crate::components::icons::{Glyph, Icon};
use crate::content::Expertise as ExpertiseCopy;
use crate::reveal::Reveal;

#[derive(Properties, PartialEq)]
pub struct ExpertiseProps {
    pub expertise: ExpertiseCopy,
}

#[function_component(Expertise)]
pub fn expertise(props: &ExpertiseProps) -> Html {
    let copy = &props.expertise;

    html! {
        <section id="expertise" class="expertise">
            <div class="section-inner">
                <Reveal class={classes!("section-header")}>
                    <h2 class="eyebrow">{ copy.title.clone() }</h2>
                    <h3 class="section-heading">{ copy.heading.clone() }</h3>
                    <p class="section-description">{ copy.description.clone() }</p>
                </Reveal>
                <div class="services-grid">
                    {
                        copy.services.iter().enumerate().map(|(i, service)| html! {
                            // one row of three cards staggers, the next row starts over
                            <Reveal key={i} delay={100 * (i as u32 % 3)}>
                                <div class="service-card">
                                    <div class="service-icon">
                                        <Icon glyph={Glyph::from(service.icon)} size={28} />
                                    </div>
                                    <h4>{ service.title.clone() }</h4>
                                    <p>{ service.desc.clone() }</p>
                                </div>
                            </Reveal>
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}
