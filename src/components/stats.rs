use yew::prelude::*;

use crate::content::Stat;
use crate::reveal::Reveal;

#[derive(Properties, PartialEq)]
pub struct StatsProps {
    pub stats: Vec<Stat>,
}

#[function_component(Stats)]
pub fn stats(props: &StatsProps) -> Html {
    html! {
        <section class="stats-banner">
            <div class="stats-grid">
                {
                    props.stats.iter().enumerate().map(|(i, stat)| html! {
                        <Reveal key={i} delay={i as u32 * 100} class={classes!("stat")}>
                            <p class="stat-value">{ stat.value.clone() }</p>
                            <p class="stat-label">{ stat.label.clone() }</p>
                        </Reveal>
                    }).collect::<Html>()
                }
            </div>
        </section>
    }
}
