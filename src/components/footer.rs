use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::components::icons::{Glyph, Icon};
use crate::content::FooterCopy;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub doctor_name: AttrValue,
    pub footer: FooterCopy,
}

pub fn copyright_line(year: i32, doctor_name: &str, motto: &str) -> String {
    format!("\u{a9} {year} {doctor_name}. {motto}")
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let year = Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <div class="footer-brand">
                    <Icon glyph={Glyph::Activity} size={32} class={classes!("footer-mark")} />
                    <h2>{ props.doctor_name.clone() }</h2>
                </div>
                <p class="footer-tagline">{ props.footer.tagline.clone() }</p>
                <p class="footer-copyright">
                    { copyright_line(year, &props.doctor_name, &props.footer.motto) }
                </p>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_names_year_and_practice() {
        assert_eq!(
            copyright_line(2026, "Dr. Chhavi Chaudhary", "Advanced Rehabilitation Science"),
            "\u{a9} 2026 Dr. Chhavi Chaudhary. Advanced Rehabilitation Science"
        );
    }
}
