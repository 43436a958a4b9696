use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::config;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="container footer-content">
                <span class="footer-brand">
                    <span class="material-symbols-outlined">{"eco"}</span>
                    {"AgroTech"}
                </span>
                <span>{format!("© {} AgroTech. Todos os direitos reservados.", year)}</span>
                <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{config::CONTACT_EMAIL}</a>
            </div>
            <style>
                {r#"
                .site-footer {
                    padding: 2rem 0;
                    background: #102414;
                    color: #a5d6a7;
                    font-size: 0.9rem;
                }
                .footer-content {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                    justify-content: space-between;
                    align-items: center;
                }
                .footer-brand {
                    display: flex;
                    align-items: center;
                    gap: 0.3rem;
                    font-weight: 700;
                    color: #ffffff;
                }
                .site-footer a {
                    color: #a5d6a7;
                }
                "#}
            </style>
        </footer>
    }
}
