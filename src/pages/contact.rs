use log::{info, warn};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::contact::form::ContactForm;

#[derive(Properties, PartialEq)]
pub struct ContactSectionProps {
    pub section_ref: NodeRef,
}

#[function_component(ContactSection)]
pub fn contact_section(props: &ContactSectionProps) -> Html {
    let form = use_state(ContactForm::default);
    let error = use_state(|| None::<String>);
    let success = use_state(|| None::<String>);

    let on_name = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(ContactForm { name: input.value(), ..(*form).clone() });
        })
    };
    let on_email = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(ContactForm { email: input.value(), ..(*form).clone() });
        })
    };
    let on_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            form.set(ContactForm { message: input.value(), ..(*form).clone() });
        })
    };

    let onsubmit = {
        let form = form.clone();
        let error = error.clone();
        let success = success.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match form.validate() {
                Ok(valid) => {
                    match serde_json::to_string(&valid) {
                        Ok(json) => info!("Contact request: {}", json),
                        Err(err) => warn!("Could not serialize contact request: {}", err),
                    }
                    error.set(None);
                    success.set(Some(format!(
                        "Obrigado, {}! Entraremos em contato pelo e-mail {} em breve.",
                        valid.name, valid.email
                    )));
                    form.set(ContactForm::default());
                }
                Err(problem) => {
                    success.set(None);
                    error.set(Some(problem.to_string()));
                }
            }
        })
    };

    html! {
        <section ref={props.section_ref.clone()} class="contact-section">
            <div class="container contact-grid">
                <div class="contact-info">
                    <h2>{"Fale Conosco"}</h2>
                    <p>{"Conte um pouco sobre a sua propriedade e um especialista vai entrar em contato."}</p>
                    <ul>
                        <li>
                            <span class="material-symbols-outlined">{"mail"}</span>
                            <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{config::CONTACT_EMAIL}</a>
                        </li>
                        <li>
                            <span class="material-symbols-outlined">{"schedule"}</span>
                            {"Segunda a sexta, das 8h às 18h"}
                        </li>
                    </ul>
                </div>
                <form class="contact-form" onsubmit={onsubmit}>
                    <label for="contact-name">{"Nome"}</label>
                    <input
                        id="contact-name"
                        type="text"
                        value={form.name.clone()}
                        oninput={on_name}
                    />
                    <label for="contact-email">{"E-mail"}</label>
                    <input
                        id="contact-email"
                        type="email"
                        value={form.email.clone()}
                        oninput={on_email}
                    />
                    <label for="contact-message">{"Mensagem"}</label>
                    <textarea
                        id="contact-message"
                        rows="5"
                        value={form.message.clone()}
                        oninput={on_message}
                    />
                    {
                        if let Some(error) = (*error).as_ref() {
                            html! { <div class="message error-message">{error.clone()}</div> }
                        } else if let Some(success) = (*success).as_ref() {
                            html! { <div class="message success-message">{success.clone()}</div> }
                        } else {
                            html! {}
                        }
                    }
                    <button type="submit" class="contact-submit">{"Enviar mensagem"}</button>
                </form>
            </div>
            <style>
                {r#"
                .contact-section {
                    padding: 6rem 0;
                    background: #f6faf3;
                }
                .contact-section h2 {
                    text-align: left;
                }
                .contact-grid {
                    display: grid;
                    grid-template-columns: 1fr 1.2fr;
                    gap: 3rem;
                }
                .contact-info ul {
                    list-style: none;
                    padding: 0;
                }
                .contact-info li {
                    display: flex;
                    align-items: center;
                    gap: 0.6rem;
                    margin-bottom: 0.8rem;
                    color: #1b3a22;
                }
                .contact-form {
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                    padding: 2rem;
                    border-radius: 16px;
                    background: #ffffff;
                    box-shadow: 0 6px 20px rgba(27, 58, 34, 0.08);
                }
                .contact-form input, .contact-form textarea {
                    padding: 0.8rem;
                    border: 1px solid #cfd8cc;
                    border-radius: 8px;
                    font-size: 1rem;
                    font-family: inherit;
                }
                .message {
                    padding: 0.8rem;
                    border-radius: 8px;
                }
                .error-message {
                    background: #ffebee;
                    color: #c62828;
                }
                .success-message {
                    background: #e8f5e9;
                    color: #2e7d32;
                }
                .contact-submit {
                    margin-top: 0.5rem;
                    padding: 0.9rem;
                    border: none;
                    border-radius: 999px;
                    background: #2e7d32;
                    color: #ffffff;
                    font-size: 1rem;
                    cursor: pointer;
                }
                @media (max-width: 768px) {
                    .contact-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
