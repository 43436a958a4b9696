use yew::prelude::*;
use web_sys::MouseEvent;
use yew::{Children, Properties};

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: String,
    children: Children,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("faq-item", if *is_open { "open" } else { "" })}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{if *is_open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqProps {
    pub section_ref: NodeRef,
}

#[function_component(Faq)]
pub fn faq(props: &FaqProps) -> Html {
    html! {
        <section ref={props.section_ref.clone()} class="faq-section">
            <div class="container">
                <h2>{"Perguntas Frequentes"}</h2>
                <p class="section-lead">{"Tudo o que você precisa saber antes de começar."}</p>

                <FaqItem question="Preciso de internet na propriedade?">
                    <p>
                        {"Não necessariamente. Os sensores usam rádio de longo alcance (LoRa) até um gateway, que pode enviar os dados por rede celular ou satélite."}
                    </p>
                </FaqItem>

                <FaqItem question="Quanto tempo leva a instalação?">
                    <p>
                        {"Em propriedades de até 100 hectares a instalação costuma levar de dois a três dias, incluindo o treinamento da equipe."}
                    </p>
                </FaqItem>

                <FaqItem question="Os dados do simulador são reais?">
                    <p>
                        {"Não. O simulador usa valores médios ilustrativos de cada região para mostrar o tipo de recomendação que a plataforma oferece. Na sua propriedade, as recomendações são baseadas nas leituras dos seus próprios sensores."}
                    </p>
                </FaqItem>

                <FaqItem question="Funciona para qualquer cultura?">
                    <p>
                        {"Sim. Já atendemos produtores de grãos, hortaliças, frutas e café. Os limites de alerta são ajustados para cada cultura."}
                    </p>
                </FaqItem>

                <FaqItem question="Quanto custa?">
                    <p>
                        {"O valor depende do tamanho da área e da quantidade de sensores. Fale com a gente para receber uma proposta sem compromisso."}
                    </p>
                </FaqItem>
            </div>

            <style>
                {r#"
                .faq-section {
                    padding: 6rem 0;
                    background: #ffffff;
                }

                .faq-item {
                    max-width: 800px;
                    margin: 0 auto 1rem;
                    border: 1px solid #dce8d6;
                    border-radius: 12px;
                    overflow: hidden;
                }

                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 1.2rem 1.5rem;
                    background: #f6faf3;
                    border: none;
                    font-size: 1.05rem;
                    font-weight: 600;
                    color: #1b3a22;
                    text-align: left;
                    cursor: pointer;
                }

                .toggle-icon {
                    font-size: 1.4rem;
                    color: #4caf50;
                }

                .faq-answer {
                    max-height: 0;
                    padding: 0 1.5rem;
                    overflow: hidden;
                    transition: max-height 0.3s ease, padding 0.3s ease;
                    color: #555;
                }

                .faq-item.open .faq-answer {
                    max-height: 600px;
                    padding: 1rem 1.5rem;
                }
                "#}
            </style>
        </section>
    }
}
