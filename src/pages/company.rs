use yew::prelude::*;

const VALUES: [(&str, &str); 3] = [
    ("Missão", "Levar tecnologia acessível ao campo para produzir mais com menos recursos."),
    ("Visão", "Ser referência em agricultura de precisão sustentável no Brasil."),
    ("Valores", "Transparência, respeito ao produtor e compromisso com o meio ambiente."),
];

#[derive(Properties, PartialEq)]
pub struct CompanySectionProps {
    pub section_ref: NodeRef,
}

#[function_component(CompanySection)]
pub fn company_section(props: &CompanySectionProps) -> Html {
    html! {
        <section ref={props.section_ref.clone()} class="company-section">
            <div class="container company-grid">
                <div class="company-text">
                    <h2>{"Sobre a Empresa"}</h2>
                    <p>
                        {"Nascemos da vontade de aproximar a pesquisa agronômica do dia a dia da lavoura. Nossa equipe reúne agrônomos, engenheiros e desenvolvedores que conhecem de perto os desafios do produtor rural."}
                    </p>
                    <p>
                        {"Hoje atendemos propriedades em todas as regiões do país, sempre com suporte local e acompanhamento técnico."}
                    </p>
                </div>
                <div class="company-values">
                    { for VALUES.iter().map(|(title, text)| html! {
                        <div class="value-card">
                            <h3>{*title}</h3>
                            <p>{*text}</p>
                        </div>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .company-section {
                    padding: 6rem 0;
                    background: #1b3a22;
                    color: #e8f5e9;
                }
                .company-section h2 {
                    color: #ffffff;
                    text-align: left;
                }
                .company-grid {
                    display: grid;
                    grid-template-columns: 1.2fr 1fr;
                    gap: 3rem;
                    align-items: center;
                }
                .value-card {
                    background: rgba(255, 255, 255, 0.06);
                    border-left: 4px solid #8bc34a;
                    border-radius: 8px;
                    padding: 1.2rem 1.5rem;
                    margin-bottom: 1rem;
                }
                .value-card h3 {
                    margin: 0 0 0.4rem;
                    color: #8bc34a;
                }
                @media (max-width: 768px) {
                    .company-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
