use yew::prelude::*;

const PILLARS: [(&str, &str, &str); 3] = [
    (
        "sensors",
        "Monitoramento contínuo",
        "Sensores de solo e estações meteorológicas acompanham a lavoura 24 horas por dia.",
    ),
    (
        "water_drop",
        "Uso eficiente da água",
        "A irrigação é acionada só quando e onde a planta precisa.",
    ),
    (
        "insights",
        "Decisões com dados",
        "Painéis simples transformam leituras em recomendações práticas para o produtor.",
    ),
];

#[function_component(AboutSection)]
pub fn about_section() -> Html {
    html! {
        <section class="about-section">
            <div class="container">
                <h2>{"Agricultura sustentável começa com informação"}</h2>
                <p class="section-lead">
                    {"Ajudamos pequenos e médios produtores a entender o clima, o solo e a água da sua propriedade."}
                </p>
                <div class="pillars">
                    { for PILLARS.iter().map(|(icon, title, text)| html! {
                        <div class="pillar">
                            <span class="material-symbols-outlined">{*icon}</span>
                            <h3>{*title}</h3>
                            <p>{*text}</p>
                        </div>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .container {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 2rem;
                }
                section h2 {
                    font-size: 2.4rem;
                    color: #1b3a22;
                    text-align: center;
                    margin-bottom: 1rem;
                }
                .section-lead {
                    text-align: center;
                    color: #555;
                    max-width: 680px;
                    margin: 0 auto 3rem;
                }
                .about-section {
                    padding: 6rem 0;
                    background: #f6faf3;
                }
                .pillars {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                    gap: 2rem;
                }
                .pillar {
                    background: #ffffff;
                    border-radius: 16px;
                    padding: 2rem;
                    box-shadow: 0 6px 20px rgba(27, 58, 34, 0.08);
                }
                .pillar .material-symbols-outlined {
                    font-size: 2.5rem;
                    color: #4caf50;
                }
                .pillar h3 {
                    margin: 1rem 0 0.5rem;
                    color: #1b3a22;
                }
                .pillar p {
                    color: #555;
                }
                "#}
            </style>
        </section>
    }
}
