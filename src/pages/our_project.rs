use yew::prelude::*;

struct Step {
    icon: &'static str,
    title: &'static str,
    text: &'static str,
}

const STEPS: [Step; 4] = [
    Step {
        icon: "search",
        title: "Diagnóstico",
        text: "Visitamos a propriedade e mapeamos solo, relevo e fontes de água.",
    },
    Step {
        icon: "settings_input_antenna",
        title: "Instalação",
        text: "Instalamos sensores e a estação meteorológica conectados à nossa plataforma.",
    },
    Step {
        icon: "monitoring",
        title: "Monitoramento",
        text: "Os dados chegam em tempo real e geram alertas quando algo foge do ideal.",
    },
    Step {
        icon: "agriculture",
        title: "Resultados",
        text: "Menos desperdício de água e insumos, mais produtividade por hectare.",
    },
];

#[derive(Properties, PartialEq)]
pub struct OurProjectProps {
    pub section_ref: NodeRef,
}

#[function_component(OurProject)]
pub fn our_project(props: &OurProjectProps) -> Html {
    html! {
        <section ref={props.section_ref.clone()} class="project-section">
            <div class="container">
                <h2>{"Nosso Projeto"}</h2>
                <p class="section-lead">
                    {"Da primeira visita aos resultados na colheita, acompanhamos cada etapa."}
                </p>
                <ol class="project-steps">
                    { for STEPS.iter().enumerate().map(|(i, step)| html! {
                        <li class="project-step">
                            <div class="step-number">{(i + 1).to_string()}</div>
                            <span class="material-symbols-outlined">{step.icon}</span>
                            <h3>{step.title}</h3>
                            <p>{step.text}</p>
                        </li>
                    }) }
                </ol>
            </div>
            <style>
                {r#"
                .project-section {
                    padding: 6rem 0;
                    background: #ffffff;
                }
                .project-steps {
                    list-style: none;
                    padding: 0;
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 1.5rem;
                }
                .project-step {
                    position: relative;
                    padding: 2rem 1.5rem;
                    border: 1px solid #e0eadb;
                    border-radius: 16px;
                    text-align: center;
                }
                .step-number {
                    position: absolute;
                    top: -16px;
                    left: 50%;
                    transform: translateX(-50%);
                    width: 32px;
                    height: 32px;
                    line-height: 32px;
                    border-radius: 50%;
                    background: #4caf50;
                    color: #ffffff;
                    font-weight: 700;
                }
                .project-step .material-symbols-outlined {
                    font-size: 2.2rem;
                    color: #2e7d32;
                }
                "#}
            </style>
        </section>
    }
}
