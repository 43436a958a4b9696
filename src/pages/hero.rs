use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub on_start: Callback<()>,
    pub on_contact: Callback<()>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let start = props.on_start.reform(|_: MouseEvent| ());
    let contact = props.on_contact.reform(|_: MouseEvent| ());

    html! {
        <section class="hero">
            <div class="hero-content">
                <h1>{"Tecnologia que cultiva o futuro"}</h1>
                <p class="hero-subtitle">
                    {"Sensores, dados climáticos e irrigação inteligente para produzir mais usando menos água."}
                </p>
                <div class="hero-actions">
                    <button class="hero-cta" onclick={start}>
                        <span class="material-symbols-outlined">{"partly_cloudy_day"}</span>
                        {"Testar o Simulador"}
                    </button>
                    <button class="hero-secondary" onclick={contact}>
                        {"Falar com a equipe"}
                    </button>
                </div>
            </div>
            <style>
                {r#"
                .landing {
                    min-height: 100vh;
                    background: radial-gradient(circle at 20% 20%, #4caf50 0%, transparent 45%),
                        linear-gradient(160deg, #1b5e20 0%, #14301c 70%);
                }
                .hero {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    padding: 0 2rem;
                    color: #ffffff;
                }
                .hero-content {
                    max-width: 760px;
                }
                .hero h1 {
                    font-size: 3.4rem;
                    margin-bottom: 1.5rem;
                }
                .hero-subtitle {
                    font-size: 1.25rem;
                    color: #dcedc8;
                    margin-bottom: 2.5rem;
                }
                .hero-actions {
                    display: flex;
                    gap: 1rem;
                    justify-content: center;
                    flex-wrap: wrap;
                }
                .hero-cta, .hero-secondary {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.9rem 2rem;
                    border-radius: 999px;
                    font-size: 1.05rem;
                    cursor: pointer;
                    transition: transform 0.2s ease;
                }
                .hero-cta {
                    background: #8bc34a;
                    border: none;
                    color: #1b3a22;
                    font-weight: 700;
                }
                .hero-secondary {
                    background: transparent;
                    border: 2px solid #ffffff;
                    color: #ffffff;
                }
                .hero-cta:hover, .hero-secondary:hover {
                    transform: translateY(-2px);
                }
                @media (max-width: 768px) {
                    .hero h1 {
                        font-size: 2.4rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}
