use gloo_timers::callback::Timeout;
use log::{debug, info, warn};
use stylist::yew::styled_component;
use yew::prelude::*;

use crate::climate::advice::{recommendations, Advisory};
use crate::climate::catalog::{self, ClimateRecord, RegionId};
use crate::climate::selection::{Selection, SelectionAction};
use crate::config;

const DEEP_LINK_PREFIX: &str = "#simulador/";

#[derive(Properties, PartialEq)]
struct RegionCardProps {
    region: RegionId,
    climate: &'static ClimateRecord,
    selected: bool,
    on_select: Callback<RegionId>,
}

#[styled_component(RegionCard)]
fn region_card(props: &RegionCardProps) -> Html {
    let climate = props.climate;
    let accent = css!(
        r#"
        --region-color: ${color};
        border-color: ${color};
        "#,
        color = climate.color
    );

    let onclick = {
        let region = props.region;
        props.on_select.reform(move |_: MouseEvent| region)
    };

    html! {
        <button class={classes!("region-card", accent, props.selected.then(|| "selected"))} onclick={onclick}>
            <span class="material-symbols-outlined">{climate.icon}</span>
            <span class="region-name">{climate.name}</span>
            <span class="region-condition">{climate.condition.label()}</span>
        </button>
    }
}

fn data_card(kind: &'static str, icon: &'static str, value: String, label: &'static str) -> Html {
    html! {
        <div class={classes!("data-card", kind)}>
            <span class="material-symbols-outlined">{icon}</span>
            <div class="data-value">{value}</div>
            <div class="data-label">{label}</div>
        </div>
    }
}

fn recommendation_card(advisory: &Advisory) -> Html {
    html! {
        <div class={classes!("recommendation-card", advisory.severity.class())}>
            <div class="rec-icon">
                <span class="material-symbols-outlined">{advisory.icon}</span>
            </div>
            <div class="rec-content">
                <h4>{advisory.title}</h4>
                <p>{advisory.description}</p>
            </div>
        </div>
    }
}

fn results(climate: &ClimateRecord, on_contact: Callback<()>, on_clear: Callback<MouseEvent>) -> Html {
    let advice = recommendations(climate);
    let contact = on_contact.reform(|_: MouseEvent| ());

    html! {
        <div class="results-container">
            <div class="climate-data">
                <div class="results-title">
                    <h3>{format!("Condições Atuais - {}", climate.name)}</h3>
                    <button class="clear-button" onclick={on_clear} title="Limpar seleção">
                        <span class="material-symbols-outlined">{"close"}</span>
                    </button>
                </div>
                <div class="data-grid">
                    { data_card("temperature", "thermostat", format!("{}°C", climate.temperature), "Temperatura") }
                    { data_card("humidity", "humidity_percentage", format!("{}%", climate.humidity), "Umidade") }
                    { data_card("precipitation", "rainy", format!("{}mm", climate.precipitation), "Precipitação Mensal") }
                    { data_card("wind", "air", format!("{} km/h", climate.wind_speed), "Velocidade do Vento") }
                </div>
            </div>

            {
                if !advice.is_empty() {
                    html! {
                        <div class="recommendations">
                            <h3>
                                <span class="material-symbols-outlined">{"lightbulb"}</span>
                                {"Recomendações Personalizadas"}
                            </h3>
                            <div class="recommendations-list">
                                { for advice.iter().map(recommendation_card) }
                            </div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            <div class="action-section">
                <p>{"Quer implementar essas recomendações na sua propriedade?"}</p>
                <button class="cta-button" onclick={contact}>
                    <span class="material-symbols-outlined">{"contact_support"}</span>
                    {"Falar com Especialista"}
                </button>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ClimateSimulatorProps {
    pub section_ref: NodeRef,
    pub on_contact: Callback<()>,
}

#[function_component(ClimateSimulator)]
pub fn climate_simulator(props: &ClimateSimulatorProps) -> Html {
    let selection = use_reducer(Selection::default);
    let pending = use_mut_ref(|| None::<Timeout>);

    // Drop any pending timeout when the section goes away.
    {
        let pending = pending.clone();
        use_effect_with_deps(move |_| {
            move || {
                if let Some(timeout) = pending.borrow_mut().take() {
                    drop(timeout);
                }
            }
        }, ());
    }

    let on_select = {
        let selection = selection.clone();
        let pending = pending.clone();
        Callback::from(move |region: RegionId| {
            info!("Simulating climate for {}", region);
            selection.dispatch(SelectionAction::Pick(region));

            let selection = selection.clone();
            let timeout = Timeout::new(config::SIMULATION_DELAY_MS, move || {
                match serde_json::to_string(&recommendations(catalog::record(region))) {
                    Ok(json) => debug!("advice for {}: {}", region, json),
                    Err(e) => debug!("could not serialize advice for {}: {}", region, e),
                }
                selection.dispatch(SelectionAction::Resolve(region));
            });
            // replacing the previous handle cancels its timeout
            *pending.borrow_mut() = Some(timeout);
        })
    };

    let on_clear = {
        let selection = selection.clone();
        let pending = pending.clone();
        Callback::from(move |_: MouseEvent| {
            pending.borrow_mut().take();
            selection.dispatch(SelectionAction::Clear);
        })
    };

    // Deep link such as `#simulador/nordeste` opens the simulator on that region.
    {
        let on_select = on_select.clone();
        use_effect_with_deps(move |_| {
            let hash = web_sys::window()
                .and_then(|w| w.location().hash().ok())
                .unwrap_or_default();
            if let Some(key) = hash.strip_prefix(DEEP_LINK_PREFIX) {
                match catalog::lookup(key) {
                    Some((region, _)) => on_select.emit(region),
                    None => warn!("ignoring deep link to unknown region {:?}", key),
                }
            }
            || ()
        }, ());
    }

    let ready = selection.ready();

    html! {
        <section ref={props.section_ref.clone()} class="climate-simulator-section">
            <div class="container">
                <div class="simulator-header">
                    <h2>{"Simulador de Condições Climáticas"}</h2>
                    <p>{"Selecione uma região e descubra as condições climáticas e recomendações personalizadas para sua lavoura"}</p>
                </div>

                <div class="simulator-content">
                    <div class="regions-selector">
                        <h3>{"Selecione uma Região"}</h3>
                        <div class="regions-grid">
                            { for catalog::entries().map(|(region, climate)| html! {
                                <RegionCard
                                    key={region.key()}
                                    region={region}
                                    climate={climate}
                                    selected={ready == Some(region)}
                                    on_select={on_select.clone()}
                                />
                            }) }
                        </div>
                    </div>

                    {
                        match *selection {
                            Selection::Loading(_) => html! {
                                <div class="loading-state">
                                    <div class="spinner"></div>
                                    <p>{"Analisando condições climáticas..."}</p>
                                </div>
                            },
                            Selection::Ready(region) => results(catalog::record(region), props.on_contact.clone(), on_clear),
                            Selection::Idle => html! {
                                <div class="empty-state">
                                    <span class="material-symbols-outlined">{"location_on"}</span>
                                    <p>{"Selecione uma região acima para ver as condições climáticas e recomendações"}</p>
                                </div>
                            },
                        }
                    }
                </div>
            </div>
            <style>
                {r#"
                .climate-simulator-section {
                    padding: 6rem 0;
                    background: #f6faf3;
                }
                .simulator-header p {
                    text-align: center;
                    color: #555;
                    margin-bottom: 3rem;
                }
                .regions-selector h3 {
                    color: #1b3a22;
                    margin-bottom: 1rem;
                }
                .regions-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
                    gap: 1rem;
                    margin-bottom: 2.5rem;
                }
                .region-card {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 0.4rem;
                    padding: 1.4rem 1rem;
                    background: #ffffff;
                    border: 2px solid transparent;
                    border-radius: 14px;
                    cursor: pointer;
                    transition: transform 0.2s ease, box-shadow 0.2s ease;
                }
                .region-card .material-symbols-outlined {
                    font-size: 2.2rem;
                    color: var(--region-color);
                }
                .region-card:hover {
                    transform: translateY(-3px);
                    box-shadow: 0 8px 20px rgba(0, 0, 0, 0.08);
                }
                .region-card.selected {
                    background: var(--region-color);
                    color: #ffffff;
                }
                .region-card.selected .material-symbols-outlined {
                    color: #ffffff;
                }
                .region-name {
                    font-weight: 700;
                }
                .region-condition {
                    font-size: 0.85rem;
                    opacity: 0.8;
                }
                .loading-state, .empty-state {
                    text-align: center;
                    padding: 3rem 1rem;
                    color: #666;
                }
                .empty-state .material-symbols-outlined {
                    font-size: 3rem;
                    color: #9e9e9e;
                }
                .spinner {
                    width: 48px;
                    height: 48px;
                    margin: 0 auto 1rem;
                    border: 4px solid #c8e6c9;
                    border-top-color: #2e7d32;
                    border-radius: 50%;
                    animation: spin 0.9s linear infinite;
                }
                @keyframes spin {
                    to { transform: rotate(360deg); }
                }
                .results-title {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .clear-button {
                    background: none;
                    border: none;
                    color: #777;
                    cursor: pointer;
                }
                .data-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
                    gap: 1rem;
                    margin: 1rem 0 2rem;
                }
                .data-card {
                    background: #ffffff;
                    border-radius: 14px;
                    padding: 1.2rem;
                    text-align: center;
                    box-shadow: 0 4px 14px rgba(0, 0, 0, 0.05);
                }
                .data-card.temperature .material-symbols-outlined { color: #e53935; }
                .data-card.humidity .material-symbols-outlined { color: #1e88e5; }
                .data-card.precipitation .material-symbols-outlined { color: #3949ab; }
                .data-card.wind .material-symbols-outlined { color: #00897b; }
                .data-value {
                    font-size: 1.6rem;
                    font-weight: 700;
                    color: #1b3a22;
                }
                .data-label {
                    color: #777;
                    font-size: 0.9rem;
                }
                .recommendations h3 {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    color: #1b3a22;
                }
                .recommendations-list {
                    display: flex;
                    flex-direction: column;
                    gap: 0.8rem;
                }
                .recommendation-card {
                    display: flex;
                    gap: 1rem;
                    padding: 1rem 1.2rem;
                    border-radius: 12px;
                    background: #ffffff;
                    border-left: 5px solid #1e88e5;
                }
                .recommendation-card.warning { border-left-color: #fb8c00; }
                .recommendation-card.critical { border-left-color: #e53935; }
                .rec-content h4 {
                    margin: 0 0 0.3rem;
                }
                .rec-content p {
                    margin: 0;
                    color: #555;
                }
                .action-section {
                    margin-top: 2rem;
                    text-align: center;
                }
                .cta-button {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.8rem 1.8rem;
                    border: none;
                    border-radius: 999px;
                    background: #2e7d32;
                    color: #ffffff;
                    font-size: 1rem;
                    cursor: pointer;
                }
                "#}
            </style>
        </section>
    }
}
