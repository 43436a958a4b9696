use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::config;
use crate::impact::counters::{format_number, Animation, Counters, FINAL};
use crate::utils::scroll::is_in_view;

#[derive(Properties, PartialEq)]
pub struct ImpactCounterProps {
    pub section_ref: NodeRef,
}

fn start_animation(counters: UseStateHandle<Counters>, interval_handle: Rc<RefCell<Option<Interval>>>) {
    let animation = Rc::new(RefCell::new(Animation::new(FINAL, config::COUNTER_STEPS)));
    let handle = interval_handle.clone();
    let tick_ms = Animation::tick_interval(config::COUNTER_DURATION_MS, config::COUNTER_STEPS);

    let interval = Interval::new(tick_ms, move || {
        let mut animation = animation.borrow_mut();
        counters.set(animation.tick());
        if animation.is_finished() {
            debug!("impact counters reached their final values");
            // can't drop the Interval from inside its own callback
            if let Some(interval) = handle.borrow_mut().take() {
                Timeout::new(0, move || drop(interval)).forget();
            }
        }
    });
    *interval_handle.borrow_mut() = Some(interval);
}

#[function_component(ImpactCounter)]
pub fn impact_counter(props: &ImpactCounterProps) -> Html {
    let counters = use_state(Counters::default);
    let has_animated = use_mut_ref(|| false);
    let interval_handle: Rc<RefCell<Option<Interval>>> = use_mut_ref(|| None);
    let observed = use_node_ref();

    {
        let counters = counters.clone();
        let has_animated = has_animated.clone();
        let interval_handle = interval_handle.clone();
        let observed = observed.clone();

        use_effect_with_deps(move |_| {
            let check_visibility = {
                let interval_handle = interval_handle.clone();
                move || {
                    if *has_animated.borrow() || !is_in_view(&observed, config::COUNTER_VISIBILITY_THRESHOLD) {
                        return;
                    }
                    *has_animated.borrow_mut() = true;
                    debug!("impact section visible, starting counters");
                    start_animation(counters.clone(), interval_handle.clone());
                }
            };

            // the section may already be on screen after a reload
            check_visibility();

            let window = web_sys::window();
            let scroll_callback = Closure::wrap(Box::new(check_visibility) as Box<dyn FnMut()>);
            if let Some(window) = &window {
                let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
            }

            move || {
                if let Some(window) = window {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }
                if let Some(interval) = interval_handle.borrow_mut().take() {
                    drop(interval);
                }
            }
        }, ());
    }

    let cards = [
        ("water_drop", "", counters.water, "Litros de água economizados"),
        ("eco", "co2", counters.co2, "Toneladas de CO₂ reduzidas"),
        ("agriculture", "properties", counters.properties, "Propriedades beneficiadas"),
        ("landscape", "area", counters.area, "Hectares monitorados"),
    ];

    html! {
        <section ref={props.section_ref.clone()} class="impact-section">
            <div ref={observed} class="container">
                <div class="impact-header">
                    <h2>{"Nosso Impacto Real"}</h2>
                    <p>{"Resultados concretos de quem já adotou tecnologia sustentável"}</p>
                </div>

                <div class="impact-cards">
                    { for cards.into_iter().map(|(icon, modifier, value, label)| html! {
                        <div class="impact-card">
                            <div class={classes!("impact-icon", (!modifier.is_empty()).then(|| modifier))}>
                                <span class="material-symbols-outlined">{icon}</span>
                            </div>
                            <div class="impact-content">
                                <div class="impact-number">{format_number(value)}</div>
                                <div class="impact-label">{label}</div>
                            </div>
                        </div>
                    }) }
                </div>

                <div class="impact-footer">
                    <p>{"Dados atualizados em tempo real • Última atualização: Outubro 2025"}</p>
                </div>
            </div>
            <style>
                {r#"
                .impact-section {
                    padding: 6rem 0;
                    background: linear-gradient(135deg, #1b5e20, #2e7d32);
                    color: #ffffff;
                }
                .impact-header h2 {
                    color: #ffffff;
                }
                .impact-header p {
                    text-align: center;
                    color: #c8e6c9;
                    margin-bottom: 3rem;
                }
                .impact-cards {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                    gap: 1.5rem;
                }
                .impact-card {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    padding: 1.5rem;
                    border-radius: 16px;
                    background: rgba(255, 255, 255, 0.08);
                    backdrop-filter: blur(4px);
                }
                .impact-icon {
                    width: 56px;
                    height: 56px;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: #29b6f6;
                }
                .impact-icon.co2 { background: #66bb6a; }
                .impact-icon.properties { background: #ffa726; }
                .impact-icon.area { background: #8d6e63; }
                .impact-number {
                    font-size: 1.9rem;
                    font-weight: 700;
                    font-variant-numeric: tabular-nums;
                }
                .impact-label {
                    color: #c8e6c9;
                }
                .impact-footer {
                    margin-top: 2.5rem;
                    text-align: center;
                    font-size: 0.9rem;
                    color: #a5d6a7;
                }
                "#}
            </style>
        </section>
    }
}
