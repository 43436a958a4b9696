use yew::prelude::*;
use log::info;
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod climate {
    pub mod advice;
    pub mod catalog;
    pub mod selection;
}
mod impact {
    pub mod counters;
}
mod quiz {
    pub mod questions;
}
mod contact {
    pub mod form;
}
mod utils {
    pub mod scroll;
}
mod components {
    pub mod back_to_top;
    pub mod footer;
}
mod pages {
    pub mod hero;
    pub mod about;
    pub mod impact_counter;
    pub mod our_project;
    pub mod tech_quiz;
    pub mod climate_simulator;
    pub mod company;
    pub mod contact;
    pub mod faq;
}

use components::{back_to_top::BackToTop, footer::Footer};
use pages::{
    about::AboutSection,
    climate_simulator::ClimateSimulator,
    company::CompanySection,
    contact::ContactSection,
    faq::Faq,
    hero::Hero,
    impact_counter::ImpactCounter,
    our_project::OurProject,
    tech_quiz::TechQuiz,
};
use utils::scroll::scroll_to_section;

/// Anchors for every section the header can jump to.
#[derive(Clone, PartialEq, Default)]
pub struct SectionRefs {
    pub impact: NodeRef,
    pub project: NodeRef,
    pub quiz: NodeRef,
    pub simulator: NodeRef,
    pub company: NodeRef,
    pub contact: NodeRef,
    pub questions: NodeRef,
}

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub sections: SectionRefs,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let listener = window.clone().map(|window| {
                let document = window.document();
                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = document
                        .as_ref()
                        .and_then(|d| d.document_element())
                        .map(|e| e.scroll_top())
                        .unwrap_or(0);
                    is_scrolled.set(scroll_top > config::HEADER_SCROLLED_OFFSET);
                }) as Box<dyn FnMut()>);

                if window
                    .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                    .is_err()
                {
                    log::warn!("could not attach header scroll listener");
                }
                scroll_callback
            });

            move || {
                if let (Some(window), Some(scroll_callback)) = (window, listener) {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let nav_link = |label: &'static str, target: NodeRef| {
        let menu_open = menu_open.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            scroll_to_section(&target);
        });
        html! {
            <a href="#" class="nav-link" onclick={onclick}>{label}</a>
        }
    };

    let sections = &props.sections;
    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <header class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <a href="#top" class="nav-logo">
                    <span class="material-symbols-outlined">{"eco"}</span>
                    {"AgroTech"}
                </a>
                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <nav class={menu_class}>
                    { nav_link("Projeto", sections.project.clone()) }
                    { nav_link("Quiz", sections.quiz.clone()) }
                    { nav_link("Simulador", sections.simulator.clone()) }
                    { nav_link("Sobre Nós", sections.company.clone()) }
                    { nav_link("Dúvidas", sections.questions.clone()) }
                    { nav_link("Fale Conosco", sections.contact.clone()) }
                </nav>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 100;
                    padding: 1rem 2rem;
                    transition: background 0.3s ease, box-shadow 0.3s ease;
                }
                .top-nav.scrolled {
                    background: rgba(20, 48, 28, 0.95);
                    box-shadow: 0 2px 12px rgba(0, 0, 0, 0.25);
                }
                .nav-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.4rem;
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #ffffff;
                    text-decoration: none;
                }
                .nav-right {
                    display: flex;
                    gap: 1.5rem;
                }
                .nav-link {
                    color: #e8f5e9;
                    text-decoration: none;
                    font-weight: 500;
                }
                .nav-link:hover {
                    color: #8bc34a;
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 4px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .burger-menu span {
                    width: 24px;
                    height: 3px;
                    background: #ffffff;
                    border-radius: 2px;
                }
                @media (max-width: 768px) {
                    .burger-menu {
                        display: flex;
                    }
                    .nav-right {
                        display: none;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        padding: 1.5rem 2rem;
                        background: rgba(20, 48, 28, 0.98);
                    }
                    .nav-right.mobile-menu-open {
                        display: flex;
                    }
                }
                "#}
            </style>
        </header>
    }
}

#[function_component]
fn App() -> Html {
    let sections = SectionRefs {
        impact: use_node_ref(),
        project: use_node_ref(),
        quiz: use_node_ref(),
        simulator: use_node_ref(),
        company: use_node_ref(),
        contact: use_node_ref(),
        questions: use_node_ref(),
    };

    let to_simulator = {
        let target = sections.simulator.clone();
        Callback::from(move |_: ()| scroll_to_section(&target))
    };
    let to_contact = {
        let target = sections.contact.clone();
        Callback::from(move |_: ()| scroll_to_section(&target))
    };

    html! {
        <div id="top" class="app-container">
            <div class="landing">
                <Header sections={sections.clone()} />
                <Hero on_start={to_simulator} on_contact={to_contact.clone()} />
            </div>
            <AboutSection />
            <ImpactCounter section_ref={sections.impact.clone()} />
            <OurProject section_ref={sections.project.clone()} />
            <TechQuiz section_ref={sections.quiz.clone()} on_contact={to_contact.clone()} />
            <ClimateSimulator section_ref={sections.simulator.clone()} on_contact={to_contact} />
            <CompanySection section_ref={sections.company.clone()} />
            <ContactSection section_ref={sections.contact.clone()} />
            <Faq section_ref={sections.questions.clone()} />
            <Footer />
            <BackToTop />
        </div>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
