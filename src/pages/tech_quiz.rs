use log::info;
use yew::prelude::*;

use crate::quiz::questions::{Quiz, QuizAction};

#[derive(Properties, PartialEq)]
pub struct TechQuizProps {
    pub section_ref: NodeRef,
    pub on_contact: Callback<()>,
}

#[function_component(TechQuiz)]
pub fn tech_quiz(props: &TechQuizProps) -> Html {
    let quiz = use_reducer(Quiz::default);

    let restart = {
        let quiz = quiz.clone();
        Callback::from(move |_: MouseEvent| quiz.dispatch(QuizAction::Restart))
    };

    let body = match quiz.current_question() {
        Some(question) => {
            let answered = quiz.current_answer();
            let next = {
                let quiz = quiz.clone();
                Callback::from(move |_: MouseEvent| quiz.dispatch(QuizAction::Next))
            };
            let is_last = quiz.current_index() + 1 == quiz.total();

            html! {
                <div class="quiz-card">
                    <div class="quiz-progress">
                        {format!("Pergunta {} de {}", quiz.current_index() + 1, quiz.total())}
                    </div>
                    <h3>{question.prompt}</h3>
                    <div class="quiz-options">
                        { for question.options.iter().enumerate().map(|(i, option)| {
                            let choose = {
                                let quiz = quiz.clone();
                                Callback::from(move |_: MouseEvent| quiz.dispatch(QuizAction::Choose(i)))
                            };
                            let state = match answered {
                                Some(_) if i == question.correct => Some("correct"),
                                Some(chosen) if chosen == i => Some("wrong"),
                                _ => None,
                            };
                            html! {
                                <button
                                    class={classes!("quiz-option", state)}
                                    disabled={answered.is_some()}
                                    onclick={choose}
                                >
                                    {*option}
                                </button>
                            }
                        }) }
                    </div>
                    {
                        if answered.is_some() {
                            html! {
                                <>
                                    <p class="quiz-explanation">{question.explanation}</p>
                                    <button class="quiz-next" onclick={next}>
                                        { if is_last { "Ver resultado" } else { "Próxima" } }
                                    </button>
                                </>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>
            }
        }
        None => {
            let tier = quiz.tier();
            info!("Quiz finished with {}/{}", quiz.score(), quiz.total());
            let contact = props.on_contact.reform(|_: MouseEvent| ());
            html! {
                <div class="quiz-card quiz-result">
                    <span class="material-symbols-outlined">{"emoji_events"}</span>
                    <h3>{tier.headline()}</h3>
                    <p class="quiz-score">
                        {format!("Você acertou {} de {} perguntas.", quiz.score(), quiz.total())}
                    </p>
                    <p>{tier.message()}</p>
                    <div class="quiz-actions">
                        <button class="quiz-next" onclick={restart.clone()}>{"Refazer quiz"}</button>
                        <button class="quiz-contact" onclick={contact}>{"Falar com especialista"}</button>
                    </div>
                </div>
            }
        }
    };

    html! {
        <section ref={props.section_ref.clone()} class="quiz-section">
            <div class="container">
                <h2>{"Quiz: Quanto você sabe sobre AgroTech?"}</h2>
                <p class="section-lead">{"Teste seus conhecimentos sobre tecnologia no campo."}</p>
                {body}
            </div>
            <style>
                {r#"
                .quiz-section {
                    padding: 6rem 0;
                    background: #ffffff;
                }
                .quiz-card {
                    max-width: 720px;
                    margin: 0 auto;
                    padding: 2.5rem;
                    border-radius: 20px;
                    background: #f6faf3;
                    box-shadow: 0 8px 24px rgba(27, 58, 34, 0.08);
                }
                .quiz-progress {
                    font-size: 0.85rem;
                    color: #4caf50;
                    font-weight: 600;
                    margin-bottom: 0.5rem;
                }
                .quiz-options {
                    display: flex;
                    flex-direction: column;
                    gap: 0.7rem;
                    margin: 1.5rem 0;
                }
                .quiz-option {
                    text-align: left;
                    padding: 0.9rem 1.2rem;
                    border-radius: 10px;
                    border: 2px solid #dce8d6;
                    background: #ffffff;
                    font-size: 1rem;
                    cursor: pointer;
                }
                .quiz-option:disabled {
                    cursor: default;
                }
                .quiz-option.correct {
                    border-color: #43a047;
                    background: #e8f5e9;
                }
                .quiz-option.wrong {
                    border-color: #e53935;
                    background: #ffebee;
                }
                .quiz-explanation {
                    color: #555;
                    font-style: italic;
                }
                .quiz-next, .quiz-contact {
                    padding: 0.8rem 1.8rem;
                    border-radius: 999px;
                    border: none;
                    background: #2e7d32;
                    color: #ffffff;
                    font-size: 1rem;
                    cursor: pointer;
                }
                .quiz-contact {
                    background: transparent;
                    border: 2px solid #2e7d32;
                    color: #2e7d32;
                }
                .quiz-result {
                    text-align: center;
                }
                .quiz-result .material-symbols-outlined {
                    font-size: 3rem;
                    color: #f9a825;
                }
                .quiz-actions {
                    display: flex;
                    justify-content: center;
                    gap: 1rem;
                    margin-top: 1.5rem;
                }
                "#}
            </style>
        </section>
    }
}
