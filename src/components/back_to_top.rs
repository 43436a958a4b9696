use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;
use crate::utils::scroll::scroll_to_top;

#[function_component(BackToTop)]
pub fn back_to_top() -> Html {
    let (_, scroll_y) = use_window_scroll();
    let visible = scroll_y > config::BACK_TO_TOP_OFFSET;

    let onclick = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_to_top();
    });

    html! {
        <>
            <button
                class={classes!("back-to-top", visible.then(|| "visible"))}
                onclick={onclick}
                title="Voltar ao topo"
            >
                <span class="material-symbols-outlined">{"arrow_upward"}</span>
            </button>
            <style>
                {r#"
                .back-to-top {
                    position: fixed;
                    right: 1.5rem;
                    bottom: 1.5rem;
                    width: 48px;
                    height: 48px;
                    border-radius: 50%;
                    border: none;
                    background: #2e7d32;
                    color: #ffffff;
                    cursor: pointer;
                    opacity: 0;
                    pointer-events: none;
                    transition: opacity 0.3s ease;
                    z-index: 90;
                }
                .back-to-top.visible {
                    opacity: 1;
                    pointer-events: auto;
                }
                "#}
            </style>
        </>
    }
}
