use yew::prelude::*;

use crate::config;
use crate::components::chatbot::FunnelChatbot;
use crate::components::funnel_catalog::FunnelCatalog;
use crate::funnels::FunnelKind;

/// The marketing page: a hero with the funnel catalog, swapped for the
/// conversation view once a funnel is picked. The conversation component is
/// keyed by the funnel id, so every selection mounts a fresh conversation
/// and nothing leaks between runs.
#[function_component(Landing)]
pub fn landing() -> Html {
    let selected = use_state(|| None::<FunnelKind>);

    // Scroll to top on initial mount and honor `?funnel=` deep links.
    {
        let selected = selected.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                    if let Ok(search) = window.location().search() {
                        if let Ok(params) = web_sys::UrlSearchParams::new_with_str(&search) {
                            if let Some(id) = params.get(config::FUNNEL_QUERY_PARAM) {
                                match id.parse::<FunnelKind>() {
                                    Ok(kind) => selected.set(Some(kind)),
                                    Err(err) => gloo_console::warn!(err.to_string()),
                                }
                            }
                        }
                    }
                }
                || ()
            },
            (),
        );
    }

    let on_select = {
        let selected = selected.clone();
        Callback::from(move |kind: FunnelKind| selected.set(Some(kind)))
    };

    let on_back = {
        let selected = selected.clone();
        Callback::from(move |_| selected.set(None))
    };

    html! {
        <div class="marketing-page">
            {
                match *selected {
                    Some(kind) => html! {
                        <FunnelChatbot key={kind.id()} kind={kind} on_back={on_back.clone()} />
                    },
                    None => html! {
                        <div class="funnel-intro">
                            <h1 class="funnel-heading">{"Welcome to the AI Funnel"}</h1>
                            <p class="funnel-tagline">{"Choose an adventure to begin."}</p>
                            <FunnelCatalog on_select={on_select.clone()} />
                        </div>
                    },
                }
            }
            <style>
                {r#"
                .marketing-page {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1rem;
                    box-sizing: border-box;
                }
                .funnel-intro {
                    max-width: 900px;
                    width: 100%;
                    text-align: center;
                    padding: 2rem;
                }
                .funnel-heading {
                    font-size: 2.5rem;
                    margin-bottom: 1rem;
                    background: linear-gradient(45deg, #fff, #7EB2FF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                    font-weight: 700;
                    text-shadow: 0 0 20px rgba(30, 144, 255, 0.2);
                }
                .funnel-tagline {
                    color: #999;
                    font-size: 1.2rem;
                    margin-bottom: 2.5rem;
                }
                @media (max-width: 768px) {
                    .funnel-heading {
                        font-size: 2rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
