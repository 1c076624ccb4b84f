use yew::prelude::*;

use crate::funnels::FunnelKind;

#[derive(Properties, PartialEq)]
pub struct FunnelCatalogProps {
    pub on_select: Callback<FunnelKind>,
}

/// The selectable funnel cards. Selection is reported upward; all cards are
/// statically valid so there is nothing to fail.
#[function_component]
pub fn FunnelCatalog(props: &FunnelCatalogProps) -> Html {
    html! {
        <div class="funnel-catalog">
            {
                FunnelKind::ALL.into_iter().map(|kind| {
                    let descriptor = kind.descriptor();
                    let on_select = props.on_select.clone();
                    html! {
                        <div
                            key={descriptor.kind.id()}
                            class="funnel-card"
                            onclick={Callback::from(move |_| on_select.emit(descriptor.kind))}
                        >
                            <div class="funnel-card-icon">{descriptor.icon}</div>
                            <h2 class="funnel-card-title">{descriptor.title}</h2>
                            <p class="funnel-card-description">{descriptor.description}</p>
                        </div>
                    }
                }).collect::<Html>()
            }
            <style>
                {r#"
                .funnel-catalog {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                    gap: 1.5rem;
                    width: 100%;
                }
                .funnel-card {
                    background: rgba(30, 30, 30, 0.7);
                    border: 1px solid rgba(30, 144, 255, 0.1);
                    border-radius: 12px;
                    padding: 1.5rem;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }
                .funnel-card:hover {
                    transform: translateY(-4px);
                    border-color: rgba(30, 144, 255, 0.4);
                    box-shadow: 0 4px 20px rgba(30, 144, 255, 0.15);
                }
                .funnel-card-icon {
                    font-size: 2.5rem;
                    margin-bottom: 1rem;
                }
                .funnel-card-title {
                    color: white;
                    font-size: 1.3rem;
                    margin: 0 0 0.5rem;
                }
                .funnel-card:hover .funnel-card-title {
                    color: #7EB2FF;
                }
                .funnel-card-description {
                    color: #999;
                    font-size: 0.9rem;
                    line-height: 1.5;
                    margin: 0;
                }
                @media (max-width: 768px) {
                    .funnel-catalog {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
