use yew::prelude::*;

use crate::navigation::SECTIONS;

#[derive(Properties, PartialEq)]
pub struct SectionNavProps {
    pub current: usize,
    pub on_select: Callback<usize>,
}

/// The fixed marker rail on the right edge: one dot per section, the
/// active one lit. Hovering a dot reveals its section title; clicking
/// jumps straight there, no matter what the wheel was just doing.
#[function_component(SectionNav)]
pub fn section_nav(props: &SectionNavProps) -> Html {
    html! {
        <nav class="section-nav">
            <style>
                {r#"
                    .section-nav {
                        position: fixed;
                        right: 2rem;
                        top: 50%;
                        transform: translateY(-50%);
                        z-index: 50;
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                    }
                    .section-marker-slot {
                        position: relative;
                        display: flex;
                        align-items: center;
                    }
                    .section-marker {
                        width: 14px;
                        height: 14px;
                        padding: 0;
                        border-radius: 50%;
                        border: 2px solid #9ca3af;
                        background: transparent;
                        cursor: pointer;
                        transition: all 0.3s ease;
                    }
                    .section-marker:hover {
                        border-color: #4ade80;
                    }
                    .section-marker.active {
                        background: #4ade80;
                        border-color: #4ade80;
                        box-shadow: 0 0 12px rgba(74, 222, 128, 0.5);
                    }
                    .section-marker-label {
                        position: absolute;
                        right: 1.75rem;
                        top: 50%;
                        transform: translateY(-50%);
                        background: rgba(0, 0, 0, 0.8);
                        color: #fff;
                        padding: 0.25rem 0.75rem;
                        border-radius: 6px;
                        font-size: 0.85rem;
                        white-space: nowrap;
                        opacity: 0;
                        pointer-events: none;
                        transition: opacity 0.3s ease;
                    }
                    .section-marker-slot:hover .section-marker-label {
                        opacity: 1;
                    }
                    @media (max-width: 768px) {
                        .section-nav {
                            right: 1rem;
                        }
                    }
                "#}
            </style>
            {
                SECTIONS.iter().enumerate().map(|(index, section)| {
                    let onclick = {
                        let on_select = props.on_select.clone();
                        Callback::from(move |_| on_select.emit(index))
                    };
                    html! {
                        <div key={section.id} class="section-marker-slot">
                            <button
                                type="button"
                                aria-label={section.title}
                                class={classes!("section-marker", (props.current == index).then(|| "active"))}
                                {onclick}
                            />
                            <span class="section-marker-label">{section.title}</span>
                        </div>
                    }
                }).collect::<Html>()
            }
        </nav>
    }
}
