use log::{info, Level};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

mod contact_form;
mod navigation;
mod components {
    pub mod section_nav;
}
mod sections {
    pub mod about;
    pub mod contact;
    pub mod hero;
    pub mod portfolio;
    pub mod services;
}

use components::section_nav::SectionNav;
use navigation::{Direction, Navigator, SwipeTracker, SECTIONS};
use sections::{
    about::AboutSection, contact::ContactSection, hero::HeroSection,
    portfolio::PortfolioSection, services::ServicesSection,
};

/// Maps the current index to the one panel on screen; the other four are
/// not mounted at all. The caller keys the returned tree on the index so
/// a change re-mounts the panel and its entry animation replays.
fn section_panel(index: usize, on_navigate: Callback<usize>) -> Html {
    info!("Rendering section '{}'", SECTIONS[index].id);
    match index {
        0 => html! { <HeroSection {on_navigate} /> },
        1 => html! { <AboutSection {on_navigate} /> },
        2 => html! { <ServicesSection {on_navigate} /> },
        3 => html! { <PortfolioSection /> },
        _ => html! { <ContactSection /> },
    }
}

#[function_component]
fn App() -> Html {
    let navigator = use_state_eq(Navigator::new);

    // Window-level wheel and touch input. The listeners close over the
    // navigator value from this render, so they are torn down and
    // re-registered whenever it changes, as the cleanup closure runs on
    // every re-run and on unmount.
    {
        let navigator = navigator.clone();
        let current = *navigator;
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let swipe = Rc::new(RefCell::new(SwipeTracker::default()));

                let wheel = {
                    let navigator = navigator.clone();
                    Closure::wrap(Box::new(move |e: web_sys::WheelEvent| {
                        let mut nav = current;
                        if let Some(direction) = Direction::from_wheel_delta(e.delta_y()) {
                            nav.advance(direction, web_sys::js_sys::Date::now());
                        }
                        if nav != current {
                            navigator.set(nav);
                        }
                    }) as Box<dyn FnMut(_)>)
                };

                let touch_start = {
                    let swipe = swipe.clone();
                    Closure::wrap(Box::new(move |e: web_sys::TouchEvent| {
                        if let Some(touch) = e.touches().get(0) {
                            swipe.borrow_mut().begin(touch.client_y() as f64);
                        }
                    }) as Box<dyn FnMut(_)>)
                };

                let touch_end = {
                    let navigator = navigator.clone();
                    let swipe = swipe.clone();
                    Closure::wrap(Box::new(move |e: web_sys::TouchEvent| {
                        let Some(touch) = e.changed_touches().get(0) else {
                            return;
                        };
                        let mut nav = current;
                        if let Some(direction) =
                            swipe.borrow_mut().finish(touch.client_y() as f64)
                        {
                            nav.advance(direction, web_sys::js_sys::Date::now());
                        }
                        if nav != current {
                            navigator.set(nav);
                        }
                    }) as Box<dyn FnMut(_)>)
                };

                window
                    .add_event_listener_with_callback("wheel", wheel.as_ref().unchecked_ref())
                    .unwrap();
                window
                    .add_event_listener_with_callback(
                        "touchstart",
                        touch_start.as_ref().unchecked_ref(),
                    )
                    .unwrap();
                window
                    .add_event_listener_with_callback(
                        "touchend",
                        touch_end.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "wheel",
                            wheel.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                    window
                        .remove_event_listener_with_callback(
                            "touchstart",
                            touch_start.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                    window
                        .remove_event_listener_with_callback(
                            "touchend",
                            touch_end.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            current,
        );
    }

    // Explicit marker/CTA selection, immediate regardless of any cooldown.
    let on_select = {
        let navigator = navigator.clone();
        Callback::from(move |index: usize| {
            let mut nav = *navigator;
            if nav.select(index) {
                navigator.set(nav);
            }
        })
    };

    let current = navigator.current();

    html! {
        <div class="page">
            <style>
                {r#"
                    .page {
                        min-height: 100vh;
                        background: #111827;
                        color: #fff;
                        overflow: hidden;
                        position: relative;
                    }
                    .section {
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        position: relative;
                        overflow: hidden;
                    }
                    .section-inner {
                        width: 100%;
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        position: relative;
                        z-index: 10;
                    }
                    .section-frame {
                        min-height: 100vh;
                        animation: section-enter 0.8s ease-in-out both;
                    }
                    @keyframes section-enter {
                        from { opacity: 0; transform: translateY(50px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    @keyframes fade-up {
                        from { opacity: 0; transform: translateY(50px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    .section-title {
                        font-size: 3.75rem;
                        font-weight: 700;
                        letter-spacing: 0.05em;
                        line-height: 1.15;
                        margin: 0 0 1.5rem;
                    }
                    .section-title span {
                        display: block;
                        color: #fff;
                    }
                    .accent-text {
                        background: linear-gradient(to right, #4ade80, #60a5fa, #a855f7);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }
                    .section-title span.accent-text {
                        color: transparent;
                    }
                    .accent-bar {
                        height: 6px;
                        border-radius: 9999px;
                        background: linear-gradient(to right, #4ade80, #60a5fa, #a855f7);
                    }
                    .cta-button {
                        display: inline-block;
                        background: linear-gradient(to right, #4ade80, #3b82f6);
                        color: #000;
                        border: none;
                        border-radius: 0.5rem;
                        padding: 1rem 2rem;
                        font-size: 1.1rem;
                        font-weight: 600;
                        cursor: pointer;
                        transition: all 0.3s ease;
                    }
                    .cta-button:hover {
                        transform: scale(1.05);
                        box-shadow: 0 10px 25px rgba(74, 222, 128, 0.25);
                    }
                    .cta-button:active {
                        transform: scale(0.95);
                    }
                    @media (max-width: 768px) {
                        .section-title {
                            font-size: 2.5rem;
                        }
                    }
                "#}
            </style>
            <SectionNav {current} on_select={on_select.clone()} />
            <div key={current} class="section-frame">
                { section_panel(current, on_select) }
            </div>
        </div>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting Azure Lab site");
    yew::Renderer::<App>::new().render();
}
