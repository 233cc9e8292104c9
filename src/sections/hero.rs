use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeroSectionProps {
    pub on_navigate: Callback<usize>,
}

/// Landing panel: brand mark, headline and the floating mascot. The CTA
/// jumps to the about section through the same selection path the marker
/// rail uses.
#[function_component(HeroSection)]
pub fn hero_section(props: &HeroSectionProps) -> Html {
    let explore = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_| on_navigate.emit(1))
    };

    html! {
        <section class="section hero-section">
            <style>
                {r#"
                    .hero-backdrop {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to bottom right, #111827, #1e3a8a, #14532d);
                    }
                    .hero-tint {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to right, rgba(74, 222, 128, 0.2), rgba(59, 130, 246, 0.2));
                    }
                    .hero-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                        align-items: center;
                    }
                    .hero-copy {
                        animation: fade-up 1s ease-out 0.2s both;
                    }
                    .hero-brand {
                        margin-bottom: 2rem;
                    }
                    .hero-brand-name {
                        font-size: 3rem;
                        font-weight: 700;
                        letter-spacing: 0.2em;
                        margin-bottom: 0.75rem;
                    }
                    .hero-brand-suffix {
                        font-size: 1.5rem;
                        font-weight: 300;
                        letter-spacing: 0.1em;
                        color: #d1d5db;
                    }
                    .hero-brand-bar {
                        width: 8rem;
                        height: 4px;
                        margin-top: 1rem;
                    }
                    .hero-title {
                        font-size: 4.5rem;
                        font-weight: 700;
                        letter-spacing: 0.05em;
                        line-height: 1.1;
                        margin: 0 0 1.5rem;
                    }
                    .hero-title span {
                        display: block;
                    }
                    .hero-title-bar {
                        width: 8rem;
                        margin-bottom: 1.5rem;
                    }
                    .hero-lead {
                        font-size: 1.25rem;
                        font-weight: 300;
                        line-height: 1.7;
                        color: #e5e7eb;
                        max-width: 42rem;
                        margin: 0 0 2rem;
                    }
                    .hero-figure {
                        position: relative;
                        display: flex;
                        justify-content: center;
                        align-items: center;
                        animation: fade-up 1s ease-out 0.4s both;
                    }
                    .hero-mascot {
                        width: 100%;
                        max-width: 34rem;
                        height: auto;
                        object-fit: contain;
                        filter: drop-shadow(0 25px 25px rgba(0, 0, 0, 0.45));
                        animation: mascot-float 4s ease-in-out infinite;
                    }
                    @keyframes mascot-float {
                        0%, 100% { transform: translateY(-8px) rotate(-1deg) scale(1); }
                        50% { transform: translateY(8px) rotate(1deg) scale(1.02); }
                    }
                    .hero-orb {
                        position: absolute;
                        border-radius: 50%;
                        opacity: 0.3;
                        filter: blur(4px);
                    }
                    .orb-green {
                        top: -1rem;
                        right: -1rem;
                        width: 5rem;
                        height: 5rem;
                        background: linear-gradient(to right, #4ade80, #3b82f6);
                        animation: orb-drift 3s ease-in-out 0.5s infinite;
                    }
                    .orb-orange {
                        bottom: -1rem;
                        left: -1rem;
                        width: 4rem;
                        height: 4rem;
                        background: linear-gradient(to right, #fb923c, #ef4444);
                        animation: orb-drift 4s ease-in-out 1s infinite;
                    }
                    .orb-purple {
                        top: 50%;
                        right: -2rem;
                        width: 3rem;
                        height: 3rem;
                        background: linear-gradient(to right, #c084fc, #ec4899);
                        opacity: 0.25;
                        animation: orb-drift 5s ease-in-out 2s infinite;
                    }
                    @keyframes orb-drift {
                        0%, 100% { transform: translate(-5px, -15px); }
                        50% { transform: translate(5px, 15px); }
                    }
                    .scroll-hint {
                        position: absolute;
                        bottom: 2rem;
                        left: 50%;
                        color: #4ade80;
                        font-size: 2rem;
                        line-height: 1;
                        animation: hint-bounce 2s ease-in-out infinite;
                    }
                    @keyframes hint-bounce {
                        0%, 100% { transform: translate(-50%, 0); }
                        50% { transform: translate(-50%, 10px); }
                    }
                    @media (max-width: 1024px) {
                        .hero-grid {
                            grid-template-columns: 1fr;
                            text-align: center;
                        }
                        .hero-figure {
                            order: -1;
                        }
                        .hero-brand-bar, .hero-title-bar {
                            margin-left: auto;
                            margin-right: auto;
                        }
                        .hero-title {
                            font-size: 3rem;
                        }
                        .hero-brand-name {
                            font-size: 2rem;
                        }
                    }
                "#}
            </style>
            <div class="hero-backdrop"></div>
            <div class="hero-tint"></div>
            <div class="section-inner hero-grid">
                <div class="hero-copy">
                    <div class="hero-brand">
                        <div class="hero-brand-name accent-text">{"AZURE LAB"}</div>
                        <div class="hero-brand-suffix">{"LIMITED"}</div>
                        <div class="accent-bar hero-brand-bar"></div>
                    </div>
                    <h1 class="hero-title">
                        <span>{"重新定義"}</span>
                        <span>{"數位"}</span>
                        <span class="accent-text">{"未來"}</span>
                    </h1>
                    <div class="accent-bar hero-title-bar"></div>
                    <p class="hero-lead">
                        {"Azure Lab 是香港領先的遊戲科技公司，專注於創建下一代沉浸式虛擬世界。我們結合前沿技術與創新理念，致力於打破現實與數位的界限，為全球玩家創造無限可能。"}
                    </p>
                    <button class="cta-button" onclick={explore}>{"探索未來"}</button>
                </div>
                <div class="hero-figure">
                    <img
                        class="hero-mascot"
                        src="/assets/azure-mascot.png"
                        alt="Azure Lab 吉祥物"
                    />
                    <div class="hero-orb orb-green"></div>
                    <div class="hero-orb orb-orange"></div>
                    <div class="hero-orb orb-purple"></div>
                </div>
            </div>
            <div class="scroll-hint">{"⌄"}</div>
        </section>
    }
}
