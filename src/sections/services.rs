use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ServicesSectionProps {
    pub on_navigate: Callback<usize>,
}

struct Highlight {
    glyph: &'static str,
    title: &'static str,
    blurb: &'static str,
    chip: &'static str,
}

const HIGHLIGHTS: [Highlight; 3] = [
    Highlight {
        glyph: "▶",
        title: "次世代體驗",
        blurb: "運用最先進的遊戲引擎與AI技術，打造超越想像的沉浸式遊戲世界，重新定義玩家與虛擬環境的互動方式。",
        chip: "linear-gradient(to right, #4ade80, #60a5fa)",
    },
    Highlight {
        glyph: "⚡",
        title: "創新研發",
        blurb: "從概念設計到市場發布，我們的跨領域專家團隊提供完整的遊戲開發解決方案，確保每個項目都能達到業界頂尖水準。",
        chip: "linear-gradient(to right, #c084fc, #f472b6)",
    },
    Highlight {
        glyph: "👥",
        title: "全球社群",
        blurb: "建立跨平台的遊戲生態系統，連結全球玩家社群，創造持續互動與共同成長的遊戲環境。",
        chip: "linear-gradient(to right, #fb923c, #f87171)",
    },
];

struct ServiceCard {
    glyph: &'static str,
    title: &'static str,
    blurb: &'static str,
    chip: &'static str,
}

const SERVICES: [ServiceCard; 3] = [
    ServiceCard {
        glyph: "🎮",
        title: "虛擬世界构建",
        blurb: "打造沉浸式的數位生態系統，讓玩家在虛擬空間中自由創造與探索。",
        chip: "linear-gradient(to right, #4ade80, #2dd4bf)",
    },
    ServiceCard {
        glyph: "⚡",
        title: "AI 智能技術",
        blurb: "運用人工智能與機器學習，創建更智能、更真實的遊戲體驗。",
        chip: "linear-gradient(to right, #60a5fa, #c084fc)",
    },
    ServiceCard {
        glyph: "👥",
        title: "跨平台連接",
        blurb: "實現無縫的跨平台體驗，讓玩家在任何設備上都能連接到同一個虛擬世界。",
        chip: "linear-gradient(to right, #fb923c, #f87171)",
    },
];

#[function_component(ServicesSection)]
pub fn services_section(props: &ServicesSectionProps) -> Html {
    let reach_out = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_| on_navigate.emit(4))
    };

    html! {
        <section class="section services-section">
            <style>
                {r#"
                    .services-backdrop {
                        position: absolute;
                        inset: 0;
                    }
                    .services-backdrop img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        opacity: 0.3;
                    }
                    .services-backdrop-shade {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to bottom right, rgba(17, 24, 39, 0.9), rgba(30, 58, 138, 0.9));
                    }
                    .services-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 4rem;
                        align-items: center;
                    }
                    .services-intro {
                        animation: fade-up 0.8s ease-out both;
                    }
                    .services-title-bar {
                        width: 6rem;
                        height: 4px;
                        margin-bottom: 1.5rem;
                        background: linear-gradient(to right, #4ade80, #60a5fa);
                    }
                    .highlight-row {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                        margin-bottom: 1.5rem;
                    }
                    .glyph-chip {
                        flex-shrink: 0;
                        width: 3rem;
                        height: 3rem;
                        border-radius: 0.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.25rem;
                        color: #000;
                    }
                    .highlight-row h3 {
                        font-size: 1.25rem;
                        font-weight: 600;
                        color: #fff;
                        margin: 0 0 0.25rem;
                    }
                    .highlight-row p {
                        color: #d1d5db;
                        margin: 0;
                        line-height: 1.6;
                    }
                    .services-cta {
                        margin-top: 2rem;
                    }
                    .service-cards {
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                        animation: fade-up 0.8s ease-out 0.2s both;
                    }
                    .service-card {
                        background: rgba(31, 41, 55, 0.5);
                        backdrop-filter: blur(4px);
                        border: 1px solid #374151;
                        border-radius: 1rem;
                        padding: 1.5rem;
                        display: flex;
                        align-items: flex-start;
                        gap: 1rem;
                        transition: border-color 0.3s ease;
                    }
                    .service-card:hover {
                        border-color: rgba(74, 222, 128, 0.5);
                    }
                    .service-card .glyph-chip {
                        font-size: 1.75rem;
                        transition: transform 0.3s ease;
                    }
                    .service-card:hover .glyph-chip {
                        transform: scale(1.1);
                    }
                    .service-card h3 {
                        font-size: 1.25rem;
                        font-weight: 600;
                        color: #fff;
                        margin: 0 0 0.5rem;
                    }
                    .service-card p {
                        color: #d1d5db;
                        margin: 0;
                        line-height: 1.6;
                    }
                    @media (max-width: 1024px) {
                        .services-grid {
                            grid-template-columns: 1fr;
                            gap: 2.5rem;
                        }
                    }
                "#}
            </style>
            <div class="services-backdrop">
                <img src="/assets/ai-tech-bg.jpg" alt="" />
                <div class="services-backdrop-shade"></div>
            </div>
            <div class="section-inner services-grid">
                <div class="services-intro">
                    <h2 class="section-title">
                        <span>{"核心"}</span>
                        <span>{"技術"}</span>
                        <span class="accent-text">{"領域"}</span>
                    </h2>
                    <div class="services-title-bar"></div>
                    {
                        HIGHLIGHTS.iter().map(|item| html! {
                            <div key={item.title} class="highlight-row">
                                <div class="glyph-chip" style={format!("background: {};", item.chip)}>
                                    {item.glyph}
                                </div>
                                <div>
                                    <h3>{item.title}</h3>
                                    <p>{item.blurb}</p>
                                </div>
                            </div>
                        }).collect::<Html>()
                    }
                    <button class="cta-button services-cta" onclick={reach_out}>{"聯絡我們"}</button>
                </div>
                <div class="service-cards">
                    {
                        SERVICES.iter().map(|card| html! {
                            <div key={card.title} class="service-card">
                                <div class="glyph-chip" style={format!("background: {};", card.chip)}>
                                    {card.glyph}
                                </div>
                                <div>
                                    <h3>{card.title}</h3>
                                    <p>{card.blurb}</p>
                                </div>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}
