use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AboutSectionProps {
    pub on_navigate: Callback<usize>,
}

struct TeamCard {
    title: &'static str,
    subtitle: &'static str,
    image: &'static str,
    wash: &'static str,
}

const TEAM: [TeamCard; 4] = [
    TeamCard {
        title: "電競精英",
        subtitle: "專業遊戲玩家",
        image: "/assets/3d-character-gamer.png",
        wash: "linear-gradient(to top, #4ade80, #2dd4bf)",
    },
    TeamCard {
        title: "程式魔法師",
        subtitle: "遊戲開發專家",
        image: "/assets/3d-character-developer.png",
        wash: "linear-gradient(to top, #60a5fa, #c084fc)",
    },
    TeamCard {
        title: "創意法師",
        subtitle: "遊戲設計大師",
        image: "/assets/3d-character-mage.png",
        wash: "linear-gradient(to top, #fb923c, #f87171)",
    },
    TeamCard {
        title: "科技工程師",
        subtitle: "技術創新專家",
        image: "/assets/3d-character-engineer.png",
        wash: "linear-gradient(to top, #c084fc, #f472b6)",
    },
];

#[function_component(AboutSection)]
pub fn about_section(props: &AboutSectionProps) -> Html {
    let join = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_| on_navigate.emit(4))
    };

    html! {
        <section class="section about-section">
            <style>
                {r#"
                    .about-section {
                        background: #111827;
                    }
                    .about-header {
                        text-align: center;
                        margin-bottom: 4rem;
                        animation: fade-up 0.8s ease-out both;
                    }
                    .about-lead {
                        font-size: 1.25rem;
                        color: #d1d5db;
                        max-width: 48rem;
                        margin: 0 auto 2rem;
                        line-height: 1.7;
                    }
                    .join-button {
                        background: linear-gradient(to right, #3b82f6, #9333ea);
                        color: #fff;
                    }
                    .join-button:hover {
                        box-shadow: 0 10px 25px rgba(59, 130, 246, 0.25);
                    }
                    .team-grid {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 2rem;
                    }
                    .team-card {
                        position: relative;
                        height: 20rem;
                        border-radius: 1rem;
                        overflow: hidden;
                        animation: fade-up 0.8s ease-out both;
                    }
                    .team-card:nth-child(2) { animation-delay: 0.2s; }
                    .team-card:nth-child(3) { animation-delay: 0.4s; }
                    .team-card:nth-child(4) { animation-delay: 0.6s; }
                    .team-card img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        transition: transform 0.5s ease;
                    }
                    .team-card:hover img {
                        transform: scale(1.1);
                    }
                    .team-card-wash {
                        position: absolute;
                        inset: 0;
                        opacity: 0.6;
                    }
                    .team-card-shade {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to top, rgba(0, 0, 0, 0.8), transparent);
                    }
                    .team-card-caption {
                        position: absolute;
                        left: 1.5rem;
                        right: 1.5rem;
                        bottom: 1.5rem;
                    }
                    .team-card-caption h3 {
                        font-size: 1.5rem;
                        font-weight: 700;
                        color: #fff;
                        margin: 0 0 0.5rem;
                    }
                    .team-card-caption p {
                        color: #e5e7eb;
                        margin: 0;
                    }
                    @media (max-width: 1024px) {
                        .team-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }
                    }
                    @media (max-width: 640px) {
                        .team-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
            <div class="section-inner">
                <div class="about-header">
                    <h2 class="section-title">
                        <span>{"重新定義"}</span>
                        <span class="accent-text">{"虛擬世界"}</span>
                    </h2>
                    <p class="about-lead">
                        {"我們相信未來的遊戲不僅僅是娛樂，而是人類體驗的延伸。Azure Lab 致力於打造沉浸式的虛擬世界，讓玩家能在數位空間中創造、探索和連結。我們的願景是創建一個無縫的數位生態系統，讓現實與虛擬之間的界線逐漸消失。"}
                    </p>
                    <button class="cta-button join-button" onclick={join}>{"加入我們"}</button>
                </div>
                <div class="team-grid">
                    {
                        TEAM.iter().map(|member| html! {
                            <div key={member.title} class="team-card">
                                <img src={member.image} alt={member.title} />
                                <div class="team-card-wash" style={format!("background: {};", member.wash)}></div>
                                <div class="team-card-shade"></div>
                                <div class="team-card-caption">
                                    <h3>{member.title}</h3>
                                    <p>{member.subtitle}</p>
                                </div>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}
