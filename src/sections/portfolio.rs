use yew::prelude::*;

struct Project {
    title: &'static str,
    subtitle: &'static str,
    category: &'static str,
    image: &'static str,
    video: &'static str,
    wash: &'static str,
}

const PROJECTS: [Project; 3] = [
    Project {
        title: "CYBER LEGENDS",
        subtitle: "未來戰士",
        category: "動作遊戲",
        image: "/assets/game-cyber-legends.jpg",
        video: "/assets/video-cyber-legends.mp4",
        wash: "linear-gradient(to top, #4ade80, #2dd4bf)",
    },
    Project {
        title: "NEON RACING",
        subtitle: "霓虹賽車",
        category: "競速遊戲",
        image: "/assets/game-neon-racing.jpg",
        video: "/assets/video-neon-racing.mp4",
        wash: "linear-gradient(to top, #60a5fa, #c084fc)",
    },
    Project {
        title: "SPACE ODYSSEY",
        subtitle: "太空探索",
        category: "冒險遊戲",
        image: "/assets/game-space-odyssey.jpg",
        video: "/assets/video-space-odyssey.mp4",
        wash: "linear-gradient(to top, #fb923c, #f87171)",
    },
];

/// Project showcase: three game cards that swap to a looping trailer on
/// hover and open a full player in a modal on click.
#[function_component(PortfolioSection)]
pub fn portfolio_section() -> Html {
    let selected = use_state(|| None::<usize>);

    let close_modal = {
        let selected = selected.clone();
        Callback::from(move |_| selected.set(None))
    };

    html! {
        <section class="section portfolio-section">
            <style>
                {r#"
                    .portfolio-section {
                        background: #111827;
                    }
                    .portfolio-header {
                        text-align: center;
                        margin-bottom: 4rem;
                        animation: fade-up 0.8s ease-out both;
                    }
                    .portfolio-lead {
                        font-size: 1.25rem;
                        color: #d1d5db;
                        max-width: 48rem;
                        margin: 0 auto;
                        line-height: 1.7;
                    }
                    .project-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                    }
                    .project-card {
                        position: relative;
                        border-radius: 1rem;
                        overflow: hidden;
                        cursor: pointer;
                        animation: fade-up 0.8s ease-out both;
                    }
                    .project-card:nth-child(2) { animation-delay: 0.2s; }
                    .project-card:nth-child(3) { animation-delay: 0.4s; }
                    .project-media {
                        position: relative;
                        height: 24rem;
                    }
                    .project-media img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        transition: opacity 0.5s ease;
                    }
                    .project-card:hover .project-media img {
                        opacity: 0;
                    }
                    .project-preview {
                        position: absolute;
                        inset: 0;
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        opacity: 0;
                        transition: opacity 0.5s ease;
                    }
                    .project-card:hover .project-preview {
                        opacity: 1;
                    }
                    .project-wash {
                        position: absolute;
                        inset: 0;
                        opacity: 0.6;
                    }
                    .project-shade {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to top, rgba(0, 0, 0, 0.8), transparent);
                    }
                    .project-caption {
                        position: absolute;
                        left: 1.5rem;
                        right: 1.5rem;
                        bottom: 1.5rem;
                    }
                    .project-category {
                        display: inline-block;
                        font-size: 0.85rem;
                        color: #d1d5db;
                        background: rgba(0, 0, 0, 0.5);
                        padding: 0.25rem 0.75rem;
                        border-radius: 9999px;
                        margin-bottom: 0.5rem;
                    }
                    .project-caption h3 {
                        font-size: 1.5rem;
                        font-weight: 700;
                        color: #fff;
                        margin: 0 0 0.25rem;
                    }
                    .project-caption p {
                        color: #e5e7eb;
                        margin: 0;
                    }
                    .modal-overlay {
                        position: fixed;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.8);
                        backdrop-filter: blur(4px);
                        z-index: 50;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 1rem;
                        animation: fade-up 0.3s ease-out both;
                    }
                    .modal-content {
                        position: relative;
                        background: #111827;
                        border-radius: 1rem;
                        overflow: hidden;
                        width: 100%;
                        max-width: 56rem;
                    }
                    .modal-close {
                        position: absolute;
                        top: 1rem;
                        right: 1rem;
                        z-index: 10;
                        width: 2.5rem;
                        height: 2.5rem;
                        border: none;
                        border-radius: 50%;
                        background: rgba(0, 0, 0, 0.5);
                        color: #fff;
                        font-size: 1.25rem;
                        cursor: pointer;
                        transition: background 0.3s ease;
                    }
                    .modal-close:hover {
                        background: rgba(0, 0, 0, 0.7);
                    }
                    .modal-player {
                        aspect-ratio: 16 / 9;
                    }
                    .modal-player video {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                    .modal-caption {
                        padding: 1.5rem;
                    }
                    .modal-caption .project-category {
                        background: #1f2937;
                        color: #9ca3af;
                    }
                    .modal-caption h3 {
                        font-size: 1.5rem;
                        font-weight: 700;
                        color: #fff;
                        margin: 0 0 0.5rem;
                    }
                    .modal-caption p {
                        color: #d1d5db;
                        margin: 0;
                    }
                    @media (max-width: 1024px) {
                        .project-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
            <div class="section-inner">
                <div class="portfolio-header">
                    <h2 class="section-title">
                        <span>{"前沿"}</span>
                        <span class="accent-text">{"項目展示"}</span>
                    </h2>
                    <p class="portfolio-lead">
                        {"探索 Azure Lab 的最新成果，這些項目展示了我們在虛擬世界技術與沉浸式體驗方面的突破性進展。每個項目都是我們對未來遊戲願景的具體實現。"}
                    </p>
                </div>
                <div class="project-grid">
                    {
                        PROJECTS.iter().enumerate().map(|(index, project)| {
                            let onclick = {
                                let selected = selected.clone();
                                Callback::from(move |_| selected.set(Some(index)))
                            };
                            html! {
                                <div key={project.title} class="project-card" {onclick}>
                                    <div class="project-media">
                                        <img src={project.image} alt={project.title} />
                                        <video
                                            class="project-preview"
                                            src={project.video}
                                            autoplay=true
                                            loop=true
                                            muted=true
                                            playsinline=true
                                        >
                                            {"您的瀏覽器不支持視頻播放。"}
                                        </video>
                                        <div class="project-wash" style={format!("background: {};", project.wash)}></div>
                                        <div class="project-shade"></div>
                                    </div>
                                    <div class="project-caption">
                                        <div>
                                            <span class="project-category">{project.category}</span>
                                        </div>
                                        <h3>{project.title}</h3>
                                        <p>{project.subtitle}</p>
                                    </div>
                                </div>
                            }
                        }).collect::<Html>()
                    }
                </div>
                {
                    if let Some(index) = *selected {
                        let project = &PROJECTS[index];
                        html! {
                            <div class="modal-overlay" onclick={close_modal.clone()}>
                                <div class="modal-content" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                                    <button class="modal-close" onclick={close_modal.clone()}>{"✕"}</button>
                                    <div class="modal-player">
                                        <video src={project.video} controls=true autoplay=true>
                                            {"您的瀏覽器不支持視頻播放。"}
                                        </video>
                                    </div>
                                    <div class="modal-caption">
                                        <div>
                                            <span class="project-category">{project.category}</span>
                                        </div>
                                        <h3>{project.title}</h3>
                                        <p>{project.subtitle}</p>
                                    </div>
                                </div>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        </section>
    }
}
