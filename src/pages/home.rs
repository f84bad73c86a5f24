use yew::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::counter::Counter;
use crate::components::navbar::Navbar;
use crate::components::portfolio::{PortfolioGrid, Project};
use crate::components::scroll_progress::ScrollProgress;
use crate::components::section_reveal::SectionReveal;
use crate::components::typing::TypingText;

fn hero_phrases() -> Vec<String> {
    [
        "Digital Health Systems Builder",
        "AI in Healthcare Specialist",
        "Health Informatics Professional",
        "Data Engineering Expert",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn services() -> Vec<(&'static str, &'static str)> {
    vec![
        (
            "Digital Health & Health Informatics Systems",
            "Design and evaluation of health information systems, from requirements through deployment and governance.",
        ),
        (
            "Health Data Engineering & Analytics",
            "Pipelines and analytics over clinical and public-health data, built for reliability and auditability.",
        ),
        (
            "Applied AI & Machine Learning in Healthcare",
            "Machine learning applied to real clinical problems, with usability and deployment as first-class concerns.",
        ),
        (
            "Research & Knowledge Translation",
            "Turning research findings into guidance practitioners and policy makers can act on.",
        ),
        (
            "Leadership & Program Coordination",
            "Coordinating multi-disciplinary health technology programs from pilot to scale.",
        ),
    ]
}

fn projects() -> Vec<Project> {
    let entries = [
        (
            "Counterfeit Drug Detection System",
            "ai",
            "AI & ML",
            "AI-enabled detection of counterfeit drugs using chemical structure analysis, built for real-world deployment.",
        ),
        (
            "AI for Public Health Outbreak Preparedness",
            "ai",
            "AI & ML",
            "Early-warning models supporting outbreak preparedness and response planning.",
        ),
        (
            "Clinical Decision Support System",
            "health",
            "Health Systems",
            "Decision support embedded in clinical workflows, evaluated with practicing clinicians.",
        ),
        (
            "Healthcare Provider Portal",
            "health",
            "Health Systems",
            "Provider-facing portal consolidating patient records and referrals across facilities.",
        ),
        (
            "Health Data Analytics Dashboard",
            "data",
            "Data & Analytics",
            "Interactive dashboard surfacing population health indicators for program managers.",
        ),
        (
            "Research Data Platform",
            "data",
            "Data & Analytics",
            "Platform for collecting, curating and sharing research datasets across study sites.",
        ),
    ];
    entries
        .into_iter()
        .map(|(title, slug, label, description)| Project {
            title: title.to_string(),
            category_slug: slug.to_string(),
            category_label: label.to_string(),
            description: description.to_string(),
        })
        .collect()
}

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <>
            <style>
            {r#".hero {
                min-height: 100vh;
                display: flex;
                flex-direction: column;
                align-items: center;
                justify-content: center;
                text-align: center;
                padding: 2rem;
            }
            .hero .greeting {
                color: rgba(255, 255, 255, 0.7);
                font-size: 1.1rem;
            }
            .hero h1 {
                font-size: 3rem;
                margin: 0.5rem 0;
            }
            .hero h2 {
                font-size: 1.5rem;
                font-weight: 500;
                color: #7EB2FF;
                min-height: 2rem;
            }
            .stats-row {
                display: grid;
                grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
                gap: 1.5rem;
                margin-top: 3rem;
                text-align: center;
            }
            .stats-row .counter-value {
                font-size: 2.5rem;
                font-weight: 700;
                color: #1E90FF;
            }
            .stats-row .stat-label {
                display: block;
                color: rgba(255, 255, 255, 0.6);
                font-size: 0.9rem;
            }
            .section-title {
                font-size: 2.2rem;
                margin-bottom: 2rem;
            }
            .services-grid {
                display: grid;
                grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
                gap: 1.5rem;
            }
            .section-card {
                background: rgba(30, 30, 30, 0.7);
                border: 1px solid rgba(30, 144, 255, 0.1);
                border-radius: 12px;
                padding: 1.75rem;
                animation-name: fadeInUp;
                animation-duration: 0.6s;
                animation-fill-mode: both;
            }
            .section-card h3 {
                margin-top: 0;
                font-size: 1.15rem;
            }
            .section-card p {
                color: rgba(255, 255, 255, 0.7);
                font-size: 0.95rem;
            }
            .contact-intro {
                color: rgba(255, 255, 255, 0.7);
                margin-bottom: 2rem;
                max-width: 600px;
            }"#}
            </style>
            <ScrollProgress />
            <Navbar />
            <section id="home" class="hero">
                <span class="greeting">{"Hello, My name is"}</span>
                <h1>{"Victorine Maikem"}</h1>
                <h2><TypingText phrases={hero_phrases()} /></h2>
                <a class="bx-btn pulse-animation" href="#contact">{"Get In Touch"}</a>
            </section>
            <SectionReveal id="about">
                <h2 class="section-title">
                    {"Building digital health systems that "}
                    <span class="primary-clr">{"solve real problems."}</span>
                </h2>
                <div class="stats-row">
                    <div>
                        <Counter target={25} suffix="+" />
                        <span class="stat-label">{"Projects Delivered"}</span>
                    </div>
                    <div>
                        <Counter target={6} />
                        <span class="stat-label">{"Certifications"}</span>
                    </div>
                    <div>
                        <Counter target={5} suffix="+" />
                        <span class="stat-label">{"Years of Experience"}</span>
                    </div>
                    <div>
                        <Counter target={4} />
                        <span class="stat-label">{"Research Collaborations"}</span>
                    </div>
                </div>
            </SectionReveal>
            <SectionReveal id="services">
                <h2 class="section-title">{"Services"}</h2>
                <div class="services-grid">
                    { for services().into_iter().enumerate().map(|(index, (title, description))| html! {
                        <div
                            class="section-card"
                            style={format!("animation-delay: {:.1}s;", index as f64 * 0.1)}
                        >
                            <h3>{ title }</h3>
                            <p>{ description }</p>
                        </div>
                    }) }
                </div>
            </SectionReveal>
            <SectionReveal id="portfolio">
                <h2 class="section-title">{"Portfolio"}</h2>
                <PortfolioGrid projects={projects()} />
            </SectionReveal>
            <SectionReveal id="contact">
                <h2 class="section-title">{"Get In Touch"}</h2>
                <p class="contact-intro">
                    {"Have a project in mind or a question about digital health systems? Send a message and I will get back to you."}
                </p>
                <ContactForm />
            </SectionReveal>
            <footer style="text-align: center; padding: 2rem; color: rgba(255, 255, 255, 0.4);">
                {"© 2026 Victorine Maikem"}
            </footer>
        </>
    }
}
