//! Portfolio grid with category filter tabs and staggered item animations.

use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub struct Project {
    pub title: String,
    pub category_slug: String,
    pub category_label: String,
    pub description: String,
}

#[derive(Properties, PartialEq)]
pub struct PortfolioGridProps {
    pub projects: Vec<Project>,
}

#[function_component(PortfolioGrid)]
pub fn portfolio_grid(props: &PortfolioGridProps) -> Html {
    let active = use_state(|| "all".to_string());

    // Tabs follow the order categories first appear in the project list.
    let mut categories: Vec<(String, String)> = Vec::new();
    for project in &props.projects {
        if !categories.iter().any(|(slug, _)| slug == &project.category_slug) {
            categories.push((project.category_slug.clone(), project.category_label.clone()));
        }
    }

    let tab = |slug: String, label: String| {
        let is_active = *active == slug;
        let onclick = {
            let active = active.clone();
            Callback::from(move |_: MouseEvent| active.set(slug.clone()))
        };
        html! {
            <button
                class={classes!("filter", is_active.then_some("active-filter"))}
                {onclick}
            >
                { label }
            </button>
        }
    };

    let shown: Vec<&Project> = props
        .projects
        .iter()
        .filter(|project| *active == "all" || project.category_slug == *active)
        .collect();

    html! {
        <div class="portfolio-content">
            <style>
            {r#".portfolio-tabs {
                display: flex;
                flex-wrap: wrap;
                gap: 0.5rem;
                margin-bottom: 2rem;
            }
            .portfolio-tabs .filter {
                padding: 0.5rem 1.25rem;
                border: 1px solid rgba(30, 144, 255, 0.3);
                border-radius: 999px;
                background: transparent;
                color: rgba(255, 255, 255, 0.7);
                cursor: pointer;
                transition: all 0.3s ease;
            }
            .portfolio-tabs .filter.active-filter {
                background: #1E90FF;
                border-color: #1E90FF;
                color: #fff;
            }
            .portfolio-content-items {
                display: grid;
                grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
                gap: 1.5rem;
            }
            .portfolio-content-items .mix {
                background: rgba(30, 30, 30, 0.7);
                border: 1px solid rgba(30, 144, 255, 0.1);
                border-radius: 12px;
                padding: 1.5rem;
                animation-duration: 0.5s;
                animation-fill-mode: both;
            }
            .portfolio-content-items .mix h3 {
                margin-top: 0;
            }
            .portfolio-content-items .mix .category {
                font-size: 0.8rem;
                color: #7EB2FF;
                text-transform: uppercase;
                letter-spacing: 0.05em;
            }"#}
            </style>
            <div class="portfolio-tabs">
                { tab("all".to_string(), "All".to_string()) }
                { for categories.into_iter().map(|(slug, label)| tab(slug, label)) }
            </div>
            <div class="portfolio-content-items">
                { for shown.iter().enumerate().map(|(index, project)| html! {
                    <div
                        key={project.title.clone()}
                        class="mix"
                        style={format!(
                            "animation-delay: {:.2}s; animation-name: fadeInUp;",
                            index as f64 * 0.05
                        )}
                    >
                        <span class="category">{ &project.category_label }</span>
                        <h3>{ &project.title }</h3>
                        <p>{ &project.description }</p>
                    </div>
                }) }
            </div>
        </div>
    }
}
