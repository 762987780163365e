use std::rc::Rc;

use web_sys::{Event, MouseEvent};
use yew::prelude::*;

use crate::carousel::{shows_navigation, CarouselAction, CarouselState, ProjectId};
use crate::config::SiteConfig;
use crate::content::{IconKind, ProjectEntry, SiteContent};
use crate::placeholder::ImageFallbacks;
use crate::theme::Theme;

use super::sections::SectionHeading;

#[derive(Properties, PartialEq)]
pub struct ProjectsSectionProps {
    pub content: Rc<SiteContent>,
    pub config: Rc<SiteConfig>,
    pub theme: Theme,
    pub carousel: CarouselState,
    pub fallbacks: ImageFallbacks,
    pub on_carousel: Callback<CarouselAction>,
    pub on_image_error: Callback<(ProjectId, usize)>,
}

#[function_component(ProjectsSection)]
pub fn projects_section(props: &ProjectsSectionProps) -> Html {
    html! {
        <section id="projects" class="py-24 px-6 relative">
            <div class="max-w-6xl mx-auto">
                <div class="text-center mb-16">
                    <SectionHeading icon={IconKind::Code} title="Featured Projects" theme={props.theme} />
                </div>

                <div class="grid md:grid-cols-2 gap-8">
                    { for props.content.projects().map(|(id, project)| {
                        let sources: Vec<AttrValue> = (0..project.images.len())
                            .map(|index| {
                                AttrValue::from(props.fallbacks.image_src(
                                    &props.config.placeholder_base_url,
                                    props.theme,
                                    id,
                                    project,
                                    index,
                                ))
                            })
                            .collect();

                        html! {
                            <ProjectCard
                                key={id.0}
                                id={id}
                                project={project.clone()}
                                theme={props.theme}
                                active_index={props.carousel.active_index(id)}
                                sources={sources}
                                on_carousel={props.on_carousel.clone()}
                                on_image_error={props.on_image_error.clone()}
                            />
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    id: ProjectId,
    project: ProjectEntry,
    theme: Theme,
    active_index: usize,
    sources: Vec<AttrValue>,
    on_carousel: Callback<CarouselAction>,
    on_image_error: Callback<(ProjectId, usize)>,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let palette = props.theme.palette();
    let project = &props.project;

    html! {
        <div class={format!(
            "group backdrop-blur-sm border rounded-2xl overflow-hidden transition-all duration-500 hover:shadow-xl {} {}",
            palette.card_shadow,
            palette.card,
        )}>
            <Carousel
                id={props.id}
                project={project.clone()}
                theme={props.theme}
                active_index={props.active_index}
                sources={props.sources.clone()}
                on_carousel={props.on_carousel.clone()}
                on_image_error={props.on_image_error.clone()}
            />

            <div class="p-6">
                <div class="flex items-start justify-between mb-4">
                    <div class="flex items-center gap-3">
                        <div class={format!(
                            "p-2.5 bg-gradient-to-br from-emerald-500/20 to-cyan-500/20 rounded-xl text-emerald-500 border {}",
                            palette.accent_border,
                        )}>
                            <span aria-hidden="true">{project.icon.glyph()}</span>
                        </div>
                        <div>
                            <h3 class={format!("text-xl font-semibold mb-1 {}", palette.text_heading)}>{project.title.clone()}</h3>
                            <span class={format!("text-xs font-mono uppercase tracking-wider {}", palette.text_faint)}>
                                {project.category.clone()}
                            </span>
                        </div>
                    </div>
                </div>

                <p class={format!("{} text-sm mb-4 leading-relaxed", palette.text_muted)}>
                    {project.description.clone()}
                </p>

                <div class="flex flex-wrap gap-2 mb-4">
                    { for project.highlights.iter().map(|highlight| html! {
                        <span class={format!("px-2 py-1 rounded text-xs font-medium border {}", palette.highlight_chip)}>
                            {highlight.clone()}
                        </span>
                    }) }
                </div>

                <div class="flex flex-wrap gap-2">
                    { for project.tech.iter().map(|tech| html! {
                        <span class={format!(
                            "px-3 py-1.5 bg-gradient-to-r from-emerald-500/10 to-cyan-500/10 text-emerald-600 rounded-lg text-xs font-mono border {}",
                            palette.tech_chip,
                        )}>
                            {tech.clone()}
                        </span>
                    }) }
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct CarouselProps {
    id: ProjectId,
    project: ProjectEntry,
    theme: Theme,
    active_index: usize,
    sources: Vec<AttrValue>,
    on_carousel: Callback<CarouselAction>,
    on_image_error: Callback<(ProjectId, usize)>,
}

#[function_component(Carousel)]
fn carousel(props: &CarouselProps) -> Html {
    let palette = props.theme.palette();
    let id = props.id;
    let total = props.sources.len();

    let on_prev = {
        let on_carousel = props.on_carousel.clone();
        Callback::from(move |_: MouseEvent| {
            on_carousel.emit(CarouselAction::Prev { project: id, total })
        })
    };

    let on_next = {
        let on_carousel = props.on_carousel.clone();
        Callback::from(move |_: MouseEvent| {
            on_carousel.emit(CarouselAction::Next { project: id, total })
        })
    };

    let control_class = format!(
        "absolute top-1/2 -translate-y-1/2 p-2 backdrop-blur-sm rounded-full border transition-all opacity-0 group-hover:opacity-100 {}",
        palette.control,
    );

    html! {
        <div class={format!("relative overflow-hidden h-72 {}", palette.carousel_backdrop)}>
            <div class="relative h-full">
                { for props.sources.iter().enumerate().map(|(index, src)| {
                    let onerror = {
                        let on_image_error = props.on_image_error.clone();
                        Callback::from(move |_: Event| on_image_error.emit((id, index)))
                    };
                    let visibility = if index == props.active_index { "opacity-100" } else { "opacity-0" };

                    html! {
                        <div key={index} class={format!("absolute inset-0 transition-opacity duration-500 {visibility}")}>
                            <img
                                src={src.clone()}
                                alt={props.project.image_alt(index)}
                                class="w-full h-full object-cover group-hover:scale-105 transition-transform duration-700"
                                onerror={onerror}
                            />
                        </div>
                    }
                }) }

                <div class={format!(
                    "absolute inset-0 bg-gradient-to-t {} via-transparent to-transparent opacity-60",
                    palette.carousel_overlay,
                )}></div>

                if shows_navigation(total) {
                    <>
                    <button
                        type="button"
                        class={format!("left-4 {control_class}")}
                        aria-label="Previous image"
                        onclick={on_prev}
                    >
                        <span class={format!("text-lg {}", palette.control_icon)} aria-hidden="true">{"‹"}</span>
                    </button>
                    <button
                        type="button"
                        class={format!("right-4 {control_class}")}
                        aria-label="Next image"
                        onclick={on_next}
                    >
                        <span class={format!("text-lg {}", palette.control_icon)} aria-hidden="true">{"›"}</span>
                    </button>

                    <div class="absolute bottom-4 left-1/2 -translate-x-1/2 flex gap-2">
                        { for (0..total).map(|index| {
                            let on_carousel = props.on_carousel.clone();
                            let onclick = Callback::from(move |_: MouseEvent| {
                                on_carousel.emit(CarouselAction::JumpTo { project: id, index })
                            });
                            let dot = if index == props.active_index { "w-8 bg-emerald-500" } else { palette.dot_inactive };

                            html! {
                                <button
                                    key={index}
                                    type="button"
                                    class={format!("h-1.5 rounded-full transition-all {dot}")}
                                    aria-label={format!("Go to image {}", index + 1)}
                                    aria-current={(index == props.active_index).then_some("true")}
                                    onclick={onclick}
                                />
                            }
                        }) }
                    </div>
                    </>
                }

                <a
                    href={props.project.repository.clone()}
                    target="_blank"
                    rel="noopener noreferrer"
                    class={format!("absolute top-4 right-4 p-2.5 backdrop-blur-sm rounded-lg border transition-all {}", palette.control)}
                    aria-label={format!("{} repository (opens in a new tab)", props.project.title)}
                >
                    <span class={format!("text-sm {} hover:text-emerald-500 transition-colors", palette.control_icon)} aria-hidden="true">{"↗"}</span>
                </a>
            </div>
        </div>
    }
}
