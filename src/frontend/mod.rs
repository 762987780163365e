mod projects;
mod sections;

use js_sys::{Function, Reflect};
use serde_json::json;
use std::rc::Rc;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, MouseEvent};
use yew::prelude::*;

use crate::carousel::{CarouselAction, CarouselState, ProjectId};
use crate::config::SiteConfig;
use crate::content::{Profile, SiteContent};
use crate::logging::{log_event, LogLevel};
use crate::placeholder::ImageFallbacks;
use crate::scroll::{ScrollSubscription, ScrollTracker};
use crate::theme::Theme;

use projects::ProjectsSection;
use sections::{ContactFooter, EducationSection, SkillsSection};

const NAV_LINKS: [(&str, &str); 4] = [
    ("#projects", "Projects"),
    ("#skills", "Skills"),
    ("#education", "Education"),
    ("#contact", "Contact"),
];

impl Reducible for CarouselState {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: CarouselAction) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

impl Reducible for ImageFallbacks {
    type Action = (ProjectId, usize);

    fn reduce(self: Rc<Self>, (project, index): (ProjectId, usize)) -> Rc<Self> {
        let mut next = (*self).clone();
        if next.mark_failed(project, index) {
            Rc::new(next)
        } else {
            self
        }
    }
}

fn apply_theme(theme: Theme) {
    if let Some(document) = window().and_then(|w| w.document()) {
        if let Some(root) = document.document_element() {
            let _ = root.set_attribute("data-theme", theme.as_str());
        }
    }
}

fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

fn commit_theme(theme: Theme, on_applied: impl FnOnce()) {
    apply_theme(theme);
    on_applied();
}

/// Mirrors `theme` to the root and runs `on_applied`, inside a view transition
/// when the browser has one, so the state update restyles within the snapshot.
fn apply_theme_with_transition(
    theme: Theme,
    view_transitions: bool,
    on_applied: impl FnOnce() + Clone + 'static,
) {
    if !view_transitions || prefers_reduced_motion() {
        commit_theme(theme, on_applied);
        return;
    }

    let Some(document) = window().and_then(|w| w.document()) else {
        commit_theme(theme, on_applied);
        return;
    };

    let document_js: JsValue = document.into();
    let Ok(start_view_transition) =
        Reflect::get(&document_js, &JsValue::from_str("startViewTransition"))
    else {
        commit_theme(theme, on_applied);
        return;
    };

    let Some(start_view_transition) = start_view_transition.dyn_ref::<Function>() else {
        commit_theme(theme, on_applied);
        return;
    };

    // The browser invokes the update callback later, so it must outlive this call.
    let callback = {
        let on_applied = on_applied.clone();
        Closure::once_into_js(move || commit_theme(theme, on_applied))
    };

    if start_view_transition.call1(&document_js, &callback).is_err() {
        commit_theme(theme, on_applied);
    }
}

fn current_scroll_offset() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub content: Rc<SiteContent>,
    pub config: Rc<SiteConfig>,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let config = props.config.clone();
    let theme = use_state(|| config.initial_theme);
    let scrolled = use_state(|| false);
    let carousel = use_reducer(CarouselState::new);
    let fallbacks = use_reducer_eq(ImageFallbacks::default);

    {
        let current = *theme;
        use_effect_with((), move |_| {
            apply_theme(current);
            || ()
        });
    }

    {
        let scrolled = scrolled.clone();
        let config = config.clone();
        use_effect_with((), move |_| {
            let mut tracker = ScrollTracker::new(config.scroll_threshold_px);
            if let Some(flag) = tracker.observe(current_scroll_offset()) {
                scrolled.set(flag);
            }

            let subscription = {
                let config = config.clone();
                ScrollSubscription::attach(move |offset| {
                    if let Some(flag) = tracker.observe(offset) {
                        log_event(
                            &config,
                            LogLevel::Debug,
                            "scroll_threshold_crossed",
                            json!({ "scrolled": flag, "offset": offset }),
                        );
                        scrolled.set(flag);
                    }
                })
            };
            if subscription.is_none() {
                log_event(
                    &config,
                    LogLevel::Warn,
                    "scroll_subscribe_failed",
                    json!({ "threshold": config.scroll_threshold_px }),
                );
            }

            move || drop(subscription)
        });
    }

    let on_toggle = {
        let theme = theme.clone();
        let config = config.clone();
        Callback::from(move |_: MouseEvent| {
            let next = (*theme).toggled();
            log_event(
                &config,
                LogLevel::Info,
                "theme_toggled",
                json!({ "theme": next.as_str() }),
            );
            let theme = theme.clone();
            apply_theme_with_transition(next, config.view_transitions, move || theme.set(next));
        })
    };

    let on_carousel = {
        let carousel = carousel.clone();
        let config = config.clone();
        Callback::from(move |action: CarouselAction| {
            log_event(
                &config,
                LogLevel::Debug,
                "carousel_action",
                action.log_fields(),
            );
            carousel.dispatch(action);
        })
    };

    let on_image_error = {
        let fallbacks = fallbacks.clone();
        let config = config.clone();
        Callback::from(move |(project, index): (ProjectId, usize)| {
            if fallbacks.is_failed(project, index) {
                return;
            }
            log_event(
                &config,
                LogLevel::Warn,
                "image_fallback",
                json!({ "project": project.0, "image": index }),
            );
            fallbacks.dispatch((project, index));
        })
    };

    let current_theme = *theme;
    let palette = current_theme.palette();

    html! {
        <div class={format!("min-h-screen transition-colors duration-500 {}", palette.page)}>
            <NavBar theme={current_theme} scrolled={*scrolled} on_toggle={on_toggle} />
            <Hero profile={props.content.profile.clone()} theme={current_theme} />
            <ProjectsSection
                content={props.content.clone()}
                config={config.clone()}
                theme={current_theme}
                carousel={(*carousel).clone()}
                fallbacks={(*fallbacks).clone()}
                on_carousel={on_carousel}
                on_image_error={on_image_error}
            />
            <SkillsSection skills={props.content.skills.clone()} theme={current_theme} />
            <EducationSection education={props.content.education.clone()} theme={current_theme} />
            <ContactFooter
                contact={props.content.contact.clone()}
                copyright={props.content.profile.copyright.clone()}
                theme={current_theme}
            />
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct NavBarProps {
    theme: Theme,
    scrolled: bool,
    on_toggle: Callback<MouseEvent>,
}

#[function_component(NavBar)]
fn nav_bar(props: &NavBarProps) -> Html {
    let palette = props.theme.palette();

    html! {
        <nav class={format!(
            "fixed top-0 w-full z-50 transition-all duration-300 {} border-b {}",
            props.theme.nav_class(props.scrolled),
            palette.nav_border,
        )}>
            <div class="max-w-6xl mx-auto px-6 py-4">
                <div class="flex justify-between items-center">
                    <button
                        class={format!("flex items-center gap-2 px-3 py-1.5 rounded-lg transition-all duration-300 {}", palette.toggle)}
                        type="button"
                        aria-label={props.theme.toggle_label()}
                        aria-pressed={props.theme.pressed().to_string()}
                        onclick={props.on_toggle.clone()}
                    >
                        <span aria-hidden="true">{props.theme.icon()}</span>
                    </button>
                    <div class="flex gap-8">
                        { for NAV_LINKS.iter().map(|(href, label)| html! {
                            <a
                                href={*href}
                                class={format!("text-sm {} hover:text-emerald-400 transition-colors font-medium", palette.text_muted)}
                            >
                                {*label}
                            </a>
                        }) }
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[derive(Properties, PartialEq)]
struct HeroProps {
    profile: Profile,
    theme: Theme,
}

#[function_component(Hero)]
fn hero(props: &HeroProps) -> Html {
    let palette = props.theme.palette();
    let profile = &props.profile;

    html! {
        <section class="pt-32 pb-24 px-6 relative overflow-hidden">
            <div class={format!("absolute inset-0 bg-gradient-to-b {} to-transparent", palette.hero_glow)}></div>
            <div class="max-w-6xl mx-auto relative">
                <div class="flex flex-col md:flex-row items-center gap-12">
                    <div class="flex-shrink-0 relative group">
                        <div class={format!(
                            "absolute inset-0 bg-gradient-to-br from-emerald-500 to-cyan-500 rounded-full blur-xl {} group-hover:opacity-50 transition-opacity",
                            palette.photo_halo,
                        )}></div>
                        <div class={format!("relative w-56 h-56 rounded-full overflow-hidden border-4 shadow-2xl {}", palette.photo_frame)}>
                            <img src={profile.photo.clone()} alt={profile.name.clone()} class="w-full h-full object-cover" />
                        </div>
                    </div>

                    <div class="flex-1 text-center md:text-left">
                        <h1 class={format!("text-5xl md:text-7xl font-bold mb-6 {}", palette.text_heading)}>
                            {profile.name.clone()}
                        </h1>
                        <p class={format!("text-xl md:text-2xl mb-6 leading-relaxed font-light {}", palette.text_body)}>
                            {profile.headline.clone()}
                        </p>
                        <p class={format!("{} text-lg mb-8 leading-relaxed", palette.text_muted)}>
                            {profile.summary_lead.clone()}
                            { for profile.focus.iter().enumerate().map(|(index, item)| html! {
                                <>
                                    {profile.focus_separator(index)}
                                    <span class="text-emerald-500 font-semibold">{item.clone()}</span>
                                </>
                            }) }
                            {". "}
                            {profile.summary_tail.clone()}
                        </p>
                    </div>
                </div>
            </div>
        </section>
    }
}

pub fn run() {
    console_error_panic_hook::set_once();

    let config = SiteConfig::from_build_env();
    let content = match SiteContent::bundled() {
        Ok(content) => content,
        Err(error) => {
            log_event(
                &config,
                LogLevel::Warn,
                "content_invalid",
                json!({ "error": error.class(), "detail": error.to_string() }),
            );
            return;
        }
    };

    log_event(
        &config,
        LogLevel::Info,
        "app_started",
        json!({
            "projects": content.projects.len(),
            "skill_groups": content.skills.len(),
            "theme": config.initial_theme.as_str(),
        }),
    );

    yew::Renderer::<App>::with_root_and_props(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
        AppProps {
            content: Rc::new(content),
            config: Rc::new(config),
        },
    )
    .render();
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use wasm_bindgen_test::*;
    use web_sys::window;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn root_theme() -> Option<String> {
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
            .and_then(|root| root.get_attribute("data-theme"))
    }

    #[wasm_bindgen_test]
    fn theme_update_runs_with_root_attribute_when_transitions_are_off() {
        let applied = Rc::new(Cell::new(None));
        {
            let applied = applied.clone();
            apply_theme_with_transition(Theme::Light, false, move || {
                applied.set(root_theme());
            });
        }
        assert_eq!(applied.take().as_deref(), Some("light"));

        let applied_dark = Rc::new(Cell::new(false));
        {
            let applied_dark = applied_dark.clone();
            apply_theme_with_transition(Theme::Dark, false, move || applied_dark.set(true));
        }
        assert!(applied_dark.get());
        assert_eq!(root_theme().as_deref(), Some("dark"));
    }
}
