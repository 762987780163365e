use yew::prelude::*;

use crate::content::{ContactLinks, Education, IconKind, SkillGroup};
use crate::theme::Theme;

#[derive(Properties, PartialEq)]
pub(super) struct SectionHeadingProps {
    pub icon: IconKind,
    pub title: AttrValue,
    pub theme: Theme,
    #[prop_or_default]
    pub compact: bool,
}

#[function_component(SectionHeading)]
pub(super) fn section_heading(props: &SectionHeadingProps) -> Html {
    let size = if props.compact { "text-3xl" } else { "text-4xl" };

    html! {
        <div class="inline-flex items-center gap-3 mb-4">
            <span class="text-emerald-500" aria-hidden="true">{props.icon.glyph()}</span>
            <h2 class={format!("{size} font-bold {}", props.theme.palette().text_heading)}>{props.title.clone()}</h2>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SkillsSectionProps {
    pub skills: Vec<SkillGroup>,
    pub theme: Theme,
}

#[function_component(SkillsSection)]
pub fn skills_section(props: &SkillsSectionProps) -> Html {
    let palette = props.theme.palette();

    html! {
        <section id="skills" class={format!("py-24 px-6 {}", palette.band)}>
            <div class="max-w-6xl mx-auto">
                <div class="text-center mb-16">
                    <SectionHeading icon={IconKind::Code} title="Technical Skills" theme={props.theme} />
                </div>

                <div class="grid md:grid-cols-3 gap-6">
                    { for props.skills.iter().map(|group| html! {
                        <div class={format!("backdrop-blur-sm border rounded-2xl p-8 transition-all duration-500 {}", palette.card)}>
                            <div class="flex items-center gap-3 mb-6">
                                <span class="text-emerald-500" aria-hidden="true">{group.icon.glyph()}</span>
                                <h3 class="text-lg font-semibold text-emerald-500">{group.title.clone()}</h3>
                            </div>
                            <div class="flex flex-wrap gap-2">
                                { for group.skills.iter().map(|skill| html! {
                                    <span class={format!("px-3 py-1.5 rounded-lg text-sm border {}", palette.skill_chip)}>
                                        {skill.clone()}
                                    </span>
                                }) }
                            </div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct EducationSectionProps {
    pub education: Education,
    pub theme: Theme,
}

#[function_component(EducationSection)]
pub fn education_section(props: &EducationSectionProps) -> Html {
    let palette = props.theme.palette();
    let education = &props.education;

    html! {
        <section id="education" class="py-24 px-6">
            <div class="max-w-3xl mx-auto">
                <div class="text-center mb-16">
                    <SectionHeading icon={IconKind::Award} title="Education" theme={props.theme} />
                </div>

                <div class={format!("backdrop-blur-sm border rounded-2xl p-8 transition-all duration-500 {}", palette.card)}>
                    <div class="flex items-start gap-6">
                        <div class={format!(
                            "p-4 bg-gradient-to-br from-emerald-500/20 to-cyan-500/20 rounded-xl border text-emerald-500 {}",
                            palette.accent_border,
                        )}>
                            <span aria-hidden="true">{IconKind::Award.glyph()}</span>
                        </div>
                        <div class="flex-1">
                            <h3 class={format!("text-2xl font-semibold mb-2 {}", palette.text_heading)}>{education.degree.clone()}</h3>
                            <p class={format!("text-lg mb-2 {}", palette.text_body)}>{education.institution.clone()}</p>
                            <p class={format!("text-sm font-mono mb-4 {}", palette.text_faint)}>{education.dates.clone()}</p>

                            <div class={format!(
                                "inline-flex items-center gap-3 px-4 py-2 bg-gradient-to-r from-emerald-500/10 to-cyan-500/10 border rounded-xl {}",
                                palette.accent_border,
                            )}>
                                <div class="w-2 h-2 bg-emerald-500 rounded-full animate-pulse"></div>
                                <span class={format!("text-sm font-medium {}", palette.grade_text)}>{education.grade.clone()}</span>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactFooterProps {
    pub contact: ContactLinks,
    pub copyright: String,
    pub theme: Theme,
}

#[function_component(ContactFooter)]
pub fn contact_footer(props: &ContactFooterProps) -> Html {
    let palette = props.theme.palette();
    let contact = &props.contact;

    html! {
        <footer id="contact" class={format!("py-16 px-6 border-t {} {}", palette.divider, palette.band)}>
            <div class="max-w-6xl mx-auto">
                <div class="text-center mb-12">
                    <SectionHeading icon={IconKind::Mail} title={contact.heading.clone()} theme={props.theme} compact={true} />
                    <p class={format!("{} text-lg", palette.text_muted)}>{contact.tagline.clone()}</p>
                </div>

                <div class="flex flex-col md:flex-row justify-center items-center gap-8 mb-12">
                    <a
                        href={contact.mailto()}
                        class={format!(
                            "flex items-center gap-3 px-6 py-3 bg-gradient-to-r from-emerald-500/10 to-cyan-500/10 border rounded-xl transition-all group {}",
                            palette.email_link,
                        )}
                    >
                        <span class="text-emerald-500" aria-hidden="true">{IconKind::Mail.glyph()}</span>
                        <span class={format!("{} transition-colors", palette.email_text)}>{contact.email.clone()}</span>
                    </a>

                    <div class="flex gap-4">
                        { for contact.socials.iter().map(|social| html! {
                            <a
                                href={social.url.clone()}
                                target="_blank"
                                rel="noopener noreferrer"
                                class={format!("p-3 border rounded-xl transition-all group {}", palette.social_link)}
                                aria-label={social.label.clone()}
                            >
                                <span class="font-semibold" aria-hidden="true">{social.icon.glyph()}</span>
                            </a>
                        }) }
                    </div>
                </div>

                <div class={format!("pt-8 border-t text-center {}", palette.divider)}>
                    <p class={format!("text-sm font-mono {}", palette.text_faint)}>{props.copyright.clone()}</p>
                </div>
            </div>
        </footer>
    }
}
