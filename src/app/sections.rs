use leptos::prelude::*;

use crate::content::{
    footer_text, ContactLink, DiagramCard, Hero, Icon, SkillEntry, TimelineEntry,
};
use crate::motion::{Motion, Trigger};
use crate::theme::ViewState;

use super::icon::Glyph;
use super::reveal::Reveal;

#[component]
pub fn Header(owner: String, view_state: RwSignal<ViewState>) -> impl IntoView {
    view! {
        <header class="sticky top-0 z-50 backdrop-blur border-b border-slate-800">
            <div class="max-w-6xl mx-auto flex justify-between items-center px-6 py-4">
                <span class="font-medium tracking-tight">{owner}</span>
                <button
                    on:click=move |_| view_state.update(ViewState::toggle_theme)
                    class="text-sm text-slate-400 hover:text-slate-200 transition"
                >
                    {move || view_state.get().theme().label()}
                </button>
            </div>
        </header>
    }
}

#[component]
pub fn HeroSection(hero: &'static Hero) -> impl IntoView {
    view! {
        <section class="py-36 px-6">
            <div class="max-w-4xl mx-auto text-center">
                <Reveal motion=Motion::fade_up(Trigger::Mount)>
                    <h1 class="text-5xl md:text-6xl font-semibold tracking-tight mb-6">
                        {hero.title.clone()}
                    </h1>
                </Reveal>
                <p class="text-lg text-slate-400 max-w-2xl mx-auto leading-relaxed">
                    {hero.tagline.clone()}
                </p>
                <div class="flex justify-center gap-4 mt-10">
                    <a
                        href=hero.cv_href.clone()
                        class="inline-flex items-center gap-2 px-6 py-3 rounded-xl bg-blue-600 hover:bg-blue-500 transition"
                    >
                        <Glyph icon=Icon::Download class="text-base" />
                        " Download CV"
                    </a>
                    <a
                        href=hero.contact_href.clone()
                        class="px-6 py-3 rounded-xl border border-slate-700 hover:border-slate-500 transition"
                    >
                        "Contact"
                    </a>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn SkillsSection(skills: &'static [SkillEntry]) -> impl IntoView {
    view! {
        <section class="max-w-5xl mx-auto px-6 py-24">
            <h2 class="text-3xl font-semibold tracking-tight mb-12">"Skills"</h2>
            <div class="space-y-8">
                {skills.iter().map(|skill| view! { <SkillRow skill /> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn SkillRow(skill: &'static SkillEntry) -> impl IntoView {
    view! {
        <div class="space-y-2">
            <div class="flex justify-between text-sm text-slate-300">
                <span>{skill.name.clone()}</span>
                <span>{skill.level_label()}</span>
            </div>
            <div class="h-1.5 bg-slate-800 rounded-full overflow-hidden">
                <Reveal
                    motion=Motion::grow_width(skill.fill_percent())
                    class="h-full bg-blue-600 rounded-full"
                />
            </div>
        </div>
    }
}

#[component]
pub fn ExperienceSection(timeline: &'static [TimelineEntry]) -> impl IntoView {
    view! {
        <section class="border-t border-slate-800 py-24">
            <div class="max-w-5xl mx-auto px-6">
                <h2 class="text-3xl font-semibold tracking-tight mb-12">"Experience"</h2>
                <div class="space-y-12">
                    {timeline.iter().map(|entry| view! { <TimelineItem entry /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn TimelineItem(entry: &'static TimelineEntry) -> impl IntoView {
    view! {
        <div class="relative pl-6">
            <span class="absolute left-0 top-2 h-2 w-2 rounded-full bg-blue-600" />
            <span class="text-sm text-blue-500">{entry.year.clone()}</span>
            <h3 class="text-lg font-medium mt-1">{entry.title.clone()}</h3>
            <p class="text-slate-400 mt-2 leading-relaxed">{entry.description.clone()}</p>
        </div>
    }
}

#[component]
pub fn ArchitectureSection(diagrams: &'static [DiagramCard]) -> impl IntoView {
    view! {
        <section class="max-w-5xl mx-auto px-6 py-24">
            <h2 class="text-3xl font-semibold tracking-tight mb-12">"DevOps Architecture"</h2>
            <div class="grid md:grid-cols-3 gap-6">
                {diagrams.iter().map(|card| view! { <Diagram card /> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn Diagram(card: &'static DiagramCard) -> impl IntoView {
    view! {
        <div class="rounded-2xl border border-slate-800 bg-slate-900/60 p-6 text-center hover:border-slate-600 transition">
            <div class="flex justify-center text-blue-500 mb-4">
                <Glyph icon=card.icon class="text-2xl" />
            </div>
            <h3 class="font-medium mb-2">{card.title.clone()}</h3>
            <p class="text-sm text-slate-400 leading-relaxed">{card.description.clone()}</p>
        </div>
    }
}

#[component]
pub fn ContactSection(contacts: &'static [ContactLink]) -> impl IntoView {
    view! {
        <section id="contact" class="border-t border-slate-800 py-24 text-center">
            <h2 class="text-3xl font-semibold tracking-tight mb-6">"Contact"</h2>
            <div class="flex justify-center gap-8 text-slate-400">
                {contacts
                    .iter()
                    .map(|link| {
                        let external = link.is_external();
                        view! {
                            <a
                                href=link.href.clone()
                                target=external.then_some("_blank")
                                rel=external.then_some("noopener noreferrer")
                                aria-label=link.label.clone()
                                class="hover:text-slate-200 transition"
                            >
                                <Glyph icon=link.icon class="text-2xl" />
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn Footer(owner: String, year: Resource<i32>) -> impl IntoView {
    view! {
        <footer class="border-t border-slate-800 py-6 text-center text-sm text-slate-500">
            <Suspense>
                {move || {
                    let owner = owner.clone();
                    Suspend::new(async move { footer_text(&owner, year.await) })
                }}
            </Suspense>
        </footer>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::content::Portfolio;

    fn portfolio() -> &'static Portfolio {
        Portfolio::load().expect("embedded content should parse")
    }

    fn render<V: IntoView + 'static>(f: impl FnOnce() -> V) -> String {
        let owner = Owner::new();
        owner.with(|| f().to_html())
    }

    fn attr_values<'a>(html: &'a str, attr: &str) -> Vec<&'a str> {
        let needle = format!("{attr}=\"");
        html.split(needle.as_str())
            .skip(1)
            .filter_map(|rest| rest.split('"').next())
            .collect()
    }

    #[test]
    fn test_contact_links_rendered() {
        let contacts = &portfolio().contacts;
        let html = render(|| view! { <ContactSection contacts /> });

        assert_eq!(html.matches("<a ").count(), contacts.len());
        let expected = contacts.iter().map(|c| c.href.as_str()).collect::<Vec<_>>();
        assert_eq!(attr_values(&html, "href"), expected);
        assert_eq!(
            attr_values(&html, "href"),
            vec!["mailto:arbin@example.com", "https://github.com/Arbinsapkota", "#"]
        );
        // only the web profile opens a new tab
        assert_eq!(html.matches("target=\"_blank\"").count(), 1);
    }

    #[test]
    fn test_timeline_rendered_in_order() {
        let timeline = &portfolio().timeline;
        let html = render(|| view! { <ExperienceSection timeline /> });

        assert_eq!(html.matches("relative pl-6").count(), timeline.len());
        let positions = timeline
            .iter()
            .map(|t| html.find(t.title.as_str()).expect("title should be rendered"))
            .collect::<Vec<_>>();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(html.find("2025") < html.find("2023"));
    }

    #[test]
    fn test_skill_rows_rendered() {
        let skills = &portfolio().skills;
        let html = render(|| view! { <SkillsSection skills /> });

        // bars start empty and grow once seen
        assert_eq!(html.matches("width: 0%").count(), skills.len());
        let rows = [
            "AWS Cloud", "90%", "Docker", "85%", "CI/CD Pipelines", "80%", "Linux", "88%",
        ];
        let positions = rows
            .iter()
            .map(|s| html.find(s).expect("skill text should be rendered"))
            .collect::<Vec<_>>();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_theme_label_rendered() {
        let html = render(|| {
            let view_state = RwSignal::new(ViewState::new());
            view! { <Header owner="Arbin Sapkota".to_string() view_state /> }
        });
        assert!(html.contains("Dark"));
        assert!(!html.contains("Light"));

        let html = render(|| {
            let view_state = RwSignal::new(ViewState::new());
            view_state.update(ViewState::toggle_theme);
            view! { <Header owner="Arbin Sapkota".to_string() view_state /> }
        });
        assert!(html.contains("Light"));
        assert!(!html.contains("Dark"));
    }
}
