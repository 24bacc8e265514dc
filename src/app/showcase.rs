use leptos::{either::Either, html, prelude::*};
use leptos_use::{
    use_element_visibility, use_interval_fn_with_options, use_timeout_fn, UseIntervalFnOptions,
    UseTimeoutFnReturn,
};

use crate::content::{
    footer_text, Certification, ContactCard, ContactLink, ExpertiseCard, Icon, PipelineStep,
    Portfolio, Project, Showcase, Stat,
};
use crate::counter::{format_count, CountUp, COUNT_TICK_MS};
use crate::motion::{Motion, Trigger};
use crate::splash::{SplashGate, SPLASH_DELAY_MS};

use super::icon::Glyph;
use super::reveal::Reveal;

const CARD: &str = "rounded-3xl border bg-gradient-to-br p-8 hover:shadow-2xl hover:-translate-y-2 transform transition-all duration-300";
const PILL: &str = "px-3 py-1 text-xs md:text-sm bg-blue-600/20 text-blue-300 rounded-full backdrop-blur-sm";

/// Extended layout: a terminal-style intro for a fixed delay, then the full page.
#[component]
pub fn ShowcasePage(portfolio: &'static Portfolio, year: Resource<i32>) -> impl IntoView {
    let gate = RwSignal::new(SplashGate::new());

    let UseTimeoutFnReturn { start, stop, .. } = use_timeout_fn(
        move |_: ()| {
            gate.update(|g| {
                if g.open() {
                    log::debug!("splash finished, mounting main view");
                }
            });
        },
        SPLASH_DELAY_MS,
    );
    // no tracked reads, so this runs once after mount
    Effect::new(move |_| start(()));
    // a pending timer must not fire into a torn-down page
    on_cleanup(move || stop());

    let showcase = &portfolio.showcase;
    let owner = portfolio.site.owner.clone();

    move || {
        if gate.with(SplashGate::is_ready) {
            Either::Right(view! {
                <div class="bg-slate-950 text-slate-100">
                    <ShowcaseHeader owner=owner.clone() profiles=&showcase.profiles />
                    <ShowcaseHero
                        hero_title=portfolio.hero.title.clone()
                        tagline=portfolio.hero.tagline.clone()
                        cv_href=showcase.cv_href.clone()
                    />
                    <Stats stats=&showcase.stats />
                    <Expertise cards=&showcase.expertise />
                    <Projects projects=&showcase.projects />
                    <Certifications certifications=&showcase.certifications />
                    <ReferenceArchitecture showcase />
                    <ContactCards showcase />
                    <ShowcaseFooter owner=owner.clone() built_with=showcase.built_with.clone() year />
                </div>
            })
        } else {
            Either::Left(view! { <TerminalIntro text=showcase.intro_text() /> })
        }
    }
}

#[component]
fn TerminalIntro(text: String) -> impl IntoView {
    view! {
        <div class="h-screen bg-black text-green-400 font-mono flex items-center justify-center">
            <Reveal motion=Motion::fade_in()>
                <pre class="text-sm md:text-base leading-relaxed">{text}</pre>
            </Reveal>
        </div>
    }
}

#[component]
fn ShowcaseHeader(owner: String, profiles: &'static [ContactLink]) -> impl IntoView {
    view! {
        <header class="sticky top-0 z-50 backdrop-blur-xl bg-slate-950/70 border-b border-white/5">
            <div class="max-w-6xl mx-auto flex justify-between items-center px-6 py-4">
                <span class="font-medium">{owner}</span>
                <div class="flex gap-4 text-slate-400">
                    {profiles
                        .iter()
                        .map(|p| {
                            view! {
                                <a
                                    href=p.href.clone()
                                    aria-label=p.label.clone()
                                    class="hover:text-white transition-colors"
                                >
                                    <Glyph icon=p.icon class="text-lg" />
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </header>
    }
}

#[component]
fn ShowcaseHero(hero_title: String, tagline: String, cv_href: String) -> impl IntoView {
    view! {
        <section class="relative py-36 px-6 text-center">
            <div class="absolute inset-0 blur-3xl bg-gradient-to-r from-blue-600/20 via-cyan-500/10 to-indigo-600/20" />
            <Reveal motion=Motion::fade_up(Trigger::Mount) class="relative">
                <h1 class="text-5xl md:text-6xl font-semibold mb-6">{hero_title}</h1>
            </Reveal>
            <p class="relative text-lg text-slate-400 max-w-2xl mx-auto">{tagline}</p>
            <div class="relative flex justify-center gap-4 mt-10">
                <a
                    href=cv_href
                    class="inline-flex items-center gap-2 px-6 py-3 rounded-xl bg-gradient-to-r from-blue-600 to-cyan-500 hover:from-blue-500 hover:to-cyan-400 transition-all duration-300 hover:scale-105"
                >
                    <Glyph icon=Icon::Download class="text-base" />
                    " Download CV"
                </a>
            </div>
        </section>
    }
}

#[component]
fn SectionTitle(title: &'static str, #[prop(optional)] subtitle: Option<&'static str>) -> impl IntoView {
    view! {
        <div class="text-center mb-16">
            <h2 class="text-4xl md:text-5xl font-bold text-blue-400 mb-4">{title}</h2>
            {subtitle.map(|s| view! { <p class="text-lg text-slate-400 max-w-2xl mx-auto">{s}</p> })}
        </div>
    }
}

#[component]
fn Stats(stats: &'static [Stat]) -> impl IntoView {
    view! {
        <section class="max-w-5xl mx-auto px-6 py-24">
            <SectionTitle title="Key Stats" />
            <div class="grid grid-cols-2 md:grid-cols-4 gap-6 text-center">
                {stats.iter().map(|stat| view! { <StatCard stat /> }).collect_view()}
            </div>
        </section>
    }
}

/// Counts up to the stat's value the first time the card is seen.
#[component]
fn StatCard(stat: &'static Stat) -> impl IntoView {
    let node_ref = NodeRef::<html::Div>::new();
    let visible = use_element_visibility(node_ref);
    let counter = RwSignal::new(CountUp::for_stat(stat.value));
    let started = RwSignal::new(false);

    let ticker = use_interval_fn_with_options(
        move || {
            counter.update(|c| {
                c.tick();
            });
        },
        COUNT_TICK_MS,
        UseIntervalFnOptions::default().immediate(false),
    );

    let resume = ticker.resume;
    Effect::new(move |_| {
        if visible.get() && !started.get_untracked() {
            started.set(true);
            resume();
        }
    });
    let pause = ticker.pause;
    Effect::new(move |_| {
        if counter.with(CountUp::is_done) {
            pause();
        }
    });

    view! {
        <div
            node_ref=node_ref
            class="rounded-2xl bg-gradient-to-br from-slate-900/80 via-slate-950/70 to-slate-900/80 p-6 hover:shadow-lg hover:-translate-y-1 hover:scale-[1.03] transform transition-all duration-300 border border-slate-700"
        >
            <div class="text-3xl md:text-4xl font-bold text-blue-500 mb-1">
                {move || format_count(counter.with(CountUp::displayed))}
                {stat.suffix.clone()}
            </div>
            <div class="text-xs md:text-sm text-slate-400">{stat.label.clone()}</div>
        </div>
    }
}

#[component]
fn Expertise(cards: &'static [ExpertiseCard]) -> impl IntoView {
    view! {
        <section class="max-w-6xl mx-auto px-6 py-24">
            <SectionTitle title="Core Expertise" />
            <div class="grid md:grid-cols-2 gap-8">
                {cards
                    .iter()
                    .map(|card| {
                        view! {
                            <div class=format!("relative {CARD} border-slate-700 from-slate-900/80 via-slate-950/70 to-slate-900/80")>
                                <div class="flex items-center gap-3 mb-6 text-blue-400">
                                    <Glyph icon=card.icon class="text-2xl" />
                                    <h3 class="font-semibold text-xl md:text-2xl">{card.title.clone()}</h3>
                                </div>
                                <Pills items=&card.items />
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn Pills(items: &'static [String]) -> impl IntoView {
    view! {
        <div class="flex flex-wrap gap-2 mb-4">
            {items.iter().map(|s| view! { <span class=PILL>{s.clone()}</span> }).collect_view()}
        </div>
    }
}

#[component]
fn Projects(projects: &'static [Project]) -> impl IntoView {
    view! {
        <section class="max-w-6xl mx-auto px-6 py-24">
            <SectionTitle title="Featured Projects" />
            <div class="grid md:grid-cols-2 gap-10">
                {projects
                    .iter()
                    .map(|project| {
                        view! {
                            <div class=format!("group relative {CARD} border-slate-700 from-slate-900/80 via-slate-950/70 to-slate-900/80")>
                                <h3 class="text-xl md:text-2xl font-semibold mb-4 text-white">
                                    {project.title.clone()}
                                </h3>
                                <Pills items=&project.stack />
                                <p class="text-sm md:text-base text-slate-400">{project.description.clone()}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn Certifications(certifications: &'static [Certification]) -> impl IntoView {
    view! {
        <section class="max-w-6xl mx-auto px-6 py-24">
            <SectionTitle
                title="Certifications"
                subtitle="Validated expertise in AWS cloud architecture and DevOps methodologies"
            />
            <div class="grid md:grid-cols-3 gap-8">
                {certifications
                    .iter()
                    .enumerate()
                    .map(|(i, cert)| {
                        view! {
                            <Reveal motion=Motion::rise(20.0, Trigger::InView).staggered(i)>
                                <CertCard cert />
                            </Reveal>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn CertCard(cert: &'static Certification) -> impl IntoView {
    let accent = cert.accent;
    view! {
        <div class=format!("group relative h-full {CARD} {} {}", accent.border_class(), accent.gradient_class())>
            <div class="flex items-start justify-between mb-6">
                <div class="p-3 bg-white/5 rounded-2xl backdrop-blur-sm">
                    <Glyph icon=cert.icon class=format!("text-3xl {}", accent.icon_class()) />
                </div>
                <span class="px-3 py-1 text-xs font-medium bg-white/10 text-white rounded-full">
                    {cert.badge.clone()}
                </span>
            </div>
            <h3 class="text-xl font-semibold mb-3 text-white group-hover:text-blue-300 transition-colors">
                {cert.name.clone()}
            </h3>
            <div class="flex items-center justify-between mt-6 pt-6 border-t border-white/10">
                <span class="text-sm text-slate-400">{cert.date.clone()}</span>
                <Glyph icon=Icon::Award class="text-yellow-500/60" />
            </div>
        </div>
    }
}

#[component]
fn ReferenceArchitecture(showcase: &'static Showcase) -> impl IntoView {
    view! {
        <section class="max-w-6xl mx-auto px-6 py-24">
            <SectionTitle
                title="Reference Architecture"
                subtitle="End-to-end cloud-native application deployment pipeline"
            />
            <div class="relative rounded-3xl border border-slate-800 bg-gradient-to-br from-slate-900/80 to-slate-950 p-8 md:p-12 mb-12 overflow-hidden">
                <div class="grid grid-cols-1 md:grid-cols-5 gap-6">
                    {showcase
                        .pipeline
                        .iter()
                        .enumerate()
                        .map(|(i, step)| view! { <PipelineStage step index=i /> })
                        .collect_view()}
                </div>
                <div class="mt-12 p-6 bg-black/30 rounded-2xl border border-slate-800">
                    <pre class="text-sm text-slate-300 font-mono overflow-x-auto">
                        {showcase.pipeline_diagram.join("\n")}
                    </pre>
                </div>
            </div>
        </section>
    }
}

#[component]
fn PipelineStage(step: &'static PipelineStep, index: usize) -> impl IntoView {
    view! {
        <Reveal motion=Motion::rise(20.0, Trigger::InView).staggered(index) class="text-center">
            <div class="p-4 bg-white/5 rounded-2xl border border-slate-700 mb-4 inline-block">
                <Glyph icon=step.icon class="text-2xl text-blue-400" />
            </div>
            <h3 class="font-semibold text-white mb-2">{step.title.clone()}</h3>
            <p class="text-sm text-slate-400">{step.description.clone()}</p>
        </Reveal>
    }
}

#[component]
fn ContactCards(showcase: &'static Showcase) -> impl IntoView {
    view! {
        <section class="relative py-24 overflow-hidden">
            <div class="absolute inset-0 bg-gradient-to-b from-slate-950 via-blue-950/20 to-slate-950" />
            <div class="relative max-w-6xl mx-auto px-6">
                <SectionTitle
                    title="Let's Connect"
                    subtitle="Open to discussing cloud architecture, automation, and DevOps opportunities"
                />
                <div class="grid md:grid-cols-3 gap-8 mb-16">
                    {showcase
                        .contact_cards
                        .iter()
                        .enumerate()
                        .map(|(i, card)| {
                            view! {
                                <Reveal motion=Motion::rise(20.0, Trigger::InView).staggered(i)>
                                    <ContactCardLink card />
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="text-center">
                    <div class="inline-flex items-center gap-2 px-6 py-3 rounded-full bg-gradient-to-r from-blue-600/20 to-cyan-600/20 border border-blue-500/30 mb-4">
                        <div class="w-2 h-2 bg-green-500 rounded-full animate-pulse" />
                        <span class="text-sm text-blue-300">"Available for opportunities"</span>
                    </div>
                    <p class="text-slate-400 mb-8 max-w-md mx-auto">{showcase.availability.clone()}</p>
                    <a
                        href=showcase.contact_email.clone()
                        class="inline-flex items-center gap-3 px-8 py-4 rounded-2xl bg-gradient-to-r from-blue-600 to-cyan-500 hover:from-blue-500 hover:to-cyan-400 transition-all duration-300 hover:scale-105 text-lg font-medium"
                    >
                        <Glyph icon=Icon::Mail class="text-xl" />
                        "Start a Conversation"
                    </a>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactCardLink(card: &'static ContactCard) -> impl IntoView {
    let accent = card.accent;
    view! {
        <a
            href=card.href.clone()
            target="_blank"
            rel="noopener noreferrer"
            class=format!("group block {CARD} {} {}", accent.border_class(), accent.gradient_class())
        >
            <div class="flex items-center gap-4 mb-4">
                <div class="p-3 bg-white/5 rounded-2xl backdrop-blur-sm text-white">
                    <Glyph icon=card.icon class="text-2xl" />
                </div>
                <h3 class="font-semibold text-white text-lg">{card.platform.clone()}</h3>
            </div>
            <p class="text-slate-300 text-sm">{card.value.clone()}</p>
            <div class="mt-6 pt-6 border-t border-white/10 flex items-center justify-between">
                <span class="text-xs text-slate-400">"Click to connect"</span>
                <div class="text-blue-400 opacity-0 group-hover:opacity-100 transition-opacity">
                    "↗"
                </div>
            </div>
        </a>
    }
}

#[component]
fn ShowcaseFooter(owner: String, built_with: String, year: Resource<i32>) -> impl IntoView {
    view! {
        <footer class="border-t border-slate-800 py-10 text-center text-sm text-slate-500">
            <div class="max-w-6xl mx-auto px-6">
                <p class="mb-4">{built_with}</p>
                <Suspense>
                    {move || {
                        let owner = owner.clone();
                        Suspend::new(async move {
                            view! {
                                <p>{format!("{}. All rights reserved.", footer_text(&owner, year.await))}</p>
                            }
                        })
                    }}
                </Suspense>
            </div>
        </footer>
    }
}
