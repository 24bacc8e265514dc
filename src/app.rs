mod icon;
mod reveal;
mod sections;
mod showcase;

use chrono::{Datelike, Utc};
use leptos::{either::*, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::{Portfolio, Variant};
use crate::theme::ViewState;

use sections::{
    ArchitectureSection, ContactSection, ExperienceSection, Footer, Header, HeroSection,
    SkillsSection,
};
use showcase::ShowcasePage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="scroll-smooth">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/folio-site.css" />
                <link
                    rel="stylesheet"
                    href="https://unpkg.com/lucide-static@0.460.0/font/lucide.css"
                />
                <MetaTags />
            </head>
            <body class="antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=PortfolioPage />
            </Routes>
        </Router>
    }
}

/// Picks the layout named by the site content. The clock is read once here
/// and handed down, so nothing below depends on ambient time.
#[component]
fn PortfolioPage() -> impl IntoView {
    let portfolio = match Portfolio::load() {
        Ok(p) => p,
        Err(e) => {
            log::error!("failed to load site content: {e}");
            return Either::Right(view! {
                <Title text="Unavailable" />
                <main class="min-h-screen flex items-center justify-center bg-slate-950 text-slate-400">
                    <p>"Portfolio content is unavailable right now."</p>
                </main>
            });
        }
    };
    // resolved during SSR and serialized into the page, so hydration reuses the server's year
    let year = Resource::new(|| (), |_| async move { Utc::now().year() });

    Either::Left(view! {
        <Title text=portfolio.site.title.clone() />
        <Meta name="description" content=portfolio.site.description.clone() />
        {match portfolio.site.variant {
            Variant::Classic => Either::Left(view! { <ClassicPage portfolio year /> }),
            Variant::Showcase => Either::Right(view! { <ShowcasePage portfolio year /> }),
        }}
    })
}

#[component]
fn ClassicPage(portfolio: &'static Portfolio, year: Resource<i32>) -> impl IntoView {
    let view_state = RwSignal::new(ViewState::new());

    view! {
        <div class=move || view_state.get().theme().root_class()>
            <Header owner=portfolio.site.owner.clone() view_state />
            <HeroSection hero=&portfolio.hero />
            <SkillsSection skills=&portfolio.skills />
            <ExperienceSection timeline=&portfolio.timeline />
            <ArchitectureSection diagrams=&portfolio.diagrams />
            <ContactSection contacts=&portfolio.contacts />
            <Footer owner=portfolio.site.owner.clone() year />
        </div>
    }
}
