use leptos::prelude::*;
use leptos_meta::Title;

use super::about::AboutSection;
use super::contact::ContactSection;
use super::footer::Footer;
use super::hero::HeroSection;
use super::nav::Navigation;
use super::projects::ProjectsSection;
use super::skills::SkillsSection;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <div class="min-h-screen bg-slate-950 text-white overflow-x-hidden">
            <Navigation />
            <HeroSection />
            <AboutSection />
            <SkillsSection />
            <ProjectsSection />
            <ContactSection />
            <Footer />
        </div>
    }
}
