use crate::components::sections::Contact::ContactSection;
use crate::components::sections::Faq::FaqSection;
use crate::components::sections::Features::FeaturesSection;
use crate::components::sections::Usage::UsageSection;
use crate::components::HeroHeader::*;
use crate::components::Page::*;
use leptos::*;
use leptos_meta::*;

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <Title text="ホーム"/>
        <Page>
            <HeroHeader/>
            <FeaturesSection/>
            <UsageSection/>
            <FaqSection/>
            <ContactSection/>
        </Page>
    }
}
