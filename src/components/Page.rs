use crate::components::Footer::*;
use leptos::*;

#[component]
pub fn Page(children: Children) -> impl IntoView {
    view! {
        <div class="overflow-x-hidden min-h-screen bg-gradient-to-br from-slate-50 to-blue-50">
            {children()} <Footer/>
        </div>
    }
}
