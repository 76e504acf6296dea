//! Navigation Bar Component
//!
//! Page links, the signed-in user's name, and logout.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::page::Page;

/// Top navigation bar, shown only with a session
#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_app_context();
    let user = ctx.session.watch();

    let menu = move || user.get().map(|u| Page::menu(&u)).unwrap_or_default();

    view! {
        <nav class="navbar">
            <span class="navbar-brand">"📚 Kütüphane Rezervasyon"</span>

            <div class="navbar-links">
                {move || menu().into_iter().map(|page| {
                    let link_class = move || {
                        if ctx.page() == page { "nav-link active" } else { "nav-link" }
                    };
                    view! {
                        <button class=link_class on:click=move |_| ctx.navigate(page)>
                            {page.title()}
                        </button>
                    }
                }).collect_view()}
            </div>

            <div class="navbar-user">
                {move || user.get().map(|u| {
                    let is_admin = u.is_admin();
                    view! {
                        <span class="navbar-user-name">{u.name}</span>
                        {is_admin.then(|| view! { <span class="badge badge-admin">"ADMIN"</span> })}
                    }
                })}
                <button class="logout-btn" on:click=move |_| ctx.logout()>
                    "Çıkış Yap"
                </button>
            </div>
        </nav>
    }
}
