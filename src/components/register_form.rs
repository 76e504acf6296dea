//! Register Form Component

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::models::{RegisterRequest, Role};
use crate::page::{Page, REGISTER_REDIRECT_MS};

#[component]
pub fn RegisterForm() -> impl IntoView {
    let ctx = use_app_context();

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_loading, set_is_loading) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if is_loading.get() {
            return;
        }
        let request = RegisterRequest {
            name: name.get(),
            email: email.get(),
            password: password.get(),
            role: Role::User,
        };
        set_is_loading.set(true);

        let api = ctx.api();
        spawn_local(async move {
            match ctx.session.register(&api, &request).await {
                Ok(_) => {
                    ctx.notifications.success("Kayıt başarılı! Giriş sayfasına yönlendiriliyorsunuz...");
                    TimeoutFuture::new(REGISTER_REDIRECT_MS).await;
                    ctx.navigate(Page::Login);
                }
                Err(e) => {
                    ctx.notifications.report(&e, "Kayıt sırasında bir hata oluştu!");
                }
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <div class="auth-container">
            <form class="auth-form" on:submit=on_submit>
                <h2>"Kayıt Ol"</h2>
                <input
                    type="text"
                    placeholder="Ad Soyad"
                    required
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
                <input
                    type="email"
                    placeholder="Email"
                    required
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Şifre"
                    required
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
                <button type="submit" class="btn-primary" disabled=move || is_loading.get()>
                    {move || if is_loading.get() { "Kaydediliyor..." } else { "Kayıt Ol" }}
                </button>
                <p class="auth-switch">
                    "Zaten hesabınız var mı? "
                    <a href="#" on:click=move |ev| {
                        ev.prevent_default();
                        ctx.navigate(Page::Login);
                    }>"Giriş Yap"</a>
                </p>
            </form>
        </div>
    }
}
