//! Login Form Component

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::models::LoginRequest;
use crate::page::{Page, LOGIN_REDIRECT_MS};

#[component]
pub fn LoginForm() -> impl IntoView {
    let ctx = use_app_context();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_loading, set_is_loading) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if is_loading.get() {
            return;
        }
        let request = LoginRequest { email: email.get(), password: password.get() };
        set_is_loading.set(true);

        let api = ctx.api();
        spawn_local(async move {
            match ctx.session.login(&api, &request).await {
                Ok(_) => {
                    ctx.notifications.success("Giriş başarılı!");
                    TimeoutFuture::new(LOGIN_REDIRECT_MS).await;
                    ctx.navigate(Page::Dashboard);
                }
                Err(e) => {
                    ctx.notifications.report(&e, "Email veya şifre hatalı!");
                }
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <div class="auth-container">
            <form class="auth-form" on:submit=on_submit>
                <h2>"Giriş Yap"</h2>
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
                    {move || if is_loading.get() { "Giriş yapılıyor..." } else { "Giriş Yap" }}
                </button>
                <p class="auth-switch">
                    "Hesabınız yok mu? "
                    <a href="#" on:click=move |ev| {
                        ev.prevent_default();
                        ctx.navigate(Page::Register);
                    }>"Kayıt Ol"</a>
                </p>
            </form>
        </div>
    }
}
