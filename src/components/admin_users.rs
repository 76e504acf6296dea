//! Admin Users Tab

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::confirm::PendingAction;
use crate::context::use_app_context;
use crate::error::ValidationError;
use crate::models::{CreateAdminRequest, Role, UpdateUserRequest, User};

/// What the user modal is doing
#[derive(Debug, Clone, PartialEq)]
enum UserModal {
    Create { role: Role },
    Edit(User),
}

/// Rows are rebuilt whenever any displayed field changes
fn row_key(user: &User) -> (u32, Role, String, String) {
    (user.user_id, user.role, user.name.clone(), user.email.clone())
}

#[component]
pub fn AdminUsers(set_error: WriteSignal<Option<String>>) -> impl IntoView {
    let ctx = use_app_context();

    let (users, set_users) = signal(Vec::<User>::new());
    let (modal, set_modal) = signal::<Option<UserModal>>(None);
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (role, set_role) = signal(Role::User);

    let load = move || {
        let api = ctx.api();
        spawn_local(async move {
            match api.list_users().await {
                Ok(loaded) => set_users.set(loaded),
                Err(e) => {
                    log::warn!("users not loaded: {}", e);
                    set_error.set(Some("Kullanıcılar yüklenemedi".to_string()));
                }
            }
        });
    };

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        load();
    });

    let open_create = move |role: Role| {
        set_name.set(String::new());
        set_email.set(String::new());
        set_password.set(String::new());
        set_modal.set(Some(UserModal::Create { role }));
    };

    let open_edit = move |user: User| {
        set_name.set(user.name.clone());
        set_email.set(user.email.clone());
        set_role.set(user.role);
        set_modal.set(Some(UserModal::Edit(user)));
    };

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(current) = modal.get() else { return };
        let api = ctx.api();

        match current {
            UserModal::Create { role } => {
                let request = CreateAdminRequest { name: name.get(), email: email.get(), password: password.get() };
                if !request.is_complete() {
                    set_error.set(Some(ValidationError::MissingFields.to_string()));
                    return;
                }
                spawn_local(async move {
                    let (result, done, failed) = match role {
                        Role::Admin => (api.create_admin(&request).await, "Admin başarıyla oluşturuldu", "Admin oluşturulamadı"),
                        Role::User => (api.create_user(&request).await.map(|_| ()), "Kullanıcı oluşturuldu", "Kullanıcı oluşturulamadı"),
                    };
                    match result {
                        Ok(()) => {
                            set_modal.set(None);
                            ctx.notifications.success(done);
                            load();
                        }
                        Err(e) => {
                            ctx.notifications.report(&e, failed);
                        }
                    }
                });
            }
            UserModal::Edit(user) => {
                let request = UpdateUserRequest { name: name.get(), email: email.get(), role: role.get() };
                if request.name.trim().is_empty() || request.email.trim().is_empty() {
                    set_error.set(Some(ValidationError::MissingFields.to_string()));
                    return;
                }
                spawn_local(async move {
                    match api.update_user(user.user_id, &request).await {
                        Ok(()) => {
                            set_modal.set(None);
                            ctx.notifications.success("Kullanıcı güncellendi");
                            load();
                        }
                        Err(e) => {
                            ctx.notifications.report(&e, "Kullanıcı güncellenemedi");
                        }
                    }
                });
            }
        }
    };

    let modal_title = move || match modal.get() {
        Some(UserModal::Create { role: Role::Admin }) => "Yeni Admin",
        Some(UserModal::Create { role: Role::User }) => "Yeni Kullanıcı",
        Some(UserModal::Edit(_)) => "Kullanıcıyı Düzenle",
        None => "",
    };
    let is_edit = move || matches!(modal.get(), Some(UserModal::Edit(_)));

    view! {
        <div class="admin-section">
            <div class="section-actions">
                <button class="btn-primary" on:click=move |_| open_create(Role::Admin)>"+ Admin Oluştur"</button>
                <button class="btn-secondary" on:click=move |_| open_create(Role::User)>"+ Kullanıcı Oluştur"</button>
            </div>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Ad"</th>
                        <th>"Email"</th>
                        <th>"Rol"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || users.get()
                        key=row_key
                        children=move |user| {
                            let id = user.user_id;
                            let is_admin = user.is_admin();
                            let editable = user.clone();
                            view! {
                                <tr>
                                    <td>{id}</td>
                                    <td>{user.name.clone()}</td>
                                    <td>{user.email.clone()}</td>
                                    <td>
                                        <span class=if is_admin { "badge badge-admin" } else { "badge badge-info" }>
                                            {if is_admin { "ADMIN" } else { "USER" }}
                                        </span>
                                    </td>
                                    <td class="row-actions">
                                        {(!is_admin).then(|| view! {
                                            <button
                                                class="btn-secondary small"
                                                on:click=move |_| ctx.request_confirmation(PendingAction::PromoteUser(id))
                                            >
                                                "Admin Yap"
                                            </button>
                                        })}
                                        <button class="btn-secondary small" on:click=move |_| open_edit(editable.clone())>
                                            "Düzenle"
                                        </button>
                                        <button
                                            class="btn-danger small"
                                            on:click=move |_| ctx.request_confirmation(PendingAction::DeleteUser(id))
                                        >
                                            "Sil"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>

            <Show when=move || modal.get().is_some()>
                <div class="modal-overlay">
                    <form class="modal" on:submit=save>
                        <h2>{modal_title}</h2>
                        <input
                            type="text"
                            placeholder="Ad Soyad"
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                        />
                        <input
                            type="email"
                            placeholder="Email"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                        {move || if is_edit() {
                            view! {
                                <select on:change=move |ev| {
                                    let value = event_target_value(&ev);
                                    set_role.set(if value == "ADMIN" { Role::Admin } else { Role::User });
                                }>
                                    <option value="USER" selected=move || role.get() == Role::User>"USER"</option>
                                    <option value="ADMIN" selected=move || role.get() == Role::Admin>"ADMIN"</option>
                                </select>
                            }.into_any()
                        } else {
                            view! {
                                <input
                                    type="password"
                                    placeholder="Şifre"
                                    prop:value=move || password.get()
                                    on:input=move |ev| set_password.set(event_target_value(&ev))
                                />
                            }.into_any()
                        }}
                        <div class="modal-actions">
                            <button type="submit" class="btn-primary">"Kaydet"</button>
                            <button type="button" class="cancel-btn" on:click=move |_| set_modal.set(None)>"İptal"</button>
                        </div>
                    </form>
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_key_tracks_edits() {
        let before = User { user_id: 7, name: "Ali".to_string(), email: "ali@example.com".to_string(), role: Role::User };
        let renamed = User { name: "Veli".to_string(), ..before.clone() };
        let new_email = User { email: "veli@example.com".to_string(), ..before.clone() };

        assert_ne!(row_key(&before), row_key(&renamed));
        assert_ne!(row_key(&before), row_key(&new_email));
        assert_eq!(row_key(&before), row_key(&before.clone()));
    }
}
