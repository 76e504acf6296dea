//! Admin Panel
//!
//! Tabbed management console. Each tab loads its own data when it is opened;
//! switching tabs clears the error line.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{
    AdminEquipment, AdminReservations, AdminRooms, AdminTimeSlots, AdminUsers, ReservationScope, SqlConsolePanel,
};
use crate::context::use_app_context;
use crate::models::DashboardStats;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum AdminTab {
    #[default]
    Dashboard,
    Users,
    Rooms,
    Equipment,
    Pending,
    AllReservations,
    TimeSlots,
    SqlConsole,
}

impl AdminTab {
    const ALL: [AdminTab; 8] = [
        AdminTab::Dashboard,
        AdminTab::Users,
        AdminTab::Rooms,
        AdminTab::Equipment,
        AdminTab::Pending,
        AdminTab::AllReservations,
        AdminTab::TimeSlots,
        AdminTab::SqlConsole,
    ];

    fn label(&self) -> &'static str {
        match self {
            AdminTab::Dashboard => "📊 Genel Bakış",
            AdminTab::Users => "👥 Kullanıcılar",
            AdminTab::Rooms => "🚪 Odalar",
            AdminTab::Equipment => "💻 Ekipmanlar",
            AdminTab::Pending => "⏳ Onay Bekleyenler",
            AdminTab::AllReservations => "📋 Tüm Rezervasyonlar",
            AdminTab::TimeSlots => "🕐 Zaman Dilimleri",
            AdminTab::SqlConsole => "🗄️ SQL Konsolu",
        }
    }
}

#[component]
fn StatCard(label: &'static str, value: u32) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-value">{value}</span>
            <span class="stat-label">{label}</span>
        </div>
    }
}

#[component]
fn StatsOverview(stats: ReadSignal<Option<DashboardStats>>) -> impl IntoView {
    view! {
        {move || match stats.get() {
            None => view! { <p class="empty-state">"Yükleniyor..."</p> }.into_any(),
            Some(s) => view! {
                <div class="stats-grid">
                    <StatCard label="Toplam Kullanıcı" value=s.total_users />
                    <StatCard label="Admin" value=s.total_admins />
                    <StatCard label="Normal Kullanıcı" value=s.total_regular_users />
                    <StatCard label="Toplam Oda" value=s.total_rooms />
                    <StatCard label="Boş Oda" value=s.empty_rooms />
                    <StatCard label="Dolu Oda" value=s.occupied_rooms />
                    <StatCard label="Bakımdaki Oda" value=s.maintenance_rooms />
                    <StatCard label="Toplam Ekipman" value=s.total_equipment />
                    <StatCard label="Müsait Ekipman" value=s.available_equipment />
                    <StatCard label="Rezerve Ekipman" value=s.reserved_equipment />
                    <StatCard label="Bakımdaki Ekipman" value=s.maintenance_equipment />
                    <StatCard label="Toplam Rezervasyon" value=s.total_reservations />
                    <StatCard label="Bekleyen Rezervasyon" value=s.pending_reservations />
                    <StatCard label="Zaman Dilimi" value=s.total_time_slots />
                </div>
            }.into_any(),
        }}
    }
}

#[component]
pub fn AdminPanel() -> impl IntoView {
    let ctx = use_app_context();

    let (tab, set_tab) = signal(AdminTab::default());
    let (error, set_error) = signal::<Option<String>>(None);
    let (stats, set_stats) = signal::<Option<DashboardStats>>(None);
    let (pending_count, set_pending_count) = signal(0usize);

    // Stats and the pending badge load on open and after any confirmed action
    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let api = ctx.api();
        spawn_local(async move {
            match api.dashboard_stats().await {
                Ok(loaded) => set_stats.set(Some(loaded)),
                Err(e) => {
                    log::warn!("dashboard stats not loaded: {}", e);
                    set_error.set(Some("İstatistikler yüklenemedi".to_string()));
                }
            }
            match api.pending_reservations().await {
                Ok(pending) => set_pending_count.set(pending.len()),
                Err(e) => log::warn!("pending reservations not loaded: {}", e),
            }
        });
    });

    let switch_tab = move |t: AdminTab| {
        set_error.set(None);
        set_tab.set(t);
    };

    view! {
        <div class="admin-panel">
            <h1>"Admin Paneli"</h1>

            <div class="tab-bar admin-tabs">
                {AdminTab::ALL.into_iter().map(|t| view! {
                    <button
                        class=move || if tab.get() == t { "tab active" } else { "tab" }
                        on:click=move |_| switch_tab(t)
                    >
                        {t.label()}
                        {(t == AdminTab::Pending).then(|| view! {
                            <Show when=move || { pending_count.get() > 0 }>
                                <span class="tab-badge">{move || pending_count.get()}</span>
                            </Show>
                        })}
                    </button>
                }).collect_view()}
            </div>

            {move || error.get().map(|msg| view! { <div class="error-line">{msg}</div> })}

            {move || match tab.get() {
                AdminTab::Dashboard => view! { <StatsOverview stats=stats /> }.into_any(),
                AdminTab::Users => view! { <AdminUsers set_error=set_error /> }.into_any(),
                AdminTab::Rooms => view! { <AdminRooms set_error=set_error /> }.into_any(),
                AdminTab::Equipment => view! { <AdminEquipment set_error=set_error /> }.into_any(),
                AdminTab::Pending => view! {
                    <AdminReservations scope=ReservationScope::Pending set_error=set_error />
                }.into_any(),
                AdminTab::AllReservations => view! {
                    <AdminReservations scope=ReservationScope::All set_error=set_error />
                }.into_any(),
                AdminTab::TimeSlots => view! { <AdminTimeSlots set_error=set_error /> }.into_any(),
                AdminTab::SqlConsole => view! { <SqlConsolePanel /> }.into_any(),
            }}
        </div>
    }
}
