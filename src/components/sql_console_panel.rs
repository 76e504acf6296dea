//! SQL Console Panel
//!
//! Admin-only query runner with history, example queries and CSV export.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::{JsCast, JsValue};

use crate::context::use_app_context;
use crate::models::SqlQueryResult;
use crate::sql_console::{cell_text, check_read_only, export_file_name, to_csv, QueryHistory, DEFAULT_QUERY, EXAMPLE_QUERIES};

/// Hand the CSV to the browser as a file download
fn download_csv(csv: &str, file_name: &str) -> Result<(), JsValue> {
    let parts = js_sys::Array::of1(&JsValue::from_str(csv));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("text/csv;charset=utf-8");
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let anchor: web_sys::HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();

    web_sys::Url::revoke_object_url(&url)
}

#[component]
pub fn SqlConsolePanel() -> impl IntoView {
    let ctx = use_app_context();

    let (query, set_query) = signal(DEFAULT_QUERY.to_string());
    let (result, set_result) = signal::<Option<(SqlQueryResult, u64)>>(None);
    let (error, set_error) = signal::<Option<String>>(None);
    let (is_loading, set_is_loading) = signal(false);
    let history = RwSignal::new(QueryHistory::default());

    let execute = move |_: web_sys::MouseEvent| {
        let sql = query.get();
        if let Err(e) = check_read_only(&sql) {
            set_error.set(Some(e.to_string()));
            return;
        }

        set_is_loading.set(true);
        set_error.set(None);
        set_result.set(None);

        let api = ctx.api();
        let started = js_sys::Date::now();
        spawn_local(async move {
            match api.execute_sql(&sql).await {
                Ok(rows) => {
                    let elapsed = (js_sys::Date::now() - started).max(0.0) as u64;
                    log::info!("query returned {} rows in {} ms", rows.row_count, elapsed);
                    history.update(|h| h.record(&sql));
                    set_result.set(Some((rows, elapsed)));
                }
                Err(e) => {
                    log::warn!("query failed: {}", e);
                    set_error.set(Some(e.user_message("SQL sorgusu çalıştırılırken hata oluştu!")));
                }
            }
            set_is_loading.set(false);
        });
    };

    let clear = move |_: web_sys::MouseEvent| {
        set_query.set(String::new());
        set_result.set(None);
        set_error.set(None);
    };

    let export = move |_: web_sys::MouseEvent| {
        let Some((rows, _)) = result.get() else { return };
        let file_name = export_file_name(js_sys::Date::now() as u64);
        if let Err(e) = download_csv(&to_csv(&rows), &file_name) {
            log::error!("csv export failed: {:?}", e);
            ctx.notifications.error("CSV dışa aktarılamadı");
        }
    };

    view! {
        <div class="sql-console">
            <div class="sql-examples">
                <span>"Örnek sorgular:"</span>
                {EXAMPLE_QUERIES.iter().map(|(label, sql)| view! {
                    <button class="btn-secondary small" on:click=move |_| set_query.set(sql.to_string())>
                        {*label}
                    </button>
                }).collect_view()}
            </div>

            <textarea
                class="sql-editor"
                rows="6"
                prop:value=move || query.get()
                on:input=move |ev| set_query.set(event_target_value(&ev))
            ></textarea>

            <div class="section-actions">
                <button class="btn-primary" on:click=execute disabled=move || is_loading.get()>
                    {move || if is_loading.get() { "Çalıştırılıyor..." } else { "▶ Çalıştır" }}
                </button>
                <button class="btn-secondary" on:click=clear>"Temizle"</button>
                <Show when=move || result.with(|r| r.is_some())>
                    <button class="btn-secondary" on:click=export>"CSV İndir"</button>
                </Show>
            </div>

            {move || error.get().map(|msg| view! { <div class="error-line">{msg}</div> })}

            {move || result.get().map(|(rows, elapsed)| view! {
                <p class="sql-meta">{format!("{} satır, {} ms", rows.row_count, elapsed)}</p>
                <div class="sql-result">
                    <table class="data-table">
                        <thead>
                            <tr>
                                {rows.columns.iter().map(|c| view! { <th>{c.clone()}</th> }).collect_view()}
                            </tr>
                        </thead>
                        <tbody>
                            {rows.rows.iter().map(|row| view! {
                                <tr>
                                    {row.iter().map(|v| view! { <td>{cell_text(v)}</td> }).collect_view()}
                                </tr>
                            }).collect_view()}
                        </tbody>
                    </table>
                </div>
            })}

            <Show when=move || history.with(|h| !h.is_empty())>
                <div class="sql-history">
                    <h3>"Geçmiş"</h3>
                    <ul>
                        {move || history.with(|h| h.entries().cloned().collect::<Vec<_>>()).into_iter().map(|sql| {
                            let shown = sql.clone();
                            view! {
                                <li on:click=move |_| set_query.set(sql.clone())>
                                    <code>{shown}</code>
                                </li>
                            }
                        }).collect_view()}
                    </ul>
                </div>
            </Show>
        </div>
    }
}
