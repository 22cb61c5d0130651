//! Activity Log Component
//!
//! Recent client log records, read from the console logger's history buffer.

use leptos::prelude::*;

/// Records shown at most, newest first
const SHOWN: usize = 50;

#[component]
pub fn ActivityLog() -> impl IntoView {
    let (open, set_open) = signal(false);
    let (lines, set_lines) = signal(Vec::<String>::new());

    let reload = move || {
        let entries = console_logger::recent();
        set_lines.set(entries.iter().rev().take(SHOWN).map(|e| e.line()).collect());
    };

    view! {
        <footer class="activity-log">
            <button
                class="link-btn"
                on:click=move |_| {
                    if !open.get() {
                        reload();
                    }
                    set_open.update(|o| *o = !*o);
                }
            >
                {move || if open.get() { "Hide activity" } else { "Show activity" }}
            </button>
            <Show when=move || open.get()>
                <div class="activity-actions">
                    <button on:click=move |_| reload()>"Refresh"</button>
                    <button on:click=move |_| {
                        console_logger::clear_recent();
                        set_lines.set(Vec::new());
                    }>"Clear"</button>
                </div>
                <pre class="activity-lines">{move || lines.get().join("\n")}</pre>
            </Show>
        </footer>
    }
}
