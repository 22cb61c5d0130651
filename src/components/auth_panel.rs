//! Auth Panel Component
//!
//! Sign-in / sign-up form, or the signed-in user with a logout button.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_session;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mode {
    Login,
    Register,
}

#[component]
pub fn AuthPanel() -> impl IntoView {
    let session = use_session();

    let (mode, set_mode) = signal(Mode::Login);
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (name, set_name) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);
        let (email, password, name) = (email.get(), password.get(), name.get());
        let mode = mode.get();
        spawn_local(async move {
            let result = match mode {
                Mode::Login => session.login(email, password).await,
                Mode::Register => session.register(email, password, name).await,
            };
            match result {
                Ok(()) => set_password.set(String::new()),
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let signed_in = move || {
        session.session().map(|s| {
            view! {
                <div class="auth-user">
                    <span class="auth-name">{s.display_name.clone()}</span>
                    <button on:click=move |_| session.logout()>"Log out"</button>
                </div>
            }
        })
    };

    view! {
        <div class="auth-panel">
            <Show
                when=move || session.is_authenticated()
                fallback=move || view! {
                    <form class="auth-form" on:submit=on_submit>
                        <input
                            type="email"
                            placeholder="Email"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                        <input
                            type="password"
                            placeholder="Password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                        <Show when=move || mode.get() == Mode::Register>
                            <input
                                type="text"
                                placeholder="Name"
                                prop:value=move || name.get()
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                            />
                        </Show>
                        <button type="submit" disabled=move || session.is_loading()>
                            {move || if mode.get() == Mode::Login { "Log in" } else { "Sign up" }}
                        </button>
                        <button
                            type="button"
                            class="link-btn"
                            on:click=move |_| {
                                set_error.set(None);
                                set_mode.update(|m| {
                                    *m = if *m == Mode::Login { Mode::Register } else { Mode::Login };
                                });
                            }
                        >
                            {move || if mode.get() == Mode::Login { "Create an account" } else { "I have an account" }}
                        </button>
                        {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
                    </form>
                }
            >
                {signed_in}
            </Show>
        </div>
    }
}
