//! Comment Section Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::DeleteConfirmButton;
use crate::context::use_session;
use crate::hooks::use_comments;

#[component]
pub fn CommentSection(recipe_id: u64) -> impl IntoView {
    let session = use_session();
    let thread = use_comments(Signal::stored(recipe_id));
    let (draft, set_draft) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let on_post = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let content = draft.get();
        set_error.set(None);
        spawn_local(async move {
            match thread.add_comment(content).await {
                Ok(()) => set_draft.set(String::new()),
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    view! {
        <section class="comments">
            <h3>{move || format!("Comments ({})", thread.comments().len())}</h3>
            {move || thread.error().map(|e| view! { <p class="form-error">{e}</p> })}
            <ul class="comment-list">
                <For
                    each=move || thread.comments()
                    key=|c| c.id
                    children=move |comment| {
                        let id = comment.id;
                        let author_id = comment.author.id;
                        let is_own = move || session.user_id() == Some(author_id);
                        view! {
                            <li class="comment">
                                <span class="comment-author">{comment.author.name.clone()}</span>
                                <p class="comment-content">{comment.content.clone()}</p>
                                <Show when=is_own>
                                    <DeleteConfirmButton
                                        label="Delete"
                                        on_confirm=move |_| {
                                            spawn_local(async move {
                                                if let Err(e) = thread.delete_comment(id).await {
                                                    set_error.set(Some(e));
                                                }
                                            });
                                        }
                                    />
                                </Show>
                            </li>
                        }
                    }
                />
            </ul>
            <Show
                when=move || session.is_authenticated()
                fallback=|| view! { <p class="hint">"Log in to join the conversation."</p> }
            >
                <form class="comment-form" on:submit=on_post>
                    <textarea
                        placeholder="Add a comment..."
                        prop:value=move || draft.get()
                        on:input=move |ev| set_draft.set(event_target_value(&ev))
                    ></textarea>
                    <button type="submit">"Post"</button>
                </form>
            </Show>
            {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
        </section>
    }
}
