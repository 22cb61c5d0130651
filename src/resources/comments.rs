//! Comment Thread
//!
//! Adding posts and then reloads the whole thread; deleting drops the entry
//! locally once the server confirms, without a reload.

use super::{load, LoadOutcome, Loadable, StateCell};
use crate::api::ApiClient;
use crate::error::ApiResult;
use crate::models::Comment;

/// Remove the comment with `id`; returns whether one was removed
pub fn remove_by_id(comments: &mut Vec<Comment>, id: u64) -> bool {
    let before = comments.len();
    comments.retain(|c| c.id != id);
    comments.len() != before
}

/// Fetch the thread. `restart` drops comments of a previous recipe first.
pub async fn reload<C>(cell: &C, api: &ApiClient, recipe_id: u64, restart: bool) -> LoadOutcome
where
    C: StateCell<Loadable<Vec<Comment>>>,
{
    load(cell, restart, api.list_comments(recipe_id)).await
}

pub async fn add<C>(cell: &C, api: &ApiClient, recipe_id: u64, content: &str) -> ApiResult<()>
where
    C: StateCell<Loadable<Vec<Comment>>>,
{
    api.add_comment(recipe_id, content).await?;
    reload(cell, api, recipe_id, false).await;
    Ok(())
}

pub async fn delete<C>(cell: &C, api: &ApiClient, recipe_id: u64, comment_id: u64) -> ApiResult<()>
where
    C: StateCell<Loadable<Vec<Comment>>>,
{
    api.delete_comment(recipe_id, comment_id).await?;
    cell.update_with(|s| s.value_mut().map(|list| remove_by_id(list, comment_id)));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::*;
    use serde_json::json;
    use std::cell::RefCell;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn thread(ids: &[u64]) -> Loadable<Vec<Comment>> {
        let mut state = Loadable::default();
        let ticket = state.begin();
        state.settle(ticket, Ok(ids.iter().copied().map(comment).collect()));
        state
    }

    fn ids(cell: &RefCell<Loadable<Vec<Comment>>>) -> Vec<u64> {
        cell.borrow().value().unwrap().iter().map(|c| c.id).collect()
    }

    #[test]
    fn test_remove_by_id_removes_only_match() {
        let mut comments: Vec<Comment> = [1, 2, 3].into_iter().map(comment).collect();
        assert!(remove_by_id(&mut comments, 2));
        assert_eq!(comments.iter().map(|c| c.id).collect::<Vec<_>>(), vec![1, 3]);
        assert!(!remove_by_id(&mut comments, 9));
        assert_eq!(comments.len(), 2);
    }

    #[tokio::test]
    async fn test_delete_removes_locally_without_refetch() {
        let server = MockServer::start().await;
        let (api, _) = client_for(&server);
        Mock::given(method("DELETE"))
            .and(path("/recipes/4/comments/2"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/recipes/4/comments"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(0)
            .mount(&server)
            .await;

        let cell = RefCell::new(thread(&[1, 2, 3]));
        delete(&cell, &api, 4, 2).await.unwrap();
        assert_eq!(ids(&cell), vec![1, 3]);
    }

    #[tokio::test]
    async fn test_failed_delete_keeps_comment() {
        let server = MockServer::start().await;
        let (api, _) = client_for(&server);
        Mock::given(method("DELETE"))
            .and(path("/recipes/4/comments/2"))
            .respond_with(
                ResponseTemplate::new(403).set_body_json(json!({ "detail": "Not your comment" })),
            )
            .mount(&server)
            .await;

        let cell = RefCell::new(thread(&[1, 2, 3]));
        let err = delete(&cell, &api, 4, 2).await.unwrap_err();
        assert_eq!(err.to_string(), "Not your comment");
        assert_eq!(ids(&cell), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_add_reloads_full_thread() {
        let server = MockServer::start().await;
        let (api, _) = client_for(&server);
        Mock::given(method("POST"))
            .and(path("/recipes/4/comments"))
            .respond_with(ResponseTemplate::new(201).set_body_json(comment_json(3)))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/recipes/4/comments"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([comment_json(1), comment_json(2), comment_json(3)])),
            )
            .expect(1)
            .mount(&server)
            .await;

        let cell = RefCell::new(thread(&[1, 2]));
        add(&cell, &api, 4, "Nice").await.unwrap();
        assert_eq!(ids(&cell), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_reload_for_new_recipe_clears_old_thread() {
        let api = unreachable_client();
        let cell = RefCell::new(thread(&[1, 2]));

        assert_eq!(reload(&cell, &api, 5, true).await, LoadOutcome::Applied);
        assert!(cell.borrow().value().is_none());
        assert!(cell.borrow().error().is_some());
    }
}
