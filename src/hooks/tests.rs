//! Hook Tests
//!
//! Hooks run under a reactive owner with the tokio executor, so effects and
//! `spawn_local` tasks are driven by the test runtime.

use std::future::Future;
use std::time::Duration;

use any_spawner::Executor;
use leptos::prelude::*;
use serde_json::json;
use tokio::task::LocalSet;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::{use_comments, use_recipe, use_recipes};
use crate::models::RecipeFilters;
use crate::test_support::*;

async fn run_local<F: Future>(test: F) -> F::Output {
    // Already initialized by an earlier test on this process
    let _ = Executor::init_tokio();
    LocalSet::new().run_until(test).await
}

/// Owner with an `ApiClient` pointed at `server` in context
fn mount(server: &MockServer) -> Owner {
    let owner = Owner::new();
    owner.set();
    let (api, _) = client_for(server);
    provide_context(api);
    owner
}

async fn wait_for(what: &str, mut done: impl FnMut() -> bool) {
    for _ in 0..300 {
        if done() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("timed out waiting for {}", what);
}

#[tokio::test]
async fn test_use_recipe_reloads_and_drops_old_recipe_on_id_change() {
    run_local(async {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/recipes/1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(recipe_json(1, false, 0)))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/recipes/2"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(recipe_json(2, false, 0))
                    .set_delay(Duration::from_millis(300)),
            )
            .expect(1)
            .mount(&server)
            .await;

        let _owner = mount(&server);
        let id = RwSignal::new(1u64);
        let detail = use_recipe(id);
        wait_for("recipe 1", || detail.recipe().map(|r| r.id) == Some(1)).await;

        id.set(2);
        wait_for("recipe 1 dropped", || detail.recipe().is_none() && detail.is_loading()).await;
        wait_for("recipe 2", || detail.recipe().map(|r| r.id) == Some(2)).await;
        assert!(!detail.is_loading());
        assert_eq!(server.received_requests().await.unwrap().len(), 2);
    })
    .await;
}

#[tokio::test]
async fn test_use_recipes_refreshes_when_filters_change() {
    run_local(async {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/recipes"))
            .and(query_param("category", "dessert"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_json(10..12, 2, 0, 12, false)))
            .with_priority(1)
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/recipes"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_json(1..4, 30, 0, 12, true)))
            .expect(1)
            .mount(&server)
            .await;

        let _owner = mount(&server);
        let filters = RwSignal::new(RecipeFilters::default());
        let feed = use_recipes(filters);
        wait_for("first page", || feed.recipes().len() == 3).await;
        assert!(feed.has_more());
        assert_eq!(feed.total(), 30);

        filters.set(RecipeFilters::category("dessert"));
        wait_for("dessert page", || {
            feed.recipes().iter().map(|r| r.id).collect::<Vec<_>>() == vec![10, 11]
        })
        .await;
        assert!(!feed.has_more());
        assert_eq!(feed.total(), 2);
    })
    .await;
}

#[tokio::test]
async fn test_use_comments_reloads_for_new_recipe() {
    run_local(async {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/recipes/1/comments"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!([comment_json(1), comment_json(2)])),
            )
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/recipes/2/comments"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([comment_json(3)]))
                    .set_delay(Duration::from_millis(300)),
            )
            .expect(1)
            .mount(&server)
            .await;

        let _owner = mount(&server);
        let recipe_id = RwSignal::new(1u64);
        let thread = use_comments(recipe_id);
        wait_for("first thread", || thread.comments().len() == 2).await;

        recipe_id.set(2);
        wait_for("first thread dropped", || thread.comments().is_empty() && thread.is_loading()).await;
        wait_for("second thread", || {
            thread.comments().iter().map(|c| c.id).collect::<Vec<_>>() == vec![3]
        })
        .await;
    })
    .await;
}
