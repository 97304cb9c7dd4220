//! REST Task Store
//!
//! `TaskStore` over HTTP. Uses the browser fetch API on wasm.

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::TaskStore;
use crate::config::BoardConfig;
use crate::error::StoreError;
use crate::models::Task;

/// Characters escaped when a task id is used as a path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Debug, Clone)]
pub struct RestTaskStore {
    client: reqwest::Client,
    tasks_url: String,
}

impl RestTaskStore {
    pub fn new(config: &BoardConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            tasks_url: config.tasks_url(),
        }
    }

    /// `{tasks_url}/{id}`
    fn task_url(&self, id: &str) -> String {
        format!("{}/{}", self.tasks_url, utf8_percent_encode(id, PATH_SEGMENT))
    }
}

fn network(err: reqwest::Error) -> StoreError {
    StoreError::Network(err.to_string())
}

/// Map a non-2xx status to `Server`, then decode the JSON body
async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, StoreError> {
    let status = response.status();
    if !status.is_success() {
        return Err(StoreError::Server {
            status: status.as_u16(),
        });
    }
    response
        .json::<T>()
        .await
        .map_err(|e| StoreError::Decode(e.to_string()))
}

#[async_trait(?Send)]
impl TaskStore for RestTaskStore {
    async fn list(&self) -> Result<Vec<Task>, StoreError> {
        debug!("[API] GET {}", self.tasks_url);
        let response = self
            .client
            .get(&self.tasks_url)
            .send()
            .await
            .map_err(network)?;
        decode(response).await
    }

    async fn create(&self, task: &Task) -> Result<Task, StoreError> {
        debug!("[API] POST {} (client id {:?})", self.tasks_url, task.id);
        let response = self
            .client
            .post(&self.tasks_url)
            .json(task)
            .send()
            .await
            .map_err(network)?;
        decode(response).await
    }

    async fn update(&self, task: &Task) -> Result<Task, StoreError> {
        let url = self.task_url(&task.id);
        debug!("[API] PUT {}", url);
        let response = self
            .client
            .put(&url)
            .json(task)
            .send()
            .await
            .map_err(network)?;
        decode(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;

    fn store_for(server: &mockito::Server) -> RestTaskStore {
        RestTaskStore::new(&BoardConfig {
            api_base: server.url(),
            ..Default::default()
        })
    }

    fn sample() -> Task {
        Task {
            id: "1".to_string(),
            title: "Fix bug".to_string(),
            status: "To Do".to_string(),
            priority: "High".to_string(),
            assigned_to: "A".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_task_url_escapes_segment() {
        let store = RestTaskStore::new(&BoardConfig::default());
        assert_eq!(store.task_url("1"), "http://localhost:3000/api/tasks/1");
        assert_eq!(store.task_url("a/b c"), "http://localhost:3000/api/tasks/a%2Fb%20c");
    }

    #[tokio::test]
    async fn test_list_decodes_tasks() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/tasks")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!([{
                    "id": "1", "title": "Fix bug", "status": "To Do", "priority": "High",
                    "assignedTo": "A", "description": "", "endDate": "", "comments": []
                }])
                .to_string(),
            )
            .create_async()
            .await;

        let tasks = store_for(&server).list().await.expect("list failed");

        mock.assert_async().await;
        assert_eq!(tasks, vec![sample()]);
    }

    #[tokio::test]
    async fn test_list_non_2xx_is_server_failure() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/tasks")
            .with_status(503)
            .create_async()
            .await;

        let err = store_for(&server).list().await.unwrap_err();
        assert_eq!(err, StoreError::Server { status: 503 });
    }

    #[tokio::test]
    async fn test_list_bad_body_is_decode_failure() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/tasks")
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        let err = store_for(&server).list().await.unwrap_err();
        assert!(matches!(err, StoreError::Decode(_)));
    }

    #[tokio::test]
    async fn test_create_posts_full_record() {
        let mut server = mockito::Server::new_async().await;
        let candidate = Task {
            id: "1700000000000".to_string(),
            title: "New".to_string(),
            status: "Backlog".to_string(),
            ..Default::default()
        };
        let mock = server
            .mock("POST", "/api/tasks")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(serde_json::to_value(&candidate).unwrap()))
            .with_status(201)
            .with_body(json!({"id": "abc", "title": "New", "status": "Backlog"}).to_string())
            .create_async()
            .await;

        let stored = store_for(&server).create(&candidate).await.expect("create failed");

        mock.assert_async().await;
        assert_eq!(stored.id, "abc");
        assert_eq!(stored.title, "New");
    }

    #[tokio::test]
    async fn test_update_puts_by_id() {
        let mut server = mockito::Server::new_async().await;
        let mut task = sample();
        task.status = "Done".to_string();
        let mock = server
            .mock("PUT", "/api/tasks/1")
            .match_body(Matcher::PartialJson(json!({"id": "1", "status": "Done"})))
            .with_status(200)
            .with_body(serde_json::to_string(&task).unwrap())
            .create_async()
            .await;

        let stored = store_for(&server).update(&task).await.expect("update failed");

        mock.assert_async().await;
        assert_eq!(stored, task);
    }

    #[tokio::test]
    async fn test_unreachable_server_is_network_failure() {
        let store = RestTaskStore::new(&BoardConfig {
            api_base: "http://127.0.0.1:1".to_string(),
            ..Default::default()
        });

        let err = store.list().await.unwrap_err();
        assert!(matches!(err, StoreError::Network(_)));
    }
}
