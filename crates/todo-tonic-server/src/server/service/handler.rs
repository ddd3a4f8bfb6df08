//! gRPC service implementation for todo CRUD.
//!
//! This module defines [`TodoApi`], the concrete implementation of the
//! [`TodoService`] gRPC service defined in the protobuf specification.
//! Every RPC maps to exactly one [`TodoStore`] operation; this layer only
//! unwraps requests, converts the domain entity to its proto message, and
//! maps store errors onto `tonic::Status`.

use crate::server::config::ServerConfig;
use crate::server::store::{PageLimits, Todo, TodoStore};
use std::sync::Arc;
use todo_tonic_core::proto::{self, todo_service_server::TodoService};
use tonic::{Request, Response, Status};

/// gRPC front end for the todo store.
///
/// Implements the [`TodoService`] service defined in the protobuf schema.
/// The store is shared behind an [`Arc`] so the service can be cloned
/// cheaply per connection while all clones observe the same state.
#[derive(Clone)]
pub struct TodoApi {
    store: Arc<TodoStore>,
}

impl TodoApi {
    /// Creates the service with a fresh, empty store configured from the
    /// server's page-size bounds.
    pub fn new(config: ServerConfig) -> Self {
        let limits = PageLimits {
            default_page_size: config.default_page_size,
            max_page_size: config.max_page_size,
        };
        Self {
            store: Arc::new(TodoStore::new(limits)),
        }
    }
}

fn to_proto(todo: Todo) -> proto::Todo {
    proto::Todo {
        id: todo.id,
        title: todo.title,
        description: todo.description,
        completed: todo.completed,
        created_at: Some(todo.created_at.into()),
        updated_at: Some(todo.updated_at.into()),
    }
}

#[tonic::async_trait]
impl TodoService for TodoApi {
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    async fn create_todo(
        &self,
        req: Request<proto::CreateTodoRequest>,
    ) -> Result<Response<proto::CreateTodoResponse>, Status> {
        let req = req.into_inner();
        let todo = self.store.create(req.title, req.description);

        #[cfg(feature = "tracing")]
        tracing::debug!("Created todo {}", todo.id);

        Ok(Response::new(proto::CreateTodoResponse {
            todo: Some(to_proto(todo)),
        }))
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(id = %req.get_ref().id)))]
    async fn get_todo(
        &self,
        req: Request<proto::GetTodoRequest>,
    ) -> Result<Response<proto::GetTodoResponse>, Status> {
        let todo = self.store.get(&req.get_ref().id)?;

        Ok(Response::new(proto::GetTodoResponse {
            todo: Some(to_proto(todo)),
        }))
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(page_size = req.get_ref().page_size)))]
    async fn list_todos(
        &self,
        req: Request<proto::ListTodosRequest>,
    ) -> Result<Response<proto::ListTodosResponse>, Status> {
        let req = req.into_inner();
        let page = self.store.list(req.page_size, &req.page_token)?;

        Ok(Response::new(proto::ListTodosResponse {
            todos: page.todos.into_iter().map(to_proto).collect(),
            next_page_token: page.next_page_token,
        }))
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(id = %req.get_ref().id)))]
    async fn update_todo(
        &self,
        req: Request<proto::UpdateTodoRequest>,
    ) -> Result<Response<proto::UpdateTodoResponse>, Status> {
        let req = req.into_inner();
        let todo = self
            .store
            .update(&req.id, req.title, req.description, req.completed)?;

        Ok(Response::new(proto::UpdateTodoResponse {
            todo: Some(to_proto(todo)),
        }))
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(id = %req.get_ref().id)))]
    async fn delete_todo(
        &self,
        req: Request<proto::DeleteTodoRequest>,
    ) -> Result<Response<proto::DeleteTodoResponse>, Status> {
        let id = req.into_inner().id;
        self.store.delete(&id)?;

        #[cfg(feature = "tracing")]
        tracing::debug!("Deleted todo {id}");

        Ok(Response::new(proto::DeleteTodoResponse {}))
    }
}
