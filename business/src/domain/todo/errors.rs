#[derive(Debug, thiserror::Error)]
pub enum TodoError {
    #[error("todo.title_empty")]
    TitleEmpty,
    #[error("todo.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
