pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] pathtree_core::Error),

    #[error("path tree is empty: no records, so no levels to render")]
    EmptyGraph,

    #[error("duplicate path name {name:?} at level {level} (first seen at level {first_level})")]
    DuplicatePath {
        name: String,
        first_level: i64,
        level: i64,
    },

    #[error("invalid render options: {0}")]
    Json(#[from] serde_json::Error),
}
