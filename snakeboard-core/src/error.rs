use thiserror::Error;

/// Failure decoding or validating a board document before rendering.
#[derive(Debug, Error)]
pub enum BoardError {
    #[error("board dimensions must be positive (got {width}x{height})")]
    ZeroDimension { width: u32, height: u32 },
    #[error("cell ({x}, {y}) lies outside the {width}x{height} board")]
    CellOutOfRange {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },
    #[error("focus entity `{0}` matches no entity on the board")]
    UnknownFocusEntity(String),
    #[error("invalid board JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Failure producing a scene. Rendering either yields a complete scene or
/// one of these; it never emits a partial tree.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("focus entity `{0}` matches no entity on the board")]
    UnknownFocusEntity(String),
    #[error("entity body palette is empty")]
    EmptyPalette,
    #[error(transparent)]
    InvalidBoard(#[from] BoardError),
}
