//! Error types for UV planning.

use thiserror::Error;

/// Result type alias using PackError.
pub type Result<T> = std::result::Result<T, PackError>;

/// Main error type for UV planning operations.
#[derive(Error, Debug)]
pub enum PackError {
    /// A shape descriptor carried non-positive dimensions.
    #[error("invalid shape '{name}': dimensions must be positive, got {width}x{depth}x{height}")]
    InvalidShape {
        name: String,
        width: i32,
        depth: i32,
        height: i32,
    },

    /// No arrangement of the shapes fits within the atlas bounds.
    #[error("could not fit all shapes into a texture of width {width}{}", height_suffix(.height))]
    LayoutInfeasible { width: i32, height: Option<i32> },

    /// Failed to parse JSON data.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn height_suffix(height: &Option<i32>) -> String {
    match height {
        Some(h) => format!(" and height {h}"),
        None => String::new(),
    }
}
