// File: crates/linechart-core/src/error.rs
// Summary: Error kinds raised while building or rendering a chart.

use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

/// Which coordinate axis an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisKind {
    X,
    Y,
}

impl std::fmt::Display for AxisKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AxisKind::X => f.write_str("x"),
            AxisKind::Y => f.write_str("y"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// All values on an axis are equal, so no pixel scale can be derived.
    #[error("degenerate {axis} range: every value equals {value}")]
    DegenerateRange { axis: AxisKind, value: f64 },

    #[error("drawing surface failure: {0}")]
    Surface(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("invalid image data uri: {0}")]
    Decode(#[from] base64::DecodeError),
}

impl ChartError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }
}
