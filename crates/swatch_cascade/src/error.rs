use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CascadeError {
    #[error("unknown breakpoint `{0}`")]
    UnknownBreakpoint(String),

    #[error("unknown token `{0}`")]
    UnknownToken(String),

    #[error("breakpoint hierarchy is empty")]
    EmptyHierarchy,

    #[error("duplicate breakpoint `{0}`")]
    DuplicateBreakpoint(String),

    #[error("breakpoint `{0}` needs a max_width")]
    MissingWidth(String),

    #[error("breakpoint `{id}` ({width}px) must be narrower than its parent ({parent_width}px)")]
    WidthOrder {
        id: String,
        width: u32,
        parent_width: u32,
    },
}
