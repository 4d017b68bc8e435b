use crate::schema::ArgKind;
use playerinv_core::GridError;
use thiserror::Error;

/// Errors surfaced to the host when a placeholder cannot be resolved.
///
/// An absent player or an empty slot is never an error; these cover
/// caller and configuration mistakes only.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaceholderError {
    /// The slot argument does not address the main grid.
    #[error(transparent)]
    Grid(#[from] GridError),

    /// A required positional argument was not supplied.
    #[error("missing argument #{index} `{name}`")]
    MissingArgument {
        /// Zero-based argument position.
        index: usize,
        /// Declared argument name.
        name: String,
    },

    /// A positional argument had the wrong type.
    #[error("argument #{index} `{name}` must be {expected}, got `{found}`")]
    ArgumentType {
        /// Zero-based argument position.
        index: usize,
        /// Declared argument name.
        name: String,
        /// Declared kind.
        expected: ArgKind,
        /// Rendered value that was supplied.
        found: String,
    },

    /// No declared overload accepts the supplied arguments.
    #[error("no overload of `{placeholder}` accepts {count} argument(s); usage: {usage}")]
    NoMatchingOverload {
        /// Placeholder name.
        placeholder: String,
        /// Number of arguments supplied.
        count: usize,
        /// Rendered usage of every overload.
        usage: String,
    },

    /// The host matched an overload this placeholder does not implement.
    #[error("placeholder `{placeholder}` has no overload #{overload}")]
    UnsupportedOverload {
        /// Placeholder name.
        placeholder: String,
        /// Overload index passed in.
        overload: usize,
    },

    /// No placeholder is registered under this name.
    #[error("unknown placeholder `{0}`")]
    UnknownPlaceholder(String),

    /// A placeholder with this name is already registered.
    #[error("placeholder `{0}` is already registered")]
    DuplicatePlaceholder(String),

    /// Token text could not be split into a name and arguments.
    #[error("malformed placeholder token `{0}`")]
    MalformedToken(String),
}
