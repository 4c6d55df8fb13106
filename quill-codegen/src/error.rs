use std::path::PathBuf;

use miette::Diagnostic;
use quill_core::HttpMethod;
use thiserror::Error;

/// Result type for generation runs.
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal errors. Any of these aborts the whole run.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("operation {method} {path} has no operation id")]
    #[diagnostic(
        code(quill::empty_operation_id),
        help("give every operation a non-empty operationId")
    )]
    EmptyOperationId { method: HttpMethod, path: String },

    #[error("'{id}' cannot be used as a method name")]
    #[diagnostic(
        code(quill::reserved_operation_id),
        help("'{id}' ({method} {path}) is a reserved word of the target; rename the operationId")
    )]
    ReservedOperationId {
        id: String,
        method: HttpMethod,
        path: String,
    },

    #[error("unknown profile '{name}'")]
    #[diagnostic(code(quill::unknown_profile), help("available profiles: {available}"))]
    UnknownProfile { name: String, available: String },

    #[error("phase '{phase}' ran before the IR was built")]
    #[diagnostic(code(quill::ir_not_built))]
    IrNotBuilt { phase: &'static str },

    #[error("failed to parse configuration")]
    #[diagnostic(code(quill::config), help("options belong in an [options] table"))]
    ConfigParse {
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid option '{pair}'")]
    #[diagnostic(code(quill::config), help("options are written as key=value"))]
    InvalidOption { pair: String },

    #[error("failed to load templates from '{path}'")]
    #[diagnostic(code(quill::template_load))]
    TemplateLoad {
        path: PathBuf,
        #[source]
        source: tera::Error,
    },

    #[error("failed to render template '{template}'")]
    #[diagnostic(code(quill::render))]
    Render {
        template: String,
        #[source]
        source: tera::Error,
    },

    #[error("failed to write '{path}'")]
    #[diagnostic(code(quill::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize generation state")]
    #[diagnostic(code(quill::serialize))]
    Serialize(#[from] serde_json::Error),

    #[error("invalid API description")]
    #[diagnostic(code(quill::document))]
    Document(#[from] Box<quill_document::Error>),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
