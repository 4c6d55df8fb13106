use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for document operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source text and file name of a document being parsed.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error labelled at the position serde_json reported.
    pub fn parse_error(&self, source: serde_json::Error) -> Box<Error> {
        let span = offset_of(&self.src, source.line(), source.column()).map(|at| {
            let len = usize::from(at < self.src.len());
            SourceSpan::from((at, len))
        });
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }
}

/// Convert a 1-based line and column into a byte offset.
fn offset_of(src: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }

    let line_start: usize = src
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    let offset = line_start + column.saturating_sub(1);
    Some(offset.min(src.len()))
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(
        code(quill::document::io),
        help("pass the path of a JSON API description with --input")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse API description")]
    #[diagnostic(code(quill::document::parse))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("{source}")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_of_first_line() {
        assert_eq!(offset_of("{\"a\": 1}", 1, 3), Some(2));
    }

    #[test]
    fn test_offset_of_later_line() {
        let src = "{\n  \"a\": x\n}";
        assert_eq!(offset_of(src, 2, 8), Some(9));
        assert_eq!(&src[9..10], "x");
    }

    #[test]
    fn test_offset_of_clamps_to_end() {
        assert_eq!(offset_of("{}", 9, 9), Some(2));
        assert_eq!(offset_of("{}", 0, 0), None);
    }
}
