use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum TangleError {
    #[error("failed to read font file {path}")]
    FontRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("font data could not be parsed")]
    InvalidFont(#[from] ab_glyph::InvalidFont),
}
