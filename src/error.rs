use std::path::PathBuf;

/// Failure to turn a file on disk into a grayscale image.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("cannot open image {path:?}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot decode image {path:?}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("image {path:?} has no pixels")]
    Empty { path: PathBuf },
}
