use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("failed to load sprite `{key}` from {path}")]
    SpriteLoad {
        key: &'static str,
        path: String,
        #[source]
        source: macroquad::Error,
    },
    #[error("screen capture returned no pixels")]
    EmptyCapture,
}
