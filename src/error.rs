/// Failures while turning the model into `GeoJSON` or sending it through geozero.
///
/// Building the model itself cannot fail, only the serialization and processing steps can.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A geozero processor rejected a feature, or collected a feature without a geometry.
    #[error("Error while processing features with geozero: {0}")]
    GeozeroError(#[from] geozero::error::GeozeroError),

    /// `serde_json` could not produce or parse `GeoJSON` text.
    #[error("Error while encoding GeoJSON: {0}")]
    SerdeError(#[from] serde_json::error::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
