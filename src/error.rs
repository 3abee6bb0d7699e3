#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error("failed to write to sink: {0}")]
    SinkWrite(#[from] std::io::Error),
    #[error("unsupported object type: {0}")]
    UnsupportedObjectType(&'static str),
    #[error("property {key}: unsupported value type {type_name}")]
    UnsupportedValueType {
        key: String,
        type_name: &'static str,
    },
}

impl EncodeError {
    #[inline]
    pub fn is_sink_error(&self) -> bool {
        matches!(self, Self::SinkWrite(_))
    }
}
