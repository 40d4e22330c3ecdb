use unicode_segmentation::UnicodeSegmentation;

const MAX_GRAPHEMES: usize = 255;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceName(String);

impl TryFrom<String> for ServiceName {
    type Error = InvalidServiceName;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.trim().is_empty() {
            return Err(InvalidServiceName::Empty);
        }
        if value.graphemes(true).count() > MAX_GRAPHEMES {
            return Err(InvalidServiceName::TooLong);
        }
        Ok(Self(value))
    }
}

impl AsRef<str> for ServiceName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(thiserror::Error, Debug)]
pub enum InvalidServiceName {
    #[error("service name is empty")]
    Empty,
    #[error("service name is longer than 255 characters")]
    TooLong,
}
