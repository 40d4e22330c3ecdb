use uuid::Uuid;

const UUID_LENGTH: usize = 36;

/// `user_id` as it arrives on the wire: a numeric key or the user's UUID.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(untagged)]
pub enum RawUserReference {
    Id(i64),
    Uuid(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserReference {
    Id(i32),
    Uuid(Uuid),
}

impl TryFrom<RawUserReference> for UserReference {
    type Error = InvalidUserReference;
    fn try_from(value: RawUserReference) -> Result<Self, Self::Error> {
        match value {
            RawUserReference::Id(id) => {
                if id <= 0 {
                    return Err(InvalidUserReference::NotPositive);
                }
                i32::try_from(id)
                    .map(Self::Id)
                    .map_err(|_| InvalidUserReference::OutOfRange)
            }
            RawUserReference::Uuid(raw) => {
                if raw.len() != UUID_LENGTH {
                    return Err(InvalidUserReference::MalformedUuid);
                }
                Uuid::parse_str(&raw)
                    .map(Self::Uuid)
                    .map_err(|_| InvalidUserReference::MalformedUuid)
            }
        }
    }
}

impl std::fmt::Display for UserReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Id(id) => id.fmt(f),
            Self::Uuid(uuid) => uuid.fmt(f),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum InvalidUserReference {
    #[error("user id must be greater than 0")]
    NotPositive,
    #[error("user id is out of range")]
    OutOfRange,
    #[error("user uuid must be a 36 character UUID")]
    MalformedUuid,
}
