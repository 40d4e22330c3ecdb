#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(i32);

impl TryFrom<i64> for SubscriptionId {
    type Error = InvalidSubscriptionId;
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value <= 0 {
            return Err(InvalidSubscriptionId::NotPositive);
        }
        i32::try_from(value)
            .map(Self)
            .map_err(|_| InvalidSubscriptionId::OutOfRange)
    }
}

impl From<SubscriptionId> for i32 {
    fn from(id: SubscriptionId) -> Self {
        id.0
    }
}

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(thiserror::Error, Debug)]
pub enum InvalidSubscriptionId {
    #[error("id must be greater than 0")]
    NotPositive,
    #[error("id is out of range")]
    OutOfRange,
}
