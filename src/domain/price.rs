#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Price(i32);

impl TryFrom<i64> for Price {
    type Error = InvalidPrice;
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value <= 0 {
            return Err(InvalidPrice::NotPositive);
        }
        i32::try_from(value)
            .map(Self)
            .map_err(|_| InvalidPrice::TooLarge)
    }
}

impl From<Price> for i32 {
    fn from(price: Price) -> Self {
        price.0
    }
}

#[derive(thiserror::Error, Debug)]
pub enum InvalidPrice {
    #[error("price must be greater than 0")]
    NotPositive,
    #[error("price is too large")]
    TooLarge,
}
