use crate::routes::CreateSubscriptionBody;

use super::{Price, ServiceName, UserReference, ValidationErrors};

const REQUIRED: &str = "is required";

#[derive(Debug)]
pub struct NewSubscription {
    pub user: UserReference,
    pub service_name: ServiceName,
    pub price: Price,
}

impl TryFrom<CreateSubscriptionBody> for NewSubscription {
    type Error = ValidationErrors;

    fn try_from(body: CreateSubscriptionBody) -> Result<Self, Self::Error> {
        let mut errors = ValidationErrors::new();
        let user = match body.user_id {
            Some(raw) => errors.collect("user_id", UserReference::try_from(raw)),
            None => {
                errors.push("user_id", REQUIRED);
                None
            }
        };
        let service_name = match body.service_name {
            Some(raw) => {
                errors.collect("service_name", ServiceName::try_from(raw))
            }
            None => {
                errors.push("service_name", REQUIRED);
                None
            }
        };
        let price = match body.price {
            Some(raw) => errors.collect("price", Price::try_from(raw)),
            None => {
                errors.push("price", REQUIRED);
                None
            }
        };
        match (user, service_name, price) {
            (Some(user), Some(service_name), Some(price)) => Ok(Self {
                user,
                service_name,
                price,
            }),
            _ => Err(errors),
        }
    }
}
