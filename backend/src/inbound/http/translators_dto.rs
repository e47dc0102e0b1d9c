//! Wire shapes for the translator endpoints.
//!
//! Request bodies carry every mutable field plus the nested address; response
//! bodies add the translator id, the address id and the owner's user id.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{AddressFields, Error, Translator, TranslatorDraft, TranslatorProfile};
use crate::inbound::http::validation::validation_error;

/// Address fields accepted on create and update.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddressRequestBody {
    #[schema(example = "12 Rue de Marseille")]
    pub street: String,
    #[schema(example = "Tunis")]
    pub city: String,
    #[schema(example = "Tunis")]
    pub state: String,
    #[schema(example = "1001")]
    pub postal_code: String,
}

/// Translator payload accepted by `POST /create` and `PUT /update/{id}`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TranslatorRequestBody {
    #[schema(minimum = 18, maximum = 120, example = 34)]
    pub age: i32,
    #[schema(example = "female")]
    pub gender: String,
    #[schema(example = "+216 20 123 456")]
    pub phone: String,
    #[schema(example = "09876543")]
    pub cin: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub description: String,
    #[schema(minimum = 0, example = 40.0)]
    pub price: f64,
    pub address: AddressRequestBody,
}

impl TryFrom<TranslatorRequestBody> for TranslatorDraft {
    type Error = Error;

    fn try_from(body: TranslatorRequestBody) -> Result<Self, Self::Error> {
        let TranslatorRequestBody {
            age,
            gender,
            phone,
            cin,
            image,
            description,
            price,
            address,
        } = body;
        let profile = TranslatorProfile {
            age,
            gender,
            phone,
            cin,
            image,
            description,
            price,
        };
        let address = AddressFields {
            street: address.street,
            city: address.city,
            state: address.state,
            postal_code: address.postal_code,
        };
        TranslatorDraft::new(profile, address).map_err(|errors| validation_error(&errors))
    }
}

/// Address as returned to clients, including its identifier.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddressResponseBody {
    pub id: i64,
    pub street: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
}

/// Translator as returned to clients.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TranslatorResponseBody {
    pub id: i64,
    pub owner_id: i64,
    pub age: i32,
    pub gender: String,
    pub phone: String,
    pub cin: String,
    pub image: String,
    pub description: String,
    pub price: f64,
    pub address: AddressResponseBody,
}

impl From<&Translator> for TranslatorResponseBody {
    fn from(translator: &Translator) -> Self {
        let profile = translator.profile();
        let address = translator.address();
        Self {
            id: translator.id().get(),
            owner_id: translator.owner().get(),
            age: profile.age,
            gender: profile.gender.clone(),
            phone: profile.phone.clone(),
            cin: profile.cin.clone(),
            image: profile.image.clone(),
            description: profile.description.clone(),
            price: profile.price,
            address: AddressResponseBody {
                id: address.id().get(),
                street: address.street().to_owned(),
                city: address.city().to_owned(),
                state: address.state().to_owned(),
                postal_code: address.postal_code().to_owned(),
            },
        }
    }
}

impl From<Translator> for TranslatorResponseBody {
    fn from(translator: Translator) -> Self {
        Self::from(&translator)
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};
    use serde_json::json;

    use super::*;
    use crate::domain::{Address, AddressId, ErrorCode, TranslatorId, UserId};

    #[fixture]
    fn body() -> TranslatorRequestBody {
        serde_json::from_value(json!({
            "age": 34,
            "gender": "female",
            "phone": "+216 20 123 456",
            "cin": "09876543",
            "price": 40.0,
            "address": {
                "street": "12 Rue de Marseille",
                "city": "Tunis",
                "state": "Tunis",
                "postalCode": "1001"
            }
        }))
        .expect("request body parses")
    }

    #[rstest]
    fn optional_text_fields_default_to_empty(body: TranslatorRequestBody) {
        assert!(body.image.is_empty());
        assert!(body.description.is_empty());
        assert_eq!(body.address.postal_code, "1001");
    }

    #[rstest]
    fn valid_body_becomes_draft(body: TranslatorRequestBody) {
        let draft = TranslatorDraft::try_from(body).expect("valid body");
        assert_eq!(draft.profile().cin, "09876543");
        assert_eq!(draft.address().city, "Tunis");
    }

    #[rstest]
    fn invalid_body_reports_every_violation(mut body: TranslatorRequestBody) {
        body.price = -1.0;
        body.address.street = "   ".to_owned();

        let err = TranslatorDraft::try_from(body).expect_err("invalid body");

        assert_eq!(err.code(), ErrorCode::InvalidRequest);
        assert_eq!(
            err.details().expect("details")["errors"],
            json!([
                "price must be a finite, non-negative number",
                "address.street must not be blank"
            ])
        );
    }

    #[rstest]
    fn response_exposes_owner_and_address_ids(body: TranslatorRequestBody) {
        let (profile, fields) = TranslatorDraft::try_from(body)
            .expect("valid body")
            .into_parts();
        let translator = Translator::new(
            TranslatorId::new(2).expect("valid id"),
            UserId::new(5).expect("valid id"),
            Address::new(AddressId::new(9).expect("valid id"), fields),
            profile,
        );

        let value = serde_json::to_value(TranslatorResponseBody::from(&translator))
            .expect("response serialises");

        assert_eq!(value["id"], 2);
        assert_eq!(value["ownerId"], 5);
        assert_eq!(value["address"]["id"], 9);
        assert_eq!(value["address"]["postalCode"], "1001");
    }
}
