use serde::{Deserialize, Serialize};

/// Error body returned by the backend on non-2xx responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Error {
    pub error: String,
}

/// Body of a successful login or registration.
///
/// `access_token` stays optional so a 2xx response with an unexpected body
/// decodes instead of erroring; the client treats a missing token as failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Auth {
    #[serde(default)]
    pub access_token: Option<String>,
}

/// A rental listing. Every field beyond the id has a documented default so
/// partial payloads render with fallbacks instead of failing to decode.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Place {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub owner: Option<PlaceUser>,
    #[serde(default)]
    pub amenities: Vec<Amenity>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlaceUser {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Amenity {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Review {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub place_id: String,
    #[serde(default)]
    pub user: Option<PlaceUser>,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub rating: i32,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn partial_place_decodes_with_defaults() {
        let place: Place = serde_json::from_str(r#"{"id":"1","title":"Loft","price":80}"#)
            .expect("failed to deserialize");
        assert_eq!(place.title.as_deref(), Some("Loft"));
        assert_eq!(place.price, Some(80.0));
        assert!(place.description.is_none());
        assert!(place.owner.is_none());
        assert!(place.amenities.is_empty());
    }

    #[test]
    fn empty_place_decodes() {
        let place: Place = serde_json::from_str("{}").expect("failed to deserialize");
        assert!(place.id.is_empty());
        assert!(place.price.is_none());
    }

    #[test]
    fn review_without_user_decodes() {
        let review: Review =
            serde_json::from_str(r#"{"id":"r1","place_id":"1","text":"Great place!","rating":5}"#)
                .expect("failed to deserialize");
        assert!(review.user.is_none());
        assert_eq!(review.rating, 5);
    }

    #[test]
    fn auth_without_token_decodes() {
        let auth: Auth = serde_json::from_str(r#"{"msg":"oops"}"#).expect("failed to deserialize");
        assert!(auth.access_token.is_none());
    }
}
