//! Gelataria record shapes.
//!
//! One entity, four boundary shapes:
//!
//! - [`GelatariaDocument`] is what the store holds (`_id` as `ObjectId`).
//! - [`NewGelataria`] is the creation body; every field is required, so a
//!   missing or non-string field fails typed extraction and surfaces as a
//!   422 before any handler runs.
//! - [`GelatariaUpdate`] is the update body; each field's presence is
//!   distinguished from its absence, and only present fields become part of
//!   the store update.
//! - [`Gelataria`] is the response shape with the identifier as a hex
//!   string.

use mongodb::bson::oid::ObjectId;
use mongodb::bson::Document;
use serde::{Deserialize, Serialize};

/// A gelataria record as stored in the document collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GelatariaDocument {
    /// Assigned by the store on insert; omitted from BSON until then.
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub logo: String,
    pub facebook: String,
    pub tiktok: String,
    pub instagram: String,
    pub form: String,
    pub coupon: String,
}

/// Creation request body. No identifier; the store assigns one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewGelataria {
    pub name: String,
    pub logo: String,
    pub facebook: String,
    pub tiktok: String,
    pub instagram: String,
    pub form: String,
    pub coupon: String,
}

impl From<NewGelataria> for GelatariaDocument {
    fn from(new: NewGelataria) -> Self {
        Self {
            id: None,
            name: new.name,
            logo: new.logo,
            facebook: new.facebook,
            tiktok: new.tiktok,
            instagram: new.instagram,
            form: new.form,
            coupon: new.coupon,
        }
    }
}

/// A set of optional updates to an existing record.
///
/// Absent and `null` fields both mean "no change". The identifier is not
/// updatable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GelatariaUpdate {
    pub name: Option<String>,
    pub logo: Option<String>,
    pub facebook: Option<String>,
    pub tiktok: Option<String>,
    pub instagram: Option<String>,
    pub form: Option<String>,
    pub coupon: Option<String>,
}

impl GelatariaUpdate {
    /// True when no field was provided.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.logo.is_none()
            && self.facebook.is_none()
            && self.tiktok.is_none()
            && self.instagram.is_none()
            && self.form.is_none()
            && self.coupon.is_none()
    }

    /// Builds the `$set` payload containing only the provided fields.
    pub fn set_document(&self) -> Document {
        let mut set = Document::new();
        if let Some(name) = &self.name {
            set.insert("name", name.clone());
        }
        if let Some(logo) = &self.logo {
            set.insert("logo", logo.clone());
        }
        if let Some(facebook) = &self.facebook {
            set.insert("facebook", facebook.clone());
        }
        if let Some(tiktok) = &self.tiktok {
            set.insert("tiktok", tiktok.clone());
        }
        if let Some(instagram) = &self.instagram {
            set.insert("instagram", instagram.clone());
        }
        if let Some(form) = &self.form {
            set.insert("form", form.clone());
        }
        if let Some(coupon) = &self.coupon {
            set.insert("coupon", coupon.clone());
        }
        set
    }

    /// Applies the provided fields to a record in place.
    pub fn apply_to(&self, record: &mut GelatariaDocument) {
        if let Some(name) = &self.name {
            record.name = name.clone();
        }
        if let Some(logo) = &self.logo {
            record.logo = logo.clone();
        }
        if let Some(facebook) = &self.facebook {
            record.facebook = facebook.clone();
        }
        if let Some(tiktok) = &self.tiktok {
            record.tiktok = tiktok.clone();
        }
        if let Some(instagram) = &self.instagram {
            record.instagram = instagram.clone();
        }
        if let Some(form) = &self.form {
            record.form = form.clone();
        }
        if let Some(coupon) = &self.coupon {
            record.coupon = coupon.clone();
        }
    }
}

/// A gelataria record as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gelataria {
    /// External identifier, 24 hex characters.
    pub id: Option<String>,
    pub name: String,
    pub logo: String,
    pub facebook: String,
    pub tiktok: String,
    pub instagram: String,
    pub form: String,
    pub coupon: String,
}

impl From<GelatariaDocument> for Gelataria {
    fn from(doc: GelatariaDocument) -> Self {
        Self {
            id: doc.id.map(|id| id.to_hex()),
            name: doc.name,
            logo: doc.logo,
            facebook: doc.facebook,
            tiktok: doc.tiktok,
            instagram: doc.instagram,
            form: doc.form,
            coupon: doc.coupon,
        }
    }
}

/// A container holding a list of gelataria records.
///
/// List responses are wrapped in a named object rather than a bare top-level
/// array; the wrapper is part of the response-shape contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GelatariaCollection {
    pub gelatarias: Vec<Gelataria>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_update(name: Option<&str>, coupon: Option<&str>) -> GelatariaUpdate {
        GelatariaUpdate {
            name: name.map(String::from),
            coupon: coupon.map(String::from),
            ..GelatariaUpdate::default()
        }
    }

    #[test]
    fn new_gelataria_requires_every_field() {
        let body = json!({
            "name": "Test Gelataria",
            "logo": "http://gelataria.com",
            "facebook": "http://facebook.com",
            "tiktok": "http://tiktok.com",
            "instagram": "http://instagram.com",
            "form": "http://form.com"
        });
        // "coupon" missing
        assert!(serde_json::from_value::<NewGelataria>(body).is_err());
    }

    #[test]
    fn update_accepts_any_subset_of_fields() {
        let update: GelatariaUpdate =
            serde_json::from_value(json!({ "name": "New Name" })).unwrap();
        assert_eq!(update.name.as_deref(), Some("New Name"));
        assert!(update.logo.is_none());
    }

    #[test]
    fn update_treats_null_as_absent() {
        let update: GelatariaUpdate =
            serde_json::from_value(json!({ "name": null, "logo": null })).unwrap();
        assert!(update.is_empty());
    }

    #[test]
    fn set_document_contains_only_provided_fields() {
        let set = sample_update(Some("A"), Some("c")).set_document();
        assert_eq!(set.len(), 2);
        assert_eq!(set.get_str("name").unwrap(), "A");
        assert_eq!(set.get_str("coupon").unwrap(), "c");
        assert!(set.get("logo").is_none());
    }

    #[test]
    fn empty_update_builds_empty_set_document() {
        assert!(GelatariaUpdate::default().set_document().is_empty());
        assert!(GelatariaUpdate::default().is_empty());
    }

    #[test]
    fn apply_to_leaves_unset_fields_untouched() {
        let mut record = GelatariaDocument {
            id: Some(ObjectId::new()),
            name: "A".into(),
            logo: "l".into(),
            facebook: "f".into(),
            tiktok: "t".into(),
            instagram: "i".into(),
            form: "fo".into(),
            coupon: "c".into(),
        };
        sample_update(Some("B"), None).apply_to(&mut record);
        assert_eq!(record.name, "B");
        assert_eq!(record.logo, "l");
        assert_eq!(record.coupon, "c");
    }

    #[test]
    fn document_without_id_omits_underscore_id_field() {
        let doc = GelatariaDocument::from(NewGelataria {
            name: "A".into(),
            logo: "l".into(),
            facebook: "f".into(),
            tiktok: "t".into(),
            instagram: "i".into(),
            form: "fo".into(),
            coupon: "c".into(),
        });
        let bson = mongodb::bson::to_document(&doc).unwrap();
        assert!(bson.get("_id").is_none());
        assert_eq!(bson.get_str("name").unwrap(), "A");
    }

    #[test]
    fn response_shape_renders_identifier_as_hex() {
        let oid = ObjectId::new();
        let doc = GelatariaDocument {
            id: Some(oid),
            name: "A".into(),
            logo: "l".into(),
            facebook: "f".into(),
            tiktok: "t".into(),
            instagram: "i".into(),
            form: "fo".into(),
            coupon: "c".into(),
        };
        let json = serde_json::to_value(Gelataria::from(doc)).unwrap();
        assert_eq!(json["id"], oid.to_hex());
        assert_eq!(json["name"], "A");
    }

    #[test]
    fn list_wrapper_serializes_under_named_key() {
        let collection = GelatariaCollection { gelatarias: vec![] };
        let json = serde_json::to_value(&collection).unwrap();
        assert!(json.get("gelatarias").unwrap().is_array());
    }
}
