//! Access-control list attached to Splunk knowledge objects.
//!
//! Invariants:
//! - On the wire, `perms.read` and `perms.write` are single comma-joined values,
//!   not repeated keys.
//! - Empty or false fields are omitted from the ACL form.

use serde::{Deserialize, Serialize};

use crate::form::{Encode, FieldTag, FormEncode, FormParams, FormValue};
use crate::models::feed::{Entry, Feed};
use crate::serde_helpers::{lenient, null_as_default};

/// Read/write role lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Perms {
    #[serde(default, deserialize_with = "lenient")]
    pub read: Vec<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub write: Vec<String>,
}

/// Ownership, sharing and permissions of a knowledge object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Acl {
    #[serde(default, deserialize_with = "lenient")]
    pub app: String,
    #[serde(default, deserialize_with = "lenient")]
    pub can_change_perms: bool,
    #[serde(default, deserialize_with = "lenient")]
    pub can_share_app: bool,
    #[serde(default, deserialize_with = "lenient")]
    pub can_share_global: bool,
    #[serde(default, deserialize_with = "lenient")]
    pub can_share_user: bool,
    #[serde(default, deserialize_with = "lenient")]
    pub can_write: bool,
    #[serde(default, deserialize_with = "lenient")]
    pub owner: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub perms: Perms,
    #[serde(default, deserialize_with = "lenient")]
    pub removable: bool,
    #[serde(default, deserialize_with = "lenient")]
    pub sharing: String,
}

/// Response of an ACL update.
pub type AclFeed = Feed<Entry>;

static ACL_FIELDS: &[FieldTag<Acl>] = &[
    FieldTag {
        name: "app",
        encode: Encode::OmitEmpty,
        get: |a: &Acl| FormValue::from(&a.app),
    },
    FieldTag {
        name: "can_change_perms",
        encode: Encode::OmitEmpty,
        get: |a: &Acl| FormValue::from(&a.can_change_perms),
    },
    FieldTag {
        name: "can_share_app",
        encode: Encode::OmitEmpty,
        get: |a: &Acl| FormValue::from(&a.can_share_app),
    },
    FieldTag {
        name: "can_share_global",
        encode: Encode::OmitEmpty,
        get: |a: &Acl| FormValue::from(&a.can_share_global),
    },
    FieldTag {
        name: "can_share_user",
        encode: Encode::OmitEmpty,
        get: |a: &Acl| FormValue::from(&a.can_share_user),
    },
    FieldTag {
        name: "can_write",
        encode: Encode::OmitEmpty,
        get: |a: &Acl| FormValue::from(&a.can_write),
    },
    FieldTag {
        name: "owner",
        encode: Encode::OmitEmpty,
        get: |a: &Acl| FormValue::from(&a.owner),
    },
    FieldTag {
        name: "perms.read",
        encode: Encode::OmitEmpty,
        get: |a: &Acl| FormValue::from(&a.perms.read),
    },
    FieldTag {
        name: "perms.write",
        encode: Encode::OmitEmpty,
        get: |a: &Acl| FormValue::from(&a.perms.write),
    },
    FieldTag {
        name: "removable",
        encode: Encode::OmitEmpty,
        get: |a: &Acl| FormValue::from(&a.removable),
    },
    FieldTag {
        name: "sharing",
        encode: Encode::OmitEmpty,
        get: |a: &Acl| FormValue::from(&a.sharing),
    },
];

impl FormEncode for Acl {
    fn form_fields() -> &'static [FieldTag<Self>] {
        ACL_FIELDS
    }

    fn to_form(&self) -> FormParams {
        let mut form = crate::form::encode(self, ACL_FIELDS);
        form.join_values("perms.read", ",");
        form.join_values("perms.write", ",");
        form
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn acl() -> Acl {
        Acl {
            app: "search".to_string(),
            owner: "admin".to_string(),
            sharing: "app".to_string(),
            perms: Perms {
                read: vec!["a".to_string(), "b".to_string()],
                write: vec![],
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_perms_are_comma_joined() {
        let form = acl().to_form();
        assert_eq!(form.get_all("perms.read"), vec!["a,b"]);
    }

    #[test]
    fn test_empty_perms_are_omitted() {
        let form = acl().to_form();
        assert!(!form.contains_key("perms.write"));
    }

    #[test]
    fn test_false_flags_are_omitted() {
        let form = acl().to_form();
        assert!(!form.contains_key("can_write"));
        assert!(!form.contains_key("removable"));
        assert_eq!(form.get("owner"), Some("admin"));
        assert_eq!(form.get("sharing"), Some("app"));
    }

    #[test]
    fn test_decode_splunk_acl() {
        let json = r#"{
            "app": "search",
            "can_change_perms": true,
            "can_list": true,
            "can_share_app": true,
            "can_share_global": true,
            "can_share_user": true,
            "can_write": true,
            "modifiable": true,
            "owner": "admin",
            "perms": { "read": ["*"], "write": ["admin", "power"] },
            "removable": true,
            "sharing": "app"
        }"#;
        let acl: Acl = serde_json::from_str(json).unwrap();
        assert!(acl.can_change_perms);
        assert_eq!(acl.perms.read, vec!["*"]);
        assert_eq!(acl.perms.write, vec!["admin", "power"]);
    }

    #[test]
    fn test_decode_null_perms() {
        let acl: Acl =
            serde_json::from_str(r#"{ "owner": "nobody", "perms": null, "sharing": "global" }"#)
                .unwrap();
        assert!(acl.perms.read.is_empty());
        assert_eq!(acl.sharing, "global");
    }
}
