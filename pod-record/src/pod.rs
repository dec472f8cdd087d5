use serde::Deserialize;
use serde::Serialize;

use crate::ValidationError;

/// `Pod` names a single workload entry: which object it is and where it
/// runs. Every field is always present; a field left unset at
/// construction holds the empty string.
///
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pod {
    #[serde(default)]
    pub name: String,
    /// namespace the workload lives in, empty for cluster-scoped entries
    ///
    #[serde(default)]
    pub namespace: String,
    /// free-form workload kind, e.g. "Deployment"
    ///
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub cluster: String,
}

impl Pod {
    /// Create a `Pod` with the given `name`; every other field is empty.
    ///
    pub fn new(name: impl ToString) -> Self {
        let name = name.to_string();
        Self { name, ..default() }
    }

    /// Create a `Pod` for given `name` and `namespace`
    ///
    pub fn namespaced(name: impl ToString, namespace: impl ToString) -> Self {
        Self {
            namespace: namespace.to_string(),
            ..Self::new(name)
        }
    }

    /// Set namespace for this `Pod`
    ///
    pub fn namespace(self, namespace: impl ToString) -> Self {
        let namespace = namespace.to_string();
        Self { namespace, ..self }
    }

    /// Set workload kind for this `Pod`
    ///
    pub fn kind(self, kind: impl ToString) -> Self {
        let kind = kind.to_string();
        Self { kind, ..self }
    }

    /// Set cluster for this `Pod`
    ///
    pub fn cluster(self, cluster: impl ToString) -> Self {
        let cluster = cluster.to_string();
        Self { cluster, ..self }
    }

    /// Decode a `Pod` from a JSON document.
    ///
    /// Fields missing from the document default to the empty string.
    /// A field holding a non-string value (including `null`) rejects
    /// the whole document with [`ValidationError`]; unknown fields are
    /// ignored.
    ///
    pub fn from_json(data: &str) -> Result<Self, ValidationError> {
        serde_json::from_str(data).map_err(ValidationError::from)
    }

    /// Decode a `Pod` from an already-parsed JSON value.
    ///
    pub fn from_value(value: serde_json::Value) -> Result<Self, ValidationError> {
        serde_json::from_value(value).map_err(ValidationError::from)
    }
}

fn default<T: Default>() -> T {
    T::default()
}
