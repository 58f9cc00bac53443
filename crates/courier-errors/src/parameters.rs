use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Free-form JSON object attached to an error
///
/// Absent and `null` parameters both decode to the empty object, and the
/// empty object is what gets encoded when nothing was attached. Equality is
/// structural, so key order and whitespace in the source text do not matter.
/// Numbers keep their source text, so values outside the `f64` and `i64`
/// ranges pass through decoding unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Parameters(Map<String, Value>);

/// Parameters given as JSON that is not an object
#[derive(Debug, thiserror::Error)]
pub enum InvalidParameters {
    #[error("parameters are not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("parameters must be a JSON object, got {0}")]
    NotAnObject(&'static str),
}

impl Parameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse parameters from JSON text, e.g. `{"ttl":"10s"}`
    pub fn from_json_str(json: &str) -> Result<Self, InvalidParameters> {
        let value: Value = serde_json::from_str(json)?;
        Self::try_from(value)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Set a parameter, returning the previous value for the key
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    pub fn iter(&self) -> serde_json::map::Iter<'_> {
        self.0.iter()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for Parameters {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<Parameters> for Value {
    fn from(parameters: Parameters) -> Self {
        Self::Object(parameters.0)
    }
}

impl TryFrom<Value> for Parameters {
    type Error = InvalidParameters;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            Value::Null => Ok(Self::default()),
            Value::Bool(_) => Err(InvalidParameters::NotAnObject("a boolean")),
            Value::Number(_) => Err(InvalidParameters::NotAnObject("a number")),
            Value::String(_) => Err(InvalidParameters::NotAnObject("a string")),
            Value::Array(_) => Err(InvalidParameters::NotAnObject("an array")),
        }
    }
}

impl<'a> IntoIterator for &'a Parameters {
    type Item = (&'a String, &'a Value);
    type IntoIter = serde_json::map::Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for Parameters
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<'de> Deserialize<'de> for Parameters {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let map = Option::<Map<String, Value>>::deserialize(deserializer)?;
        Ok(Self(map.unwrap_or_default()))
    }
}
