use serde::Serialize;
use serde::de::DeserializeOwned;

/// Convert one serializable shape into another through its JSON form.
///
/// Handy for turning a read result into an update input: fields with the
/// same wire name carry over, the rest take their defaults.
pub fn convert_object<T, U>(from: &U) -> serde_json::Result<T>
where
    T: DeserializeOwned,
    U: Serialize + ?Sized,
{
    serde_json::to_value(from).and_then(serde_json::from_value)
}
