use std::fmt;
use std::marker::PhantomData;
use serde::de::DeserializeOwned;
use serde::Serialize;
use crate::serializer::serializer_trait::Serializer;

///
/// A [Serializer] for types that implement serde's traits directly.
///
pub struct SerdeJsonSerializer<T> {
    // fn() -> T keeps the serializer Send + Sync independent of T
    phantom: PhantomData<fn() -> T>
}

impl<T> SerdeJsonSerializer<T> {
    pub fn new() -> Self {
        Self { phantom: PhantomData }
    }
}

impl<T> Default for SerdeJsonSerializer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for SerdeJsonSerializer<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "SerdeJsonSerializer<{}>", std::any::type_name::<T>())
    }
}

impl<T> Serializer for SerdeJsonSerializer<T> where T: Serialize + DeserializeOwned {
    type Object = T;
    type Error = serde_json::Error;

    fn serialize(&self, object: &T) -> Result<String, serde_json::Error> {
        serde_json::to_string(object)
    }

    fn deserialize(&self, json: &str) -> Result<T, serde_json::Error> {
        serde_json::from_str(json)
    }
}
