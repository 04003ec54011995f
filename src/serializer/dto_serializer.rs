use std::fmt;
use serde::de::DeserializeOwned;
use serde::Serialize;
use crate::serializer::serializer_trait::Serializer;

///
/// Maps a domain type onto a serde-enabled DTO type (the wire shape) and back.
///
/// This allows domain types without serde derives to be verified: the JSON
/// text is produced from and parsed into the DTO.
///
pub trait DtoModule {
    type Domain;
    type Dto: Serialize + DeserializeOwned;

    fn to_dto(&self, domain: &Self::Domain) -> Self::Dto;
    fn to_domain(&self, dto: Self::Dto) -> Self::Domain;
}

///
/// A [Serializer] that goes through a [DtoModule] and serde_json.
///
pub struct DtoSerializer<M> {
    module: M
}

impl<M: DtoModule> DtoSerializer<M> {
    pub fn new(module: M) -> Self {
        Self { module }
    }

    pub fn module(&self) -> &M {
        &self.module
    }
}

impl<M> fmt::Debug for DtoSerializer<M> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "DtoSerializer<{}>", std::any::type_name::<M>())
    }
}

impl<M: DtoModule> Serializer for DtoSerializer<M> {
    type Object = M::Domain;
    type Error = serde_json::Error;

    fn serialize(&self, object: &M::Domain) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.module.to_dto(object))
    }

    fn deserialize(&self, json: &str) -> Result<M::Domain, serde_json::Error> {
        let dto: M::Dto = serde_json::from_str(json)?;
        Ok(self.module.to_domain(dto))
    }
}
