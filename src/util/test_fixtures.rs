//! Domain types and serializers shared by the unit tests.

use std::sync::Mutex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use crate::serializer::dto_serializer::DtoModule;
use crate::serializer::serde_json_serializer::SerdeJsonSerializer;
use crate::serializer::serializer_trait::Serializer;

#[derive(Clone, Serialize, Deserialize, Debug, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PersonData {
    pub name: String,

    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spouse_id: Option<u32>
}

impl PersonData {
    /// Convenience function that takes &str literals
    pub fn new(name: &str, location: Option<&str>, spouse_id: Option<u32>) -> Self {
        Self {
            name: String::from(name),
            location: location.map(String::from),
            spouse_id
        }
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct Item {
    pub id: u32,
    pub name: String
}

impl Item {
    pub fn new(id: u32, name: &str) -> Self {
        Self { id, name: String::from(name) }
    }
}

/// A domain type without serde support, see [CompanyModule]
#[derive(Debug, Eq, PartialEq)]
pub struct Company {
    pub tenant_id: u32,
    pub name: String,
    pub employees: Option<u32>
}

impl Company {
    pub fn new(tenant_id: u32, name: &str, employees: Option<u32>) -> Self {
        Self { tenant_id, name: String::from(name), employees }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyDto {
    tenant_id: u32,
    name: String,

    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    employees: Option<u32>
}

pub struct CompanyModule;

impl DtoModule for CompanyModule {
    type Domain = Company;
    type Dto = CompanyDto;

    fn to_dto(&self, company: &Company) -> CompanyDto {
        CompanyDto { tenant_id: company.tenant_id, name: company.name.clone(), employees: company.employees }
    }

    fn to_domain(&self, dto: CompanyDto) -> Company {
        Company { tenant_id: dto.tenant_id, name: dto.name, employees: dto.employees }
    }
}

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("serializer is broken")]
    Broken
}

///
/// Delegates to serde_json and records every call as ``serialize <name>`` or ``deserialize <json>``,
/// so that tests can check which checks were executed.
///
pub struct RecordingSerializer {
    inner: SerdeJsonSerializer<PersonData>,
    calls: Mutex<Vec<String>>
}

impl RecordingSerializer {
    pub fn new() -> Self {
        Self { inner: SerdeJsonSerializer::new(), calls: Mutex::new(Vec::new()) }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl Serializer for RecordingSerializer {
    type Object = PersonData;
    type Error = serde_json::Error;

    fn serialize(&self, person: &PersonData) -> Result<String, serde_json::Error> {
        self.calls.lock().unwrap().push(format!("serialize {}", person.name));
        self.inner.serialize(person)
    }

    fn deserialize(&self, json: &str) -> Result<PersonData, serde_json::Error> {
        self.calls.lock().unwrap().push(format!("deserialize {}", json));
        self.inner.deserialize(json)
    }
}

/// Writes object keys in reverse order and with extra whitespace
pub struct ShuffledSerializer;

fn write_reversed(value: &Value) -> String {
    match value {
        Value::Object(map) => {
            let entries: Vec<String> = map.iter().rev()
                .map(|(key, value)| format!("{} : {}", Value::String(key.clone()), write_reversed(value)))
                .collect();
            format!("{{ {} }}", entries.join(" , "))
        },
        Value::Array(values) => {
            let entries: Vec<String> = values.iter().map(write_reversed).collect();
            format!("[ {} ]", entries.join(", "))
        },
        _ => value.to_string()
    }
}

impl Serializer for ShuffledSerializer {
    type Object = Item;
    type Error = serde_json::Error;

    fn serialize(&self, item: &Item) -> Result<String, serde_json::Error> {
        Ok(write_reversed(&serde_json::to_value(item)?))
    }

    fn deserialize(&self, json: &str) -> Result<Item, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Forgets the location on deserialization
pub struct LossySerializer;

impl Serializer for LossySerializer {
    type Object = PersonData;
    type Error = serde_json::Error;

    fn serialize(&self, person: &PersonData) -> Result<String, serde_json::Error> {
        serde_json::to_string(person)
    }

    fn deserialize(&self, json: &str) -> Result<PersonData, serde_json::Error> {
        let person: PersonData = serde_json::from_str(json)?;
        Ok(PersonData { location: None, ..person })
    }
}

/// Fails on every call
pub struct BrokenSerializer;

impl Serializer for BrokenSerializer {
    type Object = PersonData;
    type Error = FixtureError;

    fn serialize(&self, _: &PersonData) -> Result<String, FixtureError> {
        Err(FixtureError::Broken)
    }

    fn deserialize(&self, _: &str) -> Result<PersonData, FixtureError> {
        Err(FixtureError::Broken)
    }
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[cfg(test)]
mod tests {
    use crate::serializer::serializer_trait::Serializer;
    use crate::util::test_fixtures::{Item, ShuffledSerializer};

    #[test]
    pub fn test_shuffled_serializer() {
        let json = ShuffledSerializer.serialize(&Item::new(1, "a"));
        assert!(json.is_ok());
        assert_eq!(json.unwrap(), r#"{ "name" : "a" , "id" : 1 }"#);
    }
}
