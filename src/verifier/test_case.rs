///
/// One expectation: serializing ``object`` gives ``json`` and deserializing ``json`` gives ``object``.
///
#[derive(Debug, Eq, PartialEq)]
pub struct TestCase<T> {
    pub json: String,
    pub object: T
}

impl<T> TestCase<T> {
    pub fn new(object: T, json: &str) -> Self {
        Self { json: String::from(json), object }
    }
}
