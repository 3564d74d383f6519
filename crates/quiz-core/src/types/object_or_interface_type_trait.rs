use crate::types::Field;
use indexmap::IndexMap;

pub(crate) trait ObjectOrInterfaceTypeTrait {
    fn description(&self) -> Option<&str>;
    fn field(&self, name: &str) -> Option<&Field>;
    fn fields(&self) -> &IndexMap<String, Field>;
    fn name(&self) -> &str;
}
