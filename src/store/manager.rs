use std::cell::{
    RefCell,
    RefMut
};
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::store::storeerror::StoreError;

#[derive(Deserialize)]
struct NamedRecord {
    name: String,
}

/// 名稱 → 紀錄的泛型管理器。
///
/// 紀錄自 JSON 物件反序列化（每筆須帶 `name` 欄位），同名後者覆蓋前者。
pub struct Manager<V> {
    map_cell: RefCell<HashMap<String, V>>,
}

impl<V> Manager<V>
where
    V: Clone + DeserializeOwned,
{
    pub fn new() -> Manager<V> {
        Manager { map_cell: RefCell::new(HashMap::new()) }
    }

    pub fn map(&self) -> RefMut<'_, HashMap<String, V>> {
        self.map_cell.borrow_mut()
    }

    pub fn get(&self, name: &str) -> Result<V, StoreError> {
        self.map_cell
            .borrow()
            .get(name)
            .cloned()
            .ok_or_else(|| StoreError::NameNotFound(name.to_owned()))
    }

    pub fn find(&self, name: &str) -> Option<V> {
        self.map_cell.borrow().get(name).cloned()
    }

    pub fn insert_from_json(&self, json_value: serde_json::Value) -> Result<(), StoreError> {
        let named: NamedRecord = serde_json::from_value(json_value.clone())?;
        let record: V = serde_json::from_value(json_value)?;
        self.map().insert(named.name, record);
        Ok(())
    }

    pub fn insert_from_json_vec(&self, json_vec: &[serde_json::Value]) -> Result<(), StoreError> {
        for json_value in json_vec.iter() {
            self.insert_from_json(json_value.clone())?;
        }
        Ok(())
    }

    pub fn from_reader(&self, file_path: &str) -> Result<(), StoreError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_value: serde_json::Value = serde_json::from_reader(reader)?;
        if let serde_json::Value::Array(json_vec) = json_value {
            self.insert_from_json_vec(&json_vec)
        } else {
            self.insert_from_json(json_value)
        }
    }
}

impl<V> Default for Manager<V>
where
    V: Clone + DeserializeOwned,
{
    fn default() -> Manager<V> {
        Manager::new()
    }
}
