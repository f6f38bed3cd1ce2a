use std::fs::File;
use std::io::BufReader;

use serde::Deserialize;

use crate::conversion::compumethod::{
    CompuMethod,
    TableResolver
};
use crate::descriptor::methoddescriptor::MethodDescriptor;
use crate::descriptor::verbaltable::{
    VerbalRangeTable,
    VerbalTable
};
use crate::store::manager::Manager;
use crate::store::storeerror::StoreError;

#[derive(Deserialize)]
struct CalibrationJsonProp {
    #[serde(default)]
    compu_methods: Vec<serde_json::Value>,
    #[serde(default)]
    verbal_tables: Vec<serde_json::Value>,
    #[serde(default)]
    verbal_range_tables: Vec<serde_json::Value>,
}

/// 校正紀錄儲存層：方法描述與轉換表各一個管理器，並對轉換引擎
/// 提供 `TableResolver` 能力。引擎本身不知道這一層的存在。
pub struct CalibrationStore {
    method_manager: Manager<MethodDescriptor>,
    verbal_table_manager: Manager<VerbalTable>,
    verbal_range_table_manager: Manager<VerbalRangeTable>,
}

impl CalibrationStore {
    pub fn new() -> CalibrationStore {
        CalibrationStore {
            method_manager: Manager::new(),
            verbal_table_manager: Manager::new(),
            verbal_range_table_manager: Manager::new(),
        }
    }

    pub fn method_manager(&self) -> &Manager<MethodDescriptor> {
        &self.method_manager
    }

    pub fn verbal_table_manager(&self) -> &Manager<VerbalTable> {
        &self.verbal_table_manager
    }

    pub fn verbal_range_table_manager(&self) -> &Manager<VerbalRangeTable> {
        &self.verbal_range_table_manager
    }

    pub fn from_reader(&self, file_path: &str) -> Result<(), StoreError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_prop: CalibrationJsonProp = serde_json::from_reader(reader)?;
        self.insert_from_json_prop(json_prop)
    }

    pub fn from_json_str(&self, data: &str) -> Result<(), StoreError> {
        let json_prop: CalibrationJsonProp = serde_json::from_str(data)?;
        self.insert_from_json_prop(json_prop)
    }

    fn insert_from_json_prop(&self, json_prop: CalibrationJsonProp) -> Result<(), StoreError> {
        self.method_manager.insert_from_json_vec(&json_prop.compu_methods)?;
        self.verbal_table_manager.insert_from_json_vec(&json_prop.verbal_tables)?;
        self.verbal_range_table_manager
            .insert_from_json_vec(&json_prop.verbal_range_tables)?;
        Ok(())
    }

    /// 依名稱取出方法描述並建構對應的轉換方法。
    pub fn build_method(&self, name: &str) -> Result<CompuMethod, StoreError> {
        let descriptor = self.method_manager.get(name)?;
        let method = CompuMethod::from_descriptor(&descriptor, self)?;
        Ok(method)
    }
}

impl TableResolver for CalibrationStore {
    fn verbal_table(&self, name: &str) -> Option<VerbalTable> {
        self.verbal_table_manager.find(name)
    }

    fn verbal_range_table(&self, name: &str) -> Option<VerbalRangeTable> {
        self.verbal_range_table_manager.find(name)
    }
}

impl Default for CalibrationStore {
    fn default() -> CalibrationStore {
        CalibrationStore::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversion::conversionerror::ConversionError;
    use crate::conversion::physicalvalue::PhysicalValue;

    const DATA: &str = r#"
    {
        "compu_methods": [
            {
                "name": "CM.TAB_VERB.DEFAULT_VALUE",
                "conversion_type": "TAB_VERB",
                "table_ref": "CM.TAB_VERB.DEFAULT_VALUE.REF"
            },
            {
                "name": "CM.LINEAR.MUL_2",
                "conversion_type": "LINEAR",
                "coeffs_linear": { "a": 2.0, "b": 0.0 }
            },
            {
                "name": "CM.RAT_FUNC.DIV_81_9175",
                "conversion_type": "RAT_FUNC",
                "coeffs": { "a": 0.0, "b": 81.9175, "c": 0.0, "d": 0.0, "e": 0.0, "f": 1.0 }
            },
            {
                "name": "CM.TAB_VERB.NO_VTAB",
                "conversion_type": "TAB_VERB",
                "table_ref": "CM.TAB_VERB.MISSING.REF"
            }
        ],
        "verbal_tables": [
            {
                "name": "CM.TAB_VERB.DEFAULT_VALUE.REF",
                "pairs": [[1, "SawTooth"], [2, "Square"], [3, "Sinus"]],
                "default_value": "unknown signal type"
            }
        ],
        "verbal_range_tables": [
            {
                "name": "CM.VTAB_RANGE.DEFAULT_VALUE.REF",
                "triples": [[0, 1, "Zero_to_one"], [2, 3, "two_to_three"]],
                "default_value": "out of range value"
            }
        ]
    }
    "#;

    fn loaded_store() -> CalibrationStore {
        let store = CalibrationStore::new();
        store.from_json_str(DATA).unwrap();
        store
    }

    #[test]
    fn builds_verbal_method_end_to_end() {
        let store = loaded_store();
        let method = store.build_method("CM.TAB_VERB.DEFAULT_VALUE").unwrap();
        assert_eq!(
            method.convert(1.0).unwrap(),
            Some(PhysicalValue::Text("SawTooth".to_owned()))
        );
        assert_eq!(
            method.convert(10.0).unwrap(),
            Some(PhysicalValue::Text("unknown signal type".to_owned()))
        );
        assert_eq!(method.invert(&PhysicalValue::from("Sinus")).unwrap(), Some(3.0));
    }

    #[test]
    fn builds_numeric_methods_end_to_end() {
        let store = loaded_store();
        let linear = store.build_method("CM.LINEAR.MUL_2").unwrap();
        assert_eq!(
            linear.convert(21.0).unwrap(),
            Some(PhysicalValue::Scalar(42.0))
        );
        let rat_func = store.build_method("CM.RAT_FUNC.DIV_81_9175").unwrap();
        let converted = rat_func.convert(10.0).unwrap().unwrap().scalar().unwrap();
        assert!((converted - 819.175).abs() < 1e-9);
    }

    #[test]
    fn unresolved_table_reference_fails_structurally() {
        let store = loaded_store();
        let result = store.build_method("CM.TAB_VERB.NO_VTAB");
        match result {
            Err(StoreError::Conversion(ConversionError::UnresolvedTable(name))) => {
                assert_eq!(name, "CM.TAB_VERB.MISSING.REF");
            }
            other => panic!("unexpected result: {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn unknown_method_name_is_reported() {
        let store = loaded_store();
        let result = store.build_method("CM.DOES_NOT_EXIST");
        match result {
            Err(StoreError::NameNotFound(name)) => assert_eq!(name, "CM.DOES_NOT_EXIST"),
            other => panic!("unexpected result: {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn range_tables_resolve_through_the_same_reference_attribute() {
        let store = loaded_store();
        let descriptor = MethodDescriptor::tab_verb(
            "CM.VTAB_RANGE.DEFAULT_VALUE".to_owned(),
            "CM.VTAB_RANGE.DEFAULT_VALUE.REF".to_owned(),
        );
        let method = CompuMethod::from_descriptor(&descriptor, &store).unwrap();
        assert_eq!(
            method.convert(2.0).unwrap(),
            Some(PhysicalValue::Text("two_to_three".to_owned()))
        );
        assert_eq!(
            method.convert(50.0).unwrap(),
            Some(PhysicalValue::Text("out of range value".to_owned()))
        );
    }
}
