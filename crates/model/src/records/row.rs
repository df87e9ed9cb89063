use crate::core::value::Value;

/// One result row with by-name field access.
#[derive(Debug, Clone, PartialEq)]
pub struct RowData {
    pub columns: Vec<String>,
    pub values: Vec<Value>,
}

impl RowData {
    pub fn new(columns: Vec<String>, values: Vec<Value>) -> Self {
        Self { columns, values }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.columns
            .iter()
            .position(|col| col == name)
            .map(|idx| &self.values[idx])
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_by_name() {
        let row = RowData::new(
            vec!["id".into(), "surname".into()],
            vec![Value::Int(7), Value::Text("Okafor".into())],
        );
        assert_eq!(row.get("id"), Some(&Value::Int(7)));
        assert_eq!(row.get("surname").and_then(Value::as_str), Some("Okafor"));
        assert_eq!(row.get("missing"), None);
    }
}
