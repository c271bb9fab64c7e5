use crate::compute::bytecode::NodeLayout;
use crate::error::SearchError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One input/output test vector the synthesized program must satisfy exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub input: Vec<i16>,
    pub output: Vec<i16>,
}

impl Scenario {
    pub fn new(input: Vec<i16>, output: Vec<i16>) -> Self {
        Self { input, output }
    }
}

/// Everything the search needs: the machine to program and what it must do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchProblem {
    #[serde(default)]
    pub layout: NodeLayout,
    pub scenarios: Vec<Scenario>,
}

impl SearchProblem {
    pub fn new(layout: NodeLayout, scenarios: Vec<Scenario>) -> Self {
        Self { layout, scenarios }
    }

    /// Read adjacent pairs from `UP` and write each pair back to `DOWN` swapped.
    pub fn swap_pairs() -> Self {
        Self::new(
            NodeLayout::default(),
            vec![
                Scenario::new(vec![0, 1], vec![1, 0]),
                Scenario::new(vec![1, 2], vec![2, 1]),
                Scenario::new(vec![4, 2], vec![2, 4]),
                Scenario::new(vec![5, 1], vec![1, 5]),
            ],
        )
    }

    pub fn from_json(text: &str) -> Result<Self, SearchError> {
        serde_json::from_str(text).map_err(|e| SearchError::Parse(e.to_string()))
    }

    pub fn from_path(path: &Path) -> Result<Self, SearchError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| SearchError::Io(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&text)
    }
}

impl Default for SearchProblem {
    fn default() -> Self {
        Self::swap_pairs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute::port::Port;
    use std::io::Write;

    #[test]
    fn test_layout_fields_fall_back_to_defaults() {
        let problem = SearchProblem::from_json(
            r#"{
                "layout": { "slots": 2, "output_port": "RIGHT" },
                "scenarios": [ { "input": [3], "output": [-3] } ]
            }"#,
        )
        .unwrap();

        assert_eq!(problem.layout.slots, 2);
        assert_eq!(problem.layout.input_port, Port::Up);
        assert_eq!(problem.layout.output_port, Port::Right);
        assert_eq!(problem.layout.constants, vec![0, 1, -1]);
        assert_eq!(problem.scenarios, vec![Scenario::new(vec![3], vec![-3])]);
    }

    #[test]
    fn test_missing_layout_uses_the_default_node() {
        let problem = SearchProblem::from_json(r#"{ "scenarios": [] }"#).unwrap();
        assert_eq!(problem.layout, NodeLayout::default());
    }

    #[test]
    fn test_malformed_json_is_a_parse_error() {
        let err = SearchProblem::from_json(r#"{ "scenarios": [ { "input": "x" } ] }"#).unwrap_err();
        assert!(matches!(err, SearchError::Parse(_)));
    }

    #[test]
    fn test_round_trip_through_a_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let text = serde_json::to_string(&SearchProblem::swap_pairs()).unwrap();
        file.write_all(text.as_bytes()).unwrap();

        let loaded = SearchProblem::from_path(file.path()).unwrap();
        assert_eq!(loaded, SearchProblem::swap_pairs());
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = SearchProblem::from_path(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, SearchError::Io(msg) if msg.contains("absent.json")));
    }
}
