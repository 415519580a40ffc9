// Copyright 2024 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A single typed parameter of a function, event, error or constructor.
///
/// Event parameters additionally carry the `indexed` flag; parameters produced
/// by the Solidity compiler usually also carry `internalType`. Both are kept
/// optional and omitted from JSON when absent so that re-serialised interfaces
/// stay byte-compatible with what the explorer publishes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AbiParam {
    #[serde(rename = "type")]
    pub ty: String,

    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indexed: Option<bool>,

    #[serde(rename = "internalType", default, skip_serializing_if = "Option::is_none")]
    pub internal_type: Option<String>,
}

#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum StateMutability {
    View,
    Nonpayable,
    Payable,
    Pure,
}

impl StateMutability {
    /// Whether calling a function with this mutability can never change chain state.
    pub fn is_read_only(&self) -> bool {
        matches!(self, StateMutability::View | StateMutability::Pure)
    }
}

/// One entry of a contract interface description, tagged by its `type` field.
///
/// Anything that is not one of the four known tags fails to parse, so a
/// malformed interface is rejected when it is first read rather than when a
/// call is about to be dispatched.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type")]
#[serde(rename_all = "lowercase")]
pub enum InterfaceEntry {
    Constructor {
        #[serde(default)]
        inputs: Vec<AbiParam>,
    },
    Function {
        name: String,
        #[serde(rename = "stateMutability")]
        state_mutability: StateMutability,
        #[serde(default)]
        inputs: Vec<AbiParam>,
        #[serde(default)]
        outputs: Vec<AbiParam>,
    },
    Event {
        name: String,
        #[serde(default)]
        inputs: Vec<AbiParam>,
        #[serde(default)]
        anonymous: bool,
    },
    Error {
        name: String,
        #[serde(default)]
        inputs: Vec<AbiParam>,
    },
}

impl InterfaceEntry {
    /// The declared name of this entry. Constructors are nameless.
    pub fn name(&self) -> Option<&str> {
        match self {
            InterfaceEntry::Constructor { .. } => None,
            InterfaceEntry::Function { name, .. }
            | InterfaceEntry::Event { name, .. }
            | InterfaceEntry::Error { name, .. } => Some(name),
        }
    }

    pub fn inputs(&self) -> &[AbiParam] {
        match self {
            InterfaceEntry::Constructor { inputs }
            | InterfaceEntry::Function { inputs, .. }
            | InterfaceEntry::Event { inputs, .. }
            | InterfaceEntry::Error { inputs, .. } => inputs,
        }
    }

    pub fn is_function(&self) -> bool {
        matches!(self, InterfaceEntry::Function { .. })
    }
}

/// Looks up a function entry by name.
pub fn find_function<'a>(entries: &'a [InterfaceEntry], name: &str) -> Option<&'a InterfaceEntry> {
    entries
        .iter()
        .find(|entry| entry.is_function() && entry.name() == Some(name))
}

/// Looks up an event entry by name.
pub fn find_event<'a>(entries: &'a [InterfaceEntry], name: &str) -> Option<&'a InterfaceEntry> {
    entries
        .iter()
        .find(|entry| matches!(entry, InterfaceEntry::Event { .. }) && entry.name() == Some(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> InterfaceEntry {
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn function_entry_parses_with_mutability_and_outputs() {
        let entry = parse(
            r#"{"type":"function","stateMutability":"view","outputs":[{"type":"uint256","name":"","internalType":"uint256"}],"name":"earned","inputs":[{"type":"address","name":"account","internalType":"address"}]}"#,
        );

        match &entry {
            InterfaceEntry::Function {
                name,
                state_mutability,
                inputs,
                outputs,
            } => {
                assert_eq!(name, "earned");
                assert!(state_mutability.is_read_only());
                assert_eq!(inputs.len(), 1);
                assert_eq!(inputs[0].ty, "address");
                assert_eq!(inputs[0].internal_type.as_deref(), Some("address"));
                assert_eq!(outputs.len(), 1);
                assert_eq!(outputs[0].name, "");
            }
            other => panic!("expected a function entry, got {other:?}"),
        }
    }

    #[test]
    fn event_entry_keeps_indexed_flags() {
        let entry = parse(
            r#"{"type":"event","name":"Transfer","inputs":[{"type":"address","name":"from","indexed":true},{"type":"address","name":"to","indexed":true},{"type":"uint256","name":"value","indexed":false}],"anonymous":false}"#,
        );

        match &entry {
            InterfaceEntry::Event {
                name,
                inputs,
                anonymous,
            } => {
                assert_eq!(name, "Transfer");
                assert!(!anonymous);
                assert_eq!(inputs[0].indexed, Some(true));
                assert_eq!(inputs[2].indexed, Some(false));
            }
            other => panic!("expected an event entry, got {other:?}"),
        }
    }

    #[test]
    fn error_and_constructor_entries_parse() {
        let error = parse(r#"{"type":"error","name":"ZeroAmount","inputs":[]}"#);
        assert_eq!(error.name(), Some("ZeroAmount"));

        let constructor = parse(r#"{"type":"constructor","inputs":[]}"#);
        assert_eq!(constructor.name(), None);
        assert!(constructor.inputs().is_empty());
    }

    #[test]
    fn unknown_tag_is_rejected() {
        let res: Result<InterfaceEntry, _> =
            serde_json::from_str(r#"{"type":"fallback","inputs":[]}"#);
        assert!(res.is_err());
    }

    #[test]
    fn reserialising_an_entry_is_lossless() {
        let raw = r#"{"type":"event","name":"Staked","inputs":[{"type":"address","name":"stakeHolder","indexed":false},{"type":"uint256","name":"amount","indexed":false}],"anonymous":false}"#;
        let entry = parse(raw);
        let reparsed = parse(&serde_json::to_string(&entry).unwrap());
        assert_eq!(entry, reparsed);
    }

    #[test]
    fn absent_optional_fields_are_not_serialised() {
        let entry = parse(r#"{"type":"function","stateMutability":"nonpayable","outputs":[],"name":"getRewards","inputs":[]}"#);
        let raw = serde_json::to_string(&entry).unwrap();
        assert!(!raw.contains("indexed"));
        assert!(!raw.contains("internalType"));
    }

    #[test]
    fn function_lookup_ignores_non_functions() {
        let entries: Vec<InterfaceEntry> = serde_json::from_str(
            r#"[{"type":"event","name":"Paused","inputs":[{"type":"address","name":"account","indexed":false}],"anonymous":false},{"type":"function","stateMutability":"view","outputs":[{"type":"bool","name":"","internalType":"bool"}],"name":"paused","inputs":[]}]"#,
        )
        .unwrap();

        assert!(find_function(&entries, "paused").is_some());
        assert!(find_function(&entries, "Paused").is_none());
        assert!(find_event(&entries, "Paused").is_some());
    }
}
