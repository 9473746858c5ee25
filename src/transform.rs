use std::str::FromStr;

use tracing::debug;

use crate::error::{ConvertError, Result};
use crate::models::{Header, Record, AMOUNT, TRANSACTION_TYPE};

const DEBIT: &str = "debit";
const NEGATION: char = '-';

// ---------------------------------------------------------------------------
// Actions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Action {
    // Variant order is application order: debit amounts read the
    // Transaction Type column, so they have to run before it is dropped.
    ModifyDebitAmounts,
    RemoveTransType,
    StripHeaders,
}

const ALL_ACTIONS: &[Action] = &[
    Action::StripHeaders,
    Action::ModifyDebitAmounts,
    Action::RemoveTransType,
];

impl Action {
    pub fn key(&self) -> &'static str {
        match self {
            Self::StripHeaders => "StripHeaders",
            Self::ModifyDebitAmounts => "ModifyDebitAmounts",
            Self::RemoveTransType => "RemoveTransType",
        }
    }

    pub fn apply(&self, header: &mut Header, records: &mut [Record]) {
        match self {
            Self::ModifyDebitAmounts => negate_debit_amounts(header, records),
            Self::RemoveTransType => remove_column(header, records, TRANSACTION_TYPE),
            // Consumed by the writer.
            Self::StripHeaders => {}
        }
    }
}

impl FromStr for Action {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self> {
        ALL_ACTIONS
            .iter()
            .find(|a| a.key() == s)
            .copied()
            .ok_or_else(|| ConvertError::UnsupportedOption(format!("action '{s}'")))
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

fn negate_debit_amounts(header: &Header, records: &mut [Record]) {
    let (Some(type_idx), Some(amount_idx)) =
        (header.position(TRANSACTION_TYPE), header.position(AMOUNT))
    else {
        return;
    };
    let mut modified = 0usize;
    for record in records.iter_mut() {
        if record.values().get(type_idx).map(String::as_str) != Some(DEBIT) {
            continue;
        }
        if let Some(amount) = record.value_at_mut(amount_idx) {
            amount.insert(0, NEGATION);
            modified += 1;
        }
    }
    debug!(modified, "negated debit amounts");
}

fn remove_column(header: &mut Header, records: &mut [Record], column: &str) {
    let Some(idx) = header.remove(column) else {
        return;
    };
    for record in records.iter_mut() {
        record.remove_at(idx);
    }
    debug!(column, "removed column");
}

// ---------------------------------------------------------------------------
// Profiles
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    Banktivity,
}

const ALL_PROFILES: &[Profile] = &[Profile::Banktivity];

impl Profile {
    pub fn key(&self) -> &'static str {
        match self {
            Self::Banktivity => "Banktivity",
        }
    }

    pub fn actions(&self) -> &'static [Action] {
        match self {
            Self::Banktivity => &[Action::ModifyDebitAmounts, Action::RemoveTransType],
        }
    }
}

impl FromStr for Profile {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self> {
        ALL_PROFILES
            .iter()
            .find(|p| p.key().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| ConvertError::UnsupportedOption(format!("profile '{s}'")))
    }
}

// ---------------------------------------------------------------------------
// Plan
// ---------------------------------------------------------------------------

/// The validated set of actions for one run, in application order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    actions: Vec<Action>,
}

impl Plan {
    /// Build a plan from a list of actions. Each action may appear at most
    /// once; applying one twice would, for instance, double-negate amounts.
    pub fn from_actions(actions: &[Action]) -> Result<Self> {
        let mut sorted = actions.to_vec();
        sorted.sort();
        if let Some(dup) = sorted.windows(2).find(|w| w[0] == w[1]) {
            return Err(ConvertError::UnsupportedOption(format!(
                "action '{}' listed more than once",
                dup[0]
            )));
        }
        Ok(Self { actions: sorted })
    }

    pub fn from_profile(profile: Profile) -> Self {
        Self {
            actions: profile.actions().to_vec(),
        }
    }

    /// Parse a comma-separated action list such as
    /// `ModifyDebitAmounts, RemoveTransType`. Blank entries are ignored.
    pub fn parse_actions(list: &str) -> Result<Self> {
        let actions = list
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(Action::from_str)
            .collect::<Result<Vec<_>>>()?;
        Self::from_actions(&actions)
    }

    /// Resolve the command-line selection. Exactly one of `profile` and
    /// `actions` must be given.
    pub fn resolve(profile: Option<&str>, actions: Option<&str>, strip_headers: bool) -> Result<Self> {
        let mut plan = match (profile, actions) {
            (Some(_), Some(_)) => {
                return Err(ConvertError::ConfigurationConflict(
                    "Specify either a profile or a list of actions, not both".to_string(),
                ))
            }
            (None, None) => {
                return Err(ConvertError::ConfigurationConflict(
                    "No profile or actions specified".to_string(),
                ))
            }
            (Some(name), None) => Self::from_profile(name.parse()?),
            (None, Some(list)) => Self::parse_actions(list)?,
        };
        if strip_headers && !plan.contains(Action::StripHeaders) {
            plan.actions.push(Action::StripHeaders);
            plan.actions.sort();
        }
        Ok(plan)
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn contains(&self, action: Action) -> bool {
        self.actions.contains(&action)
    }

    pub fn writes_header(&self) -> bool {
        !self.contains(Action::StripHeaders)
    }

    pub fn apply(&self, header: &mut Header, records: &mut [Record]) {
        for action in &self.actions {
            action.apply(header, records);
        }
    }
}
