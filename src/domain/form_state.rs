use indexmap::IndexMap;

use super::postback::PostbackTarget;

pub const EVENT_TARGET: &str = "__EVENTTARGET";
pub const EVENT_ARGUMENT: &str = "__EVENTARGUMENT";

/// The complete set of fields a browser would submit with the form.
///
/// A name that is not present is *absent*, a name mapped to `None` is *null*
/// and a name mapped to `Some("")` is an empty string. The three are kept
/// apart here even though null and absent look the same on the wire.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    fields: IndexMap<String, Option<String>>,
}

impl FormState {
    pub fn new() -> Self {
        let mut state = FormState::default();
        state.clear_postback();
        state
    }

    /// Last write wins. An overwritten name keeps its original position.
    pub fn set(&mut self, name: impl Into<String>, value: Option<String>) {
        self.fields.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<Option<&str>> {
        self.fields.get(name).map(|value| value.as_deref())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn find_name_ending_with(&self, suffix: &str) -> Option<String> {
        self.fields
            .keys()
            .find(|name| name.ends_with(suffix))
            .cloned()
    }

    pub fn clear_postback(&mut self) {
        self.set(EVENT_TARGET, None);
        self.set(EVENT_ARGUMENT, None);
    }

    pub fn apply_postback(&mut self, target: PostbackTarget) {
        self.set(EVENT_TARGET, Some(target.target));
        self.set(EVENT_ARGUMENT, Some(target.argument));
    }

    pub fn to_form_pairs(&self) -> Vec<(&str, &str)> {
        self.fields
            .iter()
            .filter_map(|(name, value)| value.as_deref().map(|value| (name.as_str(), value)))
            .collect()
    }
}
