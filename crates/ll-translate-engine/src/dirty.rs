//! Reflecting a block's translation state in its rendered element.
//!
//! The host model carries an `ll-dirty` attribute; while it reads `mt` or
//! `edited` the rendered element gets a presentational class. The binding
//! subscribes to attribute changes once, at setup, and keeps the class in
//! step afterwards.

use std::fmt;
use std::str::FromStr;

use ll_translate_config::DisplayConfig;
use thiserror::Error;

/// Model attribute holding the translation state
pub const DIRTY_ATTRIBUTE: &str = "ll-dirty";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown dirty state '{0}'")]
pub struct UnknownDirtyState(pub String);

/// Translation state of a content block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirtyState {
    /// Filled in by machine translation, not yet reviewed
    MachineTranslated,
    /// Edited since the last approval
    Edited,
    Approved,
}

impl DirtyState {
    pub fn as_str(self) -> &'static str {
        match self {
            DirtyState::MachineTranslated => "mt",
            DirtyState::Edited => "edited",
            DirtyState::Approved => "approved",
        }
    }

    /// True when the block needs review
    pub fn is_dirty(self) -> bool {
        matches!(self, DirtyState::MachineTranslated | DirtyState::Edited)
    }

    /// Reads the attribute value; unknown values are treated as unset.
    pub fn from_attribute(value: Option<&str>) -> Option<DirtyState> {
        let value = value?;
        match value.parse() {
            Ok(state) => Some(state),
            Err(e) => {
                log::warn!("ignoring {DIRTY_ATTRIBUTE} attribute: {e}");
                None
            }
        }
    }
}

impl FromStr for DirtyState {
    type Err = UnknownDirtyState;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mt" => Ok(DirtyState::MachineTranslated),
            "edited" => Ok(DirtyState::Edited),
            "approved" => Ok(DirtyState::Approved),
            other => Err(UnknownDirtyState(other.to_string())),
        }
    }
}

impl fmt::Display for DirtyState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Handle for an attribute-change listener registered with the host model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerHandle(pub u64);

/// The host's content-branch model, as far as the binding needs it.
pub trait AttributeModel {
    fn attribute(&self, key: &str) -> Option<&str>;

    /// Starts routing attribute changes to the binding.
    fn connect_attribute_change(&mut self) -> ListenerHandle;

    fn disconnect_attribute_change(&mut self, handle: ListenerHandle);
}

/// The host's rendered element.
pub trait ClassToggle {
    fn toggle_class(&mut self, class: &str, enabled: bool);
}

/// Keeps a rendered element's dirty class in step with its model.
#[derive(Debug)]
pub struct DirtyStateBinding {
    class_name: String,
    listener: Option<ListenerHandle>,
}

impl DirtyStateBinding {
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            listener: None,
        }
    }

    pub fn from_config(display: &DisplayConfig) -> Self {
        Self::new(display.dirty_class.as_str())
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn is_connected(&self) -> bool {
        self.listener.is_some()
    }

    /// Connects to the model's attribute changes and renders the current
    /// state. Calling it again only re-renders.
    pub fn setup<M, V>(&mut self, model: &mut M, view: &mut V)
    where
        M: AttributeModel,
        V: ClassToggle,
    {
        if self.listener.is_none() {
            let handle = model.connect_attribute_change();
            log::debug!("connected dirty-state listener {handle:?}");
            self.listener = Some(handle);
        }
        self.update(model, view);
    }

    pub fn teardown<M: AttributeModel>(&mut self, model: &mut M) {
        if let Some(handle) = self.listener.take() {
            model.disconnect_attribute_change(handle);
            log::debug!("disconnected dirty-state listener {handle:?}");
        }
    }

    /// Handles a model attribute change; only `ll-dirty` is of interest.
    pub fn on_attribute_change<M, V>(&self, key: &str, model: &M, view: &mut V)
    where
        M: AttributeModel,
        V: ClassToggle,
    {
        if key == DIRTY_ATTRIBUTE {
            self.update(model, view);
        }
    }

    /// Toggles the dirty class from the model's current state.
    pub fn update<M, V>(&self, model: &M, view: &mut V) -> Option<DirtyState>
    where
        M: AttributeModel,
        V: ClassToggle,
    {
        let state = DirtyState::from_attribute(model.attribute(DIRTY_ATTRIBUTE));
        view.toggle_class(&self.class_name, state.is_some_and(DirtyState::is_dirty));
        state
    }
}

impl Default for DirtyStateBinding {
    fn default() -> Self {
        Self::from_config(&DisplayConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ll_translate_config::DEFAULT_DIRTY_CLASS;
    use rstest::rstest;
    use std::collections::{BTreeSet, HashMap};

    #[derive(Default)]
    struct FakeModel {
        attributes: HashMap<String, String>,
        listeners: Vec<ListenerHandle>,
        next_handle: u64,
    }

    impl FakeModel {
        fn with_state(state: &str) -> Self {
            let mut model = Self::default();
            model.set(DIRTY_ATTRIBUTE, state);
            model
        }

        fn set(&mut self, key: &str, value: &str) {
            self.attributes.insert(key.to_string(), value.to_string());
        }
    }

    impl AttributeModel for FakeModel {
        fn attribute(&self, key: &str) -> Option<&str> {
            self.attributes.get(key).map(String::as_str)
        }

        fn connect_attribute_change(&mut self) -> ListenerHandle {
            self.next_handle += 1;
            let handle = ListenerHandle(self.next_handle);
            self.listeners.push(handle);
            handle
        }

        fn disconnect_attribute_change(&mut self, handle: ListenerHandle) {
            self.listeners.retain(|h| *h != handle);
        }
    }

    #[derive(Default)]
    struct FakeElement {
        classes: BTreeSet<String>,
        toggles: usize,
    }

    impl ClassToggle for FakeElement {
        fn toggle_class(&mut self, class: &str, enabled: bool) {
            self.toggles += 1;
            if enabled {
                self.classes.insert(class.to_string());
            } else {
                self.classes.remove(class);
            }
        }
    }

    #[rstest]
    #[case("mt", DirtyState::MachineTranslated, true)]
    #[case("edited", DirtyState::Edited, true)]
    #[case("approved", DirtyState::Approved, false)]
    fn parses_known_states(#[case] value: &str, #[case] state: DirtyState, #[case] dirty: bool) {
        assert_eq!(value.parse::<DirtyState>().unwrap(), state);
        assert_eq!(state.as_str(), value);
        assert_eq!(state.is_dirty(), dirty);
    }

    #[test]
    fn unknown_state_is_an_error() {
        assert_eq!(
            "bogus".parse::<DirtyState>(),
            Err(UnknownDirtyState("bogus".to_string()))
        );
        assert_eq!(DirtyState::from_attribute(Some("bogus")), None);
        assert_eq!(DirtyState::from_attribute(None), None);
    }

    #[rstest]
    #[case(Some("mt"), true)]
    #[case(Some("edited"), true)]
    #[case(Some("approved"), false)]
    #[case(Some("bogus"), false)]
    #[case(None, false)]
    fn setup_renders_current_state(#[case] value: Option<&str>, #[case] dirty: bool) {
        let mut model = match value {
            Some(v) => FakeModel::with_state(v),
            None => FakeModel::default(),
        };
        let mut element = FakeElement::default();
        let mut binding = DirtyStateBinding::default();

        binding.setup(&mut model, &mut element);

        assert_eq!(element.classes.contains(DEFAULT_DIRTY_CLASS), dirty);
    }

    #[test]
    fn setup_connects_once() {
        let mut model = FakeModel::default();
        let mut element = FakeElement::default();
        let mut binding = DirtyStateBinding::default();

        binding.setup(&mut model, &mut element);
        binding.setup(&mut model, &mut element);

        assert_eq!(model.listeners.len(), 1);
        assert!(binding.is_connected());
        assert_eq!(element.toggles, 2);
    }

    #[test]
    fn attribute_change_updates_class() {
        let mut model = FakeModel::with_state("approved");
        let mut element = FakeElement::default();
        let mut binding = DirtyStateBinding::new("dirty");
        binding.setup(&mut model, &mut element);
        assert!(!element.classes.contains("dirty"));

        model.set(DIRTY_ATTRIBUTE, "edited");
        binding.on_attribute_change(DIRTY_ATTRIBUTE, &model, &mut element);
        assert!(element.classes.contains("dirty"));

        model.set(DIRTY_ATTRIBUTE, "approved");
        binding.on_attribute_change(DIRTY_ATTRIBUTE, &model, &mut element);
        assert!(!element.classes.contains("dirty"));
    }

    #[test]
    fn unrelated_attribute_is_ignored() {
        let mut model = FakeModel::with_state("approved");
        let mut element = FakeElement::default();
        let mut binding = DirtyStateBinding::default();
        binding.setup(&mut model, &mut element);

        model.set(DIRTY_ATTRIBUTE, "mt");
        binding.on_attribute_change("style", &model, &mut element);

        assert_eq!(element.toggles, 1);
        assert!(element.classes.is_empty());
    }

    #[test]
    fn teardown_disconnects() {
        let mut model = FakeModel::default();
        let mut element = FakeElement::default();
        let mut binding = DirtyStateBinding::default();
        binding.setup(&mut model, &mut element);

        binding.teardown(&mut model);
        binding.teardown(&mut model);

        assert!(model.listeners.is_empty());
        assert!(!binding.is_connected());
    }

    #[test]
    fn class_name_comes_from_config() {
        let display = DisplayConfig {
            dirty_class: "needs-review".to_string(),
        };
        assert_eq!(DirtyStateBinding::from_config(&display).class_name(), "needs-review");
    }
}
