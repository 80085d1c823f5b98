use std::fmt;

use serde::{Deserialize, Serialize};

/// A single platform modifier key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Modifier {
    /// Control key.
    Control,
    /// Shift key.
    Shift,
    /// Option on macOS, Alt elsewhere.
    Option,
    /// Command on macOS, Super/Windows elsewhere.
    Command,
}

impl Modifier {
    /// All modifiers in display order.
    pub const ALL: [Self; 4] =
        [Self::Control, Self::Shift, Self::Option, Self::Command];

    /// Short label used in binding descriptions.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Control => "Ctrl",
            Self::Shift => "Shift",
            Self::Option => "Option",
            Self::Command => "Command",
        }
    }
}

/// Set of held modifier keys.
///
/// Equality is set equality: a gesture bound to `Shift` does not match a
/// live event with `Shift + Control` held.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[allow(clippy::struct_excessive_bools)]
#[serde(default)]
pub struct Modifiers {
    /// Control key held.
    pub control: bool,
    /// Shift key held.
    pub shift: bool,
    /// Option/Alt key held.
    pub option: bool,
    /// Command/Super key held.
    pub command: bool,
}

impl Modifiers {
    /// No modifiers held.
    pub const NONE: Self = Self {
        control: false,
        shift: false,
        option: false,
        command: false,
    };

    /// A set holding exactly one modifier.
    #[must_use]
    pub fn only(modifier: Modifier) -> Self {
        let mut set = Self::NONE;
        set.set(modifier, true);
        set
    }

    /// Whether `modifier` is part of the set.
    #[must_use]
    pub fn contains(self, modifier: Modifier) -> bool {
        match modifier {
            Modifier::Control => self.control,
            Modifier::Shift => self.shift,
            Modifier::Option => self.option,
            Modifier::Command => self.command,
        }
    }

    /// Add or remove `modifier`.
    pub fn set(&mut self, modifier: Modifier, held: bool) {
        match modifier {
            Modifier::Control => self.control = held,
            Modifier::Shift => self.shift = held,
            Modifier::Option => self.option = held,
            Modifier::Command => self.command = held,
        }
    }

    /// Flip membership of `modifier`.
    pub fn toggle(&mut self, modifier: Modifier) {
        self.set(modifier, !self.contains(modifier));
    }

    /// Builder-style variant of [`Modifiers::set`].
    #[must_use]
    pub fn with(mut self, modifier: Modifier) -> Self {
        self.set(modifier, true);
        self
    }

    /// Whether no modifier is held.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self == Self::NONE
    }

    /// Iterate the held modifiers in display order.
    pub fn iter(self) -> impl Iterator<Item = Modifier> {
        Modifier::ALL.into_iter().filter(move |m| self.contains(*m))
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for modifier in self.iter() {
            if !first {
                f.write_str(" + ")?;
            }
            f.write_str(modifier.label())?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_membership() {
        let mut mods = Modifiers::NONE;
        mods.toggle(Modifier::Shift);
        assert!(mods.contains(Modifier::Shift));
        assert!(!mods.contains(Modifier::Control));
        mods.toggle(Modifier::Shift);
        assert!(mods.is_empty());
    }

    #[test]
    fn display_lists_in_fixed_order() {
        let mods = Modifiers::only(Modifier::Command)
            .with(Modifier::Control)
            .with(Modifier::Option);
        assert_eq!(mods.to_string(), "Ctrl + Option + Command");
        assert_eq!(Modifiers::NONE.to_string(), "");
    }
}
