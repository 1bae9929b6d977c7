//! Message-level flags.

use std::fmt;

/// A message option toggled by its integer weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MessageFlag {
    /// Hides link embeds. Cannot be combined with rich embeds.
    SuppressEmbeds,
    /// Mentions in the message do not notify anyone.
    SuppressNotifications,
}

impl MessageFlag {
    /// All known flags.
    pub const ALL: [Self; 2] = [Self::SuppressEmbeds, Self::SuppressNotifications];

    /// The flag's weight on the wire.
    #[must_use]
    pub const fn value(self) -> u32 {
        match self {
            Self::SuppressEmbeds => 1 << 2,
            Self::SuppressNotifications => 1 << 12,
        }
    }

    /// The flag's platform name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::SuppressEmbeds => "SUPPRESS_EMBEDS",
            Self::SuppressNotifications => "SUPPRESS_NOTIFICATIONS",
        }
    }

    /// Looks up a flag by its platform name, ignoring case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|flag| flag.name().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for MessageFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A set of [`MessageFlag`]s.
///
/// Inserting a flag twice has no additional effect: the wire value is the sum
/// of the distinct members' weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MessageFlags(u32);

impl MessageFlags {
    /// Creates an empty set.
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Adds a flag to the set.
    pub const fn insert(&mut self, flag: MessageFlag) {
        self.0 |= flag.value();
    }

    /// Returns true if the flag is in the set.
    #[must_use]
    pub const fn contains(self, flag: MessageFlag) -> bool {
        self.0 & flag.value() != 0
    }

    /// Returns true if no flag is set.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The wire value: the sum of the members' weights.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Iterates over the flags in the set.
    pub fn iter(self) -> impl Iterator<Item = MessageFlag> {
        MessageFlag::ALL.into_iter().filter(move |f| self.contains(*f))
    }
}

impl FromIterator<MessageFlag> for MessageFlags {
    fn from_iter<I: IntoIterator<Item = MessageFlag>>(iter: I) -> Self {
        let mut flags = Self::empty();
        flags.extend(iter);
        flags
    }
}

impl Extend<MessageFlag> for MessageFlags {
    fn extend<I: IntoIterator<Item = MessageFlag>>(&mut self, iter: I) {
        for flag in iter {
            self.insert(flag);
        }
    }
}
