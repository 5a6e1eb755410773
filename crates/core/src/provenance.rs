//! Records which standard library shape each item in this crate stands in for.
//!
//! The callable traits are *primary*: each exists because a standard closure
//! shape cannot report a typed failure. [`Opt`](crate::Opt) is *secondary*: it
//! exists only because `Option`'s combinators take those closure shapes. Each
//! entry also lists the operations that deviate from the standard shape;
//! these are the changes the standard library would need to absorb for the
//! entry to become unnecessary.
//!
//! The tables are plain data for documentation tooling. Nothing in the crate
//! reads them at runtime.

/// An item that exists because a standard closure shape cannot fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Primary {
    /// The item in this crate.
    pub name: &'static str,

    /// The standard library shape it updates.
    pub updates: &'static str,

    /// Operations that deviate from the standard shape.
    pub operations: &'static [&'static str],
}

/// An item that exists because of one or more [`Primary`] items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Secondary {
    /// The item in this crate.
    pub name: &'static str,

    /// The standard library type it mirrors.
    pub mirrors: &'static str,

    /// Names of the [`Primary`] items that make it necessary.
    pub caused_by: &'static [&'static str],

    /// Operations that deviate from the mirrored type.
    pub operations: &'static [&'static str],
}

/// The callable traits.
pub const PRIMARY: &[Primary] = &[
    Primary {
        name: "Action",
        updates: "Fn(&T)",
        operations: &["accept", "and_then"],
    },
    Primary {
        name: "Transform",
        updates: "Fn(T) -> R",
        operations: &["apply", "compose", "and_then", "identity"],
    },
    Primary {
        name: "Predicate",
        updates: "Fn(&T) -> bool",
        operations: &["test", "and", "or", "negate", "not", "is_equal"],
    },
    Primary {
        name: "Producer",
        updates: "Fn() -> T",
        operations: &["get"],
    },
];

/// Items made necessary by the callable traits.
pub const SECONDARY: &[Secondary] = &[Secondary {
    name: "Opt",
    mirrors: "core::option::Option",
    caused_by: &["Action", "Transform", "Predicate", "Producer"],
    operations: &[
        "if_present",
        "if_present_or_else",
        "filter",
        "map",
        "flat_map",
        "or",
        "or_else_get",
    ],
}];

/// Looks up a primary entry by item name.
#[must_use]
pub fn primary(name: &str) -> Option<&'static Primary> {
    PRIMARY.iter().find(|entry| entry.name == name)
}

/// Looks up a secondary entry by item name.
#[must_use]
pub fn secondary(name: &str) -> Option<&'static Secondary> {
    SECONDARY.iter().find(|entry| entry.name == name)
}

/// Returns the primary entries that cause `entry`.
pub fn causes(entry: &Secondary) -> impl Iterator<Item = &'static Primary> + use<> {
    let names: &'static [&'static str] = entry.caused_by;
    names.iter().filter_map(|name| primary(name))
}
