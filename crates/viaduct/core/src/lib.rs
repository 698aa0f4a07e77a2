//! Core types shared by the viaduct bridge crates.
//!
//! This crate provides:
//! - `ViewId`: Unique identifiers for native views
//! - `Value`: Property values forwarded to the native view layer
//! - `NamespaceFilter`: Opaque filters passed through to the view-tree collaborator
//! - Event-name splitting and weak receiver-context handles

pub mod event_names;
pub mod weak;

/// Unique identifier for a native view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewId(u64);

impl ViewId {
    pub const fn from_raw(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(self) -> u64 {
        self.0
    }
}

/// Property value passed through to the native view layer.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Self::Number(number)
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

/// Opaque namespace filter, forwarded unmodified to the view-tree
/// collaborator. The bridge never inspects its contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceFilter(pub String);
