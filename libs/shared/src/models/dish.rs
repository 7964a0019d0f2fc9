use serde::{Deserialize, Serialize};

/// A menu item shown in the detail view.
///
/// Immutable and externally owned; the view only formats and displays it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Dish {
    pub id: u32,
    pub name: String,
    pub description: String,
    /// Image reference (URI or path). The data layer joins it with the
    /// configured base URL before handing it to the view.
    pub image: String,
}
