//! Savings group model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A savings group whose members each pay a fixed contribution per cycle.
///
/// # Example
///
/// ```
/// use susu_engine::models::Group;
/// use rust_decimal::Decimal;
///
/// let group = Group {
///     id: "grp_001".to_string(),
///     name: "Market Women".to_string(),
///     contribution_amount: Decimal::new(300, 0),
/// };
/// assert_eq!(group.contribution_amount, Decimal::new(300, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Unique identifier for the group.
    pub id: String,
    /// Display name of the group.
    #[serde(default)]
    pub name: String,
    /// Amount each member contributes per cycle.
    pub contribution_amount: Decimal,
}
