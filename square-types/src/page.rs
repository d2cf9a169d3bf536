use serde::{Deserialize, Serialize};

/// A Favorites page in the iPad version of Square Register. A merchant can
/// have up to five, indexed 0 through 4.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Page {
    pub id: String,
    pub name: String,
    pub page_index: i64,
    pub cells: Vec<PageCell>,
}

/// A cell of a Favorites page; a 5x5 grid position showing an item,
/// discount, category, or placeholder.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct PageCell {
    pub page_id: String,
    /// 0 through 4; row 0 is the top row.
    pub row: i64,
    /// 0 through 4; column 0 is the leftmost column.
    pub column: i64,
    /// `ITEM`, `DISCOUNT`, `CATEGORY`, or `PLACEHOLDER`.
    pub object_type: String,
    /// Absent for `PLACEHOLDER` cells.
    pub object_id: String,
    /// Behavior of a `PLACEHOLDER` cell.
    pub placeholder_type: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct CreatePageRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    /// 0 through 4; rejected if another page already uses the index.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_index: Option<i64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct UpdatePageRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Not updated if another page already sits at the index.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_index: Option<i64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct UpdateCellRequest {
    pub row: i64,
    pub column: i64,
    pub object_type: String,
    /// Omit for `PLACEHOLDER` cells.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder_type: Option<String>,
}
