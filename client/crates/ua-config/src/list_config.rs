use serde::Deserialize;
use ua_core::SortDirection;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    /// Initial creation-time order of the user list
    pub default_sort: SortDirection,
}
