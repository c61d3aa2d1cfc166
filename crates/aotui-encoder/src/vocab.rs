//! Tag and attribute names read by agent-side parsers. Changing any of these breaks them.

pub const VIEW: &str = "view";
pub const LIST: &str = "list";
pub const ITEM_TYPE: &str = "item-type";
pub const DATA_VALUE: &str = "data-value";
pub const OPERATION: &str = "operation";
pub const NAME: &str = "name";
pub const TYPE: &str = "type";
pub const REQUIRED: &str = "required";
/// Emitted for `ParamProps::default_value`.
pub const DEFAULT: &str = "default";

pub const CONTAINER_TAG: &str = "div";
pub const ITEM_TAG: &str = "li";
pub const PARAM_TAG: &str = "param";
pub const DEFAULT_COLLECTION_TAG: &str = "ul";
pub const DEFAULT_OPERATION_TAG: &str = "button";
