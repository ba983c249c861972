pub use crate::error::{Error, SlResult};
pub use crate::types::{ReadonlyLevel, SettingChange};
pub use crate::value::SettingValue;

pub use tracing::{debug, info, warn};

// vim: ts=4
