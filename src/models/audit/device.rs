use serde::{Deserialize, Serialize};
use std::fmt;

// Emulated device a pass is measured with
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DeviceProfile {
    Mobile,
    Desktop,
}

impl DeviceProfile {
    /// Every profile, in the order pairs are audited.
    pub const ALL: [DeviceProfile; 2] = [DeviceProfile::Mobile, DeviceProfile::Desktop];

    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceProfile::Mobile => "mobile",
            DeviceProfile::Desktop => "desktop",
        }
    }
}

impl fmt::Display for DeviceProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
