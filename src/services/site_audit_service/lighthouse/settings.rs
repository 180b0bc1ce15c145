use crate::models::DeviceProfile;

pub const ONLY_CATEGORIES: [&str; 4] = ["performance", "seo", "accessibility", "best-practices"];

/// Device-specific part of the Lighthouse settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingsPatch {
    pub form_factor: DeviceProfile,
    pub screen_emulation_disabled: bool,
}

pub fn device_patch(device: DeviceProfile) -> SettingsPatch {
    match device {
        DeviceProfile::Mobile => SettingsPatch {
            form_factor: DeviceProfile::Mobile,
            screen_emulation_disabled: false,
        },
        DeviceProfile::Desktop => SettingsPatch {
            form_factor: DeviceProfile::Desktop,
            screen_emulation_disabled: true,
        },
    }
}

/// Settings for one pass: the fixed base (default config, no throttling,
/// storage kept between passes, four categories) plus the device patch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditSettings {
    pub throttling_method: &'static str,
    pub disable_storage_reset: bool,
    pub only_categories: &'static [&'static str],
    pub form_factor: DeviceProfile,
    pub screen_emulation_disabled: bool,
}

impl AuditSettings {
    pub fn base() -> Self {
        Self {
            throttling_method: "provided",
            disable_storage_reset: true,
            only_categories: &ONLY_CATEGORIES,
            form_factor: DeviceProfile::Mobile,
            screen_emulation_disabled: false,
        }
    }

    pub fn apply(mut self, patch: SettingsPatch) -> Self {
        self.form_factor = patch.form_factor;
        self.screen_emulation_disabled = patch.screen_emulation_disabled;
        self
    }

    pub fn for_device(device: DeviceProfile) -> Self {
        Self::base().apply(device_patch(device))
    }

    /// Lighthouse CLI flags expressing these settings.
    pub fn cli_args(&self) -> Vec<String> {
        let mut args = vec![
            format!("--throttling-method={}", self.throttling_method),
            format!("--only-categories={}", self.only_categories.join(",")),
            format!("--form-factor={}", self.form_factor),
        ];
        if self.disable_storage_reset {
            args.push("--disable-storage-reset".to_string());
        }
        if self.screen_emulation_disabled {
            args.push("--screenEmulation.disabled".to_string());
        }
        args
    }
}
