/// Fixed device dimensions for the frame tool's submenu.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(super) struct DevicePreset {
    pub id: &'static str,
    pub label: &'static str,
    pub width: f32,
    pub height: f32,
}

const fn preset(id: &'static str, label: &'static str, width: f32, height: f32) -> DevicePreset {
    DevicePreset {
        id,
        label,
        width,
        height,
    }
}

const IPHONE: &[DevicePreset] = &[
    preset("iphone-16-pro-max", "iPhone 16 Pro Max", 440.0, 956.0),
    preset("iphone-16-plus", "iPhone 16 Plus", 430.0, 932.0),
    preset("iphone-16-pro", "iPhone 16 Pro", 402.0, 874.0),
    preset("iphone-16", "iPhone 16", 393.0, 852.0),
    preset("iphone-14-15-pro", "iPhone 14 & 15 Pro", 430.0, 932.0),
    preset("iphone-14-15-pro-standard", "iPhone 14 & 15 Pro", 393.0, 852.0),
    preset("iphone-13-14", "iPhone 13 & 14", 390.0, 844.0),
    preset("iphone-14-plus", "iPhone 14 Plus", 428.0, 926.0),
    preset("iphone-13-pro-max", "iPhone 13 Pro Max", 428.0, 926.0),
    preset("iphone-13-mini", "iPhone 13 mini", 375.0, 812.0),
    preset("iphone-11-pro-max", "iPhone 11 Pro Max", 414.0, 896.0),
    preset("iphone-11-pro-x", "iPhone 11 Pro / X", 375.0, 812.0),
    preset("iphone-se", "iPhone SE", 320.0, 568.0),
    preset("iphone-8-plus", "iPhone 8 Plus", 414.0, 736.0),
    preset("iphone-8", "iPhone 8", 375.0, 667.0),
];

const ANDROID: &[DevicePreset] = &[
    preset("android-small", "Android Small", 360.0, 640.0),
    preset("android-large", "Android Large", 360.0, 800.0),
];

const IPAD: &[DevicePreset] = &[
    preset("ipad-mini-97", "iPad mini 9.7\"", 768.0, 1024.0),
    preset("ipad-mini-83", "iPad mini 8.3\"", 744.0, 1133.0),
    preset("ipad-pro-11", "iPad Pro 11\"", 834.0, 1194.0),
    preset("ipad-pro-129", "iPad Pro 12.9\"", 1024.0, 1366.0),
];

const WEB: &[DevicePreset] = &[
    preset("web-1920", "Web 1920", 1920.0, 1080.0),
    preset("web-1440", "Web 1440", 1440.0, 900.0),
    preset("web-1280", "Web 1280", 1280.0, 800.0),
];

const MACBOOK: &[DevicePreset] = &[
    preset("macbook-air", "MacBook Air", 1280.0, 832.0),
    preset("macbook-pro-14", "MacBook Pro 14\"", 1512.0, 982.0),
    preset("macbook-pro-16", "MacBook Pro 16\"", 1728.0, 1117.0),
];

const DESKTOP: &[DevicePreset] = &[
    preset("imac", "iMac", 1280.0, 720.0),
    preset("tv", "TV", 1280.0, 720.0),
];

const APPLE_WATCH: &[DevicePreset] = &[
    preset("apple-watch-49mm", "Apple Watch 49mm", 205.0, 251.0),
    preset("apple-watch-45mm", "Apple Watch 45mm", 198.0, 242.0),
    preset("apple-watch-44mm", "Apple Watch 44mm", 184.0, 224.0),
    preset("apple-watch-42mm", "Apple Watch 42mm", 156.0, 195.0),
    preset("apple-watch-41mm", "Apple Watch 41mm", 176.0, 215.0),
    preset("apple-watch-40mm", "Apple Watch 40mm", 162.0, 197.0),
    preset("apple-watch-38mm", "Apple Watch 38mm", 136.0, 170.0),
];

pub(super) const PRESET_GROUPS: &[(&str, &[DevicePreset])] = &[
    ("iPhone", IPHONE),
    ("Android", ANDROID),
    ("iPad", IPAD),
    ("Web", WEB),
    ("MacBook", MACBOOK),
    ("Desktop", DESKTOP),
    ("Apple Watch", APPLE_WATCH),
];

/// Fallback frame when no preset is configured.
pub(super) const DEFAULT_FRAME: DevicePreset = preset("iphone-14-pro", "iPhone 14 Pro", 375.0, 812.0);

pub(super) fn find_preset(id: &str) -> Option<&'static DevicePreset> {
    PRESET_GROUPS
        .iter()
        .flat_map(|(_, group)| group.iter())
        .find(|p| p.id == id)
}

pub(super) fn corner_radius_for(id: &str) -> f32 {
    if id.starts_with("apple-watch-") {
        12.0
    } else {
        8.0
    }
}
