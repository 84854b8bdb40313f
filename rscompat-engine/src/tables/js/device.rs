use crate::core::RuleDef;

pub(super) const RULES: &[RuleDef] = &[
    RuleDef::new("geolocation", "Geolocation", &[r"\bnavigator\.geolocation\b"]),
    RuleDef::new("notifications", "Web Notifications", &[r"\bNotification\.requestPermission\s*\(", r"\bnew\s+Notification\s*\("]),
    RuleDef::new("async-clipboard", "Asynchronous Clipboard API", &[r"\bnavigator\.clipboard\b"]),
    RuleDef::new("web-share", "Web Share API", &[r"\bnavigator\.share\s*\(", r"\bnavigator\.canShare\s*\("]),
    RuleDef::new("wake-lock", "Screen Wake Lock API", &[r"\bnavigator\.wakeLock\b"]),
    RuleDef::new("vibration", "Vibration API", &[r"\bnavigator\.vibrate\s*\("]),
    RuleDef::new("battery-status", "Battery Status API", &[r"\bnavigator\.getBattery\s*\("]),
    RuleDef::new("deviceorientation", "DeviceOrientation & DeviceMotion events", &[r"\bdevice(?:orientation|motion)\b", r"\bDevice(?:Orientation|Motion)Event\b"]),
    RuleDef::new("gamepad", "Gamepad API", &[r"\bnavigator\.getGamepads\s*\(", r"\bgamepadconnected\b"]),
    RuleDef::new("payment-request", "Payment Request API", &[r"\bnew\s+PaymentRequest\s*\("]),
    RuleDef::new("credential-management", "Credential Management API", &[r"\bnavigator\.credentials\b"]),
    RuleDef::new("webauthn", "Web Authentication API", &[r"\bPublicKeyCredential\b", r"\bpublicKey\s*:"]),
    RuleDef::new("webusb", "WebUSB", &[r"\bnavigator\.usb\b"]),
    RuleDef::new("web-bluetooth", "Web Bluetooth", &[r"\bnavigator\.bluetooth\b"]),
    RuleDef::new("web-serial", "Web Serial API", &[r"\bnavigator\.serial\b"]),
    RuleDef::new("webhid", "WebHID API", &[r"\bnavigator\.hid\b"]),
    RuleDef::new("webnfc", "Web NFC", &[r"\bnew\s+NDEFReader\s*\("]),
    RuleDef::new("permissions-api", "Permissions API", &[r"\bnavigator\.permissions\.query\s*\("]),
    RuleDef::new("mdn-api_idledetector", "Idle Detection API", &[r"\bnew\s+IdleDetector\s*\("]),
    RuleDef::new("online-status", "Online/offline status", &[r"\bnavigator\.onLine\b"]),
];
