use crate::core::RuleDef;

pub(super) const RULES: &[RuleDef] = &[
    RuleDef::new("fetch", "Fetch", &[r"\bfetch\s*\("]).with_keywords(&["http", "request"]),
    RuleDef::new("abortcontroller", "AbortController & AbortSignal", &[r"\bnew\s+AbortController\s*\(", r"\bAbortSignal\.(?:timeout|any|abort)\s*\("]),
    RuleDef::new("xhr2", "XMLHttpRequest advanced features", &[r"\bnew\s+XMLHttpRequest\s*\("]),
    RuleDef::new("websockets", "Web Sockets", &[r"\bnew\s+WebSocket\s*\("]),
    RuleDef::new("eventsource", "Server-sent events", &[r"\bnew\s+EventSource\s*\("]),
    RuleDef::new("beacon", "Beacon API", &[r"\bnavigator\.sendBeacon\s*\("]),
    RuleDef::new("url", "URL API", &[r"\bnew\s+URL\s*\("]),
    RuleDef::new("urlsearchparams", "URLSearchParams", &[r"\bnew\s+URLSearchParams\s*\("]),
    RuleDef::new("streams", "Streams", &[r"\bnew\s+(?:ReadableStream|WritableStream|TransformStream)\s*\("]),
    RuleDef::new("mdn-api_compressionstream", "Compression Streams API", &[r"\bnew\s+(?:Compression|Decompression)Stream\s*\("]),
    RuleDef::new("rtcpeerconnection", "WebRTC Peer-to-peer connections", &[r"\bnew\s+RTCPeerConnection\s*\("]),
    RuleDef::new("webtransport", "WebTransport", &[r"\bnew\s+WebTransport\s*\("]),
    RuleDef::new("push-api", "Push API", &[r"\bpushManager\.(?:subscribe|getSubscription)\s*\("]),
    RuleDef::new("background-sync", "Background Sync API", &[r"\bsync\.register\s*\("]),
];
