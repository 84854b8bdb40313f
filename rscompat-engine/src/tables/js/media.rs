use crate::core::RuleDef;

pub(super) const RULES: &[RuleDef] = &[
    RuleDef::new("audio-api", "Web Audio API", &[r"\bnew\s+(?:webkit)?AudioContext\s*\(", r"\bnew\s+OfflineAudioContext\s*\("]),
    RuleDef::new("stream", "getUserMedia/Stream API", &[r"\bgetUserMedia\s*\("]),
    RuleDef::new("mdn-api_mediadevices_getdisplaymedia", "Screen Capture API", &[r"\bgetDisplayMedia\s*\("]),
    RuleDef::new("mediarecorder", "MediaRecorder API", &[r"\bnew\s+MediaRecorder\s*\("]),
    RuleDef::new("media-session-api", "Media Session API", &[r"\bnavigator\.mediaSession\b"]),
    RuleDef::new("mediasource", "Media Source Extensions", &[r"\bnew\s+MediaSource\s*\("]),
    RuleDef::new("picture-in-picture", "Picture-in-Picture", &[r"\.requestPictureInPicture\s*\("]),
    RuleDef::new("speech-recognition", "Speech Recognition API", &[r"\b(?:webkit)?SpeechRecognition\b"]),
    RuleDef::new("speech-synthesis", "Speech Synthesis API", &[r"\bspeechSynthesis\b", r"\bSpeechSynthesisUtterance\b"]),
    RuleDef::new("webgl", "WebGL - 3D Canvas graphics", &[r#"getContext\s*\(\s*["'](?:webgl|experimental-webgl)["']"#]),
    RuleDef::new("webgl2", "WebGL 2.0", &[r#"getContext\s*\(\s*["']webgl2["']"#]),
    RuleDef::new("webgpu", "WebGPU", &[r"\bnavigator\.gpu\b"]),
    RuleDef::new("offscreencanvas", "OffscreenCanvas", &[r"\bnew\s+OffscreenCanvas\s*\(", r"\.transferControlToOffscreen\s*\("]),
    RuleDef::new("createimagebitmap", "createImageBitmap", &[r"\bcreateImageBitmap\s*\("]),
    RuleDef::new("path2d", "Path2D", &[r"\bnew\s+Path2D\s*\("]),
    RuleDef::new("webcodecs", "WebCodecs API", &[r"\bnew\s+(?:Video|Audio)(?:Encoder|Decoder)\s*\("]),
    RuleDef::new("webvr", "WebXR Device API", &[r"\bnavigator\.xr\b"]),
];
