use crate::core::RuleDef;

pub(super) const RULES: &[RuleDef] = &[
    RuleDef::new(
        "promises",
        "Promises",
        &[r"\bnew\s+Promise\s*\(", r"\bPromise\.(?:resolve|reject|all|race)\s*\(", r"\.then\s*\("],
    ),
    RuleDef::new("promise-finally", "Promise.prototype.finally", &[r"\.finally\s*\("]),
    RuleDef::new(
        "mdn-javascript_builtins_promise_allsettled",
        "Promise.allSettled()",
        &[r"\bPromise\.allSettled\s*\("],
    ),
    RuleDef::new("mdn-javascript_builtins_promise_any", "Promise.any()", &[r"\bPromise\.any\s*\("]),
    RuleDef::new(
        "es6-collections",
        "Map, Set, WeakMap and WeakSet",
        &[r"\bnew\s+(?:Map|Set|WeakMap|WeakSet)\s*\("],
    ),
    RuleDef::new("mdn-javascript_builtins_weakref", "WeakRef and FinalizationRegistry", &[r"\bnew\s+(?:WeakRef|FinalizationRegistry)\s*\("]),
    RuleDef::new("proxy", "Proxy object", &[r"\bnew\s+Proxy\s*\(", r"\bReflect\.[a-z]\w*\s*\("]),
    RuleDef::new("es6-symbol", "Symbol", &[r"\bSymbol\s*\(", r"\bSymbol\.(?:iterator|for|toPrimitive|hasInstance)\b"]),
    RuleDef::new(
        "es6-number",
        "ES6 Number",
        &[r"\bNumber\.(?:isInteger|isFinite|isNaN|isSafeInteger|EPSILON|MAX_SAFE_INTEGER|MIN_SAFE_INTEGER|parseFloat|parseInt)\b"],
    ),
    RuleDef::new("array-includes", "Array.prototype.includes", &[r"\.includes\s*\("]),
    RuleDef::new("array-find", "Array.prototype.find", &[r"\.find\s*\("]),
    RuleDef::new("array-find-index", "Array.prototype.findIndex", &[r"\.findIndex\s*\("]),
    RuleDef::new("array-flat", "flat & flatMap array methods", &[r"\.flat(?:Map)?\s*\("]),
    RuleDef::new("mdn-javascript_builtins_array_at", "Array.prototype.at()", &[r"\.at\s*\(\s*-?\d"]),
    RuleDef::new("mdn-javascript_builtins_array_findlast", "Array.prototype.findLast()", &[r"\.findLast(?:Index)?\s*\("]),
    RuleDef::new(
        "mdn-javascript_builtins_array_tosorted",
        "Change array by copy (toSorted, toReversed, toSpliced, with)",
        &[r"\.(?:toSorted|toReversed|toSpliced)\s*\("],
    ),
    RuleDef::new("mdn-javascript_builtins_array_from", "Array.from()", &[r"\bArray\.(?:from|of)\s*\("]),
    RuleDef::new("object-entries", "Object.entries", &[r"\bObject\.entries\s*\("]),
    RuleDef::new("object-values", "Object.values method", &[r"\bObject\.values\s*\("]),
    RuleDef::new("mdn-javascript_builtins_object_fromentries", "Object.fromEntries()", &[r"\bObject\.fromEntries\s*\("]),
    RuleDef::new("mdn-javascript_builtins_object_hasown", "Object.hasOwn()", &[r"\bObject\.hasOwn\s*\("]),
    RuleDef::new("mdn-javascript_builtins_object_groupby", "Object.groupBy() / Map.groupBy()", &[r"\b(?:Object|Map)\.groupBy\s*\("]),
    RuleDef::new("padstring", "String.prototype.padStart(), String.prototype.padEnd()", &[r"\.pad(?:Start|End)\s*\("]),
    RuleDef::new("mdn-javascript_builtins_string_replaceall", "String.prototype.replaceAll()", &[r"\.replaceAll\s*\("]),
    RuleDef::new("mdn-javascript_builtins_string_matchall", "String.prototype.matchAll()", &[r"\.matchAll\s*\("]),
    RuleDef::new("mdn-javascript_builtins_globalthis", "globalThis", &[r"\bglobalThis\b"]),
    RuleDef::new("internationalization", "Internationalization API", &[r"\bIntl\.(?:DateTimeFormat|NumberFormat|Collator)\b"]),
    RuleDef::new("intl-pluralrules", "Intl.PluralRules API", &[r"\bIntl\.PluralRules\b"]),
    RuleDef::new(
        "mdn-javascript_builtins_intl_relativetimeformat",
        "Intl.RelativeTimeFormat",
        &[r"\bIntl\.RelativeTimeFormat\b"],
    ),
    RuleDef::new("typedarrays", "Typed Arrays", &[r"\b(?:Uint8|Uint8Clamped|Int8|Uint16|Int16|Uint32|Int32|Float32|Float64|BigInt64|BigUint64)Array\b", r"\bnew\s+(?:ArrayBuffer|DataView)\s*\("]),
    RuleDef::new("sharedarraybuffer", "Shared Array Buffer", &[r"\bSharedArrayBuffer\b", r"\bAtomics\.\w+"]),
    RuleDef::new("wasm", "WebAssembly", &[r"\bWebAssembly\.\w+"]),
    RuleDef::new("json", "JSON parsing", &[r"\bJSON\.(?:parse|stringify)\s*\("]),
    RuleDef::new("structuredclone", "structuredClone()", &[r"\bstructuredClone\s*\("]),
    RuleDef::new("textencoder", "TextEncoder & TextDecoder", &[r"\bnew\s+Text(?:En|De)coder(?:Stream)?\s*\("]),
    RuleDef::new("atob-btoa", "Base64 encoding and decoding", &[r"\b(?:atob|btoa)\s*\("]),
    RuleDef::new("requestanimationframe", "requestAnimationFrame", &[r"\brequestAnimationFrame\s*\("]),
    RuleDef::new("requestidlecallback", "requestIdleCallback", &[r"\brequestIdleCallback\s*\("]),
    RuleDef::new("high-resolution-time", "High Resolution Time API", &[r"\bperformance\.now\s*\("]),
    RuleDef::new("user-timing", "User Timing API", &[r"\bperformance\.(?:mark|measure)\s*\("]),
    RuleDef::new("mdn-api_queuemicrotask", "queueMicrotask()", &[r"\bqueueMicrotask\s*\("]),
    RuleDef::new("webworkers", "Web Workers", &[r"\bnew\s+Worker\s*\("]),
    RuleDef::new("sharedworkers", "Shared Web Workers", &[r"\bnew\s+SharedWorker\s*\("]),
    RuleDef::new("serviceworkers", "Service Workers", &[r"\bnavigator\.serviceWorker\b"]),
    RuleDef::new("channel-messaging", "Channel messaging", &[r"\bnew\s+MessageChannel\s*\("]),
    RuleDef::new("broadcastchannel", "BroadcastChannel", &[r"\bnew\s+BroadcastChannel\s*\("]),
    RuleDef::new("crypto", "Web Cryptography", &[r"\bcrypto\.subtle\b", r"\bcrypto\.getRandomValues\s*\("]),
    RuleDef::new("mdn-api_crypto_randomuuid", "crypto.randomUUID()", &[r"\bcrypto\.randomUUID\s*\("]),
];
