use crate::core::RuleDef;

pub(super) const RULES: &[RuleDef] = &[
    RuleDef::new("namevalue-storage", "Web Storage - name/value pairs", &[r"\b(?:localStorage|sessionStorage)\b"]),
    RuleDef::new("indexeddb", "IndexedDB", &[r"\bindexedDB\.open\s*\(", r"\bIDB(?:Database|ObjectStore|KeyRange)\b"]),
    RuleDef::new("indexeddb2", "IndexedDB 2.0", &[r"\.getAll(?:Keys)?\s*\("]),
    RuleDef::new("fileapi", "File API", &[r"\bnew\s+(?:File|Blob)\s*\("]),
    RuleDef::new("filereader", "FileReader API", &[r"\bnew\s+FileReader\s*\("]),
    RuleDef::new("native-filesystem-api", "File System Access API", &[r"\bshow(?:Open|Save)FilePicker\s*\(", r"\bshowDirectoryPicker\s*\("]),
    RuleDef::new("mdn-api_storagemanager", "Storage API (navigator.storage)", &[r"\bnavigator\.storage\.\w+"]),
    RuleDef::new("mdn-api_cache", "Cache API", &[r"\bcaches\.(?:open|match|keys|delete|has)\s*\("]),
    RuleDef::new("cookie-store-api", "Cookie Store API", &[r"\bcookieStore\.\w+"]),
];
