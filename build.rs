use std::env;
use std::fs;
use std::path::Path;

// Variables que lee config.rs con option_env!
const CONFIG_KEYS: &[&str] = &[
    "BACKEND_URL",
    "ENVIRONMENT",
    "ENABLE_LOGGING",
    "CURRENT_USER_ID",
    "BOOKING_OPERATION",
];

fn main() {
    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    let env_file = Path::new(".env");
    if !env_file.exists() {
        println!("cargo:warning=No .env file found. Using default values (see .env.example).");
        return;
    }
    println!("cargo:rerun-if-changed=.env");

    let Ok(contents) = fs::read_to_string(env_file) else {
        println!("cargo:warning=Could not read .env");
        return;
    };

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        // KEY=VALUE; solo las claves conocidas y sin pisar el entorno real
        if let Some((key, value)) = line.split_once('=') {
            let key = key.trim();
            if !CONFIG_KEYS.contains(&key) {
                continue;
            }
            if env::var(key).is_err() {
                println!("cargo:rustc-env={}={}", key, value.trim());
            }
        }
    }
}
