// tests/config_tests.rs
use std::io::Write;

use cryptixel_core::config;

// The global config is process-wide and loaded once, so everything that
// depends on CRYPTIXEL_CONFIG lives in this single test.
#[test]
fn test_config_loads_from_toml_file() {
    let mut file = tempfile::NamedTempFile::new().expect("create temp config");
    writeln!(
        file,
        r#"
[security]
embed_password = false
password_length = 16
"#
    )
    .expect("write temp config");

    std::env::set_var("CRYPTIXEL_CONFIG", file.path());

    let conf = config::load();
    assert!(!conf.security.embed_password);
    assert_eq!(conf.security.password_length, 16);
}
