use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key: &str| vars.get(key).cloned()
}

#[test]
fn from_lookup_defaults() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg.addr, SocketAddr::new(DEFAULT_BIND_ADDR, DEFAULT_PORT));
    assert_eq!(cfg.public_dir, None);
}

#[test]
fn from_lookup_reads_port_and_host() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("PORT", "8080"), ("BIND_ADDR", "127.0.0.1")])).unwrap();
    assert_eq!(cfg.addr, "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
}

#[test]
fn from_lookup_trims_port() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("PORT", " 4000 ")])).unwrap();
    assert_eq!(cfg.addr.port(), 4000);
}

#[test]
fn from_lookup_rejects_bad_port() {
    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "http")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("http".into()));

    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "70000")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("70000".into()));
}

#[test]
fn from_lookup_rejects_bad_bind_addr() {
    let err = ServerConfig::from_lookup(lookup_from(&[("BIND_ADDR", "localhost")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidBindAddr("localhost".into()));
    assert_eq!(err.to_string(), "invalid BIND_ADDR: localhost");
}

#[test]
fn public_dir_override_wins_over_site_root() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("PUBLIC_DIR", "/srv/assets")])).unwrap();
    assert_eq!(cfg.public_dir_or(Path::new("target/site")), PathBuf::from("/srv/assets"));
}

#[test]
fn blank_public_dir_falls_back_to_site_root() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("PUBLIC_DIR", "  ")])).unwrap();
    assert_eq!(cfg.public_dir_or(Path::new("target/site")), PathBuf::from("target/site"));
}
