use ipdns_domain::{CliOverrides, Config, ConfigError, Protocol};

mod helpers;
use helpers::ConfigBuilder;

#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.server.bind_address, "::");
    assert_eq!(config.server.port, 53);
    assert_eq!(config.server.protocols, vec![Protocol::Tcp, Protocol::Udp]);
    assert_eq!(config.server.domains, vec![".".to_string()]);
    assert_eq!(config.zone.ttl, 60);
    assert!(config.zone.nameservers.is_empty());
    assert!(config.zone.soa.mbox.is_none());
    assert!(config.zone.soa.serial.is_none());
    assert_eq!(config.zone.soa.refresh, 3600);
    assert_eq!(config.zone.soa.retry, 900);
    assert_eq!(config.zone.soa.expire, 604_800);
    assert_eq!(config.zone.soa.minttl, 3600);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_config_from_toml() {
    let toml_str = r#"
        [server]
        bind_address = "127.0.0.1"
        port = 5353
        protocols = ["udp"]
        domains = ["ip.example.com", "ip.example.net"]

        [zone]
        ttl = 300
        nameservers = ["ns1.example.com", "ns2.example.com"]

        [zone.soa]
        mbox = "hostmaster@example.com"
        serial = 42
        retry = 600

        [logging]
        level = "debug"
    "#;

    let config = Config::from_toml(toml_str).unwrap();

    assert_eq!(config.server.bind_address, "127.0.0.1");
    assert_eq!(config.server.port, 5353);
    assert_eq!(config.server.protocols, vec![Protocol::Udp]);
    assert_eq!(config.server.domains.len(), 2);
    assert_eq!(config.zone.ttl, 300);
    assert_eq!(config.zone.nameservers.len(), 2);
    assert_eq!(config.zone.soa.mbox.as_deref(), Some("hostmaster@example.com"));
    assert_eq!(config.zone.soa.serial, Some(42));
    assert_eq!(config.zone.soa.retry, 600);
    assert_eq!(config.zone.soa.refresh, 3600);
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn test_config_partial_toml_uses_defaults() {
    let config = Config::from_toml("[zone]\nttl = 10\n").unwrap();

    assert_eq!(config.zone.ttl, 10);
    assert_eq!(config.server.port, 53);
    assert_eq!(config.zone.soa.expire, 604_800);
}

#[test]
fn test_config_deserialization_ignores_unknown_fields() {
    let config = Config::from_toml("[server]\nweb_port = 8080\n");
    assert!(config.is_ok(), "unknown keys should be ignored: {:?}", config.err());
}

#[test]
fn test_config_rejects_unknown_protocol() {
    let result = Config::from_toml("[server]\nprotocols = [\"sctp\"]\n");
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_cli_overrides_replace_values() {
    let mut config = Config::default();
    config.apply_cli_overrides(CliOverrides {
        bind_address: Some("::1".to_string()),
        port: Some(5300),
        protocols: Some(vec![Protocol::Udp]),
        domains: Some(vec!["ip.test".to_string()]),
        ttl: Some(5),
        nameservers: Some(vec!["ns.ip.test".to_string()]),
        mbox: Some("root@ip.test".to_string()),
        serial: Some(7),
        refresh: Some(1),
        retry: Some(2),
        expire: Some(3),
        minttl: Some(4),
        log_level: Some("warn".to_string()),
    });

    assert_eq!(config.server.bind_address, "::1");
    assert_eq!(config.server.port, 5300);
    assert_eq!(config.server.protocols, vec![Protocol::Udp]);
    assert_eq!(config.server.domains, vec!["ip.test".to_string()]);
    assert_eq!(config.zone.ttl, 5);
    assert_eq!(config.zone.nameservers, vec!["ns.ip.test".to_string()]);
    assert_eq!(config.zone.soa.mbox.as_deref(), Some("root@ip.test"));
    assert_eq!(config.zone.soa.serial, Some(7));
    assert_eq!(config.zone.soa.refresh, 1);
    assert_eq!(config.zone.soa.retry, 2);
    assert_eq!(config.zone.soa.expire, 3);
    assert_eq!(config.zone.soa.minttl, 4);
    assert_eq!(config.logging.level, "warn");
}

#[test]
fn test_empty_list_overrides_keep_existing_values() {
    let mut config = Config::default();
    config.apply_cli_overrides(CliOverrides {
        protocols: Some(vec![]),
        domains: Some(vec![]),
        nameservers: Some(vec![]),
        mbox: Some(String::new()),
        ..Default::default()
    });

    assert_eq!(config.server.protocols, vec![Protocol::Tcp, Protocol::Udp]);
    assert_eq!(config.server.domains, vec![".".to_string()]);
    assert!(config.zone.nameservers.is_empty());
    assert!(config.zone.soa.mbox.is_none());
}

#[test]
fn test_pin_serial_only_fills_missing_serial() {
    let mut config = ConfigBuilder::new().serial(None).build();
    config.pin_serial();
    assert!(config.zone.soa.serial.unwrap() > 0);

    let mut config = ConfigBuilder::new().serial(Some(99)).build();
    config.pin_serial();
    assert_eq!(config.zone.soa.serial, Some(99));
}

#[test]
fn test_validate_accepts_builder_config() {
    assert!(ConfigBuilder::new().build().validate().is_ok());
}

#[test]
fn test_validate_requires_domain_without_mbox() {
    let config = ConfigBuilder::new().domains(&["."]).build();
    assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));

    let config = ConfigBuilder::new().domains(&[""]).build();
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_root_domain_with_mbox() {
    let config = ConfigBuilder::new()
        .domains(&["."])
        .mbox("hostmaster@example.com")
        .build();
    assert!(config.validate().is_ok());
}

#[test]
fn test_validate_rejects_port_zero() {
    let config = ConfigBuilder::new().bind("127.0.0.1", 0).build();
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_rejects_bad_bind_address() {
    let config = ConfigBuilder::new().bind("localhost", 53).build();
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_rejects_empty_lists() {
    let config = ConfigBuilder::new().protocols(&[]).build();
    assert!(config.validate().is_err());

    let config = ConfigBuilder::new().domains(&[]).build();
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_rejects_malformed_names() {
    let config = ConfigBuilder::new().domains(&["bad..example.com"]).build();
    assert!(config.validate().is_err());

    let config = ConfigBuilder::new().nameservers(&["ns1..example.com"]).build();
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_rejects_soa_timers_beyond_i32() {
    let mut config = ConfigBuilder::new().build();
    config.zone.soa.expire = u32::MAX;
    assert!(config.validate().is_err());
}
