use bsmart::config::Config;
use bsmart::constants::CONFIG_FILE;

pub fn write_config_to_file(config: &Config) {
    if let Some(dir) = std::path::Path::new(CONFIG_FILE).parent() {
        std::fs::create_dir_all(dir).unwrap();
    }
    let json = serde_json::to_string(&config).unwrap();
    std::fs::write(CONFIG_FILE, json).unwrap();

    assert_eq!(Config::from_file(CONFIG_FILE).unwrap(), *config);
}
