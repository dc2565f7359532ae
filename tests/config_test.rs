use std::env;

use accounts_backend::config::Config;

// Single test so the environment is never mutated concurrently.
#[test]
fn config_comes_from_the_environment() {
    env::remove_var("SERVER_ADDRESS");
    env::remove_var("DATABASE_URL");
    env::remove_var("DB_MAX_CONNECTIONS");
    assert!(Config::from_env().is_err());

    env::set_var("SERVER_ADDRESS", "127.0.0.1:3000");
    env::set_var("DATABASE_URL", "postgres://localhost/accounts");
    env::set_var("DB_MAX_CONNECTIONS", "5");

    let config = Config::from_env().expect("config from env");
    assert_eq!("127.0.0.1:3000", config.server_address);
    assert_eq!("postgres://localhost/accounts", config.database_url);
    assert_eq!(5, config.db_max_connections);

    env::set_var("DB_MAX_CONNECTIONS", "not-a-number");
    assert!(Config::from_env().is_err());
}
