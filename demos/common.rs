use blum::errors::BlumResult;
use blum::tonlib_core::TonAddress;
use blum::types::parse_address;
use log::LevelFilter;
use log4rs::Config;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Root};
use std::sync::Once;

pub const DEFAULT_JETTON: &str = "EQCmF9eJucr_iW5Xpk9Au7l-jtRWRCOxTmNESSlbJ7F-8IdI";

static LOG: Once = Once::new();

pub fn init_logging() {
    LOG.call_once(|| {
        let stderr = ConsoleAppender::builder()
            .target(Target::Stderr)
            .encoder(Box::new(log4rs::encode::pattern::PatternEncoder::new(
                "{d(%Y-%m-%d %H:%M:%S%.6f)} {T:>15.15} {h({l:>5.5})} {t}:{L} - {m}{n}",
            )))
            .build();

        let config = Config::builder()
            .appender(Appender::builder().build("stderr", Box::new(stderr)))
            .build(Root::builder().appender("stderr").build(LevelFilter::Info));
        match config {
            Ok(config) => {
                if let Err(err) = log4rs::init_config(config) {
                    eprintln!("fail to init logging: {err}");
                }
            }
            Err(err) => eprintln!("fail to build logging config: {err}"),
        }
    })
}

pub fn env_or(name: &str, default: &str) -> String { std::env::var(name).unwrap_or_else(|_| default.to_string()) }

pub fn env_address(name: &str, default: &str) -> BlumResult<TonAddress> { parse_address(&env_or(name, default)) }
